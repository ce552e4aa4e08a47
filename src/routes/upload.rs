use axum::{
    extract::{Multipart, Path, State},
    http::{header, StatusCode},
    response::{IntoResponse, Json, Response},
};
use serde::Serialize;

use crate::error::AppError;
use crate::state::AppState;

const IMAGE_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "webp", "gif", "avif", "svg"];

/// Upload discriminators that constrain the accepted file extension.
/// `*-cv` uploads must be PDFs; the rest must be images. The check is by
/// extension only, there is no content sniffing.
const IMAGE_KINDS: &[&str] = &["work", "team", "founder", "cat"];
const CV_KINDS: &[&str] = &["team-cv", "founder-cv"];

#[derive(Serialize, utoipa::ToSchema)]
pub struct UploadResponse {
    filename: String,
    url: String,
}

fn extension(filename: &str) -> String {
    std::path::Path::new(filename)
        .extension()
        .and_then(std::ffi::OsStr::to_str)
        .unwrap_or("bin")
        .to_lowercase()
}

fn validate_kind(kind: &str, ext: &str) -> Result<(), AppError> {
    if CV_KINDS.contains(&kind) {
        if ext != "pdf" {
            return Err(AppError::BadRequest(format!(
                "Upload type '{}' requires a PDF file",
                kind
            )));
        }
        return Ok(());
    }
    if IMAGE_KINDS.contains(&kind) {
        if !IMAGE_EXTENSIONS.contains(&ext) {
            return Err(AppError::BadRequest(format!(
                "Upload type '{}' requires an image file",
                kind
            )));
        }
        return Ok(());
    }
    Err(AppError::BadRequest(format!("Unknown upload type '{}'", kind)))
}

fn content_type_for(ext: &str) -> &'static str {
    match ext {
        "jpg" | "jpeg" => "image/jpeg",
        "png" => "image/png",
        "webp" => "image/webp",
        "gif" => "image/gif",
        "avif" => "image/avif",
        "svg" => "image/svg+xml",
        "pdf" => "application/pdf",
        "mp4" => "video/mp4",
        _ => "application/octet-stream",
    }
}

#[utoipa::path(
    post,
    path = "/upload",
    request_body(content = Vec<u8>, content_type = "multipart/form-data"),
    responses(
        (status = 201, description = "File stored", body = UploadResponse),
        (status = 400, description = "Missing file field or unsupported extension"),
        (status = 401, description = "Missing or invalid token")
    ),
    security(("bearer_auth" = [])),
    tag = "Uploads"
)]
pub async fn upload_file(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<(StatusCode, Json<UploadResponse>), AppError> {
    let mut file: Option<(String, axum::body::Bytes)> = None;
    let mut kind: Option<String> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|_| AppError::BadRequest("Invalid multipart data".to_string()))?
    {
        match field.name() {
            Some("file") => {
                let original = field.file_name().unwrap_or("unknown").to_string();
                let data = field.bytes().await.map_err(|_| {
                    AppError::BadRequest("Failed to read file bytes".to_string())
                })?;
                file = Some((original, data));
            }
            Some("type") => {
                let value = field.text().await.map_err(|_| {
                    AppError::BadRequest("Invalid multipart data".to_string())
                })?;
                kind = Some(value);
            }
            _ => {}
        }
    }

    let (original, data) = file
        .ok_or_else(|| AppError::BadRequest("No file field found".to_string()))?;
    let ext = extension(&original);

    // All validation happens before anything touches the disk.
    if let Some(kind) = &kind {
        validate_kind(kind, &ext)?;
    }

    let filename = format!("{}.{}", chrono::Utc::now().timestamp_millis(), ext);
    tokio::fs::create_dir_all(&state.config.uploads_dir).await?;
    tokio::fs::write(state.config.uploads_dir.join(&filename), &data).await?;

    tracing::info!(
        "stored upload '{}' as '{}' ({} bytes)",
        original,
        filename,
        data.len()
    );

    let url = format!("/uploads/{}", filename);
    Ok((StatusCode::CREATED, Json(UploadResponse { filename, url })))
}

#[utoipa::path(
    get,
    path = "/uploads/{filename}",
    params(("filename" = String, Path, description = "Stored filename")),
    responses(
        (status = 200, description = "File bytes"),
        (status = 400, description = "Invalid filename"),
        (status = 404, description = "File not found")
    ),
    tag = "Uploads"
)]
pub async fn serve_upload(
    State(state): State<AppState>,
    Path(filename): Path<String>,
) -> Result<Response, AppError> {
    if filename.contains('/') || filename.contains('\\') || filename.contains("..") {
        return Err(AppError::BadRequest("Invalid filename".to_string()));
    }

    let path = state.config.uploads_dir.join(&filename);
    let bytes = match tokio::fs::read(&path).await {
        Ok(bytes) => bytes,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            return Err(AppError::NotFound("File not found".to_string()));
        }
        Err(e) => return Err(e.into()),
    };

    let content_type = content_type_for(&extension(&filename));
    Ok(([(header::CONTENT_TYPE, content_type)], bytes).into_response())
}
