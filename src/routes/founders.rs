use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
};
use serde::Deserialize;
use uuid::Uuid;

use crate::error::AppError;
use crate::locale::LocalizedText;
use crate::models::Founder;
use crate::repository;
use crate::state::AppState;

#[utoipa::path(
    get,
    path = "/founders",
    responses((status = 200, description = "Founders in stored order", body = [Founder])),
    tag = "Founders"
)]
pub async fn list_founders(State(state): State<AppState>) -> Json<Vec<Founder>> {
    let founders: Vec<Founder> = state.store.load_or_default(Founder::FILE).await;
    Json(founders)
}

#[derive(Deserialize, utoipa::ToSchema)]
pub struct CreateFounderRequest {
    name: String,
    title: LocalizedText,
    about: LocalizedText,
    cv: Option<LocalizedText>,
    image: Option<String>,
    linkedin: Option<String>,
    imdb: Option<String>,
}

#[utoipa::path(
    post,
    path = "/founders",
    request_body = CreateFounderRequest,
    responses(
        (status = 201, description = "Founder created", body = Founder),
        (status = 400, description = "Invalid payload"),
        (status = 401, description = "Missing or invalid token")
    ),
    security(("bearer_auth" = [])),
    tag = "Founders"
)]
pub async fn create_founder(
    State(state): State<AppState>,
    Json(payload): Json<CreateFounderRequest>,
) -> Result<(StatusCode, Json<Founder>), AppError> {
    if payload.name.trim().is_empty() {
        return Err(AppError::BadRequest("Name must not be empty".to_string()));
    }

    let mut founders: Vec<Founder> = state.store.load(Founder::FILE).await?;
    let mut founder = Founder {
        id: Uuid::new_v4(),
        name: payload.name,
        title: payload.title,
        about: payload.about,
        cv: payload.cv,
        image: payload.image,
        linkedin: payload.linkedin,
        imdb: payload.imdb,
    };
    founder.normalize(state.config.default_locale);

    founders.push(founder.clone());
    state.store.save(Founder::FILE, &founders).await?;

    tracing::info!("created founder '{}' ({})", founder.name, founder.id);
    Ok((StatusCode::CREATED, Json(founder)))
}

#[derive(Deserialize, utoipa::ToSchema)]
pub struct UpdateFounderRequest {
    name: Option<String>,
    title: Option<LocalizedText>,
    about: Option<LocalizedText>,
    cv: Option<LocalizedText>,
    image: Option<String>,
    linkedin: Option<String>,
    imdb: Option<String>,
}

#[utoipa::path(
    put,
    path = "/founders/{id}",
    params(("id" = Uuid, Path, description = "Founder id")),
    request_body = UpdateFounderRequest,
    responses(
        (status = 200, description = "Founder updated", body = Founder),
        (status = 404, description = "Founder not found"),
        (status = 401, description = "Missing or invalid token")
    ),
    security(("bearer_auth" = [])),
    tag = "Founders"
)]
pub async fn update_founder(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateFounderRequest>,
) -> Result<Json<Founder>, AppError> {
    let mut founders: Vec<Founder> = state.store.load(Founder::FILE).await?;
    let founder = repository::find_mut(&mut founders, id)
        .ok_or_else(|| AppError::NotFound("Founder not found".to_string()))?;

    if let Some(name) = payload.name {
        founder.name = name;
    }
    if let Some(title) = payload.title {
        founder.title = title;
    }
    if let Some(about) = payload.about {
        founder.about = about;
    }
    if let Some(cv) = payload.cv {
        founder.cv = Some(cv);
    }
    if let Some(image) = payload.image {
        founder.image = Some(image);
    }
    if let Some(linkedin) = payload.linkedin {
        founder.linkedin = Some(linkedin);
    }
    if let Some(imdb) = payload.imdb {
        founder.imdb = Some(imdb);
    }
    founder.normalize(state.config.default_locale);
    let updated = founder.clone();

    state.store.save(Founder::FILE, &founders).await?;
    Ok(Json(updated))
}

#[utoipa::path(
    delete,
    path = "/founders/{id}",
    params(("id" = Uuid, Path, description = "Founder id")),
    responses(
        (status = 200, description = "Founder deleted"),
        (status = 404, description = "Founder not found"),
        (status = 401, description = "Missing or invalid token")
    ),
    security(("bearer_auth" = [])),
    tag = "Founders"
)]
pub async fn delete_founder(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<serde_json::Value>, AppError> {
    let mut founders: Vec<Founder> = state.store.load(Founder::FILE).await?;
    if !repository::remove(&mut founders, id) {
        return Err(AppError::NotFound("Founder not found".to_string()));
    }
    state.store.save(Founder::FILE, &founders).await?;

    Ok(Json(serde_json::json!({
        "message": "Founder deleted successfully",
        "id": id
    })))
}
