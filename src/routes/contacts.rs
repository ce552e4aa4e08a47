use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
};
use chrono::Utc;
use serde::Deserialize;
use uuid::Uuid;

use crate::error::AppError;
use crate::models::{ContactStatus, ContactSubmission};
use crate::repository;
use crate::state::AppState;

#[derive(Deserialize, utoipa::ToSchema)]
pub struct CreateContactRequest {
    name: String,
    email: String,
    #[serde(default)]
    subject: String,
    message: String,
}

fn plausible_email(email: &str) -> bool {
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    !local.is_empty() && domain.contains('.') && !domain.starts_with('.') && !domain.ends_with('.')
}

#[utoipa::path(
    post,
    path = "/contact",
    request_body = CreateContactRequest,
    responses(
        (status = 201, description = "Submission stored", body = ContactSubmission),
        (status = 400, description = "Invalid payload")
    ),
    tag = "Contact"
)]
pub async fn create_contact(
    State(state): State<AppState>,
    Json(payload): Json<CreateContactRequest>,
) -> Result<(StatusCode, Json<ContactSubmission>), AppError> {
    if payload.name.trim().is_empty() || payload.message.trim().is_empty() {
        return Err(AppError::BadRequest(
            "Name and message must not be empty".to_string(),
        ));
    }
    if !plausible_email(&payload.email) {
        return Err(AppError::BadRequest("Invalid email address".to_string()));
    }

    let mut contacts: Vec<ContactSubmission> = state.store.load(ContactSubmission::FILE).await?;
    let submission = ContactSubmission {
        id: Uuid::new_v4(),
        name: payload.name,
        email: payload.email,
        subject: payload.subject,
        message: payload.message,
        created_at: Utc::now(),
        status: ContactStatus::New,
    };
    contacts.push(submission.clone());
    state.store.save(ContactSubmission::FILE, &contacts).await?;

    tracing::info!("contact submission from '{}'", submission.email);
    Ok((StatusCode::CREATED, Json(submission)))
}

#[utoipa::path(
    get,
    path = "/contact",
    responses(
        (status = 200, description = "Submissions, newest first", body = [ContactSubmission]),
        (status = 401, description = "Missing or invalid token")
    ),
    security(("bearer_auth" = [])),
    tag = "Contact"
)]
pub async fn list_contacts(
    State(state): State<AppState>,
) -> Result<Json<Vec<ContactSubmission>>, AppError> {
    let mut contacts: Vec<ContactSubmission> = state.store.load(ContactSubmission::FILE).await?;
    contacts.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    Ok(Json(contacts))
}

#[derive(Deserialize, utoipa::ToSchema)]
pub struct UpdateContactStatusRequest {
    status: ContactStatus,
}

#[utoipa::path(
    patch,
    path = "/contact/{id}",
    params(("id" = Uuid, Path, description = "Submission id")),
    request_body = UpdateContactStatusRequest,
    responses(
        (status = 200, description = "Status updated", body = ContactSubmission),
        (status = 404, description = "Submission not found"),
        (status = 401, description = "Missing or invalid token")
    ),
    security(("bearer_auth" = [])),
    tag = "Contact"
)]
pub async fn update_contact_status(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateContactStatusRequest>,
) -> Result<Json<ContactSubmission>, AppError> {
    let mut contacts: Vec<ContactSubmission> = state.store.load(ContactSubmission::FILE).await?;
    let submission = repository::find_mut(&mut contacts, id)
        .ok_or_else(|| AppError::NotFound("Submission not found".to_string()))?;

    submission.status = payload.status;
    let updated = submission.clone();

    state.store.save(ContactSubmission::FILE, &contacts).await?;
    Ok(Json(updated))
}

#[utoipa::path(
    delete,
    path = "/contact/{id}",
    params(("id" = Uuid, Path, description = "Submission id")),
    responses(
        (status = 200, description = "Submission deleted"),
        (status = 404, description = "Submission not found"),
        (status = 401, description = "Missing or invalid token")
    ),
    security(("bearer_auth" = [])),
    tag = "Contact"
)]
pub async fn delete_contact(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<serde_json::Value>, AppError> {
    let mut contacts: Vec<ContactSubmission> = state.store.load(ContactSubmission::FILE).await?;
    if !repository::remove(&mut contacts, id) {
        return Err(AppError::NotFound("Submission not found".to_string()));
    }
    state.store.save(ContactSubmission::FILE, &contacts).await?;

    Ok(Json(serde_json::json!({
        "message": "Submission deleted successfully",
        "id": id
    })))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn email_plausibility() {
        assert!(plausible_email("info@studio.com"));
        assert!(plausible_email("a.b@post.example.co"));
        assert!(!plausible_email("not-an-email"));
        assert!(!plausible_email("@studio.com"));
        assert!(!plausible_email("user@nodot"));
        assert!(!plausible_email("user@.com"));
    }
}
