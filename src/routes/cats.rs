use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
};
use serde::Deserialize;
use uuid::Uuid;

use crate::error::AppError;
use crate::locale::LocalizedText;
use crate::models::Cat;
use crate::repository::{self, OrderEntry, ReorderRequest};
use crate::state::AppState;

#[utoipa::path(
    get,
    path = "/cats",
    responses((status = 200, description = "Office cats in display order", body = [Cat])),
    tag = "Cats"
)]
pub async fn list_cats(State(state): State<AppState>) -> Json<Vec<Cat>> {
    let mut cats: Vec<Cat> = state.store.load_or_default(Cat::FILE).await;
    cats.sort_by_key(|cat| cat.order);
    Json(cats)
}

#[derive(Deserialize, utoipa::ToSchema)]
pub struct CreateCatRequest {
    name: String,
    role: LocalizedText,
    about: LocalizedText,
    image: Option<String>,
}

#[utoipa::path(
    post,
    path = "/cats",
    request_body = CreateCatRequest,
    responses(
        (status = 201, description = "Cat created", body = Cat),
        (status = 400, description = "Invalid payload"),
        (status = 401, description = "Missing or invalid token")
    ),
    security(("bearer_auth" = [])),
    tag = "Cats"
)]
pub async fn create_cat(
    State(state): State<AppState>,
    Json(payload): Json<CreateCatRequest>,
) -> Result<(StatusCode, Json<Cat>), AppError> {
    if payload.name.trim().is_empty() {
        return Err(AppError::BadRequest("Name must not be empty".to_string()));
    }

    let mut cats: Vec<Cat> = state.store.load(Cat::FILE).await?;
    let mut cat = Cat {
        id: Uuid::new_v4(),
        name: payload.name,
        role: payload.role,
        about: payload.about,
        image: payload.image,
        order: repository::next_order(&cats),
    };
    cat.normalize(state.config.default_locale);

    cats.push(cat.clone());
    state.store.save(Cat::FILE, &cats).await?;

    tracing::info!("created cat '{}' ({})", cat.name, cat.id);
    Ok((StatusCode::CREATED, Json(cat)))
}

#[derive(Deserialize, utoipa::ToSchema)]
pub struct UpdateCatRequest {
    name: Option<String>,
    role: Option<LocalizedText>,
    about: Option<LocalizedText>,
    image: Option<String>,
}

#[utoipa::path(
    put,
    path = "/cats/{id}",
    params(("id" = Uuid, Path, description = "Cat id")),
    request_body = UpdateCatRequest,
    responses(
        (status = 200, description = "Cat updated", body = Cat),
        (status = 404, description = "Cat not found"),
        (status = 401, description = "Missing or invalid token")
    ),
    security(("bearer_auth" = [])),
    tag = "Cats"
)]
pub async fn update_cat(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateCatRequest>,
) -> Result<Json<Cat>, AppError> {
    let mut cats: Vec<Cat> = state.store.load(Cat::FILE).await?;
    let cat = repository::find_mut(&mut cats, id)
        .ok_or_else(|| AppError::NotFound("Cat not found".to_string()))?;

    if let Some(name) = payload.name {
        cat.name = name;
    }
    if let Some(role) = payload.role {
        cat.role = role;
    }
    if let Some(about) = payload.about {
        cat.about = about;
    }
    if let Some(image) = payload.image {
        cat.image = Some(image);
    }
    cat.normalize(state.config.default_locale);
    let updated = cat.clone();

    state.store.save(Cat::FILE, &cats).await?;
    Ok(Json(updated))
}

#[utoipa::path(
    delete,
    path = "/cats/{id}",
    params(("id" = Uuid, Path, description = "Cat id")),
    responses(
        (status = 200, description = "Cat deleted"),
        (status = 404, description = "Cat not found"),
        (status = 401, description = "Missing or invalid token")
    ),
    security(("bearer_auth" = [])),
    tag = "Cats"
)]
pub async fn delete_cat(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<serde_json::Value>, AppError> {
    let mut cats: Vec<Cat> = state.store.load(Cat::FILE).await?;
    if !repository::remove(&mut cats, id) {
        return Err(AppError::NotFound("Cat not found".to_string()));
    }
    state.store.save(Cat::FILE, &cats).await?;

    Ok(Json(serde_json::json!({
        "message": "Cat deleted successfully",
        "id": id
    })))
}

#[utoipa::path(
    post,
    path = "/cats/reorder",
    request_body = ReorderRequest,
    responses(
        (status = 200, description = "New order mapping for the whole collection", body = [OrderEntry]),
        (status = 404, description = "Cat not found"),
        (status = 401, description = "Missing or invalid token")
    ),
    security(("bearer_auth" = [])),
    tag = "Cats"
)]
pub async fn reorder_cats(
    State(state): State<AppState>,
    Json(payload): Json<ReorderRequest>,
) -> Result<Json<Vec<OrderEntry>>, AppError> {
    let mut cats: Vec<Cat> = state.store.load(Cat::FILE).await?;
    let mapping = repository::reorder(&mut cats, payload.id, payload.direction)
        .ok_or_else(|| AppError::NotFound("Cat not found".to_string()))?;
    state.store.save(Cat::FILE, &cats).await?;
    Ok(Json(mapping))
}
