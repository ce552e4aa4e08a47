use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
};
use serde::Deserialize;
use uuid::Uuid;

use crate::error::AppError;
use crate::locale::LocalizedText;
use crate::models::CrewMember;
use crate::repository::{self, OrderEntry, ReorderRequest};
use crate::state::AppState;

#[utoipa::path(
    get,
    path = "/crew",
    responses((status = 200, description = "Crew members in display order", body = [CrewMember])),
    tag = "Crew"
)]
pub async fn list_crew(State(state): State<AppState>) -> Json<Vec<CrewMember>> {
    let mut crew: Vec<CrewMember> = state.store.load_or_default(CrewMember::FILE).await;
    crew.sort_by_key(|member| member.order);
    Json(crew)
}

#[derive(Deserialize, utoipa::ToSchema)]
pub struct CreateCrewRequest {
    name: String,
    title: LocalizedText,
    department: LocalizedText,
    cv: Option<LocalizedText>,
    image: Option<String>,
    linkedin: Option<String>,
}

#[utoipa::path(
    post,
    path = "/crew",
    request_body = CreateCrewRequest,
    responses(
        (status = 201, description = "Crew member created", body = CrewMember),
        (status = 400, description = "Invalid payload"),
        (status = 401, description = "Missing or invalid token")
    ),
    security(("bearer_auth" = [])),
    tag = "Crew"
)]
pub async fn create_crew_member(
    State(state): State<AppState>,
    Json(payload): Json<CreateCrewRequest>,
) -> Result<(StatusCode, Json<CrewMember>), AppError> {
    if payload.name.trim().is_empty() {
        return Err(AppError::BadRequest("Name must not be empty".to_string()));
    }

    let mut crew: Vec<CrewMember> = state.store.load(CrewMember::FILE).await?;
    let mut member = CrewMember {
        id: Uuid::new_v4(),
        name: payload.name,
        title: payload.title,
        department: payload.department,
        cv: payload.cv,
        image: payload.image,
        linkedin: payload.linkedin,
        order: repository::next_order(&crew),
    };
    member.normalize(state.config.default_locale);

    crew.push(member.clone());
    state.store.save(CrewMember::FILE, &crew).await?;

    tracing::info!("created crew member '{}' ({})", member.name, member.id);
    Ok((StatusCode::CREATED, Json(member)))
}

#[derive(Deserialize, utoipa::ToSchema)]
pub struct UpdateCrewRequest {
    name: Option<String>,
    title: Option<LocalizedText>,
    department: Option<LocalizedText>,
    cv: Option<LocalizedText>,
    image: Option<String>,
    linkedin: Option<String>,
}

#[utoipa::path(
    put,
    path = "/crew/{id}",
    params(("id" = Uuid, Path, description = "Crew member id")),
    request_body = UpdateCrewRequest,
    responses(
        (status = 200, description = "Crew member updated", body = CrewMember),
        (status = 404, description = "Crew member not found"),
        (status = 401, description = "Missing or invalid token")
    ),
    security(("bearer_auth" = [])),
    tag = "Crew"
)]
pub async fn update_crew_member(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateCrewRequest>,
) -> Result<Json<CrewMember>, AppError> {
    let mut crew: Vec<CrewMember> = state.store.load(CrewMember::FILE).await?;
    let member = repository::find_mut(&mut crew, id)
        .ok_or_else(|| AppError::NotFound("Crew member not found".to_string()))?;

    if let Some(name) = payload.name {
        member.name = name;
    }
    if let Some(title) = payload.title {
        member.title = title;
    }
    if let Some(department) = payload.department {
        member.department = department;
    }
    if let Some(cv) = payload.cv {
        member.cv = Some(cv);
    }
    if let Some(image) = payload.image {
        member.image = Some(image);
    }
    if let Some(linkedin) = payload.linkedin {
        member.linkedin = Some(linkedin);
    }
    member.normalize(state.config.default_locale);
    let updated = member.clone();

    state.store.save(CrewMember::FILE, &crew).await?;
    Ok(Json(updated))
}

#[utoipa::path(
    delete,
    path = "/crew/{id}",
    params(("id" = Uuid, Path, description = "Crew member id")),
    responses(
        (status = 200, description = "Crew member deleted"),
        (status = 404, description = "Crew member not found"),
        (status = 401, description = "Missing or invalid token")
    ),
    security(("bearer_auth" = [])),
    tag = "Crew"
)]
pub async fn delete_crew_member(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<serde_json::Value>, AppError> {
    let mut crew: Vec<CrewMember> = state.store.load(CrewMember::FILE).await?;
    if !repository::remove(&mut crew, id) {
        return Err(AppError::NotFound("Crew member not found".to_string()));
    }
    state.store.save(CrewMember::FILE, &crew).await?;

    Ok(Json(serde_json::json!({
        "message": "Crew member deleted successfully",
        "id": id
    })))
}

#[utoipa::path(
    post,
    path = "/crew/reorder",
    request_body = ReorderRequest,
    responses(
        (status = 200, description = "New order mapping for the whole collection", body = [OrderEntry]),
        (status = 404, description = "Crew member not found"),
        (status = 401, description = "Missing or invalid token")
    ),
    security(("bearer_auth" = [])),
    tag = "Crew"
)]
pub async fn reorder_crew(
    State(state): State<AppState>,
    Json(payload): Json<ReorderRequest>,
) -> Result<Json<Vec<OrderEntry>>, AppError> {
    let mut crew: Vec<CrewMember> = state.store.load(CrewMember::FILE).await?;
    let mapping = repository::reorder(&mut crew, payload.id, payload.direction)
        .ok_or_else(|| AppError::NotFound("Crew member not found".to_string()))?;
    state.store.save(CrewMember::FILE, &crew).await?;
    Ok(Json(mapping))
}
