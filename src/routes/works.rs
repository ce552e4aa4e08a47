use std::collections::BTreeSet;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::Json,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::AppError;
use crate::locale::LocalizedText;
use crate::models::work::{sort_for_display, Work};
use crate::repository::{self, OrderEntry, ReorderRequest};
use crate::state::AppState;

#[derive(Deserialize, utoipa::IntoParams)]
pub struct WorksQuery {
    /// Exact genre match, case-insensitive.
    pub genre: Option<String>,
    /// Substring platform match, case-insensitive.
    pub platform: Option<String>,
    /// Exact production year.
    pub year: Option<i32>,
}

/// Distinct filter values across the unfiltered collection, for the filter UI.
#[derive(Serialize, utoipa::ToSchema)]
pub struct WorkFacets {
    pub genres: Vec<String>,
    pub platforms: Vec<String>,
    pub years: Vec<i32>,
}

#[derive(Serialize, utoipa::ToSchema)]
pub struct WorksListResponse {
    pub works: Vec<Work>,
    pub facets: WorkFacets,
}

fn collect_facets(works: &[Work]) -> WorkFacets {
    let genres: BTreeSet<String> = works.iter().filter_map(|w| w.genre.clone()).collect();
    let platforms: BTreeSet<String> = works.iter().filter_map(|w| w.platform.clone()).collect();
    let mut years: Vec<i32> = works
        .iter()
        .filter_map(|w| w.prod_year)
        .collect::<BTreeSet<i32>>()
        .into_iter()
        .collect();
    years.reverse();

    WorkFacets {
        genres: genres.into_iter().collect(),
        platforms: platforms.into_iter().collect(),
        years,
    }
}

fn matches(work: &Work, query: &WorksQuery) -> bool {
    if let Some(genre) = &query.genre {
        match &work.genre {
            Some(g) if g.eq_ignore_ascii_case(genre) => {}
            _ => return false,
        }
    }
    if let Some(platform) = &query.platform {
        let needle = platform.to_lowercase();
        match &work.platform {
            Some(p) if p.to_lowercase().contains(&needle) => {}
            _ => return false,
        }
    }
    if let Some(year) = query.year {
        if work.prod_year != Some(year) {
            return false;
        }
    }
    true
}

#[utoipa::path(
    get,
    path = "/works",
    params(WorksQuery),
    responses(
        (status = 200, description = "Filtered works plus filter facets", body = WorksListResponse)
    ),
    tag = "Works"
)]
pub async fn list_works(
    State(state): State<AppState>,
    Query(query): Query<WorksQuery>,
) -> Json<WorksListResponse> {
    let mut works: Vec<Work> = state.store.load_or_default(Work::FILE).await;
    let facets = collect_facets(&works);
    works.retain(|work| matches(work, &query));
    sort_for_display(&mut works);

    Json(WorksListResponse { works, facets })
}

/// Look a work up by id, or by title slug when the key is not a UUID.
/// Slug collisions resolve to the first match in file order.
pub(crate) fn find_by_key(works: &[Work], key: &str) -> Option<usize> {
    if let Ok(id) = Uuid::parse_str(key) {
        works.iter().position(|w| w.id == id)
    } else {
        works.iter().position(|w| w.slug() == key)
    }
}

#[utoipa::path(
    get,
    path = "/works/{id}",
    params(("id" = String, Path, description = "Work id or title slug")),
    responses(
        (status = 200, description = "Work details", body = Work),
        (status = 404, description = "Work not found")
    ),
    tag = "Works"
)]
pub async fn get_work(
    State(state): State<AppState>,
    Path(key): Path<String>,
) -> Result<Json<Work>, AppError> {
    let works: Vec<Work> = state.store.load(Work::FILE).await?;
    let index = find_by_key(&works, &key)
        .ok_or_else(|| AppError::NotFound("Work not found".to_string()))?;
    Ok(Json(works[index].clone()))
}

#[derive(Deserialize, utoipa::ToSchema)]
pub struct CreateWorkRequest {
    title: String,
    description: LocalizedText,
    prod_year: Option<i32>,
    genre: Option<String>,
    platform: Option<String>,
    trailer: Option<String>,
    #[serde(default)]
    gallery: Vec<String>,
    image: Option<String>,
    client: Option<String>,
}

#[utoipa::path(
    post,
    path = "/works",
    request_body = CreateWorkRequest,
    responses(
        (status = 201, description = "Work created", body = Work),
        (status = 400, description = "Invalid payload"),
        (status = 401, description = "Missing or invalid token")
    ),
    security(("bearer_auth" = [])),
    tag = "Works"
)]
pub async fn create_work(
    State(state): State<AppState>,
    Json(payload): Json<CreateWorkRequest>,
) -> Result<(StatusCode, Json<Work>), AppError> {
    if payload.title.trim().is_empty() {
        return Err(AppError::BadRequest("Title must not be empty".to_string()));
    }

    let mut works: Vec<Work> = state.store.load(Work::FILE).await?;
    let mut work = Work {
        id: Uuid::new_v4(),
        title: payload.title,
        description: payload.description,
        prod_year: payload.prod_year,
        genre: payload.genre,
        platform: payload.platform,
        trailer: payload.trailer,
        gallery: payload.gallery,
        image: payload.image,
        order: repository::next_order(&works),
        client: payload.client,
    };
    work.normalize(state.config.default_locale);

    works.push(work.clone());
    state.store.save(Work::FILE, &works).await?;

    tracing::info!("created work '{}' ({})", work.title, work.id);
    Ok((StatusCode::CREATED, Json(work)))
}

#[derive(Deserialize, utoipa::ToSchema)]
pub struct UpdateWorkRequest {
    title: Option<String>,
    description: Option<LocalizedText>,
    prod_year: Option<i32>,
    genre: Option<String>,
    platform: Option<String>,
    trailer: Option<String>,
    gallery: Option<Vec<String>>,
    image: Option<String>,
    client: Option<String>,
}

#[utoipa::path(
    put,
    path = "/works/{id}",
    params(("id" = Uuid, Path, description = "Work id")),
    request_body = UpdateWorkRequest,
    responses(
        (status = 200, description = "Work updated", body = Work),
        (status = 404, description = "Work not found"),
        (status = 401, description = "Missing or invalid token")
    ),
    security(("bearer_auth" = [])),
    tag = "Works"
)]
pub async fn update_work(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateWorkRequest>,
) -> Result<Json<Work>, AppError> {
    let mut works: Vec<Work> = state.store.load(Work::FILE).await?;
    let work = repository::find_mut(&mut works, id)
        .ok_or_else(|| AppError::NotFound("Work not found".to_string()))?;

    // Shallow merge: present fields overwrite, missing fields are retained.
    if let Some(title) = payload.title {
        work.title = title;
    }
    if let Some(description) = payload.description {
        work.description = description;
    }
    if let Some(prod_year) = payload.prod_year {
        work.prod_year = Some(prod_year);
    }
    if let Some(genre) = payload.genre {
        work.genre = Some(genre);
    }
    if let Some(platform) = payload.platform {
        work.platform = Some(platform);
    }
    if let Some(trailer) = payload.trailer {
        work.trailer = Some(trailer);
    }
    if let Some(gallery) = payload.gallery {
        work.gallery = gallery;
    }
    if let Some(image) = payload.image {
        work.image = Some(image);
    }
    if let Some(client) = payload.client {
        work.client = Some(client);
    }
    work.normalize(state.config.default_locale);
    let updated = work.clone();

    state.store.save(Work::FILE, &works).await?;
    Ok(Json(updated))
}

#[utoipa::path(
    delete,
    path = "/works/{id}",
    params(("id" = Uuid, Path, description = "Work id")),
    responses(
        (status = 200, description = "Work deleted"),
        (status = 404, description = "Work not found"),
        (status = 401, description = "Missing or invalid token")
    ),
    security(("bearer_auth" = [])),
    tag = "Works"
)]
pub async fn delete_work(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<serde_json::Value>, AppError> {
    let mut works: Vec<Work> = state.store.load(Work::FILE).await?;
    if !repository::remove(&mut works, id) {
        return Err(AppError::NotFound("Work not found".to_string()));
    }
    state.store.save(Work::FILE, &works).await?;

    Ok(Json(serde_json::json!({
        "message": "Work deleted successfully",
        "id": id
    })))
}

#[utoipa::path(
    post,
    path = "/works/reorder",
    request_body = ReorderRequest,
    responses(
        (status = 200, description = "New order mapping for the whole collection", body = [OrderEntry]),
        (status = 404, description = "Work not found"),
        (status = 401, description = "Missing or invalid token")
    ),
    security(("bearer_auth" = [])),
    tag = "Works"
)]
pub async fn reorder_works(
    State(state): State<AppState>,
    Json(payload): Json<ReorderRequest>,
) -> Result<Json<Vec<OrderEntry>>, AppError> {
    let mut works: Vec<Work> = state.store.load(Work::FILE).await?;
    let mapping = repository::reorder(&mut works, payload.id, payload.direction)
        .ok_or_else(|| AppError::NotFound("Work not found".to_string()))?;
    state.store.save(Work::FILE, &works).await?;
    Ok(Json(mapping))
}

/// Raw image paths (covers plus galleries) across all works, consumed by the
/// client-side mosaic background.
#[utoipa::path(
    get,
    path = "/works-images",
    responses(
        (status = 200, description = "Distinct image paths across all works", body = [String])
    ),
    tag = "Works"
)]
pub async fn list_work_images(State(state): State<AppState>) -> Json<Vec<String>> {
    let works: Vec<Work> = state.store.load_or_default(Work::FILE).await;
    let mut seen = BTreeSet::new();
    let mut images = Vec::new();
    for work in &works {
        for path in work.image.iter().chain(work.gallery.iter()) {
            if seen.insert(path.clone()) {
                images.push(path.clone());
            }
        }
    }
    Json(images)
}
