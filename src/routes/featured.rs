use axum::{extract::State, response::Json};

use crate::error::AppError;
use crate::models::work::{sort_for_display, Work};
use crate::models::FeaturedConfig;
use crate::state::AppState;

/// Resolve the curated selection against the works collection. Ids pointing
/// at deleted works are skipped at read time; an empty or absent config falls
/// back to the first six works by stored order.
pub async fn resolve_featured(state: &AppState) -> Vec<Work> {
    let mut works: Vec<Work> = state.store.load_or_default(Work::FILE).await;
    let config: FeaturedConfig = state
        .store
        .load_object(FeaturedConfig::FILE)
        .await
        .unwrap_or_default();

    if config.ids.is_empty() {
        sort_for_display(&mut works);
        works.truncate(FeaturedConfig::MAX);
        return works;
    }

    config
        .ids
        .iter()
        .filter_map(|id| works.iter().find(|work| work.id == *id).cloned())
        .collect()
}

#[utoipa::path(
    get,
    path = "/featured-projects",
    responses(
        (status = 200, description = "Featured works in curated order", body = [Work])
    ),
    tag = "Featured Projects"
)]
pub async fn list_featured(State(state): State<AppState>) -> Json<Vec<Work>> {
    Json(resolve_featured(&state).await)
}

#[utoipa::path(
    put,
    path = "/featured-projects",
    request_body = FeaturedConfig,
    responses(
        (status = 200, description = "Configuration stored", body = FeaturedConfig),
        (status = 400, description = "More than six ids, or duplicates"),
        (status = 401, description = "Missing or invalid token")
    ),
    security(("bearer_auth" = [])),
    tag = "Featured Projects"
)]
pub async fn update_featured(
    State(state): State<AppState>,
    Json(payload): Json<FeaturedConfig>,
) -> Result<Json<FeaturedConfig>, AppError> {
    // Validated before any write: a rejected update leaves the stored
    // configuration exactly as it was.
    payload.validate().map_err(AppError::BadRequest)?;

    state
        .store
        .save_object(FeaturedConfig::FILE, &payload)
        .await?;

    tracing::info!("featured projects updated ({} ids)", payload.ids.len());
    Ok(Json(payload))
}
