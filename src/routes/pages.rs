//! Localized read surface for the public site pages.
//!
//! These endpoints return page content with every localized field already
//! resolved to a plain string for the requested locale, so the rendering
//! layer never deals with the map-or-string storage shape.

use axum::{
    extract::{Path, State},
    response::Json,
};
use serde::Serialize;
use uuid::Uuid;

use crate::error::AppError;
use crate::locale::Locale;
use crate::models::work::{sort_for_display, Work};
use crate::models::{Cat, CrewMember, Founder};
use crate::routes::featured::resolve_featured;
use crate::routes::works::find_by_key;
use crate::state::AppState;

#[derive(Serialize, utoipa::ToSchema)]
pub struct PageWork {
    pub id: Uuid,
    pub slug: String,
    pub title: String,
    pub description: String,
    pub prod_year: Option<i32>,
    pub genre: Option<String>,
    pub platform: Option<String>,
    pub trailer: Option<String>,
    pub gallery: Vec<String>,
    pub image: Option<String>,
    pub client: Option<String>,
}

impl PageWork {
    fn localize(work: &Work, locale: Locale, default: Locale) -> Self {
        Self {
            id: work.id,
            slug: work.slug(),
            title: work.title.clone(),
            description: work.description.resolve(locale, default).to_string(),
            prod_year: work.prod_year,
            genre: work.genre.clone(),
            platform: work.platform.clone(),
            trailer: work.trailer.clone(),
            gallery: work.gallery.clone(),
            image: work.image.clone(),
            client: work.client.clone(),
        }
    }
}

#[derive(Serialize, utoipa::ToSchema)]
pub struct HomePage {
    pub locale: Locale,
    pub featured: Vec<PageWork>,
}

#[utoipa::path(
    get,
    path = "/{locale}",
    params(("locale" = String, Path, description = "Display locale")),
    responses((status = 200, description = "Home page content", body = HomePage)),
    tag = "Pages"
)]
pub async fn home(State(state): State<AppState>, Path(locale): Path<Locale>) -> Json<HomePage> {
    let default = state.config.default_locale;
    let featured = resolve_featured(&state)
        .await
        .iter()
        .map(|work| PageWork::localize(work, locale, default))
        .collect();
    Json(HomePage { locale, featured })
}

#[derive(Serialize, utoipa::ToSchema)]
pub struct WorksPage {
    pub locale: Locale,
    pub works: Vec<PageWork>,
}

#[utoipa::path(
    get,
    path = "/{locale}/works",
    params(("locale" = String, Path, description = "Display locale")),
    responses((status = 200, description = "Localized works list", body = WorksPage)),
    tag = "Pages"
)]
pub async fn works(State(state): State<AppState>, Path(locale): Path<Locale>) -> Json<WorksPage> {
    let default = state.config.default_locale;
    let mut all: Vec<Work> = state.store.load_or_default(Work::FILE).await;
    sort_for_display(&mut all);
    let works = all
        .iter()
        .map(|work| PageWork::localize(work, locale, default))
        .collect();
    Json(WorksPage { locale, works })
}

#[utoipa::path(
    get,
    path = "/{locale}/works/{id}",
    params(
        ("locale" = String, Path, description = "Display locale"),
        ("id" = String, Path, description = "Work id or title slug")
    ),
    responses(
        (status = 200, description = "Localized work detail", body = PageWork),
        (status = 404, description = "Work not found")
    ),
    tag = "Pages"
)]
pub async fn work_detail(
    State(state): State<AppState>,
    Path((locale, key)): Path<(Locale, String)>,
) -> Result<Json<PageWork>, AppError> {
    let works: Vec<Work> = state.store.load_or_default(Work::FILE).await;
    let index = find_by_key(&works, &key)
        .ok_or_else(|| AppError::NotFound("Work not found".to_string()))?;
    Ok(Json(PageWork::localize(
        &works[index],
        locale,
        state.config.default_locale,
    )))
}

#[derive(Serialize, utoipa::ToSchema)]
pub struct PageFounder {
    pub id: Uuid,
    pub name: String,
    pub title: String,
    pub about: String,
    pub image: Option<String>,
    pub linkedin: Option<String>,
    pub imdb: Option<String>,
}

#[derive(Serialize, utoipa::ToSchema)]
pub struct PageCrewMember {
    pub id: Uuid,
    pub name: String,
    pub title: String,
    pub department: String,
    pub image: Option<String>,
    pub linkedin: Option<String>,
}

#[derive(Serialize, utoipa::ToSchema)]
pub struct PageCat {
    pub id: Uuid,
    pub name: String,
    pub role: String,
    pub about: String,
    pub image: Option<String>,
}

#[derive(Serialize, utoipa::ToSchema)]
pub struct AboutPage {
    pub locale: Locale,
    pub founders: Vec<PageFounder>,
    pub crew: Vec<PageCrewMember>,
    pub cats: Vec<PageCat>,
}

#[utoipa::path(
    get,
    path = "/{locale}/about",
    params(("locale" = String, Path, description = "Display locale")),
    responses((status = 200, description = "Localized about page content", body = AboutPage)),
    tag = "Pages"
)]
pub async fn about(State(state): State<AppState>, Path(locale): Path<Locale>) -> Json<AboutPage> {
    let default = state.config.default_locale;

    let founders: Vec<Founder> = state.store.load_or_default(Founder::FILE).await;
    let mut crew: Vec<CrewMember> = state.store.load_or_default(CrewMember::FILE).await;
    crew.sort_by_key(|member| member.order);
    let mut cats: Vec<Cat> = state.store.load_or_default(Cat::FILE).await;
    cats.sort_by_key(|cat| cat.order);

    Json(AboutPage {
        locale,
        founders: founders
            .iter()
            .map(|f| PageFounder {
                id: f.id,
                name: f.name.clone(),
                title: f.title.resolve(locale, default).to_string(),
                about: f.about.resolve(locale, default).to_string(),
                image: f.image.clone(),
                linkedin: f.linkedin.clone(),
                imdb: f.imdb.clone(),
            })
            .collect(),
        crew: crew
            .iter()
            .map(|m| PageCrewMember {
                id: m.id,
                name: m.name.clone(),
                title: m.title.resolve(locale, default).to_string(),
                department: m.department.resolve(locale, default).to_string(),
                image: m.image.clone(),
                linkedin: m.linkedin.clone(),
            })
            .collect(),
        cats: cats
            .iter()
            .map(|c| PageCat {
                id: c.id,
                name: c.name.clone(),
                role: c.role.resolve(locale, default).to_string(),
                about: c.about.resolve(locale, default).to_string(),
                image: c.image.clone(),
            })
            .collect(),
    })
}
