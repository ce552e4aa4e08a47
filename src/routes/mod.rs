pub mod auth;
pub mod cats;
pub mod contacts;
pub mod crew;
pub mod featured;
pub mod founders;
pub mod pages;
pub mod upload;
pub mod works;

use axum::{
    handler::Handler,
    middleware,
    routing::{get, post},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::middleware::auth::auth_middleware;
use crate::middleware::locale::locale_redirect;
use crate::state::AppState;

#[derive(OpenApi)]
#[openapi(
    paths(
        // Authentication
        auth::login,
        auth::me,
        // Works
        works::list_works,
        works::get_work,
        works::create_work,
        works::update_work,
        works::delete_work,
        works::reorder_works,
        works::list_work_images,
        // Crew
        crew::list_crew,
        crew::create_crew_member,
        crew::update_crew_member,
        crew::delete_crew_member,
        crew::reorder_crew,
        // Founders
        founders::list_founders,
        founders::create_founder,
        founders::update_founder,
        founders::delete_founder,
        // Cats
        cats::list_cats,
        cats::create_cat,
        cats::update_cat,
        cats::delete_cat,
        cats::reorder_cats,
        // Featured projects
        featured::list_featured,
        featured::update_featured,
        // Contact
        contacts::create_contact,
        contacts::list_contacts,
        contacts::update_contact_status,
        contacts::delete_contact,
        // Uploads
        upload::upload_file,
        upload::serve_upload,
        // Localized pages
        pages::home,
        pages::works,
        pages::work_detail,
        pages::about,
    ),
    components(
        schemas(
            crate::locale::Locale,
            crate::locale::LocalizedText,
            crate::models::Work,
            crate::models::CrewMember,
            crate::models::Founder,
            crate::models::Cat,
            crate::models::ContactSubmission,
            crate::models::ContactStatus,
            crate::models::FeaturedConfig,
            crate::repository::Direction,
            crate::repository::ReorderRequest,
            crate::repository::OrderEntry,
            crate::middleware::auth::AuthUser,
            auth::LoginRequest,
            auth::LoginResponse,
            works::WorksListResponse,
            works::WorkFacets,
            works::CreateWorkRequest,
            works::UpdateWorkRequest,
            crew::CreateCrewRequest,
            crew::UpdateCrewRequest,
            founders::CreateFounderRequest,
            founders::UpdateFounderRequest,
            cats::CreateCatRequest,
            cats::UpdateCatRequest,
            contacts::CreateContactRequest,
            contacts::UpdateContactStatusRequest,
            upload::UploadResponse,
            pages::PageWork,
            pages::HomePage,
            pages::WorksPage,
            pages::AboutPage,
            pages::PageFounder,
            pages::PageCrewMember,
            pages::PageCat,
        )
    ),
    tags(
        (name = "Authentication", description = "Admin login and token introspection"),
        (name = "Works", description = "Portfolio works: CRUD, reorder, filters and facets"),
        (name = "Crew", description = "Crew member management"),
        (name = "Founders", description = "Founder management"),
        (name = "Cats", description = "Office cat management"),
        (name = "Featured Projects", description = "Curated home-page selection"),
        (name = "Contact", description = "Public contact form and admin inbox"),
        (name = "Uploads", description = "Binary asset upload and retrieval"),
        (name = "Pages", description = "Locale-resolved content for the public site pages")
    ),
    info(
        title = "Studio CMS API",
        version = "0.1.0",
        description = "JSON-file-backed content backend for the studio's multilingual site",
    ),
    modifiers(&SecurityAddon)
)]
struct ApiDoc;

struct SecurityAddon;

impl utoipa::Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                utoipa::openapi::security::SecurityScheme::Http(
                    utoipa::openapi::security::Http::new(
                        utoipa::openapi::security::HttpAuthScheme::Bearer,
                    ),
                ),
            );
        }
    }
}

pub fn create_routes(state: AppState) -> Router {
    // Swagger UI (stateless)
    let swagger: Router = SwaggerUi::new("/swagger-ui")
        .url("/api-docs/openapi.json", ApiDoc::openapi())
        .into();

    // Mutations (and the contact inbox) sit behind the token check; the
    // layer is attached per handler so public and admin methods can share
    // a path.
    let admin = middleware::from_fn_with_state(state.clone(), auth_middleware);

    let api = Router::new()
        .route("/auth/login", post(auth::login))
        .route("/auth/me", get(auth::me.layer(admin.clone())))
        .route(
            "/works",
            get(works::list_works).post(works::create_work.layer(admin.clone())),
        )
        .route("/works/reorder", post(works::reorder_works.layer(admin.clone())))
        .route(
            "/works/{id}",
            get(works::get_work)
                .put(works::update_work.layer(admin.clone()))
                .delete(works::delete_work.layer(admin.clone())),
        )
        .route("/works-images", get(works::list_work_images))
        .route(
            "/crew",
            get(crew::list_crew).post(crew::create_crew_member.layer(admin.clone())),
        )
        .route("/crew/reorder", post(crew::reorder_crew.layer(admin.clone())))
        .route(
            "/crew/{id}",
            axum::routing::put(crew::update_crew_member.layer(admin.clone()))
                .delete(crew::delete_crew_member.layer(admin.clone())),
        )
        .route(
            "/founders",
            get(founders::list_founders).post(founders::create_founder.layer(admin.clone())),
        )
        .route(
            "/founders/{id}",
            axum::routing::put(founders::update_founder.layer(admin.clone()))
                .delete(founders::delete_founder.layer(admin.clone())),
        )
        .route(
            "/cats",
            get(cats::list_cats).post(cats::create_cat.layer(admin.clone())),
        )
        .route("/cats/reorder", post(cats::reorder_cats.layer(admin.clone())))
        .route(
            "/cats/{id}",
            axum::routing::put(cats::update_cat.layer(admin.clone()))
                .delete(cats::delete_cat.layer(admin.clone())),
        )
        .route(
            "/featured-projects",
            get(featured::list_featured).put(featured::update_featured.layer(admin.clone())),
        )
        .route(
            "/contact",
            get(contacts::list_contacts.layer(admin.clone())).post(contacts::create_contact),
        )
        .route(
            "/contact/{id}",
            axum::routing::patch(contacts::update_contact_status.layer(admin.clone()))
                .delete(contacts::delete_contact.layer(admin.clone())),
        )
        .route("/upload", post(upload::upload_file.layer(admin.clone())))
        .route("/uploads/{filename}", get(upload::serve_upload));

    // Locale-prefixed page surface; unlocalized page paths are redirected
    // here by the locale middleware.
    let page_routes = Router::new()
        .route("/{locale}", get(pages::home))
        .route("/{locale}/works", get(pages::works))
        .route("/{locale}/works/{id}", get(pages::work_detail))
        .route("/{locale}/about", get(pages::about));

    let app = Router::new()
        .merge(api)
        .merge(page_routes)
        .with_state(state.clone());

    Router::new()
        .merge(swagger)
        .merge(app)
        .layer(middleware::from_fn_with_state(state, locale_redirect))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}
