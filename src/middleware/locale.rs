use axum::{
    extract::{Request, State},
    http::header,
    middleware::Next,
    response::{IntoResponse, Redirect, Response},
};

use crate::locale::Locale;
use crate::state::AppState;

/// Path prefixes served without a locale segment: the admin/content API,
/// uploaded assets and the generated docs.
const EXEMPT_PREFIXES: &[&str] = &[
    "/works",
    "/works-images",
    "/crew",
    "/founders",
    "/cats",
    "/contact",
    "/featured-projects",
    "/auth",
    "/upload",
    "/uploads",
    "/swagger-ui",
    "/api-docs",
];

fn is_exempt(path: &str) -> bool {
    EXEMPT_PREFIXES
        .iter()
        .any(|prefix| path == *prefix || path.strip_prefix(prefix).is_some_and(|rest| rest.starts_with('/')))
}

fn has_locale_prefix(path: &str) -> bool {
    let first = path
        .strip_prefix('/')
        .map(|rest| rest.split('/').next().unwrap_or(""))
        .unwrap_or("");
    first.parse::<Locale>().is_ok()
}

/// Ensure every page path carries an explicit locale segment.
///
/// Unlocalized page requests get a 307 to `/{locale}{path}`, preserving the
/// query string; the locale comes from `Accept-Language` or the configured
/// default. API and asset paths pass through untouched.
pub async fn locale_redirect(State(state): State<AppState>, req: Request, next: Next) -> Response {
    let path = req.uri().path();
    if is_exempt(path) || has_locale_prefix(path) {
        return next.run(req).await;
    }

    let locale = req
        .headers()
        .get(header::ACCEPT_LANGUAGE)
        .and_then(|h| h.to_str().ok())
        .and_then(Locale::from_accept_language)
        .unwrap_or(state.config.default_locale);

    let path = if path == "/" { "" } else { path };
    let target = match req.uri().query() {
        Some(query) => format!("/{}{}?{}", locale.as_str(), path, query),
        None => format!("/{}{}", locale.as_str(), path),
    };

    tracing::debug!("redirecting to {}", target);
    Redirect::temporary(&target).into_response()
}
