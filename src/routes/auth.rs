use argon2::{
    password_hash::{PasswordHash, PasswordVerifier},
    Argon2,
};
use axum::{extract::State, response::Json, Extension};
use jsonwebtoken::{encode, EncodingKey, Header};
use serde::{Deserialize, Serialize};
use subtle::ConstantTimeEq;

use crate::error::AppError;
use crate::middleware::auth::{AuthUser, Claims};
use crate::state::AppState;

/// Admin tokens are valid for 24 hours; there is no refresh or revocation.
pub const TOKEN_TTL_SECS: usize = 24 * 60 * 60;

#[derive(Deserialize, utoipa::ToSchema)]
pub struct LoginRequest {
    username: String,
    password: String,
}

#[derive(Serialize, utoipa::ToSchema)]
pub struct LoginResponse {
    token: String,
    expires_in: usize,
}

/// Constant-time comparison for the configured admin username.
fn constant_time_compare(a: &str, b: &str) -> bool {
    if a.len() != b.len() {
        return false;
    }
    a.as_bytes().ct_eq(b.as_bytes()).into()
}

fn unix_now() -> usize {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_secs() as usize)
        .unwrap_or(0)
}

pub fn issue_token(username: &str, secret: &str) -> Result<String, AppError> {
    let claims = Claims {
        sub: username.to_string(),
        role: "admin".to_string(),
        exp: unix_now() + TOKEN_TTL_SECS,
    };
    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_ref()),
    )
    .map_err(|e| AppError::InternalServerError(format!("Failed to sign token: {}", e)))
}

#[utoipa::path(
    post,
    path = "/auth/login",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Login successful", body = LoginResponse),
        (status = 401, description = "Invalid credentials")
    ),
    tag = "Authentication"
)]
pub async fn login(
    State(state): State<AppState>,
    Json(payload): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, AppError> {
    let username_ok = constant_time_compare(&payload.username, &state.config.admin_username);

    let parsed_hash = PasswordHash::new(&state.config.admin_password_hash).map_err(|e| {
        AppError::InternalServerError(format!("Invalid ADMIN_PASSWORD_HASH: {}", e))
    })?;
    let password_ok = Argon2::default()
        .verify_password(payload.password.as_bytes(), &parsed_hash)
        .is_ok();

    // Both checks always run; the response never says which one failed.
    if !(username_ok && password_ok) {
        tracing::warn!("failed login attempt for '{}'", payload.username);
        return Err(AppError::Unauthorized("Invalid credentials".to_string()));
    }

    let token = issue_token(&state.config.admin_username, &state.config.jwt_secret)?;
    tracing::info!("admin '{}' logged in", state.config.admin_username);

    Ok(Json(LoginResponse {
        token,
        expires_in: TOKEN_TTL_SECS,
    }))
}

#[utoipa::path(
    get,
    path = "/auth/me",
    responses(
        (status = 200, description = "Authenticated identity", body = AuthUser),
        (status = 401, description = "Missing or invalid token")
    ),
    security(("bearer_auth" = [])),
    tag = "Authentication"
)]
pub async fn me(Extension(user): Extension<AuthUser>) -> Json<AuthUser> {
    Json(user)
}
