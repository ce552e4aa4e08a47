use std::env;
use std::path::PathBuf;

use crate::locale::Locale;

#[derive(Debug, Clone)]
pub struct Config {
    pub bind_addr: String,
    pub data_dir: PathBuf,
    pub uploads_dir: PathBuf,
    pub jwt_secret: String,
    pub admin_username: String,
    pub admin_password_hash: String,
    pub default_locale: Locale,
}

impl Config {
    pub fn from_env() -> Self {
        let bind_addr = env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:3000".to_string());
        let data_dir = env::var("DATA_DIR").unwrap_or_else(|_| "data".to_string()).into();
        let uploads_dir = env::var("UPLOADS_DIR")
            .unwrap_or_else(|_| "uploads".to_string())
            .into();
        let jwt_secret = env::var("JWT_SECRET").expect("JWT_SECRET must be set");
        let admin_username = env::var("ADMIN_USERNAME").expect("ADMIN_USERNAME must be set");
        let admin_password_hash =
            env::var("ADMIN_PASSWORD_HASH").expect("ADMIN_PASSWORD_HASH must be set");
        let default_locale = env::var("DEFAULT_LOCALE")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(Locale::Tr);

        Self {
            bind_addr,
            data_dir,
            uploads_dir,
            jwt_secret,
            admin_username,
            admin_password_hash,
            default_locale,
        }
    }
}
