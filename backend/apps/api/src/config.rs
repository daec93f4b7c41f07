//! Process Configuration
//!
//! Read once at startup from the environment (and `.env` when present).

use std::env;

use anyhow::{Context, bail};
use auth::AuthConfig;
use axum::http::HeaderValue;
use base64::Engine;
use base64::engine::general_purpose;

const DEFAULT_PORT: u16 = 8000;
const DEFAULT_ORIGINS: &str = "http://localhost:5173,http://127.0.0.1:5173";

/// Everything the server needs to start
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub database_url: String,
    pub port: u16,
    pub allowed_origins: Vec<HeaderValue>,
    pub auth: AuthConfig,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        let database_url =
            env::var("DATABASE_URL").context("DATABASE_URL must be set in environment")?;

        let port = match env::var("PORT") {
            Ok(raw) => raw.parse().context("PORT must be a port number")?,
            Err(_) => DEFAULT_PORT,
        };

        let frontend_origins =
            env::var("FRONTEND_ORIGINS").unwrap_or_else(|_| DEFAULT_ORIGINS.to_string());

        Ok(Self {
            database_url,
            port,
            allowed_origins: parse_origins(&frontend_origins),
            auth: auth_config_from_env()?,
        })
    }
}

fn auth_config_from_env() -> anyhow::Result<AuthConfig> {
    let mut config = match env::var("TOKEN_SECRET") {
        Ok(secret_b64) => AuthConfig {
            token_secret: decode_secret(&secret_b64)?,
            ..AuthConfig::default()
        },
        Err(_) if cfg!(debug_assertions) => {
            tracing::warn!("TOKEN_SECRET not set, using a random secret for this process");
            AuthConfig::development()
        }
        Err(_) => bail!("TOKEN_SECRET must be set in production"),
    };

    if let Ok(pepper) = env::var("PASSWORD_PEPPER") {
        if !pepper.is_empty() {
            config.password_pepper = Some(pepper.into_bytes());
        }
    }

    Ok(config)
}

/// Decode a base64 token secret into exactly 32 bytes
pub fn decode_secret(secret_b64: &str) -> anyhow::Result<[u8; 32]> {
    let bytes = general_purpose::STANDARD
        .decode(secret_b64.trim())
        .context("TOKEN_SECRET must be valid base64")?;

    bytes.try_into().map_err(|bytes: Vec<u8>| {
        anyhow::anyhow!("TOKEN_SECRET must decode to 32 bytes (got {})", bytes.len())
    })
}

/// Parse a comma separated origin list, skipping invalid entries
pub fn parse_origins(raw: &str) -> Vec<HeaderValue> {
    raw.split(',')
        .map(str::trim)
        .filter(|origin| !origin.is_empty())
        .filter_map(|origin| origin.parse().ok())
        .collect()
}
