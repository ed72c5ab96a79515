use axum::http::{HeaderValue, Method, header};
use core_config::{ConfigError, FromEnv, env_required};
use std::time::Duration;
use tower_http::cors::{AllowOrigin, CorsLayer};

/// Allowed browser origins.
///
/// Loaded from `CORS_ALLOWED_ORIGIN` (required, comma-separated):
/// - Development: `CORS_ALLOWED_ORIGIN=http://localhost:3000,http://localhost:5173`
/// - Production: `CORS_ALLOWED_ORIGIN=https://admin.example.com`
#[derive(Clone, Debug)]
pub struct CorsConfig {
    pub allowed_origins: Vec<HeaderValue>,
}

impl CorsConfig {
    /// Parse a comma-separated origin list; blank entries are skipped
    pub fn parse(origins: &str) -> Result<Self, ConfigError> {
        let allowed_origins = origins
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(HeaderValue::from_str)
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| ConfigError::ParseError {
                key: "CORS_ALLOWED_ORIGIN".to_string(),
                details: e.to_string(),
            })?;

        if allowed_origins.is_empty() {
            return Err(ConfigError::ParseError {
                key: "CORS_ALLOWED_ORIGIN".to_string(),
                details: "cannot be empty".to_string(),
            });
        }

        Ok(Self { allowed_origins })
    }
}

impl FromEnv for CorsConfig {
    fn from_env() -> Result<Self, ConfigError> {
        Self::parse(&env_required("CORS_ALLOWED_ORIGIN")?)
    }
}

/// Creates a CORS layer for the configured origins.
///
/// - Methods: GET, POST, DELETE, OPTIONS
/// - Headers: Content-Type, Authorization, Accept, Cookie
/// - Credentials allowed (the `access_token` cookie)
/// - 1 hour max age
pub fn create_cors_layer(config: &CorsConfig) -> CorsLayer {
    CorsLayer::new()
        .allow_origin(AllowOrigin::list(config.allowed_origins.clone()))
        .allow_methods([Method::GET, Method::POST, Method::DELETE, Method::OPTIONS])
        .allow_headers([
            header::CONTENT_TYPE,
            header::AUTHORIZATION,
            header::ACCEPT,
            header::COOKIE,
        ])
        .allow_credentials(true)
        .max_age(Duration::from_secs(3600))
}
