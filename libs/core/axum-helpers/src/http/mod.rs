//! HTTP middleware module.
//!
//! - CORS configuration loaded from the environment
//! - Security headers on every response
//! - `Cache-Control: no-store` for dynamically rendered resources
//!
//! # Example
//!
//! ```ignore
//! use axum_helpers::http::{CorsConfig, create_cors_layer, no_store, security_headers};
//!
//! let app = Router::new()
//!     .layer(axum::middleware::from_fn(security_headers))
//!     .layer(create_cors_layer(&CorsConfig::from_env()?));
//! ```

pub mod cors;
pub mod security;

// Re-export commonly used functions
pub use cors::{CorsConfig, create_cors_layer};
pub use security::{no_store, security_headers};
