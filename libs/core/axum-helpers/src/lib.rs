//! # Axum Helpers
//!
//! Shared plumbing for the Axum services in this workspace.
//!
//! ## Modules
//!
//! - **[`auth`]**: Stateless JWT verification and the [`AuthContext`] extractor
//! - **[`server`]**: Router assembly, health checks, graceful shutdown
//! - **[`http`]**: HTTP middleware (CORS, security headers, no-store)
//! - **[`errors`]**: [`AppError`] rendered as plain-text responses
//!
//! ## Quick Start
//!
//! ```ignore
//! use axum::Router;
//! use axum_helpers::{CorsConfig, create_production_app, create_router, health_router};
//! use core_config::{FromEnv, app_info, server::ServerConfig};
//! use utoipa::OpenApi;
//!
//! #[derive(OpenApi)]
//! #[openapi(paths())]
//! struct ApiDoc;
//!
//! #[tokio::main]
//! async fn main() -> eyre::Result<()> {
//!     let api_routes = Router::new(); // Add your routes
//!     let router = create_router::<ApiDoc>(api_routes, &CorsConfig::from_env()?)
//!         .merge(health_router(app_info!()));
//!
//!     create_production_app(router, &ServerConfig::from_env()?, async {}).await?;
//!     Ok(())
//! }
//! ```

pub mod auth;
pub mod errors;
pub mod http;
pub mod server;

// Re-export auth types
pub use auth::{
    ACCESS_TOKEN_TTL, AuthContext, JwtAuth, JwtClaims, JwtConfig, Unauthenticated,
    optional_jwt_auth_middleware,
};

// Re-export server types
pub use server::{
    HealthCheckFuture, HealthResponse, ShutdownCoordinator, create_production_app, create_router,
    health_router, run_health_checks, shutdown_signal,
};

// Re-export HTTP middleware
pub use http::{CorsConfig, create_cors_layer, no_store, security_headers};

// Re-export error types
pub use errors::{AppError, ErrorCode, error_response};
