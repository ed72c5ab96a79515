//! Authentication module.
//!
//! This module provides:
//! - Stateless HS256 JWT creation and verification
//! - A non-rejecting middleware that attaches verified claims to the request
//! - The [`AuthContext`] extractor handed to domain operations
//!
//! Routes stay reachable without a token; each operation decides whether it
//! needs a caller by calling [`AuthContext::require_user`].
//!
//! # Example
//!
//! ```ignore
//! use axum_helpers::auth::{JwtAuth, JwtConfig, optional_jwt_auth_middleware};
//! use core_config::FromEnv;
//!
//! let auth = JwtAuth::new(&JwtConfig::from_env()?);
//!
//! let routes = Router::new()
//!     .route("/categories/{categoryId}", get(handler))
//!     .layer(axum::middleware::from_fn_with_state(auth, optional_jwt_auth_middleware));
//! ```

pub mod config;
pub mod context;
pub mod jwt;
pub mod middleware;

// Re-export commonly used types
pub use config::JwtConfig;
pub use context::{AuthContext, Unauthenticated};
pub use jwt::{ACCESS_TOKEN_TTL, JwtAuth, JwtClaims};
pub use middleware::optional_jwt_auth_middleware;
