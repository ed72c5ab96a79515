//! Application state management.
//!
//! This module defines the shared application state used to build routers.

use axum_helpers::JwtAuth;
use mongodb::{Client, Database};

/// Shared application state.
///
/// Cloning is cheap: the MongoDB handles share one connection pool and
/// `JwtAuth` holds prepared keys.
#[derive(Clone)]
pub struct AppState {
    /// Application configuration loaded from environment variables
    pub config: crate::config::Config,
    /// MongoDB client (cloneable, shares underlying connection pool)
    pub mongo_client: Client,
    /// MongoDB database instance
    pub db: Database,
    /// Token verifier used by the auth middleware
    pub jwt: JwtAuth,
}
