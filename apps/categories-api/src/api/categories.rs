//! Categories API routes
//!
//! This module wires up the categories domain to HTTP routes.

use axum::{Router, middleware};
use axum_helpers::optional_jwt_auth_middleware;
use domain_categories::{CategoryService, MongoCategoryRepository, handlers};
use mongodb::Database;

use crate::state::AppState;

/// Create categories router
///
/// Tokens are verified for every request; handlers that mutate data reject
/// anonymous callers themselves.
pub fn router(state: &AppState) -> Router {
    // Create the MongoDB repository
    let repository = MongoCategoryRepository::new(&state.db);

    // Create the service
    let service = CategoryService::new(repository);

    handlers::router(service).layer(middleware::from_fn_with_state(
        state.jwt.clone(),
        optional_jwt_auth_middleware,
    ))
}

/// Create the indexes the categories domain relies on
pub async fn init_indexes(db: &Database) -> eyre::Result<()> {
    MongoCategoryRepository::new(db).init_indexes().await?;
    Ok(())
}
