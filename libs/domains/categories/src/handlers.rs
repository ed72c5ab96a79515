//! HTTP handlers for the Categories API

use axum::{
    Json, Router,
    body::Bytes,
    extract::{Path, State},
    middleware,
    routing::get,
};
use axum_helpers::{
    AuthContext,
    errors::responses::{
        BadRequestResponse, InternalServerErrorResponse, NotFoundResponse, UnauthorizedResponse,
    },
    no_store,
};
use std::sync::Arc;
use utoipa::OpenApi;

use crate::error::{CategoryError, CategoryResult};
use crate::models::{CategoryDetails, CategoryResponse, ProductResponse, UpdateCategory};
use crate::repository::CategoryRepository;
use crate::service::CategoryService;

pub const CATEGORY_DELETED: &str = "Category is deleted";

/// OpenAPI documentation for Categories API
#[derive(OpenApi)]
#[openapi(
    paths(get_category, update_category, delete_category),
    components(
        schemas(CategoryDetails, CategoryResponse, ProductResponse, UpdateCategory),
        responses(
            BadRequestResponse,
            UnauthorizedResponse,
            NotFoundResponse,
            InternalServerErrorResponse
        )
    ),
    tags(
        (name = "Categories", description = "Category read, update and delete")
    )
)]
pub struct ApiDoc;

/// Create the categories router.
///
/// Mutating routes expect verified claims in the request extensions, so the
/// caller layers `optional_jwt_auth_middleware` on top. Every response is
/// marked `Cache-Control: no-store`.
pub fn router<R: CategoryRepository + 'static>(service: CategoryService<R>) -> Router {
    let shared_service = Arc::new(service);

    Router::new()
        .route(
            "/{categoryId}",
            get(get_category).post(update_category).delete(delete_category),
        )
        .layer(middleware::from_fn(no_store))
        .with_state(shared_service)
}

/// Log server-side failures with the operation that hit them
fn log_internal(operation: &'static str) -> impl Fn(&CategoryError) {
    move |err| {
        if err.is_internal() {
            tracing::error!(operation, error = %err, "Category request failed");
        }
    }
}

/// Get a category with its products
#[utoipa::path(
    get,
    path = "/{categoryId}",
    tag = "Categories",
    params(
        ("categoryId" = String, Path, description = "Category ObjectId (24 hex characters)")
    ),
    responses(
        (status = 200, description = "Category with products expanded", body = CategoryDetails),
        (status = 400, response = BadRequestResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn get_category<R: CategoryRepository>(
    State(service): State<Arc<CategoryService<R>>>,
    Path(category_id): Path<String>,
) -> CategoryResult<Json<CategoryDetails>> {
    let category = service
        .get_category(&category_id)
        .await
        .inspect_err(log_internal("get_category"))?;
    Ok(Json(category))
}

/// Update a category's title and image
///
/// The body is read leniently: malformed JSON or non-string fields are
/// reported as missing fields.
#[utoipa::path(
    post,
    path = "/{categoryId}",
    tag = "Categories",
    params(
        ("categoryId" = String, Path, description = "Category ObjectId (24 hex characters)")
    ),
    request_body = UpdateCategory,
    responses(
        (status = 200, description = "Category updated", body = CategoryResponse),
        (status = 400, response = BadRequestResponse),
        (status = 401, response = UnauthorizedResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    ),
    security(("bearer_auth" = []))
)]
async fn update_category<R: CategoryRepository>(
    State(service): State<Arc<CategoryService<R>>>,
    auth: AuthContext,
    Path(category_id): Path<String>,
    body: Bytes,
) -> CategoryResult<Json<CategoryResponse>> {
    let input = UpdateCategory::from_slice(&body);
    let category = service
        .update_category(&auth, &category_id, input)
        .await
        .inspect_err(log_internal("update_category"))?;
    Ok(Json(category))
}

/// Delete a category and remove it from all products
#[utoipa::path(
    delete,
    path = "/{categoryId}",
    tag = "Categories",
    params(
        ("categoryId" = String, Path, description = "Category ObjectId (24 hex characters)")
    ),
    responses(
        (status = 200, description = "Category deleted (also for unknown ids)", body = String, content_type = "text/plain"),
        (status = 400, response = BadRequestResponse),
        (status = 401, response = UnauthorizedResponse),
        (status = 500, response = InternalServerErrorResponse)
    ),
    security(("bearer_auth" = []))
)]
async fn delete_category<R: CategoryRepository>(
    State(service): State<Arc<CategoryService<R>>>,
    auth: AuthContext,
    Path(category_id): Path<String>,
) -> CategoryResult<&'static str> {
    service
        .delete_category(&auth, &category_id)
        .await
        .inspect_err(log_internal("delete_category"))?;
    Ok(CATEGORY_DELETED)
}
