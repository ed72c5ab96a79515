//! Reusable OpenAPI response types for the plain-text error bodies.

#[allow(unused_imports)]
use serde_json::json;
use utoipa::ToResponse;

#[derive(ToResponse)]
#[response(
    description = "Internal Server Error",
    content_type = "text/plain",
    example = json!("Internal error")
)]
pub struct InternalServerErrorResponse(pub String);

#[derive(ToResponse)]
#[response(
    description = "Bad Request - malformed identifier or missing fields",
    content_type = "text/plain",
    example = json!("Invalid category ID")
)]
pub struct BadRequestResponse(pub String);

#[derive(ToResponse)]
#[response(
    description = "Resource not found",
    content_type = "text/plain",
    example = json!("Category not found")
)]
pub struct NotFoundResponse(pub String);

#[derive(ToResponse)]
#[response(
    description = "Unauthorized - Authentication required",
    content_type = "text/plain",
    example = json!("Unauthorized")
)]
pub struct UnauthorizedResponse(pub String);
