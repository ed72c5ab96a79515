use axum::response::{IntoResponse, Response};
use axum_helpers::{AppError, Unauthenticated};
use thiserror::Error;
use validator::ValidationErrors;

/// Errors surfaced by category operations.
///
/// The `Display` text of the client-facing variants is the exact response
/// body.
#[derive(Debug, Error)]
pub enum CategoryError {
    #[error("Invalid category ID")]
    InvalidIdentifier,

    #[error("Unauthorized")]
    Unauthorized,

    #[error("Title and image are required")]
    Validation,

    #[error("Category not found")]
    NotFound,

    #[error("Database error: {0}")]
    Database(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

pub type CategoryResult<T> = Result<T, CategoryError>;

impl CategoryError {
    /// Whether the error is a server-side failure rather than a bad request
    pub fn is_internal(&self) -> bool {
        matches!(self, CategoryError::Database(_) | CategoryError::Internal(_))
    }
}

/// Convert CategoryError to AppError for standardized error responses
impl From<CategoryError> for AppError {
    fn from(err: CategoryError) -> Self {
        let message = err.to_string();
        match err {
            CategoryError::InvalidIdentifier | CategoryError::Validation => {
                AppError::BadRequest(message)
            }
            CategoryError::Unauthorized => AppError::Unauthorized(message),
            CategoryError::NotFound => AppError::NotFound(message),
            CategoryError::Database(_) | CategoryError::Internal(_) => {
                AppError::InternalServerError(message)
            }
        }
    }
}

impl IntoResponse for CategoryError {
    fn into_response(self) -> Response {
        let app_error: AppError = self.into();
        app_error.into_response()
    }
}

impl From<mongodb::error::Error> for CategoryError {
    fn from(err: mongodb::error::Error) -> Self {
        CategoryError::Database(err.to_string())
    }
}

impl From<Unauthenticated> for CategoryError {
    fn from(_: Unauthenticated) -> Self {
        CategoryError::Unauthorized
    }
}

impl From<ValidationErrors> for CategoryError {
    fn from(err: ValidationErrors) -> Self {
        tracing::debug!(errors = %err, "Category update rejected");
        CategoryError::Validation
    }
}
