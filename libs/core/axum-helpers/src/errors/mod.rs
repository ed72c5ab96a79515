pub mod codes;
pub mod handlers;
pub mod responses;

pub use codes::ErrorCode;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::auth::Unauthenticated;

/// Application error type rendered as a plain-text HTTP response.
///
/// The body is the short client-facing message only. Internal errors always
/// answer `Internal error`; the caller logs the detail at `error` level with
/// its own context, so this conversion only traces it at `debug`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AppError {
    #[error("Bad Request: {0}")]
    BadRequest(String),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Not Found: {0}")]
    NotFound(String),

    #[error("Internal Server Error: {0}")]
    InternalServerError(String),
}

impl From<Unauthenticated> for AppError {
    fn from(_: Unauthenticated) -> Self {
        AppError::Unauthorized(ErrorCode::Unauthorized.default_message().to_string())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::BadRequest(msg) => {
                tracing::info!(error_code = ErrorCode::BadRequest.code(), "Bad request: {}", msg);
                (StatusCode::BAD_REQUEST, msg)
            }
            AppError::Unauthorized(msg) => {
                tracing::info!(
                    error_code = ErrorCode::Unauthorized.code(),
                    "Unauthorized: {}",
                    msg
                );
                (StatusCode::UNAUTHORIZED, msg)
            }
            AppError::NotFound(msg) => {
                tracing::info!(error_code = ErrorCode::NotFound.code(), "Not found: {}", msg);
                (StatusCode::NOT_FOUND, msg)
            }
            AppError::InternalServerError(detail) => {
                tracing::debug!(
                    error_code = ErrorCode::InternalError.code(),
                    "Internal server error: {}",
                    detail
                );
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorCode::InternalError.default_message().to_string(),
                )
            }
        };

        error_response(status, message)
    }
}

/// Build a `text/plain` error response.
///
/// # Example
///
/// ```rust,ignore
/// use axum::http::StatusCode;
/// use axum_helpers::errors::error_response;
///
/// let response = error_response(StatusCode::BAD_REQUEST, "Invalid category ID");
/// ```
pub fn error_response(status: StatusCode, message: impl Into<String>) -> Response {
    (status, message.into()).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;
    use axum::http::header;
    use std::sync::{Arc, Mutex};
    use tracing::{Event, Level, Subscriber};
    use tracing_subscriber::layer::{Context, Layer, SubscriberExt};

    async fn body_text(response: Response) -> String {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    #[tokio::test]
    async fn test_client_errors_render_message_as_plain_text() {
        let response = AppError::BadRequest("Invalid category ID".to_string()).into_response();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let content_type = response.headers()[header::CONTENT_TYPE].to_str().unwrap();
        assert!(content_type.starts_with("text/plain"));
        assert_eq!(body_text(response).await, "Invalid category ID");
    }

    #[tokio::test]
    async fn test_not_found_status() {
        let response = AppError::NotFound("Category not found".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(body_text(response).await, "Category not found");
    }

    #[tokio::test]
    async fn test_internal_error_hides_detail() {
        let response =
            AppError::InternalServerError("connection reset by peer".to_string()).into_response();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body_text(response).await, "Internal error");
    }

    #[derive(Clone, Default)]
    struct EventLevels(Arc<Mutex<Vec<Level>>>);

    impl<S: Subscriber> Layer<S> for EventLevels {
        fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
            self.0.lock().unwrap().push(*event.metadata().level());
        }
    }

    #[test]
    fn test_internal_error_is_not_logged_at_error_level() {
        let levels = EventLevels::default();
        let subscriber = tracing_subscriber::registry().with(levels.clone());

        let response = tracing::subscriber::with_default(subscriber, || {
            AppError::InternalServerError("connection reset by peer".to_string()).into_response()
        });

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let levels = levels.0.lock().unwrap();
        assert_eq!(levels.as_slice(), &[Level::DEBUG]);
    }

    #[tokio::test]
    async fn test_unauthenticated_converts_to_401() {
        let response = AppError::from(Unauthenticated).into_response();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(body_text(response).await, "Unauthorized");
    }
}
