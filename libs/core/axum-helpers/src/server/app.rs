use super::shutdown::ShutdownCoordinator;
use crate::errors::handlers::not_found;
use crate::http::cors::{CorsConfig, create_cors_layer};
use crate::http::security::security_headers;
use axum::{Router, middleware};
use core_config::server::ServerConfig;
use std::io;
use tower_http::compression::CompressionLayer;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::{Level, info};
use utoipa::OpenApi;

/// Creates a configured Axum router with common middleware and documentation.
///
/// This function sets up:
/// - OpenAPI documentation (Swagger UI, ReDoc, RapiDoc, Scalar)
/// - API routes nested under `/api`
/// - Common middleware (tracing, security headers, CORS, compression)
/// - Plain-text 404 fallback
///
/// Health endpoints are merged by the app with `health_router()`.
///
/// Domain routers apply their own state before being passed in.
///
/// # Example
/// ```ignore
/// use axum_helpers::{CorsConfig, server::create_router};
/// use core_config::FromEnv;
///
/// let api_routes = Router::new().merge(domain_categories::handlers::router(service));
/// let router = create_router::<ApiDoc>(api_routes, &CorsConfig::from_env()?);
/// ```
pub fn create_router<T>(apis: Router, cors: &CorsConfig) -> Router
where
    T: OpenApi + 'static,
{
    use utoipa_rapidoc::RapiDoc;
    use utoipa_redoc::{Redoc, Servable as RedocServable};
    use utoipa_scalar::{Scalar, Servable as ScalarServable};
    use utoipa_swagger_ui::SwaggerUi;

    info!(origins = ?cors.allowed_origins, "CORS configured");

    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", T::openapi()))
        .merge(Redoc::with_url("/redoc", T::openapi()))
        .merge(RapiDoc::new("/api-docs/openapi.json").path("/rapidoc"))
        .merge(Scalar::with_url("/scalar", T::openapi()))
        .nest("/api", apis)
        .fallback(not_found)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .layer(middleware::from_fn(security_headers))
        .layer(create_cors_layer(cors))
        .layer(CompressionLayer::new())
}

/// Serve `router` until SIGINT/SIGTERM, then run `cleanup`.
///
/// In-flight requests are drained before `cleanup` starts; cleanup is
/// bounded by `server_config.shutdown_timeout`.
///
/// # Example
/// ```ignore
/// use axum_helpers::server::create_production_app;
///
/// let cleanup = async move {
///     drop(mongo_client);
/// };
///
/// create_production_app(router, &config.server, cleanup).await?;
/// ```
pub async fn create_production_app<F>(
    router: Router,
    server_config: &ServerConfig,
    cleanup: F,
) -> io::Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let coordinator = ShutdownCoordinator::default();
    let shutdown_timeout = server_config.shutdown_timeout;

    let listener = tokio::net::TcpListener::bind(server_config.address()).await?;
    info!("Server starting on {}", listener.local_addr()?);

    let signal = coordinator.clone();
    let serve_result = axum::serve(listener, router.into_make_service())
        .with_graceful_shutdown(async move { signal.wait_for_signal().await })
        .await
        .inspect_err(|e| {
            tracing::error!("Server encountered an error: {:?}", e);
        });

    info!("Starting cleanup tasks (timeout: {:?})", shutdown_timeout);
    match tokio::time::timeout(shutdown_timeout, cleanup).await {
        Ok(()) => info!("Cleanup completed successfully"),
        Err(_) => tracing::warn!(
            "Cleanup exceeded timeout of {:?}, forcing shutdown",
            shutdown_timeout
        ),
    }

    serve_result
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::Body,
        http::{Request, StatusCode, header},
        routing::get,
    };
    use tower::ServiceExt;

    #[derive(OpenApi)]
    #[openapi(paths())]
    struct EmptyDoc;

    fn cors() -> CorsConfig {
        CorsConfig::parse("http://localhost:3000").unwrap()
    }

    async fn get_path(router: Router, uri: &str) -> axum::response::Response {
        router
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn test_api_routes_nested_under_api() {
        let apis = Router::new().route("/ping", get(|| async { "pong" }));
        let router = create_router::<EmptyDoc>(apis, &cors());

        let response = get_path(router, "/api/ping").await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(response.headers()[header::X_CONTENT_TYPE_OPTIONS], "nosniff");
    }

    #[tokio::test]
    async fn test_unknown_route_is_plain_text_404() {
        let router = create_router::<EmptyDoc>(Router::new(), &cors());

        let response = get_path(router, "/nope").await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        assert_eq!(&bytes[..], b"Not found");
    }

    #[tokio::test]
    async fn test_openapi_document_served() {
        let router = create_router::<EmptyDoc>(Router::new(), &cors());
        let response = get_path(router, "/api-docs/openapi.json").await;
        assert_eq!(response.status(), StatusCode::OK);
    }
}
