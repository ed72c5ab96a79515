use super::jwt::JwtAuth;
use axum::{
    extract::{Request, State},
    http::{HeaderMap, header},
    middleware::Next,
    response::Response,
};

const ACCESS_TOKEN_COOKIE: &str = "access_token";

/// Extract JWT from Authorization header or cookie
fn extract_token_from_request(headers: &HeaderMap) -> Option<String> {
    // Try Authorization header first: "Bearer <token>"
    headers
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .and_then(|auth| auth.strip_prefix("Bearer "))
        .map(|token| token.trim().to_string())
        .or_else(|| {
            // Fallback to cookie: "access_token=<token>"
            headers
                .get(header::COOKIE)
                .and_then(|v| v.to_str().ok())
                .and_then(|cookies| {
                    cookies.split(';').find_map(|cookie| {
                        let (name, value) = cookie.trim().split_once('=')?;
                        (name == ACCESS_TOKEN_COOKIE).then(|| value.to_string())
                    })
                })
        })
        .filter(|token| !token.is_empty())
}

/// Optional JWT authentication middleware
///
/// Verifies a token from the Authorization header or the `access_token`
/// cookie and inserts the [`JwtClaims`](super::JwtClaims) into request
/// extensions. Missing or invalid tokens leave the request anonymous; the
/// handler decides whether that is acceptable.
///
/// # Example
///
/// ```ignore
/// use axum_helpers::{JwtAuth, optional_jwt_auth_middleware};
///
/// let routes = Router::new()
///     .route("/categories/{categoryId}", get(read).post(update))
///     .layer(axum::middleware::from_fn_with_state(
///         auth.clone(),
///         optional_jwt_auth_middleware,
///     ));
/// ```
pub async fn optional_jwt_auth_middleware(
    State(auth): State<JwtAuth>,
    headers: HeaderMap,
    mut request: Request,
    next: Next,
) -> Response {
    if let Some(token) = extract_token_from_request(&headers) {
        match auth.verify_token(&token) {
            Ok(claims) => {
                request.extensions_mut().insert(claims);
            }
            Err(e) => {
                tracing::debug!("JWT verification failed: {}", e);
            }
        }
    }

    next.run(request).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::{AuthContext, JwtConfig};
    use axum::{Router, body::Body, routing::get};
    use axum::http::{HeaderValue, StatusCode};
    use tower::ServiceExt;

    const SECRET: &str = "this-is-a-valid-secret-with-32-chars!";

    async fn whoami(ctx: AuthContext) -> String {
        ctx.user_id.unwrap_or_else(|| "anonymous".to_string())
    }

    fn app(auth: JwtAuth) -> Router {
        Router::new()
            .route("/whoami", get(whoami))
            .layer(axum::middleware::from_fn_with_state(
                auth,
                optional_jwt_auth_middleware,
            ))
    }

    async fn call(app: Router, header: Option<(&'static str, String)>) -> String {
        let mut builder = Request::builder().uri("/whoami");
        if let Some((name, value)) = header {
            builder = builder.header(name, value);
        }
        let response = app.oneshot(builder.body(Body::empty()).unwrap()).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    #[test]
    fn test_extract_token_from_bearer_header() {
        let mut headers = HeaderMap::new();
        headers.insert(header::AUTHORIZATION, HeaderValue::from_static("Bearer abc.def"));
        assert_eq!(extract_token_from_request(&headers).as_deref(), Some("abc.def"));
    }

    #[test]
    fn test_extract_token_from_cookie() {
        let mut headers = HeaderMap::new();
        headers.insert(
            header::COOKIE,
            HeaderValue::from_static("theme=dark; access_token=abc.def; lang=en"),
        );
        assert_eq!(extract_token_from_request(&headers).as_deref(), Some("abc.def"));
    }

    #[test]
    fn test_extract_token_ignores_other_schemes() {
        let mut headers = HeaderMap::new();
        headers.insert(header::AUTHORIZATION, HeaderValue::from_static("Basic Zm9vOmJhcg=="));
        assert!(extract_token_from_request(&headers).is_none());
    }

    #[tokio::test]
    async fn test_valid_token_sets_user() {
        let auth = JwtAuth::new(&JwtConfig::new(SECRET).unwrap());
        let token = auth.create_access_token("user-7", &[]).unwrap();

        let body = call(app(auth), Some(("authorization", format!("Bearer {token}")))).await;
        assert_eq!(body, "user-7");
    }

    #[tokio::test]
    async fn test_missing_token_is_anonymous() {
        let auth = JwtAuth::new(&JwtConfig::new(SECRET).unwrap());
        assert_eq!(call(app(auth), None).await, "anonymous");
    }

    #[tokio::test]
    async fn test_invalid_token_is_anonymous() {
        let auth = JwtAuth::new(&JwtConfig::new(SECRET).unwrap());
        let body = call(app(auth), Some(("cookie", "access_token=forged".to_string()))).await;
        assert_eq!(body, "anonymous");
    }
}
