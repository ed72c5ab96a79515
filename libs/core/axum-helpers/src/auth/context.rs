use axum::{extract::FromRequestParts, http::request::Parts};
use std::convert::Infallible;
use thiserror::Error;

use super::jwt::JwtClaims;

/// Returned by [`AuthContext::require_user`] for anonymous callers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("authentication required")]
pub struct Unauthenticated;

/// Caller identity resolved for the current request.
///
/// Extracting it never fails: without verified [`JwtClaims`] in the request
/// extensions the context is anonymous.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AuthContext {
    pub user_id: Option<String>,
}

impl AuthContext {
    pub fn anonymous() -> Self {
        Self::default()
    }

    pub fn user(user_id: impl Into<String>) -> Self {
        Self {
            user_id: Some(user_id.into()),
        }
    }

    /// Context for verified claims; an empty `sub` stays anonymous
    pub fn from_claims(claims: &JwtClaims) -> Self {
        Self {
            user_id: Some(claims.sub.clone()).filter(|sub| !sub.is_empty()),
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.user_id.is_some()
    }

    /// The caller's user id, or [`Unauthenticated`]
    pub fn require_user(&self) -> Result<&str, Unauthenticated> {
        self.user_id.as_deref().ok_or(Unauthenticated)
    }
}

impl<S> FromRequestParts<S> for AuthContext
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(parts
            .extensions
            .get::<JwtClaims>()
            .map(AuthContext::from_claims)
            .unwrap_or_default())
    }
}
