use super::config::JwtConfig;
use chrono::{Duration, Utc};
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Default access token lifetime in seconds (15 minutes)
pub const ACCESS_TOKEN_TTL: i64 = 900;

/// JWT claims structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JwtClaims {
    pub sub: String, // Subject (user ID)
    #[serde(default)]
    pub roles: Vec<String>,
    pub exp: i64,
    pub iat: i64,
    pub jti: String,
}

/// Stateless HS256 token issuer and verifier
#[derive(Clone)]
pub struct JwtAuth {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    access_token_ttl: i64,
}

impl JwtAuth {
    /// # Example
    /// ```ignore
    /// use axum_helpers::{JwtAuth, JwtConfig};
    /// use core_config::FromEnv;
    ///
    /// let jwt_auth = JwtAuth::new(&JwtConfig::from_env()?);
    /// ```
    pub fn new(config: &JwtConfig) -> Self {
        tracing::info!("JWT auth initialized");
        Self {
            encoding_key: EncodingKey::from_secret(config.secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(config.secret.as_bytes()),
            access_token_ttl: config.access_token_ttl_secs,
        }
    }

    /// Create an access token with the configured lifetime
    pub fn create_access_token(&self, user_id: &str, roles: &[String]) -> eyre::Result<String> {
        self.create_token(user_id, roles, self.access_token_ttl)
    }

    /// Create a token expiring `ttl_seconds` from now (negative values yield expired tokens)
    pub fn create_token(
        &self,
        user_id: &str,
        roles: &[String],
        ttl_seconds: i64,
    ) -> eyre::Result<String> {
        let now = Utc::now();

        let claims = JwtClaims {
            sub: user_id.to_string(),
            roles: roles.to_vec(),
            exp: (now + Duration::seconds(ttl_seconds)).timestamp(),
            iat: now.timestamp(),
            jti: Uuid::new_v4().to_string(),
        };

        let token = encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)?;
        Ok(token)
    }

    /// Verify signature and expiry, then decode claims
    pub fn verify_token(&self, token: &str) -> eyre::Result<JwtClaims> {
        let token_data = decode::<JwtClaims>(
            token,
            &self.decoding_key,
            &Validation::new(Algorithm::HS256),
        )?;

        Ok(token_data.claims)
    }
}
