//! JWT settings loaded through `core_config::FromEnv`, like `MongoConfig`.

use core_config::{ConfigError, FromEnv, env_parse, env_required};

use super::jwt::ACCESS_TOKEN_TTL;

const MIN_SECRET_LEN: usize = 32;

/// JWT authentication configuration.
///
/// Loaded from environment variables:
/// - `JWT_SECRET` (required) - HS256 signing secret, at least 32 characters
/// - `JWT_ACCESS_TOKEN_TTL_SECS` (default: 900)
///
/// # Example
///
/// ```ignore
/// use axum_helpers::JwtConfig;
/// use core_config::FromEnv;
///
/// let config = JwtConfig::from_env()?;
///
/// // Manual construction (for testing)
/// let config = JwtConfig::new("my-super-secret-key-that-is-at-least-32-chars")?;
/// ```
#[derive(Clone, Debug)]
pub struct JwtConfig {
    pub secret: String,
    pub access_token_ttl_secs: i64,
}

impl JwtConfig {
    /// Config with the default access token lifetime.
    ///
    /// Fails when the secret is shorter than 32 characters.
    pub fn new(secret: impl Into<String>) -> Result<Self, ConfigError> {
        let secret = validate_secret(secret.into())?;
        Ok(Self {
            secret,
            access_token_ttl_secs: ACCESS_TOKEN_TTL,
        })
    }

    pub fn with_access_token_ttl(mut self, ttl_secs: i64) -> Self {
        self.access_token_ttl_secs = ttl_secs;
        self
    }
}

fn validate_secret(secret: String) -> Result<String, ConfigError> {
    if secret.len() < MIN_SECRET_LEN {
        return Err(ConfigError::ParseError {
            key: "JWT_SECRET".to_string(),
            details: format!(
                "must be at least {MIN_SECRET_LEN} characters (got {}). Generate one with: openssl rand -base64 32",
                secret.len()
            ),
        });
    }
    Ok(secret)
}

impl FromEnv for JwtConfig {
    fn from_env() -> Result<Self, ConfigError> {
        let secret = validate_secret(env_required("JWT_SECRET")?)?;
        let access_token_ttl_secs =
            env_parse("JWT_ACCESS_TOKEN_TTL_SECS", &ACCESS_TOKEN_TTL.to_string())?;

        Ok(Self {
            secret,
            access_token_ttl_secs,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECRET: &str = "this-is-a-valid-secret-with-32-chars!";

    #[test]
    fn test_jwt_config_new_valid() {
        let config = JwtConfig::new(SECRET).unwrap();
        assert_eq!(config.secret, SECRET);
        assert_eq!(config.access_token_ttl_secs, 900);
    }

    #[test]
    fn test_jwt_config_new_too_short() {
        let err = JwtConfig::new("short").unwrap_err();
        assert!(err.to_string().contains("JWT_SECRET"));
    }

    #[test]
    fn test_jwt_config_from_env_valid() {
        temp_env::with_vars(
            [
                ("JWT_SECRET", Some(SECRET)),
                ("JWT_ACCESS_TOKEN_TTL_SECS", Some("60")),
            ],
            || {
                let config = JwtConfig::from_env().unwrap();
                assert_eq!(config.secret, SECRET);
                assert_eq!(config.access_token_ttl_secs, 60);
            },
        );
    }

    #[test]
    fn test_jwt_config_from_env_missing() {
        temp_env::with_var_unset("JWT_SECRET", || {
            let err = JwtConfig::from_env().unwrap_err();
            assert!(err.to_string().contains("JWT_SECRET"));
        });
    }

    #[test]
    fn test_jwt_config_from_env_too_short() {
        temp_env::with_var("JWT_SECRET", Some("short"), || {
            let err = JwtConfig::from_env().unwrap_err();
            assert!(err.to_string().contains("32 characters"));
        });
    }
}
