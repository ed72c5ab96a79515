use axum_helpers::{CorsConfig, JwtConfig};
use core_config::{AppInfo, FromEnv, app_info, server::ServerConfig};

// Import MongoDB config from the database library
use database::mongodb::MongoConfig;

// Re-export Environment for use in other modules
pub use core_config::Environment;

/// Application-specific configuration
/// Composes shared config components from the `config` library
#[derive(Clone, Debug)]
pub struct Config {
    pub app: AppInfo,
    pub mongodb: MongoConfig,
    pub server: ServerConfig,
    pub jwt: JwtConfig,
    pub cors: CorsConfig,
    pub environment: Environment,
}

impl Config {
    pub fn from_env() -> eyre::Result<Self> {
        let environment = Environment::from_env();
        let mongodb = MongoConfig::from_env()?;
        let server = ServerConfig::from_env()?;
        let jwt = JwtConfig::from_env()?;
        let cors = CorsConfig::from_env()?;

        Ok(Self {
            app: app_info!(),
            mongodb,
            server,
            jwt,
            cors,
            environment,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const VARS: [(&str, Option<&str>); 5] = [
        ("MONGODB_URL", Some("mongodb://localhost:27017")),
        ("MONGODB_DATABASE", Some("shop")),
        ("JWT_SECRET", Some("config-test-secret-with-32-characters!")),
        ("CORS_ALLOWED_ORIGIN", Some("http://localhost:3000")),
        ("PORT", Some("9090")),
    ];

    #[test]
    fn test_config_from_env() {
        temp_env::with_vars(VARS, || {
            let config = Config::from_env().unwrap();

            assert_eq!(config.app.name, "categories_api");
            assert_eq!(config.mongodb.database(), "shop");
            assert_eq!(config.server.port, 9090);
            assert_eq!(config.cors.allowed_origins.len(), 1);
        });
    }

    #[test]
    fn test_config_requires_jwt_secret() {
        let mut vars = VARS.to_vec();
        vars[2] = ("JWT_SECRET", None);

        temp_env::with_vars(vars, || {
            assert!(Config::from_env().is_err());
        });
    }
}
