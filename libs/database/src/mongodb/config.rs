#[cfg(feature = "config")]
use core_config::{ConfigError, FromEnv, env_parse};

const DEFAULT_MAX_POOL_SIZE: u32 = 100;
const DEFAULT_MIN_POOL_SIZE: u32 = 5;
const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;
const DEFAULT_SERVER_SELECTION_TIMEOUT_SECS: u64 = 30;

/// MongoDB connection settings
///
/// # Example
///
/// ```ignore
/// use database::mongodb::MongoConfig;
///
/// let config = MongoConfig::with_database("mongodb://localhost:27017", "shop")
///     .with_app_name("categories-api");
///
/// // From environment variables (requires `config` feature)
/// let config = MongoConfig::from_env()?;
/// ```
#[derive(Clone, Debug)]
pub struct MongoConfig {
    /// Format: mongodb://[username:password@]host[:port][/database][?options]
    pub url: String,

    /// Database holding the application collections
    pub database: String,

    /// Reported to the server in connection handshakes
    pub app_name: Option<String>,

    pub max_pool_size: u32,

    pub min_pool_size: u32,

    pub connect_timeout_secs: u64,

    pub server_selection_timeout_secs: u64,
}

impl MongoConfig {
    /// URL with the `default` database and default pool settings
    pub fn new(url: impl Into<String>) -> Self {
        Self::with_database(url, "default")
    }

    pub fn with_database(url: impl Into<String>, database: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            database: database.into(),
            app_name: None,
            max_pool_size: DEFAULT_MAX_POOL_SIZE,
            min_pool_size: DEFAULT_MIN_POOL_SIZE,
            connect_timeout_secs: DEFAULT_CONNECT_TIMEOUT_SECS,
            server_selection_timeout_secs: DEFAULT_SERVER_SELECTION_TIMEOUT_SECS,
        }
    }

    pub fn with_pool_size(mut self, max_pool_size: u32, min_pool_size: u32) -> Self {
        self.max_pool_size = max_pool_size;
        self.min_pool_size = min_pool_size;
        self
    }

    pub fn with_app_name(mut self, app_name: impl Into<String>) -> Self {
        self.app_name = Some(app_name.into());
        self
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn database(&self) -> &str {
        &self.database
    }

    /// The URL with any `user:password@` section masked, safe for logs
    pub fn redacted_url(&self) -> String {
        match (self.url.find("://"), self.url.rfind('@')) {
            (Some(scheme_end), Some(at)) if at > scheme_end => {
                format!("{}://***@{}", &self.url[..scheme_end], &self.url[at + 1..])
            }
            _ => self.url.clone(),
        }
    }
}

impl Default for MongoConfig {
    fn default() -> Self {
        Self::new("mongodb://localhost:27017")
    }
}

/// Load MongoConfig from environment variables
///
/// - `MONGODB_URL` or `MONGO_URL` (required)
/// - `MONGODB_DATABASE` or `MONGO_DATABASE` (required)
/// - `MONGODB_APP_NAME` (optional)
/// - `MONGODB_MAX_POOL_SIZE` (default: 100)
/// - `MONGODB_MIN_POOL_SIZE` (default: 5)
/// - `MONGODB_CONNECT_TIMEOUT_SECS` (default: 10)
/// - `MONGODB_SERVER_SELECTION_TIMEOUT_SECS` (default: 30)
#[cfg(feature = "config")]
impl FromEnv for MongoConfig {
    fn from_env() -> Result<Self, ConfigError> {
        let url = std::env::var("MONGODB_URL")
            .or_else(|_| std::env::var("MONGO_URL"))
            .map_err(|_| ConfigError::MissingEnvVar("MONGODB_URL or MONGO_URL".to_string()))?;

        let database = std::env::var("MONGODB_DATABASE")
            .or_else(|_| std::env::var("MONGO_DATABASE"))
            .map_err(|_| {
                ConfigError::MissingEnvVar("MONGODB_DATABASE or MONGO_DATABASE".to_string())
            })?;

        Ok(Self {
            url,
            database,
            app_name: std::env::var("MONGODB_APP_NAME").ok(),
            max_pool_size: env_parse(
                "MONGODB_MAX_POOL_SIZE",
                &DEFAULT_MAX_POOL_SIZE.to_string(),
            )?,
            min_pool_size: env_parse(
                "MONGODB_MIN_POOL_SIZE",
                &DEFAULT_MIN_POOL_SIZE.to_string(),
            )?,
            connect_timeout_secs: env_parse(
                "MONGODB_CONNECT_TIMEOUT_SECS",
                &DEFAULT_CONNECT_TIMEOUT_SECS.to_string(),
            )?,
            server_selection_timeout_secs: env_parse(
                "MONGODB_SERVER_SELECTION_TIMEOUT_SECS",
                &DEFAULT_SERVER_SELECTION_TIMEOUT_SECS.to_string(),
            )?,
        })
    }
}
