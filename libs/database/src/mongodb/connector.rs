use mongodb::{Client, bson::doc, options::ClientOptions};
use std::time::Duration;
use tracing::info;

use super::MongoConfig;
use crate::common::{DatabaseError, DatabaseResult, RetryConfig, retry_with_backoff};

/// Parse the connection string and apply pool/timeout settings from `config`
pub async fn client_options(config: &MongoConfig) -> DatabaseResult<ClientOptions> {
    let mut options = ClientOptions::parse(&config.url).await?;

    options.max_pool_size = Some(config.max_pool_size);
    options.min_pool_size = Some(config.min_pool_size);
    options.connect_timeout = Some(Duration::from_secs(config.connect_timeout_secs));
    options.server_selection_timeout =
        Some(Duration::from_secs(config.server_selection_timeout_secs));

    if let Some(ref app_name) = config.app_name {
        options.app_name = Some(app_name.clone());
    }

    Ok(options)
}

/// Build a client and confirm the deployment answers a `ping`.
///
/// The driver connects lazily, so without the ping a wrong URL would only
/// surface on the first request.
async fn connect_with_options(options: ClientOptions) -> DatabaseResult<Client> {
    let client = Client::with_options(options)?;

    client
        .database("admin")
        .run_command(doc! { "ping": 1 })
        .await
        .map_err(|e| DatabaseError::ConnectionFailed(e.to_string()))?;

    Ok(client)
}

/// Connect to MongoDB with default pool settings
///
/// # Example
/// ```ignore
/// use database::mongodb::connect;
///
/// let client = connect("mongodb://localhost:27017").await?;
/// let db = client.database("shop");
/// ```
pub async fn connect(url: &str) -> DatabaseResult<Client> {
    connect_from_config(&MongoConfig::new(url)).await
}

/// Connect using a MongoConfig
pub async fn connect_from_config(config: &MongoConfig) -> DatabaseResult<Client> {
    info!(url = %config.redacted_url(), "Attempting to connect to MongoDB");

    let options = client_options(config).await?;
    let client = connect_with_options(options).await?;

    info!(database = %config.database(), "Successfully connected to MongoDB");
    Ok(client)
}

/// Connect with exponential backoff; `None` uses [`RetryConfig::default`]
pub async fn connect_with_retry(
    url: &str,
    retry_config: Option<RetryConfig>,
) -> DatabaseResult<Client> {
    connect_from_config_with_retry(&MongoConfig::new(url), retry_config).await
}

/// Connect from config with exponential backoff
///
/// # Example
/// ```ignore
/// use database::common::RetryConfig;
/// use database::mongodb::{MongoConfig, connect_from_config_with_retry};
///
/// let config = MongoConfig::from_env()?;
/// let client = connect_from_config_with_retry(
///     &config,
///     Some(RetryConfig::new().with_max_retries(10)),
/// )
/// .await?;
/// ```
pub async fn connect_from_config_with_retry(
    config: &MongoConfig,
    retry_config: Option<RetryConfig>,
) -> DatabaseResult<Client> {
    let policy = retry_config.unwrap_or_default();
    retry_with_backoff(|| connect_from_config(config), policy).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_client_options_applies_config() {
        let config = MongoConfig::with_database("mongodb://localhost:27017", "shop")
            .with_pool_size(20, 2)
            .with_app_name("categories-api");

        let options = client_options(&config).await.unwrap();

        assert_eq!(options.max_pool_size, Some(20));
        assert_eq!(options.min_pool_size, Some(2));
        assert_eq!(options.connect_timeout, Some(Duration::from_secs(10)));
        assert_eq!(
            options.server_selection_timeout,
            Some(Duration::from_secs(30))
        );
        assert_eq!(options.app_name.as_deref(), Some("categories-api"));
    }

    #[tokio::test]
    async fn test_client_options_rejects_bad_scheme() {
        let config = MongoConfig::new("postgres://localhost:5432");
        let result = client_options(&config).await;
        assert!(matches!(result, Err(DatabaseError::Mongo(_))));
    }

    #[tokio::test]
    #[ignore] // Requires actual MongoDB
    async fn test_connect() {
        let mongo_url = std::env::var("MONGODB_URL")
            .unwrap_or_else(|_| "mongodb://localhost:27017".to_string());

        assert!(connect(&mongo_url).await.is_ok());
    }
}
