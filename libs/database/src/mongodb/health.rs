use mongodb::{Client, bson::doc};
use std::time::Instant;

/// Result of a timed MongoDB ping
#[derive(Debug, Clone)]
pub struct HealthStatus {
    pub healthy: bool,
    /// Error text when the ping failed
    pub message: Option<String>,
    pub response_time_ms: u64,
}

async fn ping(client: &Client) -> mongodb::error::Result<()> {
    client
        .database("admin")
        .run_command(doc! { "ping": 1 })
        .await
        .map(|_| ())
}

/// `true` when the deployment answers a `ping`
pub async fn check_health(client: &Client) -> bool {
    ping(client).await.is_ok()
}

/// Ping with latency and error details
///
/// # Example
/// ```ignore
/// let status = database::mongodb::check_health_detailed(&client).await;
/// if !status.healthy {
///     tracing::warn!(error = ?status.message, "MongoDB unhealthy");
/// }
/// ```
pub async fn check_health_detailed(client: &Client) -> HealthStatus {
    let start = Instant::now();
    let result = ping(client).await;
    let response_time_ms = start.elapsed().as_millis() as u64;

    HealthStatus {
        healthy: result.is_ok(),
        message: result.err().map(|e| e.to_string()),
        response_time_ms,
    }
}
