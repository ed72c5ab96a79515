/// Unified error type for connecting to and probing a database
#[derive(Debug, thiserror::Error)]
pub enum DatabaseError {
    /// Driver-level MongoDB errors (URI parsing, pool setup, commands)
    #[cfg(feature = "mongodb")]
    #[error("MongoDB error: {0}")]
    Mongo(#[from] mongodb::error::Error),

    /// Client was built but the server never answered
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),
}

/// Result type alias for database operations
pub type DatabaseResult<T> = Result<T, DatabaseError>;
