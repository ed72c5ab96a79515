//! MongoDB connector and utilities
//!
//! Provides client construction with pool settings, a startup retry loop,
//! health probes and rendering of BSON documents as API-friendly JSON.

mod config;
mod connector;
mod health;
mod json;

pub use config::MongoConfig;
pub use connector::{
    client_options, connect, connect_from_config, connect_from_config_with_retry,
    connect_with_retry,
};
pub use health::{HealthStatus, check_health, check_health_detailed};
pub use json::{bson_to_json, document_to_json};

// Re-export MongoDB types for convenience
pub use mongodb::{Client, Collection, Database};
