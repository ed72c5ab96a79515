//! Database library providing connectors and utilities for MongoDB
//!
//! # Features
//!
//! - `mongodb` (default) - MongoDB client construction, health checks and
//!   BSON to JSON rendering
//! - `config` - `core_config::FromEnv` support for [`mongodb::MongoConfig`]
//! - `all` - Everything above
//!
//! # Example
//!
//! ```ignore
//! use database::mongodb::{self, MongoConfig};
//!
//! let config = MongoConfig::with_database("mongodb://localhost:27017", "shop");
//! let client = mongodb::connect_from_config_with_retry(&config, None).await?;
//! let db = client.database(config.database());
//! ```

// Always available modules
pub mod common;

#[cfg(feature = "mongodb")]
pub mod mongodb;

// Re-exports for convenience
pub use common::{DatabaseError, DatabaseResult};
