//! Shared test utilities for domain testing
//!
//! - `TestMongo`: MongoDB container with automatic cleanup (feature: "mongo")
//! - `TestDataBuilder`: Deterministic test data generation (always available)
//!
//! # Usage
//!
//! ```rust,no_run
//! use test_utils::{TestDataBuilder, TestMongo};
//!
//! #[tokio::test]
//! #[ignore = "requires Docker"]
//! async fn my_mongo_test() {
//!     let mongo = TestMongo::new().await;
//!     let db = mongo.database("my_test");
//!     let builder = TestDataBuilder::from_test_name("my_test");
//!
//!     let category_id = builder.object_id(1);
//!     let title = builder.name("category", "main");
//! }
//! ```

use uuid::Uuid;

#[cfg(feature = "mongo")]
mod mongo;

#[cfg(feature = "mongo")]
pub use mongo::TestMongo;

/// Builder for test data with deterministic randomization
///
/// This ensures tests are reproducible by using seeded data.
pub struct TestDataBuilder {
    seed: u64,
}

impl TestDataBuilder {
    /// Create a new builder with a seed (for deterministic tests)
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }

    /// Create from test name (generates seed from test name hash)
    ///
    /// # Example
    ///
    /// ```
    /// use test_utils::TestDataBuilder;
    ///
    /// let builder = TestDataBuilder::from_test_name("test_delete_category");
    /// ```
    pub fn from_test_name(name: &str) -> Self {
        use std::collections::hash_map::DefaultHasher;
        use std::hash::{Hash, Hasher};

        let mut hasher = DefaultHasher::new();
        name.hash(&mut hasher);
        Self::new(hasher.finish())
    }

    /// Deterministic user ID, e.g. for the `sub` claim of a test token
    pub fn user_id(&self) -> Uuid {
        let bytes = self.seed.to_le_bytes();
        let mut uuid_bytes = [0u8; 16];
        uuid_bytes[..8].copy_from_slice(&bytes);
        uuid_bytes[8..16].copy_from_slice(&bytes);
        Uuid::from_bytes(uuid_bytes)
    }

    /// Deterministic ObjectId; `n` distinguishes ids within one test
    #[cfg(feature = "mongo")]
    pub fn object_id(&self, n: u32) -> mongodb::bson::oid::ObjectId {
        let mut bytes = [0u8; 12];
        bytes[..8].copy_from_slice(&self.seed.to_be_bytes());
        bytes[8..].copy_from_slice(&n.to_be_bytes());
        mongodb::bson::oid::ObjectId::from_bytes(bytes)
    }

    /// Generate a unique name for testing
    ///
    /// # Example
    ///
    /// ```
    /// use test_utils::TestDataBuilder;
    ///
    /// let builder = TestDataBuilder::new(12345);
    /// assert_eq!(builder.name("category", "main"), "test-category-12345-main");
    /// ```
    pub fn name(&self, prefix: &str, suffix: &str) -> String {
        format!("test-{}-{}-{}", prefix, self.seed, suffix)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_data_builder_deterministic() {
        let builder1 = TestDataBuilder::new(42);
        let builder2 = TestDataBuilder::new(42);

        assert_eq!(builder1.user_id(), builder2.user_id());
        assert_eq!(
            builder1.name("category", "test"),
            builder2.name("category", "test")
        );
    }

    #[test]
    fn test_data_builder_different_names() {
        let builder1 = TestDataBuilder::from_test_name("test1");
        let builder2 = TestDataBuilder::from_test_name("test2");

        assert_ne!(builder1.user_id(), builder2.user_id());
    }

    #[cfg(feature = "mongo")]
    #[test]
    fn test_object_ids_distinct_and_stable() {
        let builder = TestDataBuilder::from_test_name("ids");

        assert_eq!(builder.object_id(1), builder.object_id(1));
        assert_ne!(builder.object_id(1), builder.object_id(2));
        assert_eq!(builder.object_id(7).to_hex().len(), 24);
    }
}
