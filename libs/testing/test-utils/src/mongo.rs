//! MongoDB test infrastructure
//!
//! Provides a `TestMongo` helper that runs a throwaway MongoDB container.

use mongodb::{Client, Database};
use testcontainers::runners::AsyncRunner;
use testcontainers::{ContainerAsync, ImageExt};
use testcontainers_modules::mongo::Mongo;

const MONGO_PORT: u16 = 27017;

/// Test MongoDB wrapper that ensures proper cleanup
///
/// The container is stopped and removed when this struct is dropped.
///
/// # Example
///
/// ```no_run
/// use test_utils::TestMongo;
///
/// # async fn example() {
/// let mongo = TestMongo::new().await;
/// let db = mongo.database("shop_test");
/// // Build repositories on `db`
/// # }
/// ```
pub struct TestMongo {
    #[allow(dead_code)]
    container: ContainerAsync<Mongo>,
    client: Client,
    pub connection_string: String,
}

impl TestMongo {
    /// Start a MongoDB 7 container and connect to it
    pub async fn new() -> Self {
        let container = Mongo::default()
            .with_tag("7")
            .start()
            .await
            .expect("Failed to start MongoDB container");

        let host_port = container
            .get_host_port_ipv4(MONGO_PORT)
            .await
            .expect("Failed to get MongoDB port");

        let connection_string = format!("mongodb://127.0.0.1:{}", host_port);

        let client = Client::with_uri_str(&connection_string)
            .await
            .expect("Failed to create MongoDB client");

        tracing::info!(port = host_port, "Test MongoDB ready (mongo:7)");

        Self {
            container,
            client,
            connection_string,
        }
    }

    /// Cloned client (shares the connection pool)
    pub fn client(&self) -> Client {
        self.client.clone()
    }

    /// Handle to a database on the test server; databases are created lazily
    pub fn database(&self, name: &str) -> Database {
        self.client.database(name)
    }

    pub fn connection_string(&self) -> &str {
        &self.connection_string
    }
}

impl Drop for TestMongo {
    fn drop(&mut self) {
        tracing::debug!("Cleaning up test MongoDB container");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mongodb::bson::{Document, doc};

    #[tokio::test]
    #[ignore = "requires Docker"]
    async fn test_mongo_insert_find() {
        let mongo = TestMongo::new().await;
        let collection = mongo.database("test_utils").collection::<Document>("things");

        collection.insert_one(doc! { "name": "widget" }).await.unwrap();

        let found = collection
            .find_one(doc! { "name": "widget" })
            .await
            .unwrap()
            .unwrap();
        assert_eq!(found.get_str("name").unwrap(), "widget");
    }
}
