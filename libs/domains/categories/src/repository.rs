use async_trait::async_trait;
use mongodb::bson::oid::ObjectId;

use crate::error::CategoryResult;
use crate::models::{Category, Product};

/// Data access for categories and the product back-references they own.
///
/// Implementations report store failures as `CategoryError::Database`;
/// "not found" is expressed through `Option`/`bool` so the service decides
/// which client error applies.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CategoryRepository: Send + Sync {
    /// Get a category by ID
    async fn find_by_id(&self, id: ObjectId) -> CategoryResult<Option<Category>>;

    /// Fetch the products with the given IDs, in any order
    async fn find_products(&self, ids: &[ObjectId]) -> CategoryResult<Vec<Product>>;

    /// Set title and image, returning the document after the update
    async fn update_details(
        &self,
        id: ObjectId,
        title: String,
        image: String,
    ) -> CategoryResult<Option<Category>>;

    /// Delete a category; `false` when nothing matched
    async fn delete(&self, id: ObjectId) -> CategoryResult<bool>;

    /// Pull `id` out of every product's `categories`, returning how many
    /// products changed
    async fn remove_category_from_products(&self, id: ObjectId) -> CategoryResult<u64>;
}
