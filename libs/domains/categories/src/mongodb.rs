//! MongoDB implementation of CategoryRepository

use async_trait::async_trait;
use futures_util::TryStreamExt;
use mongodb::{
    Collection, Database, IndexModel,
    bson::{doc, oid::ObjectId},
    options::{IndexOptions, ReturnDocument},
};
use tracing::instrument;

use crate::error::CategoryResult;
use crate::models::{Category, Product};
use crate::repository::CategoryRepository;

pub const CATEGORIES_COLLECTION: &str = "categories";
pub const PRODUCTS_COLLECTION: &str = "products";

/// MongoDB implementation of the CategoryRepository
pub struct MongoCategoryRepository {
    categories: Collection<Category>,
    products: Collection<Product>,
}

impl MongoCategoryRepository {
    /// Use the `categories` and `products` collections of `db`
    pub fn new(db: &Database) -> Self {
        Self::with_collections(db, CATEGORIES_COLLECTION, PRODUCTS_COLLECTION)
    }

    /// Create a repository over custom collection names
    pub fn with_collections(db: &Database, categories: &str, products: &str) -> Self {
        Self {
            categories: db.collection::<Category>(categories),
            products: db.collection::<Product>(products),
        }
    }

    /// Index `products.categories` so the delete cascade does not scan
    pub async fn init_indexes(&self) -> CategoryResult<()> {
        let index = IndexModel::builder()
            .keys(doc! { "categories": 1 })
            .options(
                IndexOptions::builder()
                    .name("idx_categories".to_string())
                    .build(),
            )
            .build();

        self.products.create_index(index).await?;
        tracing::info!("Category indexes created successfully");
        Ok(())
    }

    /// Get the underlying categories collection
    pub fn categories(&self) -> &Collection<Category> {
        &self.categories
    }

    /// Get the underlying products collection
    pub fn products(&self) -> &Collection<Product> {
        &self.products
    }
}

#[async_trait]
impl CategoryRepository for MongoCategoryRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: ObjectId) -> CategoryResult<Option<Category>> {
        let category = self.categories.find_one(doc! { "_id": id }).await?;
        Ok(category)
    }

    #[instrument(skip(self, ids), fields(count = ids.len()))]
    async fn find_products(&self, ids: &[ObjectId]) -> CategoryResult<Vec<Product>> {
        let cursor = self.products.find(doc! { "_id": { "$in": ids.to_vec() } }).await?;
        let products: Vec<Product> = cursor.try_collect().await?;
        Ok(products)
    }

    #[instrument(skip(self, title, image))]
    async fn update_details(
        &self,
        id: ObjectId,
        title: String,
        image: String,
    ) -> CategoryResult<Option<Category>> {
        let updated = self
            .categories
            .find_one_and_update(
                doc! { "_id": id },
                doc! { "$set": { "title": title, "image": image } },
            )
            .return_document(ReturnDocument::After)
            .await?;

        if updated.is_some() {
            tracing::info!(category_id = %id, "Category updated successfully");
        }
        Ok(updated)
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: ObjectId) -> CategoryResult<bool> {
        let result = self.categories.delete_one(doc! { "_id": id }).await?;
        Ok(result.deleted_count > 0)
    }

    #[instrument(skip(self))]
    async fn remove_category_from_products(&self, id: ObjectId) -> CategoryResult<u64> {
        let result = self
            .products
            .update_many(
                doc! { "categories": id },
                doc! { "$pull": { "categories": id } },
            )
            .await?;

        Ok(result.modified_count)
    }
}
