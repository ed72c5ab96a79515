//! Category Service - Business logic layer

use axum_helpers::AuthContext;
use mongodb::bson::oid::ObjectId;
use std::sync::Arc;
use tracing::instrument;

use crate::error::{CategoryError, CategoryResult};
use crate::models::{CategoryDetails, CategoryResponse, UpdateCategory};
use crate::repository::CategoryRepository;

/// Parse a path identifier; only 24-character hex ObjectIds are accepted
pub fn parse_category_id(id: &str) -> CategoryResult<ObjectId> {
    ObjectId::parse_str(id).map_err(|_| CategoryError::InvalidIdentifier)
}

/// Category service providing the read, update and delete operations.
///
/// Checks run in a fixed order: caller identity, then identifier format,
/// then existence, then body, so a rejected request never reaches the
/// write path.
pub struct CategoryService<R: CategoryRepository> {
    repository: Arc<R>,
}

impl<R: CategoryRepository> CategoryService<R> {
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    /// Get a category with its products expanded
    #[instrument(skip(self))]
    pub async fn get_category(&self, id: &str) -> CategoryResult<CategoryDetails> {
        let id = parse_category_id(id)?;

        let category = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or(CategoryError::NotFound)?;

        let products = if category.products.is_empty() {
            Vec::new()
        } else {
            self.repository.find_products(&category.products).await?
        };

        Ok(CategoryDetails::populate(category, products))
    }

    /// Replace title and image of an existing category
    #[instrument(skip(self, auth, input), fields(user_id = ?auth.user_id))]
    pub async fn update_category(
        &self,
        auth: &AuthContext,
        id: &str,
        input: UpdateCategory,
    ) -> CategoryResult<CategoryResponse> {
        auth.require_user()?;
        let id = parse_category_id(id)?;

        if self.repository.find_by_id(id).await?.is_none() {
            return Err(CategoryError::NotFound);
        }

        let (title, image) = input.into_details()?;

        // None here means the category was deleted after the existence check
        let updated = self
            .repository
            .update_details(id, title, image)
            .await?
            .ok_or(CategoryError::NotFound)?;

        Ok(CategoryResponse::from(updated))
    }

    /// Delete a category and pull its id from every product.
    ///
    /// Deleting an unknown id succeeds. The two writes are not atomic; a
    /// failure in between leaves stale product references behind.
    #[instrument(skip(self, auth), fields(user_id = ?auth.user_id))]
    pub async fn delete_category(&self, auth: &AuthContext, id: &str) -> CategoryResult<()> {
        auth.require_user()?;
        let id = parse_category_id(id)?;

        let deleted = self.repository.delete(id).await?;
        let products_updated = self.repository.remove_category_from_products(id).await?;

        tracing::info!(
            category_id = %id,
            deleted,
            products_updated,
            "Category deleted"
        );
        Ok(())
    }
}

impl<R: CategoryRepository> Clone for CategoryService<R> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
        }
    }
}
