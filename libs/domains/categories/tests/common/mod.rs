//! In-memory repository shared by the HTTP-level tests

#![allow(dead_code)]

use async_trait::async_trait;
use domain_categories::{Category, CategoryError, CategoryRepository, CategoryResult, Product};
use mongodb::bson::oid::ObjectId;
use std::collections::HashMap;
use std::sync::{
    Arc, Mutex,
    atomic::{AtomicBool, AtomicUsize, Ordering},
};

#[derive(Default)]
struct Store {
    categories: HashMap<ObjectId, Category>,
    products: HashMap<ObjectId, Product>,
}

/// Cloneable handle; clones share the same store so a test can inspect
/// state after handing the repository to the service.
#[derive(Clone, Default)]
pub struct InMemoryCategoryRepository {
    store: Arc<Mutex<Store>>,
    writes: Arc<AtomicUsize>,
    fail: Arc<AtomicBool>,
}

impl InMemoryCategoryRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert_category(&self, category: Category) {
        self.store
            .lock()
            .unwrap()
            .categories
            .insert(category.id, category);
    }

    pub fn insert_product(&self, product: Product) {
        self.store
            .lock()
            .unwrap()
            .products
            .insert(product.id, product);
    }

    pub fn category(&self, id: ObjectId) -> Option<Category> {
        self.store.lock().unwrap().categories.get(&id).cloned()
    }

    pub fn product(&self, id: ObjectId) -> Option<Product> {
        self.store.lock().unwrap().products.get(&id).cloned()
    }

    /// Number of write operations that reached the store
    pub fn writes(&self) -> usize {
        self.writes.load(Ordering::SeqCst)
    }

    /// Make every subsequent call fail like an unreachable database
    pub fn fail_all(&self) {
        self.fail.store(true, Ordering::SeqCst);
    }

    fn check(&self) -> CategoryResult<()> {
        if self.fail.load(Ordering::SeqCst) {
            return Err(CategoryError::Database("connection refused".to_string()));
        }
        Ok(())
    }
}

#[async_trait]
impl CategoryRepository for InMemoryCategoryRepository {
    async fn find_by_id(&self, id: ObjectId) -> CategoryResult<Option<Category>> {
        self.check()?;
        Ok(self.category(id))
    }

    async fn find_products(&self, ids: &[ObjectId]) -> CategoryResult<Vec<Product>> {
        self.check()?;
        let store = self.store.lock().unwrap();
        Ok(store
            .products
            .values()
            .filter(|p| ids.contains(&p.id))
            .cloned()
            .collect())
    }

    async fn update_details(
        &self,
        id: ObjectId,
        title: String,
        image: String,
    ) -> CategoryResult<Option<Category>> {
        self.check()?;
        self.writes.fetch_add(1, Ordering::SeqCst);
        let mut store = self.store.lock().unwrap();
        Ok(store.categories.get_mut(&id).map(|category| {
            category.title = title;
            category.image = image;
            category.clone()
        }))
    }

    async fn delete(&self, id: ObjectId) -> CategoryResult<bool> {
        self.check()?;
        self.writes.fetch_add(1, Ordering::SeqCst);
        Ok(self.store.lock().unwrap().categories.remove(&id).is_some())
    }

    async fn remove_category_from_products(&self, id: ObjectId) -> CategoryResult<u64> {
        self.check()?;
        self.writes.fetch_add(1, Ordering::SeqCst);
        let mut store = self.store.lock().unwrap();
        let mut modified = 0;
        for product in store.products.values_mut() {
            let before = product.categories.len();
            product.categories.retain(|c| *c != id);
            if product.categories.len() != before {
                modified += 1;
            }
        }
        Ok(modified)
    }
}
