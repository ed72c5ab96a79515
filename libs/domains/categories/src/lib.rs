//! Categories Domain
//!
//! Read, update and delete a single category stored in MongoDB, keeping the
//! `products.categories` back-references consistent on delete.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐
//! │  Handlers   │  ← HTTP endpoints, lenient body parsing
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Service   │  ← Auth, id and body checks, delete cascade
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │ Repository  │  ← Data access (trait + MongoDB implementation)
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Models    │  ← Stored documents, response DTOs
//! └─────────────┘
//! ```
//!
//! # Usage
//!
//! ```rust,no_run
//! use domain_categories::{handlers, CategoryService, MongoCategoryRepository};
//! use mongodb::Client;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = Client::with_uri_str("mongodb://localhost:27017").await?;
//! let db = client.database("shop");
//!
//! let repository = MongoCategoryRepository::new(&db);
//! repository.init_indexes().await?;
//! let service = CategoryService::new(repository);
//!
//! let router = handlers::router(service);
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod handlers;
pub mod models;
pub mod mongodb;
pub mod repository;
pub mod service;

// Re-export commonly used types
pub use error::{CategoryError, CategoryResult};
pub use handlers::ApiDoc;
pub use models::{
    Category, CategoryDetails, CategoryResponse, Product, ProductResponse, UpdateCategory,
};
pub use crate::mongodb::MongoCategoryRepository;
pub use repository::CategoryRepository;
pub use service::CategoryService;
