use std::collections::HashMap;

use database::mongodb::document_to_json;
use mongodb::bson::{Document, oid::ObjectId};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use utoipa::ToSchema;
use validator::Validate;

use crate::error::{CategoryError, CategoryResult};

/// Category as stored in the `categories` collection.
///
/// Fields this service does not manage (timestamps, `__v`, descriptions...)
/// are carried in `extra` so reads echo them and writes never drop them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub image: String,
    /// Ordered references into the `products` collection
    #[serde(default)]
    pub products: Vec<ObjectId>,
    #[serde(flatten)]
    pub extra: Document,
}

impl Category {
    pub fn new(title: impl Into<String>, image: impl Into<String>) -> Self {
        Self {
            id: ObjectId::new(),
            title: title.into(),
            image: image.into(),
            products: Vec::new(),
            extra: Document::new(),
        }
    }

    pub fn with_products(mut self, products: Vec<ObjectId>) -> Self {
        self.products = products;
        self
    }
}

/// Product as stored in the `products` collection; only `categories` is
/// interpreted here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    #[serde(default)]
    pub categories: Vec<ObjectId>,
    #[serde(flatten)]
    pub extra: Document,
}

impl Product {
    pub fn new(categories: Vec<ObjectId>) -> Self {
        Self {
            id: ObjectId::new(),
            categories,
            extra: Document::new(),
        }
    }
}

/// Update request body
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Validate, ToSchema)]
pub struct UpdateCategory {
    #[validate(required, length(min = 1))]
    #[schema(example = "Shoes")]
    pub title: Option<String>,

    #[validate(required, length(min = 1))]
    #[schema(example = "https://cdn.example.com/categories/shoes.png")]
    pub image: Option<String>,
}

impl UpdateCategory {
    /// Read `title`/`image` from a raw request body.
    ///
    /// Anything that is not a JSON object, and any field that is not a
    /// string, counts as missing. Unknown fields are ignored.
    pub fn from_slice(body: &[u8]) -> Self {
        let Ok(Value::Object(fields)) = serde_json::from_slice::<Value>(body) else {
            return Self::default();
        };
        let text = |name: &str| fields.get(name).and_then(Value::as_str).map(str::to_owned);

        Self {
            title: text("title"),
            image: text("image"),
        }
    }

    /// Validate and return `(title, image)`
    pub fn into_details(self) -> CategoryResult<(String, String)> {
        self.validate()?;
        match (self.title, self.image) {
            (Some(title), Some(image)) => Ok((title, image)),
            _ => Err(CategoryError::Validation),
        }
    }
}

fn hex_ids(ids: &[ObjectId]) -> Vec<String> {
    ids.iter().map(|id| id.to_hex()).collect()
}

/// Category rendered for clients with product references as id strings
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct CategoryResponse {
    #[serde(rename = "_id")]
    #[schema(example = "64a1f0c2e4b0a1b2c3d4e5f6")]
    pub id: String,
    pub title: String,
    pub image: String,
    pub products: Vec<String>,
    /// Other stored fields, passed through
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl From<Category> for CategoryResponse {
    fn from(category: Category) -> Self {
        Self {
            id: category.id.to_hex(),
            products: hex_ids(&category.products),
            title: category.title,
            image: category.image,
            extra: document_to_json(category.extra),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct ProductResponse {
    #[serde(rename = "_id")]
    pub id: String,
    pub categories: Vec<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl From<Product> for ProductResponse {
    fn from(product: Product) -> Self {
        Self {
            id: product.id.to_hex(),
            categories: hex_ids(&product.categories),
            extra: document_to_json(product.extra),
        }
    }
}

/// Category with its products expanded
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct CategoryDetails {
    #[serde(rename = "_id")]
    #[schema(example = "64a1f0c2e4b0a1b2c3d4e5f6")]
    pub id: String,
    pub title: String,
    pub image: String,
    pub products: Vec<ProductResponse>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl CategoryDetails {
    /// Replace each product reference with its document.
    ///
    /// Output follows the order of `category.products`; references with no
    /// matching document are dropped.
    pub fn populate(category: Category, products: Vec<Product>) -> Self {
        let by_id: HashMap<ObjectId, Product> =
            products.into_iter().map(|p| (p.id, p)).collect();

        let products = category
            .products
            .iter()
            .filter_map(|id| by_id.get(id).cloned())
            .map(ProductResponse::from)
            .collect();

        Self {
            id: category.id.to_hex(),
            title: category.title,
            image: category.image,
            products,
            extra: document_to_json(category.extra),
        }
    }
}
