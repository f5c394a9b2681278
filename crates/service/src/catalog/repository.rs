use async_trait::async_trait;

use super::domain::{Category, CategoryId, NewCategory, NewProduct, Product};
use crate::errors::ServiceError;

/// Storage abstraction for categories.
///
/// Implementations assign ids that are unique and increasing under concurrent saves
/// and return listings in id order.
#[async_trait]
pub trait CategoryRepository: Send + Sync {
    async fn save(&self, input: NewCategory) -> Result<Category, ServiceError>;
    async fn find_by_id(&self, id: CategoryId) -> Result<Option<Category>, ServiceError>;
    async fn find_all(&self) -> Result<Vec<Category>, ServiceError>;
    async fn count(&self) -> Result<u64, ServiceError>;
}

/// Storage abstraction for products.
///
/// `save` does not check that `category_id` exists; the database backend's foreign
/// key is the only storage-level guard.
#[async_trait]
pub trait ProductRepository: Send + Sync {
    async fn save(&self, input: NewProduct, category_id: CategoryId) -> Result<Product, ServiceError>;
    async fn find_all(&self) -> Result<Vec<Product>, ServiceError>;
    async fn find_by_category(&self, category_id: CategoryId) -> Result<Vec<Product>, ServiceError>;
    async fn count(&self) -> Result<u64, ServiceError>;
}
