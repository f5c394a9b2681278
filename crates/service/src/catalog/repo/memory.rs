//! In-memory repositories, used by default and in tests.

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::catalog::domain::{Category, CategoryId, NewCategory, NewProduct, Product};
use crate::catalog::repository::{CategoryRepository, ProductRepository};
use crate::errors::ServiceError;

#[derive(Default)]
pub struct InMemoryCategoryRepository {
    rows: RwLock<Vec<Category>>, // ascending id
}

#[async_trait]
impl CategoryRepository for InMemoryCategoryRepository {
    async fn save(&self, input: NewCategory) -> Result<Category, ServiceError> {
        let mut rows = self.rows.write().await;
        let id = rows.last().map_or(1, |c| c.id + 1);
        let category = Category { id, name: input.name };
        rows.push(category.clone());
        Ok(category)
    }

    async fn find_by_id(&self, id: CategoryId) -> Result<Option<Category>, ServiceError> {
        let rows = self.rows.read().await;
        Ok(rows.iter().find(|c| c.id == id).cloned())
    }

    async fn find_all(&self) -> Result<Vec<Category>, ServiceError> {
        Ok(self.rows.read().await.clone())
    }

    async fn count(&self) -> Result<u64, ServiceError> {
        Ok(self.rows.read().await.len() as u64)
    }
}

#[derive(Default)]
pub struct InMemoryProductRepository {
    rows: RwLock<Vec<Product>>, // ascending id
}

#[async_trait]
impl ProductRepository for InMemoryProductRepository {
    async fn save(&self, input: NewProduct, category_id: CategoryId) -> Result<Product, ServiceError> {
        let mut rows = self.rows.write().await;
        let id = rows.last().map_or(1, |p| p.id + 1);
        let product = Product { id, name: input.name, price: input.price, category_id };
        rows.push(product.clone());
        Ok(product)
    }

    async fn find_all(&self) -> Result<Vec<Product>, ServiceError> {
        Ok(self.rows.read().await.clone())
    }

    async fn find_by_category(&self, category_id: CategoryId) -> Result<Vec<Product>, ServiceError> {
        let rows = self.rows.read().await;
        Ok(rows.iter().filter(|p| p.category_id == category_id).cloned().collect())
    }

    async fn count(&self) -> Result<u64, ServiceError> {
        Ok(self.rows.read().await.len() as u64)
    }
}
