//! JSON file repositories on top of [`JsonMapStore`].

use std::path::PathBuf;
use std::sync::Arc;

use async_trait::async_trait;

use crate::catalog::domain::{Category, CategoryId, NewCategory, NewProduct, Product, ProductId};
use crate::catalog::repository::{CategoryRepository, ProductRepository};
use crate::errors::ServiceError;
use crate::storage::json_map_store::JsonMapStore;

fn next_id<V>(map: &std::collections::HashMap<i64, V>) -> i64 {
    map.keys().max().map_or(1, |max| max + 1)
}

pub struct JsonFileCategoryRepository {
    store: Arc<JsonMapStore<CategoryId, Category>>,
}

impl JsonFileCategoryRepository {
    pub async fn open(path: impl Into<PathBuf>) -> Result<Self, ServiceError> {
        Ok(Self { store: JsonMapStore::new(path).await? })
    }
}

#[async_trait]
impl CategoryRepository for JsonFileCategoryRepository {
    async fn save(&self, input: NewCategory) -> Result<Category, ServiceError> {
        self.store
            .update_map(|m| {
                let category = Category { id: next_id(m), name: input.name };
                m.insert(category.id, category.clone());
                Ok(category)
            })
            .await
    }

    async fn find_by_id(&self, id: CategoryId) -> Result<Option<Category>, ServiceError> {
        Ok(self.store.get(&id).await)
    }

    async fn find_all(&self) -> Result<Vec<Category>, ServiceError> {
        let mut all = self.store.values().await;
        all.sort_by_key(|c| c.id);
        Ok(all)
    }

    async fn count(&self) -> Result<u64, ServiceError> {
        Ok(self.store.len().await as u64)
    }
}

pub struct JsonFileProductRepository {
    store: Arc<JsonMapStore<ProductId, Product>>,
}

impl JsonFileProductRepository {
    pub async fn open(path: impl Into<PathBuf>) -> Result<Self, ServiceError> {
        Ok(Self { store: JsonMapStore::new(path).await? })
    }
}

#[async_trait]
impl ProductRepository for JsonFileProductRepository {
    async fn save(&self, input: NewProduct, category_id: CategoryId) -> Result<Product, ServiceError> {
        self.store
            .update_map(|m| {
                let product = Product { id: next_id(m), name: input.name, price: input.price, category_id };
                m.insert(product.id, product.clone());
                Ok(product)
            })
            .await
    }

    async fn find_all(&self) -> Result<Vec<Product>, ServiceError> {
        let mut all = self.store.values().await;
        all.sort_by_key(|p| p.id);
        Ok(all)
    }

    async fn find_by_category(&self, category_id: CategoryId) -> Result<Vec<Product>, ServiceError> {
        let mut matching = self.store.filter(|p| p.category_id == category_id).await;
        matching.sort_by_key(|p| p.id);
        Ok(matching)
    }

    async fn count(&self) -> Result<u64, ServiceError> {
        Ok(self.store.len().await as u64)
    }
}
