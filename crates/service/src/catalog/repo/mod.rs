//! Repository implementations.

pub mod file;
pub mod memory;
pub mod seaorm;

use std::path::Path;
use std::sync::Arc;

use sea_orm::DatabaseConnection;

use super::repository::{CategoryRepository, ProductRepository};
use super::{CategoryService, ProductService};
use crate::errors::ServiceError;

/// The category and product repositories of one storage backend.
#[derive(Clone)]
pub struct CatalogRepositories {
    pub categories: Arc<dyn CategoryRepository>,
    pub products: Arc<dyn ProductRepository>,
}

impl CatalogRepositories {
    pub fn in_memory() -> Self {
        Self {
            categories: Arc::new(memory::InMemoryCategoryRepository::default()),
            products: Arc::new(memory::InMemoryProductRepository::default()),
        }
    }

    /// `categories.json` and `products.json` under `data_dir`.
    pub async fn json_files(data_dir: impl AsRef<Path>) -> Result<Self, ServiceError> {
        let dir = data_dir.as_ref();
        let categories = file::JsonFileCategoryRepository::open(dir.join("categories.json")).await?;
        let products = file::JsonFileProductRepository::open(dir.join("products.json")).await?;
        Ok(Self { categories: Arc::new(categories), products: Arc::new(products) })
    }

    pub fn database(db: DatabaseConnection) -> Self {
        Self {
            categories: Arc::new(seaorm::SeaOrmCategoryRepository { db: db.clone() }),
            products: Arc::new(seaorm::SeaOrmProductRepository { db }),
        }
    }

    pub fn into_services(self) -> (CategoryService, ProductService) {
        let categories = CategoryService::new(Arc::clone(&self.categories));
        let products = ProductService::new(self.products, self.categories);
        (categories, products)
    }
}
