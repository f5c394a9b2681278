use sea_orm::DatabaseConnection;

use crate::catalog::domain::{Category, CategoryId, NewCategory, NewProduct, Product};
use crate::catalog::repository::{CategoryRepository, ProductRepository};
use crate::errors::ServiceError;

pub struct SeaOrmCategoryRepository {
    pub db: DatabaseConnection,
}

fn to_category(m: models::category::Model) -> Category {
    Category { id: m.id, name: m.name }
}

fn to_product(m: models::product::Model) -> Product {
    Product { id: m.id, name: m.name, price: m.price, category_id: m.category_id }
}

#[async_trait::async_trait]
impl CategoryRepository for SeaOrmCategoryRepository {
    async fn save(&self, input: NewCategory) -> Result<Category, ServiceError> {
        let created = models::category::create(&self.db, &input.name).await?;
        Ok(to_category(created))
    }

    async fn find_by_id(&self, id: CategoryId) -> Result<Option<Category>, ServiceError> {
        Ok(models::category::find(&self.db, id).await?.map(to_category))
    }

    async fn find_all(&self) -> Result<Vec<Category>, ServiceError> {
        Ok(models::category::list(&self.db).await?.into_iter().map(to_category).collect())
    }

    async fn count(&self) -> Result<u64, ServiceError> {
        Ok(models::category::count(&self.db).await?)
    }
}

pub struct SeaOrmProductRepository {
    pub db: DatabaseConnection,
}

#[async_trait::async_trait]
impl ProductRepository for SeaOrmProductRepository {
    async fn save(&self, input: NewProduct, category_id: CategoryId) -> Result<Product, ServiceError> {
        let created = models::product::create(&self.db, category_id, &input.name, input.price).await?;
        Ok(to_product(created))
    }

    async fn find_all(&self) -> Result<Vec<Product>, ServiceError> {
        Ok(models::product::list(&self.db).await?.into_iter().map(to_product).collect())
    }

    async fn find_by_category(&self, category_id: CategoryId) -> Result<Vec<Product>, ServiceError> {
        Ok(models::product::list_by_category(&self.db, category_id)
            .await?
            .into_iter()
            .map(to_product)
            .collect())
    }

    async fn count(&self) -> Result<u64, ServiceError> {
        Ok(models::product::count(&self.db).await?)
    }
}
