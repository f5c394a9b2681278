use std::collections::HashMap;
use std::sync::Arc;

use tracing::{info, instrument};

use super::domain::{Category, CategoryId, NewProduct, Product, ProductView};
use super::repository::{CategoryRepository, ProductRepository};
use crate::errors::ServiceError;

/// Product use cases. Products are always returned with their category resolved.
pub struct ProductService {
    products: Arc<dyn ProductRepository>,
    categories: Arc<dyn CategoryRepository>,
}

impl ProductService {
    pub fn new(products: Arc<dyn ProductRepository>, categories: Arc<dyn CategoryRepository>) -> Self {
        Self { products, categories }
    }

    /// Store a product owned by `category`, which the caller has already looked up.
    ///
    /// # Examples
    /// ```
    /// use std::str::FromStr;
    /// use rust_decimal::Decimal;
    /// use service::catalog::{CatalogRepositories, NewCategory, NewProduct};
    /// let (categories, products) = CatalogRepositories::in_memory().into_services();
    /// let books = tokio_test::block_on(categories.create(NewCategory::new("Books"))).unwrap();
    /// let input = NewProduct::new("Clean Code", Decimal::from_str("89.90").unwrap());
    /// let view = tokio_test::block_on(products.create(input, &books)).unwrap();
    /// assert_eq!(view.category, books);
    /// assert_eq!(view.price.to_string(), "89.90");
    /// ```
    #[instrument(skip(self, input, category), fields(name = %input.name, category_id = category.id))]
    pub async fn create(&self, input: NewProduct, category: &Category) -> Result<ProductView, ServiceError> {
        input.validate()?;
        let product = self.products.save(input.with_cents_scale(), category.id).await?;
        info!(product_id = product.id, "product_created");
        Ok(ProductView::new(product, category.clone()))
    }

    /// All products in ascending id order.
    #[instrument(skip(self))]
    pub async fn list(&self) -> Result<Vec<ProductView>, ServiceError> {
        let products = self.products.find_all().await?;
        if products.is_empty() {
            return Ok(Vec::new());
        }
        let categories: HashMap<CategoryId, Category> =
            self.categories.find_all().await?.into_iter().map(|c| (c.id, c)).collect();
        products
            .into_iter()
            .map(|p| {
                let category = categories.get(&p.category_id).cloned().ok_or_else(|| dangling(&p))?;
                Ok(ProductView::new(p, category))
            })
            .collect()
    }

    /// Products owned by `category_id`; empty when there are none or the category is unknown.
    #[instrument(skip(self))]
    pub async fn list_by_category(&self, category_id: CategoryId) -> Result<Vec<ProductView>, ServiceError> {
        let products = self.products.find_by_category(category_id).await?;
        let Some(first) = products.first() else {
            return Ok(Vec::new());
        };
        let category = self.categories.find_by_id(category_id).await?.ok_or_else(|| dangling(first))?;
        Ok(products.into_iter().map(|p| ProductView::new(p, category.clone())).collect())
    }

    pub async fn count(&self) -> Result<u64, ServiceError> {
        self.products.count().await
    }
}

fn dangling(p: &Product) -> ServiceError {
    ServiceError::Inconsistent(format!("product {} references missing category {}", p.id, p.category_id))
}
