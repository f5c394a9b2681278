use std::sync::Arc;

use tracing::{info, instrument};

use super::domain::{Category, CategoryId, NewCategory};
use super::repository::CategoryRepository;
use crate::errors::ServiceError;

/// Category use cases, independent of the web framework.
pub struct CategoryService {
    repo: Arc<dyn CategoryRepository>,
}

impl CategoryService {
    pub fn new(repo: Arc<dyn CategoryRepository>) -> Self { Self { repo } }

    /// Validate and store a category, returning it with its assigned id.
    ///
    /// # Examples
    /// ```
    /// use service::catalog::{CatalogRepositories, NewCategory};
    /// let (categories, _) = CatalogRepositories::in_memory().into_services();
    /// let books = tokio_test::block_on(categories.create(NewCategory::new("Books"))).unwrap();
    /// assert_eq!(books.id, 1);
    /// assert_eq!(books.name, "Books");
    /// ```
    #[instrument(skip(self, input), fields(name = %input.name))]
    pub async fn create(&self, input: NewCategory) -> Result<Category, ServiceError> {
        input.validate()?;
        let category = self.repo.save(input).await?;
        info!(category_id = category.id, "category_created");
        Ok(category)
    }

    /// All categories in ascending id order.
    #[instrument(skip(self))]
    pub async fn list(&self) -> Result<Vec<Category>, ServiceError> {
        self.repo.find_all().await
    }

    /// `None` when no category has this id.
    #[instrument(skip(self))]
    pub async fn find_by_id(&self, id: CategoryId) -> Result<Option<Category>, ServiceError> {
        self.repo.find_by_id(id).await
    }

    pub async fn count(&self) -> Result<u64, ServiceError> {
        self.repo.count().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::CatalogRepositories;

    #[tokio::test]
    async fn created_categories_are_listed_once() -> Result<(), anyhow::Error> {
        let (svc, _) = CatalogRepositories::in_memory().into_services();
        let books = svc.create(NewCategory::new("Books")).await?;
        let computing = svc.create(NewCategory::new("Computing")).await?;

        let all = svc.list().await?;
        assert_eq!(all.len(), 2);
        assert_eq!(all.iter().filter(|c| c.id == books.id).count(), 1);
        assert_eq!(all[0].name, "Books");
        assert_eq!(all[1].name, "Computing");
        assert_eq!(svc.find_by_id(computing.id).await?.map(|c| c.name), Some("Computing".into()));
        assert!(svc.find_by_id(99).await?.is_none());
        Ok(())
    }

    #[tokio::test]
    async fn identical_bodies_get_distinct_ids() -> Result<(), anyhow::Error> {
        let (svc, _) = CatalogRepositories::in_memory().into_services();
        let a = svc.create(NewCategory::new("Books")).await?;
        let b = svc.create(NewCategory::new("Books")).await?;
        assert_ne!(a.id, b.id);
        assert_eq!(svc.count().await?, 2);
        Ok(())
    }

    #[tokio::test]
    async fn blank_name_is_rejected_without_write() -> Result<(), anyhow::Error> {
        let (svc, _) = CatalogRepositories::in_memory().into_services();
        let err = svc.create(NewCategory::new("  ")).await.unwrap_err();
        assert!(matches!(err, ServiceError::Validation(_)));
        assert_eq!(svc.count().await?, 0);
        Ok(())
    }
}
