//! Demo data for an empty catalog.

use rust_decimal::Decimal;
use tracing::info;

use super::domain::{NewCategory, NewProduct};
use super::{CategoryService, ProductService};
use crate::errors::ServiceError;

/// Creates two categories and three products when both stores are empty.
/// Returns whether anything was written.
pub async fn seed_if_empty(categories: &CategoryService, products: &ProductService) -> Result<bool, ServiceError> {
    if categories.count().await? > 0 || products.count().await? > 0 {
        info!("catalog not empty, skipping seed");
        return Ok(false);
    }

    let computing = categories.create(NewCategory::new("Computing")).await?;
    let books = categories.create(NewCategory::new("Books")).await?;

    let items = [
        ("Logitech Mouse", Decimal::new(12000, 2), &computing),
        ("Mechanical Keyboard", Decimal::new(35000, 2), &computing),
        ("Clean Code", Decimal::new(8990, 2), &books),
    ];
    for (name, price, category) in items {
        products.create(NewProduct::new(name, price), category).await?;
    }

    info!(categories = 2, products = items.len(), "catalog_seeded");
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::CatalogRepositories;

    #[tokio::test]
    async fn seeds_once() -> Result<(), anyhow::Error> {
        let (categories, products) = CatalogRepositories::in_memory().into_services();
        assert!(seed_if_empty(&categories, &products).await?);
        assert!(!seed_if_empty(&categories, &products).await?);

        let names: Vec<_> = categories.list().await?.into_iter().map(|c| c.name).collect();
        assert_eq!(names, vec!["Computing", "Books"]);

        let all = products.list().await?;
        assert_eq!(all.len(), 3);
        assert_eq!(all[0].price.to_string(), "120.00");
        assert_eq!(all[2].name, "Clean Code");
        assert_eq!(all[2].price.to_string(), "89.90");
        assert_eq!(all[2].category.name, "Books");
        assert_eq!(products.list_by_category(1).await?.len(), 2);
        Ok(())
    }
}
