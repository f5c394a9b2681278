//! Catalog module: domain, repository, services.
//!
//! Storage backends live under `repo`; `CatalogRepositories` bundles one backend's
//! category and product repositories so callers can build the services from it.

pub mod domain;
pub mod repository;
pub mod repo;
pub mod category_service;
pub mod product_service;
pub mod seed;

pub use category_service::CategoryService;
pub use domain::{Category, CategoryId, NewCategory, NewProduct, Product, ProductId, ProductView};
pub use product_service::ProductService;
pub use repo::CatalogRepositories;
