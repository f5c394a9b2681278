//! Service layer for the catalog: domain records, repository abstractions with
//! in-memory, JSON-file and SeaORM backends, and the category/product services.
//! - Services never know about HTTP; absence is `Option`, failures are `ServiceError`.
//! - Repository traits are the only seam to storage.

pub mod errors;
pub mod catalog;
pub mod storage;
#[cfg(test)]
pub mod test_support;
