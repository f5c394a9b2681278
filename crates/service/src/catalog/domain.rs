use std::hash::{Hash, Hasher};

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::errors::ServiceError;

pub type CategoryId = i64;
pub type ProductId = i64;

/// Longest name the relational schema can hold.
pub const MAX_NAME_LEN: usize = 255;

/// Persisted category. Identity is the id alone.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Category {
    pub id: CategoryId,
    pub name: String,
}

impl PartialEq for Category {
    fn eq(&self, other: &Self) -> bool { self.id == other.id }
}

impl Eq for Category {}

impl Hash for Category {
    fn hash<H: Hasher>(&self, state: &mut H) { self.id.hash(state) }
}

/// Category creation input; has no id until storage assigns one.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewCategory {
    pub name: String,
}

impl NewCategory {
    pub fn new(name: impl Into<String>) -> Self { Self { name: name.into() } }

    pub fn validate(&self) -> Result<(), ServiceError> {
        validate_name(&self.name)
    }
}

/// Persisted product as stored: the owning category is referenced by id.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    pub price: Decimal,
    pub category_id: CategoryId,
}

impl PartialEq for Product {
    fn eq(&self, other: &Self) -> bool { self.id == other.id }
}

impl Eq for Product {}

impl Hash for Product {
    fn hash<H: Hasher>(&self, state: &mut H) { self.id.hash(state) }
}

/// Product creation input. The owning category is never taken from the body; it is
/// resolved separately and handed to the service.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewProduct {
    pub name: String,
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    pub price: Decimal,
}

impl NewProduct {
    pub fn new(name: impl Into<String>, price: Decimal) -> Self {
        Self { name: name.into(), price }
    }

    pub fn validate(&self) -> Result<(), ServiceError> {
        validate_name(&self.name)?;
        validate_price(self.price)
    }

    /// Price at two decimal places, the scale every backend stores.
    pub fn with_cents_scale(mut self) -> Self {
        if self.price.is_zero() {
            self.price = Decimal::ZERO;
        }
        self.price.rescale(2);
        self
    }
}

/// Product with its owning category resolved, as returned to clients.
#[derive(Debug, Clone, Serialize)]
pub struct ProductView {
    pub id: ProductId,
    pub name: String,
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    pub price: Decimal,
    pub category: Category,
}

impl ProductView {
    pub fn new(product: Product, category: Category) -> Self {
        Self { id: product.id, name: product.name, price: product.price, category }
    }
}

impl PartialEq for ProductView {
    fn eq(&self, other: &Self) -> bool { self.id == other.id }
}

impl Eq for ProductView {}

pub fn validate_name(name: &str) -> Result<(), ServiceError> {
    if name.trim().is_empty() {
        return Err(ServiceError::validation("name must not be empty"));
    }
    if name.chars().count() > MAX_NAME_LEN {
        return Err(ServiceError::validation(format!("name must be at most {MAX_NAME_LEN} characters")));
    }
    Ok(())
}

/// Non-negative, written with at most two decimal places, fits `NUMERIC(12, 2)`.
pub fn validate_price(price: Decimal) -> Result<(), ServiceError> {
    if price.is_sign_negative() && !price.is_zero() {
        return Err(ServiceError::validation("price must not be negative"));
    }
    if price.scale() > 2 {
        return Err(ServiceError::validation("price must have at most 2 decimal places"));
    }
    if price >= Decimal::new(10_000_000_000, 0) {
        return Err(ServiceError::validation("price is too large"));
    }
    Ok(())
}
