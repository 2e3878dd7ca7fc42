//! Product Entity
//!
//! A product carries a snapshot of its seller by value. Repositories rebuild
//! that snapshot from the sellers table on every read.

use kernel::error::app_error::{AppError, AppResult};
use kernel::id::ProductId;

use crate::domain::entity::seller::ValidatedSeller;

/// Unchecked product
///
/// The id is assigned on construction, before validation.
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub price: f64,
    pub seller: ValidatedSeller,
}

fn check_name(name: &str) -> AppResult<String> {
    let name = name.trim();
    if name.is_empty() {
        return Err(AppError::validation("Product name cannot be empty").with_field("name"));
    }
    Ok(name.to_string())
}

fn check_price(price: f64) -> AppResult<f64> {
    if !price.is_finite() || price <= 0.0 {
        return Err(AppError::validation("Price must be a positive number").with_field("price"));
    }
    Ok(price)
}

impl Product {
    pub fn new(name: impl Into<String>, price: f64, seller: ValidatedSeller) -> Self {
        Self::with_id(ProductId::new(), name, price, seller)
    }

    /// Rebuild a product with a known id (storage, updates)
    pub fn with_id(
        id: ProductId,
        name: impl Into<String>,
        price: f64,
        seller: ValidatedSeller,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            price,
            seller,
        }
    }

    pub fn validate(self) -> AppResult<ValidatedProduct> {
        if self.id.is_nil() {
            return Err(AppError::validation("Product id cannot be nil").with_field("id"));
        }
        let name = check_name(&self.name)?;
        let price = check_price(self.price)?;

        Ok(ValidatedProduct {
            id: self.id,
            name,
            price,
            seller: self.seller,
        })
    }

    /// Leaves the product untouched on error
    pub fn update_name(&mut self, name: impl AsRef<str>) -> AppResult<()> {
        self.name = check_name(name.as_ref())?;
        Ok(())
    }

    /// Leaves the product untouched on error
    pub fn update_price(&mut self, price: f64) -> AppResult<()> {
        self.price = check_price(price)?;
        Ok(())
    }
}

/// A product that passed validation
#[derive(Debug, Clone, PartialEq)]
pub struct ValidatedProduct {
    id: ProductId,
    name: String,
    price: f64,
    seller: ValidatedSeller,
}

impl ValidatedProduct {
    pub fn id(&self) -> ProductId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn price(&self) -> f64 {
        self.price
    }

    pub fn seller(&self) -> &ValidatedSeller {
        &self.seller
    }

    /// Back to a raw product for editing; the result must be validated again
    pub fn into_draft(self) -> Product {
        Product {
            id: self.id,
            name: self.name,
            price: self.price,
            seller: self.seller,
        }
    }
}
