//! Seller Entity

use kernel::error::app_error::{AppError, AppResult};
use kernel::id::SellerId;

/// Unchecked seller input
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Seller {
    pub name: String,
}

impl Seller {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    /// Check the seller and give it a fresh id
    pub fn validate(self) -> AppResult<ValidatedSeller> {
        self.validate_with_id(SellerId::new())
    }

    /// Same checks as [`Seller::validate`], keeping a known id
    pub fn validate_with_id(self, id: SellerId) -> AppResult<ValidatedSeller> {
        if id.is_nil() {
            return Err(AppError::validation("Seller id cannot be nil").with_field("id"));
        }
        let name = self.name.trim();
        if name.is_empty() {
            return Err(AppError::validation("Seller name cannot be empty").with_field("name"));
        }

        Ok(ValidatedSeller {
            id,
            name: name.to_string(),
        })
    }
}

/// A seller that passed validation
///
/// Fields are private; the only way in is through [`Seller::validate`] or
/// [`Seller::validate_with_id`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedSeller {
    id: SellerId,
    name: String,
}

impl ValidatedSeller {
    pub fn id(&self) -> SellerId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Back to a raw seller for editing; re-validate with the same id
    pub fn into_draft(self) -> (SellerId, Seller) {
        (self.id, Seller { name: self.name })
    }
}
