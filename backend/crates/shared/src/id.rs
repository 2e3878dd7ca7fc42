//! Common ID Types
//!
//! Type-safe UUID wrappers for catalog entities.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;
use std::str::FromStr;

use uuid::Uuid;

use crate::error::app_error::AppError;

/// Generic typed ID wrapper
///
/// Usage:
/// ```
/// use kernel::id::{Id, markers};
/// type SellerId = Id<markers::Seller>;
///
/// let id: SellerId = "0b6a1bd6-45a5-4a37-8c55-2b8e3f1c9a10".parse().unwrap();
/// assert_eq!(id.to_string(), "0b6a1bd6-45a5-4a37-8c55-2b8e3f1c9a10");
/// ```
pub struct Id<T> {
    value: Uuid,
    _marker: PhantomData<fn() -> T>,
}

impl<T> Id<T> {
    /// Create a new random ID (UUID v4)
    pub fn new() -> Self {
        Self::from_uuid(Uuid::new_v4())
    }

    /// Create from an existing UUID
    pub fn from_uuid(uuid: Uuid) -> Self {
        Self {
            value: uuid,
            _marker: PhantomData,
        }
    }

    /// Get the underlying UUID
    pub fn as_uuid(&self) -> &Uuid {
        &self.value
    }

    /// Convert to UUID
    pub fn into_uuid(self) -> Uuid {
        self.value
    }

    /// The nil UUID never identifies a stored record
    pub fn is_nil(&self) -> bool {
        self.value.is_nil()
    }
}

// Markers are plain unit structs, so these impls must not bound `T`.

impl<T> Clone for Id<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Id<T> {}

impl<T> PartialEq for Id<T> {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl<T> Eq for Id<T> {}

impl<T> Hash for Id<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.value.hash(state);
    }
}

impl<T> Default for Id<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for Id<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Id({})", self.value)
    }
}

impl<T> fmt::Display for Id<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

impl<T> FromStr for Id<T> {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let uuid = Uuid::parse_str(s.trim())?;
        Ok(Self::from_uuid(uuid))
    }
}

impl<T> From<Uuid> for Id<T> {
    fn from(uuid: Uuid) -> Self {
        Self::from_uuid(uuid)
    }
}

impl<T> From<Id<T>> for Uuid {
    fn from(id: Id<T>) -> Self {
        id.value
    }
}

/// Marker types for different entity IDs
pub mod markers {
    /// Marker for Seller IDs
    pub struct Seller;

    /// Marker for Product IDs
    pub struct Product;
}

pub type SellerId = Id<markers::Seller>;
pub type ProductId = Id<markers::Product>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::kind::ErrorKind;

    #[test]
    fn test_id_type_safety() {
        let seller_id: SellerId = Id::new();
        let product_id: ProductId = Id::new();

        // Different types, cannot be mixed
        let _s: Uuid = seller_id.into_uuid();
        let _p: Uuid = product_id.into_uuid();
    }

    #[test]
    fn test_id_from_uuid() {
        let uuid = Uuid::new_v4();
        let id: SellerId = Id::from_uuid(uuid);
        assert_eq!(id.as_uuid(), &uuid);
        let copy = id;
        assert_eq!(copy, id);
    }

    #[test]
    fn test_parse() {
        let uuid = Uuid::new_v4();
        let id: ProductId = uuid.to_string().parse().unwrap();
        assert_eq!(id.into_uuid(), uuid);

        let err = "42".parse::<ProductId>().unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Validation);
    }

    #[test]
    fn test_nil() {
        let id: SellerId = Id::from_uuid(Uuid::nil());
        assert!(id.is_nil());
        assert!(!SellerId::new().is_nil());
    }
}
