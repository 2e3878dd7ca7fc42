//! API DTOs (Data Transfer Objects)

use serde::{Deserialize, Serialize};

use kernel::error::app_error::AppError;
use kernel::id::Id;

use crate::domain::entity::{ValidatedProduct, ValidatedSeller};
use crate::error::CatalogResult;

/// Parse an id from a path or body; `what` names it in the error
pub fn parse_id<T>(raw: &str, what: &str) -> CatalogResult<Id<T>> {
    raw.parse::<Id<T>>().map_err(|_| {
        AppError::validation(format!("Invalid {what} id format"))
            .with_field("id")
            .into()
    })
}

// ============================================================================
// Seller
// ============================================================================

#[derive(Debug, Clone, Deserialize)]
pub struct CreateSellerRequest {
    pub name: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UpdateSellerRequest {
    pub id: String,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SellerResponse {
    pub id: String,
    pub name: String,
}

impl From<&ValidatedSeller> for SellerResponse {
    fn from(seller: &ValidatedSeller) -> Self {
        Self {
            id: seller.id().to_string(),
            name: seller.name().to_string(),
        }
    }
}

impl From<ValidatedSeller> for SellerResponse {
    fn from(seller: ValidatedSeller) -> Self {
        Self::from(&seller)
    }
}

// ============================================================================
// Product
// ============================================================================

#[derive(Debug, Clone, Deserialize)]
pub struct CreateProductRequest {
    pub name: String,
    pub price: f64,
    pub seller_id: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateProductRequest {
    pub name: Option<String>,
    pub price: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductResponse {
    pub id: String,
    pub name: String,
    pub price: f64,
    pub seller: SellerResponse,
}

impl From<ValidatedProduct> for ProductResponse {
    fn from(product: ValidatedProduct) -> Self {
        Self {
            id: product.id().to_string(),
            name: product.name().to_string(),
            price: product.price(),
            seller: product.seller().into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entity::{Product, Seller};
    use kernel::id::SellerId;

    #[test]
    fn test_product_response_shape() {
        let seller = Seller::new("Acme").validate().unwrap();
        let product = Product::new("Anvil", 10.5, seller.clone()).validate().unwrap();
        let id = product.id();

        let json = serde_json::to_value(ProductResponse::from(product)).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "id": id.to_string(),
                "name": "Anvil",
                "price": 10.5,
                "seller": {"id": seller.id().to_string(), "name": "Acme"},
            })
        );
    }

    #[test]
    fn test_parse_id() {
        let id = SellerId::new();
        assert_eq!(parse_id::<kernel::id::markers::Seller>(&id.to_string(), "seller").unwrap(), id);

        let err = parse_id::<kernel::id::markers::Seller>("nope", "seller").unwrap_err();
        assert_eq!(err.to_app_error().message(), "Invalid seller id format");
    }
}
