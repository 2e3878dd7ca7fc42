//! Service inputs
//!
//! Ids are already parsed; names and prices are checked by the entities.

use kernel::id::{ProductId, SellerId};

#[derive(Debug, Clone)]
pub struct CreateSellerCommand {
    pub name: String,
}

#[derive(Debug, Clone)]
pub struct UpdateSellerCommand {
    pub id: SellerId,
    pub name: String,
}

#[derive(Debug, Clone)]
pub struct CreateProductCommand {
    pub name: String,
    pub price: f64,
    pub seller_id: SellerId,
}

/// Unset fields keep their stored value
#[derive(Debug, Clone)]
pub struct UpdateProductCommand {
    pub id: ProductId,
    pub name: Option<String>,
    pub price: Option<f64>,
}
