//! Application Layer
//!
//! Commands and the seller/product services.

pub mod command;
pub mod product_service;
pub mod seller_service;

// Re-exports
pub use command::{
    CreateProductCommand, CreateSellerCommand, UpdateProductCommand, UpdateSellerCommand,
};
pub use product_service::ProductService;
pub use seller_service::SellerService;
