pub mod product;
pub mod seller;

pub use product::{Product, ValidatedProduct};
pub use seller::{Seller, ValidatedSeller};
