//! Repository Traits
//!
//! Interfaces for data persistence. Implementations are in the infra layer.
//! Reads always return the stored row, so callers re-read after writing.

use kernel::id::{ProductId, SellerId};

use crate::domain::entity::{ValidatedProduct, ValidatedSeller};
use crate::error::CatalogResult;

/// Seller repository trait
#[trait_variant::make(SellerRepository: Send)]
pub trait LocalSellerRepository {
    async fn create_seller(&self, seller: &ValidatedSeller) -> CatalogResult<()>;

    async fn find_seller(&self, id: SellerId) -> CatalogResult<Option<ValidatedSeller>>;

    /// Oldest first
    async fn find_all_sellers(&self) -> CatalogResult<Vec<ValidatedSeller>>;

    /// `SellerNotFound` if the row is gone
    async fn update_seller(&self, seller: &ValidatedSeller) -> CatalogResult<()>;

    /// `SellerNotFound` if the row is gone, `SellerHasProducts` while
    /// products still reference it
    async fn delete_seller(&self, id: SellerId) -> CatalogResult<()>;
}

/// Product repository trait
///
/// Products come back joined with their seller's current row.
#[trait_variant::make(ProductRepository: Send)]
pub trait LocalProductRepository {
    /// `SellerNotFound` if the embedded seller does not exist
    async fn create_product(&self, product: &ValidatedProduct) -> CatalogResult<()>;

    async fn find_product(&self, id: ProductId) -> CatalogResult<Option<ValidatedProduct>>;

    /// Oldest first
    async fn find_all_products(&self) -> CatalogResult<Vec<ValidatedProduct>>;

    /// `ProductNotFound` if the row is gone
    async fn update_product(&self, product: &ValidatedProduct) -> CatalogResult<()>;

    /// `ProductNotFound` if the row is gone
    async fn delete_product(&self, id: ProductId) -> CatalogResult<()>;
}
