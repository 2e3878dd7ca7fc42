//! In-memory Repository Implementation
//!
//! Mirrors the PostgreSQL schema: products hold a seller id, the seller is
//! joined back in on read, and a seller with products cannot be deleted.

use tokio::sync::RwLock;

use kernel::id::{ProductId, SellerId};

use crate::domain::entity::{Product, ValidatedProduct, ValidatedSeller};
use crate::domain::repository::{ProductRepository, SellerRepository};
use crate::error::{CatalogError, CatalogResult};

struct ProductRecord {
    id: ProductId,
    name: String,
    price: f64,
    seller_id: SellerId,
}

#[derive(Default)]
struct CatalogState {
    sellers: Vec<ValidatedSeller>,
    products: Vec<ProductRecord>,
}

impl CatalogState {
    fn seller(&self, id: SellerId) -> Option<&ValidatedSeller> {
        self.sellers.iter().find(|s| s.id() == id)
    }

    fn join(&self, record: &ProductRecord) -> CatalogResult<ValidatedProduct> {
        let seller = self.seller(record.seller_id).cloned().ok_or_else(|| {
            CatalogError::Internal(format!("product {} has no seller", record.id))
        })?;

        Product::with_id(record.id, record.name.clone(), record.price, seller)
            .validate()
            .map_err(|e| CatalogError::Internal(format!("stored product {}: {e}", record.id)))
    }
}

/// Sellers and products kept in insertion order
#[derive(Default)]
pub struct InMemoryCatalogRepository {
    state: RwLock<CatalogState>,
}

impl InMemoryCatalogRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SellerRepository for InMemoryCatalogRepository {
    async fn create_seller(&self, seller: &ValidatedSeller) -> CatalogResult<()> {
        let mut state = self.state.write().await;
        if state.seller(seller.id()).is_some() {
            return Err(CatalogError::Conflict(format!(
                "seller id {} already exists",
                seller.id()
            )));
        }
        state.sellers.push(seller.clone());
        Ok(())
    }

    async fn find_seller(&self, id: SellerId) -> CatalogResult<Option<ValidatedSeller>> {
        Ok(self.state.read().await.seller(id).cloned())
    }

    async fn find_all_sellers(&self) -> CatalogResult<Vec<ValidatedSeller>> {
        Ok(self.state.read().await.sellers.clone())
    }

    async fn update_seller(&self, seller: &ValidatedSeller) -> CatalogResult<()> {
        let mut state = self.state.write().await;
        let slot = state
            .sellers
            .iter_mut()
            .find(|s| s.id() == seller.id())
            .ok_or(CatalogError::SellerNotFound)?;
        *slot = seller.clone();
        Ok(())
    }

    async fn delete_seller(&self, id: SellerId) -> CatalogResult<()> {
        let mut state = self.state.write().await;
        if state.seller(id).is_none() {
            return Err(CatalogError::SellerNotFound);
        }
        if state.products.iter().any(|p| p.seller_id == id) {
            return Err(CatalogError::SellerHasProducts);
        }
        state.sellers.retain(|s| s.id() != id);
        Ok(())
    }
}

impl ProductRepository for InMemoryCatalogRepository {
    async fn create_product(&self, product: &ValidatedProduct) -> CatalogResult<()> {
        let mut state = self.state.write().await;
        let seller_id = product.seller().id();
        if state.seller(seller_id).is_none() {
            return Err(CatalogError::SellerNotFound);
        }
        if state.products.iter().any(|p| p.id == product.id()) {
            return Err(CatalogError::Conflict(format!(
                "product id {} already exists",
                product.id()
            )));
        }
        state.products.push(ProductRecord {
            id: product.id(),
            name: product.name().to_string(),
            price: product.price(),
            seller_id,
        });
        Ok(())
    }

    async fn find_product(&self, id: ProductId) -> CatalogResult<Option<ValidatedProduct>> {
        let state = self.state.read().await;
        state
            .products
            .iter()
            .find(|p| p.id == id)
            .map(|record| state.join(record))
            .transpose()
    }

    async fn find_all_products(&self) -> CatalogResult<Vec<ValidatedProduct>> {
        let state = self.state.read().await;
        state.products.iter().map(|record| state.join(record)).collect()
    }

    async fn update_product(&self, product: &ValidatedProduct) -> CatalogResult<()> {
        let mut state = self.state.write().await;
        let seller_id = product.seller().id();
        if state.seller(seller_id).is_none() {
            return Err(CatalogError::SellerNotFound);
        }
        let record = state
            .products
            .iter_mut()
            .find(|p| p.id == product.id())
            .ok_or(CatalogError::ProductNotFound)?;
        record.name = product.name().to_string();
        record.price = product.price();
        record.seller_id = seller_id;
        Ok(())
    }

    async fn delete_product(&self, id: ProductId) -> CatalogResult<()> {
        let mut state = self.state.write().await;
        let before = state.products.len();
        state.products.retain(|p| p.id != id);
        if state.products.len() == before {
            return Err(CatalogError::ProductNotFound);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entity::Seller;

    fn seller(name: &str) -> ValidatedSeller {
        Seller::new(name).validate().unwrap()
    }

    #[tokio::test]
    async fn test_product_reads_current_seller() {
        let repo = InMemoryCatalogRepository::new();
        let acme = seller("Acme");
        repo.create_seller(&acme).await.unwrap();

        let product = Product::new("Anvil", 10.0, acme.clone()).validate().unwrap();
        repo.create_product(&product).await.unwrap();

        let (id, mut draft) = acme.into_draft();
        draft.name = "Acme Corp".into();
        repo.update_seller(&draft.validate_with_id(id).unwrap())
            .await
            .unwrap();

        let stored = repo.find_product(product.id()).await.unwrap().unwrap();
        assert_eq!(stored.seller().name(), "Acme Corp");
    }

    #[tokio::test]
    async fn test_product_requires_existing_seller() {
        let repo = InMemoryCatalogRepository::new();
        let product = Product::new("Anvil", 10.0, seller("Ghost")).validate().unwrap();
        assert!(matches!(
            repo.create_product(&product).await,
            Err(CatalogError::SellerNotFound)
        ));
    }

    #[tokio::test]
    async fn test_delete_seller_with_products() {
        let repo = InMemoryCatalogRepository::new();
        let acme = seller("Acme");
        repo.create_seller(&acme).await.unwrap();
        let product = Product::new("Anvil", 10.0, acme.clone()).validate().unwrap();
        repo.create_product(&product).await.unwrap();

        assert!(matches!(
            repo.delete_seller(acme.id()).await,
            Err(CatalogError::SellerHasProducts)
        ));

        repo.delete_product(product.id()).await.unwrap();
        repo.delete_seller(acme.id()).await.unwrap();
        assert!(repo.find_all_sellers().await.unwrap().is_empty());
        assert!(matches!(
            repo.delete_seller(acme.id()).await,
            Err(CatalogError::SellerNotFound)
        ));
    }

    #[tokio::test]
    async fn test_update_missing() {
        let repo = InMemoryCatalogRepository::new();
        let acme = seller("Acme");
        assert!(matches!(
            repo.update_seller(&acme).await,
            Err(CatalogError::SellerNotFound)
        ));

        repo.create_seller(&acme).await.unwrap();
        let product = Product::new("Anvil", 10.0, acme).validate().unwrap();
        assert!(matches!(
            repo.update_product(&product).await,
            Err(CatalogError::ProductNotFound)
        ));
        assert!(matches!(
            repo.delete_product(product.id()).await,
            Err(CatalogError::ProductNotFound)
        ));
    }
}
