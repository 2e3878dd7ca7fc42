//! Product Service
//!
//! Needs the seller repository too: a new product embeds its seller, which
//! must exist.

use std::sync::Arc;

use kernel::id::ProductId;

use crate::application::command::{CreateProductCommand, UpdateProductCommand};
use crate::domain::entity::{Product, ValidatedProduct};
use crate::domain::repository::{ProductRepository, SellerRepository};
use crate::error::{CatalogError, CatalogResult};

pub struct ProductService<P, S>
where
    P: ProductRepository,
    S: SellerRepository,
{
    product_repo: Arc<P>,
    seller_repo: Arc<S>,
}

impl<P, S> ProductService<P, S>
where
    P: ProductRepository,
    S: SellerRepository,
{
    pub fn new(product_repo: Arc<P>, seller_repo: Arc<S>) -> Self {
        Self {
            product_repo,
            seller_repo,
        }
    }

    pub async fn create(&self, command: CreateProductCommand) -> CatalogResult<ValidatedProduct> {
        let seller = self
            .seller_repo
            .find_seller(command.seller_id)
            .await?
            .ok_or(CatalogError::SellerNotFound)?;

        let product = Product::new(command.name, command.price, seller).validate()?;
        self.product_repo.create_product(&product).await?;

        let persisted = self.reload(product.id()).await?;
        tracing::info!(
            product_id = %persisted.id(),
            seller_id = %persisted.seller().id(),
            "Product created"
        );
        Ok(persisted)
    }

    pub async fn find_all(&self) -> CatalogResult<Vec<ValidatedProduct>> {
        self.product_repo.find_all_products().await
    }

    pub async fn find_by_id(&self, id: ProductId) -> CatalogResult<ValidatedProduct> {
        self.product_repo
            .find_product(id)
            .await?
            .ok_or(CatalogError::ProductNotFound)
    }

    pub async fn update(&self, command: UpdateProductCommand) -> CatalogResult<ValidatedProduct> {
        let mut draft = self.find_by_id(command.id).await?.into_draft();
        if let Some(name) = command.name {
            draft.update_name(name)?;
        }
        if let Some(price) = command.price {
            draft.update_price(price)?;
        }

        let product = draft.validate()?;
        self.product_repo.update_product(&product).await?;

        let persisted = self.reload(product.id()).await?;
        tracing::info!(product_id = %persisted.id(), "Product updated");
        Ok(persisted)
    }

    pub async fn delete(&self, id: ProductId) -> CatalogResult<()> {
        self.product_repo.delete_product(id).await?;
        tracing::info!(product_id = %id, "Product deleted");
        Ok(())
    }

    async fn reload(&self, id: ProductId) -> CatalogResult<ValidatedProduct> {
        self.product_repo
            .find_product(id)
            .await?
            .ok_or_else(|| CatalogError::Internal(format!("product {id} vanished after write")))
    }
}
