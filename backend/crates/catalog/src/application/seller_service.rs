//! Seller Service

use std::sync::Arc;

use kernel::id::SellerId;

use crate::application::command::{CreateSellerCommand, UpdateSellerCommand};
use crate::domain::entity::{Seller, ValidatedSeller};
use crate::domain::repository::SellerRepository;
use crate::error::{CatalogError, CatalogResult};

pub struct SellerService<S>
where
    S: SellerRepository,
{
    seller_repo: Arc<S>,
}

impl<S> SellerService<S>
where
    S: SellerRepository,
{
    pub fn new(seller_repo: Arc<S>) -> Self {
        Self { seller_repo }
    }

    pub async fn create(&self, command: CreateSellerCommand) -> CatalogResult<ValidatedSeller> {
        let seller = Seller::new(command.name).validate()?;
        self.seller_repo.create_seller(&seller).await?;

        let persisted = self.reload(seller.id()).await?;
        tracing::info!(seller_id = %persisted.id(), name = %persisted.name(), "Seller created");
        Ok(persisted)
    }

    pub async fn find_all(&self) -> CatalogResult<Vec<ValidatedSeller>> {
        self.seller_repo.find_all_sellers().await
    }

    pub async fn find_by_id(&self, id: SellerId) -> CatalogResult<ValidatedSeller> {
        self.seller_repo
            .find_seller(id)
            .await?
            .ok_or(CatalogError::SellerNotFound)
    }

    pub async fn update(&self, command: UpdateSellerCommand) -> CatalogResult<ValidatedSeller> {
        let seller = Seller::new(command.name).validate_with_id(command.id)?;
        self.seller_repo.update_seller(&seller).await?;

        let persisted = self.reload(seller.id()).await?;
        tracing::info!(seller_id = %persisted.id(), "Seller updated");
        Ok(persisted)
    }

    pub async fn delete(&self, id: SellerId) -> CatalogResult<()> {
        self.seller_repo.delete_seller(id).await?;
        tracing::info!(seller_id = %id, "Seller deleted");
        Ok(())
    }

    async fn reload(&self, id: SellerId) -> CatalogResult<ValidatedSeller> {
        self.seller_repo
            .find_seller(id)
            .await?
            .ok_or_else(|| CatalogError::Internal(format!("seller {id} vanished after write")))
    }
}
