//! Catalog Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - Seller and product entities, repository traits
//! - `application/` - Commands and services
//! - `infra/` - PostgreSQL and in-memory repositories
//! - `presentation/` - HTTP handlers, DTOs, router
//!
//! ## Entity Model
//! Entities come in two phases. A raw `Seller`/`Product` is whatever the
//! caller handed in; `ValidatedSeller`/`ValidatedProduct` can only be built
//! by validation and are the only forms repositories accept.

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

// Re-exports for convenience
pub use application::{ProductService, SellerService};
pub use error::{CatalogError, CatalogResult};
pub use infra::{memory::InMemoryCatalogRepository, postgres::PgCatalogRepository};
pub use presentation::router::catalog_router;

pub use kernel::id::{ProductId, SellerId};

pub mod models {
    pub use crate::domain::entity::*;
    pub use crate::presentation::dto::*;
}

#[cfg(test)]
mod tests;
