//! Catalog Router

use axum::{Router, routing::get};
use std::sync::Arc;

use crate::domain::repository::{ProductRepository, SellerRepository};
use crate::presentation::handlers::{self, CatalogAppState};

/// Create the catalog router; routes are relative and public
pub fn catalog_router<R>(repo: Arc<R>) -> Router
where
    R: SellerRepository + ProductRepository + Send + Sync + 'static,
{
    let state = CatalogAppState::new(repo);

    Router::new()
        .route(
            "/sellers",
            get(handlers::list_sellers::<R>)
                .post(handlers::create_seller::<R>)
                .put(handlers::update_seller::<R>),
        )
        .route(
            "/sellers/{id}",
            get(handlers::get_seller::<R>).delete(handlers::delete_seller::<R>),
        )
        .route(
            "/products",
            get(handlers::list_products::<R>).post(handlers::create_product::<R>),
        )
        .route(
            "/products/{id}",
            get(handlers::get_product::<R>)
                .put(handlers::update_product::<R>)
                .delete(handlers::delete_product::<R>),
        )
        .with_state(state)
}
