//! HTTP Handlers

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use std::sync::Arc;

use kernel::extract::ValidJson;
use kernel::id::markers;

use crate::application::{
    CreateProductCommand, CreateSellerCommand, ProductService, SellerService,
    UpdateProductCommand, UpdateSellerCommand,
};
use crate::domain::repository::{ProductRepository, SellerRepository};
use crate::error::CatalogResult;
use crate::presentation::dto::{
    CreateProductRequest, CreateSellerRequest, ProductResponse, SellerResponse,
    UpdateProductRequest, UpdateSellerRequest, parse_id,
};

/// Shared state for catalog handlers
pub struct CatalogAppState<R>
where
    R: SellerRepository + ProductRepository + Send + Sync + 'static,
{
    pub repo: Arc<R>,
}

impl<R> Clone for CatalogAppState<R>
where
    R: SellerRepository + ProductRepository + Send + Sync + 'static,
{
    fn clone(&self) -> Self {
        Self {
            repo: self.repo.clone(),
        }
    }
}

impl<R> CatalogAppState<R>
where
    R: SellerRepository + ProductRepository + Send + Sync + 'static,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    fn sellers(&self) -> SellerService<R> {
        SellerService::new(self.repo.clone())
    }

    fn products(&self) -> ProductService<R, R> {
        ProductService::new(self.repo.clone(), self.repo.clone())
    }
}

// ============================================================================
// Sellers
// ============================================================================

/// POST /sellers
pub async fn create_seller<R>(
    State(state): State<CatalogAppState<R>>,
    ValidJson(req): ValidJson<CreateSellerRequest>,
) -> CatalogResult<(StatusCode, Json<SellerResponse>)>
where
    R: SellerRepository + ProductRepository + Send + Sync + 'static,
{
    let seller = state
        .sellers()
        .create(CreateSellerCommand { name: req.name })
        .await?;

    Ok((StatusCode::CREATED, Json(seller.into())))
}

/// GET /sellers
pub async fn list_sellers<R>(
    State(state): State<CatalogAppState<R>>,
) -> CatalogResult<Json<Vec<SellerResponse>>>
where
    R: SellerRepository + ProductRepository + Send + Sync + 'static,
{
    let sellers = state.sellers().find_all().await?;
    Ok(Json(sellers.into_iter().map(SellerResponse::from).collect()))
}

/// GET /sellers/{id}
pub async fn get_seller<R>(
    State(state): State<CatalogAppState<R>>,
    Path(id): Path<String>,
) -> CatalogResult<Json<SellerResponse>>
where
    R: SellerRepository + ProductRepository + Send + Sync + 'static,
{
    let id = parse_id::<markers::Seller>(&id, "seller")?;
    let seller = state.sellers().find_by_id(id).await?;
    Ok(Json(seller.into()))
}

/// PUT /sellers
///
/// The id travels in the body.
pub async fn update_seller<R>(
    State(state): State<CatalogAppState<R>>,
    ValidJson(req): ValidJson<UpdateSellerRequest>,
) -> CatalogResult<Json<SellerResponse>>
where
    R: SellerRepository + ProductRepository + Send + Sync + 'static,
{
    let id = parse_id::<markers::Seller>(&req.id, "seller")?;
    let seller = state
        .sellers()
        .update(UpdateSellerCommand { id, name: req.name })
        .await?;

    Ok(Json(seller.into()))
}

/// DELETE /sellers/{id}
pub async fn delete_seller<R>(
    State(state): State<CatalogAppState<R>>,
    Path(id): Path<String>,
) -> CatalogResult<StatusCode>
where
    R: SellerRepository + ProductRepository + Send + Sync + 'static,
{
    let id = parse_id::<markers::Seller>(&id, "seller")?;
    state.sellers().delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

// ============================================================================
// Products
// ============================================================================

/// POST /products
pub async fn create_product<R>(
    State(state): State<CatalogAppState<R>>,
    ValidJson(req): ValidJson<CreateProductRequest>,
) -> CatalogResult<(StatusCode, Json<ProductResponse>)>
where
    R: SellerRepository + ProductRepository + Send + Sync + 'static,
{
    let seller_id = parse_id::<markers::Seller>(&req.seller_id, "seller")?;
    let product = state
        .products()
        .create(CreateProductCommand {
            name: req.name,
            price: req.price,
            seller_id,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(product.into())))
}

/// GET /products
pub async fn list_products<R>(
    State(state): State<CatalogAppState<R>>,
) -> CatalogResult<Json<Vec<ProductResponse>>>
where
    R: SellerRepository + ProductRepository + Send + Sync + 'static,
{
    let products = state.products().find_all().await?;
    Ok(Json(products.into_iter().map(ProductResponse::from).collect()))
}

/// GET /products/{id}
pub async fn get_product<R>(
    State(state): State<CatalogAppState<R>>,
    Path(id): Path<String>,
) -> CatalogResult<Json<ProductResponse>>
where
    R: SellerRepository + ProductRepository + Send + Sync + 'static,
{
    let id = parse_id::<markers::Product>(&id, "product")?;
    let product = state.products().find_by_id(id).await?;
    Ok(Json(product.into()))
}

/// PUT /products/{id}
pub async fn update_product<R>(
    State(state): State<CatalogAppState<R>>,
    Path(id): Path<String>,
    ValidJson(req): ValidJson<UpdateProductRequest>,
) -> CatalogResult<Json<ProductResponse>>
where
    R: SellerRepository + ProductRepository + Send + Sync + 'static,
{
    let id = parse_id::<markers::Product>(&id, "product")?;
    let product = state
        .products()
        .update(UpdateProductCommand {
            id,
            name: req.name,
            price: req.price,
        })
        .await?;

    Ok(Json(product.into()))
}

/// DELETE /products/{id}
pub async fn delete_product<R>(
    State(state): State<CatalogAppState<R>>,
    Path(id): Path<String>,
) -> CatalogResult<StatusCode>
where
    R: SellerRepository + ProductRepository + Send + Sync + 'static,
{
    let id = parse_id::<markers::Product>(&id, "product")?;
    state.products().delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
