//! Catalog Error Types
//!
//! Catalog-specific error variants that integrate with the unified
//! `kernel::error::AppError` system.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use thiserror::Error;

/// Catalog-specific result type alias
pub type CatalogResult<T> = Result<T, CatalogError>;

#[derive(Debug, Error)]
pub enum CatalogError {
    /// Entity or input validation failure
    #[error("{0}")]
    Domain(AppError),

    #[error("Seller not found")]
    SellerNotFound,

    #[error("Product not found")]
    ProductNotFound,

    /// A seller cannot be removed while products reference it
    #[error("Seller still has products")]
    SellerHasProducts,

    /// Storage constraint violated
    #[error("Conflict: {0}")]
    Conflict(String),

    /// Any other database failure, classified by the kernel mapping
    #[error("{0}")]
    Database(AppError),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl CatalogError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        StatusCode::from_u16(self.kind().status_code())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }

    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            CatalogError::Domain(e) => e.kind(),
            CatalogError::SellerNotFound | CatalogError::ProductNotFound => ErrorKind::NotFound,
            CatalogError::SellerHasProducts | CatalogError::Conflict(_) => ErrorKind::Conflict,
            CatalogError::Database(e) => e.kind(),
            CatalogError::Internal(_) => ErrorKind::Internal,
        }
    }

    /// Convert to AppError
    pub fn to_app_error(&self) -> AppError {
        let err = AppError::new(self.kind(), self.to_string());
        match self {
            CatalogError::Domain(inner) => match inner.field() {
                Some(field) => err.with_field(field.to_string()),
                None => err,
            },
            _ => err,
        }
    }

    fn log(&self) {
        match self {
            CatalogError::Database(e) if e.is_server_error() => {
                tracing::error!(error = ?e, "Catalog database error");
            }
            CatalogError::Internal(msg) => {
                tracing::error!(message = %msg, "Catalog internal error");
            }
            _ => {
                tracing::debug!(error = %self, "Catalog error");
            }
        }
    }
}

impl IntoResponse for CatalogError {
    fn into_response(self) -> Response {
        self.log();
        self.to_app_error().into_response()
    }
}

impl From<AppError> for CatalogError {
    fn from(err: AppError) -> Self {
        match err.kind() {
            ErrorKind::Internal | ErrorKind::Unavailable => CatalogError::Internal(err.to_string()),
            _ => CatalogError::Domain(err),
        }
    }
}

impl From<sqlx::Error> for CatalogError {
    fn from(err: sqlx::Error) -> Self {
        if let sqlx::Error::Database(db_err) = &err {
            if db_err.is_foreign_key_violation() || db_err.is_unique_violation() {
                return CatalogError::Conflict(db_err.message().to_string());
            }
            if db_err.is_check_violation() {
                return CatalogError::Domain(AppError::validation(db_err.message().to_string()));
            }
        }
        CatalogError::Database(AppError::from(err))
    }
}
