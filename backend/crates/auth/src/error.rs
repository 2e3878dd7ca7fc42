//! Auth Error Types
//!
//! Auth-specific error variants that integrate with the unified
//! `kernel::error::AppError` system.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use thiserror::Error;

/// Auth-specific result type alias
pub type AuthResult<T> = Result<T, AuthError>;

/// Auth-specific error variants
#[derive(Debug, Error)]
pub enum AuthError {
    /// Entity or input validation failure
    #[error("{0}")]
    Domain(AppError),

    /// User not found
    #[error("User not found")]
    UserNotFound,

    /// Username already exists
    #[error("Username already exists")]
    UsernameTaken,

    /// Email already exists
    #[error("Email already exists")]
    EmailTaken,

    /// Storage uniqueness constraint violated
    #[error("Conflict: {0}")]
    Conflict(String),

    /// Wrong password (or unknown email at the login endpoint)
    #[error("Invalid credentials")]
    InvalidCredentials,

    /// Account status is not active
    #[error("Account is not active")]
    AccountInactive,

    /// Authenticated user lacks the required role
    #[error("Insufficient role")]
    InsufficientRole,

    /// Missing or unusable credentials
    #[error("Unauthenticated: {0}")]
    Unauthenticated(String),

    /// Token does not have the `payload.signature` shape or its payload is unreadable
    #[error("Malformed token")]
    MalformedToken,

    /// Token signature does not match
    #[error("Invalid token signature")]
    InvalidSignature,

    /// Token expiry is in the past
    #[error("Token has expired")]
    ExpiredToken,

    /// Any other database failure, classified by the kernel mapping
    #[error("{0}")]
    Database(AppError),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AuthError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        StatusCode::from_u16(self.kind().status_code())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }

    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            AuthError::Domain(e) => e.kind(),
            AuthError::UserNotFound => ErrorKind::NotFound,
            AuthError::UsernameTaken | AuthError::EmailTaken | AuthError::Conflict(_) => {
                ErrorKind::Conflict
            }
            AuthError::InvalidCredentials
            | AuthError::Unauthenticated(_)
            | AuthError::MalformedToken
            | AuthError::InvalidSignature
            | AuthError::ExpiredToken => ErrorKind::Unauthenticated,
            AuthError::AccountInactive | AuthError::InsufficientRole => ErrorKind::Forbidden,
            AuthError::Database(e) => e.kind(),
            AuthError::Internal(_) => ErrorKind::Internal,
        }
    }

    /// Convert to AppError
    pub fn to_app_error(&self) -> AppError {
        let err = AppError::new(self.kind(), self.to_string());
        match self {
            AuthError::Domain(inner) => match inner.field() {
                Some(field) => err.with_field(field.to_string()),
                None => err,
            },
            _ => err,
        }
    }

    /// Log the error with appropriate level
    fn log(&self) {
        match self {
            AuthError::Database(e) if e.is_server_error() => {
                tracing::error!(error = ?e, "Auth database error");
            }
            AuthError::Internal(msg) => {
                tracing::error!(message = %msg, "Auth internal error");
            }
            AuthError::InvalidCredentials => {
                tracing::warn!("Invalid login attempt");
            }
            AuthError::AccountInactive => {
                tracing::warn!("Login attempt on inactive account");
            }
            AuthError::MalformedToken | AuthError::InvalidSignature | AuthError::ExpiredToken => {
                tracing::warn!(error = %self, "Rejected bearer token");
            }
            _ => {
                tracing::debug!(error = %self, "Auth error");
            }
        }
    }
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        self.log();
        self.to_app_error().into_response()
    }
}

impl From<AppError> for AuthError {
    fn from(err: AppError) -> Self {
        match err.kind() {
            ErrorKind::Internal | ErrorKind::Unavailable => AuthError::Internal(err.to_string()),
            _ => AuthError::Domain(err),
        }
    }
}

impl From<sqlx::Error> for AuthError {
    fn from(err: sqlx::Error) -> Self {
        if let sqlx::Error::Database(db_err) = &err {
            if db_err.is_unique_violation() {
                return match db_err.constraint() {
                    Some(c) if c.contains("username") => AuthError::UsernameTaken,
                    Some(c) if c.contains("email") => AuthError::EmailTaken,
                    _ => AuthError::Conflict(db_err.message().to_string()),
                };
            }
        }
        AuthError::Database(AppError::from(err))
    }
}
