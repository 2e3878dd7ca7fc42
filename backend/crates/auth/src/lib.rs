//! Auth (Authentication) Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - User entity, value objects, repository trait
//! - `application/` - Use cases, token codec, access control
//! - `infra/` - PostgreSQL and in-memory repositories
//! - `presentation/` - HTTP handlers, DTOs, router, middleware
//!
//! ## Features
//! - Registration and login by email + password
//! - Stateless HMAC-SHA256 bearer tokens (`payload.signature`)
//! - Admin-gated user management with role (`user`, `admin`) and status
//!   (`active`, `inactive`, `locked`)
//!
//! ## Security Model
//! - Passwords are stored as unsalted SHA-256 hex digests (weak, kept for
//!   compatibility with existing rows)
//! - Tokens cannot be revoked; they expire after the configured TTL
//! - Role checks re-read the user on every request, so demotion is immediate

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

// Re-exports for convenience
pub use application::config::AuthConfig;
pub use application::{AccessControl, AdminSeed, Claims, Identity, TokenCodec, ensure_admin};
pub use error::{AuthError, AuthResult};
pub use infra::{memory::InMemoryUserRepository, postgres::PgUserRepository};
pub use presentation::router::auth_router;

// Re-export kernel error types for unified error handling
pub use kernel::error::{
    app_error::{AppError, AppResult},
    kind::ErrorKind,
};

pub mod models {
    pub use crate::domain::entity::*;
    pub use crate::domain::value_object::*;
    pub use crate::presentation::dto::*;
}
