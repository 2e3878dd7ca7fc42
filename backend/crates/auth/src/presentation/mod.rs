//! Presentation Layer
//!
//! HTTP handlers, DTOs, router, and middleware.

pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod user_handlers;

pub use handlers::AuthAppState;
pub use middleware::{require_admin, require_bearer};
pub use router::auth_router;
