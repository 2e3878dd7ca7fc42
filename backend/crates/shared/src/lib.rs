//! Shared Kernel - vocabulary shared by every marketplace crate
//!
//! This crate holds the pieces whose meaning must not drift between
//! the auth and catalog contexts:
//! - The error taxonomy ([`error::kind::ErrorKind`]) and the unified
//!   [`error::app_error::AppError`] type
//! - Typed UUID identifiers ([`id::Id`])
//!
//! Framework glue is feature-gated: `sqlx` converts database errors,
//! `axum` renders [`error::app_error::AppError`] as a JSON response and
//! provides the [`extract::ValidJson`] body extractor.

pub mod error {
    pub mod app_error;
    pub mod conversions;
    pub mod kind;
}
#[cfg(feature = "axum")]
pub mod extract;
pub mod id;
