//! Platform Crate - Technical Infrastructure
//!
//! This crate provides shared technical foundations:
//! - Cryptographic utilities (SHA-256, HMAC-SHA-256, base64url)
//! - Password hashing (SHA-256 hex digest, kept for compatibility)

pub mod crypto;
pub mod password;
