//! Password Hashing and Verification
//!
//! Passwords are stored as the unsalted SHA-256 hex digest of the clear
//! text. This matches the existing `users.password_hash` rows and is weak:
//! identical passwords share a digest and the hash is fast to brute-force.
//! Swapping in a memory-hard KDF needs a data migration.

use std::fmt;

use thiserror::Error;

use crate::crypto::{constant_time_eq, sha256_hex};

/// Password policy violation errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PasswordPolicyError {
    /// Password is empty
    #[error("Password cannot be empty")]
    Empty,
}

// ============================================================================
// Clear Text Password
// ============================================================================

/// Clear text password as received from a client
///
/// Does not implement `Clone`; Debug output is redacted.
///
/// ## Examples
/// ```rust
/// use platform::password::ClearTextPassword;
///
/// let password = ClearTextPassword::new("hunter22".to_string()).unwrap();
/// let hashed = password.hash();
/// assert!(hashed.verify(&password));
/// ```
pub struct ClearTextPassword(String);

impl ClearTextPassword {
    /// Only emptiness is rejected; there is no strength policy
    pub fn new(raw: String) -> Result<Self, PasswordPolicyError> {
        if raw.is_empty() {
            return Err(PasswordPolicyError::Empty);
        }
        Ok(Self(raw))
    }

    pub fn hash(&self) -> HashedPassword {
        HashedPassword {
            hash: sha256_hex(self.0.as_bytes()),
        }
    }
}

impl fmt::Debug for ClearTextPassword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ClearTextPassword")
            .field(&"[REDACTED]")
            .finish()
    }
}

// ============================================================================
// Hashed Password
// ============================================================================

/// Lowercase hex SHA-256 digest of a password
#[derive(Clone, PartialEq, Eq)]
pub struct HashedPassword {
    hash: String,
}

impl HashedPassword {
    /// Wrap a digest loaded from storage
    pub fn from_hex(s: impl Into<String>) -> Self {
        Self { hash: s.into() }
    }

    pub fn as_str(&self) -> &str {
        &self.hash
    }

    pub fn into_string(self) -> String {
        self.hash
    }

    /// Hash `password` and compare in constant time
    pub fn verify(&self, password: &ClearTextPassword) -> bool {
        let candidate = password.hash();
        constant_time_eq(self.hash.as_bytes(), candidate.hash.as_bytes())
    }
}

impl fmt::Debug for HashedPassword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HashedPassword")
            .field("hash", &"[HASH]")
            .finish()
    }
}

// ============================================================================
// Tests
// ============================================================================
