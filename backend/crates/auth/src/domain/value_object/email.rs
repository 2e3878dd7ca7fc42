//! Email Value Object
//!
//! Only emptiness is checked. The address is not normalised, so
//! `Alice@Example.com` and `alice@example.com` are distinct users.

use serde::{Deserialize, Serialize};
use std::fmt;

use kernel::error::app_error::{AppError, AppResult};

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Email(String);

impl Email {
    pub fn new(input: impl AsRef<str>) -> AppResult<Self> {
        let trimmed = input.as_ref().trim();
        if trimmed.is_empty() {
            return Err(AppError::validation("Email cannot be empty").with_field("email"));
        }
        Ok(Self(trimmed.to_string()))
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for Email {
    type Error = AppError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Email> for String {
    fn from(value: Email) -> Self {
        value.0
    }
}

impl fmt::Display for Email {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_email() {
        let email = Email::new("alice@example.com").unwrap();
        assert_eq!(email.as_str(), "alice@example.com");
        assert_eq!(email.to_string(), "alice@example.com");
    }

    #[test]
    fn test_empty_email() {
        let err = Email::new("   ").unwrap_err();
        assert_eq!(err.field(), Some("email"));
    }

    #[test]
    fn test_case_is_not_folded() {
        assert_ne!(
            Email::new("Alice@Example.com").unwrap(),
            Email::new("alice@example.com").unwrap()
        );
    }
}
