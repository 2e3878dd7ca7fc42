//! Error Kind - the marketplace error taxonomy
//!
//! Every failure in the system is classified into one [`ErrorKind`],
//! which fixes the HTTP status the presentation layer answers with.

use serde::Serialize;

/// Error classification shared by all crates
///
/// Token failures (malformed, bad signature, expired) and bad credentials
/// all collapse into [`ErrorKind::Unauthenticated`] at this level; the
/// crate-local error enums keep the finer distinction.
///
/// ## Examples
/// ```rust
/// use kernel::error::kind::ErrorKind;
///
/// let kind = ErrorKind::NotFound;
/// assert_eq!(kind.status_code(), 404);
/// assert_eq!(kind.code(), "NOT_FOUND");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[non_exhaustive]
pub enum ErrorKind {
    /// 400 - input has the wrong shape or violates an entity invariant
    Validation,
    /// 401 - missing, invalid or expired credentials
    Unauthenticated,
    /// 403 - authenticated but not allowed (inactive account, wrong role)
    Forbidden,
    /// 404 - no such record
    NotFound,
    /// 409 - uniqueness or referential constraint violated
    Conflict,
    /// 500 - persistence or other server-side failure
    Internal,
    /// 503 - backing service unreachable or exhausted
    Unavailable,
}

impl ErrorKind {
    /// HTTP status code for this kind
    #[inline]
    pub const fn status_code(&self) -> u16 {
        match self {
            ErrorKind::Validation => 400,
            ErrorKind::Unauthenticated => 401,
            ErrorKind::Forbidden => 403,
            ErrorKind::NotFound => 404,
            ErrorKind::Conflict => 409,
            ErrorKind::Internal => 500,
            ErrorKind::Unavailable => 503,
        }
    }

    /// Stable machine-readable code, used as the `code` field of error bodies
    #[inline]
    pub const fn code(&self) -> &'static str {
        match self {
            ErrorKind::Validation => "VALIDATION",
            ErrorKind::Unauthenticated => "UNAUTHENTICATED",
            ErrorKind::Forbidden => "FORBIDDEN",
            ErrorKind::NotFound => "NOT_FOUND",
            ErrorKind::Conflict => "CONFLICT",
            ErrorKind::Internal => "INTERNAL",
            ErrorKind::Unavailable => "UNAVAILABLE",
        }
    }

    /// Human-readable title
    #[inline]
    pub const fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::Validation => "Validation failed",
            ErrorKind::Unauthenticated => "Unauthenticated",
            ErrorKind::Forbidden => "Forbidden",
            ErrorKind::NotFound => "Not found",
            ErrorKind::Conflict => "Conflict",
            ErrorKind::Internal => "Internal error",
            ErrorKind::Unavailable => "Service unavailable",
        }
    }

    /// 5xx kinds; these are logged at error level
    #[inline]
    pub const fn is_server_error(&self) -> bool {
        self.status_code() >= 500
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
