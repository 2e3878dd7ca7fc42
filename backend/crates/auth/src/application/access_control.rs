//! Access Control
//!
//! The two request gates: bearer authentication and the role check.
//! The axum middleware in `presentation::middleware` calls these.

use std::sync::Arc;

use axum::http::{HeaderMap, header};

use crate::application::token::TokenCodec;
use crate::domain::entity::user::User;
use crate::domain::repository::UserRepository;
use crate::domain::value_object::{user_id::UserId, user_role::UserRole};
use crate::error::{AuthError, AuthResult};

const BEARER_PREFIX: &str = "Bearer ";

/// Authenticated subject, taken from verified token claims
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    pub subject_id: String,
    pub email: String,
}

pub struct AccessControl<U>
where
    U: UserRepository,
{
    user_repo: Arc<U>,
    codec: TokenCodec,
}

impl<U> AccessControl<U>
where
    U: UserRepository,
{
    pub fn new(user_repo: Arc<U>, codec: TokenCodec) -> Self {
        Self { user_repo, codec }
    }

    /// Requires `Authorization: Bearer <token>`, case-sensitive prefix
    pub fn authenticate(&self, headers: &HeaderMap) -> AuthResult<Identity> {
        let value = headers
            .get(header::AUTHORIZATION)
            .ok_or_else(|| AuthError::Unauthenticated("missing Authorization header".into()))?;
        let value = value
            .to_str()
            .map_err(|_| AuthError::Unauthenticated("unreadable Authorization header".into()))?;
        let token = value
            .strip_prefix(BEARER_PREFIX)
            .ok_or_else(|| AuthError::Unauthenticated("expected a Bearer token".into()))?;

        let claims = self.codec.decode(token)?;

        Ok(Identity {
            subject_id: claims.id,
            email: claims.email,
        })
    }

    /// Loads the subject's current record and checks its role
    ///
    /// A subject whose record no longer exists is unauthenticated, not
    /// forbidden.
    pub async fn require_role(&self, subject_id: &str, required: UserRole) -> AuthResult<User> {
        let user_id = UserId::parse(subject_id)
            .map_err(|_| AuthError::Unauthenticated("token subject is empty".into()))?;

        let user = self
            .user_repo
            .find_by_id(&user_id)
            .await?
            .ok_or_else(|| AuthError::Unauthenticated("token subject no longer exists".into()))?;

        if user.user_role != required {
            tracing::warn!(
                user_id = %user.user_id,
                role = %user.user_role,
                required = %required,
                "Role check failed"
            );
            return Err(AuthError::InsufficientRole);
        }

        Ok(user)
    }
}
