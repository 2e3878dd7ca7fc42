//! Auth Middleware
//!
//! `require_bearer` verifies the token and stores the [`Identity`] in the
//! request extensions. `require_admin` must run after it.

use axum::extract::{Request, State};
use axum::middleware::Next;
use axum::response::Response;

use crate::application::Identity;
use crate::domain::repository::UserRepository;
use crate::domain::value_object::user_role::UserRole;
use crate::error::AuthError;
use crate::presentation::handlers::AuthAppState;

/// Middleware that requires a valid bearer token
pub async fn require_bearer<R>(
    State(state): State<AuthAppState<R>>,
    mut req: Request,
    next: Next,
) -> Result<Response, AuthError>
where
    R: UserRepository + Send + Sync + 'static,
{
    let identity = state.access_control().authenticate(req.headers())?;

    tracing::debug!(subject_id = %identity.subject_id, "Bearer token accepted");

    req.extensions_mut().insert(identity);
    Ok(next.run(req).await)
}

/// Middleware that requires the authenticated subject to be an admin
pub async fn require_admin<R>(
    State(state): State<AuthAppState<R>>,
    req: Request,
    next: Next,
) -> Result<Response, AuthError>
where
    R: UserRepository + Send + Sync + 'static,
{
    let subject_id = req
        .extensions()
        .get::<Identity>()
        .map(|identity| identity.subject_id.clone())
        .ok_or_else(|| AuthError::Unauthenticated("no authenticated identity".into()))?;

    state
        .access_control()
        .require_role(&subject_id, UserRole::Admin)
        .await?;

    Ok(next.run(req).await)
}
