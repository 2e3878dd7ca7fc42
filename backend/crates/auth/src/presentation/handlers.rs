//! HTTP Handlers
//!
//! Public auth endpoints: register, login, profile.

use axum::extract::State;
use axum::http::StatusCode;
use axum::{Extension, Json};
use std::sync::Arc;

use kernel::extract::ValidJson;

use crate::application::config::AuthConfig;
use crate::application::{
    AccessControl, AuthenticateInput, AuthenticateUseCase, Identity, RegisterInput,
    RegisterUseCase, TokenCodec, UserQueryUseCase,
};
use crate::domain::repository::UserRepository;
use crate::error::{AuthError, AuthResult};
use crate::presentation::dto::{
    AuthResponse, LoginRequest, ProfileResponse, RegisterRequest, UserResponse,
};

/// Shared state for auth handlers
pub struct AuthAppState<R>
where
    R: UserRepository + Send + Sync + 'static,
{
    pub repo: Arc<R>,
    pub config: Arc<AuthConfig>,
}

// Manual impl: `R` itself need not be `Clone`
impl<R> Clone for AuthAppState<R>
where
    R: UserRepository + Send + Sync + 'static,
{
    fn clone(&self) -> Self {
        Self {
            repo: self.repo.clone(),
            config: self.config.clone(),
        }
    }
}

impl<R> AuthAppState<R>
where
    R: UserRepository + Send + Sync + 'static,
{
    pub fn new(repo: Arc<R>, config: AuthConfig) -> Self {
        Self {
            repo,
            config: Arc::new(config),
        }
    }

    pub fn codec(&self) -> TokenCodec {
        TokenCodec::from_config(&self.config)
    }

    pub fn access_control(&self) -> AccessControl<R> {
        AccessControl::new(self.repo.clone(), self.codec())
    }
}

// ============================================================================
// Register
// ============================================================================

/// POST /register
pub async fn register<R>(
    State(state): State<AuthAppState<R>>,
    ValidJson(req): ValidJson<RegisterRequest>,
) -> AuthResult<(StatusCode, Json<AuthResponse>)>
where
    R: UserRepository + Send + Sync + 'static,
{
    let use_case = RegisterUseCase::new(state.repo.clone());

    let user = use_case
        .execute(RegisterInput {
            username: req.username,
            email: req.email,
            password: req.password,
        })
        .await?;

    let token = state
        .codec()
        .issue(user.user_id.as_str(), user.email.as_str())?;

    Ok((
        StatusCode::CREATED,
        Json(AuthResponse {
            user: user.into(),
            token,
        }),
    ))
}

// ============================================================================
// Login
// ============================================================================

/// POST /login
///
/// An unknown email answers like a wrong password.
pub async fn login<R>(
    State(state): State<AuthAppState<R>>,
    ValidJson(req): ValidJson<LoginRequest>,
) -> AuthResult<Json<AuthResponse>>
where
    R: UserRepository + Send + Sync + 'static,
{
    let use_case = AuthenticateUseCase::new(state.repo.clone());

    let user = use_case
        .execute(AuthenticateInput {
            email: req.email,
            password: req.password,
        })
        .await
        .map_err(|e| match e {
            AuthError::UserNotFound => AuthError::InvalidCredentials,
            other => other,
        })?;

    let token = state
        .codec()
        .issue(user.user_id.as_str(), user.email.as_str())?;

    Ok(Json(AuthResponse {
        user: user.into(),
        token,
    }))
}

// ============================================================================
// Profile
// ============================================================================

/// GET /auth/profile (bearer)
pub async fn profile<R>(
    State(state): State<AuthAppState<R>>,
    Extension(identity): Extension<Identity>,
) -> AuthResult<Json<ProfileResponse>>
where
    R: UserRepository + Send + Sync + 'static,
{
    let user = UserQueryUseCase::new(state.repo.clone())
        .get_by_id(&identity.subject_id)
        .await?;

    Ok(Json(ProfileResponse {
        user: UserResponse::from(user),
    }))
}
