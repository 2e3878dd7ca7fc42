//! Auth Router

use axum::{
    Router,
    middleware::from_fn_with_state,
    routing::{get, post, put},
};
use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::domain::repository::UserRepository;
use crate::presentation::handlers::{self, AuthAppState};
use crate::presentation::middleware::{require_admin, require_bearer};
use crate::presentation::user_handlers;

/// Create the Auth router for any user repository
///
/// Routes are relative; the binary nests them under `/api/v1`.
pub fn auth_router<R>(repo: Arc<R>, config: AuthConfig) -> Router
where
    R: UserRepository + Send + Sync + 'static,
{
    let state = AuthAppState::new(repo, config);

    let profile = Router::new()
        .route("/auth/profile", get(handlers::profile::<R>))
        .route_layer(from_fn_with_state(state.clone(), require_bearer::<R>));

    // Later layers wrap earlier ones: bearer runs first, then the role check
    let admin = Router::new()
        .route(
            "/users",
            get(user_handlers::list_users::<R>).post(user_handlers::create_user::<R>),
        )
        .route(
            "/users/{id}",
            get(user_handlers::get_user::<R>)
                .put(user_handlers::update_user::<R>)
                .delete(user_handlers::delete_user::<R>),
        )
        .route("/users/{id}/role", put(user_handlers::update_role::<R>))
        .route("/users/{id}/status", put(user_handlers::update_status::<R>))
        .route_layer(from_fn_with_state(state.clone(), require_admin::<R>))
        .route_layer(from_fn_with_state(state.clone(), require_bearer::<R>));

    Router::new()
        .route("/register", post(handlers::register::<R>))
        .route("/login", post(handlers::login::<R>))
        .merge(profile)
        .merge(admin)
        .with_state(state)
}
