//! Auth Router

use axum::{
    Router,
    middleware::from_fn_with_state,
    routing::{get, post},
};
use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::domain::repository::{OrganizationRepository, UserRepository};
use crate::presentation::handlers::{self, AuthAppState};
use crate::presentation::middleware::{AuthMiddlewareState, require_auth};

/// Create a generic Auth router for any repository implementation
///
/// Mounted under `/api/auth`.
pub fn auth_router_generic<R>(repo: Arc<R>, config: Arc<AuthConfig>) -> Router
where
    R: UserRepository + OrganizationRepository + Send + Sync + 'static,
{
    let auth_state = AuthMiddlewareState::new(repo.clone(), config.clone());
    let state = AuthAppState { repo, config };

    Router::new()
        .route("/signup", post(handlers::sign_up::<R>))
        .route("/signin", post(handlers::sign_in::<R>))
        .route(
            "/signout",
            get(handlers::sign_out::<R>)
                .route_layer(from_fn_with_state(auth_state, require_auth::<R>)),
        )
        .with_state(state)
}
