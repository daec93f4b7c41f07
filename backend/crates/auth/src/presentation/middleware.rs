//! Auth Middleware
//!
//! - [`require_auth`]: resolves the caller and stores its [`Identity`] in the
//!   request extensions, or answers 401
//! - [`require_roles`]: role gate, must run inside `require_auth`
//!
//! ```rust,ignore
//! let routes = Router::new()
//!     .route(
//!         "/",
//!         get(list).merge(
//!             post(create).route_layer(from_fn_with_state(RoleSet::MANAGER, require_roles)),
//!         ),
//!     )
//!     .route_layer(from_fn_with_state(auth_state, require_auth::<R>));
//! ```

use axum::extract::{Request, State};
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use std::sync::Arc;

use crate::application::access::{RoleSet, authorize};
use crate::application::authenticate::{AuthenticateUseCase, extract_token};
use crate::application::config::AuthConfig;
use crate::domain::entity::identity::Identity;
use crate::domain::repository::UserRepository;
use crate::error::AuthError;

/// Middleware state
pub struct AuthMiddlewareState<U>
where
    U: UserRepository + Send + Sync + 'static,
{
    pub repo: Arc<U>,
    pub config: Arc<AuthConfig>,
}

impl<U> AuthMiddlewareState<U>
where
    U: UserRepository + Send + Sync + 'static,
{
    pub fn new(repo: Arc<U>, config: Arc<AuthConfig>) -> Self {
        Self { repo, config }
    }
}

impl<U> Clone for AuthMiddlewareState<U>
where
    U: UserRepository + Send + Sync + 'static,
{
    fn clone(&self) -> Self {
        Self {
            repo: self.repo.clone(),
            config: self.config.clone(),
        }
    }
}

/// Middleware that requires a valid token whose subject still exists
pub async fn require_auth<U>(
    State(state): State<AuthMiddlewareState<U>>,
    mut req: Request,
    next: Next,
) -> Response
where
    U: UserRepository + Send + Sync + 'static,
{
    let token = extract_token(req.headers(), &state.config.token_cookie_name);

    let use_case = AuthenticateUseCase::new(state.repo.clone(), state.config.clone());

    match use_case.execute(token.as_deref()).await {
        Ok(identity) => {
            tracing::debug!(user_id = %identity.user_id, role = %identity.role, "Authenticated");
            req.extensions_mut().insert(identity);
            next.run(req).await
        }
        Err(e) => e.into_response(),
    }
}

/// Middleware that requires the caller's role to be in the allowed set
pub async fn require_roles(State(allowed): State<RoleSet>, req: Request, next: Next) -> Response {
    let Some(identity) = req.extensions().get::<Identity>() else {
        return AuthError::Unauthenticated.into_response();
    };

    if let Err(e) = authorize(identity, allowed) {
        return e.into_response();
    }

    next.run(req).await
}
