//! HTTP Handlers

use axum::Json;
use axum::extract::State;
use axum::http::{StatusCode, header};
use axum::response::IntoResponse;
use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::application::{SignInInput, SignInUseCase, SignUpInput, SignUpUseCase};
use crate::domain::entity::identity::Identity;
use crate::domain::repository::{OrganizationRepository, UserRepository};
use crate::error::AuthResult;
use crate::presentation::dto::{
    AuthResponse, MessageResponse, SignInRequest, SignUpRequest, UserView,
};
use crate::presentation::extract::JsonBody;

/// Shared state for auth handlers
pub struct AuthAppState<R>
where
    R: UserRepository + OrganizationRepository + Send + Sync + 'static,
{
    pub repo: Arc<R>,
    pub config: Arc<AuthConfig>,
}

impl<R> Clone for AuthAppState<R>
where
    R: UserRepository + OrganizationRepository + Send + Sync + 'static,
{
    fn clone(&self) -> Self {
        Self {
            repo: self.repo.clone(),
            config: self.config.clone(),
        }
    }
}

// ============================================================================
// Sign Up
// ============================================================================

/// POST /api/auth/signup
pub async fn sign_up<R>(
    State(state): State<AuthAppState<R>>,
    JsonBody(req): JsonBody<SignUpRequest>,
) -> AuthResult<impl IntoResponse>
where
    R: UserRepository + OrganizationRepository + Send + Sync + 'static,
{
    let use_case = SignUpUseCase::new(state.repo.clone(), state.config.clone());

    let input = SignUpInput {
        name: req.name,
        email: req.email,
        password: req.password,
    };

    let output = use_case.execute(input).await?;

    let cookie = build_token_cookie(&state.config, &output.token.token);

    Ok((
        StatusCode::CREATED,
        [(header::SET_COOKIE, cookie)],
        Json(AuthResponse {
            success: true,
            message: "Organization created successfully".to_string(),
            user: UserView::from(&output.user),
            token: output.token.token,
        }),
    ))
}

// ============================================================================
// Sign In
// ============================================================================

/// POST /api/auth/signin
pub async fn sign_in<R>(
    State(state): State<AuthAppState<R>>,
    JsonBody(req): JsonBody<SignInRequest>,
) -> AuthResult<impl IntoResponse>
where
    R: UserRepository + OrganizationRepository + Send + Sync + 'static,
{
    let use_case = SignInUseCase::new(state.repo.clone(), state.config.clone());

    let input = SignInInput {
        email: req.email,
        password: req.password,
    };

    let output = use_case.execute(input).await?;

    let cookie = build_token_cookie(&state.config, &output.token.token);

    Ok((
        StatusCode::OK,
        [(header::SET_COOKIE, cookie)],
        Json(AuthResponse {
            success: true,
            message: "Signed in successfully".to_string(),
            user: UserView::from(&output.user),
            token: output.token.token,
        }),
    ))
}

// ============================================================================
// Sign Out
// ============================================================================

/// GET /api/auth/signout
///
/// Tokens are stateless, so signing out only clears the cookie.
pub async fn sign_out<R>(
    State(state): State<AuthAppState<R>>,
    identity: Identity,
) -> impl IntoResponse
where
    R: UserRepository + OrganizationRepository + Send + Sync + 'static,
{
    tracing::info!(user_id = %identity.user_id, "User signed out");

    let cookie = build_clear_cookie(&state.config);

    (
        StatusCode::OK,
        [(header::SET_COOKIE, cookie)],
        Json(MessageResponse::new("Logout Done")),
    )
}

// ============================================================================
// Helper Functions
// ============================================================================

fn build_token_cookie(config: &AuthConfig, token: &str) -> String {
    config.cookie_config().build_set_cookie(token)
}

fn build_clear_cookie(config: &AuthConfig) -> String {
    config.cookie_config().build_delete_cookie()
}
