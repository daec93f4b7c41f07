//! API Composition
//!
//! Builds the full HTTP application from the auth and workforce routers.
//! `main` wires it to PostgreSQL; tests wire it to the in-memory store.

pub mod config;

use std::sync::Arc;

use auth::domain::repository::{OrganizationRepository, UserRepository};
use auth::presentation::dto::MessageResponse;
use auth::{AuthConfig, auth_router_generic};
use axum::{
    Json, Router,
    http::{HeaderValue, Method, header},
    routing::get,
};
use tower_http::cors::{AllowHeaders, AllowMethods, CorsLayer};
use tower_http::trace::TraceLayer;
use workforce::domain::repository::ProjectRepository;
use workforce::{WorkforceAppState, project_router, user_router};

// Re-export unified error types for use in handlers
pub use kernel::error::{
    app_error::{AppError, AppResult},
    kind::ErrorKind,
};

/// Build the application router
///
/// `users` backs credentials, identities and employee records; `projects`
/// backs projects and rosters. Both may be the same store.
pub fn build_app<A, P>(
    users: Arc<A>,
    projects: Arc<P>,
    config: Arc<AuthConfig>,
    allowed_origins: Vec<HeaderValue>,
) -> Router
where
    A: UserRepository + OrganizationRepository + Send + Sync + 'static,
    P: ProjectRepository + Send + Sync + 'static,
{
    let workforce = WorkforceAppState::new(users.clone(), projects, config.clone());

    let api = Router::new()
        .nest("/auth", auth_router_generic(users, config))
        .nest("/user", user_router(workforce.clone()))
        .nest("/project", project_router(workforce));

    Router::new()
        .route("/health", get(health))
        .nest("/api", api)
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer(allowed_origins))
}

/// GET /health
async fn health() -> Json<MessageResponse> {
    Json(MessageResponse::new("Application is completely healthy!"))
}

fn cors_layer(allowed_origins: Vec<HeaderValue>) -> CorsLayer {
    CorsLayer::new()
        .allow_origin(allowed_origins)
        .allow_methods(AllowMethods::list([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ]))
        .allow_headers(AllowHeaders::list([
            header::CONTENT_TYPE,
            header::AUTHORIZATION,
            header::ACCEPT,
        ]))
        .allow_credentials(true)
}
