//! Auth (Authentication and Authorization) Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - Users, organizations, repository traits
//! - `application/` - Use cases, token codec, access and tenant policies
//! - `infra/` - Database implementations
//! - `presentation/` - HTTP handlers, DTOs, extractors, middleware, router
//!
//! ## Features
//! - Organization sign-up (creates the organization and its manager)
//! - Email + password sign-in, stateless sign-out
//! - HMAC-signed session tokens, read from the `token` cookie or a bearer header
//! - Role gate (manager / employee) and tenant scoping for downstream crates
//!
//! ## Security Model
//! - Passwords hashed with Argon2id, optional pepper
//! - Tokens expire after 24 hours; the subject is reloaded on every request
//! - Authentication failures never reveal why the token was rejected

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;


// Re-exports for convenience
pub use application::config::AuthConfig;
pub use application::{ProjectScope, RoleSet, TenantScope};
pub use domain::entity::Identity;
pub use error::{AuthError, AuthResult};
pub use infra::postgres::PgAuthRepository;
pub use presentation::router::auth_router_generic;

// Re-export kernel error types for unified error handling
pub use kernel::error::{
    app_error::{AppError, AppResult},
    kind::ErrorKind,
};

pub mod models {
    pub use crate::domain::entity::*;
    pub use crate::domain::value_object::*;
    pub use crate::presentation::dto::*;
}

pub mod middleware {
    pub use crate::presentation::middleware::*;
}
