//! Request Extractors
//!
//! - [`JsonBody`]: JSON body whose rejection renders as a 400 envelope
//! - [`Identity`] / [`TenantScope`]: the caller resolved by `require_auth`

use axum::extract::{FromRequest, FromRequestParts};
use axum::http::request::Parts;

use crate::application::tenant_scope::TenantScope;
use crate::domain::entity::identity::Identity;
use crate::error::AuthError;

/// `axum::Json` with the portal's error envelope on rejection
#[derive(Debug, Clone, Copy, Default, FromRequest)]
#[from_request(via(axum::Json), rejection(AuthError))]
pub struct JsonBody<T>(pub T);

impl<S> FromRequestParts<S> for Identity
where
    S: Send + Sync,
{
    type Rejection = AuthError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        // Only present behind `require_auth`
        parts
            .extensions
            .get::<Identity>()
            .cloned()
            .ok_or(AuthError::Unauthenticated)
    }
}

impl<S> FromRequestParts<S> for TenantScope
where
    S: Send + Sync,
{
    type Rejection = AuthError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let identity = Identity::from_request_parts(parts, state).await?;
        Ok(TenantScope::new(identity))
    }
}
