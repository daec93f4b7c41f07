//! Authenticate Use Case
//!
//! Resolves the caller of a request: token lookup (cookie first, then
//! `Authorization: Bearer`), signature and expiry check, and a fresh load of
//! the subject from the store.
//!
//! Every failure collapses to `AuthError::Unauthenticated`. The reason is
//! only logged. An absent or invalid token never reaches the store.

use std::sync::Arc;

use axum::http::HeaderMap;
use platform::cookie::{extract_bearer, extract_cookie};

use crate::application::config::AuthConfig;
use crate::application::token::TokenCodec;
use crate::domain::entity::identity::Identity;
use crate::domain::repository::UserRepository;
use crate::error::{AuthError, AuthResult};

/// Pull the raw token out of the request headers
///
/// The cookie wins when both the cookie and a bearer header are present.
pub fn extract_token(headers: &HeaderMap, cookie_name: &str) -> Option<String> {
    extract_cookie(headers, cookie_name).or_else(|| extract_bearer(headers))
}

/// Authenticate use case
pub struct AuthenticateUseCase<U>
where
    U: UserRepository,
{
    user_repo: Arc<U>,
    config: Arc<AuthConfig>,
}

impl<U> AuthenticateUseCase<U>
where
    U: UserRepository,
{
    pub fn new(user_repo: Arc<U>, config: Arc<AuthConfig>) -> Self {
        Self { user_repo, config }
    }

    pub async fn execute(&self, token: Option<&str>) -> AuthResult<Identity> {
        let Some(token) = token else {
            tracing::debug!("No token presented");
            return Err(AuthError::Unauthenticated);
        };

        let user_id = TokenCodec::from_config(&self.config)
            .verify(token)
            .map_err(|reason| {
                tracing::debug!(%reason, "Token rejected");
                AuthError::Unauthenticated
            })?;

        let user = self
            .user_repo
            .find_by_id(&user_id)
            .await?
            .ok_or_else(|| {
                tracing::debug!(user_id = %user_id, "Token subject no longer exists");
                AuthError::Unauthenticated
            })?;

        Ok(Identity::from(user))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::{HeaderValue, header};

    #[test]
    fn test_cookie_takes_precedence() {
        let mut headers = HeaderMap::new();
        headers.insert(header::COOKIE, HeaderValue::from_static("token=from-cookie"));
        headers.insert(
            header::AUTHORIZATION,
            HeaderValue::from_static("Bearer from-header"),
        );

        assert_eq!(
            extract_token(&headers, "token").as_deref(),
            Some("from-cookie")
        );
    }

    #[test]
    fn test_bearer_fallback() {
        let mut headers = HeaderMap::new();
        headers.insert(
            header::AUTHORIZATION,
            HeaderValue::from_static("Bearer from-header"),
        );
        assert_eq!(
            extract_token(&headers, "token").as_deref(),
            Some("from-header")
        );

        // An empty cookie does not shadow the header
        headers.insert(header::COOKIE, HeaderValue::from_static("token="));
        assert_eq!(
            extract_token(&headers, "token").as_deref(),
            Some("from-header")
        );
    }

    #[test]
    fn test_no_token() {
        assert_eq!(extract_token(&HeaderMap::new(), "token"), None);
    }
}
