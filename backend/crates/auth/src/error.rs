//! Auth Error Types
//!
//! This module provides auth-specific error variants that integrate
//! with the unified `kernel::error::AppError` system.

use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use thiserror::Error;

/// Auth-specific result type alias
pub type AuthResult<T> = Result<T, AuthError>;

/// Message shared by every authentication failure
pub const UNAUTHENTICATED_MESSAGE: &str = "Unauthenticated user";

/// Message shared by every authorization failure
pub const FORBIDDEN_MESSAGE: &str = "You are not allowed for this resource";

/// Auth-specific error variants
#[derive(Debug, Error)]
pub enum AuthError {
    /// Missing or malformed input
    #[error("{0}")]
    Validation(String),

    /// Email already belongs to another user
    #[error("Email already registered")]
    EmailTaken,

    /// Organization title already in use
    #[error("Organization name already registered")]
    OrganizationTaken,

    /// Sign-in with an unknown email
    #[error("Email not registered yet")]
    EmailNotRegistered,

    /// Sign-in with a wrong password
    #[error("Email & password are not matching")]
    PasswordMismatch,

    /// No token, or a token that does not resolve to a stored user
    #[error("{}", UNAUTHENTICATED_MESSAGE)]
    Unauthenticated,

    /// Role or tenant check failed
    #[error("{}", FORBIDDEN_MESSAGE)]
    Forbidden,

    /// Database error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AuthError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        StatusCode::from_u16(self.kind().status_code())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }

    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            AuthError::Validation(_)
            | AuthError::EmailNotRegistered
            | AuthError::PasswordMismatch => ErrorKind::Validation,
            AuthError::EmailTaken | AuthError::OrganizationTaken => ErrorKind::Conflict,
            AuthError::Unauthenticated => ErrorKind::Unauthenticated,
            AuthError::Forbidden => ErrorKind::Forbidden,
            AuthError::Database(_) | AuthError::Internal(_) => ErrorKind::Internal,
        }
    }

    /// Convert to AppError
    pub fn to_app_error(&self) -> AppError {
        AppError::new(self.kind(), self.to_string())
    }

    /// Log the error with appropriate level
    fn log(&self) {
        match self {
            AuthError::Database(e) => {
                tracing::error!(error = %e, "Auth database error");
            }
            AuthError::Internal(msg) => {
                tracing::error!(message = %msg, "Auth internal error");
            }
            AuthError::PasswordMismatch => {
                tracing::warn!("Sign-in with wrong password");
            }
            AuthError::Forbidden => {
                tracing::info!("Access denied");
            }
            _ => {
                tracing::debug!(error = %self, "Auth error");
            }
        }
    }
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        self.log();
        self.to_app_error().into_response()
    }
}

impl From<JsonRejection> for AuthError {
    fn from(rejection: JsonRejection) -> Self {
        AuthError::Validation(rejection.body_text())
    }
}

impl From<platform::password::PasswordHashError> for AuthError {
    fn from(err: platform::password::PasswordHashError) -> Self {
        AuthError::Internal(err.to_string())
    }
}
