//! Workforce Error Types
//!
//! Project and employee errors. Authentication and authorization failures
//! are carried through unchanged from the auth crate.

use auth::error::AuthError;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use thiserror::Error;

/// Workforce-specific result type alias
pub type WorkforceResult<T> = Result<T, WorkforceError>;

/// Workforce-specific error variants
#[derive(Debug, Error)]
pub enum WorkforceError {
    /// Authentication, authorization or credential error
    #[error(transparent)]
    Auth(#[from] AuthError),

    /// Missing or malformed input
    #[error("{0}")]
    Validation(String),

    /// Project title already used inside the organization
    #[error("Project title is already used")]
    ProjectTitleTaken,

    /// No project with the requested id
    #[error("Project not found")]
    ProjectNotFound,

    /// No user with the requested id
    #[error("Employee not found")]
    UserNotFound,

    /// Database error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

impl WorkforceError {
    /// Shorthand for a tenant or role rejection
    pub fn forbidden() -> Self {
        WorkforceError::Auth(AuthError::Forbidden)
    }

    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        StatusCode::from_u16(self.kind().status_code())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }

    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            WorkforceError::Auth(e) => e.kind(),
            WorkforceError::Validation(_) => ErrorKind::Validation,
            WorkforceError::ProjectTitleTaken => ErrorKind::Conflict,
            WorkforceError::ProjectNotFound | WorkforceError::UserNotFound => ErrorKind::NotFound,
            WorkforceError::Database(_) => ErrorKind::Internal,
        }
    }

    /// Convert to AppError
    pub fn to_app_error(&self) -> AppError {
        AppError::new(self.kind(), self.to_string())
    }

    /// Log the error with appropriate level
    fn log(&self) {
        match self {
            WorkforceError::Database(e) => {
                tracing::error!(error = %e, "Workforce database error");
            }
            _ => {
                tracing::debug!(error = %self, "Workforce error");
            }
        }
    }
}

impl IntoResponse for WorkforceError {
    fn into_response(self) -> Response {
        match self {
            // Auth errors log themselves
            WorkforceError::Auth(e) => e.into_response(),
            other => {
                other.log();
                other.to_app_error().into_response()
            }
        }
    }
}
