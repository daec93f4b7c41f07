//! API DTOs (Data Transfer Objects)
//!
//! Request fields are optional so that a missing field surfaces as the
//! endpoint's own validation message instead of a deserialization error.

use chrono::{DateTime, Utc};
use kernel::id::{OrganizationId, ProjectId, UserId};
use serde::{Deserialize, Serialize};

use crate::domain::entity::user::User;
use crate::domain::value_object::UserRole;

// ============================================================================
// Sign Up
// ============================================================================

/// Sign up request
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct SignUpRequest {
    /// Organization title
    pub name: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
}

// ============================================================================
// Sign In
// ============================================================================

/// Sign in request
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct SignInRequest {
    pub email: Option<String>,
    pub password: Option<String>,
}

// ============================================================================
// Responses
// ============================================================================

/// Sign up / sign in response
///
/// The token is returned in the body as well as in the cookie for clients
/// that authenticate with a bearer header.
#[derive(Debug, Clone, Serialize)]
pub struct AuthResponse {
    pub success: bool,
    pub message: String,
    pub user: UserView,
    pub token: String,
}

/// Plain acknowledgement
#[derive(Debug, Clone, Serialize)]
pub struct MessageResponse {
    pub success: bool,
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
        }
    }
}

/// Public view of a user, never carrying the password digest
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserView {
    pub id: UserId,
    pub name: String,
    pub email: String,
    pub role: UserRole,
    pub organization: OrganizationId,
    pub projects: Vec<ProjectId>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<&User> for UserView {
    fn from(user: &User) -> Self {
        Self {
            id: user.user_id,
            name: user.name.clone(),
            email: user.email.as_str().to_string(),
            role: user.user_role,
            organization: user.organization_id,
            projects: user.projects.clone(),
            created_at: user.created_at,
            updated_at: user.updated_at,
        }
    }
}
