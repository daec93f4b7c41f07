//! Resolved Identity
//!
//! The authenticated principal attached to a request after its token has
//! been verified and its subject loaded from the store.

use kernel::id::{OrganizationId, ProjectId, UserId};

use crate::domain::entity::user::User;
use crate::domain::value_object::{Email, UserRole};

/// Authenticated caller for the lifetime of one request
///
/// Never carries the password digest.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    pub user_id: UserId,
    pub name: String,
    pub email: Email,
    pub role: UserRole,
    pub organization_id: OrganizationId,
    pub projects: Vec<ProjectId>,
}

impl From<&User> for Identity {
    fn from(user: &User) -> Self {
        Self {
            user_id: user.user_id,
            name: user.name.clone(),
            email: user.email.clone(),
            role: user.user_role,
            organization_id: user.organization_id,
            projects: user.projects.clone(),
        }
    }
}

impl From<User> for Identity {
    fn from(user: User) -> Self {
        Self {
            user_id: user.user_id,
            name: user.name,
            email: user.email,
            role: user.user_role,
            organization_id: user.organization_id,
            projects: user.projects,
        }
    }
}
