//! Access Controller
//!
//! Role gate applied per route and per method. Runs after authentication.

use crate::domain::entity::identity::Identity;
use crate::domain::value_object::UserRole;
use crate::error::{AuthError, AuthResult};

/// Set of roles allowed to reach an endpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoleSet {
    manager: bool,
    employee: bool,
}

impl RoleSet {
    /// Managers only
    pub const MANAGER: Self = Self::of(&[UserRole::Manager]);

    /// Any member of an organization
    pub const MEMBERS: Self = Self::of(&[UserRole::Manager, UserRole::Employee]);

    pub const fn of(roles: &[UserRole]) -> Self {
        let mut set = Self {
            manager: false,
            employee: false,
        };
        let mut i = 0;
        while i < roles.len() {
            match roles[i] {
                UserRole::Manager => set.manager = true,
                UserRole::Employee => set.employee = true,
            }
            i += 1;
        }
        set
    }

    pub const fn permits(&self, role: UserRole) -> bool {
        match role {
            UserRole::Manager => self.manager,
            UserRole::Employee => self.employee,
        }
    }
}

/// Check the caller's role against the allowed set
pub fn authorize(identity: &Identity, allowed: RoleSet) -> AuthResult<()> {
    if allowed.permits(identity.role) {
        Ok(())
    } else {
        tracing::info!(
            user_id = %identity.user_id,
            role = %identity.role,
            "Role not allowed for this endpoint"
        );
        Err(AuthError::Forbidden)
    }
}
