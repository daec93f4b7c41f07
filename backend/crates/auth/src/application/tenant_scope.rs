//! Tenant Scope Policy
//!
//! Every read and write is confined to the caller's organization.
//! Employees additionally only see projects they are assigned to.

use kernel::id::{OrganizationId, ProjectId, UserId};

use crate::domain::entity::identity::Identity;
use crate::domain::value_object::UserRole;
use crate::error::{AuthError, AuthResult};

/// Which projects a caller may list
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProjectScope {
    /// Every project of the organization (managers)
    Organization(OrganizationId),
    /// Only the listed projects of the organization (employees)
    Assigned {
        organization_id: OrganizationId,
        project_ids: Vec<ProjectId>,
    },
}

impl ProjectScope {
    pub fn organization_id(&self) -> &OrganizationId {
        match self {
            ProjectScope::Organization(organization_id) => organization_id,
            ProjectScope::Assigned {
                organization_id, ..
            } => organization_id,
        }
    }

    /// Whether a project owned by `owner` with id `project_id` is in scope
    pub fn contains(&self, project_id: &ProjectId, owner: &OrganizationId) -> bool {
        match self {
            ProjectScope::Organization(organization_id) => organization_id == owner,
            ProjectScope::Assigned {
                organization_id,
                project_ids,
            } => organization_id == owner && project_ids.contains(project_id),
        }
    }
}

/// Tenant filter derived from the resolved identity
#[derive(Debug, Clone)]
pub struct TenantScope {
    identity: Identity,
}

impl TenantScope {
    pub fn new(identity: Identity) -> Self {
        Self { identity }
    }

    pub fn identity(&self) -> &Identity {
        &self.identity
    }

    pub fn user_id(&self) -> &UserId {
        &self.identity.user_id
    }

    pub fn organization_id(&self) -> &OrganizationId {
        &self.identity.organization_id
    }

    pub fn project_scope(&self) -> ProjectScope {
        match self.identity.role {
            UserRole::Manager => ProjectScope::Organization(self.identity.organization_id),
            UserRole::Employee => ProjectScope::Assigned {
                organization_id: self.identity.organization_id,
                project_ids: self.identity.projects.clone(),
            },
        }
    }

    /// Reject access to a record owned by another organization
    pub fn ensure_same_organization(&self, owner: &OrganizationId) -> AuthResult<()> {
        if owner == &self.identity.organization_id {
            Ok(())
        } else {
            tracing::warn!(
                user_id = %self.identity.user_id,
                organization_id = %self.identity.organization_id,
                target_organization_id = %owner,
                "Cross-tenant access attempt"
            );
            Err(AuthError::Forbidden)
        }
    }

    /// Reject access to a project outside the caller's project scope
    pub fn ensure_project_visible(
        &self,
        project_id: &ProjectId,
        owner: &OrganizationId,
    ) -> AuthResult<()> {
        self.ensure_same_organization(owner)?;

        if self.project_scope().contains(project_id, owner) {
            Ok(())
        } else {
            tracing::info!(
                user_id = %self.identity.user_id,
                project_id = %project_id,
                "Project not assigned to caller"
            );
            Err(AuthError::Forbidden)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::value_object::Email;

    fn identity(role: UserRole, projects: Vec<ProjectId>) -> Identity {
        Identity {
            user_id: UserId::new(),
            name: "ana".to_string(),
            email: Email::new("ana@acme.io").unwrap(),
            role,
            organization_id: OrganizationId::new(),
            projects,
        }
    }

    #[test]
    fn test_manager_sees_whole_organization() {
        let scope = TenantScope::new(identity(UserRole::Manager, vec![]));
        let org = *scope.organization_id();

        assert_eq!(scope.project_scope(), ProjectScope::Organization(org));
        assert!(scope.ensure_project_visible(&ProjectId::new(), &org).is_ok());
    }

    #[test]
    fn test_employee_sees_assigned_only() {
        let p1 = ProjectId::new();
        let p2 = ProjectId::new();
        let scope = TenantScope::new(identity(UserRole::Employee, vec![p1]));
        let org = *scope.organization_id();

        assert!(scope.ensure_project_visible(&p1, &org).is_ok());
        assert!(matches!(
            scope.ensure_project_visible(&p2, &org),
            Err(AuthError::Forbidden)
        ));
    }

    #[test]
    fn test_cross_tenant_is_forbidden() {
        let scope = TenantScope::new(identity(UserRole::Manager, vec![]));
        let other = OrganizationId::new();

        assert!(matches!(
            scope.ensure_same_organization(&other),
            Err(AuthError::Forbidden)
        ));
        assert!(!scope.project_scope().contains(&ProjectId::new(), &other));
    }
}
