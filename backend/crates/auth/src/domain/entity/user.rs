//! User Entity
//!
//! A person who can sign in, always bound to exactly one organization.

use chrono::{DateTime, Utc};
use kernel::id::{OrganizationId, ProjectId, UserId};

use crate::domain::value_object::{Email, UserPassword, UserRole};

/// User entity
#[derive(Debug, Clone)]
pub struct User {
    pub user_id: UserId,
    /// Display name
    pub name: String,
    /// Sign-in email (unique across all organizations)
    pub email: Email,
    /// Argon2id digest, never the clear text
    pub password_hash: UserPassword,
    pub user_role: UserRole,
    pub organization_id: OrganizationId,
    /// Projects this user is assigned to
    ///
    /// Mirrors the project rosters; both sides are written together by the
    /// project store.
    pub projects: Vec<ProjectId>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    fn new(
        name: String,
        email: Email,
        password_hash: UserPassword,
        user_role: UserRole,
        organization_id: OrganizationId,
    ) -> Self {
        let now = Utc::now();

        Self {
            user_id: UserId::new(),
            name,
            email,
            password_hash,
            user_role,
            organization_id,
            projects: Vec::new(),
            created_at: now,
            updated_at: now,
        }
    }

    /// The founding manager of a new organization
    ///
    /// The display name defaults to the local part of the email.
    pub fn new_manager(
        email: Email,
        password_hash: UserPassword,
        organization_id: OrganizationId,
    ) -> Self {
        let name = email.local_part().to_string();
        Self::new(
            name,
            email,
            password_hash,
            UserRole::Manager,
            organization_id,
        )
    }

    /// An employee added to an existing organization by its manager
    pub fn new_employee(
        name: Option<String>,
        email: Email,
        password_hash: UserPassword,
        organization_id: OrganizationId,
    ) -> Self {
        let name = name
            .map(|n| n.trim().to_string())
            .filter(|n| !n.is_empty())
            .unwrap_or_else(|| email.local_part().to_string());
        Self::new(
            name,
            email,
            password_hash,
            UserRole::Employee,
            organization_id,
        )
    }

    pub fn is_manager(&self) -> bool {
        self.user_role.is_manager()
    }

    pub fn is_assigned_to(&self, project_id: &ProjectId) -> bool {
        self.projects.contains(project_id)
    }

    /// Add a project to the user's assignments (idempotent)
    pub fn assign_project(&mut self, project_id: ProjectId) {
        if !self.projects.contains(&project_id) {
            self.projects.push(project_id);
            self.updated_at = Utc::now();
        }
    }

    /// Remove a project from the user's assignments
    pub fn unassign_project(&mut self, project_id: &ProjectId) {
        let before = self.projects.len();
        self.projects.retain(|p| p != project_id);
        if self.projects.len() != before {
            self.updated_at = Utc::now();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::value_object::RawPassword;

    fn digest() -> UserPassword {
        let raw = RawPassword::new("pw".to_string()).unwrap();
        UserPassword::from_raw(&raw, None).unwrap()
    }

    #[test]
    fn test_manager_name_from_email() {
        let org = OrganizationId::new();
        let user = User::new_manager(Email::new("ana@acme.io").unwrap(), digest(), org);

        assert_eq!(user.name, "ana");
        assert!(user.is_manager());
        assert_eq!(user.organization_id, org);
        assert!(user.projects.is_empty());
    }

    #[test]
    fn test_employee_name_fallback() {
        let org = OrganizationId::new();
        let named = User::new_employee(
            Some(" Bo ".to_string()),
            Email::new("bo@acme.io").unwrap(),
            digest(),
            org,
        );
        assert_eq!(named.name, "Bo");
        assert_eq!(named.user_role, UserRole::Employee);

        let unnamed = User::new_employee(
            Some(String::new()),
            Email::new("cy@acme.io").unwrap(),
            digest(),
            org,
        );
        assert_eq!(unnamed.name, "cy");
    }

    #[test]
    fn test_assignments_are_a_set() {
        let mut user = User::new_employee(
            None,
            Email::new("bo@acme.io").unwrap(),
            digest(),
            OrganizationId::new(),
        );
        let p1 = ProjectId::new();

        user.assign_project(p1);
        user.assign_project(p1);
        assert_eq!(user.projects, vec![p1]);
        assert!(user.is_assigned_to(&p1));

        user.unassign_project(&p1);
        assert!(!user.is_assigned_to(&p1));
    }
}
