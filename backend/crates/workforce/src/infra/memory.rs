//! In-Memory Store
//!
//! Implements every store contract of the portal (users, organizations,
//! projects) behind one `tokio::sync::RwLock`. Used by tests and local runs
//! without a database. Counts every store call so tests can assert that a
//! rejected request never reached the store.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};

use auth::application::tenant_scope::ProjectScope;
use auth::domain::entity::{organization::Organization, user::User};
use auth::domain::repository::{OrganizationRepository, UserRepository};
use auth::domain::value_object::{Email, UserRole};
use auth::error::{AuthError, AuthResult};
use kernel::id::{OrganizationId, ProjectId, UserId};
use tokio::sync::RwLock;

use crate::domain::entity::project::Project;
use crate::domain::repository::ProjectRepository;
use crate::error::{WorkforceError, WorkforceResult};

#[derive(Default)]
struct State {
    organizations: Vec<Organization>,
    users: Vec<User>,
    projects: Vec<Project>,
    rosters: HashMap<ProjectId, Vec<UserId>>,
}

impl State {
    fn user_mut(&mut self, user_id: &UserId) -> Option<&mut User> {
        self.users.iter_mut().find(|u| &u.user_id == user_id)
    }

    fn title_taken(
        &self,
        organization_id: &OrganizationId,
        title: &str,
        except: Option<&ProjectId>,
    ) -> bool {
        self.projects.iter().any(|p| {
            &p.organization_id == organization_id
                && p.title == title
                && Some(&p.project_id) != except
        })
    }

    /// Replace a roster and mirror the change into every affected user
    fn write_roster(&mut self, project_id: &ProjectId, roster: &[UserId]) {
        let previous = self.rosters.remove(project_id).unwrap_or_default();

        for user_id in previous.iter().filter(|id| !roster.contains(id)) {
            if let Some(user) = self.user_mut(user_id) {
                user.unassign_project(project_id);
            }
        }
        for user_id in roster {
            if let Some(user) = self.user_mut(user_id) {
                user.assign_project(*project_id);
            }
        }

        self.rosters.insert(*project_id, roster.to_vec());
    }
}

/// In-memory implementation of all store contracts
#[derive(Default)]
pub struct InMemoryStore {
    state: RwLock<State>,
    calls: AtomicUsize,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of store calls made so far
    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn hit(&self) {
        self.calls.fetch_add(1, Ordering::SeqCst);
    }
}

// ============================================================================
// User Repository Implementation
// ============================================================================

impl UserRepository for InMemoryStore {
    async fn find_by_id(&self, user_id: &UserId) -> AuthResult<Option<User>> {
        self.hit();
        let state = self.state.read().await;
        Ok(state.users.iter().find(|u| &u.user_id == user_id).cloned())
    }

    async fn find_by_email(&self, email: &Email) -> AuthResult<Option<User>> {
        self.hit();
        let state = self.state.read().await;
        Ok(state.users.iter().find(|u| &u.email == email).cloned())
    }

    async fn create(&self, user: &User) -> AuthResult<()> {
        self.hit();
        let mut state = self.state.write().await;
        if state.users.iter().any(|u| u.email == user.email) {
            return Err(AuthError::EmailTaken);
        }
        state.users.push(user.clone());
        Ok(())
    }

    async fn delete(&self, user_id: &UserId) -> AuthResult<()> {
        self.hit();
        let mut state = self.state.write().await;
        state.users.retain(|u| &u.user_id != user_id);
        for roster in state.rosters.values_mut() {
            roster.retain(|id| id != user_id);
        }
        Ok(())
    }

    async fn find_by_organization(
        &self,
        organization_id: &OrganizationId,
        role: Option<UserRole>,
    ) -> AuthResult<Vec<User>> {
        self.hit();
        let state = self.state.read().await;
        Ok(state
            .users
            .iter()
            .filter(|u| &u.organization_id == organization_id)
            .filter(|u| role.is_none_or(|r| u.user_role == r))
            .cloned()
            .collect())
    }

    async fn find_by_project(&self, project_id: &ProjectId) -> AuthResult<Vec<User>> {
        self.hit();
        let state = self.state.read().await;
        let Some(roster) = state.rosters.get(project_id) else {
            return Ok(Vec::new());
        };
        Ok(roster
            .iter()
            .filter_map(|id| state.users.iter().find(|u| &u.user_id == id))
            .cloned()
            .collect())
    }
}

// ============================================================================
// Organization Repository Implementation
// ============================================================================

impl OrganizationRepository for InMemoryStore {
    async fn title_exists(&self, title: &str) -> AuthResult<bool> {
        self.hit();
        let state = self.state.read().await;
        Ok(state.organizations.iter().any(|o| o.title == title))
    }

    async fn create_with_manager(
        &self,
        organization: &Organization,
        manager: &User,
    ) -> AuthResult<()> {
        self.hit();
        let mut state = self.state.write().await;
        if state.organizations.iter().any(|o| o.title == organization.title) {
            return Err(AuthError::OrganizationTaken);
        }
        if state.users.iter().any(|u| u.email == manager.email) {
            return Err(AuthError::EmailTaken);
        }
        state.organizations.push(organization.clone());
        state.users.push(manager.clone());
        Ok(())
    }
}

// ============================================================================
// Project Repository Implementation
// ============================================================================

impl ProjectRepository for InMemoryStore {
    async fn find_project(&self, project_id: &ProjectId) -> WorkforceResult<Option<Project>> {
        self.hit();
        let state = self.state.read().await;
        Ok(state
            .projects
            .iter()
            .find(|p| &p.project_id == project_id)
            .cloned())
    }

    async fn list_projects(&self, scope: &ProjectScope) -> WorkforceResult<Vec<Project>> {
        self.hit();
        let state = self.state.read().await;
        Ok(state
            .projects
            .iter()
            .filter(|p| scope.contains(&p.project_id, &p.organization_id))
            .cloned()
            .collect())
    }

    async fn project_title_taken(
        &self,
        organization_id: &OrganizationId,
        title: &str,
        except: Option<&ProjectId>,
    ) -> WorkforceResult<bool> {
        self.hit();
        let state = self.state.read().await;
        Ok(state.title_taken(organization_id, title, except))
    }

    async fn create_project(&self, project: &Project, roster: &[UserId]) -> WorkforceResult<()> {
        self.hit();
        let mut state = self.state.write().await;
        if state.title_taken(&project.organization_id, &project.title, None) {
            return Err(WorkforceError::ProjectTitleTaken);
        }
        state.projects.push(project.clone());
        state.write_roster(&project.project_id, roster);
        Ok(())
    }

    async fn update_project(&self, project: &Project) -> WorkforceResult<()> {
        self.hit();
        let mut state = self.state.write().await;
        if state.title_taken(
            &project.organization_id,
            &project.title,
            Some(&project.project_id),
        ) {
            return Err(WorkforceError::ProjectTitleTaken);
        }
        if let Some(stored) = state
            .projects
            .iter_mut()
            .find(|p| p.project_id == project.project_id)
        {
            *stored = project.clone();
        }
        Ok(())
    }

    async fn set_roster(&self, project_id: &ProjectId, roster: &[UserId]) -> WorkforceResult<()> {
        self.hit();
        let mut state = self.state.write().await;
        state.write_roster(project_id, roster);
        Ok(())
    }

    async fn delete_project(&self, project_id: &ProjectId) -> WorkforceResult<()> {
        self.hit();

        // Two separate steps: a failure in between leaves the project id
        // dangling in user project sets until the next roster write.
        {
            let mut state = self.state.write().await;
            state.projects.retain(|p| &p.project_id != project_id);
            state.rosters.remove(project_id);
        }

        let mut state = self.state.write().await;
        for user in state.users.iter_mut() {
            user.unassign_project(project_id);
        }

        Ok(())
    }
}
