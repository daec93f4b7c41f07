//! Organization Member Queries
//!
//! Employee listing, the organization's manager, and a single member by id.

use std::sync::Arc;

use auth::application::tenant_scope::TenantScope;
use auth::domain::entity::user::User;
use auth::domain::repository::UserRepository;
use auth::domain::value_object::UserRole;
use kernel::id::UserId;

use crate::error::{WorkforceError, WorkforceResult};

/// Member queries scoped to the caller's organization
pub struct OrganizationMembersUseCase<U>
where
    U: UserRepository,
{
    user_repo: Arc<U>,
}

impl<U> OrganizationMembersUseCase<U>
where
    U: UserRepository,
{
    pub fn new(user_repo: Arc<U>) -> Self {
        Self { user_repo }
    }

    /// Every employee of the organization
    pub async fn employees(&self, scope: &TenantScope) -> WorkforceResult<Vec<User>> {
        let employees = self
            .user_repo
            .find_by_organization(scope.organization_id(), Some(UserRole::Employee))
            .await?;
        Ok(employees)
    }

    /// The organization's manager
    pub async fn manager(&self, scope: &TenantScope) -> WorkforceResult<User> {
        self.user_repo
            .find_by_organization(scope.organization_id(), Some(UserRole::Manager))
            .await?
            .into_iter()
            .next()
            .ok_or(WorkforceError::UserNotFound)
    }

    /// A member of the organization by id
    pub async fn member(&self, scope: &TenantScope, user_id: &UserId) -> WorkforceResult<User> {
        let user = self
            .user_repo
            .find_by_id(user_id)
            .await?
            .ok_or(WorkforceError::UserNotFound)?;

        scope.ensure_same_organization(&user.organization_id)?;

        Ok(user)
    }
}
