//! Delete Employee Use Case

use std::sync::Arc;

use auth::application::tenant_scope::TenantScope;
use auth::domain::repository::UserRepository;
use kernel::id::UserId;

use crate::error::{WorkforceError, WorkforceResult};

/// Delete employee use case
///
/// Removes the employee and pulls them from every project roster. The
/// organization's manager cannot be deleted.
pub struct DeleteEmployeeUseCase<U>
where
    U: UserRepository,
{
    user_repo: Arc<U>,
}

impl<U> DeleteEmployeeUseCase<U>
where
    U: UserRepository,
{
    pub fn new(user_repo: Arc<U>) -> Self {
        Self { user_repo }
    }

    pub async fn execute(&self, scope: &TenantScope, user_id: &UserId) -> WorkforceResult<()> {
        let user = self
            .user_repo
            .find_by_id(user_id)
            .await?
            .ok_or(WorkforceError::UserNotFound)?;

        scope.ensure_same_organization(&user.organization_id)?;

        if user.is_manager() {
            tracing::warn!(user_id = %user_id, "Attempt to delete the organization manager");
            return Err(WorkforceError::forbidden());
        }

        self.user_repo.delete(user_id).await?;

        tracing::info!(
            user_id = %user_id,
            deleted_by = %scope.user_id(),
            "Employee deleted"
        );

        Ok(())
    }
}
