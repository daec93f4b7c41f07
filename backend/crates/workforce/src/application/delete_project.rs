//! Delete Project Use Case

use std::sync::Arc;

use auth::application::tenant_scope::TenantScope;
use kernel::id::ProjectId;

use crate::domain::repository::ProjectRepository;
use crate::error::{WorkforceError, WorkforceResult};

/// Delete project use case
pub struct DeleteProjectUseCase<P>
where
    P: ProjectRepository,
{
    project_repo: Arc<P>,
}

impl<P> DeleteProjectUseCase<P>
where
    P: ProjectRepository,
{
    pub fn new(project_repo: Arc<P>) -> Self {
        Self { project_repo }
    }

    pub async fn execute(&self, scope: &TenantScope, project_id: &ProjectId) -> WorkforceResult<()> {
        let project = self
            .project_repo
            .find_project(project_id)
            .await?
            .ok_or(WorkforceError::ProjectNotFound)?;

        scope.ensure_same_organization(&project.organization_id)?;

        self.project_repo.delete_project(project_id).await?;

        tracing::info!(project_id = %project_id, "Project deleted");

        Ok(())
    }
}
