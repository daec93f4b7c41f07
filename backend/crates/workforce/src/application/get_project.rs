//! Get Project Use Case

use std::sync::Arc;

use auth::application::tenant_scope::TenantScope;
use auth::domain::entity::user::User;
use auth::domain::repository::UserRepository;
use kernel::id::ProjectId;

use crate::domain::entity::project::Project;
use crate::domain::repository::ProjectRepository;
use crate::error::{WorkforceError, WorkforceResult};

/// Get project output
#[derive(Debug)]
pub struct GetProjectOutput {
    pub project: Project,
    /// Users assigned to the project
    pub employees: Vec<User>,
}

/// Get project use case
pub struct GetProjectUseCase<U, P>
where
    U: UserRepository,
    P: ProjectRepository,
{
    user_repo: Arc<U>,
    project_repo: Arc<P>,
}

impl<U, P> GetProjectUseCase<U, P>
where
    U: UserRepository,
    P: ProjectRepository,
{
    pub fn new(user_repo: Arc<U>, project_repo: Arc<P>) -> Self {
        Self {
            user_repo,
            project_repo,
        }
    }

    pub async fn execute(
        &self,
        scope: &TenantScope,
        project_id: &ProjectId,
    ) -> WorkforceResult<GetProjectOutput> {
        let project = self
            .project_repo
            .find_project(project_id)
            .await?
            .ok_or(WorkforceError::ProjectNotFound)?;

        scope.ensure_project_visible(&project.project_id, &project.organization_id)?;

        let employees = self.user_repo.find_by_project(&project.project_id).await?;

        Ok(GetProjectOutput { project, employees })
    }
}
