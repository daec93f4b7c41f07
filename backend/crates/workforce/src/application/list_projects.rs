//! List Projects Use Case

use std::sync::Arc;

use auth::application::tenant_scope::TenantScope;

use crate::domain::entity::project::Project;
use crate::domain::repository::ProjectRepository;
use crate::error::WorkforceResult;

/// List projects use case
///
/// Managers get every project of their organization, employees only the
/// projects they are assigned to.
pub struct ListProjectsUseCase<P>
where
    P: ProjectRepository,
{
    project_repo: Arc<P>,
}

impl<P> ListProjectsUseCase<P>
where
    P: ProjectRepository,
{
    pub fn new(project_repo: Arc<P>) -> Self {
        Self { project_repo }
    }

    pub async fn execute(&self, scope: &TenantScope) -> WorkforceResult<Vec<Project>> {
        self.project_repo.list_projects(&scope.project_scope()).await
    }
}
