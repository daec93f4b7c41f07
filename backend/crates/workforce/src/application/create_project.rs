//! Create Project Use Case

use std::sync::Arc;

use auth::application::tenant_scope::TenantScope;
use auth::domain::repository::UserRepository;
use kernel::id::UserId;

use crate::application::roster::resolve_roster;
use crate::domain::entity::project::Project;
use crate::domain::repository::ProjectRepository;
use crate::error::{WorkforceError, WorkforceResult};

pub(crate) const REQUIRED_FIELDS: &str = "Title and description are required";

/// Create project input
pub struct CreateProjectInput {
    pub title: Option<String>,
    pub description: Option<String>,
    pub employees: Option<Vec<UserId>>,
}

/// Create project use case
pub struct CreateProjectUseCase<U, P>
where
    U: UserRepository,
    P: ProjectRepository,
{
    user_repo: Arc<U>,
    project_repo: Arc<P>,
}

impl<U, P> CreateProjectUseCase<U, P>
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
        input: CreateProjectInput,
    ) -> WorkforceResult<Project> {
        // Nothing touches the store before the input is known to be complete
        let (Some(title), Some(description)) = (
            non_blank(input.title),
            non_blank(input.description),
        ) else {
            return Err(WorkforceError::Validation(REQUIRED_FIELDS.into()));
        };

        let organization_id = *scope.organization_id();

        if self
            .project_repo
            .project_title_taken(&organization_id, &title, None)
            .await?
        {
            return Err(WorkforceError::ProjectTitleTaken);
        }

        let roster = resolve_roster(
            self.user_repo.as_ref(),
            scope,
            input.employees.unwrap_or_default(),
        )
        .await?;

        let project = Project::new(organization_id, title, description);
        self.project_repo.create_project(&project, &roster).await?;

        tracing::info!(
            project_id = %project.project_id,
            organization_id = %organization_id,
            roster_size = roster.len(),
            "Project created"
        );

        Ok(project)
    }
}

/// Trimmed value, or `None` when absent or blank
pub(crate) fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
