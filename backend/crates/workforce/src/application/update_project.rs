//! Update Project Use Case

use std::sync::Arc;

use auth::application::tenant_scope::TenantScope;
use auth::domain::repository::UserRepository;
use kernel::id::{ProjectId, UserId};

use crate::application::create_project::non_blank;
use crate::application::roster::resolve_roster;
use crate::domain::repository::ProjectRepository;
use crate::error::{WorkforceError, WorkforceResult};

/// Update project input
///
/// Absent fields are left untouched. A supplied `employees` list, even an
/// empty one, replaces the roster.
pub struct UpdateProjectInput {
    pub title: Option<String>,
    pub description: Option<String>,
    pub employees: Option<Vec<UserId>>,
}

/// Update project use case
pub struct UpdateProjectUseCase<U, P>
where
    U: UserRepository,
    P: ProjectRepository,
{
    user_repo: Arc<U>,
    project_repo: Arc<P>,
}

impl<U, P> UpdateProjectUseCase<U, P>
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
        input: UpdateProjectInput,
    ) -> WorkforceResult<()> {
        let title = supplied(input.title, "Title cannot be empty")?;
        let description = supplied(input.description, "Description cannot be empty")?;

        let mut project = self
            .project_repo
            .find_project(project_id)
            .await?
            .ok_or(WorkforceError::ProjectNotFound)?;

        scope.ensure_same_organization(&project.organization_id)?;

        if let Some(title) = &title {
            if self
                .project_repo
                .project_title_taken(&project.organization_id, title, Some(project_id))
                .await?
            {
                return Err(WorkforceError::ProjectTitleTaken);
            }
        }

        let roster = match input.employees {
            Some(ids) => Some(resolve_roster(self.user_repo.as_ref(), scope, ids).await?),
            None => None,
        };

        if project.apply_changes(title, description) {
            self.project_repo.update_project(&project).await?;
        }

        if let Some(roster) = &roster {
            self.project_repo.set_roster(project_id, roster).await?;
        }

        tracing::info!(
            project_id = %project_id,
            roster_replaced = roster.is_some(),
            "Project updated"
        );

        Ok(())
    }
}

/// A supplied field must not be blank
fn supplied(value: Option<String>, message: &str) -> WorkforceResult<Option<String>> {
    match value {
        None => Ok(None),
        Some(v) => non_blank(Some(v))
            .map(Some)
            .ok_or_else(|| WorkforceError::Validation(message.to_string())),
    }
}
