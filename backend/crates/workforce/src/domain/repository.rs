//! Repository Traits
//!
//! Interfaces for data persistence. Implementation is in infrastructure layer.

use auth::application::tenant_scope::ProjectScope;
use kernel::id::{OrganizationId, ProjectId, UserId};

use crate::domain::entity::project::Project;
use crate::error::WorkforceResult;

/// Project repository trait
///
/// The roster of a project and the `projects` set of each user are two views
/// of one assignment relation. Only [`set_roster`](LocalProjectRepository::set_roster),
/// [`create_project`](LocalProjectRepository::create_project) and
/// [`delete_project`](LocalProjectRepository::delete_project) change it, and
/// each of them updates both views.
#[trait_variant::make(ProjectRepository: Send)]
pub trait LocalProjectRepository {
    /// Find project by ID (unscoped; callers compare the owner)
    async fn find_project(&self, project_id: &ProjectId) -> WorkforceResult<Option<Project>>;

    /// Projects visible under a scope, oldest first
    async fn list_projects(&self, scope: &ProjectScope) -> WorkforceResult<Vec<Project>>;

    /// Check if a title is used by another project of the organization
    async fn project_title_taken(
        &self,
        organization_id: &OrganizationId,
        title: &str,
        except: Option<&ProjectId>,
    ) -> WorkforceResult<bool>;

    /// Create a project with its initial roster
    ///
    /// Fails with `WorkforceError::ProjectTitleTaken` on a title collision
    /// within the organization.
    async fn create_project(&self, project: &Project, roster: &[UserId]) -> WorkforceResult<()>;

    /// Persist title and description changes
    async fn update_project(&self, project: &Project) -> WorkforceResult<()>;

    /// Replace the roster of a project
    async fn set_roster(&self, project_id: &ProjectId, roster: &[UserId]) -> WorkforceResult<()>;

    /// Delete a project and pull it from every assigned user's project set
    async fn delete_project(&self, project_id: &ProjectId) -> WorkforceResult<()>;
}
