//! API DTOs (Data Transfer Objects)

use auth::presentation::dto::UserView;
use chrono::{DateTime, Utc};
use kernel::id::{OrganizationId, ProjectId, UserId};
use serde::{Deserialize, Serialize};

use crate::domain::entity::project::Project;

// ============================================================================
// Projects
// ============================================================================

/// Create / update project request
///
/// For updates, absent fields are left unchanged.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ProjectRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    /// Employee ids forming the roster
    pub employees: Option<Vec<UserId>>,
}

/// Project as returned to clients
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectView {
    pub id: ProjectId,
    pub title: String,
    pub description: String,
    pub organization: OrganizationId,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<&Project> for ProjectView {
    fn from(project: &Project) -> Self {
        Self {
            id: project.project_id,
            title: project.title.clone(),
            description: project.description.clone(),
            organization: project.organization_id,
            created_at: project.created_at,
            updated_at: project.updated_at,
        }
    }
}

/// GET /project/all
#[derive(Debug, Clone, Serialize)]
pub struct ProjectListResponse {
    pub success: bool,
    pub projects: Vec<ProjectView>,
}

/// POST /project
#[derive(Debug, Clone, Serialize)]
pub struct ProjectCreatedResponse {
    pub success: bool,
    pub data: ProjectView,
}

/// GET /project/{id}
#[derive(Debug, Clone, Serialize)]
pub struct ProjectDetailResponse {
    pub success: bool,
    pub project: ProjectView,
    pub employees: Vec<UserView>,
}

// ============================================================================
// Users
// ============================================================================

/// Create employee request
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct CreateEmployeeRequest {
    /// Display name, defaults to the email local part
    pub name: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
}

/// GET /user/all
#[derive(Debug, Clone, Serialize)]
pub struct EmployeeListResponse {
    pub success: bool,
    pub employees: Vec<UserView>,
}

/// GET /user/manager, GET /user/{id}, POST /user
#[derive(Debug, Clone, Serialize)]
pub struct EmployeeResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    pub employee: UserView,
}
