//! HTTP Handlers
//!
//! Authentication and the role gate run as middleware before any handler;
//! handlers receive the caller as a [`TenantScope`].

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use std::sync::Arc;

use auth::AuthConfig;
use auth::application::tenant_scope::TenantScope;
use auth::domain::repository::UserRepository;
use auth::presentation::JsonBody;
use auth::presentation::dto::{MessageResponse, UserView};
use kernel::id::{ProjectId, UserId};

use crate::application::{
    CreateEmployeeInput, CreateEmployeeUseCase, CreateProjectInput, CreateProjectUseCase,
    DeleteEmployeeUseCase, DeleteProjectUseCase, GetProjectUseCase, ListProjectsUseCase,
    OrganizationMembersUseCase, UpdateProjectInput, UpdateProjectUseCase,
};
use crate::domain::repository::ProjectRepository;
use crate::error::{WorkforceError, WorkforceResult};
use crate::presentation::dto::{
    CreateEmployeeRequest, EmployeeListResponse, EmployeeResponse, ProjectCreatedResponse,
    ProjectDetailResponse, ProjectListResponse, ProjectRequest, ProjectView,
};

/// Shared state for workforce handlers
pub struct WorkforceAppState<U, P>
where
    U: UserRepository + Send + Sync + 'static,
    P: ProjectRepository + Send + Sync + 'static,
{
    pub users: Arc<U>,
    pub projects: Arc<P>,
    pub config: Arc<AuthConfig>,
}

impl<U, P> WorkforceAppState<U, P>
where
    U: UserRepository + Send + Sync + 'static,
    P: ProjectRepository + Send + Sync + 'static,
{
    pub fn new(users: Arc<U>, projects: Arc<P>, config: Arc<AuthConfig>) -> Self {
        Self {
            users,
            projects,
            config,
        }
    }
}

impl<U, P> Clone for WorkforceAppState<U, P>
where
    U: UserRepository + Send + Sync + 'static,
    P: ProjectRepository + Send + Sync + 'static,
{
    fn clone(&self) -> Self {
        Self {
            users: self.users.clone(),
            projects: self.projects.clone(),
            config: self.config.clone(),
        }
    }
}

// ============================================================================
// Projects
// ============================================================================

/// GET /api/project/all
pub async fn list_projects<U, P>(
    State(state): State<WorkforceAppState<U, P>>,
    scope: TenantScope,
) -> WorkforceResult<Json<ProjectListResponse>>
where
    U: UserRepository + Send + Sync + 'static,
    P: ProjectRepository + Send + Sync + 'static,
{
    let projects = ListProjectsUseCase::new(state.projects.clone())
        .execute(&scope)
        .await?;

    Ok(Json(ProjectListResponse {
        success: true,
        projects: projects.iter().map(ProjectView::from).collect(),
    }))
}

/// POST /api/project
pub async fn create_project<U, P>(
    State(state): State<WorkforceAppState<U, P>>,
    scope: TenantScope,
    JsonBody(req): JsonBody<ProjectRequest>,
) -> WorkforceResult<impl IntoResponse>
where
    U: UserRepository + Send + Sync + 'static,
    P: ProjectRepository + Send + Sync + 'static,
{
    let use_case = CreateProjectUseCase::new(state.users.clone(), state.projects.clone());

    let input = CreateProjectInput {
        title: req.title,
        description: req.description,
        employees: req.employees,
    };

    let project = use_case.execute(&scope, input).await?;

    Ok((
        StatusCode::CREATED,
        Json(ProjectCreatedResponse {
            success: true,
            data: ProjectView::from(&project),
        }),
    ))
}

/// GET /api/project/{id}
pub async fn get_project<U, P>(
    State(state): State<WorkforceAppState<U, P>>,
    scope: TenantScope,
    Path(id): Path<String>,
) -> WorkforceResult<Json<ProjectDetailResponse>>
where
    U: UserRepository + Send + Sync + 'static,
    P: ProjectRepository + Send + Sync + 'static,
{
    let project_id = parse_project_id(&id)?;

    let output = GetProjectUseCase::new(state.users.clone(), state.projects.clone())
        .execute(&scope, &project_id)
        .await?;

    Ok(Json(ProjectDetailResponse {
        success: true,
        project: ProjectView::from(&output.project),
        employees: output.employees.iter().map(UserView::from).collect(),
    }))
}

/// PUT /api/project/{id}
pub async fn update_project<U, P>(
    State(state): State<WorkforceAppState<U, P>>,
    scope: TenantScope,
    Path(id): Path<String>,
    JsonBody(req): JsonBody<ProjectRequest>,
) -> WorkforceResult<Json<MessageResponse>>
where
    U: UserRepository + Send + Sync + 'static,
    P: ProjectRepository + Send + Sync + 'static,
{
    let project_id = parse_project_id(&id)?;

    let input = UpdateProjectInput {
        title: req.title,
        description: req.description,
        employees: req.employees,
    };

    UpdateProjectUseCase::new(state.users.clone(), state.projects.clone())
        .execute(&scope, &project_id, input)
        .await?;

    Ok(Json(MessageResponse::new("Project updated successfully")))
}

/// DELETE /api/project/{id}
pub async fn delete_project<U, P>(
    State(state): State<WorkforceAppState<U, P>>,
    scope: TenantScope,
    Path(id): Path<String>,
) -> WorkforceResult<Json<MessageResponse>>
where
    U: UserRepository + Send + Sync + 'static,
    P: ProjectRepository + Send + Sync + 'static,
{
    let project_id = parse_project_id(&id)?;

    DeleteProjectUseCase::new(state.projects.clone())
        .execute(&scope, &project_id)
        .await?;

    Ok(Json(MessageResponse::new("Project deleted successfully")))
}

// ============================================================================
// Users
// ============================================================================

/// GET /api/user/all
pub async fn list_employees<U, P>(
    State(state): State<WorkforceAppState<U, P>>,
    scope: TenantScope,
) -> WorkforceResult<Json<EmployeeListResponse>>
where
    U: UserRepository + Send + Sync + 'static,
    P: ProjectRepository + Send + Sync + 'static,
{
    let employees = OrganizationMembersUseCase::new(state.users.clone())
        .employees(&scope)
        .await?;

    Ok(Json(EmployeeListResponse {
        success: true,
        employees: employees.iter().map(UserView::from).collect(),
    }))
}

/// GET /api/user/manager
pub async fn get_manager<U, P>(
    State(state): State<WorkforceAppState<U, P>>,
    scope: TenantScope,
) -> WorkforceResult<Json<EmployeeResponse>>
where
    U: UserRepository + Send + Sync + 'static,
    P: ProjectRepository + Send + Sync + 'static,
{
    let manager = OrganizationMembersUseCase::new(state.users.clone())
        .manager(&scope)
        .await?;

    Ok(Json(EmployeeResponse {
        success: true,
        message: None,
        employee: UserView::from(&manager),
    }))
}

/// GET /api/user/{id}
pub async fn get_employee<U, P>(
    State(state): State<WorkforceAppState<U, P>>,
    scope: TenantScope,
    Path(id): Path<String>,
) -> WorkforceResult<Json<EmployeeResponse>>
where
    U: UserRepository + Send + Sync + 'static,
    P: ProjectRepository + Send + Sync + 'static,
{
    let user_id = parse_user_id(&id)?;

    let user = OrganizationMembersUseCase::new(state.users.clone())
        .member(&scope, &user_id)
        .await?;

    Ok(Json(EmployeeResponse {
        success: true,
        message: None,
        employee: UserView::from(&user),
    }))
}

/// POST /api/user
pub async fn create_employee<U, P>(
    State(state): State<WorkforceAppState<U, P>>,
    scope: TenantScope,
    JsonBody(req): JsonBody<CreateEmployeeRequest>,
) -> WorkforceResult<impl IntoResponse>
where
    U: UserRepository + Send + Sync + 'static,
    P: ProjectRepository + Send + Sync + 'static,
{
    let use_case = CreateEmployeeUseCase::new(state.users.clone(), state.config.clone());

    let input = CreateEmployeeInput {
        name: req.name,
        email: req.email,
        password: req.password,
    };

    let employee = use_case.execute(&scope, input).await?;

    Ok((
        StatusCode::CREATED,
        Json(EmployeeResponse {
            success: true,
            message: Some("Employee created successfully".to_string()),
            employee: UserView::from(&employee),
        }),
    ))
}

/// DELETE /api/user/{id}
pub async fn delete_employee<U, P>(
    State(state): State<WorkforceAppState<U, P>>,
    scope: TenantScope,
    Path(id): Path<String>,
) -> WorkforceResult<Json<MessageResponse>>
where
    U: UserRepository + Send + Sync + 'static,
    P: ProjectRepository + Send + Sync + 'static,
{
    let user_id = parse_user_id(&id)?;

    DeleteEmployeeUseCase::new(state.users.clone())
        .execute(&scope, &user_id)
        .await?;

    Ok(Json(MessageResponse::new("Employee deleted successfully")))
}

// ============================================================================
// Helper Functions
// ============================================================================

/// An id that is not a UUID cannot name a stored record
fn parse_project_id(raw: &str) -> WorkforceResult<ProjectId> {
    raw.parse().map_err(|_| WorkforceError::ProjectNotFound)
}

fn parse_user_id(raw: &str) -> WorkforceResult<UserId> {
    raw.parse().map_err(|_| WorkforceError::UserNotFound)
}
