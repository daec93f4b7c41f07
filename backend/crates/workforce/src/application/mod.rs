//! Application Layer
//!
//! Project and employee use cases. Every use case takes the caller's
//! `TenantScope`; none of them reads a record without comparing its owner.

pub mod create_employee;
pub mod create_project;
pub mod delete_employee;
pub mod delete_project;
pub mod get_project;
pub mod list_projects;
pub mod organization_members;
mod roster;
pub mod update_project;

// Re-exports
pub use create_employee::{CreateEmployeeInput, CreateEmployeeUseCase};
pub use create_project::{CreateProjectInput, CreateProjectUseCase};
pub use delete_employee::DeleteEmployeeUseCase;
pub use delete_project::DeleteProjectUseCase;
pub use get_project::{GetProjectOutput, GetProjectUseCase};
pub use list_projects::ListProjectsUseCase;
pub use organization_members::OrganizationMembersUseCase;
pub use update_project::{UpdateProjectInput, UpdateProjectUseCase};
