//! Create Employee Use Case
//!
//! A manager adds an employee to their own organization.

use std::sync::Arc;

use auth::AuthConfig;
use auth::application::tenant_scope::TenantScope;
use auth::domain::entity::user::User;
use auth::domain::repository::UserRepository;
use auth::domain::value_object::{Email, RawPassword, UserPassword};
use auth::error::AuthError;

use crate::application::create_project::non_blank;
use crate::error::{WorkforceError, WorkforceResult};

const REQUIRED_FIELDS: &str = "Email & password are required";

/// Create employee input
pub struct CreateEmployeeInput {
    pub name: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
}

/// Create employee use case
pub struct CreateEmployeeUseCase<U>
where
    U: UserRepository,
{
    user_repo: Arc<U>,
    config: Arc<AuthConfig>,
}

impl<U> CreateEmployeeUseCase<U>
where
    U: UserRepository,
{
    pub fn new(user_repo: Arc<U>, config: Arc<AuthConfig>) -> Self {
        Self { user_repo, config }
    }

    pub async fn execute(
        &self,
        scope: &TenantScope,
        input: CreateEmployeeInput,
    ) -> WorkforceResult<User> {
        // Passwords are not trimmed; only presence is checked here
        let password = input.password.filter(|p| !p.trim().is_empty());
        let (Some(email), Some(password)) = (non_blank(input.email), password) else {
            return Err(WorkforceError::Validation(REQUIRED_FIELDS.into()));
        };

        let email = Email::new(email)?;

        if self.user_repo.find_by_email(&email).await?.is_some() {
            return Err(AuthError::EmailTaken.into());
        }

        let raw_password = RawPassword::new(password)?;
        let password_hash = UserPassword::from_raw(&raw_password, self.config.pepper())?;

        let employee = User::new_employee(
            input.name,
            email,
            password_hash,
            *scope.organization_id(),
        );
        self.user_repo.create(&employee).await?;

        tracing::info!(
            user_id = %employee.user_id,
            organization_id = %employee.organization_id,
            created_by = %scope.user_id(),
            "Employee created"
        );

        Ok(employee)
    }
}
