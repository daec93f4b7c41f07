//! Sign Up Use Case
//!
//! Creates a new organization together with its manager and signs the
//! manager in.

use std::sync::Arc;

use kernel::id::OrganizationId;

use crate::application::config::AuthConfig;
use crate::application::token::{IssuedToken, TokenCodec};
use crate::domain::entity::{organization::Organization, user::User};
use crate::domain::repository::{OrganizationRepository, UserRepository};
use crate::domain::value_object::{Email, RawPassword, UserPassword};
use crate::error::{AuthError, AuthResult};

const REQUIRED_FIELDS: &str = "Organization Name, email and password are required";

/// Sign up input
pub struct SignUpInput {
    /// Organization title
    pub name: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
}

/// Sign up output
#[derive(Debug)]
pub struct SignUpOutput {
    pub user: User,
    pub organization: Organization,
    pub token: IssuedToken,
}

/// Sign up use case
pub struct SignUpUseCase<R>
where
    R: UserRepository + OrganizationRepository,
{
    repo: Arc<R>,
    config: Arc<AuthConfig>,
}

impl<R> SignUpUseCase<R>
where
    R: UserRepository + OrganizationRepository,
{
    pub fn new(repo: Arc<R>, config: Arc<AuthConfig>) -> Self {
        Self { repo, config }
    }

    pub async fn execute(&self, input: SignUpInput) -> AuthResult<SignUpOutput> {
        let (Some(title), Some(email), Some(password)) = (
            non_blank(input.name),
            non_blank(input.email),
            non_blank(input.password),
        ) else {
            return Err(AuthError::Validation(REQUIRED_FIELDS.into()));
        };

        let email = Email::new(email)?;

        if self.repo.find_by_email(&email).await?.is_some() {
            return Err(AuthError::EmailTaken);
        }

        let title = title.trim().to_string();
        if self.repo.title_exists(&title).await? {
            return Err(AuthError::OrganizationTaken);
        }

        let raw_password = RawPassword::new(password)?;
        let password_hash = UserPassword::from_raw(&raw_password, self.config.pepper())?;

        let organization_id = OrganizationId::new();
        let manager = User::new_manager(email, password_hash, organization_id);
        let organization = Organization::new(organization_id, title, manager.user_id);

        // Store uniqueness still decides if a concurrent sign-up won the race
        self.repo
            .create_with_manager(&organization, &manager)
            .await?;

        let token = TokenCodec::from_config(&self.config).issue(&manager.user_id)?;

        tracing::info!(
            user_id = %manager.user_id,
            organization_id = %organization.organization_id,
            "Organization signed up"
        );

        Ok(SignUpOutput {
            user: manager,
            organization,
            token,
        })
    }
}

pub(crate) fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}
