//! Sign In Use Case
//!
//! Verifies email and password and issues a session token.

use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::application::sign_up::non_blank;
use crate::application::token::{IssuedToken, TokenCodec};
use crate::domain::entity::user::User;
use crate::domain::repository::UserRepository;
use crate::domain::value_object::{Email, RawPassword};
use crate::error::{AuthError, AuthResult};

const REQUIRED_FIELDS: &str = "Email & password are required";

/// Sign in input
pub struct SignInInput {
    pub email: Option<String>,
    pub password: Option<String>,
}

/// Sign in output
#[derive(Debug)]
pub struct SignInOutput {
    pub user: User,
    pub token: IssuedToken,
}

/// Sign in use case
pub struct SignInUseCase<U>
where
    U: UserRepository,
{
    user_repo: Arc<U>,
    config: Arc<AuthConfig>,
}

impl<U> SignInUseCase<U>
where
    U: UserRepository,
{
    pub fn new(user_repo: Arc<U>, config: Arc<AuthConfig>) -> Self {
        Self { user_repo, config }
    }

    pub async fn execute(&self, input: SignInInput) -> AuthResult<SignInOutput> {
        let (Some(email), Some(password)) = (non_blank(input.email), non_blank(input.password))
        else {
            return Err(AuthError::Validation(REQUIRED_FIELDS.into()));
        };

        // A malformed email cannot be registered
        let email = Email::new(email).map_err(|_| AuthError::EmailNotRegistered)?;

        let user = self
            .user_repo
            .find_by_email(&email)
            .await?
            .ok_or(AuthError::EmailNotRegistered)?;

        let raw_password = RawPassword::new(password).map_err(|_| AuthError::PasswordMismatch)?;
        if !user
            .password_hash
            .verify(&raw_password, self.config.pepper())
        {
            return Err(AuthError::PasswordMismatch);
        }

        let token = TokenCodec::from_config(&self.config).issue(&user.user_id)?;

        tracing::info!(user_id = %user.user_id, "User signed in");

        Ok(SignInOutput { user, token })
    }
}
