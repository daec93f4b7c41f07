//! Repository Traits
//!
//! Interfaces for data persistence. Implementation is in infrastructure layer.

use kernel::id::{OrganizationId, ProjectId, UserId};

use crate::domain::entity::{organization::Organization, user::User};
use crate::domain::value_object::{Email, UserRole};
use crate::error::AuthResult;

/// User repository trait
///
/// Users are returned with their project assignments populated.
#[trait_variant::make(UserRepository: Send)]
pub trait LocalUserRepository {
    /// Find user by ID
    async fn find_by_id(&self, user_id: &UserId) -> AuthResult<Option<User>>;

    /// Find user by exact email
    async fn find_by_email(&self, email: &Email) -> AuthResult<Option<User>>;

    /// Create a new user
    ///
    /// Fails with `AuthError::EmailTaken` when the email is already stored.
    async fn create(&self, user: &User) -> AuthResult<()>;

    /// Delete a user and remove it from every project roster
    async fn delete(&self, user_id: &UserId) -> AuthResult<()>;

    /// Users of an organization, optionally restricted to one role
    async fn find_by_organization(
        &self,
        organization_id: &OrganizationId,
        role: Option<UserRole>,
    ) -> AuthResult<Vec<User>>;

    /// Users assigned to a project
    async fn find_by_project(&self, project_id: &ProjectId) -> AuthResult<Vec<User>>;
}

/// Organization repository trait
#[trait_variant::make(OrganizationRepository: Send)]
pub trait LocalOrganizationRepository {
    /// Check if an organization title is already in use
    async fn title_exists(&self, title: &str) -> AuthResult<bool>;

    /// Create an organization together with its manager
    ///
    /// Both records are written or neither is.
    async fn create_with_manager(
        &self,
        organization: &Organization,
        manager: &User,
    ) -> AuthResult<()>;
}
