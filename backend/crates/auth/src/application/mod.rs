//! Application Layer
//!
//! Use cases and application services.

pub mod access;
pub mod authenticate;
pub mod config;
pub mod sign_in;
pub mod sign_up;
pub mod tenant_scope;
pub mod token;

// Re-exports
pub use access::{RoleSet, authorize};
pub use authenticate::{AuthenticateUseCase, extract_token};
pub use config::AuthConfig;
pub use sign_in::{SignInInput, SignInOutput, SignInUseCase};
pub use sign_up::{SignUpInput, SignUpOutput, SignUpUseCase};
pub use tenant_scope::{ProjectScope, TenantScope};
pub use token::{IssuedToken, TokenCodec, TokenError};
