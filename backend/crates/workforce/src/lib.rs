//! Workforce Backend Module
//!
//! Projects, their rosters, and the employees of an organization.
//!
//! Clean Architecture structure:
//! - `domain/` - Project entity and the project store contract
//! - `application/` - Tenant-scoped use cases
//! - `infra/` - PostgreSQL and in-memory stores
//! - `presentation/` - HTTP handlers, DTOs, routers
//!
//! Users, identities and the role gate come from the `auth` crate; every
//! route here sits behind `require_auth` and a per-route role set.

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;


// Re-exports for convenience
pub use domain::entity::Project;
pub use error::{WorkforceError, WorkforceResult};
pub use infra::{InMemoryStore, PgWorkforceRepository};
pub use presentation::{WorkforceAppState, project_router, user_router};
