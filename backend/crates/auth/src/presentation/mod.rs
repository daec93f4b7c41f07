//! Presentation Layer
//!
//! HTTP handlers, DTOs, extractors, router, and middleware.

pub mod dto;
pub mod extract;
pub mod handlers;
pub mod middleware;
pub mod router;

pub use extract::JsonBody;
pub use handlers::AuthAppState;
pub use middleware::{AuthMiddlewareState, require_auth, require_roles};
pub use router::auth_router_generic;
