//! Domain Layer
//!
//! Project entity and the project store contract.

pub mod entity;
pub mod repository;

// Re-exports
pub use entity::Project;
pub use repository::ProjectRepository;
