pub mod identity;
pub mod organization;
pub mod user;

pub use identity::Identity;
pub use organization::Organization;
pub use user::User;
