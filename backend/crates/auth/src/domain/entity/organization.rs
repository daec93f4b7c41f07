//! Organization Entity
//!
//! The tenant. Created together with its manager at sign-up.

use chrono::{DateTime, Utc};
use kernel::id::{OrganizationId, UserId};

/// Organization entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Organization {
    pub organization_id: OrganizationId,
    /// Unique across the system
    pub title: String,
    /// The single manager of this organization
    pub manager_id: UserId,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Organization {
    pub fn new(organization_id: OrganizationId, title: String, manager_id: UserId) -> Self {
        let now = Utc::now();

        Self {
            organization_id,
            title,
            manager_id,
            created_at: now,
            updated_at: now,
        }
    }
}
