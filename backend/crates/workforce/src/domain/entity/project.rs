//! Project Entity

use chrono::{DateTime, Utc};
use kernel::id::{OrganizationId, ProjectId};

/// Project entity
///
/// The roster (assigned employees) is not held here; it lives in the
/// assignment relation shared with `User::projects`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Project {
    pub project_id: ProjectId,
    pub organization_id: OrganizationId,
    /// Unique within the organization
    pub title: String,
    pub description: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Project {
    pub fn new(organization_id: OrganizationId, title: String, description: String) -> Self {
        let now = Utc::now();

        Self {
            project_id: ProjectId::new(),
            organization_id,
            title,
            description,
            created_at: now,
            updated_at: now,
        }
    }

    /// Apply the supplied field changes, returning whether anything changed
    pub fn apply_changes(&mut self, title: Option<String>, description: Option<String>) -> bool {
        let mut changed = false;

        if let Some(title) = title.filter(|t| *t != self.title) {
            self.title = title;
            changed = true;
        }
        if let Some(description) = description.filter(|d| *d != self.description) {
            self.description = description;
            changed = true;
        }
        if changed {
            self.updated_at = Utc::now();
        }

        changed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_apply_changes() {
        let mut project = Project::new(OrganizationId::new(), "P1".into(), "first".into());
        let created = project.updated_at;

        assert!(!project.apply_changes(Some("P1".into()), None));
        assert_eq!(project.updated_at, created);

        assert!(project.apply_changes(None, Some("second".into())));
        assert_eq!(project.title, "P1");
        assert_eq!(project.description, "second");
    }
}
