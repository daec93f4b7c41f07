//! Roster resolution
//!
//! Turns client-supplied employee ids into a roster that is safe to store.

use auth::application::tenant_scope::TenantScope;
use auth::domain::repository::UserRepository;
use kernel::id::UserId;

use crate::error::{WorkforceError, WorkforceResult};

/// Validate and de-duplicate the employee ids of a roster
///
/// Every id must name an employee of the caller's organization. Unknown ids
/// are rejected the same way as foreign ones; the response never reveals
/// whether an id exists in another tenant.
pub(crate) async fn resolve_roster<U>(
    users: &U,
    scope: &TenantScope,
    ids: Vec<UserId>,
) -> WorkforceResult<Vec<UserId>>
where
    U: UserRepository,
{
    let mut roster: Vec<UserId> = Vec::with_capacity(ids.len());

    for id in ids {
        if roster.contains(&id) {
            continue;
        }

        let Some(user) = users.find_by_id(&id).await? else {
            tracing::warn!(user_id = %scope.user_id(), employee_id = %id, "Unknown roster entry");
            return Err(WorkforceError::forbidden());
        };

        scope.ensure_same_organization(&user.organization_id)?;

        if user.is_manager() {
            tracing::info!(employee_id = %id, "Manager cannot be put on a roster");
            return Err(WorkforceError::forbidden());
        }

        roster.push(id);
    }

    Ok(roster)
}
