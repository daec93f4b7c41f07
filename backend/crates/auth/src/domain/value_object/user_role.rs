use serde::{Deserialize, Serialize};
use std::fmt;

/// Role of a user inside its organization
///
/// Exactly one manager per organization, created at sign-up.
/// Every user added later is an employee.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[repr(i16)]
pub enum UserRole {
    Manager = 0,
    Employee = 1,
}

impl UserRole {
    #[inline]
    pub const fn id(&self) -> i16 {
        *self as i16
    }

    #[inline]
    pub const fn code(&self) -> &'static str {
        use UserRole::*;
        match self {
            Manager => "manager",
            Employee => "employee",
        }
    }

    #[inline]
    pub const fn is_manager(&self) -> bool {
        matches!(self, UserRole::Manager)
    }

    #[inline]
    pub fn from_id(id: i16) -> Option<Self> {
        use UserRole::*;
        match id {
            0 => Some(Manager),
            1 => Some(Employee),
            _ => {
                tracing::error!("Invalid UserRole id: {}", id);
                None
            }
        }
    }

    #[inline]
    pub fn from_code(code: &str) -> Option<Self> {
        use UserRole::*;
        match code {
            "manager" => Some(Manager),
            "employee" => Some(Employee),
            _ => None,
        }
    }
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_role_from_id() {
        assert_eq!(UserRole::from_id(0), Some(UserRole::Manager));
        assert_eq!(UserRole::from_id(1), Some(UserRole::Employee));
        assert_eq!(UserRole::from_id(7), None);
    }

    #[test]
    fn test_user_role_from_code() {
        assert_eq!(UserRole::from_code("manager"), Some(UserRole::Manager));
        assert_eq!(UserRole::from_code("employee"), Some(UserRole::Employee));
        assert_eq!(UserRole::from_code("admin"), None);
    }

    #[test]
    fn test_user_role_serde() {
        assert_eq!(
            serde_json::to_string(&UserRole::Employee).unwrap(),
            "\"employee\""
        );
        let role: UserRole = serde_json::from_str("\"manager\"").unwrap();
        assert!(role.is_manager());
    }
}
