use serde::{Deserialize, Serialize};

use super::{Permission, PermissionSet};
use crate::tiers::Tier;
use crate::AccessError;

/// The authenticated caller a permission check is made for.
///
/// Built per request from verified session data plus the org role looked up
/// in storage. Never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Principal {
    pub user_id: i64,
    pub email: String,
    pub name: String,
    pub tier: Tier,
    /// `None` for accounts that were never placed on the org chart.
    pub org_role_name: Option<String>,
}

impl Principal {
    pub fn new(user_id: i64, email: impl Into<String>, name: impl Into<String>, tier: Tier) -> Self {
        Self {
            user_id,
            email: email.into(),
            name: name.into(),
            tier,
            org_role_name: None,
        }
    }

    #[must_use]
    pub fn with_org_role(mut self, org_role_name: impl Into<String>) -> Self {
        self.org_role_name = Some(org_role_name.into());
        self
    }

    /// Evaluate all three permissions. Recomputed on every call.
    pub fn permissions(&self) -> PermissionSet {
        PermissionSet::evaluate(self.tier, self.org_role_name.as_deref())
    }

    pub fn can(&self, permission: Permission) -> bool {
        self.permissions().allows(permission)
    }

    /// Returns `Err(AccessError::Forbidden)` unless `permission` is granted.
    pub fn require(&self, permission: Permission) -> Result<(), AccessError> {
        if self.can(permission) {
            return Ok(());
        }

        log::warn!(
            target: "tierwise",
            "msg=\"permission denied\", user_id={}, tier=\"{}\", permission=\"{}\"",
            self.user_id,
            self.tier,
            permission.as_str()
        );
        Err(AccessError::Forbidden)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_owner_without_org_role_can_add_team() {
        let owner = Principal::new(1, "owner@example.com", "Owner", Tier::Owner);

        assert!(owner.can(Permission::AddTeam));
        assert!(owner.require(Permission::ManageBudget).is_ok());
    }

    #[test]
    fn test_member_hr_manager() {
        let hr = Principal::new(2, "hr@example.com", "HR", Tier::Member).with_org_role("HR Manager");

        assert!(hr.require(Permission::AddTeam).is_ok());
        assert_eq!(hr.require(Permission::ViewBudget), Err(AccessError::Forbidden));
    }

    #[test]
    fn test_org_role_does_not_elevate_budget_access() {
        // tier comes from the session; a CEO title alone grants nothing
        let member = Principal::new(3, "m@example.com", "M", Tier::Member).with_org_role("CEO");

        assert_eq!(member.permissions(), PermissionSet::default());
    }
}
