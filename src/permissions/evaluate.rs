use serde::{Deserialize, Serialize};

use crate::tiers::Tier;

/// Lower-cased org roles that may add team members regardless of tier.
const TEAM_MANAGER_ROLES: &[&str] = &["hr manager", "project manager"];

/// Whether `tier` may see budgets and expenses.
pub fn can_view_budget(tier: Tier) -> bool {
    tier.is_privileged()
}

/// Whether `tier` may create or change budgets and expenses.
///
/// Currently the same rule as [`can_view_budget`]; there is no view-only
/// budget tier.
pub fn can_manage_budget(tier: Tier) -> bool {
    tier.is_privileged()
}

/// Whether a principal may add team members.
///
/// Owners and admins always may. Members may if their org role is
/// HR Manager or Project Manager (any case). A missing org role disables
/// that carve-out.
pub fn can_add_team(tier: Tier, org_role_name: Option<&str>) -> bool {
    if tier.is_privileged() {
        return true;
    }

    org_role_name.is_some_and(|name| TEAM_MANAGER_ROLES.contains(&name.to_lowercase().as_str()))
}

/// A single permission question, for callers that gate on one at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Permission {
    ViewBudget,
    ManageBudget,
    AddTeam,
}

impl Permission {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ViewBudget => "view_budget",
            Self::ManageBudget => "manage_budget",
            Self::AddTeam => "add_team",
        }
    }
}

/// The three permission answers for one principal.
///
/// Always derived, never stored: tiers can change between requests.
/// Serializes as `{"canManageBudget":..,"canViewBudget":..,"canAddTeam":..}`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PermissionSet {
    pub can_manage_budget: bool,
    pub can_view_budget: bool,
    pub can_add_team: bool,
}

impl PermissionSet {
    pub fn evaluate(tier: Tier, org_role_name: Option<&str>) -> Self {
        Self {
            can_manage_budget: can_manage_budget(tier),
            can_view_budget: can_view_budget(tier),
            can_add_team: can_add_team(tier, org_role_name),
        }
    }

    pub fn allows(&self, permission: Permission) -> bool {
        match permission {
            Permission::ViewBudget => self.can_view_budget,
            Permission::ManageBudget => self.can_manage_budget,
            Permission::AddTeam => self.can_add_team,
        }
    }
}
