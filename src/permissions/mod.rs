//! Budget and team-management permission checks.
//!
//! Every function here is pure and total. Unknown or missing input resolves
//! to a denied permission.
//!
//! # Example
//!
//! ```rust
//! use tierwise::permissions::{can_add_team, Permission, Principal};
//! use tierwise::tiers::Tier;
//!
//! assert!(can_add_team(Tier::Member, Some("HR Manager")));
//!
//! let principal = Principal::new(7, "pm@example.com", "Pat", Tier::Member)
//!     .with_org_role("Project Manager");
//! assert!(principal.can(Permission::AddTeam));
//! assert!(!principal.can(Permission::ViewBudget));
//! ```

mod evaluate;
mod principal;

pub use evaluate::{can_add_team, can_manage_budget, can_view_budget, Permission, PermissionSet};
pub use principal::Principal;
