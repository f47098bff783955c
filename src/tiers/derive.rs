//! Mapping from organizational role names and signup tokens to tiers.
//!
//! Role names stay free-text strings. This file is the only place that
//! knows which names elevate a tier: add new admin-equivalent titles to
//! [`ADMIN_EQUIVALENT_ROLES`].

use super::Tier;

/// Lower-cased role name that maps to [`Tier::Owner`].
const OWNER_ROLE: &str = "ceo";

/// Lower-cased role names that map to [`Tier::Admin`].
const ADMIN_EQUIVALENT_ROLES: &[&str] = &[
    "cto",
    "coo",
    "cmo",
    "product manager",
    "project manager",
    "hr manager",
    "sales - account manager",
];

/// Derive a tier from an organizational role name.
///
/// Comparison is case-insensitive. Unknown and empty names yield
/// [`Tier::Member`].
///
/// ```rust
/// use tierwise::tiers::{derive_tier_from_role_name, Tier};
///
/// assert_eq!(derive_tier_from_role_name("CEO"), Tier::Owner);
/// assert_eq!(derive_tier_from_role_name("hr manager"), Tier::Admin);
/// assert_eq!(derive_tier_from_role_name("Recruiter"), Tier::Member);
/// ```
pub fn derive_tier_from_role_name(name: &str) -> Tier {
    let normalized = name.to_lowercase();

    if normalized == OWNER_ROLE {
        Tier::Owner
    } else if ADMIN_EQUIVALENT_ROLES.contains(&normalized.as_str()) {
        Tier::Admin
    } else {
        Tier::Member
    }
}

/// Resolve the tier requested at signup.
///
/// An explicit token always wins over the org role, even when they
/// disagree. Tokens compare case-insensitively:
///
/// - `super-admin`, `owner`, `ceo` -> owner
/// - `admin`, `manager` -> admin
/// - anything else -> member
///
/// Without a token the org role name is passed to
/// [`derive_tier_from_role_name`]; with neither the result is member.
pub fn resolve_signup_tier(explicit: Option<&str>, org_role_name: Option<&str>) -> Tier {
    match (explicit, org_role_name) {
        (Some(token), _) => tier_from_token(token),
        (None, Some(name)) => derive_tier_from_role_name(name),
        (None, None) => Tier::Member,
    }
}

fn tier_from_token(token: &str) -> Tier {
    match token.to_lowercase().as_str() {
        "super-admin" | "owner" | "ceo" => Tier::Owner,
        "admin" | "manager" => Tier::Admin,
        _ => Tier::Member,
    }
}
