use super::ValidationError;
use crate::catalog;

/// Checks an org role name against the catalog.
///
/// Matching is exact: `"hr manager"` is rejected even though tier
/// derivation would treat it like `"HR Manager"`.
pub fn validate_org_role_name(name: &str) -> Result<(), ValidationError> {
    if name.trim().is_empty() {
        return Err(ValidationError::OrgRoleEmpty);
    }

    if !catalog::is_known_role(name) {
        return Err(ValidationError::OrgRoleUnknown(name.to_owned()));
    }

    Ok(())
}
