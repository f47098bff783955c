//! Static catalog of organizational role names.
//!
//! The catalog holds two groupings over the same set of job titles:
//!
//! | Grouping | Shape |
//! |----------|-------|
//! | hierarchy | executive -> direct reports (CEO -> CTO/COO/CMO -> titles) |
//! | departments | department name -> titles, overlapping the hierarchy |
//!
//! A role is *known* if it is a hierarchy key, a hierarchy value, or a
//! department member. Department names themselves are not roles.
//!
//! Lookups are exact and case-sensitive. Tier derivation compares names
//! case-insensitively; see [`crate::tiers::derive_tier_from_role_name`].
//!
//! # Example
//!
//! ```rust
//! use tierwise::catalog;
//!
//! assert!(catalog::is_known_role("HR Manager"));
//! assert!(!catalog::is_known_role("hr manager"));
//! assert_eq!(catalog::children_of("CEO"), ["CTO", "COO", "CMO"]);
//! assert!(catalog::children_of("Recruiter").is_empty());
//! ```

mod org_chart;

use std::collections::{BTreeMap, BTreeSet};
use std::sync::LazyLock;

static CATALOG: LazyLock<RoleCatalog> =
    LazyLock::new(|| RoleCatalog::from_tables(org_chart::HIERARCHY, org_chart::DEPARTMENTS));

/// Read-only view over the org chart.
///
/// Use [`RoleCatalog::global`] for the process-wide instance built from the
/// bundled org chart.
#[derive(Debug)]
pub struct RoleCatalog {
    hierarchy: &'static [(&'static str, &'static [&'static str])],
    departments: &'static [(&'static str, &'static [&'static str])],
    reports: BTreeMap<&'static str, &'static [&'static str]>,
    members: BTreeMap<&'static str, &'static [&'static str]>,
    known: BTreeSet<&'static str>,
}

impl RoleCatalog {
    /// The process-wide catalog. Built on first access.
    pub fn global() -> &'static RoleCatalog {
        &CATALOG
    }

    fn from_tables(
        hierarchy: &'static [(&'static str, &'static [&'static str])],
        departments: &'static [(&'static str, &'static [&'static str])],
    ) -> Self {
        let mut known = BTreeSet::new();
        for (executive, reports) in hierarchy {
            known.insert(*executive);
            known.extend(reports.iter().copied());
        }
        for (_, members) in departments {
            known.extend(members.iter().copied());
        }

        Self {
            hierarchy,
            departments,
            reports: hierarchy.iter().copied().collect(),
            members: departments.iter().copied().collect(),
            known,
        }
    }

    /// Every known role, sorted ascending with no duplicates.
    pub fn list_all_roles(&self) -> Vec<&'static str> {
        self.known.iter().copied().collect()
    }

    /// Exact, case-sensitive membership check.
    pub fn is_known_role(&self, name: &str) -> bool {
        self.known.contains(name)
    }

    /// Direct reports of `role`, in authored order.
    ///
    /// Leaves and unknown names both yield an empty slice.
    pub fn children_of(&self, role: &str) -> &'static [&'static str] {
        self.reports.get(role).copied().unwrap_or(&[])
    }

    /// Executives that list `role` as a direct report.
    pub fn parents_of(&self, role: &str) -> Vec<&'static str> {
        self.hierarchy
            .iter()
            .filter(|(_, reports)| reports.contains(&role))
            .map(|(executive, _)| *executive)
            .collect()
    }

    /// Members of a department, or an empty slice for an unknown department.
    pub fn department(&self, name: &str) -> &'static [&'static str] {
        self.members.get(name).copied().unwrap_or(&[])
    }

    /// Departments that include `role`. A role may sit in several.
    pub fn departments_of(&self, role: &str) -> Vec<&'static str> {
        self.departments
            .iter()
            .filter(|(_, members)| members.contains(&role))
            .map(|(department, _)| *department)
            .collect()
    }

    /// Executives and their direct reports, in authored order (CEO first).
    pub fn hierarchy(&self) -> impl Iterator<Item = (&'static str, &'static [&'static str])> + '_ {
        self.hierarchy.iter().copied()
    }

    /// Departments and their members, in authored order.
    pub fn departments(&self) -> impl Iterator<Item = (&'static str, &'static [&'static str])> + '_ {
        self.departments.iter().copied()
    }
}

/// Shorthand for [`RoleCatalog::list_all_roles`] on the global catalog.
pub fn list_all_roles() -> Vec<&'static str> {
    RoleCatalog::global().list_all_roles()
}

/// Shorthand for [`RoleCatalog::is_known_role`] on the global catalog.
pub fn is_known_role(name: &str) -> bool {
    RoleCatalog::global().is_known_role(name)
}

/// Shorthand for [`RoleCatalog::children_of`] on the global catalog.
pub fn children_of(role: &str) -> &'static [&'static str] {
    RoleCatalog::global().children_of(role)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_all_roles_sorted_and_unique() {
        let roles = list_all_roles();

        assert!(roles.windows(2).all(|pair| pair[0] < pair[1]));
        assert_eq!(roles.len(), 41);
    }

    #[test]
    fn test_every_listed_role_is_known() {
        for role in list_all_roles() {
            assert!(is_known_role(role), "{role} should be known");
        }
    }

    #[test]
    fn test_executives_are_known() {
        for executive in ["CEO", "CTO", "COO", "CMO"] {
            assert!(is_known_role(executive));
        }
    }

    #[test]
    fn test_department_only_roles_are_known() {
        assert!(is_known_role("IT Helpdesk"));
        assert!(is_known_role("Network Engineer"));
        assert!(RoleCatalog::global().parents_of("IT Helpdesk").is_empty());
    }

    #[test]
    fn test_is_known_role_is_case_sensitive() {
        assert!(is_known_role("Frontend Developer"));
        assert!(!is_known_role("frontend developer"));
        assert!(!is_known_role("FRONTEND DEVELOPER"));
        assert!(!is_known_role(""));
    }

    #[test]
    fn test_department_names_are_not_roles() {
        assert!(!is_known_role("Engineering"));
        assert!(!is_known_role("HR"));
    }

    #[test]
    fn test_project_manager_is_not_in_catalog() {
        assert!(!is_known_role("Project Manager"));
    }

    #[test]
    fn test_children_of() {
        assert_eq!(children_of("COO"), ["HR Manager", "Recruiter", "Office Admin"]);
        assert_eq!(children_of("CTO").len(), 25);
        assert!(children_of("HR Manager").is_empty());
        assert!(children_of("Astronaut").is_empty());
    }

    #[test]
    fn test_parents_of() {
        let catalog = RoleCatalog::global();

        assert_eq!(catalog.parents_of("CTO"), ["CEO"]);
        assert_eq!(catalog.parents_of("Sales - Account Manager"), ["CMO"]);
        assert!(catalog.parents_of("CEO").is_empty());
    }

    #[test]
    fn test_departments_overlap() {
        let catalog = RoleCatalog::global();

        assert_eq!(
            catalog.departments_of("UI/UX Designer"),
            ["Engineering", "ProductDesign"]
        );
        assert_eq!(
            catalog.departments_of("Database Administrator (DBA)"),
            ["Engineering", "ITSupport"]
        );
        assert!(catalog.departments_of("CEO").is_empty());
        assert_eq!(catalog.department("HR"), ["HR Manager", "Recruiter", "Office Admin"]);
        assert!(catalog.department("Legal").is_empty());
    }

    #[test]
    fn test_groupings_enumerate() {
        let catalog = RoleCatalog::global();

        assert_eq!(catalog.hierarchy().count(), 4);
        assert_eq!(catalog.departments().count(), 7);
    }

    #[test]
    fn test_groupings_keep_authored_order() {
        let catalog = RoleCatalog::global();

        let executives: Vec<&str> = catalog.hierarchy().map(|(name, _)| name).collect();
        assert_eq!(executives, ["CEO", "CTO", "COO", "CMO"]);

        let departments: Vec<&str> = catalog.departments().map(|(name, _)| name).collect();
        assert_eq!(
            departments,
            ["Marketing", "Sales", "HR", "Engineering", "ProductDesign", "DataAI", "ITSupport"]
        );
    }
}
