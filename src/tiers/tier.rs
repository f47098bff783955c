use std::fmt;

use serde::{Deserialize, Serialize};

/// Coarse permission level attached to an account.
///
/// Variants are declared from least to most privileged so the derived
/// ordering matches privilege: `Member < Admin < Owner`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tier {
    #[default]
    Member,
    Admin,
    Owner,
}

impl Tier {
    /// Value stored in the `users.tier` column and carried in session claims.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Owner => "owner",
            Self::Admin => "admin",
            Self::Member => "member",
        }
    }

    /// Parse a stored tier value. Exact match only.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "owner" => Some(Self::Owner),
            "admin" => Some(Self::Admin),
            "member" => Some(Self::Member),
            _ => None,
        }
    }

    /// Parse a tier supplied by the session layer.
    ///
    /// Absent or unrecognized values resolve to [`Tier::Member`].
    pub fn from_session_value(value: Option<&str>) -> Self {
        value.and_then(Self::parse).unwrap_or_default()
    }

    /// Owner and admin: may see and manage budgets and add team members.
    pub fn is_privileged(&self) -> bool {
        matches!(self, Self::Owner | Self::Admin)
    }

    /// At most one account system-wide may hold a singleton tier.
    pub fn is_singleton(&self) -> bool {
        matches!(self, Self::Owner | Self::Admin)
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_privilege_order() {
        assert!(Tier::Owner > Tier::Admin);
        assert!(Tier::Admin > Tier::Member);
        assert_eq!(Tier::default(), Tier::Member);
    }

    #[test]
    fn test_parse_roundtrip() {
        for tier in [Tier::Owner, Tier::Admin, Tier::Member] {
            assert_eq!(Tier::parse(tier.as_str()), Some(tier));
        }
        assert_eq!(Tier::parse("Owner"), None);
        assert_eq!(Tier::parse("user"), None);
    }

    #[test]
    fn test_from_session_value_fails_closed() {
        assert_eq!(Tier::from_session_value(Some("admin")), Tier::Admin);
        assert_eq!(Tier::from_session_value(Some("user")), Tier::Member);
        assert_eq!(Tier::from_session_value(Some("")), Tier::Member);
        assert_eq!(Tier::from_session_value(None), Tier::Member);
    }

    #[test]
    fn test_serde_lowercase() {
        assert_eq!(serde_json::to_string(&Tier::Owner).unwrap(), "\"owner\"");
        let tier: Tier = serde_json::from_str("\"admin\"").unwrap();
        assert_eq!(tier, Tier::Admin);
    }
}
