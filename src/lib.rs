//! Role tiers, org chart catalog and permission checks.
//!
//! The core is three pure modules:
//!
//! - [`catalog`]: the static org chart of known role names.
//! - [`tiers`]: maps org role names and signup tokens to a [`Tier`].
//! - [`permissions`]: budget and team-management checks for a [`Principal`].
//!
//! [`actions`] and [`repository`] wire those into signup, role
//! availability, principal resolution and org-role assignment over
//! pluggable storage. Optional features add a SQLite backend
//! (`sqlx_sqlite`), signed session tokens (`jwt`), in-memory repositories
//! (`mocks`) and span instrumentation (`tracing`).

pub mod actions;
pub mod catalog;
pub mod config;
pub mod permissions;
pub mod repository;
mod secret;
pub mod tiers;
pub mod validators;

#[cfg(feature = "jwt")]
pub mod session;
#[cfg(feature = "sqlx_sqlite")]
pub mod sqlite;

use std::fmt;

pub use config::TierwiseConfig;
pub use permissions::{Permission, PermissionSet, Principal};
pub use repository::{Account, AccountRepository, CreateAccount, OrgRole, RoleRepository};
pub use secret::SecretString;
pub use tiers::Tier;
pub use validators::ValidationError;

#[cfg(any(test, feature = "mocks"))]
pub use repository::{MockAccountRepository, MockRoleRepository};

/// Errors from account, storage and session operations.
///
/// The catalog, tier derivation and permission checks never fail; a denied
/// permission only becomes an error through [`Principal::require`].
#[derive(Debug, Clone, PartialEq)]
pub enum AccessError {
    AccountNotFound,
    AccountAlreadyExists,
    /// Unknown email or wrong password. The two are not distinguished.
    InvalidCredentials,
    /// Another account already holds this singleton tier.
    TierTaken(Tier),
    RoleNotFound,
    Forbidden,
    Validation(ValidationError),
    PasswordHashError,
    TokenExpired,
    TokenInvalid,
    ConfigurationError(String),
    DatabaseError(String),
    Internal(String),
}

impl std::error::Error for AccessError {}

impl fmt::Display for AccessError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AccessError::AccountNotFound => write!(f, "Account not found"),
            AccessError::AccountAlreadyExists => write!(f, "Account already exists"),
            AccessError::InvalidCredentials => write!(f, "Invalid credentials"),
            AccessError::TierTaken(tier) => write!(f, "The {tier} tier is already taken"),
            AccessError::RoleNotFound => write!(f, "Role not found"),
            AccessError::Forbidden => write!(f, "Forbidden"),
            AccessError::Validation(e) => write!(f, "Validation error: {e}"),
            AccessError::PasswordHashError => write!(f, "Failed to hash password"),
            AccessError::TokenExpired => write!(f, "Token has expired"),
            AccessError::TokenInvalid => write!(f, "Invalid token"),
            AccessError::ConfigurationError(msg) => write!(f, "Configuration error: {msg}"),
            AccessError::DatabaseError(msg) => write!(f, "Database error: {msg}"),
            AccessError::Internal(msg) => write!(f, "Internal error: {msg}"),
        }
    }
}

impl From<ValidationError> for AccessError {
    fn from(e: ValidationError) -> Self {
        AccessError::Validation(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(
            AccessError::TierTaken(Tier::Owner).to_string(),
            "The owner tier is already taken"
        );
        assert_eq!(
            AccessError::from(ValidationError::NameEmpty).to_string(),
            "Validation error: Name cannot be empty"
        );
    }
}
