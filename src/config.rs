//! Configuration for account and session handling.
//!
//! # Example
//!
//! ```rust
//! use tierwise::config::TierwiseConfig;
//! use tierwise::validators::PasswordPolicy;
//! use chrono::Duration;
//!
//! let config = TierwiseConfig::default();
//! assert_eq!(config.session_lifetime, Duration::hours(1));
//!
//! let config = TierwiseConfig {
//!     password_policy: PasswordPolicy::strict(),
//!     ..Default::default()
//! };
//! ```

use chrono::Duration;

use crate::validators::PasswordPolicy;

#[derive(Debug, Clone)]
pub struct TierwiseConfig {
    /// Rules applied to new passwords at signup.
    pub password_policy: PasswordPolicy,

    /// How long an issued session token stays valid.
    ///
    /// Default: 1 hour
    pub session_lifetime: Duration,
}

impl Default for TierwiseConfig {
    fn default() -> Self {
        Self {
            password_policy: PasswordPolicy::default(),
            session_lifetime: Duration::hours(1),
        }
    }
}

impl TierwiseConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Day-long sessions and a short password minimum.
    pub fn development() -> Self {
        Self {
            password_policy: PasswordPolicy::lenient(),
            session_lifetime: Duration::hours(24),
        }
    }

    /// Short sessions and letter+digit passwords of 12 or more characters.
    pub fn strict() -> Self {
        Self {
            password_policy: PasswordPolicy::strict(),
            session_lifetime: Duration::minutes(15),
        }
    }
}
