//! Input validation for signup and role assignment.

mod email;
mod name;
mod org_role;
mod password;

pub use email::validate_email;
pub use name::validate_name;
pub use org_role::validate_org_role_name;
pub use password::{validate_password, PasswordPolicy};

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ValidationError {
    EmailEmpty,
    EmailTooLong,
    EmailInvalidFormat,
    PasswordEmpty,
    PasswordTooShort(usize),
    PasswordTooLong(usize),
    PasswordMissingLetter,
    PasswordMissingDigit,
    NameEmpty,
    NameTooLong,
    OrgRoleEmpty,
    OrgRoleUnknown(String),
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmailEmpty => write!(f, "Email cannot be empty"),
            Self::EmailTooLong => write!(f, "Email is too long (max 254 characters)"),
            Self::EmailInvalidFormat => write!(f, "Invalid email format"),
            Self::PasswordEmpty => write!(f, "Password cannot be empty"),
            Self::PasswordTooShort(min) => write!(f, "Password must be at least {min} characters"),
            Self::PasswordTooLong(max) => write!(f, "Password is too long (max {max} characters)"),
            Self::PasswordMissingLetter => write!(f, "Password must contain a letter"),
            Self::PasswordMissingDigit => write!(f, "Password must contain a digit"),
            Self::NameEmpty => write!(f, "Name cannot be empty"),
            Self::NameTooLong => write!(f, "Name is too long (max 100 characters)"),
            Self::OrgRoleEmpty => write!(f, "Organizational role cannot be empty"),
            Self::OrgRoleUnknown(name) => write!(f, "Unknown organizational role: {name}"),
        }
    }
}

impl std::error::Error for ValidationError {}
