use serde::{Deserialize, Serialize};

use super::ValidationError;

/// Password rules applied at signup.
///
/// ```
/// use tierwise::validators::PasswordPolicy;
///
/// assert!(PasswordPolicy::default().validate("budget2025").is_ok());
/// assert!(PasswordPolicy::strict().validate("budget2025").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PasswordPolicy {
    pub min_length: usize,
    pub max_length: usize,
    pub require_letter: bool,
    pub require_digit: bool,
}

impl Default for PasswordPolicy {
    fn default() -> Self {
        Self {
            min_length: 8,
            max_length: 128,
            require_letter: false,
            require_digit: false,
        }
    }
}

impl PasswordPolicy {
    /// Shorter minimum for local development and fixtures.
    pub fn lenient() -> Self {
        Self {
            min_length: 6,
            ..Self::default()
        }
    }

    /// 12+ characters mixing letters and digits.
    pub fn strict() -> Self {
        Self {
            min_length: 12,
            max_length: 128,
            require_letter: true,
            require_digit: true,
        }
    }

    /// Length is measured in characters, not bytes.
    pub fn validate(&self, password: &str) -> Result<(), ValidationError> {
        if password.is_empty() {
            return Err(ValidationError::PasswordEmpty);
        }

        let length = password.chars().count();
        if length < self.min_length {
            return Err(ValidationError::PasswordTooShort(self.min_length));
        }
        if length > self.max_length {
            return Err(ValidationError::PasswordTooLong(self.max_length));
        }

        if self.require_letter && !password.chars().any(char::is_alphabetic) {
            return Err(ValidationError::PasswordMissingLetter);
        }
        if self.require_digit && !password.chars().any(|c| c.is_ascii_digit()) {
            return Err(ValidationError::PasswordMissingDigit);
        }

        Ok(())
    }
}

/// Validate against [`PasswordPolicy::default`].
pub fn validate_password(password: &str) -> Result<(), ValidationError> {
    PasswordPolicy::default().validate(password)
}
