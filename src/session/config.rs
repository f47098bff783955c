use chrono::Duration;
use std::fmt;

use crate::{AccessError, TierwiseConfig};

/// Minimum required length for the signing secret in bytes.
pub const MIN_SECRET_LENGTH: usize = 32;

/// Environment variable read by [`SessionConfig::from_env`].
pub const SECRET_ENV_VAR: &str = "JWT_SECRET";

#[derive(Clone)]
pub struct SessionConfig {
    /// HS256 signing secret.
    pub(crate) secret: String,
    /// Default: 1 hour.
    pub(crate) lifetime: Duration,
    pub(crate) issuer: Option<String>,
}

impl fmt::Debug for SessionConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SessionConfig")
            .field("secret", &"[REDACTED]")
            .field("lifetime", &self.lifetime)
            .field("issuer", &self.issuer)
            .finish()
    }
}

impl SessionConfig {
    /// # Errors
    ///
    /// Returns `AccessError::ConfigurationError` if `secret` is shorter than
    /// [`MIN_SECRET_LENGTH`] bytes.
    pub fn new(secret: impl Into<String>) -> Result<Self, AccessError> {
        let secret = secret.into();

        if secret.len() < MIN_SECRET_LENGTH {
            return Err(AccessError::ConfigurationError(format!(
                "session secret must be at least {MIN_SECRET_LENGTH} bytes, got {}",
                secret.len()
            )));
        }

        Ok(Self {
            secret,
            lifetime: TierwiseConfig::default().session_lifetime,
            issuer: None,
        })
    }

    /// Reads the secret from `JWT_SECRET`.
    pub fn from_env() -> Result<Self, AccessError> {
        let secret = std::env::var(SECRET_ENV_VAR).map_err(|_| {
            AccessError::ConfigurationError(format!("{SECRET_ENV_VAR} is not set"))
        })?;

        Self::new(secret)
    }

    #[must_use]
    pub fn with_lifetime(mut self, lifetime: Duration) -> Self {
        self.lifetime = lifetime;
        self
    }

    /// Takes the session lifetime from a [`TierwiseConfig`] preset.
    #[must_use]
    pub fn with_config(self, config: &TierwiseConfig) -> Self {
        self.with_lifetime(config.session_lifetime)
    }

    /// Sets the `iss` claim. Verification then requires a matching issuer.
    #[must_use]
    pub fn with_issuer(mut self, issuer: impl Into<String>) -> Self {
        self.issuer = Some(issuer.into());
        self
    }

    pub fn lifetime(&self) -> Duration {
        self.lifetime
    }
}

#[cfg(test)]
mod tests {
    use serial_test::serial;

    use super::*;

    #[test]
    fn test_secret_too_short() {
        let err = SessionConfig::new("short").unwrap_err();

        assert!(
            matches!(err, AccessError::ConfigurationError(ref msg) if msg.contains("32 bytes")),
            "unexpected error: {err}"
        );
    }

    #[test]
    fn test_defaults_and_presets() {
        let config = SessionConfig::new("test-secret-32-bytes-long-key-01").unwrap();
        assert_eq!(config.lifetime(), Duration::hours(1));

        let config = config.with_config(&TierwiseConfig::strict());
        assert_eq!(config.lifetime(), Duration::minutes(15));
    }

    #[test]
    fn test_debug_redacts_secret() {
        let config = SessionConfig::new("test-secret-32-bytes-long-key-02").unwrap();

        let debug = format!("{config:?}");
        assert!(debug.contains("[REDACTED]"));
        assert!(!debug.contains("test-secret"));
    }

    #[test]
    #[serial]
    fn test_from_env() {
        std::env::remove_var(SECRET_ENV_VAR);
        assert!(matches!(
            SessionConfig::from_env(),
            Err(AccessError::ConfigurationError(_))
        ));

        std::env::set_var(SECRET_ENV_VAR, "env-secret-that-is-32-bytes-long");
        assert!(SessionConfig::from_env().is_ok());
        std::env::remove_var(SECRET_ENV_VAR);
    }
}
