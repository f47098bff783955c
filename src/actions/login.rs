use argon2::{Argon2, PasswordVerifier};
use password_hash::PasswordHash;

use crate::validators::ValidationError;
use crate::{AccessError, Account, AccountRepository};

/// Checks an email and password against the stored Argon2 hash.
///
/// Returns the account on success. Issuing a session token for it is left
/// to the caller (see `SessionService::issue` under the `jwt` feature).
pub struct LoginAction<A: AccountRepository> {
    accounts: A,
}

impl<A: AccountRepository> LoginAction<A> {
    pub fn new(accounts: A) -> Self {
        Self { accounts }
    }

    /// # Returns
    ///
    /// - `Ok(account)` - Credentials match
    /// - `Err(AccessError::Validation(_))` - Email or password is empty
    /// - `Err(AccessError::InvalidCredentials)` - Unknown email or wrong password
    #[cfg_attr(feature = "tracing", tracing::instrument(name = "login", skip_all, err))]
    pub async fn execute(&self, email: &str, password: &str) -> Result<Account, AccessError> {
        if email.trim().is_empty() {
            return Err(ValidationError::EmailEmpty.into());
        }
        if password.is_empty() {
            return Err(ValidationError::PasswordEmpty.into());
        }

        if let Some(account) = self.accounts.find_account_by_email(email).await? {
            if verify_password(password, &account.hashed_password)? {
                log::info!(
                    target: "tierwise",
                    "msg=\"login succeeded\", account_id={}",
                    account.id
                );
                return Ok(account);
            }
        }

        log::info!(target: "tierwise", "msg=\"login failed\", reason=\"invalid credentials\"");
        Err(AccessError::InvalidCredentials)
    }
}

fn verify_password(password: &str, hashed: &str) -> Result<bool, AccessError> {
    let parsed_hash = PasswordHash::new(hashed).map_err(|_| AccessError::PasswordHashError)?;

    Ok(Argon2::default()
        .verify_password(password.as_bytes(), &parsed_hash)
        .is_ok())
}
