use argon2::{Argon2, PasswordHasher};
use password_hash::SaltString;
use rand::rngs::OsRng;
use serde::Deserialize;

use crate::config::TierwiseConfig;
use crate::tiers::{resolve_signup_tier, Tier};
use crate::validators::{validate_email, validate_name, validate_org_role_name};
use crate::{AccessError, Account, AccountRepository, CreateAccount, RoleRepository, SecretString};

/// Signup form body.
///
/// `role` is the explicit coarse token from the form (`"member"`,
/// `"admin"`, `"manager"`, `"super-admin"`, ...). `orgRoleName` places the
/// account on the org chart; a blank `orgRoleName` is treated as absent.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignupInput {
    pub name: String,
    pub email: String,
    pub password: SecretString,
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default)]
    pub org_role_name: Option<String>,
}

impl SignupInput {
    /// The tier this signup asks for. The explicit token wins over the org role.
    pub fn requested_tier(&self) -> Tier {
        resolve_signup_tier(self.role.as_deref(), self.org_role_name())
    }

    /// The org role name, or `None` when it is missing or blank.
    pub fn org_role_name(&self) -> Option<&str> {
        self.org_role_name
            .as_deref()
            .filter(|name| !name.trim().is_empty())
    }
}

/// Creates an account.
///
/// This action:
/// 1. Validates name, email, password and the optional org role name
/// 2. Rejects an email that is already registered
/// 3. Resolves the tier from the explicit token or the org role
/// 4. Rejects owner/admin when that tier is already held
/// 5. Hashes the password and stores the account
///
/// Step 4 is a fast path; the repository re-checks atomically on insert.
pub struct SignupAction<A, R>
where
    A: AccountRepository,
    R: RoleRepository,
{
    accounts: A,
    roles: R,
    config: TierwiseConfig,
}

impl<A: AccountRepository, R: RoleRepository> SignupAction<A, R> {
    pub fn new(accounts: A, roles: R) -> Self {
        Self::with_config(accounts, roles, TierwiseConfig::default())
    }

    pub fn with_config(accounts: A, roles: R, config: TierwiseConfig) -> Self {
        Self {
            accounts,
            roles,
            config,
        }
    }

    /// # Returns
    ///
    /// - `Ok(account)` - Account created
    /// - `Err(AccessError::Validation(_))` - Malformed input or unknown org role
    /// - `Err(AccessError::RoleNotFound)` - Org role is in the catalog but not stored
    /// - `Err(AccessError::AccountAlreadyExists)` - Email already registered
    /// - `Err(AccessError::TierTaken(tier))` - Owner or admin already exists
    #[cfg_attr(feature = "tracing", tracing::instrument(name = "signup", skip_all, err))]
    pub async fn execute(&self, input: SignupInput) -> Result<Account, AccessError> {
        validate_name(&input.name)?;
        validate_email(&input.email)?;
        self.config
            .password_policy
            .validate(input.password.expose_secret())?;

        let org_role_id = match input.org_role_name() {
            Some(name) => {
                validate_org_role_name(name)?;
                let role = self
                    .roles
                    .find_role_by_name(name)
                    .await?
                    .ok_or(AccessError::RoleNotFound)?;
                Some(role.id)
            }
            None => None,
        };

        if self
            .accounts
            .find_account_by_email(&input.email)
            .await?
            .is_some()
        {
            return Err(AccessError::AccountAlreadyExists);
        }

        let tier = input.requested_tier();
        if tier.is_singleton() && self.accounts.count_accounts_with_tier(tier).await? > 0 {
            log::info!(
                target: "tierwise",
                "msg=\"signup rejected\", reason=\"tier taken\", tier=\"{tier}\""
            );
            return Err(AccessError::TierTaken(tier));
        }

        let hashed_password = hash_password(&input.password)?;
        let account = self
            .accounts
            .create_account(CreateAccount {
                name: input.name.trim().to_owned(),
                email: input.email,
                hashed_password,
                tier,
                org_role_id,
            })
            .await?;

        log::info!(
            target: "tierwise",
            "msg=\"account created\", account_id={}, tier=\"{}\", org_role_id={:?}",
            account.id,
            account.tier,
            account.org_role_id
        );

        Ok(account)
    }
}

fn hash_password(password: &SecretString) -> Result<String, AccessError> {
    let salt = SaltString::generate(&mut OsRng);

    Argon2::default()
        .hash_password(password.expose_secret().as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|_| AccessError::PasswordHashError)
}

#[cfg(test)]
mod tests {
    use argon2::{PasswordHash, PasswordVerifier};

    use super::*;
    use crate::validators::ValidationError;
    use crate::{MockAccountRepository, MockRoleRepository};

    fn input(email: &str, role: Option<&str>, org_role_name: Option<&str>) -> SignupInput {
        SignupInput {
            name: "Jordan Lee".to_owned(),
            email: email.to_owned(),
            password: SecretString::new("budget-2025"),
            role: role.map(str::to_owned),
            org_role_name: org_role_name.map(str::to_owned),
        }
    }

    fn action() -> SignupAction<MockAccountRepository, MockRoleRepository> {
        SignupAction::new(MockAccountRepository::new(), MockRoleRepository::from_catalog())
    }

    #[tokio::test]
    async fn test_signup_defaults_to_member() {
        let account = action()
            .execute(input("jordan@acme.io", None, None))
            .await
            .unwrap();

        assert_eq!(account.tier, Tier::Member);
        assert_eq!(account.org_role_id, None);
        assert_eq!(account.name, "Jordan Lee");
    }

    #[tokio::test]
    async fn test_password_is_hashed() {
        let account = action()
            .execute(input("jordan@acme.io", None, None))
            .await
            .unwrap();

        assert_ne!(account.hashed_password, "budget-2025");
        let parsed = PasswordHash::new(&account.hashed_password).unwrap();
        assert!(Argon2::default()
            .verify_password(b"budget-2025", &parsed)
            .is_ok());
    }

    #[tokio::test]
    async fn test_explicit_member_token_beats_ceo_org_role() {
        let account = action()
            .execute(input("ceo@acme.io", Some("member"), Some("CEO")))
            .await
            .unwrap();

        assert_eq!(account.tier, Tier::Member);
        assert!(account.org_role_id.is_some());
    }

    #[tokio::test]
    async fn test_org_role_derives_tier_without_token() {
        let account = action()
            .execute(input("cto@acme.io", None, Some("CTO")))
            .await
            .unwrap();

        assert_eq!(account.tier, Tier::Admin);
    }

    #[tokio::test]
    async fn test_second_owner_is_rejected() {
        let signup = action();
        signup
            .execute(input("first@acme.io", Some("super-admin"), None))
            .await
            .unwrap();

        let result = signup.execute(input("second@acme.io", Some("ceo"), None)).await;

        assert_eq!(result.unwrap_err(), AccessError::TierTaken(Tier::Owner));
    }

    #[tokio::test]
    async fn test_manager_token_takes_the_admin_slot() {
        let signup = action();
        let admin = signup
            .execute(input("manager@acme.io", Some("manager"), None))
            .await
            .unwrap();
        assert_eq!(admin.tier, Tier::Admin);

        let result = signup.execute(input("admin@acme.io", Some("admin"), None)).await;
        assert_eq!(result.unwrap_err(), AccessError::TierTaken(Tier::Admin));

        // members are unlimited
        signup
            .execute(input("m1@acme.io", Some("member"), None))
            .await
            .unwrap();
        signup
            .execute(input("m2@acme.io", Some("member"), None))
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_duplicate_email() {
        let signup = action();
        signup
            .execute(input("jordan@acme.io", None, None))
            .await
            .unwrap();

        let result = signup.execute(input("jordan@acme.io", None, None)).await;

        assert_eq!(result.unwrap_err(), AccessError::AccountAlreadyExists);
    }

    #[tokio::test]
    async fn test_unknown_org_role() {
        let result = action()
            .execute(input("pm@acme.io", None, Some("hr manager")))
            .await;

        assert_eq!(
            result.unwrap_err(),
            AccessError::Validation(ValidationError::OrgRoleUnknown("hr manager".to_owned()))
        );
    }

    #[tokio::test]
    async fn test_catalog_role_missing_from_storage() {
        let signup = SignupAction::new(MockAccountRepository::new(), MockRoleRepository::new());

        let result = signup
            .execute(input("hr@acme.io", None, Some("HR Manager")))
            .await;

        assert_eq!(result.unwrap_err(), AccessError::RoleNotFound);
    }

    #[tokio::test]
    async fn test_password_policy_from_config() {
        let signup = SignupAction::with_config(
            MockAccountRepository::new(),
            MockRoleRepository::new(),
            TierwiseConfig::strict(),
        );

        let result = signup.execute(input("jordan@acme.io", None, None)).await;

        assert_eq!(
            result.unwrap_err(),
            AccessError::Validation(ValidationError::PasswordTooShort(12))
        );
    }

    #[tokio::test]
    async fn test_blank_org_role_is_absent() {
        let signup = action();

        let account = signup
            .execute(input("blank@acme.io", Some("member"), Some("")))
            .await
            .unwrap();
        assert_eq!(account.tier, Tier::Member);
        assert_eq!(account.org_role_id, None);

        let account = signup
            .execute(input("spaces@acme.io", None, Some("   ")))
            .await
            .unwrap();
        assert_eq!(account.org_role_id, None);
    }

    #[test]
    fn test_input_deserializes_camel_case() {
        let input: SignupInput = serde_json::from_str(
            r#"{"name":"Sam","email":"sam@acme.io","password":"pw123456","role":"member","orgRoleName":"CEO"}"#,
        )
        .unwrap();

        assert_eq!(input.org_role_name.as_deref(), Some("CEO"));
        assert_eq!(input.requested_tier(), Tier::Member);
    }
}
