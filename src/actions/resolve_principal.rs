use serde::{Deserialize, Serialize};

use crate::permissions::Principal;
use crate::tiers::Tier;
use crate::{AccessError, AccountRepository, RoleRepository};

/// Verified caller data handed over by the session layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionIdentity {
    pub user_id: i64,
    pub email: String,
    pub name: String,
    pub tier: Tier,
}

/// Builds the per-request [`Principal`].
///
/// The tier is taken from the session as-is. The org role name is loaded
/// fresh from storage on every call.
pub struct ResolvePrincipalAction<A, R>
where
    A: AccountRepository,
    R: RoleRepository,
{
    accounts: A,
    roles: R,
}

impl<A: AccountRepository, R: RoleRepository> ResolvePrincipalAction<A, R> {
    pub fn new(accounts: A, roles: R) -> Self {
        Self { accounts, roles }
    }

    /// # Returns
    ///
    /// - `Ok(principal)` - With `org_role_name` set when the account has a stored role
    /// - `Err(AccessError::AccountNotFound)` - The session refers to a deleted account
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(name = "resolve_principal", skip_all, err)
    )]
    pub async fn execute(&self, identity: SessionIdentity) -> Result<Principal, AccessError> {
        let account = self
            .accounts
            .find_account_by_id(identity.user_id)
            .await?
            .ok_or(AccessError::AccountNotFound)?;

        let org_role_name = match account.org_role_id {
            Some(role_id) => {
                let role = self.roles.find_role_by_id(role_id).await?;
                if role.is_none() {
                    log::warn!(
                        target: "tierwise",
                        "msg=\"dangling org role\", account_id={}, role_id={role_id}",
                        account.id
                    );
                }
                role.map(|r| r.name)
            }
            None => None,
        };

        Ok(Principal {
            user_id: identity.user_id,
            email: identity.email,
            name: identity.name,
            tier: identity.tier,
            org_role_name,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::permissions::PermissionSet;
    use crate::{Account, MockAccountRepository, MockRoleRepository, RoleRepository};

    fn identity(user_id: i64, tier: Tier) -> SessionIdentity {
        SessionIdentity {
            user_id,
            email: "casey@acme.io".to_owned(),
            name: "Casey".to_owned(),
            tier,
        }
    }

    #[tokio::test]
    async fn test_member_project_manager() {
        let roles = MockRoleRepository::new();
        let pm = roles.insert("Project Manager");
        let mut account = Account::mock_with_tier(5, "casey@acme.io", Tier::Member);
        account.org_role_id = Some(pm.id);
        let action =
            ResolvePrincipalAction::new(MockAccountRepository::with_accounts(vec![account]), roles);

        let principal = action.execute(identity(5, Tier::Member)).await.unwrap();

        assert_eq!(principal.org_role_name.as_deref(), Some("Project Manager"));
        assert_eq!(
            principal.permissions(),
            PermissionSet {
                can_manage_budget: false,
                can_view_budget: false,
                can_add_team: true,
            }
        );
    }

    #[tokio::test]
    async fn test_account_without_org_role() {
        let account = Account::mock_with_tier(2, "casey@acme.io", Tier::Admin);
        let action = ResolvePrincipalAction::new(
            MockAccountRepository::with_accounts(vec![account]),
            MockRoleRepository::from_catalog(),
        );

        let principal = action.execute(identity(2, Tier::Admin)).await.unwrap();

        assert_eq!(principal.org_role_name, None);
        assert!(principal.permissions().can_add_team);
    }

    #[tokio::test]
    async fn test_tier_comes_from_session() {
        let account = Account::mock_with_tier(3, "casey@acme.io", Tier::Admin);
        let action = ResolvePrincipalAction::new(
            MockAccountRepository::with_accounts(vec![account]),
            MockRoleRepository::new(),
        );

        let principal = action.execute(identity(3, Tier::Member)).await.unwrap();

        assert_eq!(principal.tier, Tier::Member);
        assert!(!principal.permissions().can_view_budget);
    }

    #[tokio::test]
    async fn test_dangling_role_id_resolves_to_none() {
        let roles = MockRoleRepository::from_catalog();
        let missing_id = roles.list_roles().await.unwrap().len() as i64 + 100;
        let mut account = Account::mock_with_tier(4, "casey@acme.io", Tier::Member);
        account.org_role_id = Some(missing_id);
        let action =
            ResolvePrincipalAction::new(MockAccountRepository::with_accounts(vec![account]), roles);

        let principal = action.execute(identity(4, Tier::Member)).await.unwrap();

        assert_eq!(principal.org_role_name, None);
    }

    #[tokio::test]
    async fn test_missing_account() {
        let action =
            ResolvePrincipalAction::new(MockAccountRepository::new(), MockRoleRepository::new());

        let result = action.execute(identity(42, Tier::Owner)).await;

        assert_eq!(result.unwrap_err(), AccessError::AccountNotFound);
    }
}
