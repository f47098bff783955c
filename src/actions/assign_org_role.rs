use serde::Deserialize;

use crate::permissions::{Permission, Principal};
use crate::validators::validate_org_role_name;
use crate::{AccessError, Account, AccountRepository, RoleRepository};

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssignOrgRoleInput {
    pub account_id: i64,
    /// Must match a catalog role exactly, including case.
    pub role_name: String,
}

/// Places an account on the org chart.
///
/// Gated on [`Permission::AddTeam`], so owners, admins and members holding
/// HR Manager or Project Manager may assign roles. Changing an org role
/// never changes the stored tier.
pub struct AssignOrgRoleAction<A, R>
where
    A: AccountRepository,
    R: RoleRepository,
{
    accounts: A,
    roles: R,
}

impl<A: AccountRepository, R: RoleRepository> AssignOrgRoleAction<A, R> {
    pub fn new(accounts: A, roles: R) -> Self {
        Self { accounts, roles }
    }

    /// # Returns
    ///
    /// - `Ok(account)` - The updated account
    /// - `Err(AccessError::Forbidden)` - Actor may not manage the team
    /// - `Err(AccessError::Validation(_))` - Role name is not in the catalog
    /// - `Err(AccessError::RoleNotFound)` - Role is not stored
    /// - `Err(AccessError::AccountNotFound)` - Target account does not exist
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(name = "assign_org_role", skip_all, err)
    )]
    pub async fn execute(
        &self,
        actor: &Principal,
        input: AssignOrgRoleInput,
    ) -> Result<Account, AccessError> {
        actor.require(Permission::AddTeam)?;
        validate_org_role_name(&input.role_name)?;

        let role = self
            .roles
            .find_role_by_name(&input.role_name)
            .await?
            .ok_or(AccessError::RoleNotFound)?;

        let account = self
            .accounts
            .set_org_role(input.account_id, Some(role.id))
            .await?;

        log::info!(
            target: "tierwise",
            "msg=\"org role assigned\", actor_id={}, account_id={}, role=\"{}\"",
            actor.user_id,
            account.id,
            role.name
        );

        Ok(account)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tiers::Tier;
    use crate::validators::ValidationError;
    use crate::{MockAccountRepository, MockRoleRepository};

    fn setup() -> AssignOrgRoleAction<MockAccountRepository, MockRoleRepository> {
        let accounts = MockAccountRepository::with_accounts(vec![Account::mock_with_tier(
            10,
            "new.hire@acme.io",
            Tier::Member,
        )]);
        AssignOrgRoleAction::new(accounts, MockRoleRepository::from_catalog())
    }

    fn assign(role_name: &str) -> AssignOrgRoleInput {
        AssignOrgRoleInput {
            account_id: 10,
            role_name: role_name.to_owned(),
        }
    }

    #[tokio::test]
    async fn test_hr_manager_member_can_assign() {
        let action = setup();
        let hr = Principal::new(1, "hr@acme.io", "HR", Tier::Member).with_org_role("HR Manager");

        let account = action.execute(&hr, assign("QA Tester")).await.unwrap();

        let stored = action.roles.find_role_by_name("QA Tester").await.unwrap().unwrap();
        assert_eq!(account.org_role_id, Some(stored.id));
        assert_eq!(account.tier, Tier::Member);
    }

    #[tokio::test]
    async fn test_plain_member_is_forbidden() {
        let action = setup();
        let dev = Principal::new(2, "dev@acme.io", "Dev", Tier::Member)
            .with_org_role("Frontend Developer");

        let result = action.execute(&dev, assign("QA Tester")).await;

        assert_eq!(result.unwrap_err(), AccessError::Forbidden);
    }

    #[tokio::test]
    async fn test_wrong_case_role_is_rejected() {
        let action = setup();
        let owner = Principal::new(3, "owner@acme.io", "Owner", Tier::Owner);

        let result = action.execute(&owner, assign("qa tester")).await;

        assert_eq!(
            result.unwrap_err(),
            AccessError::Validation(ValidationError::OrgRoleUnknown("qa tester".to_owned()))
        );
    }

    #[tokio::test]
    async fn test_unknown_account() {
        let action = setup();
        let admin = Principal::new(4, "admin@acme.io", "Admin", Tier::Admin);

        let result = action
            .execute(
                &admin,
                AssignOrgRoleInput {
                    account_id: 999,
                    role_name: "Recruiter".to_owned(),
                },
            )
            .await;

        assert_eq!(result.unwrap_err(), AccessError::AccountNotFound);
    }
}
