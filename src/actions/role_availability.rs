use serde::Serialize;

use crate::tiers::Tier;
use crate::{AccessError, AccountRepository};

/// Which singleton tiers are already held. Drives the signup form, which
/// disables the owner and admin choices once taken.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RoleAvailability {
    pub owner_exists: bool,
    pub admin_exists: bool,
}

impl RoleAvailability {
    pub fn is_available(&self, tier: Tier) -> bool {
        match tier {
            Tier::Owner => !self.owner_exists,
            Tier::Admin => !self.admin_exists,
            Tier::Member => true,
        }
    }
}

pub struct RoleAvailabilityAction<A: AccountRepository> {
    accounts: A,
}

impl<A: AccountRepository> RoleAvailabilityAction<A> {
    pub fn new(accounts: A) -> Self {
        Self { accounts }
    }

    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(name = "role_availability", skip_all, err)
    )]
    pub async fn execute(&self) -> Result<RoleAvailability, AccessError> {
        let owners = self.accounts.count_accounts_with_tier(Tier::Owner).await?;
        let admins = self.accounts.count_accounts_with_tier(Tier::Admin).await?;

        Ok(RoleAvailability {
            owner_exists: owners > 0,
            admin_exists: admins > 0,
        })
    }
}
