use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::tiers::Tier;
use crate::AccessError;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Account {
    pub id: i64,
    pub name: String,
    pub email: String,
    #[serde(skip_serializing)]
    pub hashed_password: String,
    pub tier: Tier,
    /// Row in the `roles` table, if the account sits on the org chart.
    pub org_role_id: Option<i64>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[cfg(any(test, feature = "mocks"))]
impl Account {
    pub fn mock() -> Self {
        Self::mock_with_tier(1, "member@example.com", Tier::Member)
    }

    pub fn mock_with_tier(id: i64, email: &str, tier: Tier) -> Self {
        let now = Utc::now();
        Account {
            id,
            name: "Test Account".to_owned(),
            email: email.to_owned(),
            hashed_password: "fakehashedpassword".to_owned(),
            tier,
            org_role_id: None,
            created_at: now,
            updated_at: now,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateAccount {
    pub name: String,
    pub email: String,
    pub hashed_password: String,
    pub tier: Tier,
    pub org_role_id: Option<i64>,
}

/// Storage for accounts.
///
/// `create_account` must check and insert atomically: when `data.tier` is a
/// singleton tier that another account already holds, it returns
/// `AccessError::TierTaken` and writes nothing, even under concurrent
/// signups.
#[async_trait]
pub trait AccountRepository: Send + Sync {
    async fn find_account_by_id(&self, id: i64) -> Result<Option<Account>, AccessError>;
    async fn find_account_by_email(&self, email: &str) -> Result<Option<Account>, AccessError>;
    async fn count_accounts_with_tier(&self, tier: Tier) -> Result<u64, AccessError>;
    async fn create_account(&self, data: CreateAccount) -> Result<Account, AccessError>;
    async fn set_org_role(
        &self,
        account_id: i64,
        org_role_id: Option<i64>,
    ) -> Result<Account, AccessError>;
}
