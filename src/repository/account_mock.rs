use std::collections::HashMap;
use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::{Arc, RwLock};

use async_trait::async_trait;
use chrono::Utc;

use super::account::{Account, AccountRepository, CreateAccount};
use crate::tiers::Tier;
use crate::AccessError;

/// In-memory accounts. Clones share the same storage.
#[derive(Clone)]
pub struct MockAccountRepository {
    accounts: Arc<RwLock<HashMap<i64, Account>>>,
    next_id: Arc<AtomicI64>,
}

impl MockAccountRepository {
    pub fn new() -> Self {
        Self {
            accounts: Arc::new(RwLock::new(HashMap::new())),
            next_id: Arc::new(AtomicI64::new(1)),
        }
    }

    pub fn with_accounts(accounts: Vec<Account>) -> Self {
        let next = accounts.iter().map(|a| a.id).max().unwrap_or(0) + 1;
        Self {
            accounts: Arc::new(RwLock::new(accounts.into_iter().map(|a| (a.id, a)).collect())),
            next_id: Arc::new(AtomicI64::new(next)),
        }
    }
}

impl Default for MockAccountRepository {
    fn default() -> Self {
        Self::new()
    }
}

fn poisoned<T>(_: T) -> AccessError {
    AccessError::Internal("lock poisoned".into())
}

#[async_trait]
impl AccountRepository for MockAccountRepository {
    async fn find_account_by_id(&self, id: i64) -> Result<Option<Account>, AccessError> {
        let accounts = self.accounts.read().map_err(poisoned)?;
        Ok(accounts.get(&id).cloned())
    }

    async fn find_account_by_email(&self, email: &str) -> Result<Option<Account>, AccessError> {
        let accounts = self.accounts.read().map_err(poisoned)?;
        Ok(accounts.values().find(|a| a.email == email).cloned())
    }

    async fn count_accounts_with_tier(&self, tier: Tier) -> Result<u64, AccessError> {
        let accounts = self.accounts.read().map_err(poisoned)?;
        Ok(accounts.values().filter(|a| a.tier == tier).count() as u64)
    }

    async fn create_account(&self, data: CreateAccount) -> Result<Account, AccessError> {
        // one write guard covers both checks and the insert
        let mut accounts = self.accounts.write().map_err(poisoned)?;

        if accounts.values().any(|a| a.email == data.email) {
            return Err(AccessError::AccountAlreadyExists);
        }
        if data.tier.is_singleton() && accounts.values().any(|a| a.tier == data.tier) {
            return Err(AccessError::TierTaken(data.tier));
        }

        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        let now = Utc::now();
        let account = Account {
            id,
            name: data.name,
            email: data.email,
            hashed_password: data.hashed_password,
            tier: data.tier,
            org_role_id: data.org_role_id,
            created_at: now,
            updated_at: now,
        };
        accounts.insert(id, account.clone());

        Ok(account)
    }

    async fn set_org_role(
        &self,
        account_id: i64,
        org_role_id: Option<i64>,
    ) -> Result<Account, AccessError> {
        let mut accounts = self.accounts.write().map_err(poisoned)?;
        let account = accounts
            .get_mut(&account_id)
            .ok_or(AccessError::AccountNotFound)?;

        account.org_role_id = org_role_id;
        account.updated_at = Utc::now();

        Ok(account.clone())
    }
}
