use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, SqlitePool};

use super::db_error;
use crate::tiers::Tier;
use crate::{AccessError, Account, AccountRepository, CreateAccount};

const ACCOUNT_COLUMNS: &str =
    "id, name, email, hashed_password, tier, org_role_id, created_at, updated_at";

/// Accounts in the `users` table.
///
/// Singleton tiers are guarded twice: a count inside the insert transaction,
/// and the `idx_users_singleton_tier` partial unique index for inserts that
/// race past the count.
#[derive(Clone)]
pub struct SqliteAccountRepository {
    pool: SqlitePool,
}

impl SqliteAccountRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[derive(FromRow)]
struct AccountRecord {
    id: i64,
    name: String,
    email: String,
    hashed_password: String,
    tier: String,
    org_role_id: Option<i64>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl From<AccountRecord> for Account {
    fn from(row: AccountRecord) -> Self {
        let tier = Tier::parse(&row.tier).unwrap_or_else(|| {
            log::warn!(
                target: "tierwise",
                "msg=\"unrecognized stored tier\", account_id={}, tier=\"{}\"",
                row.id,
                row.tier
            );
            Tier::Member
        });

        Account {
            id: row.id,
            name: row.name,
            email: row.email,
            hashed_password: row.hashed_password,
            tier,
            org_role_id: row.org_role_id,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

fn insert_error(e: sqlx::Error, tier: Tier) -> AccessError {
    if let sqlx::Error::Database(ref db) = e {
        if db.is_unique_violation() {
            return if db.message().contains("users.email") {
                AccessError::AccountAlreadyExists
            } else {
                AccessError::TierTaken(tier)
            };
        }
    }
    db_error("create_account", e)
}

#[async_trait]
impl AccountRepository for SqliteAccountRepository {
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self), err))]
    async fn find_account_by_id(&self, id: i64) -> Result<Option<Account>, AccessError> {
        let row: Option<AccountRecord> =
            sqlx::query_as(&format!("SELECT {ACCOUNT_COLUMNS} FROM users WHERE id = ?"))
                .bind(id)
                .fetch_optional(&self.pool)
                .await
                .map_err(|e| db_error("find_account_by_id", e))?;

        Ok(row.map(Into::into))
    }

    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self, email), err))]
    async fn find_account_by_email(&self, email: &str) -> Result<Option<Account>, AccessError> {
        let row: Option<AccountRecord> =
            sqlx::query_as(&format!("SELECT {ACCOUNT_COLUMNS} FROM users WHERE email = ?"))
                .bind(email)
                .fetch_optional(&self.pool)
                .await
                .map_err(|e| db_error("find_account_by_email", e))?;

        Ok(row.map(Into::into))
    }

    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self), err))]
    async fn count_accounts_with_tier(&self, tier: Tier) -> Result<u64, AccessError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM users WHERE tier = ?")
            .bind(tier.as_str())
            .fetch_one(&self.pool)
            .await
            .map_err(|e| db_error("count_accounts_with_tier", e))?;

        Ok(u64::try_from(count).unwrap_or(0))
    }

    #[cfg_attr(feature = "tracing", tracing::instrument(skip_all, err))]
    async fn create_account(&self, data: CreateAccount) -> Result<Account, AccessError> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| db_error("create_account", e))?;

        if data.tier.is_singleton() {
            let held: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM users WHERE tier = ?")
                .bind(data.tier.as_str())
                .fetch_one(&mut *tx)
                .await
                .map_err(|e| db_error("create_account", e))?;
            if held > 0 {
                return Err(AccessError::TierTaken(data.tier));
            }
        }

        let now = Utc::now();
        let row: AccountRecord = sqlx::query_as(&format!(
            "INSERT INTO users (name, email, hashed_password, tier, org_role_id, created_at, updated_at) \
             VALUES (?, ?, ?, ?, ?, ?, ?) RETURNING {ACCOUNT_COLUMNS}"
        ))
        .bind(&data.name)
        .bind(&data.email)
        .bind(&data.hashed_password)
        .bind(data.tier.as_str())
        .bind(data.org_role_id)
        .bind(now)
        .bind(now)
        .fetch_one(&mut *tx)
        .await
        .map_err(|e| insert_error(e, data.tier))?;

        tx.commit()
            .await
            .map_err(|e| insert_error(e, data.tier))?;

        Ok(row.into())
    }

    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self), err))]
    async fn set_org_role(
        &self,
        account_id: i64,
        org_role_id: Option<i64>,
    ) -> Result<Account, AccessError> {
        let row: AccountRecord = sqlx::query_as(&format!(
            "UPDATE users SET org_role_id = ?, updated_at = ? WHERE id = ? RETURNING {ACCOUNT_COLUMNS}"
        ))
        .bind(org_role_id)
        .bind(Utc::now())
        .bind(account_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match e {
            sqlx::Error::RowNotFound => AccessError::AccountNotFound,
            _ => db_error("set_org_role", e),
        })?;

        Ok(row.into())
    }
}
