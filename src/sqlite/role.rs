use async_trait::async_trait;
use sqlx::{FromRow, SqlitePool};

use super::db_error;
use crate::{AccessError, OrgRole, RoleRepository};

#[derive(Clone)]
pub struct SqliteRoleRepository {
    pool: SqlitePool,
}

impl SqliteRoleRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[derive(FromRow)]
struct RoleRecord {
    id: i64,
    name: String,
}

impl From<RoleRecord> for OrgRole {
    fn from(row: RoleRecord) -> Self {
        OrgRole {
            id: row.id,
            name: row.name,
        }
    }
}

#[async_trait]
impl RoleRepository for SqliteRoleRepository {
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self), err))]
    async fn find_role_by_id(&self, id: i64) -> Result<Option<OrgRole>, AccessError> {
        let row: Option<RoleRecord> = sqlx::query_as("SELECT id, name FROM roles WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| db_error("find_role_by_id", e))?;

        Ok(row.map(Into::into))
    }

    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self), err))]
    async fn find_role_by_name(&self, name: &str) -> Result<Option<OrgRole>, AccessError> {
        // SQLite `=` on TEXT is case-sensitive by default (BINARY collation)
        let row: Option<RoleRecord> = sqlx::query_as("SELECT id, name FROM roles WHERE name = ?")
            .bind(name)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| db_error("find_role_by_name", e))?;

        Ok(row.map(Into::into))
    }

    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self), err))]
    async fn list_roles(&self) -> Result<Vec<OrgRole>, AccessError> {
        let rows: Vec<RoleRecord> = sqlx::query_as("SELECT id, name FROM roles ORDER BY name")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| db_error("list_roles", e))?;

        Ok(rows.into_iter().map(Into::into).collect())
    }
}
