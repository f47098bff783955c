use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::AccessError;

/// A row of the `roles` table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrgRole {
    pub id: i64,
    pub name: String,
}

#[async_trait]
pub trait RoleRepository: Send + Sync {
    async fn find_role_by_id(&self, id: i64) -> Result<Option<OrgRole>, AccessError>;
    /// Exact, case-sensitive lookup.
    async fn find_role_by_name(&self, name: &str) -> Result<Option<OrgRole>, AccessError>;
    async fn list_roles(&self) -> Result<Vec<OrgRole>, AccessError>;
}
