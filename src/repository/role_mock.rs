use std::sync::{Arc, PoisonError, RwLock};

use async_trait::async_trait;

use super::role::{OrgRole, RoleRepository};
use crate::catalog;
use crate::AccessError;

/// In-memory roles table. Clones share the same storage.
#[derive(Clone, Default)]
pub struct MockRoleRepository {
    roles: Arc<RwLock<Vec<OrgRole>>>,
}

impl MockRoleRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// One row per catalog role, ids assigned in sorted order from 1.
    pub fn from_catalog() -> Self {
        let roles = catalog::list_all_roles()
            .into_iter()
            .zip(1..)
            .map(|(name, id)| OrgRole {
                id,
                name: name.to_owned(),
            })
            .collect();

        Self {
            roles: Arc::new(RwLock::new(roles)),
        }
    }

    /// Adds a row outside the catalog, for legacy data.
    pub fn insert(&self, name: &str) -> OrgRole {
        let mut roles = self.roles.write().unwrap_or_else(PoisonError::into_inner);
        let role = OrgRole {
            id: roles.iter().map(|r| r.id).max().unwrap_or(0) + 1,
            name: name.to_owned(),
        };
        roles.push(role.clone());
        role
    }
}

fn poisoned<T>(_: T) -> AccessError {
    AccessError::Internal("lock poisoned".into())
}

#[async_trait]
impl RoleRepository for MockRoleRepository {
    async fn find_role_by_id(&self, id: i64) -> Result<Option<OrgRole>, AccessError> {
        let roles = self.roles.read().map_err(poisoned)?;
        Ok(roles.iter().find(|r| r.id == id).cloned())
    }

    async fn find_role_by_name(&self, name: &str) -> Result<Option<OrgRole>, AccessError> {
        let roles = self.roles.read().map_err(poisoned)?;
        Ok(roles.iter().find(|r| r.name == name).cloned())
    }

    async fn list_roles(&self) -> Result<Vec<OrgRole>, AccessError> {
        let roles = self.roles.read().map_err(poisoned)?;
        Ok(roles.clone())
    }
}
