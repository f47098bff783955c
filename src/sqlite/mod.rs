//! `SQLite` implementations of the repository traits.
//!
//! Enable the `sqlx_sqlite` feature to use these.

mod account;
pub mod migrations;
mod role;

pub use account::SqliteAccountRepository;
pub use role::SqliteRoleRepository;

use sqlx::SqlitePool;

use crate::AccessError;

/// Creates both repositories over one pool.
pub fn create_repositories(pool: SqlitePool) -> (SqliteAccountRepository, SqliteRoleRepository) {
    (
        SqliteAccountRepository::new(pool.clone()),
        SqliteRoleRepository::new(pool),
    )
}

fn db_error(operation: &str, e: sqlx::Error) -> AccessError {
    log::error!(
        target: "tierwise",
        "msg=\"database error\", operation=\"{operation}\", error=\"{e}\""
    );
    AccessError::DatabaseError(e.to_string())
}
