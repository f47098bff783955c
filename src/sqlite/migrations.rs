//! Embedded `SQLite` migrations and catalog seeding.
//!
//! ```rust,ignore
//! use tierwise::sqlite::migrations;
//!
//! migrations::run(&pool).await?;
//! migrations::seed_roles(&pool).await?;
//! ```

use sqlx::{Executor, SqlitePool};

use crate::catalog;

const CORE_MIGRATIONS: &[(&str, &str)] = &[
    (
        "20250301000001_create_roles_table",
        include_str!("../../migrations_sqlite/core/20250301000001_create_roles_table.sql"),
    ),
    (
        "20250301000002_create_users_table",
        include_str!("../../migrations_sqlite/core/20250301000002_create_users_table.sql"),
    ),
];

/// Applies pending migrations, tracked in `_tierwise_migrations`.
pub async fn run(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    pool.execute(
        r"
        CREATE TABLE IF NOT EXISTS _tierwise_migrations (
            name TEXT PRIMARY KEY,
            applied_at TEXT NOT NULL DEFAULT (strftime('%Y-%m-%dT%H:%M:%fZ', 'now'))
        )
        ",
    )
    .await?;

    for (name, sql) in CORE_MIGRATIONS {
        let applied: bool =
            sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM _tierwise_migrations WHERE name = ?)")
                .bind(*name)
                .fetch_one(pool)
                .await?;
        if applied {
            continue;
        }

        // statements are split on ';', so migrations must not use it inside literals
        for statement in sql.split(';') {
            let trimmed = statement.trim();
            if !trimmed.is_empty() {
                pool.execute(trimmed).await?;
            }
        }

        sqlx::query("INSERT INTO _tierwise_migrations (name) VALUES (?)")
            .bind(*name)
            .execute(pool)
            .await?;
        log::info!(target: "tierwise", "msg=\"migration applied\", name=\"{name}\"");
    }

    Ok(())
}

/// Inserts every catalog role into `roles`, skipping names already present.
///
/// Returns the number of rows inserted.
pub async fn seed_roles(pool: &SqlitePool) -> Result<u64, sqlx::Error> {
    let mut tx = pool.begin().await?;
    let mut inserted = 0;

    for name in catalog::list_all_roles() {
        inserted += sqlx::query("INSERT OR IGNORE INTO roles (name) VALUES (?)")
            .bind(name)
            .execute(&mut *tx)
            .await?
            .rows_affected();
    }

    tx.commit().await?;
    Ok(inserted)
}
