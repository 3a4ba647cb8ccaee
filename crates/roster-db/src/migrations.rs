//! # Schema Bootstrap
//!
//! The schema ships inside the binary as one embedded SQL script.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Bootstrap on Connect                               │
//! │                                                                         │
//! │  Database::new(config)                                                 │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  _sqlx_migrations present?                                             │
//! │       ├── no  → create it, run 001_initial_schema.sql                  │
//! │       └── yes → checksum matches? nothing to do                        │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  department / role / employee ready                                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! There is no upgrade or rollback path. The script is the whole schema.

use sqlx::SqlitePool;
use tracing::debug;

use crate::error::DbResult;

/// Embedded schema from `migrations/sqlite`.
///
/// `sqlx::migrate!()` reads the directory at compile time, so the binary
/// needs no SQL files at runtime.
static MIGRATOR: sqlx::migrate::Migrator = sqlx::migrate!("../../migrations/sqlite");

/// Applies the embedded schema if it has not been applied yet.
///
/// Safe to call on every startup.
pub async fn run_migrations(pool: &SqlitePool) -> DbResult<()> {
    debug!(scripts = MIGRATOR.migrations.len(), "Applying embedded schema");

    MIGRATOR.run(pool).await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use crate::pool::{Database, DbConfig};

    #[tokio::test]
    async fn test_schema_tables_exist() {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();

        let tables: Vec<String> = sqlx::query_scalar(
            "SELECT name FROM sqlite_master WHERE type = 'table' AND name IN ('department', 'role', 'employee') ORDER BY name",
        )
        .fetch_all(db.pool())
        .await
        .unwrap();

        assert_eq!(tables, vec!["department", "employee", "role"]);
    }

    #[tokio::test]
    async fn test_bootstrap_is_idempotent() {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();

        db.run_migrations().await.unwrap();
        db.run_migrations().await.unwrap();

        assert_eq!(db.departments().count().await.unwrap(), 0);
    }
}
