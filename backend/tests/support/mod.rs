//! Shared fixtures for integration tests: a migrated SQLite database in a
//! temporary directory.

use backend::outbound::persistence::{run_migrations, DbPool, PoolConfig};
use tempfile::TempDir;

/// A pooled, migrated database that lives as long as the fixture.
pub struct TestDb {
    pub pool: DbPool,
    _dir: TempDir,
}

/// Create a fresh database file under a temporary directory and apply the
/// embedded migrations.
pub fn test_db() -> TestDb {
    let dir = tempfile::tempdir().expect("temporary directory");
    let path = dir.path().join("marketplace.db");
    let pool = DbPool::new(PoolConfig::new(path.to_string_lossy().as_ref())).expect("pool builds");
    run_migrations(&pool).expect("migrations apply");
    TestDb { pool, _dir: dir }
}
