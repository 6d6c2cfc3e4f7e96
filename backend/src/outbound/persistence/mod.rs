//! Diesel persistence adapters for the marketplace ports.

mod diesel_helpers;
mod diesel_listing_store;
mod diesel_purchase_engine;
mod diesel_user_store;
mod error_mapping;
mod models;
mod pool;
pub(crate) mod schema;

pub use diesel_listing_store::DieselListingStore;
pub use diesel_purchase_engine::DieselPurchaseEngine;
pub use diesel_user_store::DieselUserStore;
pub use pool::{DbPool, PoolConfig, PoolError};

use diesel_migrations::{embed_migrations, EmbeddedMigrations, MigrationHarness};

/// Embedded schema migrations, applied at startup and by test fixtures.
pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!();

/// Run any pending migrations against a pooled connection.
///
/// # Errors
///
/// Returns [`PoolError`] when no connection can be checked out, or a build
/// error describing the failed migration.
pub fn run_migrations(pool: &DbPool) -> Result<(), PoolError> {
    let mut conn = pool.get()?;
    conn.run_pending_migrations(MIGRATIONS)
        .map(|_| ())
        .map_err(|err| PoolError::build(err.to_string()))
}
