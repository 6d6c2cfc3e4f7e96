//! Blocking-thread bridge shared by the Diesel adapters.

use diesel::SqliteConnection;

use super::pool::{DbPool, PoolError};

/// Run a Diesel closure against a pooled connection on the blocking thread
/// pool.
///
/// `map_pool` translates checkout failures and `map_join` translates a
/// cancelled or panicked blocking task into the adapter's error type.
pub(crate) async fn with_connection<T, E, F>(
    pool: DbPool,
    map_pool: fn(PoolError) -> E,
    map_join: fn(String) -> E,
    f: F,
) -> Result<T, E>
where
    F: FnOnce(&mut SqliteConnection) -> Result<T, E> + Send + 'static,
    T: Send + 'static,
    E: Send + 'static,
{
    tokio::task::spawn_blocking(move || {
        let mut conn = pool.get().map_err(map_pool)?;
        f(&mut conn)
    })
    .await
    .map_err(|err| map_join(err.to_string()))?
}
