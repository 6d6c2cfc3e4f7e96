//! Shared Diesel error mapping for the marketplace adapters.

use tracing::debug;

use super::pool::PoolError;

/// Map pool errors into an adapter-specific connection error constructor.
pub(crate) fn map_pool_error<E, C>(error: PoolError, connection: C) -> E
where
    C: FnOnce(String) -> E,
{
    let message = match error {
        PoolError::Checkout { message } | PoolError::Build { message } => message,
    };
    connection(message)
}

/// Map common Diesel error variants into a query error constructor.
///
/// The full error is logged at debug level; only a stable description
/// crosses the port boundary.
pub(crate) fn map_diesel_error<E, Q>(error: diesel::result::Error, query: Q) -> E
where
    Q: FnOnce(&'static str) -> E,
{
    use diesel::result::Error as DieselError;

    match &error {
        DieselError::DatabaseError(kind, info) => {
            debug!(?kind, message = info.message(), "diesel operation failed");
        }
        other => debug!(error = %other, "diesel operation failed"),
    }

    match error {
        DieselError::NotFound => query("record not found"),
        DieselError::QueryBuilderError(_) => query("database query error"),
        _ => query("database error"),
    }
}

/// Whether the error is a unique-constraint violation (duplicate email,
/// confirmation-code collision).
pub(crate) fn is_unique_violation(error: &diesel::result::Error) -> bool {
    use diesel::result::{DatabaseErrorKind, Error as DieselError};

    matches!(
        error,
        DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, _)
    )
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.
    use super::*;
    use diesel::result::{DatabaseErrorKind, Error as DieselError};

    fn unique_violation() -> DieselError {
        DieselError::DatabaseError(
            DatabaseErrorKind::UniqueViolation,
            Box::new("UNIQUE constraint failed: users.email".to_owned()),
        )
    }

    #[test]
    fn detects_unique_violations() {
        assert!(is_unique_violation(&unique_violation()));
        assert!(!is_unique_violation(&DieselError::NotFound));
    }

    #[test]
    fn maps_not_found_to_query_error() {
        let mapped: String = map_diesel_error(DieselError::NotFound, |msg| msg.to_owned());
        assert_eq!(mapped, "record not found");
    }

    #[test]
    fn maps_pool_errors_to_connection_error() {
        let mapped: String = map_pool_error(PoolError::checkout("timed out"), |msg| msg);
        assert_eq!(mapped, "timed out");
    }
}
