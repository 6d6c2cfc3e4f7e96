//! Translation of port errors into the domain error payload.
//!
//! Handlers are the only layer allowed to decide wire-level semantics, so
//! the expected failure variants become precise codes here and everything
//! unexpected collapses to an internal error (redacted on the way out, full
//! detail logged by the `ResponseError` impl).

use crate::domain::ports::{ListingStoreError, PurchaseError, UserStoreError};
use crate::domain::Error;

pub(crate) fn map_user_store_error(error: UserStoreError) -> Error {
    match error {
        UserStoreError::DuplicateEmail => Error::conflict("Email is already registered"),
        UserStoreError::Connection { message } | UserStoreError::Query { message } => {
            Error::internal(message)
        }
    }
}

pub(crate) fn map_listing_store_error(error: ListingStoreError) -> Error {
    match error {
        ListingStoreError::Connection { message } | ListingStoreError::Query { message } => {
            Error::internal(message)
        }
    }
}

pub(crate) fn map_purchase_error(error: PurchaseError) -> Error {
    match error {
        PurchaseError::ItemNotFound => Error::not_found("Item not found"),
        PurchaseError::AlreadySold => Error::conflict("Item is already sold"),
        PurchaseError::Connection { message } | PurchaseError::Storage { message } => {
            Error::internal(message)
        }
    }
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.
    use super::*;
    use crate::domain::ErrorCode;
    use rstest::rstest;

    #[rstest]
    fn duplicate_email_is_a_conflict() {
        let err = map_user_store_error(UserStoreError::duplicate_email());
        assert_eq!(err.code(), ErrorCode::Conflict);
    }

    #[rstest]
    fn purchase_outcomes_use_precise_codes() {
        assert_eq!(
            map_purchase_error(PurchaseError::item_not_found()).code(),
            ErrorCode::NotFound
        );
        assert_eq!(
            map_purchase_error(PurchaseError::already_sold()).code(),
            ErrorCode::Conflict
        );
        assert_eq!(
            map_purchase_error(PurchaseError::storage("boom")).code(),
            ErrorCode::InternalError
        );
    }

    #[rstest]
    fn storage_failures_collapse_to_internal() {
        let err = map_listing_store_error(ListingStoreError::query("boom"));
        assert_eq!(err.code(), ErrorCode::InternalError);
    }
}
