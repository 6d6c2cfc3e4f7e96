//! Driving port for the purchase use-case.
//!
//! In hexagonal terms this is a *driving* port: the HTTP adapter calls it to
//! execute a sale without knowing the backing infrastructure, and tests can
//! substitute a double instead of wiring persistence.

use async_trait::async_trait;

use crate::domain::{ListingId, PurchaseReceipt, TransactionRecord, UserId};

use super::define_port_error;

define_port_error! {
    /// Failures raised by purchase engine adapters.
    ///
    /// `ItemNotFound` and `AlreadySold` are expected, user-facing outcomes;
    /// the storage variants signal unexpected infrastructure failures after
    /// which the whole unit has been rolled back.
    pub enum PurchaseError {
        /// No listing exists with the requested id.
        ItemNotFound => "item not found",
        /// The listing was already the subject of a successful sale.
        AlreadySold => "item is already sold",
        /// Store connection could not be established.
        Connection { message: String } => "purchase engine connection failed: {message}",
        /// The transactional unit failed and was rolled back.
        Storage { message: String } => "purchase failed: {message}",
    }
}

/// Domain use-case port for executing and inspecting sales.
#[async_trait]
pub trait PurchaseEngine: Send + Sync {
    /// Atomically record a sale of `item` to `buyer`.
    ///
    /// Seller and price are derived from the authoritative listing row, never
    /// from the caller. Exactly one concurrent purchase of the same item can
    /// succeed; the rest observe [`PurchaseError::AlreadySold`]. The engine
    /// makes at most one attempt; retrying is the caller's decision.
    async fn purchase(
        &self,
        buyer: UserId,
        item: ListingId,
    ) -> Result<PurchaseReceipt, PurchaseError>;

    /// Immutable purchase history for one buyer, for the account view.
    async fn purchases_by_buyer(
        &self,
        buyer: UserId,
    ) -> Result<Vec<TransactionRecord>, PurchaseError>;
}
