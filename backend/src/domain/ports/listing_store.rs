//! Port abstraction for listing persistence adapters and their errors.
use async_trait::async_trait;

use crate::domain::{Listing, ListingDraft, ListingId, ListingWithSeller, UserId};

use super::define_port_error;

define_port_error! {
    /// Persistence errors raised by listing store adapters.
    pub enum ListingStoreError {
        /// Store connection could not be established.
        Connection { message: String } => "listing store connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } => "listing store query failed: {message}",
    }
}

/// Persistence port for marketplace listings.
///
/// The sold flag is intentionally absent from this port's mutations: it only
/// flips inside the purchase engine's transactional scope, where the
/// check-then-set sequence stays atomic.
#[async_trait]
pub trait ListingStore: Send + Sync {
    /// Insert a new listing owned by `owner` and return its id.
    async fn create(
        &self,
        owner: UserId,
        draft: &ListingDraft,
    ) -> Result<ListingId, ListingStoreError>;

    /// All listings, optionally restricted to one category (exact match).
    async fn list(&self, category: Option<&str>) -> Result<Vec<Listing>, ListingStoreError>;

    /// Detail fetch joining the seller's email, for "sold by" displays.
    async fn find_with_seller(
        &self,
        id: ListingId,
    ) -> Result<Option<ListingWithSeller>, ListingStoreError>;

    /// All listings owned by one user, in the same joined shape as
    /// [`ListingStore::find_with_seller`].
    async fn list_by_owner(
        &self,
        owner: UserId,
    ) -> Result<Vec<ListingWithSeller>, ListingStoreError>;

    /// Whether the listing exists and is still unsold. `None` when the
    /// listing does not exist.
    async fn availability(&self, id: ListingId) -> Result<Option<bool>, ListingStoreError>;
}
