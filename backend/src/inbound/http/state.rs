//! Shared HTTP adapter state.
//!
//! HTTP handlers accept this state via `actix_web::web::Data` so they only
//! depend on domain ports and remain testable without I/O.

use std::sync::Arc;

use crate::domain::ports::{ListingStore, PurchaseEngine, UserStore};

/// Dependency bundle for HTTP handlers.
///
/// The session registry travels separately as its own `web::Data` entry
/// because the session extractor needs it before any handler runs.
#[derive(Clone)]
pub struct HttpState {
    pub users: Arc<dyn UserStore>,
    pub listings: Arc<dyn ListingStore>,
    pub purchases: Arc<dyn PurchaseEngine>,
}

impl HttpState {
    /// Bundle the port implementations used by the handlers.
    pub fn new(
        users: Arc<dyn UserStore>,
        listings: Arc<dyn ListingStore>,
        purchases: Arc<dyn PurchaseEngine>,
    ) -> Self {
        Self {
            users,
            listings,
            purchases,
        }
    }
}
