//! Domain ports and supporting types for the hexagonal boundary.

mod macros;
pub(crate) use macros::define_port_error;

mod listing_store;
mod purchase_engine;
mod user_store;

pub use self::listing_store::{ListingStore, ListingStoreError};
pub use self::purchase_engine::{PurchaseEngine, PurchaseError};
pub use self::user_store::{UserStore, UserStoreError};
