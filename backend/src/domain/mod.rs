//! Domain primitives and aggregates.
//!
//! Purpose: define strongly typed marketplace entities used by the HTTP and
//! persistence layers. Types are immutable once constructed; invariants and
//! serialisation contracts live in each type's Rustdoc.
//!
//! Public surface:
//! - `Error`/`ErrorCode` — transport-agnostic failure payload.
//! - `User`/`Credentials` — identity and validated login/registration input.
//! - `Listing`/`ListingDraft` — sellable items and validated upload input.
//! - `TransactionRecord`/`PurchaseReceipt` — immutable sale outcomes.
//! - `SessionRegistry` — process-lifetime bearer-token sessions.

pub mod error;
pub mod listing;
pub mod ports;
pub mod purchase;
pub mod session;
pub mod user;

pub use self::error::{Error, ErrorCode};
pub use self::listing::{
    Listing, ListingDraft, ListingId, ListingValidationError, ListingWithSeller,
};
pub use self::purchase::{
    generate_confirmation_code, PurchaseReceipt, TransactionId, TransactionRecord,
};
pub use self::session::SessionRegistry;
pub use self::user::{Credentials, CredentialsValidationError, User, UserId, UserProfile};

/// Convenient API result alias.
///
/// # Examples
/// ```
/// use actix_web::HttpResponse;
/// use backend::domain::{ApiResult, Error};
///
/// fn handler() -> ApiResult<HttpResponse> {
///     Err(Error::not_found("nope"))
/// }
/// ```
pub type ApiResult<T> = Result<T, Error>;
