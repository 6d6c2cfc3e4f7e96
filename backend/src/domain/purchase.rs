//! Purchase records and confirmation codes.

use std::fmt;

use rand::rngs::OsRng;
use rand::RngCore;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::{ListingId, UserId};

/// Stable transaction identifier (database row id).
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, ToSchema,
)]
#[serde(transparent)]
pub struct TransactionId(i32);

impl TransactionId {
    /// Wrap a raw row id.
    pub fn new(id: i32) -> Self {
        Self(id)
    }

    /// Raw row id for persistence adapters.
    pub fn value(self) -> i32 {
        self.0
    }
}

impl fmt::Display for TransactionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Number of random bytes in a confirmation code (16 hex characters).
const CONFIRMATION_CODE_BYTES: usize = 8;

/// Generate a fresh confirmation code: 8 CSPRNG bytes, hex-encoded.
///
/// Codes are unique in storage; the purchase engine regenerates on a
/// uniqueness violation.
pub fn generate_confirmation_code() -> String {
    let mut bytes = [0u8; CONFIRMATION_CODE_BYTES];
    OsRng.fill_bytes(&mut bytes);
    hex::encode(bytes)
}

/// Immutable record of one completed sale.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TransactionRecord {
    pub id: TransactionId,
    pub buyer_id: UserId,
    pub seller_id: UserId,
    pub item_id: ListingId,
    /// Price copied at the time of sale; never re-read from the listing.
    pub price: f64,
    pub confirmation_code: String,
}

/// Outcome of a successful purchase, returned to the buyer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PurchaseReceipt {
    pub transaction_id: TransactionId,
    pub item_id: ListingId,
    pub seller_id: UserId,
    pub price: f64,
    pub confirmation_code: String,
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn confirmation_codes_are_sixteen_hex_chars() {
        let code = generate_confirmation_code();
        assert_eq!(code.len(), 16);
        assert!(code.chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn confirmation_codes_do_not_trivially_repeat() {
        let codes: HashSet<String> = (0..64).map(|_| generate_confirmation_code()).collect();
        assert_eq!(codes.len(), 64);
    }
}
