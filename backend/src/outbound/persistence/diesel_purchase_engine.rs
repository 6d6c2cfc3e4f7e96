//! Diesel-backed [`PurchaseEngine`] adapter — the transactional core.
//!
//! A purchase is one atomic unit: check the listing is unsold, flip its
//! `sold` flag, and insert the transaction row. Any failure rolls the whole
//! unit back, so storage never exposes a transaction row without the sold
//! flag or vice versa.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel::SqliteConnection;
use tracing::{info, warn};

use crate::domain::ports::{PurchaseEngine, PurchaseError};
use crate::domain::{
    generate_confirmation_code, ListingId, PurchaseReceipt, TransactionId, TransactionRecord,
    UserId,
};

use super::diesel_helpers::with_connection;
use super::error_mapping::{is_unique_violation, map_diesel_error, map_pool_error};
use super::models::{ListingRow, NewTransactionRow, TransactionRow};
use super::pool::{DbPool, PoolError};
use super::schema::{listings, transactions};

/// Bounded retries for confirmation-code uniqueness collisions.
const CODE_INSERT_ATTEMPTS: u32 = 3;

/// Diesel adapter executing atomic purchases against SQLite.
#[derive(Clone)]
pub struct DieselPurchaseEngine {
    pool: DbPool,
}

impl DieselPurchaseEngine {
    /// Create a new engine backed by the given pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn map_pool(error: PoolError) -> PurchaseError {
    map_pool_error(error, PurchaseError::connection)
}

fn map_join(message: String) -> PurchaseError {
    PurchaseError::storage(message)
}

/// Failure raised inside the transactional scope. Returning any variant
/// rolls the transaction back.
enum PurchaseTxError {
    NotFound,
    AlreadySold,
    Diesel(diesel::result::Error),
}

impl From<diesel::result::Error> for PurchaseTxError {
    fn from(error: diesel::result::Error) -> Self {
        Self::Diesel(error)
    }
}

fn map_tx_error(error: PurchaseTxError) -> PurchaseError {
    match error {
        PurchaseTxError::NotFound => PurchaseError::item_not_found(),
        PurchaseTxError::AlreadySold => PurchaseError::already_sold(),
        PurchaseTxError::Diesel(err) => map_diesel_error(err, PurchaseError::storage),
    }
}

/// Insert the transaction row, regenerating the confirmation code on a
/// uniqueness collision.
fn insert_sale_row(
    conn: &mut SqliteConnection,
    buyer: UserId,
    listing: &ListingRow,
) -> Result<(i32, String), PurchaseTxError> {
    let mut attempt = 1;
    loop {
        let code = generate_confirmation_code();
        let inserted = diesel::insert_into(transactions::table)
            .values(NewTransactionRow {
                buyer_id: buyer.value(),
                seller_id: listing.owner_id,
                item_id: listing.id,
                price: listing.price,
                confirmation_code: &code,
            })
            .returning(transactions::id)
            .get_result::<i32>(conn);

        match inserted {
            Ok(id) => return Ok((id, code)),
            Err(err) if is_unique_violation(&err) && attempt < CODE_INSERT_ATTEMPTS => {
                warn!(attempt, "confirmation code collision, regenerating");
                attempt += 1;
            }
            Err(err) => return Err(err.into()),
        }
    }
}

#[async_trait]
impl PurchaseEngine for DieselPurchaseEngine {
    async fn purchase(
        &self,
        buyer: UserId,
        item: ListingId,
    ) -> Result<PurchaseReceipt, PurchaseError> {
        let receipt = with_connection(self.pool.clone(), map_pool, map_join, move |conn| {
            // An immediate transaction takes the write lock up front, so
            // concurrent purchases of the same item serialise at BEGIN.
            conn.immediate_transaction::<_, PurchaseTxError, _>(|conn| {
                let listing = listings::table
                    .find(item.value())
                    .select(ListingRow::as_select())
                    .first::<ListingRow>(conn)
                    .optional()?
                    .ok_or(PurchaseTxError::NotFound)?;

                if listing.sold {
                    return Err(PurchaseTxError::AlreadySold);
                }

                // Conditional claim: the affected-row count closes the
                // check-then-set race even under weaker isolation.
                let claimed = diesel::update(
                    listings::table
                        .filter(listings::id.eq(item.value()))
                        .filter(listings::sold.eq(false)),
                )
                .set(listings::sold.eq(true))
                .execute(conn)?;

                if claimed == 0 {
                    return Err(PurchaseTxError::AlreadySold);
                }

                let (transaction_id, confirmation_code) = insert_sale_row(conn, buyer, &listing)?;

                Ok(PurchaseReceipt {
                    transaction_id: TransactionId::new(transaction_id),
                    item_id: item,
                    seller_id: UserId::new(listing.owner_id),
                    price: listing.price,
                    confirmation_code,
                })
            })
            .map_err(map_tx_error)
        })
        .await?;

        info!(
            buyer = %buyer,
            item = %receipt.item_id,
            transaction = %receipt.transaction_id,
            "purchase completed"
        );
        Ok(receipt)
    }

    async fn purchases_by_buyer(
        &self,
        buyer: UserId,
    ) -> Result<Vec<TransactionRecord>, PurchaseError> {
        with_connection(self.pool.clone(), map_pool, map_join, move |conn| {
            let rows = transactions::table
                .filter(transactions::buyer_id.eq(buyer.value()))
                .select(TransactionRow::as_select())
                .order_by(transactions::id)
                .load::<TransactionRow>(conn)
                .map_err(|err| map_diesel_error(err, PurchaseError::storage))?;
            Ok(rows.into_iter().map(TransactionRecord::from).collect())
        })
        .await
    }
}
