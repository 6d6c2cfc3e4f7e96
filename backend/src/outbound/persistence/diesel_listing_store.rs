//! Diesel-backed [`ListingStore`] adapter.

use async_trait::async_trait;
use diesel::prelude::*;

use crate::domain::ports::{ListingStore, ListingStoreError};
use crate::domain::{Listing, ListingDraft, ListingId, ListingWithSeller, UserId};

use super::diesel_helpers::with_connection;
use super::error_mapping::{map_diesel_error, map_pool_error};
use super::models::{joined_listing, ListingRow, NewListingRow};
use super::pool::{DbPool, PoolError};
use super::schema::{listings, users};

/// Diesel adapter for listing uploads and marketplace reads.
#[derive(Clone)]
pub struct DieselListingStore {
    pool: DbPool,
}

impl DieselListingStore {
    /// Create a new store backed by the given pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn map_pool(error: PoolError) -> ListingStoreError {
    map_pool_error(error, ListingStoreError::connection)
}

fn map_join(message: String) -> ListingStoreError {
    ListingStoreError::query(message)
}

fn map_query(error: diesel::result::Error) -> ListingStoreError {
    map_diesel_error(error, ListingStoreError::query)
}

#[async_trait]
impl ListingStore for DieselListingStore {
    async fn create(
        &self,
        owner: UserId,
        draft: &ListingDraft,
    ) -> Result<ListingId, ListingStoreError> {
        let draft = draft.clone();

        with_connection(self.pool.clone(), map_pool, map_join, move |conn| {
            let id = diesel::insert_into(listings::table)
                .values(NewListingRow {
                    owner_id: owner.value(),
                    title: draft.title(),
                    description: draft.description(),
                    image: draft.image(),
                    contact: draft.contact(),
                    category: draft.category(),
                    price: draft.price(),
                })
                .returning(listings::id)
                .get_result::<i32>(conn)
                .map_err(map_query)?;
            Ok(ListingId::new(id))
        })
        .await
    }

    async fn list(&self, category: Option<&str>) -> Result<Vec<Listing>, ListingStoreError> {
        let category = category.map(str::to_owned);

        with_connection(self.pool.clone(), map_pool, map_join, move |conn| {
            let mut query = listings::table.into_boxed();
            if let Some(category) = category.as_deref() {
                query = query.filter(listings::category.eq(category));
            }
            let rows = query
                .select(ListingRow::as_select())
                .order_by(listings::id)
                .load::<ListingRow>(conn)
                .map_err(map_query)?;
            Ok(rows.into_iter().map(Listing::from).collect())
        })
        .await
    }

    async fn find_with_seller(
        &self,
        id: ListingId,
    ) -> Result<Option<ListingWithSeller>, ListingStoreError> {
        with_connection(self.pool.clone(), map_pool, map_join, move |conn| {
            let row = listings::table
                .inner_join(users::table)
                .filter(listings::id.eq(id.value()))
                .select((ListingRow::as_select(), users::email))
                .first::<(ListingRow, String)>(conn)
                .optional()
                .map_err(map_query)?;
            Ok(row.map(|(listing, email)| joined_listing(listing, email)))
        })
        .await
    }

    async fn list_by_owner(
        &self,
        owner: UserId,
    ) -> Result<Vec<ListingWithSeller>, ListingStoreError> {
        with_connection(self.pool.clone(), map_pool, map_join, move |conn| {
            let rows = listings::table
                .inner_join(users::table)
                .filter(listings::owner_id.eq(owner.value()))
                .select((ListingRow::as_select(), users::email))
                .order_by(listings::id)
                .load::<(ListingRow, String)>(conn)
                .map_err(map_query)?;
            Ok(rows
                .into_iter()
                .map(|(listing, email)| joined_listing(listing, email))
                .collect())
        })
        .await
    }

    async fn availability(&self, id: ListingId) -> Result<Option<bool>, ListingStoreError> {
        with_connection(self.pool.clone(), map_pool, map_join, move |conn| {
            let sold = listings::table
                .find(id.value())
                .select(listings::sold)
                .first::<bool>(conn)
                .optional()
                .map_err(map_query)?;
            Ok(sold.map(|sold| !sold))
        })
        .await
    }
}
