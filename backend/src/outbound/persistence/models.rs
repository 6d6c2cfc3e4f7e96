//! Diesel row models bridging the schema and domain types.

use diesel::prelude::*;

use crate::domain::{
    Listing, ListingId, ListingWithSeller, TransactionId, TransactionRecord, User, UserId,
};

use super::schema::{listings, transactions, users};

/// Queryable row for user accounts.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = users)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub(crate) struct UserRow {
    pub id: i32,
    pub email: String,
    pub password: String,
}

impl From<UserRow> for User {
    fn from(row: UserRow) -> Self {
        Self {
            id: UserId::new(row.id),
            email: row.email,
            password: row.password,
        }
    }
}

/// Insertable row for user registration.
#[derive(Debug, Insertable)]
#[diesel(table_name = users)]
pub(crate) struct NewUserRow<'a> {
    pub email: &'a str,
    pub password: &'a str,
}

/// Queryable row for listings.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = listings)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub(crate) struct ListingRow {
    pub id: i32,
    pub owner_id: i32,
    pub title: String,
    pub description: String,
    pub image: String,
    pub contact: String,
    pub category: String,
    pub price: f64,
    pub sold: bool,
}

impl From<ListingRow> for Listing {
    fn from(row: ListingRow) -> Self {
        Self {
            id: ListingId::new(row.id),
            owner_id: UserId::new(row.owner_id),
            title: row.title,
            description: row.description,
            image: row.image,
            contact: row.contact,
            category: row.category,
            price: row.price,
            sold: row.sold,
        }
    }
}

pub(crate) fn joined_listing(row: ListingRow, seller_email: String) -> ListingWithSeller {
    ListingWithSeller {
        listing: row.into(),
        seller_email,
    }
}

/// Insertable row for listing uploads.
#[derive(Debug, Insertable)]
#[diesel(table_name = listings)]
pub(crate) struct NewListingRow<'a> {
    pub owner_id: i32,
    pub title: &'a str,
    pub description: &'a str,
    pub image: &'a str,
    pub contact: &'a str,
    pub category: &'a str,
    pub price: f64,
}

/// Queryable row for completed sales.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = transactions)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub(crate) struct TransactionRow {
    pub id: i32,
    pub buyer_id: i32,
    pub seller_id: i32,
    pub item_id: i32,
    pub price: f64,
    pub confirmation_code: String,
}

impl From<TransactionRow> for TransactionRecord {
    fn from(row: TransactionRow) -> Self {
        Self {
            id: TransactionId::new(row.id),
            buyer_id: UserId::new(row.buyer_id),
            seller_id: UserId::new(row.seller_id),
            item_id: ListingId::new(row.item_id),
            price: row.price,
            confirmation_code: row.confirmation_code,
        }
    }
}

/// Insertable row for the purchase engine.
#[derive(Debug, Insertable)]
#[diesel(table_name = transactions)]
pub(crate) struct NewTransactionRow<'a> {
    pub buyer_id: i32,
    pub seller_id: i32,
    pub item_id: i32,
    pub price: f64,
    pub confirmation_code: &'a str,
}
