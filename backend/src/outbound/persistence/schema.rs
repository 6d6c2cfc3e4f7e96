//! Diesel table definitions for the SQLite schema.
//!
//! These definitions must match the embedded migrations exactly. They are
//! used by Diesel for compile-time query validation and type-safe SQL
//! generation.

diesel::table! {
    /// Registered user accounts.
    users (id) {
        /// Primary key: autoincrementing row id.
        id -> Integer,
        /// Unique login email.
        email -> Text,
        /// Stored credential, plaintext. Matched exactly on login.
        password -> Text,
    }
}

diesel::table! {
    /// Items offered for sale.
    listings (id) {
        /// Primary key: autoincrementing row id.
        id -> Integer,
        /// Owning user (seller).
        owner_id -> Integer,
        title -> Text,
        description -> Text,
        /// Opaque image reference.
        image -> Text,
        /// Seller contact string.
        contact -> Text,
        /// Free-form category tag used for marketplace filtering.
        category -> Text,
        price -> Double,
        /// Set exactly once, by the purchase engine.
        sold -> Bool,
    }
}

diesel::table! {
    /// Immutable records of completed sales.
    transactions (id) {
        /// Primary key: autoincrementing row id.
        id -> Integer,
        buyer_id -> Integer,
        seller_id -> Integer,
        item_id -> Integer,
        /// Price copied from the listing at the time of sale.
        price -> Double,
        /// Unique receipt code returned to the buyer.
        confirmation_code -> Text,
    }
}

diesel::joinable!(listings -> users (owner_id));
diesel::joinable!(transactions -> listings (item_id));

diesel::allow_tables_to_appear_in_same_query!(users, listings, transactions);
