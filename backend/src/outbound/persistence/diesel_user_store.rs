//! Diesel-backed [`UserStore`] adapter.

use async_trait::async_trait;
use diesel::prelude::*;

use crate::domain::ports::{UserStore, UserStoreError};
use crate::domain::{Credentials, User, UserId};

use super::diesel_helpers::with_connection;
use super::error_mapping::{is_unique_violation, map_diesel_error, map_pool_error};
use super::models::{NewUserRow, UserRow};
use super::pool::{DbPool, PoolError};
use super::schema::users;

/// Diesel adapter for user registration and credential lookups.
#[derive(Clone)]
pub struct DieselUserStore {
    pool: DbPool,
}

impl DieselUserStore {
    /// Create a new store backed by the given pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn map_pool(error: PoolError) -> UserStoreError {
    map_pool_error(error, UserStoreError::connection)
}

fn map_join(message: String) -> UserStoreError {
    UserStoreError::query(message)
}

fn map_query(error: diesel::result::Error) -> UserStoreError {
    map_diesel_error(error, UserStoreError::query)
}

#[async_trait]
impl UserStore for DieselUserStore {
    async fn register(&self, credentials: &Credentials) -> Result<UserId, UserStoreError> {
        let email = credentials.email().to_owned();
        let password = credentials.password().to_owned();

        with_connection(self.pool.clone(), map_pool, map_join, move |conn| {
            let id = diesel::insert_into(users::table)
                .values(NewUserRow {
                    email: &email,
                    password: &password,
                })
                .returning(users::id)
                .get_result::<i32>(conn)
                .map_err(|err| {
                    if is_unique_violation(&err) {
                        UserStoreError::duplicate_email()
                    } else {
                        map_query(err)
                    }
                })?;
            Ok(UserId::new(id))
        })
        .await
    }

    async fn authenticate(
        &self,
        credentials: &Credentials,
    ) -> Result<Option<User>, UserStoreError> {
        let email = credentials.email().to_owned();
        let password = credentials.password().to_owned();

        with_connection(self.pool.clone(), map_pool, map_join, move |conn| {
            // Exact match against the stored credential; a miss is a domain
            // outcome, not an error.
            let row = users::table
                .filter(users::email.eq(&email))
                .filter(users::password.eq(&password))
                .select(UserRow::as_select())
                .first::<UserRow>(conn)
                .optional()
                .map_err(map_query)?;
            Ok(row.map(User::from))
        })
        .await
    }

    async fn find_by_id(&self, id: UserId) -> Result<Option<User>, UserStoreError> {
        with_connection(self.pool.clone(), map_pool, map_join, move |conn| {
            let row = users::table
                .find(id.value())
                .select(UserRow::as_select())
                .first::<UserRow>(conn)
                .optional()
                .map_err(map_query)?;
            Ok(row.map(User::from))
        })
        .await
    }
}
