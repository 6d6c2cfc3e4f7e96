//! Port abstraction for user persistence adapters and their errors.
use async_trait::async_trait;

use crate::domain::{Credentials, User, UserId};

use super::define_port_error;

define_port_error! {
    /// Persistence errors raised by user store adapters.
    pub enum UserStoreError {
        /// Another user already registered this email.
        DuplicateEmail => "email is already registered",
        /// Store connection could not be established.
        Connection { message: String } => "user store connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } => "user store query failed: {message}",
    }
}

/// Persistence port for user identities and credentials.
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Insert a new user, failing with [`UserStoreError::DuplicateEmail`]
    /// when the email is taken.
    async fn register(&self, credentials: &Credentials) -> Result<UserId, UserStoreError>;

    /// Exact-match credential lookup. A mismatch is `Ok(None)`, not an
    /// error; the caller decides how to respond.
    async fn authenticate(&self, credentials: &Credentials)
        -> Result<Option<User>, UserStoreError>;

    /// Fetch a user by identifier.
    async fn find_by_id(&self, id: UserId) -> Result<Option<User>, UserStoreError>;
}
