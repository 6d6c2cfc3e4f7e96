//! In-process session registry.
//!
//! Sessions are deliberately ephemeral: the registry starts empty, entries
//! are added on login, and everything is lost on restart. The registry is
//! injected into the HTTP layer as shared state rather than living in a
//! global so tests can construct a fresh one per case.

use std::collections::HashMap;
use std::sync::RwLock;

use rand::rngs::OsRng;
use rand::RngCore;

use super::UserId;

/// Number of random bytes in a session token (32 hex characters). Tokens
/// are bearer credentials and must come from the OS CSPRNG.
const SESSION_TOKEN_BYTES: usize = 16;

/// Maps opaque bearer tokens to authenticated users for the process
/// lifetime.
///
/// # Examples
/// ```
/// use backend::domain::{SessionRegistry, UserId};
///
/// let sessions = SessionRegistry::new();
/// let token = sessions.create(UserId::new(1));
/// assert_eq!(sessions.resolve(&token), Some(UserId::new(1)));
/// sessions.revoke(&token);
/// assert_eq!(sessions.resolve(&token), None);
/// ```
#[derive(Debug, Default)]
pub struct SessionRegistry {
    entries: RwLock<HashMap<String, UserId>>,
}

impl SessionRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a session for the given user and return its bearer token.
    pub fn create(&self, user_id: UserId) -> String {
        let token = generate_token();
        match self.entries.write() {
            Ok(mut entries) => {
                entries.insert(token.clone(), user_id);
            }
            Err(poisoned) => {
                poisoned.into_inner().insert(token.clone(), user_id);
            }
        }
        token
    }

    /// Resolve a bearer token to the user it was issued for.
    pub fn resolve(&self, token: &str) -> Option<UserId> {
        match self.entries.read() {
            Ok(entries) => entries.get(token).copied(),
            Err(poisoned) => poisoned.into_inner().get(token).copied(),
        }
    }

    /// Invalidate a token. Unknown tokens are ignored.
    pub fn revoke(&self, token: &str) {
        match self.entries.write() {
            Ok(mut entries) => {
                entries.remove(token);
            }
            Err(poisoned) => {
                poisoned.into_inner().remove(token);
            }
        }
    }
}

fn generate_token() -> String {
    let mut bytes = [0u8; SESSION_TOKEN_BYTES];
    OsRng.fill_bytes(&mut bytes);
    hex::encode(bytes)
}
