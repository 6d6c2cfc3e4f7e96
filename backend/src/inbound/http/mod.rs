//! HTTP inbound adapter: handlers, session extraction, error mapping.

pub mod error;
pub mod health;
pub mod listings;
mod port_errors;
pub mod session;
pub mod state;
pub mod transactions;
pub mod users;

pub use crate::domain::ApiResult;
