//! Inbound adapters (driving side of the hexagon).

pub mod http;
