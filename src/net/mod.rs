//! HTTP layer: wire types, error normalization, and the session API client.

pub mod auth;
pub mod error;
pub mod http;
pub mod types;
