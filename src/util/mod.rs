//! Small browser-facing utilities.

pub mod credentials;
