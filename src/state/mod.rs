//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! Each domain owns a plain state struct provided to the component tree as an
//! `RwSignal` via context. All mutation of the auth state goes through the
//! reducer in `auth`, driven by the async operations in `session` — there is
//! exactly one writer and many reactive readers.

pub mod auth;
pub mod session;
pub mod toast;
