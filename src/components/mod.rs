//! Reusable components: route guards and the toast host.

pub mod guards;
pub mod toasts;
