//! Page components. Thin shells over the session core and guards.

pub mod login;
pub mod register;
pub mod reset_password;
pub mod tasks;
