//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! `auth` is the pure session reducer, `store` binds it to persistence and
//! the outbound credential, `actions` drives it from HTTP results, and `form`
//! holds the modal's local inputs.

pub mod actions;
pub mod auth;
pub mod form;
pub mod store;
