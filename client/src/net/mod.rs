//! Networking modules for the REST auth API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` performs HTTP calls through a swappable transport and `types`
//! defines the shared wire schema.

pub mod api;
#[cfg(test)]
pub(crate) mod testing;
pub mod types;
