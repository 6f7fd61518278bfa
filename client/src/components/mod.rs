//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render site chrome and the auth surface while reading/writing
//! the shared auth store from Leptos context.

pub mod auth_modal;
pub mod guards;
pub mod header;
pub mod layout;
