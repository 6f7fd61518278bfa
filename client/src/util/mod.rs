//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns (storage, runtime
//! configuration, navigation guards) from page and component logic to improve
//! reuse and testability.

pub mod auth;
pub mod config;
pub mod session_storage;
pub mod storage;
