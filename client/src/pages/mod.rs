//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Pages are thin: protected ones wrap their content in a route guard and
//! leave access decisions to `components::guards`.

pub mod admin;
pub mod home;
pub mod user;
