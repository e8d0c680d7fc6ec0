//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration (fetching, submitting,
//! navigating) and delegates rendering details to `components`.

pub mod home;
pub mod login;
pub mod register;
