//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns (storage, clock,
//! token decoding) from page and component logic to improve reuse and
//! testability.

pub mod auth;
pub mod clock;
pub mod form;
pub mod session;
pub mod token_store;
