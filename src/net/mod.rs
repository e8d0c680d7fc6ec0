//! Networking modules for the GraphQL endpoint.
//!
//! SYSTEM CONTEXT
//! ==============
//! `graphql` owns transport and auth headers, `cache` the normalized entity
//! store and its update rules, `api` the typed operations pages call, and
//! `types`/`error` the shared wire schema.

pub mod api;
pub mod cache;
pub mod error;
pub mod graphql;
pub mod operations;
pub mod types;
