//! Notifier HTTP server library.
//!
//! Exposes the building blocks (config, state, cache, error handling, routes)
//! so integration tests and the binary entrypoint can both use them.

pub mod cache;
pub mod config;
pub mod error;
pub mod flash;
pub mod handlers;
pub mod query;
pub mod response;
pub mod router;
pub mod routes;
pub mod state;
pub mod views;
