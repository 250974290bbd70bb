//! Domain primitives shared by the notifier crates.
//!
//! Holds the id/timestamp aliases, the domain error taxonomy and the field
//! validation rules that both HTTP surfaces apply before persisting.

pub mod error;
pub mod types;
pub mod validation;
