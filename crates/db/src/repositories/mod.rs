//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument. [`PgNotificationStore`]
//! adapts [`NotificationRepo`] to the [`crate::NotificationStore`] trait.

pub mod notification_repo;

pub use notification_repo::{NotificationRepo, PgNotificationStore};
