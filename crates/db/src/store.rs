//! The storage seam for notifications.

use async_trait::async_trait;
use notifier_core::types::DbId;

use crate::models::notification::{CreateNotification, Notification};

/// Error type for store operations.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// No notification has the requested id.
    #[error("Notification with id {id} not found")]
    NotFound { id: DbId },

    /// The backing database failed.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

pub type StoreResult<T> = Result<T, StoreError>;

/// Result of a send request.
///
/// An already-sent notification is not an error: the caller gets the record
/// back untouched and decides how to report it.
#[derive(Debug, Clone, PartialEq)]
pub enum SendOutcome {
    /// This call performed the `pending -> sent` transition.
    Sent(Notification),
    /// The notification was sent earlier; nothing changed.
    AlreadySent(Notification),
}

impl SendOutcome {
    pub fn is_fresh(&self) -> bool {
        matches!(self, SendOutcome::Sent(_))
    }
}

/// Durable keeper of notification records.
///
/// Implementations must make `mark_sent` a compare-and-set: under concurrent
/// calls for one id exactly one caller observes [`SendOutcome::Sent`].
#[async_trait]
pub trait NotificationStore: Send + Sync {
    /// Insert a new pending notification and return it.
    async fn create(&self, input: &CreateNotification) -> StoreResult<Notification>;

    /// Newest-first page of notifications. Offsets past the end yield an
    /// empty vector.
    async fn list_page(&self, offset: i64, limit: i64) -> StoreResult<Vec<Notification>>;

    /// Fetch one notification, or [`StoreError::NotFound`].
    async fn get(&self, id: DbId) -> StoreResult<Notification>;

    /// Transition a notification to sent if it is still pending.
    async fn mark_sent(&self, id: DbId) -> StoreResult<SendOutcome>;

    /// Total number of notifications.
    async fn count(&self) -> StoreResult<i64>;

    /// Confirm the backing storage is reachable.
    async fn health_check(&self) -> StoreResult<()>;
}
