//! In-process notification store.
//!
//! Records live in a mutex-guarded vector and vanish with the process. The
//! guard is never held across an `.await`, and `mark_sent` checks and writes
//! under a single guard, which gives the same compare-and-set behaviour as
//! the guarded `UPDATE` in Postgres.

use std::sync::{Mutex, MutexGuard, PoisonError};

use async_trait::async_trait;
use chrono::Utc;
use notifier_core::types::DbId;

use crate::models::notification::{CreateNotification, Notification};
use crate::models::status::NotificationStatus;
use crate::store::{NotificationStore, SendOutcome, StoreError, StoreResult};

#[derive(Debug)]
struct Inner {
    next_id: DbId,
    rows: Vec<Notification>,
}

/// [`NotificationStore`] kept in memory.
#[derive(Debug)]
pub struct InMemoryNotificationStore {
    inner: Mutex<Inner>,
}

impl Default for InMemoryNotificationStore {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryNotificationStore {
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(Inner {
                next_id: 1,
                rows: Vec::new(),
            }),
        }
    }

    fn lock(&self) -> MutexGuard<'_, Inner> {
        // Every mutation completes before the guard drops, so a poisoned
        // lock still holds consistent rows.
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// Clamp a signed offset/limit to a usable index.
fn to_index(value: i64) -> usize {
    usize::try_from(value.max(0)).unwrap_or(usize::MAX)
}

#[async_trait]
impl NotificationStore for InMemoryNotificationStore {
    async fn create(&self, input: &CreateNotification) -> StoreResult<Notification> {
        let mut inner = self.lock();
        let notification = Notification {
            id: inner.next_id,
            recipient_email: input.recipient_email.clone(),
            subject: input.subject.clone(),
            body: input.body.clone(),
            status: NotificationStatus::Pending,
            created_at: Utc::now(),
            sent_at: None,
        };
        inner.next_id += 1;
        inner.rows.push(notification.clone());
        Ok(notification)
    }

    async fn list_page(&self, offset: i64, limit: i64) -> StoreResult<Vec<Notification>> {
        let inner = self.lock();
        let mut ordered: Vec<&Notification> = inner.rows.iter().collect();
        ordered.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)));

        Ok(ordered
            .into_iter()
            .skip(to_index(offset))
            .take(to_index(limit))
            .cloned()
            .collect())
    }

    async fn get(&self, id: DbId) -> StoreResult<Notification> {
        self.lock()
            .rows
            .iter()
            .find(|n| n.id == id)
            .cloned()
            .ok_or(StoreError::NotFound { id })
    }

    async fn mark_sent(&self, id: DbId) -> StoreResult<SendOutcome> {
        let mut inner = self.lock();
        let row = inner
            .rows
            .iter_mut()
            .find(|n| n.id == id)
            .ok_or(StoreError::NotFound { id })?;

        if row.status.is_terminal() {
            return Ok(SendOutcome::AlreadySent(row.clone()));
        }

        row.status = NotificationStatus::Sent;
        row.sent_at = Some(Utc::now().max(row.created_at));
        Ok(SendOutcome::Sent(row.clone()))
    }

    async fn count(&self) -> StoreResult<i64> {
        let len = self.lock().rows.len();
        Ok(i64::try_from(len).unwrap_or(i64::MAX))
    }

    async fn health_check(&self) -> StoreResult<()> {
        Ok(())
    }
}
