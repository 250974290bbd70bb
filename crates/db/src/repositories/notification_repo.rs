//! Repository for the `notifications` table.

use async_trait::async_trait;
use notifier_core::types::DbId;
use sqlx::PgPool;

use crate::models::notification::{CreateNotification, Notification};
use crate::models::status::NotificationStatus;
use crate::store::{NotificationStore, SendOutcome, StoreError, StoreResult};

/// Column list for `notifications` queries.
const COLUMNS: &str = "id, recipient_email, subject, body, status_id, created_at, sent_at";

/// Provides CRUD operations for notifications.
pub struct NotificationRepo;

impl NotificationRepo {
    /// Insert a pending notification, returning the created row.
    pub async fn create(
        pool: &PgPool,
        input: &CreateNotification,
    ) -> Result<Notification, sqlx::Error> {
        let query = format!(
            "INSERT INTO notifications (recipient_email, subject, body, status_id) \
             VALUES ($1, $2, $3, $4) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Notification>(&query)
            .bind(&input.recipient_email)
            .bind(&input.subject)
            .bind(&input.body)
            .bind(NotificationStatus::Pending.id())
            .fetch_one(pool)
            .await
    }

    /// List notifications newest first.
    ///
    /// `id` breaks ties between rows created in the same instant so page
    /// boundaries are stable.
    pub async fn list(
        pool: &PgPool,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<Notification>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM notifications \
             ORDER BY created_at DESC, id DESC \
             LIMIT $1 OFFSET $2"
        );
        sqlx::query_as::<_, Notification>(&query)
            .bind(limit)
            .bind(offset)
            .fetch_all(pool)
            .await
    }

    /// Find a notification by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Notification>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM notifications WHERE id = $1");
        sqlx::query_as::<_, Notification>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Mark a pending notification as sent.
    ///
    /// Returns the updated row, or `None` if the notification does not exist
    /// or was already sent. The status guard in the `WHERE` clause makes this
    /// a single atomic compare-and-set.
    pub async fn mark_sent(pool: &PgPool, id: DbId) -> Result<Option<Notification>, sqlx::Error> {
        let query = format!(
            "UPDATE notifications \
             SET status_id = $2, sent_at = NOW() \
             WHERE id = $1 AND status_id = $3 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Notification>(&query)
            .bind(id)
            .bind(NotificationStatus::Sent.id())
            .bind(NotificationStatus::Pending.id())
            .fetch_optional(pool)
            .await
    }

    /// Total number of notifications.
    pub async fn count(pool: &PgPool) -> Result<i64, sqlx::Error> {
        let count: Option<i64> = sqlx::query_scalar("SELECT COUNT(*) FROM notifications")
            .fetch_one(pool)
            .await?;
        Ok(count.unwrap_or(0))
    }
}

/// [`NotificationStore`] backed by PostgreSQL.
#[derive(Debug, Clone)]
pub struct PgNotificationStore {
    pool: PgPool,
}

impl PgNotificationStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl NotificationStore for PgNotificationStore {
    async fn create(&self, input: &CreateNotification) -> StoreResult<Notification> {
        let notification = NotificationRepo::create(&self.pool, input).await?;
        tracing::debug!(notification_id = notification.id, "Inserted notification row");
        Ok(notification)
    }

    async fn list_page(&self, offset: i64, limit: i64) -> StoreResult<Vec<Notification>> {
        Ok(NotificationRepo::list(&self.pool, limit, offset).await?)
    }

    async fn get(&self, id: DbId) -> StoreResult<Notification> {
        NotificationRepo::find_by_id(&self.pool, id)
            .await?
            .ok_or(StoreError::NotFound { id })
    }

    async fn mark_sent(&self, id: DbId) -> StoreResult<SendOutcome> {
        if let Some(updated) = NotificationRepo::mark_sent(&self.pool, id).await? {
            return Ok(SendOutcome::Sent(updated));
        }

        // The guarded update touched nothing: either the row is missing or
        // another request already sent it.
        let existing = self.get(id).await?;
        Ok(SendOutcome::AlreadySent(existing))
    }

    async fn count(&self) -> StoreResult<i64> {
        Ok(NotificationRepo::count(&self.pool).await?)
    }

    async fn health_check(&self) -> StoreResult<()> {
        Ok(crate::health_check(&self.pool).await?)
    }
}
