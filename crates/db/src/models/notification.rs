//! Notification entity model and DTOs.

use notifier_core::types::{DbId, Timestamp};
use notifier_core::validation::{validate_new_notification, EmailPolicy, FieldErrors};
use serde::Serialize;
use sqlx::FromRow;

use super::status::NotificationStatus;

/// A row from the `notifications` table.
///
/// Serialized with camelCase keys, which is the shape the JSON API returns.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Notification {
    pub id: DbId,
    pub recipient_email: String,
    pub subject: String,
    pub body: String,
    #[sqlx(rename = "status_id")]
    pub status: NotificationStatus,
    pub created_at: Timestamp,
    pub sent_at: Option<Timestamp>,
}

impl Notification {
    pub fn is_sent(&self) -> bool {
        self.status == NotificationStatus::Sent
    }
}

/// DTO for creating a notification.
///
/// Only the caller-controlled fields exist here; id, status and timestamps
/// are always assigned by the store.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CreateNotification {
    pub recipient_email: String,
    pub subject: String,
    pub body: String,
}

impl CreateNotification {
    pub fn new(
        recipient_email: impl Into<String>,
        subject: impl Into<String>,
        body: impl Into<String>,
    ) -> Self {
        Self {
            recipient_email: recipient_email.into(),
            subject: subject.into(),
            body: body.into(),
        }
    }

    /// Check the recipient and subject under the given email policy.
    pub fn validate(&self, policy: EmailPolicy) -> Result<(), FieldErrors> {
        validate_new_notification(&self.recipient_email, &self.subject, policy)
    }
}
