//! Status enums mapping to SMALLINT lookup tables.
//!
//! Each variant's discriminant matches the seed data order (1-based) in the
//! corresponding `*_statuses` database table.

use serde::{Deserialize, Serialize};

/// Status ID type matching SMALLINT in the database.
pub type StatusId = i16;

/// Notification lifecycle status.
///
/// `Pending` is the initial state and `Sent` is terminal; the only
/// transition is `Pending -> Sent`.
#[repr(i16)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "lowercase")]
pub enum NotificationStatus {
    Pending = 1,
    Sent = 2,
}

impl NotificationStatus {
    /// Return the database status ID.
    pub fn id(self) -> StatusId {
        self as StatusId
    }

    /// Lowercase name, as serialized on the wire.
    pub fn as_str(self) -> &'static str {
        match self {
            NotificationStatus::Pending => "pending",
            NotificationStatus::Sent => "sent",
        }
    }

    pub fn is_terminal(self) -> bool {
        self == NotificationStatus::Sent
    }
}
