//! Field validation for notification input.
//!
//! Both surfaces validate the same fields but with different strictness:
//! the JSON API checks email syntax, the dashboard form only requires the
//! fields to be filled in. Errors are collected per field so they can be
//! rendered as `{ "errors": { field: message } }` or next to form inputs.

use std::collections::BTreeMap;
use std::fmt;

use serde::Serialize;
use validator::ValidateEmail;

/// Wire name of the recipient field.
pub const FIELD_RECIPIENT_EMAIL: &str = "recipientEmail";

/// Wire name of the subject field.
pub const FIELD_SUBJECT: &str = "subject";

/// Message for a required field left empty.
pub const MSG_NOT_BLANK: &str = "This value should not be blank.";

/// Message for a recipient that is not a syntactically valid address.
pub const MSG_INVALID_EMAIL: &str = "This value is not a valid email address.";

/// How strictly the recipient address is checked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmailPolicy {
    /// Non-blank and syntactically valid.
    Strict,
    /// Non-blank only.
    PresenceOnly,
}

/// Per-field validation messages, keyed by wire field name.
///
/// At most one message is kept per field; the first recorded wins.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FieldErrors(BTreeMap<&'static str, String>);

impl FieldErrors {
    /// Record `message` for `field` unless the field already has one.
    pub fn add(&mut self, field: &'static str, message: impl Into<String>) {
        self.0.entry(field).or_insert_with(|| message.into());
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.get(field).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> {
        self.0.iter().map(|(field, msg)| (*field, msg.as_str()))
    }

    /// `Ok(())` when nothing was recorded, otherwise `Err(self)`.
    pub fn into_result(self) -> Result<(), FieldErrors> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }
}

impl fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (field, msg)) in self.iter().enumerate() {
            if i > 0 {
                f.write_str("; ")?;
            }
            write!(f, "{field}: {msg}")?;
        }
        Ok(())
    }
}

/// Only the empty string is blank; whitespace is content.
pub fn is_blank(value: &str) -> bool {
    value.is_empty()
}

/// Validate the user-supplied fields of a new notification.
///
/// `body` is free-form and may be empty, so it is not checked.
pub fn validate_new_notification(
    recipient_email: &str,
    subject: &str,
    policy: EmailPolicy,
) -> Result<(), FieldErrors> {
    let mut errors = FieldErrors::default();

    if is_blank(recipient_email) {
        errors.add(FIELD_RECIPIENT_EMAIL, MSG_NOT_BLANK);
    } else if policy == EmailPolicy::Strict && !recipient_email.validate_email() {
        errors.add(FIELD_RECIPIENT_EMAIL, MSG_INVALID_EMAIL);
    }

    if is_blank(subject) {
        errors.add(FIELD_SUBJECT, MSG_NOT_BLANK);
    }

    errors.into_result()
}
