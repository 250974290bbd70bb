//! Askama view models for the dashboard.
//!
//! Handlers turn store records into these flat, pre-formatted structs so the
//! templates stay free of formatting logic.

use askama::Template;
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use notifier_core::validation::{FieldErrors, FIELD_RECIPIENT_EMAIL, FIELD_SUBJECT};
use notifier_db::models::notification::Notification;

use crate::error::{AppError, AppResult};
use crate::flash::{Flash, DASHBOARD_PATH};

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

#[derive(Debug, Clone)]
pub struct NotificationRowView {
    pub id: i64,
    pub recipient_email: String,
    pub subject: String,
    pub body: String,
    pub status: &'static str,
    pub created_at: String,
    pub sent_at: String,
    /// Present only while the notification is still pending.
    pub send_action: Option<String>,
}

impl From<&Notification> for NotificationRowView {
    fn from(n: &Notification) -> Self {
        Self {
            id: n.id,
            recipient_email: n.recipient_email.clone(),
            subject: n.subject.clone(),
            body: n.body.clone(),
            status: n.status.as_str(),
            created_at: n.created_at.format(TIMESTAMP_FORMAT).to_string(),
            sent_at: n
                .sent_at
                .map(|t| t.format(TIMESTAMP_FORMAT).to_string())
                .unwrap_or_else(|| "-".to_string()),
            send_action: (!n.is_sent()).then(|| format!("/dashboard/send/{}", n.id)),
        }
    }
}

/// Values and errors of the creation form.
#[derive(Debug, Clone, Default)]
pub struct CreateFormView {
    pub recipient_email: String,
    pub subject: String,
    pub body: String,
    pub recipient_email_error: Option<String>,
    pub subject_error: Option<String>,
}

impl CreateFormView {
    /// Redisplay submitted values alongside their field errors.
    pub fn rejected(
        recipient_email: String,
        subject: String,
        body: String,
        errors: &FieldErrors,
    ) -> Self {
        Self {
            recipient_email,
            subject,
            body,
            recipient_email_error: errors.get(FIELD_RECIPIENT_EMAIL).map(str::to_owned),
            subject_error: errors.get(FIELD_SUBJECT).map(str::to_owned),
        }
    }
}

#[derive(Debug, Clone)]
pub struct FlashView {
    pub level: &'static str,
    pub message: &'static str,
}

impl From<Flash> for FlashView {
    fn from(flash: Flash) -> Self {
        Self {
            level: flash.level().as_str(),
            message: flash.message(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct DashboardView {
    pub page: i64,
    pub rows: Vec<NotificationRowView>,
    pub form: CreateFormView,
    pub flash: Option<FlashView>,
    pub form_action: String,
    pub previous_href: Option<String>,
    pub next_href: Option<String>,
}

impl DashboardView {
    /// Assemble the page view. `total` is the number of stored
    /// notifications and drives the next-page link.
    pub fn new(
        page: i64,
        page_size: i64,
        notifications: &[Notification],
        total: i64,
        form: CreateFormView,
        flash: Option<Flash>,
    ) -> Self {
        let shown_through = page.saturating_mul(page_size);
        Self {
            page,
            rows: notifications.iter().map(NotificationRowView::from).collect(),
            form,
            flash: flash.map(FlashView::from),
            form_action: page_href(page),
            previous_href: (page > 1).then(|| page_href(page - 1)),
            next_href: (shown_through < total).then(|| page_href(page + 1)),
        }
    }
}

fn page_href(page: i64) -> String {
    format!("{DASHBOARD_PATH}?page={page}")
}

#[derive(Template)]
#[template(path = "dashboard/index.html")]
pub struct DashboardTemplate {
    pub view: DashboardView,
}

#[derive(Template)]
#[template(path = "dashboard/not_found.html")]
pub struct NotFoundTemplate {
    pub message: String,
}

/// Render `template` to HTML, mapping render failures to a 500.
pub fn render_html<T: Template>(template: &T) -> AppResult<Html<String>> {
    template
        .render()
        .map(Html)
        .map_err(|err| AppError::InternalError(format!("Template rendering failed: {err}")))
}

/// A rendered 404 page; falls back to the JSON error if rendering fails.
pub fn not_found_response(message: String) -> Response {
    match render_html(&NotFoundTemplate { message }) {
        Ok(html) => (StatusCode::NOT_FOUND, html).into_response(),
        Err(err) => err.into_response(),
    }
}
