//! Handlers for the server-rendered dashboard under `/dashboard`.
//!
//! Successful mutations redirect back to the list (303) with a flash cookie.
//! A rejected create re-renders the page with the submitted values.

use std::collections::HashMap;

use axum::extract::{Path, Query, State};
use axum::response::{Html, IntoResponse, Redirect, Response};
use axum::Form;
use axum_extra::extract::cookie::CookieJar;
use notifier_core::types::DbId;
use notifier_core::validation::EmailPolicy;
use notifier_db::models::notification::CreateNotification;
use notifier_db::{SendOutcome, StoreError};
use serde::Deserialize;

use crate::error::AppResult;
use crate::flash::{self, Flash, DASHBOARD_PATH};
use crate::query::Pagination;
use crate::state::AppState;
use crate::views::{
    not_found_response, render_html, CreateFormView, DashboardTemplate, DashboardView,
};

/// Rows shown per dashboard page.
pub const PAGE_SIZE: i64 = 10;

/// Fields posted by the creation form. Missing fields read as empty.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct DashboardForm {
    #[serde(rename = "recipientEmail")]
    pub recipient_email: String,
    pub subject: String,
    pub body: String,
}

/// Render the list page with the given form state.
async fn render_page(
    state: &AppState,
    pagination: Pagination,
    form: CreateFormView,
    flash: Option<Flash>,
) -> AppResult<Html<String>> {
    let rows = state
        .store
        .list_page(pagination.offset(), pagination.limit)
        .await?;
    let total = state.store.count().await?;

    let view = DashboardView::new(pagination.page, pagination.limit, &rows, total, form, flash);
    render_html(&DashboardTemplate { view })
}

/// GET /dashboard/?page=
///
/// Reads straight from the store; the dashboard never goes through the
/// API list cache.
pub async fn index(
    State(state): State<AppState>,
    Query(params): Query<HashMap<String, String>>,
    jar: CookieJar,
) -> AppResult<(CookieJar, Html<String>)> {
    let pagination = Pagination::with_fixed_limit(&params, PAGE_SIZE);
    let (jar, flash) = flash::take(jar);

    let html = render_page(&state, pagination, CreateFormView::default(), flash).await?;
    Ok((jar, html))
}

/// POST /dashboard/?page=
///
/// Create a notification from the form. Only presence is checked here.
pub async fn create(
    State(state): State<AppState>,
    Query(params): Query<HashMap<String, String>>,
    jar: CookieJar,
    Form(form): Form<DashboardForm>,
) -> AppResult<Response> {
    let input = CreateNotification::new(
        form.recipient_email.as_str(),
        form.subject.as_str(),
        form.body.as_str(),
    );

    if let Err(errors) = input.validate(EmailPolicy::PresenceOnly) {
        tracing::debug!(%errors, "Rejected dashboard create");
        let pagination = Pagination::with_fixed_limit(&params, PAGE_SIZE);
        let form = CreateFormView::rejected(form.recipient_email, form.subject, form.body, &errors);
        let html = render_page(&state, pagination, form, None).await?;
        return Ok((jar, html).into_response());
    }

    let notification = state.store.create(&input).await?;
    tracing::info!(notification_id = notification.id, "Notification created from dashboard");

    Ok((flash::push(jar, Flash::Created), Redirect::to(DASHBOARD_PATH)).into_response())
}

/// GET|POST /dashboard/send/{id}
///
/// Mark the notification sent. Re-sending is reported with a warning flash
/// instead of an error page. An unknown id renders the 404 page.
pub async fn send(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    jar: CookieJar,
) -> AppResult<Response> {
    let flash = match state.store.mark_sent(id).await {
        Ok(SendOutcome::Sent(_)) => {
            tracing::info!(notification_id = id, "Notification sent from dashboard");
            Flash::Sent
        }
        Ok(SendOutcome::AlreadySent(_)) => {
            tracing::info!(notification_id = id, "Notification already sent");
            Flash::AlreadySent
        }
        Err(StoreError::NotFound { id }) => {
            return Ok(not_found_response(format!(
                "Notification with id {id} not found"
            )));
        }
        Err(err) => return Err(err.into()),
    };

    Ok((flash::push(jar, flash), Redirect::to(DASHBOARD_PATH)).into_response())
}
