//! Handlers for the `/api/notifications` resource.

use std::collections::HashMap;

use axum::body::Bytes;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use notifier_core::error::CoreError;
use notifier_core::types::DbId;
use notifier_core::validation::EmailPolicy;
use notifier_db::models::notification::{CreateNotification, Notification};
use notifier_db::SendOutcome;
use serde_json::Value;

use crate::cache::{get_or_compute, list_cache_key};
use crate::error::AppResult;
use crate::query::{Pagination, DEFAULT_LIMIT};
use crate::response::{MessageResponse, PageResponse};
use crate::state::AppState;

/// Body of a successful send.
pub const MSG_SENT: &str = "Notification sent successfully";

/// Body of a send on an already-sent notification.
pub const MSG_ALREADY_SENT: &str = "Notification already sent";

/// Extract the create fields from a raw request body.
///
/// Anything that is not a JSON object, and any field that is missing, `null`
/// or not a string, reads as an empty string. Validation then reports the
/// problem instead of the request failing to parse.
fn parse_create_body(body: &[u8]) -> CreateNotification {
    let value: Value = match serde_json::from_slice(body) {
        Ok(value) => value,
        Err(err) => {
            tracing::debug!(error = %err, "Unparseable create body, treating fields as empty");
            Value::Null
        }
    };

    let field = |name: &str| {
        value
            .get(name)
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string()
    };

    CreateNotification::new(field("recipientEmail"), field("subject"), field("body"))
}

/// POST /api/notifications
///
/// Create a pending notification. Returns 201 with the record, or 400 with
/// `{ "errors": { field: message } }` when validation fails (nothing is
/// stored in that case).
pub async fn create_notification(
    State(state): State<AppState>,
    body: Bytes,
) -> AppResult<(StatusCode, Json<Notification>)> {
    let input = parse_create_body(&body);

    if let Err(errors) = input.validate(EmailPolicy::Strict) {
        tracing::debug!(%errors, "Rejected notification create");
        return Err(CoreError::Validation(errors).into());
    }

    let notification = state.store.create(&input).await?;
    tracing::info!(notification_id = notification.id, "Notification created");

    Ok((StatusCode::CREATED, Json(notification)))
}

/// GET /api/notifications?page=&limit=
///
/// Newest-first page of notifications, served through the list cache.
/// Pages may lag behind writes by up to the cache TTL.
pub async fn list_notifications(
    State(state): State<AppState>,
    Query(params): Query<HashMap<String, String>>,
) -> AppResult<Json<PageResponse<Vec<Notification>>>> {
    let pagination = Pagination::from_query(&params, DEFAULT_LIMIT);
    let key = list_cache_key(pagination.page, pagination.limit);

    let data = get_or_compute(state.list_cache.as_ref(), &key, || {
        state
            .store
            .list_page(pagination.offset(), pagination.limit)
    })
    .await?;

    Ok(Json(PageResponse {
        page: pagination.page,
        limit: pagination.limit,
        data,
    }))
}

/// POST /api/notifications/{id}/send
///
/// Simulate delivery by marking the notification sent. A repeat send is
/// answered with 400 and changes nothing; an unknown id is 404.
pub async fn send_notification(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Response> {
    let response = match state.store.mark_sent(id).await? {
        SendOutcome::Sent(_) => {
            tracing::info!(notification_id = id, "Notification sent");
            (StatusCode::OK, Json(MessageResponse { message: MSG_SENT })).into_response()
        }
        SendOutcome::AlreadySent(_) => {
            tracing::info!(notification_id = id, "Notification already sent, nothing to do");
            (
                StatusCode::BAD_REQUEST,
                Json(MessageResponse {
                    message: MSG_ALREADY_SENT,
                }),
            )
                .into_response()
        }
    };

    Ok(response)
}
