pub mod dashboard;
pub mod health;
pub mod notification;

use axum::Router;

use crate::state::AppState;

/// Build the `/api` route tree.
///
/// ```text
/// GET    /notifications              -> list_notifications
/// POST   /notifications              -> create_notification
/// POST   /notifications/{id}/send    -> send_notification
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new().nest("/notifications", notification::router())
}
