//! Route definitions for the HTML dashboard.
//!
//! Mounted at the root rather than nested so that both `/dashboard` and
//! `/dashboard/` resolve to the list page.

use axum::routing::get;
use axum::Router;

use crate::handlers::dashboard;
use crate::state::AppState;

/// ```text
/// GET|POST  /dashboard, /dashboard/   -> index | create
/// GET|POST  /dashboard/send/{id}      -> send
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/dashboard", get(dashboard::index).post(dashboard::create))
        .route("/dashboard/", get(dashboard::index).post(dashboard::create))
        .route(
            "/dashboard/send/{id}",
            get(dashboard::send).post(dashboard::send),
        )
}
