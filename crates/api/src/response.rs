//! Shared response body types for API handlers.
//!
//! Use these instead of ad-hoc `serde_json::json!` values to get
//! compile-time type safety and consistent serialization.

use serde::Serialize;

/// `{ "page": .., "limit": .., "data": [..] }` list envelope.
#[derive(Debug, Serialize)]
pub struct PageResponse<T: Serialize> {
    pub page: i64,
    pub limit: i64,
    pub data: T,
}

/// `{ "message": ".." }` acknowledgment body.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
}
