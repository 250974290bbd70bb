//! Shared query parameter handling for list views.
//!
//! Pagination input is never rejected. Values are read the way a loose
//! integer cast would read them (leading digits only, anything else is 0)
//! and then floored at 1, so `?page=abc` means page 1 rather than a 400.

use std::collections::HashMap;

/// Default page size for the API list endpoint.
pub const DEFAULT_LIMIT: i64 = 10;

/// Resolved `page` / `limit` pair, both at least 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    pub page: i64,
    pub limit: i64,
}

impl Pagination {
    /// Read `page` and `limit` from a raw query map.
    pub fn from_query(params: &HashMap<String, String>, default_limit: i64) -> Self {
        Self {
            page: param_at_least_one(params, "page", 1),
            limit: param_at_least_one(params, "limit", default_limit),
        }
    }

    /// Read only `page`; the page size is fixed by the caller.
    pub fn with_fixed_limit(params: &HashMap<String, String>, limit: i64) -> Self {
        Self {
            page: param_at_least_one(params, "page", 1),
            limit: limit.max(1),
        }
    }

    /// Number of rows to skip. Saturates instead of overflowing.
    pub fn offset(&self) -> i64 {
        (self.page - 1).saturating_mul(self.limit)
    }
}

fn param_at_least_one(params: &HashMap<String, String>, name: &str, default: i64) -> i64 {
    match params.get(name) {
        Some(raw) => lenient_int(raw).max(1),
        None => default.max(1),
    }
}

/// Parse the leading integer of `raw`.
///
/// Leading whitespace and a single sign are accepted; parsing stops at the
/// first non-digit. No digits at all yields 0. Out-of-range values saturate.
pub fn lenient_int(raw: &str) -> i64 {
    let trimmed = raw.trim_start();
    let (negative, digits) = match trimmed.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, trimmed.strip_prefix('+').unwrap_or(trimmed)),
    };

    let mut value: i64 = 0;
    for digit in digits.chars().map_while(|c| c.to_digit(10)) {
        value = value.saturating_mul(10).saturating_add(i64::from(digit));
    }

    if negative {
        -value
    } else {
        value
    }
}
