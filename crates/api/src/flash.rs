//! One-shot dashboard acknowledgments carried across a redirect.
//!
//! The acknowledgment is stored as a short code in a cookie scoped to the
//! dashboard. The next list render reads it and clears it.

use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};

/// Path every dashboard redirect lands on.
pub const DASHBOARD_PATH: &str = "/dashboard/";

/// Name of the flash cookie.
pub const FLASH_COOKIE: &str = "flash";

const COOKIE_PATH: &str = "/dashboard";

/// Severity shown with a flash message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlashLevel {
    Success,
    Warning,
}

impl FlashLevel {
    pub fn as_str(self) -> &'static str {
        match self {
            FlashLevel::Success => "success",
            FlashLevel::Warning => "warning",
        }
    }
}

/// The acknowledgments the dashboard can show.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flash {
    Created,
    Sent,
    AlreadySent,
}

impl Flash {
    fn code(self) -> &'static str {
        match self {
            Flash::Created => "created",
            Flash::Sent => "sent",
            Flash::AlreadySent => "already_sent",
        }
    }

    fn from_code(code: &str) -> Option<Self> {
        match code {
            "created" => Some(Flash::Created),
            "sent" => Some(Flash::Sent),
            "already_sent" => Some(Flash::AlreadySent),
            _ => None,
        }
    }

    pub fn level(self) -> FlashLevel {
        match self {
            Flash::Created | Flash::Sent => FlashLevel::Success,
            Flash::AlreadySent => FlashLevel::Warning,
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            Flash::Created => "Notification created successfully.",
            Flash::Sent => "Notification sent successfully.",
            Flash::AlreadySent => "Notification was already sent.",
        }
    }
}

/// Queue `flash` for the next dashboard render.
pub fn push(jar: CookieJar, flash: Flash) -> CookieJar {
    jar.add(
        Cookie::build((FLASH_COOKIE, flash.code()))
            .path(COOKIE_PATH)
            .http_only(true)
            .same_site(SameSite::Lax),
    )
}

/// Take the pending flash, if any, clearing the cookie.
///
/// Unknown codes are dropped silently.
pub fn take(jar: CookieJar) -> (CookieJar, Option<Flash>) {
    let Some(code) = jar.get(FLASH_COOKIE).map(|c| c.value().to_owned()) else {
        return (jar, None);
    };

    let jar = jar.remove(Cookie::build((FLASH_COOKIE, "")).path(COOKIE_PATH));
    (jar, Flash::from_code(&code))
}
