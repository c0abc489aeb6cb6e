//! Cookie-backed session presence.
//!
//! The server does not validate sessions; it only answers "is there one?"
//! for the landing page. The auth service that issues the cookie owns the rest.

use axum::http::{HeaderMap, header};
use axum_extra::extract::CookieJar;
use axum_extra::extract::cookie::Cookie;
use quiz_landing::{SessionSource, SessionState};
use tracing::warn;

use crate::config::SessionConfig;

/// Presence answer for one request.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CookieSession {
    presence: Option<bool>,
}

impl CookieSession {
    pub fn from_headers(headers: &HeaderMap, config: &SessionConfig) -> Self {
        if !config.enabled {
            return Self { presence: None };
        }

        let Some(jar) = cookie_jar(headers) else {
            warn!("cookie header is not valid UTF-8, treating visitor as anonymous");
            return Self { presence: None };
        };
        let found = jar
            .get(&config.cookie)
            .is_some_and(|cookie| !cookie.value_trimmed().is_empty());

        Self {
            presence: Some(found),
        }
    }

    pub fn state(&self) -> SessionState {
        SessionState::resolve(self)
    }
}

impl SessionSource for CookieSession {
    fn presence(&self) -> Option<bool> {
        self.presence
    }
}

/// Every cookie sent with the request; a later duplicate name wins.
///
/// `CookieJar::from_headers` skips header values that are not visible ASCII,
/// which would drop the session cookie whenever a sibling cookie carries
/// UTF-8 text. Values are decoded as UTF-8 here and handed to the jar.
fn cookie_jar(headers: &HeaderMap) -> Option<CookieJar> {
    let mut jar = CookieJar::new();
    for value in headers.get_all(header::COOKIE) {
        let raw = std::str::from_utf8(value.as_bytes()).ok()?;
        for cookie in Cookie::split_parse_encoded(raw.to_owned()).flatten() {
            jar = jar.add(cookie);
        }
    }
    Some(jar)
}
