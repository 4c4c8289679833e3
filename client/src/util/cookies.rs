//! Cookie serialization for the session.
//!
//! SYSTEM CONTEXT
//! ==============
//! Cookies are the only state that survives a reload, but they are not the
//! authority: `state::session` owns the session and calls into this module
//! to write it out, wipe it, or read it back once at startup. Nothing else
//! touches `document.cookie`.

#[cfg(test)]
#[path = "cookies_test.rs"]
mod cookies_test;

use cookie::Cookie;
use cookie::time::Duration;

use crate::state::session::Session;

pub const TOKEN_COOKIE: &str = "token";
pub const ROLE_COOKIE: &str = "role";
pub const ID_USER_COOKIE: &str = "id_user";
pub const IMAGES_COOKIE: &str = "images";

/// Every cookie the session writes, in write order.
pub const SESSION_COOKIES: [&str; 4] = [TOKEN_COOKIE, ROLE_COOKIE, ID_USER_COOKIE, IMAGES_COOKIE];

const COOKIE_PATH: &str = "/";

/// Raw session cookie values as found in the browser.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CookieSnapshot {
    pub token: Option<String>,
    pub role: Option<String>,
    pub id_user: Option<String>,
    pub images: Option<String>,
}

fn set_cookie_string(name: &str, value: &str) -> String {
    Cookie::build((name.to_owned(), value.to_owned()))
        .path(COOKIE_PATH)
        .build()
        .encoded()
        .to_string()
}

fn removal_cookie_string(name: &str) -> String {
    Cookie::build((name.to_owned(), String::new()))
        .path(COOKIE_PATH)
        .max_age(Duration::ZERO)
        .build()
        .encoded()
        .to_string()
}

/// `document.cookie` assignments that persist `session`.
pub fn session_cookie_strings(session: &Session) -> Vec<String> {
    vec![
        set_cookie_string(TOKEN_COOKIE, &session.token),
        set_cookie_string(ROLE_COOKIE, session.role.as_str()),
        set_cookie_string(ID_USER_COOKIE, &session.id_user.to_string()),
        set_cookie_string(IMAGES_COOKIE, &session.images),
    ]
}

/// `document.cookie` assignments that expire every session cookie.
pub fn removal_cookie_strings() -> Vec<String> {
    SESSION_COOKIES.iter().map(|name| removal_cookie_string(name)).collect()
}

/// Pick the session cookies out of a `document.cookie` string.
///
/// Malformed pairs are skipped; empty values count as absent.
pub fn parse_session_cookies(raw: &str) -> CookieSnapshot {
    let mut snapshot = CookieSnapshot::default();
    for cookie in Cookie::split_parse_encoded(raw.to_owned()).flatten() {
        let value = cookie.value().to_owned();
        if value.is_empty() {
            continue;
        }
        match cookie.name() {
            TOKEN_COOKIE => snapshot.token = Some(value),
            ROLE_COOKIE => snapshot.role = Some(value),
            ID_USER_COOKIE => snapshot.id_user = Some(value),
            IMAGES_COOKIE => snapshot.images = Some(value),
            _ => {}
        }
    }
    snapshot
}

#[cfg(feature = "hydrate")]
fn html_document() -> Option<web_sys::HtmlDocument> {
    use wasm_bindgen::JsCast;

    web_sys::window()?.document()?.dyn_into::<web_sys::HtmlDocument>().ok()
}

/// Read the session cookies from the browser. Empty off the browser.
pub fn read_snapshot() -> CookieSnapshot {
    #[cfg(feature = "hydrate")]
    {
        html_document()
            .and_then(|doc| doc.cookie().ok())
            .map(|raw| parse_session_cookies(&raw))
            .unwrap_or_default()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        CookieSnapshot::default()
    }
}

/// Write `session` to the browser cookies.
pub fn write_session(session: &Session) {
    write_all(&session_cookie_strings(session));
}

/// Expire every session cookie in the browser.
pub fn clear_session() {
    write_all(&removal_cookie_strings());
}

fn write_all(assignments: &[String]) {
    #[cfg(feature = "hydrate")]
    {
        let Some(doc) = html_document() else {
            return;
        };
        for assignment in assignments {
            if doc.set_cookie(assignment).is_err() {
                log::warn!("cookie write rejected");
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = assignments;
    }
}
