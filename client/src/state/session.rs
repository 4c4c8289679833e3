//! Session context for the current browser user.
//!
//! DESIGN
//! ======
//! One reactive [`SessionState`] is the authority for who is signed in. It
//! is created from the cookies once at startup and handed to components as a
//! [`SessionContext`] through Leptos context. Every write goes through
//! `set_session` / `clear_session`, which keep the cookies in step, so the
//! two copies cannot drift apart.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use leptos::prelude::*;
use serde::{Deserialize, Serialize};

use crate::net::types::LoginResponse;
use crate::routes;
use crate::util::cookies::{self, CookieSnapshot};

/// The three kinds of Mentutor account.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    Mentor,
    Mentee,
}

impl Role {
    /// Parse the server's role string. Unknown values yield `None`.
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "admin" => Some(Self::Admin),
            "mentor" => Some(Self::Mentor),
            "mentee" => Some(Self::Mentee),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::Mentor => "mentor",
            Self::Mentee => "mentee",
        }
    }

    /// Landing route for this role.
    pub fn home_route(self) -> &'static str {
        match self {
            Self::Admin => routes::HOME_ADMIN,
            Self::Mentor => routes::HOME_MENTOR,
            Self::Mentee => routes::HOME_MENTEE,
        }
    }
}

/// Authenticated identity of the current user.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Session {
    pub token: String,
    pub role: Role,
    pub id_user: u64,
    pub images: String,
}

impl Session {
    /// Build a session from a login response; `None` for an unknown role or
    /// an empty token.
    pub fn from_login(resp: &LoginResponse) -> Option<Self> {
        let role = Role::parse(&resp.role)?;
        if resp.token.is_empty() {
            return None;
        }
        Some(Self { token: resp.token.clone(), role, id_user: resp.id_user, images: resp.images.clone() })
    }

    /// Rebuild a session from stored cookies. Requires a token, a known role
    /// and a numeric user id.
    pub fn from_snapshot(snapshot: &CookieSnapshot) -> Option<Self> {
        let token = snapshot.token.clone()?;
        let role = Role::parse(snapshot.role.as_deref()?)?;
        let id_user = snapshot.id_user.as_deref()?.parse().ok()?;
        Some(Self { token, role, id_user, images: snapshot.images.clone().unwrap_or_default() })
    }
}

/// Session store: the signed-in flag, the session, and the last login payload.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SessionState {
    pub is_logged_in: bool,
    pub session: Option<Session>,
    pub user: Option<LoginResponse>,
}

impl SessionState {
    /// Store restored from cookies at page load.
    pub fn restore(snapshot: &CookieSnapshot) -> Self {
        match Session::from_snapshot(snapshot) {
            Some(session) => Self { is_logged_in: true, session: Some(session), user: None },
            None => Self::default(),
        }
    }

    pub fn sign_in(&mut self, session: Session, user: Option<LoginResponse>) {
        self.is_logged_in = true;
        self.session = Some(session);
        self.user = user;
    }

    pub fn sign_out(&mut self) {
        self.is_logged_in = false;
        self.session = None;
        self.user = None;
    }

    /// Name to greet the user with, when the server sent one.
    pub fn display_name(&self) -> Option<String> {
        self.user.as_ref().and_then(|u| u.name.clone()).filter(|n| !n.is_empty())
    }
}

/// Handle to the session store provided through Leptos context.
#[derive(Clone, Copy, Debug)]
pub struct SessionContext {
    state: RwSignal<SessionState>,
}

impl SessionContext {
    pub fn new(initial: SessionState) -> Self {
        Self { state: RwSignal::new(initial) }
    }

    /// Store seeded from the request cookies when rendering on the server,
    /// or from `document.cookie` in the browser.
    pub fn from_cookies() -> Self {
        let snapshot = use_context::<CookieSnapshot>().unwrap_or_else(cookies::read_snapshot);
        Self::new(SessionState::restore(&snapshot))
    }

    /// Fetch the context provided by `App`.
    pub fn expect() -> Self {
        expect_context::<Self>()
    }

    pub fn state(self) -> RwSignal<SessionState> {
        self.state
    }

    /// Current session (tracked).
    pub fn get_session(self) -> Option<Session> {
        self.state.with(|s| s.session.clone())
    }

    /// Current session without subscribing.
    pub fn get_session_untracked(self) -> Option<Session> {
        self.state.with_untracked(|s| s.session.clone())
    }

    /// Record a fresh login and persist it to cookies.
    pub fn set_session(self, session: Session, user: Option<LoginResponse>) {
        cookies::write_session(&session);
        self.state.update(|s| s.sign_in(session, user));
    }

    /// Expire the session cookies, then drop the in-memory session.
    pub fn clear_session(self) {
        cookies::clear_session();
        self.state.update(SessionState::sign_out);
    }

    pub fn is_logged_in(self) -> bool {
        self.state.with(|s| s.is_logged_in)
    }

    pub fn role(self) -> Option<Role> {
        self.state.with(|s| s.session.as_ref().map(|session| session.role))
    }

    pub fn token_untracked(self) -> Option<String> {
        self.state.with_untracked(|s| s.session.as_ref().map(|session| session.token.clone()))
    }
}
