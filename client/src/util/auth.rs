//! Shared auth helpers: the session-gated request protocol and logout effects.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every page applies the same response to a failed request: a 401 ends the
//! session and sends the user back to login, a 500 gets the server notice,
//! anything else gets the page's own generic notice. Nothing is retried.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::components::dialog::{DialogState, Notice};
use crate::net::api::ApiError;
use crate::routes;
use crate::state::logout::{LogoutEffect, LogoutFlow};
use crate::state::session::{SessionContext, SessionState};

pub const SERVER_ERROR_MESSAGE: &str = "Something Error In Server";
pub const RELOGIN_MESSAGE: &str = "Please re-login !";

/// How a page reacts to a failed request.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ErrorDisposition {
    /// Clear the session and go to the login page.
    Reauthenticate,
    Notify(Notice),
}

/// Classify `err`; `generic` is the page's message for non-server failures.
pub fn error_disposition(err: &ApiError, generic: &str) -> ErrorDisposition {
    match err {
        ApiError::Unauthorized => ErrorDisposition::Reauthenticate,
        ApiError::Server => ErrorDisposition::Notify(Notice::error(SERVER_ERROR_MESSAGE)),
        _ => ErrorDisposition::Notify(Notice::error(generic)),
    }
}

/// Apply [`error_disposition`] for an authenticated request.
pub fn handle_api_error<F>(err: &ApiError, generic: &str, session: SessionContext, dialogs: DialogState, navigate: &F)
where
    F: Fn(&str, NavigateOptions),
{
    #[cfg(feature = "hydrate")]
    log::warn!("request failed: {err}");
    match error_disposition(err, generic) {
        ErrorDisposition::Reauthenticate => {
            session.clear_session();
            dialogs.show(Notice::error(RELOGIN_MESSAGE));
            navigate(routes::LOGIN, NavigateOptions::default());
        }
        ErrorDisposition::Notify(notice) => dialogs.show(notice),
    }
}

/// Whether an authenticated page should bounce to the login page.
///
/// Stays put while the logout success dialog is open; acknowledging it does
/// the navigation.
pub fn should_redirect_unauth(state: &SessionState, logout: LogoutFlow) -> bool {
    !state.is_logged_in && !logout.awaiting_acknowledgment()
}

/// Redirect to `/` whenever no session is present.
pub fn install_unauth_redirect<F>(session: SessionContext, logout: RwSignal<LogoutFlow>, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        let flow = logout.get();
        if session.state().with(|state| should_redirect_unauth(state, flow)) {
            navigate(routes::LOGIN, NavigateOptions::default());
        }
    });
}

/// Leave the app for an absolute URL (external authorization step).
pub fn redirect_external(url: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            let _ = window.location().set_href(url);
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = url;
    }
}

/// Execute logout transitions' effects in order.
pub fn apply_logout_effects<F>(effects: &[LogoutEffect], session: SessionContext, dialogs: DialogState, navigate: &F)
where
    F: Fn(&str, NavigateOptions),
{
    for effect in effects {
        match effect {
            LogoutEffect::ShowConfirm => dialogs.show(Notice::logout_confirm()),
            LogoutEffect::ClearSession => session.clear_session(),
            LogoutEffect::ShowSuccess => dialogs.show(Notice::logout_success()),
            LogoutEffect::Navigate(path) => navigate(path, NavigateOptions::default()),
        }
    }
}
