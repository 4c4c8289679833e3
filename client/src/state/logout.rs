//! Logout confirmation flow.
//!
//! Pure state machine; the sidebar executes the returned effects in order.
//! Session side effects happen only after the user confirms.
//!
//! ```text
//! Idle ──begin──▶ ConfirmPending ──cancel──▶ Idle
//!                        │
//!                     confirm
//!                        ▼
//!                    Confirmed ──acknowledge──▶ Idle (+ navigate)
//! ```
//!
//! Another notice may replace either logout dialog. Closing that notice
//! (`follow` with a non-logout action) ends the flow as if its own dialog had
//! been answered: a pending confirmation is dropped, a confirmed logout is
//! acknowledged.

#[cfg(test)]
#[path = "logout_test.rs"]
mod logout_test;

use crate::components::dialog::{DialogAction, DialogResult};
use crate::routes;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LogoutFlow {
    #[default]
    Idle,
    /// "Are you sure?" dialog is open.
    ConfirmPending,
    /// Session cleared; success dialog is open.
    Confirmed,
}

/// Side effect requested by a transition.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LogoutEffect {
    ShowConfirm,
    ClearSession,
    ShowSuccess,
    Navigate(&'static str),
}

impl LogoutFlow {
    /// User clicked "Logout". Without a session there is nothing to confirm.
    ///
    /// Starts over from any state; the logout dialogs are modal, so a click
    /// here means no logout dialog is on screen.
    #[must_use]
    pub fn begin(self, has_session: bool) -> (Self, Vec<LogoutEffect>) {
        if has_session {
            (Self::ConfirmPending, vec![LogoutEffect::ShowConfirm])
        } else {
            (Self::Idle, vec![LogoutEffect::Navigate(routes::LOGIN)])
        }
    }

    /// Answer to the confirmation dialog.
    #[must_use]
    pub fn resolve(self, result: DialogResult) -> (Self, Vec<LogoutEffect>) {
        match (self, result) {
            (Self::ConfirmPending, DialogResult::Confirmed) => {
                (Self::Confirmed, vec![LogoutEffect::ClearSession, LogoutEffect::ShowSuccess])
            }
            (Self::ConfirmPending, DialogResult::Cancelled) => (Self::Idle, Vec::new()),
            (other, _) => (other, Vec::new()),
        }
    }

    /// Success dialog dismissed.
    #[must_use]
    pub fn acknowledge(self) -> (Self, Vec<LogoutEffect>) {
        match self {
            Self::Confirmed => (Self::Idle, vec![LogoutEffect::Navigate(routes::LOGIN)]),
            other => (other, Vec::new()),
        }
    }

    /// Transition for whatever action closed the active dialog.
    #[must_use]
    pub fn follow(self, action: &DialogAction) -> (Self, Vec<LogoutEffect>) {
        match action {
            DialogAction::ResolveLogout(result) => self.resolve(*result),
            DialogAction::AcknowledgeLogout => self.acknowledge(),
            DialogAction::Dismiss | DialogAction::Navigate(_) => match self {
                Self::Confirmed => self.acknowledge(),
                Self::Idle | Self::ConfirmPending => (Self::Idle, Vec::new()),
            },
        }
    }

    /// Whether the session was cleared and the success dialog is still up.
    pub fn awaiting_acknowledgment(self) -> bool {
        self == Self::Confirmed
    }
}
