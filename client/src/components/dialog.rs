//! Modal notices and confirmations.
//!
//! DESIGN
//! ======
//! A notice carries what should happen on each button as data
//! ([`DialogAction`]) rather than as a closure, so the whole dialog chain
//! (confirm → clear → acknowledge → navigate) is visible in state and
//! `DialogHost` is the single place that executes it. Only one notice is
//! shown at a time; showing another replaces it.

#[cfg(test)]
#[path = "dialog_test.rs"]
mod dialog_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::state::logout::LogoutFlow;
use crate::state::session::SessionContext;
use crate::util::auth::apply_logout_effects;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
    Question,
}

impl NoticeKind {
    fn css_modifier(self) -> &'static str {
        match self {
            Self::Success => "dialog--success",
            Self::Error => "dialog--error",
            Self::Question => "dialog--question",
        }
    }
}

/// Which button closed a dialog.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DialogResult {
    Confirmed,
    Cancelled,
}

/// Follow-up run by `DialogHost` when a button is pressed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DialogAction {
    Dismiss,
    Navigate(&'static str),
    /// Feed the answer to the logout confirmation flow.
    ResolveLogout(DialogResult),
    /// Dismissal of the "logged out" acknowledgment.
    AcknowledgeLogout,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub title: String,
    pub text: String,
    pub confirm_label: String,
    /// `Some` adds a cancel button.
    pub cancel_label: Option<String>,
    pub on_confirm: DialogAction,
    pub on_cancel: DialogAction,
}

impl Notice {
    fn new(kind: NoticeKind, title: &str, text: &str) -> Self {
        Self {
            kind,
            title: title.to_owned(),
            text: text.to_owned(),
            confirm_label: "OK".to_owned(),
            cancel_label: None,
            on_confirm: DialogAction::Dismiss,
            on_cancel: DialogAction::Dismiss,
        }
    }

    pub fn success(title: &str) -> Self {
        Self::new(NoticeKind::Success, title, "")
    }

    pub fn error(text: &str) -> Self {
        Self::new(NoticeKind::Error, "", text)
    }

    /// Navigate to `path` once the notice is dismissed, whichever button.
    #[must_use]
    pub fn then_navigate(mut self, path: &'static str) -> Self {
        self.on_confirm = DialogAction::Navigate(path);
        self.on_cancel = DialogAction::Navigate(path);
        self
    }

    /// "Are you sure?" prompt opening the logout flow.
    pub fn logout_confirm() -> Self {
        Self {
            confirm_label: "Yes, logout!".to_owned(),
            cancel_label: Some("Cancel".to_owned()),
            on_confirm: DialogAction::ResolveLogout(DialogResult::Confirmed),
            on_cancel: DialogAction::ResolveLogout(DialogResult::Cancelled),
            ..Self::new(NoticeKind::Question, "Are you sure?", "You will be logged out!")
        }
    }

    /// Acknowledgment shown after the session is cleared.
    pub fn logout_success() -> Self {
        Self {
            confirm_label: "Ok".to_owned(),
            on_confirm: DialogAction::AcknowledgeLogout,
            on_cancel: DialogAction::AcknowledgeLogout,
            ..Self::new(NoticeKind::Success, "Successfully", "You have successfully logged out!")
        }
    }

    /// Action bound to the button that produced `result`.
    pub fn action_for(&self, result: DialogResult) -> DialogAction {
        match result {
            DialogResult::Confirmed => self.on_confirm.clone(),
            DialogResult::Cancelled => self.on_cancel.clone(),
        }
    }
}

/// Handle to the single active notice, provided through context.
#[derive(Clone, Copy, Debug)]
pub struct DialogState {
    active: RwSignal<Option<Notice>>,
}

impl Default for DialogState {
    fn default() -> Self {
        Self::new()
    }
}

impl DialogState {
    pub fn new() -> Self {
        Self { active: RwSignal::new(None) }
    }

    pub fn expect() -> Self {
        expect_context::<Self>()
    }

    /// Show `notice`, replacing whatever is open.
    pub fn show(self, notice: Notice) {
        self.active.set(Some(notice));
    }

    pub fn active(self) -> Option<Notice> {
        self.active.get()
    }

    /// Close the open notice and return the action for `result`.
    pub fn close(self, result: DialogResult) -> Option<DialogAction> {
        let notice = self.active.try_update(Option::take).flatten()?;
        Some(notice.action_for(result))
    }
}

/// Execute the follow-up of a closed notice and advance the logout flow.
///
/// A notice that replaced one of the logout dialogs still ends that flow,
/// so the logout entry never stays stuck.
pub fn run_dialog_action<F>(
    action: &DialogAction,
    logout: RwSignal<LogoutFlow>,
    session: SessionContext,
    dialogs: DialogState,
    navigate: &F,
) where
    F: Fn(&str, NavigateOptions),
{
    if let DialogAction::Navigate(path) = action {
        navigate(path, NavigateOptions::default());
    }
    let (next, effects) = logout.get_untracked().follow(action);
    logout.set(next);
    apply_logout_effects(&effects, session, dialogs, navigate);
}

/// Renders the active notice and executes its follow-up actions.
///
/// Must be mounted inside the `Router` so it can navigate.
#[component]
pub fn DialogHost() -> impl IntoView {
    let dialogs = DialogState::expect();
    let session = SessionContext::expect();
    let logout = expect_context::<RwSignal<LogoutFlow>>();
    let navigate = StoredValue::new_local(use_navigate());

    let on_close = Callback::new(move |result: DialogResult| {
        let Some(action) = dialogs.close(result) else {
            return;
        };
        navigate.with_value(|navigate| run_dialog_action(&action, logout, session, dialogs, navigate));
    });

    view! {
        {move || {
            dialogs
                .active()
                .map(|notice| {
                    let Notice { kind, title, text, confirm_label, cancel_label, .. } = notice;
                    let class = format!("dialog {}", kind.css_modifier());
                    let title = (!title.is_empty()).then(move || view! { <h2 class="dialog__title">{title}</h2> });
                    let text = (!text.is_empty()).then(move || view! { <p class="dialog__text">{text}</p> });
                    let cancel = cancel_label
                        .map(|label| {
                            view! {
                                <button
                                    class="btn btn--danger"
                                    on:click=move |_| on_close.run(DialogResult::Cancelled)
                                >
                                    {label}
                                </button>
                            }
                        });
                    view! {
                        <div class="dialog-backdrop">
                            <div class=class role="dialog" aria-modal="true">
                                {title}
                                {text}
                                <div class="dialog__actions">
                                    {cancel}
                                    <button
                                        class="btn btn--primary"
                                        on:click=move |_| on_close.run(DialogResult::Confirmed)
                                    >
                                        {confirm_label}
                                    </button>
                                </div>
                            </div>
                        </div>
                    }
                })
        }}
    }
}
