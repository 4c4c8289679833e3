use super::*;

// =============================================================
// Notice builders
// =============================================================

#[test]
fn success_notice_has_title_and_single_button() {
    let notice = Notice::success("Login Successful !");
    assert_eq!(notice.kind, NoticeKind::Success);
    assert_eq!(notice.title, "Login Successful !");
    assert!(notice.text.is_empty());
    assert!(notice.cancel_label.is_none());
    assert_eq!(notice.action_for(DialogResult::Confirmed), DialogAction::Dismiss);
}

#[test]
fn error_notice_carries_text() {
    let notice = Notice::error("Invalid email or password");
    assert_eq!(notice.kind, NoticeKind::Error);
    assert_eq!(notice.text, "Invalid email or password");
}

#[test]
fn then_navigate_applies_to_both_buttons() {
    let notice = Notice::success("Register Success").then_navigate("/homeadmin");
    assert_eq!(notice.action_for(DialogResult::Confirmed), DialogAction::Navigate("/homeadmin"));
    assert_eq!(notice.action_for(DialogResult::Cancelled), DialogAction::Navigate("/homeadmin"));
}

// =============================================================
// Logout notices
// =============================================================

#[test]
fn logout_confirm_routes_answers_to_flow() {
    let notice = Notice::logout_confirm();
    assert_eq!(notice.kind, NoticeKind::Question);
    assert_eq!(notice.title, "Are you sure?");
    assert_eq!(notice.confirm_label, "Yes, logout!");
    assert!(notice.cancel_label.is_some());
    assert_eq!(
        notice.action_for(DialogResult::Confirmed),
        DialogAction::ResolveLogout(DialogResult::Confirmed)
    );
    assert_eq!(
        notice.action_for(DialogResult::Cancelled),
        DialogAction::ResolveLogout(DialogResult::Cancelled)
    );
}

#[test]
fn logout_success_acknowledges_on_any_dismissal() {
    let notice = Notice::logout_success();
    assert_eq!(notice.text, "You have successfully logged out!");
    assert!(notice.cancel_label.is_none());
    assert_eq!(notice.action_for(DialogResult::Confirmed), DialogAction::AcknowledgeLogout);
    assert_eq!(notice.action_for(DialogResult::Cancelled), DialogAction::AcknowledgeLogout);
}

#[test]
fn notice_kinds_map_to_distinct_modifiers() {
    assert_ne!(NoticeKind::Success.css_modifier(), NoticeKind::Error.css_modifier());
    assert_ne!(NoticeKind::Error.css_modifier(), NoticeKind::Question.css_modifier());
}

// =============================================================
// run_dialog_action
// =============================================================

mod run_action {
    use std::cell::RefCell;

    use super::*;
    use crate::state::session::{Role, Session, SessionState};

    fn signed_in() -> SessionContext {
        let mut state = SessionState::default();
        state.sign_in(Session { token: "t".to_owned(), role: Role::Mentor, id_user: 3, images: String::new() }, None);
        SessionContext::new(state)
    }

    /// Press the dialog button for `result` and run its follow-up.
    fn press<F>(result: DialogResult, logout: RwSignal<LogoutFlow>, session: SessionContext, dialogs: DialogState, navigate: &F)
    where
        F: Fn(&str, NavigateOptions),
    {
        if let Some(action) = dialogs.close(result) {
            run_dialog_action(&action, logout, session, dialogs, navigate);
        }
    }

    fn start_logout(logout: RwSignal<LogoutFlow>, session: SessionContext, dialogs: DialogState) {
        let (next, effects) = logout.get_untracked().begin(session.get_session_untracked().is_some());
        logout.set(next);
        apply_logout_effects(&effects, session, dialogs, &|_: &str, _: NavigateOptions| {});
    }

    #[test]
    fn confirm_then_acknowledge_navigates_only_at_the_end() {
        let session = signed_in();
        let dialogs = DialogState::new();
        let logout = RwSignal::new(LogoutFlow::Idle);
        let visited = RefCell::new(Vec::<String>::new());
        let navigate = |path: &str, _: NavigateOptions| visited.borrow_mut().push(path.to_owned());

        start_logout(logout, session, dialogs);
        assert_eq!(dialogs.active(), Some(Notice::logout_confirm()));

        press(DialogResult::Confirmed, logout, session, dialogs, &navigate);
        assert!(!session.is_logged_in());
        assert_eq!(dialogs.active(), Some(Notice::logout_success()));
        assert_eq!(logout.get_untracked(), LogoutFlow::Confirmed);
        assert!(visited.borrow().is_empty());

        press(DialogResult::Confirmed, logout, session, dialogs, &navigate);
        assert_eq!(logout.get_untracked(), LogoutFlow::Idle);
        assert_eq!(visited.into_inner(), vec!["/".to_owned()]);
    }

    #[test]
    fn cancel_keeps_session() {
        let session = signed_in();
        let dialogs = DialogState::new();
        let logout = RwSignal::new(LogoutFlow::Idle);
        let navigate = |_: &str, _: NavigateOptions| {};

        start_logout(logout, session, dialogs);
        press(DialogResult::Cancelled, logout, session, dialogs, &navigate);

        assert!(session.is_logged_in());
        assert_eq!(logout.get_untracked(), LogoutFlow::Idle);
        assert_eq!(dialogs.active(), None);
    }

    #[test]
    fn logout_works_again_after_confirmation_was_replaced() {
        let session = signed_in();
        let dialogs = DialogState::new();
        let logout = RwSignal::new(LogoutFlow::Idle);
        let navigate = |_: &str, _: NavigateOptions| {};

        start_logout(logout, session, dialogs);
        dialogs.show(Notice::error("Please re-login !"));
        press(DialogResult::Confirmed, logout, session, dialogs, &navigate);
        assert_eq!(logout.get_untracked(), LogoutFlow::Idle);
        assert!(session.is_logged_in());

        start_logout(logout, session, dialogs);
        assert_eq!(logout.get_untracked(), LogoutFlow::ConfirmPending);
        assert_eq!(dialogs.active(), Some(Notice::logout_confirm()));
    }

    #[test]
    fn replaced_success_notice_still_returns_to_login() {
        let session = signed_in();
        let dialogs = DialogState::new();
        let logout = RwSignal::new(LogoutFlow::Idle);
        let visited = RefCell::new(Vec::<String>::new());
        let navigate = |path: &str, _: NavigateOptions| visited.borrow_mut().push(path.to_owned());

        start_logout(logout, session, dialogs);
        press(DialogResult::Confirmed, logout, session, dialogs, &navigate);
        dialogs.show(Notice::error("Something Error In Server"));
        press(DialogResult::Confirmed, logout, session, dialogs, &navigate);

        assert_eq!(logout.get_untracked(), LogoutFlow::Idle);
        assert_eq!(visited.into_inner(), vec!["/".to_owned()]);
    }

    #[test]
    fn navigate_action_follows_path() {
        let session = signed_in();
        let dialogs = DialogState::new();
        let logout = RwSignal::new(LogoutFlow::Idle);
        let visited = RefCell::new(Vec::<String>::new());
        let navigate = |path: &str, _: NavigateOptions| visited.borrow_mut().push(path.to_owned());

        dialogs.show(Notice::success("Register Success").then_navigate("/homeadmin"));
        press(DialogResult::Confirmed, logout, session, dialogs, &navigate);

        assert_eq!(visited.into_inner(), vec!["/homeadmin".to_owned()]);
        assert_eq!(logout.get_untracked(), LogoutFlow::Idle);
    }
}
