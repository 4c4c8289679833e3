use super::*;

#[test]
fn begin_with_session_asks_for_confirmation() {
    let (next, effects) = LogoutFlow::Idle.begin(true);
    assert_eq!(next, LogoutFlow::ConfirmPending);
    assert_eq!(effects, vec![LogoutEffect::ShowConfirm]);
}

#[test]
fn begin_without_session_navigates_straight_to_login() {
    let (next, effects) = LogoutFlow::Idle.begin(false);
    assert_eq!(next, LogoutFlow::Idle);
    assert_eq!(effects, vec![LogoutEffect::Navigate("/")]);
}

#[test]
fn begin_restarts_from_any_state() {
    for stale in [LogoutFlow::ConfirmPending, LogoutFlow::Confirmed] {
        let (next, effects) = stale.begin(true);
        assert_eq!(next, LogoutFlow::ConfirmPending, "{stale:?}");
        assert_eq!(effects, vec![LogoutEffect::ShowConfirm]);
    }
}

#[test]
fn cancel_has_no_side_effects() {
    let (next, effects) = LogoutFlow::ConfirmPending.resolve(DialogResult::Cancelled);
    assert_eq!(next, LogoutFlow::Idle);
    assert!(effects.is_empty());
    assert!(!effects.contains(&LogoutEffect::ClearSession));
}

#[test]
fn confirm_clears_session_before_success_dialog() {
    let (next, effects) = LogoutFlow::ConfirmPending.resolve(DialogResult::Confirmed);
    assert_eq!(next, LogoutFlow::Confirmed);
    assert_eq!(effects, vec![LogoutEffect::ClearSession, LogoutEffect::ShowSuccess]);
}

#[test]
fn acknowledge_after_confirm_navigates_to_login() {
    let (next, effects) = LogoutFlow::Confirmed.acknowledge();
    assert_eq!(next, LogoutFlow::Idle);
    assert_eq!(effects, vec![LogoutEffect::Navigate("/")]);
}

#[test]
fn acknowledge_without_confirm_does_nothing() {
    let (next, effects) = LogoutFlow::Idle.acknowledge();
    assert_eq!(next, LogoutFlow::Idle);
    assert!(effects.is_empty());
}

#[test]
fn resolve_outside_pending_does_nothing() {
    let (next, effects) = LogoutFlow::Idle.resolve(DialogResult::Confirmed);
    assert_eq!(next, LogoutFlow::Idle);
    assert!(effects.is_empty());
}

#[test]
fn full_confirm_sequence_orders_effects() {
    let mut flow = LogoutFlow::default();
    let mut log = Vec::new();
    for step in 0..3 {
        let (next, effects) = match step {
            0 => flow.begin(true),
            1 => flow.resolve(DialogResult::Confirmed),
            _ => flow.acknowledge(),
        };
        flow = next;
        log.extend(effects);
    }
    assert_eq!(
        log,
        vec![
            LogoutEffect::ShowConfirm,
            LogoutEffect::ClearSession,
            LogoutEffect::ShowSuccess,
            LogoutEffect::Navigate("/"),
        ]
    );
    assert_eq!(flow, LogoutFlow::Idle);
}

// =============================================================
// follow
// =============================================================

#[test]
fn follow_routes_logout_actions() {
    assert_eq!(
        LogoutFlow::ConfirmPending.follow(&DialogAction::ResolveLogout(DialogResult::Confirmed)),
        LogoutFlow::ConfirmPending.resolve(DialogResult::Confirmed)
    );
    assert_eq!(LogoutFlow::Confirmed.follow(&DialogAction::AcknowledgeLogout), LogoutFlow::Confirmed.acknowledge());
}

#[test]
fn dismissing_replacement_notice_drops_pending_confirmation() {
    let (next, effects) = LogoutFlow::ConfirmPending.follow(&DialogAction::Dismiss);
    assert_eq!(next, LogoutFlow::Idle);
    assert!(effects.is_empty());
}

#[test]
fn dismissing_replacement_notice_acknowledges_confirmed_logout() {
    let (next, effects) = LogoutFlow::Confirmed.follow(&DialogAction::Navigate("/homeadmin"));
    assert_eq!(next, LogoutFlow::Idle);
    assert_eq!(effects, vec![LogoutEffect::Navigate("/")]);
}

#[test]
fn only_confirmed_awaits_acknowledgment() {
    assert!(LogoutFlow::Confirmed.awaiting_acknowledgment());
    assert!(!LogoutFlow::Idle.awaiting_acknowledgment());
    assert!(!LogoutFlow::ConfirmPending.awaiting_acknowledgment());
}
