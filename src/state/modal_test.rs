use super::*;

// =============================================================
// open / close
// =============================================================

#[test]
fn open_sets_fields_and_opens() {
    let mut modal = ModalState::default();
    modal.open_with("T", "M", "Ok", Some("Cancel"), ModalAction::GoToExams, false);

    assert!(modal.is_open);
    assert_eq!(modal.title, "T");
    assert_eq!(modal.message, "M");
    assert_eq!(modal.confirm_label, "Ok");
    assert_eq!(modal.cancel_label.as_deref(), Some("Cancel"));
    assert_eq!(modal.action, ModalAction::GoToExams);
    assert!(!modal.forced);
    assert!(!modal.confirm_pending);
}

#[test]
fn second_open_while_open_is_a_no_op() {
    let mut modal = ModalState::default();
    modal.open_session_expired();
    let after_first = modal.clone();

    modal.open_with("Other", "Other", "Other", Some("x"), ModalAction::None, false);
    modal.open_access_denied();

    assert_eq!(modal, after_first);
}

#[test]
fn close_resets_to_default() {
    let mut modal = ModalState::default();
    modal.open_access_restricted();
    modal.confirm_pending = true;
    modal.close();
    assert_eq!(modal, ModalState::default());
}

#[test]
fn open_after_close_succeeds() {
    let mut modal = ModalState::default();
    modal.open_session_expired();
    modal.close();
    modal.open_access_denied();
    assert!(modal.is_open);
    assert_eq!(modal.title, "Access Denied");
}

// =============================================================
// canned dialogs
// =============================================================

#[test]
fn forced_dialogs_have_no_cancel_affordance() {
    for open in [
        ModalState::open_auth_required,
        ModalState::open_session_expired,
        ModalState::open_access_restricted,
        ModalState::open_access_denied,
    ] {
        let mut modal = ModalState::default();
        open(&mut modal);
        assert!(modal.forced, "{} should be forced", modal.title);
        assert_eq!(modal.cancel_label, None);
    }
}

#[test]
fn session_expired_confirm_ends_the_session() {
    let mut modal = ModalState::default();
    modal.open_session_expired();
    assert_eq!(modal.action, ModalAction::EndSessionThenLogin);
}

#[test]
fn ownership_denial_redirects_to_exams_not_login() {
    let mut modal = ModalState::default();
    modal.open_access_denied();
    assert_eq!(modal.action, ModalAction::GoToExams);
}
