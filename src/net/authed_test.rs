use super::*;

// =============================================================
// retry policy: renew once, retry once, never a third attempt
// =============================================================

#[test]
fn first_unauthorized_triggers_renew_and_retry() {
    assert_eq!(disposition(401, false), Disposition::RenewAndRetry);
}

#[test]
fn unauthorized_after_retry_fails_without_a_third_attempt() {
    assert_eq!(disposition(401, true), Disposition::Fail);
}

#[test]
fn success_statuses_are_handed_to_decoding() {
    assert_eq!(disposition(200, false), Disposition::Done);
    assert_eq!(disposition(200, true), Disposition::Done);
    assert_eq!(disposition(204, false), Disposition::Done);
}

#[test]
fn non_auth_errors_pass_through_untouched() {
    for status in [400u16, 403, 404, 409, 500, 503] {
        assert_eq!(disposition(status, false), Disposition::Done, "{status}");
        assert_eq!(disposition(status, true), Disposition::Done, "{status}");
    }
}
