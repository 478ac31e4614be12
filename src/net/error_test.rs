use super::*;

#[test]
fn auth_rejection_statuses() {
    assert!(is_auth_rejection(400));
    assert!(is_auth_rejection(401));
    assert!(is_auth_rejection(403));
}

#[test]
fn other_statuses_are_not_rejections() {
    for status in [200u16, 204, 404, 409, 500, 502] {
        assert!(!is_auth_rejection(status), "{status}");
    }
}

#[test]
fn errors_render_readable_messages() {
    assert_eq!(ApiError::NoRefreshToken.to_string(), "no refresh token stored");
    assert_eq!(ApiError::Status(503).to_string(), "server returned status 503");
}
