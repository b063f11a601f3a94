use super::*;

#[test]
fn backend_rejection_becomes_prefixed_notice() {
    let err = ApiError::Status { status: 401, message: "Invalid credentials".to_owned() };
    assert_eq!(classify_failure(&err), LoginFailure::Notice("Login failed: Invalid credentials".to_owned()));
}

#[test]
fn network_failure_is_reported_inline() {
    assert_eq!(
        classify_failure(&ApiError::Network("connection refused".to_owned())),
        LoginFailure::Inline(NETWORK_FAILURE)
    );
    assert_eq!(classify_failure(&ApiError::Unavailable), LoginFailure::Inline(NETWORK_FAILURE));
}

#[test]
fn login_request_sends_credentials_as_typed() {
    let req = build_login_request("  ada@example.com ", " pass word ");
    assert_eq!(req.email, "  ada@example.com ");
    assert_eq!(req.password, " pass word ");
}
