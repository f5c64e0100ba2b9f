use portal_client::schemas::{AuthError, ExchangeError};
use portal_client::validate::ValidationError;

#[test]
fn test_connect_error_names_the_endpoint() {
    let e = ExchangeError::Connect {
        addr: "127.0.0.1:5555".to_string(),
        reason: "connection refused".to_string(),
    };
    let s = format!("{}", e);
    assert!(s.contains("127.0.0.1:5555"));
    assert!(s.contains("connection refused"));
}

#[test]
fn test_read_timeout_reports_budget() {
    let s = format!("{}", ExchangeError::ReadTimeout(5000));
    assert!(s.contains("5000 ms"));
}

#[test]
fn test_rejected_error_is_the_bare_server_message() {
    let e = AuthError::Rejected("user already exists".to_string());
    assert_eq!(format!("{}", e), "user already exists");
}

#[test]
fn test_weak_password_message_states_the_policy() {
    let s = format!("{}", ValidationError::WeakPassword);
    assert!(s.contains("9 characters"));
    assert!(s.contains("letter"));
    assert!(s.contains("digit"));
}
