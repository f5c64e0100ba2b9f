use portal_client::schemas::auth::{Credential, Role};
use portal_client::validate::{ValidationError, validate_login, validate_registration};

fn credential(username: &str, password: &str, role: Option<Role>) -> Credential {
    Credential {
        username: username.to_string(),
        password: password.to_string(),
        role,
    }
}

#[test]
fn test_nine_alnum_chars_pass_registration() {
    let cred = credential("alice", "abcdefgh1", Some(Role::Expert));
    assert_eq!(validate_registration(&cred, "abcdefgh1"), Ok(Role::Expert));
}

#[test]
fn test_eight_chars_fail_registration() {
    let cred = credential("alice", "abcdefgh", Some(Role::Expert));
    assert_eq!(
        validate_registration(&cred, "abcdefgh"),
        Err(ValidationError::WeakPassword)
    );
}

#[test]
fn test_letters_only_fail_registration() {
    let cred = credential("alice", "abcdefghi", Some(Role::Expert));
    assert_eq!(
        validate_registration(&cred, "abcdefghi"),
        Err(ValidationError::WeakPassword)
    );
}

#[test]
fn test_confirmation_mismatch_fails_locally() {
    let cred = credential("alice", "password1", Some(Role::Expert));
    assert_eq!(
        validate_registration(&cred, "password2"),
        Err(ValidationError::ConfirmMismatch)
    );
}

#[test]
fn test_unselected_role_never_reaches_the_wire() {
    assert_eq!(
        validate_login(&credential("alice", "secretpass1", None)),
        Err(ValidationError::RoleUnselected)
    );
    assert_eq!(
        validate_registration(&credential("alice", "abcdefgh1", None), "abcdefgh1"),
        Err(ValidationError::RoleUnselected)
    );
}

#[test]
fn test_empty_fields_rejected() {
    assert_eq!(
        validate_login(&credential("alice", "", Some(Role::Factory))),
        Err(ValidationError::EmptyField)
    );
    assert_eq!(
        validate_registration(&credential("", "abcdefgh1", Some(Role::Factory)), "abcdefgh1"),
        Err(ValidationError::EmptyField)
    );
}
