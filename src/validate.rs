use crate::schemas::auth::{Credential, Role};
use thiserror::Error;

/// Local pre-submit failures. These are reported before any network call
/// and are distinct from transport and server errors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("username and password must not be empty")]
    EmptyField,

    #[error("a role must be selected")]
    RoleUnselected,

    #[error("password and confirmation do not match")]
    ConfirmMismatch,

    #[error(
        "password must be at least 9 characters of letters and digits only, \
         with at least one letter and one digit"
    )]
    WeakPassword,
}

/// Checks a login submission: non-empty fields and a selected role.
pub fn validate_login(credential: &Credential) -> Result<Role, ValidationError> {
    if credential.username.trim().is_empty() || credential.password.is_empty() {
        return Err(ValidationError::EmptyField);
    }
    credential.role.ok_or(ValidationError::RoleUnselected)
}

/// Checks a registration submission: non-empty fields, matching
/// confirmation, selected role, and the password policy shared with the
/// server.
pub fn validate_registration(
    credential: &Credential,
    confirm: &str,
) -> Result<Role, ValidationError> {
    if credential.username.trim().is_empty()
        || credential.password.is_empty()
        || confirm.is_empty()
    {
        return Err(ValidationError::EmptyField);
    }
    if credential.password != confirm {
        return Err(ValidationError::ConfirmMismatch);
    }
    let role = credential.role.ok_or(ValidationError::RoleUnselected)?;
    if !password_meets_policy(&credential.password) {
        return Err(ValidationError::WeakPassword);
    }
    Ok(role)
}

/// Policy: length >= 9, ASCII letters and digits only, at least one of
/// each.
pub fn password_meets_policy(password: &str) -> bool {
    if password.len() < 9 {
        return false;
    }
    let mut has_letter = false;
    let mut has_digit = false;
    for c in password.chars() {
        if c.is_ascii_alphabetic() {
            has_letter = true;
        } else if c.is_ascii_digit() {
            has_digit = true;
        } else {
            return false;
        }
    }
    has_letter && has_digit
}

#[cfg(test)]
mod tests {
    use super::*;

    fn credential(username: &str, password: &str, role: Option<Role>) -> Credential {
        Credential {
            username: username.to_string(),
            password: password.to_string(),
            role,
        }
    }

    #[test]
    fn test_password_policy() {
        assert!(password_meets_policy("abcdefgh1"));
        assert!(!password_meets_policy("abcdefgh")); // too short
        assert!(!password_meets_policy("abcdefghi")); // no digit
        assert!(!password_meets_policy("123456789")); // no letter
        assert!(!password_meets_policy("abcdefg1!")); // punctuation
    }

    #[test]
    fn test_login_requires_fields_and_role() {
        assert_eq!(
            validate_login(&credential("", "pw", Some(Role::Expert))),
            Err(ValidationError::EmptyField)
        );
        assert_eq!(
            validate_login(&credential("user", "pw", None)),
            Err(ValidationError::RoleUnselected)
        );
        assert_eq!(
            validate_login(&credential("user", "pw", Some(Role::Factory))),
            Ok(Role::Factory)
        );
    }

    #[test]
    fn test_registration_confirm_mismatch() {
        assert_eq!(
            validate_registration(
                &credential("user", "password1", Some(Role::Expert)),
                "password2"
            ),
            Err(ValidationError::ConfirmMismatch)
        );
    }

    #[test]
    fn test_registration_happy_path() {
        assert_eq!(
            validate_registration(
                &credential("user", "abcdefgh1", Some(Role::Expert)),
                "abcdefgh1"
            ),
            Ok(Role::Expert)
        );
    }
}
