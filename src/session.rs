use crate::debug;
use crate::schemas::auth::Role;
use thiserror::Error;

/// Form values carried back to the login screen, either what the user
/// had typed before opening registration, or the freshly registered
/// identity. Passwords are never carried.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Prefill {
    pub username: String,
    pub role: Option<Role>,
}

/// At most one active view at a time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionState {
    LoggedOut { prefill: Prefill },
    Registering { saved: Prefill },
    LoggedInAs(Role),
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SessionError {
    #[error("cannot {attempted} while {current}")]
    InvalidTransition {
        attempted: &'static str,
        current: &'static str,
    },
}

/// Owns the navigation between the login, registration, and post-login
/// views as explicit state transitions.
#[derive(Debug)]
pub struct Session {
    state: SessionState,
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl Session {
    pub fn new() -> Self {
        Self {
            state: SessionState::LoggedOut {
                prefill: Prefill::default(),
            },
        }
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    fn state_name(&self) -> &'static str {
        match self.state {
            SessionState::LoggedOut { .. } => "logged out",
            SessionState::Registering { .. } => "registering",
            SessionState::LoggedInAs(_) => "logged in",
        }
    }

    /// Opens registration, remembering what the user had typed so a
    /// cancelled registration restores the login form.
    pub fn begin_registration(&mut self, typed: Prefill) -> Result<(), SessionError> {
        match self.state {
            SessionState::LoggedOut { .. } => {
                self.state = SessionState::Registering { saved: typed };
                Ok(())
            }
            _ => Err(self.invalid("begin registration")),
        }
    }

    /// Back button: return to login with the previously typed values.
    pub fn cancel_registration(&mut self) -> Result<(), SessionError> {
        if let SessionState::Registering { saved } = &self.state {
            let prefill = saved.clone();
            self.state = SessionState::LoggedOut { prefill };
            Ok(())
        } else {
            Err(self.invalid("cancel registration"))
        }
    }

    /// Successful registration returns to login with the new identity
    /// prefilled and the password field cleared.
    pub fn registration_done(&mut self, username: &str, role: Role) -> Result<(), SessionError> {
        match self.state {
            SessionState::Registering { .. } => {
                debug!("Registration complete, returning to login as {role}");
                self.state = SessionState::LoggedOut {
                    prefill: Prefill {
                        username: username.to_string(),
                        role: Some(role),
                    },
                };
                Ok(())
            }
            _ => Err(self.invalid("complete registration")),
        }
    }

    pub fn login_done(&mut self, role: Role) -> Result<(), SessionError> {
        match self.state {
            SessionState::LoggedOut { .. } => {
                self.state = SessionState::LoggedInAs(role);
                Ok(())
            }
            _ => Err(self.invalid("complete login")),
        }
    }

    fn invalid(&self, attempted: &'static str) -> SessionError {
        SessionError::InvalidTransition {
            attempted,
            current: self.state_name(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register_then_login_flow() {
        let mut session = Session::new();
        session
            .begin_registration(Prefill {
                username: "alice".into(),
                role: None,
            })
            .unwrap();
        session.registration_done("alice", Role::Expert).unwrap();

        match session.state() {
            SessionState::LoggedOut { prefill } => {
                assert_eq!(prefill.username, "alice");
                assert_eq!(prefill.role, Some(Role::Expert));
            }
            other => panic!("unexpected state: {other:?}"),
        }

        session.login_done(Role::Expert).unwrap();
        assert_eq!(*session.state(), SessionState::LoggedInAs(Role::Expert));
    }

    #[test]
    fn test_cancel_restores_typed_values() {
        let mut session = Session::new();
        let typed = Prefill {
            username: "bob".into(),
            role: Some(Role::Factory),
        };
        session.begin_registration(typed.clone()).unwrap();
        session.cancel_registration().unwrap();
        assert_eq!(
            *session.state(),
            SessionState::LoggedOut { prefill: typed }
        );
    }

    #[test]
    fn test_invalid_transitions_error() {
        let mut session = Session::new();
        assert!(session.cancel_registration().is_err());
        session.login_done(Role::Expert).unwrap();
        assert!(session.begin_registration(Prefill::default()).is_err());
        assert!(session.login_done(Role::Factory).is_err());
    }
}
