use crate::net::client::RequestClient;
use crate::schemas::AuthError;
use crate::schemas::auth::{AuthRequest, Role};
use crate::{error, info};

/// Sends a login request. On `ok: true` yields the role so the caller
/// can dispatch to the matching post-login surface.
pub async fn login(
    client: &RequestClient,
    username: &str,
    password: &str,
    role: Role,
) -> Result<Role, AuthError> {
    let reply = client
        .send(&AuthRequest::login(username, password, role))
        .await?;

    if reply.ok {
        info!("Logged in as {role}: {username}");
        Ok(role)
    } else {
        let msg = reply.message().to_string();
        error!("Login rejected for {username}: {msg}");
        Err(AuthError::Rejected(msg))
    }
}

/// Sends a register request. The caller is responsible for running local
/// validation first; nothing here re-checks the password policy.
pub async fn register(
    client: &RequestClient,
    username: &str,
    password: &str,
    role: Role,
) -> Result<(), AuthError> {
    let reply = client
        .send(&AuthRequest::register(username, password, role))
        .await?;

    if reply.ok {
        info!("Registered {username} as {role}");
        Ok(())
    } else {
        let msg = reply.message().to_string();
        error!("Registration rejected for {username}: {msg}");
        Err(AuthError::Rejected(msg))
    }
}
