use anyhow::Context;
use portal_client::config::ConfigData;
use portal_client::net::auth::{login, register};
use portal_client::net::client::RequestClient;
use portal_client::schemas::auth::Credential;
use portal_client::session::{Prefill, Session};
use portal_client::validate::{validate_login, validate_registration};
use portal_client::{debug, info, init_logger};
use std::path::Path;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_logger();

    let mut config = ConfigData::load(Path::new(".env")).context("failed to load .env")?;
    let client = RequestClient::with_timeouts(&config.host, config.port, config.timeouts());
    let mut session = Session::new();

    let credential = Credential {
        username: config.username.clone(),
        password: config.password.clone(),
        role: config.role,
    };

    if !config.registered {
        // The config file carries a single password, so it stands in for
        // both the password and its confirmation.
        let role = validate_registration(&credential, &credential.password)
            .context("registration data rejected locally")?;

        session.begin_registration(Prefill {
            username: credential.username.clone(),
            role: credential.role,
        })?;
        register(&client, &credential.username, &credential.password, role).await?;
        session.registration_done(&credential.username, role)?;

        config
            .replace("registered", &true)
            .context("failed to save config data")?;
    } else {
        debug!("Client already registered");
    }

    let role = validate_login(&credential).context("login data rejected locally")?;
    let role = login(&client, &credential.username, &credential.password, role).await?;
    session.login_done(role)?;

    info!("Session active as {role}");
    Ok(())
}
