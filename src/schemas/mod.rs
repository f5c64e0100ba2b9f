pub mod auth;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// One reply line from the server. Only `ok` and `msg` are defined;
/// anything else the server sends is ignored.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Reply {
    #[serde(default)]
    pub ok: bool,
    #[serde(default)]
    pub msg: Option<String>,
}

impl Reply {
    /// The user-facing explanation for a rejected request.
    pub fn message(&self) -> &str {
        self.msg.as_deref().unwrap_or("unknown error")
    }
}

/// Transport-level failure of a single exchange. Every variant is
/// terminal for the call that produced it; nothing is retried here.
#[derive(Debug, Error)]
pub enum ExchangeError {
    #[error("failed to connect to {addr}: {reason}")]
    Connect { addr: String, reason: String },

    #[error("failed to send request: {0}")]
    Write(String),

    #[error("no response from server within {0} ms")]
    ReadTimeout(u64),

    #[error("connection closed before a full reply arrived")]
    ConnectionClosed,

    #[error("failed to parse server reply: {0}")]
    Parse(String),
}

/// Outcome of a login or register operation: either the transport failed,
/// or the server answered with `ok: false`.
#[derive(Debug, Error)]
pub enum AuthError {
    #[error(transparent)]
    Exchange(#[from] ExchangeError),

    #[error("{0}")]
    Rejected(String),
}
