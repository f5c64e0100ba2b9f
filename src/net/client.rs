use crate::debug;
use crate::schemas::auth::AuthRequest;
use crate::schemas::{ExchangeError, Reply};
use std::time::Duration;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tokio::net::TcpStream;
use tokio::time::timeout;

/// Per-stage deadlines for one exchange. The worst case for a single
/// call is the sum of the three.
#[derive(Debug, Clone, Copy)]
pub struct Timeouts {
    pub connect: Duration,
    pub write: Duration,
    pub read: Duration,
}

impl Default for Timeouts {
    fn default() -> Self {
        Self {
            connect: Duration::from_millis(3000),
            write: Duration::from_millis(2000),
            read: Duration::from_millis(5000),
        }
    }
}

/// Performs one-shot request/reply exchanges with the server: a fresh
/// TCP connection per call, one newline-terminated JSON line out, one
/// line back. No pooling, no retries; the connection is dropped on every
/// exit path.
#[derive(Debug, Clone)]
pub struct RequestClient {
    host: String,
    port: u16,
    timeouts: Timeouts,
}

impl RequestClient {
    pub fn new(host: &str, port: u16) -> Self {
        Self {
            host: host.to_string(),
            port,
            timeouts: Timeouts::default(),
        }
    }

    pub fn with_timeouts(host: &str, port: u16, timeouts: Timeouts) -> Self {
        Self {
            host: host.to_string(),
            port,
            timeouts,
        }
    }

    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Runs the full connect -> write -> read -> parse sequence for one
    /// request. Each stage either completes within its deadline or fails
    /// the call terminally.
    pub async fn send(&self, request: &AuthRequest) -> Result<Reply, ExchangeError> {
        let addr = self.addr();

        let mut stream = timeout(self.timeouts.connect, TcpStream::connect(&addr))
            .await
            .map_err(|_| ExchangeError::Connect {
                addr: addr.clone(),
                reason: "connect timed out".to_string(),
            })?
            .map_err(|e| ExchangeError::Connect {
                addr: addr.clone(),
                reason: e.to_string(),
            })?;
        debug!("Connected to {addr}");

        let mut line =
            serde_json::to_vec(request).map_err(|e| ExchangeError::Write(e.to_string()))?;
        line.push(b'\n');

        timeout(self.timeouts.write, async {
            stream.write_all(&line).await?;
            stream.flush().await
        })
        .await
        .map_err(|_| ExchangeError::Write("write timed out".to_string()))?
        .map_err(|e| ExchangeError::Write(e.to_string()))?;

        // Buffer until the first newline; a reply split across several
        // segments is reassembled, anything after the newline is ignored.
        let mut reader = BufReader::new(stream);
        let mut payload = Vec::new();
        timeout(self.timeouts.read, reader.read_until(b'\n', &mut payload))
            .await
            .map_err(|_| ExchangeError::ReadTimeout(self.timeouts.read.as_millis() as u64))?
            .map_err(|_| ExchangeError::ConnectionClosed)?;

        // EOF before the delimiter means the peer gave up mid-message.
        if !payload.ends_with(b"\n") {
            return Err(ExchangeError::ConnectionClosed);
        }
        payload.pop();

        let reply: Reply = serde_json::from_slice(&payload)
            .map_err(|e| ExchangeError::Parse(e.to_string()))?;
        debug!("Reply from {addr}: ok={}", reply.ok);
        Ok(reply)
    }
}
