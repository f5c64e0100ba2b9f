pub mod config;
pub mod logger;
pub mod net;
pub mod schemas;
pub mod session;
pub mod validate;

// Re-export primary API so binaries can `use portal_client::*` cleanly.
pub use config::ConfigData;
pub use logger::{LogLevel, init_logger, init_logger_with_level, log};
pub use net::auth::{login, register};
pub use net::client::{RequestClient, Timeouts};
pub use schemas::{AuthError, ExchangeError, Reply};
pub use session::{Session, SessionState};
