// Configuration module entry point
// Manages application configuration and shared runtime state

mod state;
mod types;

use std::net::SocketAddr;
use std::time::Duration;

use crate::error::ServerError;

// Re-export public types
pub use state::AppState;
pub use types::Config;

/// Config file looked up when no path is given on the command line
pub const DEFAULT_CONFIG_PATH: &str = "config";

/// Prefix for environment overrides, e.g. `FETCH_SERVER__SERVER__PORT=4000`
pub const ENV_PREFIX: &str = "FETCH_SERVER";

impl Config {
    /// Load configuration from specified file path (extension optional)
    /// A missing file is not an error; defaults and environment apply
    pub fn load_from(config_path: &str) -> Result<Self, config::ConfigError> {
        let settings = config::Config::builder()
            .add_source(config::File::with_name(config_path).required(false))
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .separator("__")
                    .try_parsing(true),
            )
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 3000)?
            .set_default("server.backlog", 1024)?
            .set_default("logging.level", "info")?
            .set_default("logging.access_log", true)?
            .set_default("logging.access_log_format", "combined")?
            .set_default("performance.keep_alive_timeout", 75)?
            .set_default("performance.read_timeout", 30)?
            .set_default("performance.write_timeout", 30)?
            .set_default("performance.shutdown_timeout", 10)?
            .build()?;

        settings.try_deserialize()
    }

    pub fn socket_addr(&self) -> Result<SocketAddr, ServerError> {
        let raw = format!("{}:{}", self.server.host, self.server.port);
        raw.parse()
            .map_err(|e| ServerError::InvalidAddress(format!("{raw}: {e}")))
    }

    /// Time a connection gets to finish its current exchange once it has
    /// been asked to close
    pub fn connection_timeout(&self) -> Duration {
        Duration::from_secs(std::cmp::max(
            self.performance.read_timeout,
            self.performance.write_timeout,
        ))
    }

    /// Keep-alive lifetime, `None` when keep-alive is disabled
    pub fn keep_alive_timeout(&self) -> Option<Duration> {
        match self.performance.keep_alive_timeout {
            0 => None,
            secs => Some(Duration::from_secs(secs)),
        }
    }

    /// Grace period for draining connections on shutdown
    pub const fn shutdown_timeout(&self) -> Duration {
        Duration::from_secs(self.performance.shutdown_timeout)
    }
}
