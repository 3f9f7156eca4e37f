//! Startup error types
//!
//! Request handling itself never fails; everything here happens before the
//! first connection is accepted.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ServerError {
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("Invalid address: {0}")]
    InvalidAddress(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Template serialization error: {0}")]
    Template(#[from] serde_json::Error),
}
