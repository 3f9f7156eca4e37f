// Application state module
// Runtime state shared by every connection

use std::sync::atomic::AtomicUsize;

use tokio::sync::watch;

use super::types::Config;
use crate::routing::RouteTable;
use crate::templates::Templates;

/// Application state
pub struct AppState {
    pub config: Config,
    pub routes: RouteTable,
    pub templates: Templates,
    pub active_connections: AtomicUsize,
    /// Flips to `true` once shutdown starts; open connections finish their
    /// current response and close
    pub draining: watch::Sender<bool>,
}

impl AppState {
    /// Build state with the standard route table and freshly rendered templates
    pub fn new(config: Config) -> Result<Self, serde_json::Error> {
        Ok(Self {
            config,
            routes: RouteTable::standard(),
            templates: Templates::render()?,
            active_connections: AtomicUsize::new(0),
            draining: watch::channel(false).0,
        })
    }
}
