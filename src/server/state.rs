//! Server state and configuration.

use std::sync::Arc;
use std::time::{SystemTime, UNIX_EPOCH};

use crate::generator::CardGenerator;
use crate::password::PasswordSource;

/// Server configuration.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Address to listen on (e.g., "127.0.0.1:5000")
    pub listen_addr: String,
}

/// Application state shared across handlers.
pub struct AppState {
    pub generator: Arc<CardGenerator>,
    pub passwords: Arc<dyn PasswordSource>,
    /// Unix timestamp of server boot for cache busting.
    pub boot_time: u64,
}

impl AppState {
    pub fn new(
        generator: Arc<CardGenerator>,
        passwords: Arc<dyn PasswordSource>,
    ) -> Self {
        let boot_time = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_secs())
            .unwrap_or_default();
        Self {
            generator,
            passwords,
            boot_time,
        }
    }
}
