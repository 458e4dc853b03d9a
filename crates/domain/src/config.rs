//! Application configuration structures

use serde::{Deserialize, Serialize};

/// Top-level application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub database: DatabaseConfig,
    #[serde(default)]
    pub http: HttpConfig,
}

/// Database settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseConfig {
    /// Path to the SQLite database file
    pub path: String,
    /// Connection pool size
    pub pool_size: u32,
}

/// HTTP server settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HttpConfig {
    /// Socket address the server binds to, e.g. `127.0.0.1:8080`
    pub addr: String,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self { addr: "127.0.0.1:8080".to_string() }
    }
}
