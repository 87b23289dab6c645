//! Application state for the API server

use chrono::{DateTime, Utc};
use receipt_core::{MemoryStore, PointsStore};
use std::io;
use std::net::SocketAddr;
use std::sync::Arc;

/// API server state
#[derive(Clone)]
pub struct AppState {
    /// Server configuration
    pub config: Arc<ApiConfig>,
    /// Score storage
    pub store: Arc<dyn PointsStore>,
    /// Service start time
    pub started_at: DateTime<Utc>,
    /// API version
    pub version: String,
}

impl AppState {
    /// Create state backed by a fresh in-memory store
    pub fn new(config: ApiConfig) -> Self {
        Self::with_store(config, Arc::new(MemoryStore::new()))
    }

    /// Create state around an existing store
    pub fn with_store(config: ApiConfig, store: Arc<dyn PointsStore>) -> Self {
        Self {
            config: Arc::new(config),
            store,
            started_at: Utc::now(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }

    /// Get service uptime in seconds
    pub fn uptime_secs(&self) -> u64 {
        (Utc::now() - self.started_at).num_seconds().max(0) as u64
    }
}

/// API server configuration
#[derive(Debug, Clone)]
pub struct ApiConfig {
    pub host: String,
    pub port: u16,
    pub enable_cors: bool,
    /// Max request body size (bytes)
    pub max_body_size: usize,
    pub request_timeout_secs: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
            enable_cors: true,
            max_body_size: 1024 * 1024, // 1MB
            request_timeout_secs: 30,
        }
    }
}

impl ApiConfig {
    /// Address the server binds to. `host` may be an IP literal or a hostname.
    pub async fn socket_addr(&self) -> io::Result<SocketAddr> {
        tokio::net::lookup_host((self.host.as_str(), self.port))
            .await?
            .next()
            .ok_or_else(|| {
                io::Error::new(
                    io::ErrorKind::AddrNotAvailable,
                    format!("host '{}' resolved to no addresses", self.host),
                )
            })
    }
}
