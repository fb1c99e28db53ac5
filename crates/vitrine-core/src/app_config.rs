use std::net::SocketAddr;

/// Connection settings for one backing-store variant.
#[derive(Debug, Clone)]
pub struct StoreConfig {
    /// Base URL of the store's HTTP API, no trailing slash.
    pub base_url: String,
    /// Rotation flag: a disabled store is skipped without any I/O.
    pub enabled: bool,
}

/// Application configuration, loaded once at startup.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub bind_addr: SocketAddr,
    pub log_level: String,
    /// Bounded per-request timeout for every backing-store call.
    pub store_timeout_secs: u64,
    pub store_user_agent: String,
    pub legacy_store: StoreConfig,
    pub market_store: StoreConfig,
    pub footwear_store: StoreConfig,
}
