//! Environment configuration.

use std::env;

/// Which catalog backend to run against.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StoreBackend {
    /// Lock-guarded map, nothing survives a restart.
    Memory,
    /// Redis-backed persisted catalog.
    Redis,
}

#[derive(Clone, Debug)]
pub struct Config {
    /// HTTP server bind address
    pub addr: String,
    /// HTTP server port
    pub port: String,
    /// Directory for stored video payloads
    pub media_dir: String,
    /// Catalog backend selection (STORE=memory|redis)
    pub store: StoreBackend,
    /// Redis connection URL (redis backend only)
    pub redis_url: String,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        dotenv::dotenv().ok();

        let store = match env::var("STORE")
            .unwrap_or_else(|_| String::from("memory"))
            .as_str()
        {
            "redis" => StoreBackend::Redis,
            _ => StoreBackend::Memory,
        };

        Self {
            addr: env::var("ADDR").unwrap_or_else(|_| String::from("127.0.0.1")),
            port: env::var("PORT").unwrap_or_else(|_| String::from("3000")),
            media_dir: env::var("MEDIA_DIR").unwrap_or_else(|_| String::from("./media")),
            store,
            redis_url: env::var("REDIS_URL").unwrap_or_else(|_| String::from("redis://127.0.0.1/")),
        }
    }
}
