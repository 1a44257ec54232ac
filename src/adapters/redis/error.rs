//! Error type for the Redis catalog adapter.

use std::fmt;

#[derive(Debug)]
pub enum StoreError {
    /// A Redis command failed.
    Command(deadpool_redis::redis::RedisError),
    /// Checking a connection out of the pool failed.
    Checkout(deadpool_redis::PoolError),
    /// Stored metadata could not be encoded or decoded.
    Codec(serde_json::Error),
    /// The pool itself could not be built from the configured URL.
    Setup(String),
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreError::Command(e) => write!(f, "redis command failed: {}", e),
            StoreError::Checkout(e) => write!(f, "redis pool checkout failed: {}", e),
            StoreError::Codec(e) => write!(f, "video metadata codec error: {}", e),
            StoreError::Setup(e) => write!(f, "redis pool setup failed: {}", e),
        }
    }
}

impl std::error::Error for StoreError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            StoreError::Command(e) => Some(e),
            StoreError::Checkout(e) => Some(e),
            StoreError::Codec(e) => Some(e),
            StoreError::Setup(_) => None,
        }
    }
}

impl From<deadpool_redis::redis::RedisError> for StoreError {
    fn from(err: deadpool_redis::redis::RedisError) -> Self {
        StoreError::Command(err)
    }
}

impl From<deadpool_redis::PoolError> for StoreError {
    fn from(err: deadpool_redis::PoolError) -> Self {
        StoreError::Checkout(err)
    }
}

impl From<serde_json::Error> for StoreError {
    fn from(err: serde_json::Error) -> Self {
        StoreError::Codec(err)
    }
}

impl From<deadpool_redis::CreatePoolError> for StoreError {
    fn from(err: deadpool_redis::CreatePoolError) -> Self {
        StoreError::Setup(format!("{}", err))
    }
}
