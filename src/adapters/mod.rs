//! Adapters - Concrete implementations of ports.

pub mod fs;
pub mod http;
pub mod memory;
pub mod redis;
