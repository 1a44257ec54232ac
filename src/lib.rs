//! vidstore - Video catalog and like service
//!
//! Hexagonal Architecture:
//! - domain/: Pure data types (Video, VideoStatus, like outcomes)
//! - ports/: Trait definitions (VideoRepository, BlobStore)
//! - adapters/: Concrete implementations (in-memory, Redis, filesystem
//!   blobs, inbound HTTP)
//! - application/: The catalog service holding the business rules
//! - config: Environment configuration

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;

// Re-exports for convenience
pub use application::catalog::{CatalogError, CatalogService};
pub use config::{Config, StoreBackend};
pub use domain::video::{Video, VideoState, VideoStatus};
