//! Redis-backed catalog adapter.
//!
//! Key layout:
//! - `video:seq`         id sequence (INCR)
//! - `video:<id>`        metadata JSON
//! - `video:<id>:likers` SET of user identifiers
//! - `videos`            SET of known ids

pub mod error;
pub mod pool;
pub mod repository;

pub use pool::RedisStore;

pub(crate) const VIDEO_PREFIX: &str = "video:";
pub(crate) const LIKERS_SUFFIX: &str = ":likers";
pub(crate) const ID_SET_KEY: &str = "videos";
pub(crate) const SEQ_KEY: &str = "video:seq";
