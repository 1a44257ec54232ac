//! Domain types - pure data, no I/O.

pub mod video;
