use crate::domain::video::{LikeChange, Video};
use async_trait::async_trait;
use std::error::Error;

/// Catalog backend: video metadata plus the per-video liker sets.
///
/// Implementations must make each method atomic per video id, so that the
/// like count a `LikeChange` reports is always the size of the liker set at
/// the moment of the call.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait VideoRepository: Send + Sync {
    /// Next value of the monotonically increasing id sequence.
    /// The first value returned is 1; ids are never reused.
    async fn next_id(&self) -> Result<u64, Box<dyn Error + Send + Sync>>;

    /// Insert or update a video keyed by its id.
    /// An existing liker set for the id is preserved.
    async fn save(&self, video: &Video) -> Result<(), Box<dyn Error + Send + Sync>>;

    /// All stored videos, ordered by id.
    async fn find_all(&self) -> Result<Vec<Video>, Box<dyn Error + Send + Sync>>;

    /// Look up a single video.
    async fn find_one(&self, id: u64) -> Result<Option<Video>, Box<dyn Error + Send + Sync>>;

    /// Whether a video with this id has been stored.
    async fn exists(&self, id: u64) -> Result<bool, Box<dyn Error + Send + Sync>>;

    /// Videos whose name matches `name` exactly.
    async fn find_by_name(&self, name: &str) -> Result<Vec<Video>, Box<dyn Error + Send + Sync>>;

    /// Videos with duration strictly less than `max`.
    async fn find_by_duration_less_than(
        &self,
        max: u64,
    ) -> Result<Vec<Video>, Box<dyn Error + Send + Sync>>;

    /// Record `user` as a liker of the video.
    /// Returns `None` if the id is unknown; `NoChange` if already recorded.
    async fn add_liker(
        &self,
        id: u64,
        user: &str,
    ) -> Result<Option<LikeChange>, Box<dyn Error + Send + Sync>>;

    /// Remove `user` from the video's liker set.
    /// Returns `None` if the id is unknown; `NoChange` if not recorded.
    async fn remove_liker(
        &self,
        id: u64,
        user: &str,
    ) -> Result<Option<LikeChange>, Box<dyn Error + Send + Sync>>;

    /// Current liker set for the video, `None` if the id is unknown.
    /// Member order is unspecified.
    async fn likers(&self, id: u64) -> Result<Option<Vec<String>>, Box<dyn Error + Send + Sync>>;
}
