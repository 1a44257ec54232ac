use crate::domain::video::{LikeChange, Video, VideoState, VideoStatus};
use crate::ports::repository::VideoRepository;
use crate::ports::storage::{Blob, BlobStore};
use std::error::Error;
use std::fmt;
use tokio::io::AsyncRead;

#[derive(Debug)]
pub enum CatalogError {
    /// No video with the requested id.
    NotFound,
    /// The caller already likes this video.
    AlreadyLiked,
    /// The caller does not currently like this video.
    NotLiked,
    /// A backend (repository or blob store) failed.
    Store(Box<dyn Error + Send + Sync>),
}

impl fmt::Display for CatalogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatalogError::NotFound => write!(f, "video not found"),
            CatalogError::AlreadyLiked => write!(f, "video already liked by this user"),
            CatalogError::NotLiked => write!(f, "video not liked by this user"),
            CatalogError::Store(e) => write!(f, "store error: {}", e),
        }
    }
}

impl std::error::Error for CatalogError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CatalogError::Store(e) => Some(e.as_ref()),
            _ => None,
        }
    }
}

impl From<Box<dyn Error + Send + Sync>> for CatalogError {
    fn from(err: Box<dyn Error + Send + Sync>) -> Self {
        CatalogError::Store(err)
    }
}

/// The catalog: video identity, metadata, payloads and likes, generic over
/// the repository and blob-store backends.
pub struct CatalogService<R, B> {
    repo: R,
    blobs: B,
}

impl<R, B> CatalogService<R, B>
where
    R: VideoRepository,
    B: BlobStore,
{
    pub fn new(repo: R, blobs: B) -> Self {
        Self { repo, blobs }
    }

    /// Register submitted metadata.
    ///
    /// A submitted id of 0 gets the next value of the id sequence; a nonzero
    /// id is kept as-is so a client can re-submit the same record. The
    /// payload URL is derived from `base_url`, the scheme+authority observed
    /// on the inbound request.
    pub async fn add_video(
        &self,
        mut video: Video,
        base_url: &str,
    ) -> Result<Video, CatalogError> {
        if video.id == 0 {
            video.id = self.repo.next_id().await?;
        }
        video.location = format!("{}/video/{}/data", base_url, video.id);
        self.repo.save(&video).await?;

        // Re-read so the response carries the derived like count.
        Ok(self.repo.find_one(video.id).await?.unwrap_or(video))
    }

    pub async fn list(&self) -> Result<Vec<Video>, CatalogError> {
        Ok(self.repo.find_all().await?)
    }

    pub async fn get(&self, id: u64) -> Result<Video, CatalogError> {
        self.repo.find_one(id).await?.ok_or(CatalogError::NotFound)
    }

    pub async fn find_by_title(&self, title: &str) -> Result<Vec<Video>, CatalogError> {
        Ok(self.repo.find_by_name(title).await?)
    }

    pub async fn find_by_duration_less_than(&self, max: u64) -> Result<Vec<Video>, CatalogError> {
        Ok(self.repo.find_by_duration_less_than(max).await?)
    }

    /// Stream an uploaded payload into the blob store.
    /// The id must already be registered; the write is not attempted otherwise.
    pub async fn save_data(
        &self,
        id: u64,
        data: &mut (dyn AsyncRead + Send + Unpin),
    ) -> Result<VideoStatus, CatalogError> {
        if !self.repo.exists(id).await? {
            return Err(CatalogError::NotFound);
        }
        let written = self.blobs.save(id, data).await?;
        tracing::info!("stored {} payload bytes for video {}", written, id);
        Ok(VideoStatus {
            state: VideoState::Ready,
        })
    }

    /// Open the stored payload along with its metadata.
    /// A registered id with no uploaded payload is reported as NotFound.
    pub async fn open_data(&self, id: u64) -> Result<(Video, Blob), CatalogError> {
        let video = self.repo.find_one(id).await?.ok_or(CatalogError::NotFound)?;
        let blob = self.blobs.open(id).await?.ok_or(CatalogError::NotFound)?;
        Ok((video, blob))
    }

    pub async fn like(&self, id: u64, user: &str) -> Result<(), CatalogError> {
        match self.repo.add_liker(id, user).await? {
            None => Err(CatalogError::NotFound),
            Some(LikeChange::NoChange { .. }) => Err(CatalogError::AlreadyLiked),
            Some(LikeChange::Applied { likes }) => {
                tracing::debug!("video {} liked by {} ({} total)", id, user, likes);
                Ok(())
            }
        }
    }

    pub async fn unlike(&self, id: u64, user: &str) -> Result<(), CatalogError> {
        match self.repo.remove_liker(id, user).await? {
            None => Err(CatalogError::NotFound),
            Some(LikeChange::NoChange { .. }) => Err(CatalogError::NotLiked),
            Some(LikeChange::Applied { likes }) => {
                tracing::debug!("video {} unliked by {} ({} total)", id, user, likes);
                Ok(())
            }
        }
    }

    pub async fn liked_by(&self, id: u64) -> Result<Vec<String>, CatalogError> {
        self.repo.likers(id).await?.ok_or(CatalogError::NotFound)
    }
}
