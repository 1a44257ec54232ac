use serde::{Deserialize, Serialize};

/// Metadata record for a single uploaded media item.
///
/// `id` is assigned by the catalog on first submission (a submitted id of 0
/// means "unassigned") and never changes afterwards. `likes` is derived from
/// the video's liker set on every read, so it always matches the number of
/// distinct users recorded for the video.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Video {
    #[serde(default)]
    pub id: u64,
    pub name: String,
    /// Duration in seconds.
    pub duration: u64,
    #[serde(default)]
    pub content_type: String,
    #[serde(default)]
    pub likes: u64,
    /// Canonical URL where the raw payload can be fetched.
    #[serde(default)]
    pub location: String,
}

/// Upload completion state.
///
/// Payload writes complete synchronously, so the service only ever reports
/// `Ready`; `Processing` stays in the vocabulary for clients that poll.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum VideoState {
    Processing,
    Ready,
}

/// Status report returned after a payload upload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct VideoStatus {
    pub state: VideoState,
}

/// Outcome of a liker-set mutation, carrying the like count after the call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LikeChange {
    /// The set changed and `likes` is the new count.
    Applied { likes: u64 },
    /// The set was already in the requested state; nothing was modified.
    NoChange { likes: u64 },
}
