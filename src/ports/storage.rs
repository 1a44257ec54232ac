use async_trait::async_trait;
use std::error::Error;
use tokio::io::AsyncRead;

/// An opened payload: its size plus a reader over the bytes.
pub struct Blob {
    pub len: u64,
    pub reader: Box<dyn AsyncRead + Send + Unpin>,
}

/// Raw payload storage, keyed by video id.
///
/// Both directions stream; implementations must never buffer a whole
/// payload in memory.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BlobStore: Send + Sync {
    /// Stream `data` into storage under `id`, replacing any previous
    /// payload. Returns the number of bytes written.
    async fn save<'a>(
        &self,
        id: u64,
        data: &'a mut (dyn AsyncRead + Send + Unpin + 'a),
    ) -> Result<u64, Box<dyn Error + Send + Sync>>;

    /// Open the payload stored under `id`, `None` if nothing was uploaded.
    async fn open(&self, id: u64) -> Result<Option<Blob>, Box<dyn Error + Send + Sync>>;
}
