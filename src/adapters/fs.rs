//! Filesystem blob store.
//!
//! Payloads are stored as one file per video id under the configured media
//! directory. Transfers go through `tokio::io::copy`, so a payload is never
//! held in memory as a whole.

use crate::ports::storage::{Blob, BlobStore};
use async_trait::async_trait;
use std::error::Error;
use std::path::{Path, PathBuf};
use tokio::fs::File;
use tokio::io::{AsyncRead, BufWriter};

#[derive(Clone)]
pub struct FsBlobStore {
    media_dir: PathBuf,
}

impl FsBlobStore {
    pub fn new(media_dir: impl AsRef<Path>) -> Self {
        Self {
            media_dir: media_dir.as_ref().to_path_buf(),
        }
    }

    fn blob_path(&self, id: u64) -> PathBuf {
        self.media_dir.join(format!("video-{}.bin", id))
    }
}

#[async_trait]
impl BlobStore for FsBlobStore {
    async fn save<'a>(
        &self,
        id: u64,
        data: &'a mut (dyn AsyncRead + Send + Unpin + 'a),
    ) -> Result<u64, Box<dyn Error + Send + Sync>> {
        tokio::fs::create_dir_all(&self.media_dir).await?;

        let path = self.blob_path(id);
        let mut file = BufWriter::new(File::create(&path).await?);
        let written = tokio::io::copy(data, &mut file).await?;
        tracing::info!("saved payload for video {} to {:?}", id, path);
        Ok(written)
    }

    async fn open(&self, id: u64) -> Result<Option<Blob>, Box<dyn Error + Send + Sync>> {
        let path = self.blob_path(id);
        let file = match File::open(&path).await {
            Ok(file) => file,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(err) => return Err(err.into()),
        };
        let len = file.metadata().await?.len();
        Ok(Some(Blob {
            len,
            reader: Box::new(file),
        }))
    }
}
