//! Redis VideoRepository implementation.
//!
//! Like toggling leans on SADD/SREM return codes, so duplicate detection is
//! atomic per key without explicit locking. Like counts are recomputed from
//! SCARD on every read rather than stored.

use super::error::StoreError;
use super::pool::RedisStore;
use super::{ID_SET_KEY, LIKERS_SUFFIX, SEQ_KEY, VIDEO_PREFIX};
use crate::domain::video::{LikeChange, Video};
use crate::ports::repository::VideoRepository;
use async_trait::async_trait;
use deadpool_redis::redis::AsyncCommands;
use deadpool_redis::Connection;
use std::error::Error;

fn video_key(id: u64) -> String {
    format!("{}{}", VIDEO_PREFIX, id)
}

fn likers_key(id: u64) -> String {
    format!("{}{}{}", VIDEO_PREFIX, id, LIKERS_SUFFIX)
}

async fn read_video(
    conn: &mut Connection,
    id: u64,
) -> Result<Option<Video>, Box<dyn Error + Send + Sync>> {
    let json: Option<String> = conn.get(video_key(id)).await.map_err(StoreError::from)?;
    match json {
        Some(data) => {
            let mut video: Video = serde_json::from_str(&data).map_err(StoreError::from)?;
            let likes: u64 = conn.scard(likers_key(id)).await.map_err(StoreError::from)?;
            video.likes = likes;
            Ok(Some(video))
        }
        None => Ok(None),
    }
}

#[async_trait]
impl VideoRepository for RedisStore {
    async fn next_id(&self) -> Result<u64, Box<dyn Error + Send + Sync>> {
        let mut conn = self.pool.get().await.map_err(StoreError::from)?;
        let id: u64 = conn.incr(SEQ_KEY, 1i64).await.map_err(StoreError::from)?;
        Ok(id)
    }

    async fn save(&self, video: &Video) -> Result<(), Box<dyn Error + Send + Sync>> {
        let mut conn = self.pool.get().await.map_err(StoreError::from)?;
        let json = serde_json::to_string(video).map_err(StoreError::from)?;
        conn.set::<_, _, ()>(video_key(video.id), json)
            .await
            .map_err(StoreError::from)?;
        conn.sadd::<_, _, ()>(ID_SET_KEY, video.id)
            .await
            .map_err(StoreError::from)?;
        Ok(())
    }

    async fn find_all(&self) -> Result<Vec<Video>, Box<dyn Error + Send + Sync>> {
        let mut conn = self.pool.get().await.map_err(StoreError::from)?;
        let mut ids: Vec<u64> = conn.smembers(ID_SET_KEY).await.map_err(StoreError::from)?;
        ids.sort_unstable();

        let mut videos = Vec::with_capacity(ids.len());
        for id in ids {
            if let Some(video) = read_video(&mut conn, id).await? {
                videos.push(video);
            }
        }
        Ok(videos)
    }

    async fn find_one(&self, id: u64) -> Result<Option<Video>, Box<dyn Error + Send + Sync>> {
        let mut conn = self.pool.get().await.map_err(StoreError::from)?;
        read_video(&mut conn, id).await
    }

    async fn exists(&self, id: u64) -> Result<bool, Box<dyn Error + Send + Sync>> {
        let mut conn = self.pool.get().await.map_err(StoreError::from)?;
        let exists: bool = conn.exists(video_key(id)).await.map_err(StoreError::from)?;
        Ok(exists)
    }

    async fn find_by_name(&self, name: &str) -> Result<Vec<Video>, Box<dyn Error + Send + Sync>> {
        let videos = self.find_all().await?;
        Ok(videos.into_iter().filter(|v| v.name == name).collect())
    }

    async fn find_by_duration_less_than(
        &self,
        max: u64,
    ) -> Result<Vec<Video>, Box<dyn Error + Send + Sync>> {
        let videos = self.find_all().await?;
        Ok(videos.into_iter().filter(|v| v.duration < max).collect())
    }

    async fn add_liker(
        &self,
        id: u64,
        user: &str,
    ) -> Result<Option<LikeChange>, Box<dyn Error + Send + Sync>> {
        let mut conn = self.pool.get().await.map_err(StoreError::from)?;
        let exists: bool = conn.exists(video_key(id)).await.map_err(StoreError::from)?;
        if !exists {
            return Ok(None);
        }

        let added: u64 = conn
            .sadd(likers_key(id), user)
            .await
            .map_err(StoreError::from)?;
        let likes: u64 = conn.scard(likers_key(id)).await.map_err(StoreError::from)?;
        Ok(Some(if added == 0 {
            LikeChange::NoChange { likes }
        } else {
            LikeChange::Applied { likes }
        }))
    }

    async fn remove_liker(
        &self,
        id: u64,
        user: &str,
    ) -> Result<Option<LikeChange>, Box<dyn Error + Send + Sync>> {
        let mut conn = self.pool.get().await.map_err(StoreError::from)?;
        let exists: bool = conn.exists(video_key(id)).await.map_err(StoreError::from)?;
        if !exists {
            return Ok(None);
        }

        let removed: u64 = conn
            .srem(likers_key(id), user)
            .await
            .map_err(StoreError::from)?;
        let likes: u64 = conn.scard(likers_key(id)).await.map_err(StoreError::from)?;
        Ok(Some(if removed == 0 {
            LikeChange::NoChange { likes }
        } else {
            LikeChange::Applied { likes }
        }))
    }

    async fn likers(&self, id: u64) -> Result<Option<Vec<String>>, Box<dyn Error + Send + Sync>> {
        let mut conn = self.pool.get().await.map_err(StoreError::from)?;
        let exists: bool = conn.exists(video_key(id)).await.map_err(StoreError::from)?;
        if !exists {
            return Ok(None);
        }
        let members: Vec<String> = conn
            .smembers(likers_key(id))
            .await
            .map_err(StoreError::from)?;
        Ok(Some(members))
    }
}
