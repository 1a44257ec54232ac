//! In-memory catalog backend.
//!
//! Everything lives in one lock-guarded map, so per-id like toggles are
//! atomic and the reported like count always equals the liker-set size.
//! Nothing survives a restart.

use crate::domain::video::{LikeChange, Video};
use crate::ports::repository::VideoRepository;
use async_trait::async_trait;
use std::collections::{HashMap, HashSet};
use std::error::Error;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::RwLock;

struct Entry {
    video: Video,
    likers: HashSet<String>,
}

impl Entry {
    /// Snapshot the metadata with `likes` derived from the liker set.
    fn snapshot(&self) -> Video {
        let mut video = self.video.clone();
        video.likes = self.likers.len() as u64;
        video
    }
}

#[derive(Default)]
pub struct MemoryStore {
    seq: AtomicU64,
    entries: RwLock<HashMap<u64, Entry>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl VideoRepository for MemoryStore {
    async fn next_id(&self) -> Result<u64, Box<dyn Error + Send + Sync>> {
        Ok(self.seq.fetch_add(1, Ordering::SeqCst) + 1)
    }

    async fn save(&self, video: &Video) -> Result<(), Box<dyn Error + Send + Sync>> {
        let mut entries = self.entries.write().unwrap();
        entries
            .entry(video.id)
            .and_modify(|e| e.video = video.clone())
            .or_insert_with(|| Entry {
                video: video.clone(),
                likers: HashSet::new(),
            });
        Ok(())
    }

    async fn find_all(&self) -> Result<Vec<Video>, Box<dyn Error + Send + Sync>> {
        let entries = self.entries.read().unwrap();
        let mut videos: Vec<Video> = entries.values().map(Entry::snapshot).collect();
        videos.sort_by_key(|v| v.id);
        Ok(videos)
    }

    async fn find_one(&self, id: u64) -> Result<Option<Video>, Box<dyn Error + Send + Sync>> {
        let entries = self.entries.read().unwrap();
        Ok(entries.get(&id).map(Entry::snapshot))
    }

    async fn exists(&self, id: u64) -> Result<bool, Box<dyn Error + Send + Sync>> {
        let entries = self.entries.read().unwrap();
        Ok(entries.contains_key(&id))
    }

    async fn find_by_name(&self, name: &str) -> Result<Vec<Video>, Box<dyn Error + Send + Sync>> {
        let entries = self.entries.read().unwrap();
        let mut videos: Vec<Video> = entries
            .values()
            .filter(|e| e.video.name == name)
            .map(Entry::snapshot)
            .collect();
        videos.sort_by_key(|v| v.id);
        Ok(videos)
    }

    async fn find_by_duration_less_than(
        &self,
        max: u64,
    ) -> Result<Vec<Video>, Box<dyn Error + Send + Sync>> {
        let entries = self.entries.read().unwrap();
        let mut videos: Vec<Video> = entries
            .values()
            .filter(|e| e.video.duration < max)
            .map(Entry::snapshot)
            .collect();
        videos.sort_by_key(|v| v.id);
        Ok(videos)
    }

    async fn add_liker(
        &self,
        id: u64,
        user: &str,
    ) -> Result<Option<LikeChange>, Box<dyn Error + Send + Sync>> {
        let mut entries = self.entries.write().unwrap();
        let entry = match entries.get_mut(&id) {
            Some(entry) => entry,
            None => return Ok(None),
        };
        let inserted = entry.likers.insert(user.to_string());
        let likes = entry.likers.len() as u64;
        Ok(Some(if inserted {
            LikeChange::Applied { likes }
        } else {
            LikeChange::NoChange { likes }
        }))
    }

    async fn remove_liker(
        &self,
        id: u64,
        user: &str,
    ) -> Result<Option<LikeChange>, Box<dyn Error + Send + Sync>> {
        let mut entries = self.entries.write().unwrap();
        let entry = match entries.get_mut(&id) {
            Some(entry) => entry,
            None => return Ok(None),
        };
        let removed = entry.likers.remove(user);
        let likes = entry.likers.len() as u64;
        Ok(Some(if removed {
            LikeChange::Applied { likes }
        } else {
            LikeChange::NoChange { likes }
        }))
    }

    async fn likers(&self, id: u64) -> Result<Option<Vec<String>>, Box<dyn Error + Send + Sync>> {
        let entries = self.entries.read().unwrap();
        Ok(entries
            .get(&id)
            .map(|e| e.likers.iter().cloned().collect()))
    }
}
