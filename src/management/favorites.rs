use std::sync::Arc;

use tokio::sync::Mutex;

use crate::{
    error::ValidationError,
    types::{AddOutcome, Song},
    utils,
};

/// In-memory favorites list shared by all request handlers.
///
/// Songs keep their insertion order and ids are unique ignoring case. Every
/// operation runs under one lock, so a duplicate check and the following
/// insert can never interleave with another request. Nothing is persisted.
#[derive(Clone, Default)]
pub struct FavoritesManager {
    songs: Arc<Mutex<Vec<Song>>>,
}

impl FavoritesManager {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn add(&self, song: Song) -> Result<AddOutcome, ValidationError> {
        if song.id.trim().is_empty() {
            return Err(ValidationError::MissingParameter("id"));
        }

        let mut songs = self.songs.lock().await;
        if songs.iter().any(|s| utils::same_id(&s.id, &song.id)) {
            return Ok(AddOutcome::Duplicate);
        }

        songs.push(song);
        Ok(AddOutcome::Added)
    }

    /// Removes the first song whose id matches ignoring case.
    pub async fn remove(&self, id: &str) -> bool {
        let mut songs = self.songs.lock().await;
        match songs.iter().position(|s| utils::same_id(&s.id, id)) {
            Some(index) => {
                songs.remove(index);
                true
            }
            None => false,
        }
    }

    pub async fn list(&self) -> Vec<Song> {
        self.songs.lock().await.clone()
    }

    pub async fn contains(&self, id: &str) -> bool {
        self.songs
            .lock()
            .await
            .iter()
            .any(|s| utils::same_id(&s.id, id))
    }

    pub async fn len(&self) -> usize {
        self.songs.lock().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}
