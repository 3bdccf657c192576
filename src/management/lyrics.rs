use reqwest::Client;

use crate::{lyrics::LyricsSource, utils, warning};

/// Walks the configured lyrics sources in order until one has the song.
pub struct LyricsManager {
    client: Client,
    sources: Vec<LyricsSource>,
}

impl LyricsManager {
    pub fn new(client: Client, sources: Vec<LyricsSource>) -> Self {
        LyricsManager { client, sources }
    }

    pub fn sources(&self) -> &[LyricsSource] {
        &self.sources
    }

    /// Returns the lyrics of the first source that has them, truncated for
    /// display. When every source fails, the reasons are logged as a single
    /// warning and `None` is returned.
    pub async fn fetch(&self, title: &str, artist: &str) -> Option<String> {
        if title.trim().is_empty() || artist.trim().is_empty() {
            return None;
        }

        let mut failures: Vec<String> = Vec::new();
        for source in &self.sources {
            match source.fetch(&self.client, title, artist).await {
                Ok(Some(lyrics)) => return Some(utils::truncate_lyrics(&lyrics)),
                Ok(None) => failures.push(format!("{}: not found", source.name())),
                Err(e) => failures.push(e.to_string()),
            }
        }

        warning!(
            "No lyrics for '{}' by '{}' ({})",
            title,
            artist,
            failures.join("; ")
        );
        None
    }
}
