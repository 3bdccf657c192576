use axum::{Extension, Json, extract::Query};
use serde::Deserialize;

use crate::{api::views::LyricsView, server::AppState, utils, warning};

pub const LYRICS_NOT_AVAILABLE: &str = "Lyrics not available for this song";

#[derive(Debug, Clone, Default, Deserialize)]
pub struct LyricsParams {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub artist: String,
}

/// Lyrics, preview clip and track details for one song.
///
/// The three lookups run concurrently and fail independently: a missing
/// preview or unreachable lyrics provider only blanks that part of the view.
pub async fn lyrics(
    Query(params): Query<LyricsParams>,
    Extension(state): Extension<AppState>,
) -> Json<LyricsView> {
    let title = params.title.trim();
    let artist = params.artist.trim();
    let id = params.id.trim();

    let (lyrics, preview, details) = tokio::join!(
        state.lyrics.fetch(title, artist),
        state.catalog.preview_url(title, artist),
        async {
            if id.is_empty() {
                None
            } else {
                Some(state.catalog.song(id).await)
            }
        }
    );

    let preview_url = preview.unwrap_or_else(|e| {
        warning!("Preview lookup error: {}", e);
        None
    });

    let details = match details {
        Some(Ok(song)) => Some(song),
        Some(Err(e)) => {
            warning!("Error fetching track details: {}", e);
            None
        }
        None => None,
    };

    let in_favorites = !id.is_empty() && state.favorites.contains(id).await;

    Json(LyricsView {
        id: id.to_string(),
        title: title.to_string(),
        artist: artist.to_string(),
        lyrics_found: lyrics.is_some(),
        lyrics: lyrics.unwrap_or_else(|| LYRICS_NOT_AVAILABLE.to_string()),
        preview_url,
        spotify_url: state.catalog.external_url(id, title, artist),
        cover_url: details.as_ref().and_then(|s| s.cover_url.clone()),
        release_date: details
            .as_ref()
            .and_then(|s| s.release_date)
            .map(|d| d.to_string()),
        duration: details
            .as_ref()
            .and_then(|s| s.duration_ms)
            .map(utils::format_duration),
        in_favorites,
    })
}
