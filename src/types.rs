use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use tabled::Tabled;

use crate::utils;

/// A single track as the rest of the application sees it, independent of
/// the provider it came from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Song {
    pub id: String,
    pub title: String,
    pub artist: String,
    pub cover_url: Option<String>,
    pub release_date: Option<NaiveDate>,
    pub duration_ms: Option<u64>,
    pub lyrics: Option<String>,
    pub preview_url: Option<String>,
}

impl Song {
    pub fn new(id: impl Into<String>, title: impl Into<String>, artist: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            artist: artist.into(),
            cover_url: None,
            release_date: None,
            duration_ms: None,
            lyrics: None,
            preview_url: None,
        }
    }

    /// Duration in whole seconds, if the provider reported one.
    pub fn duration_secs(&self) -> Option<u64> {
        self.duration_ms.map(|ms| ms / 1000)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    Title,
    Artist,
    Date,
}

impl SortKey {
    /// Unknown keys yield `None`, which leaves results in provider order.
    pub fn from_key(key: &str) -> Option<Self> {
        match key.trim().to_ascii_lowercase().as_str() {
            "title" => Some(Self::Title),
            "artist" => Some(Self::Artist),
            "date" => Some(Self::Date),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

impl SortOrder {
    pub fn from_key(key: &str) -> Self {
        if key.trim().eq_ignore_ascii_case("desc") {
            Self::Desc
        } else {
            Self::Asc
        }
    }
}

/// Optional filters applied locally to a fetched batch of songs.
///
/// Durations are whole seconds, `0` meaning unbounded.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchFilters {
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub sort_by: Option<SortKey>,
    pub sort_order: SortOrder,
    pub min_duration: u64,
    pub max_duration: u64,
}

/// One page of a filtered and sorted search.
#[derive(Debug, Clone)]
pub struct SearchPage {
    pub songs: Vec<Song>,
    pub page: usize,
    pub total_results: usize,
    pub total_pages: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddOutcome {
    Added,
    Duplicate,
}

#[derive(Debug, Clone)]
pub struct Token {
    pub access_token: String,
    pub expires_in: u64,
    pub obtained_at: u64,
}

impl Token {
    pub fn is_expired(&self) -> bool {
        let now = Utc::now().timestamp() as u64;
        now >= self.obtained_at.saturating_add(self.expires_in).saturating_sub(60)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    #[serde(default)]
    pub token_type: String,
    #[serde(default = "default_expires_in")]
    pub expires_in: u64,
}

fn default_expires_in() -> u64 {
    3600
}

// -- Spotify payloads

#[derive(Debug, Clone, Deserialize)]
pub struct SpotifySearchResponse {
    pub tracks: SpotifyTrackPage,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SpotifyTrackPage {
    #[serde(default)]
    pub items: Vec<SpotifyTrack>,
    #[serde(default)]
    pub total: u64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SpotifyTrack {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub duration_ms: Option<u64>,
    #[serde(default)]
    pub artists: Vec<SpotifyArtist>,
    #[serde(default)]
    pub album: Option<SpotifyAlbum>,
    #[serde(default)]
    pub preview_url: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SpotifyArtist {
    pub name: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SpotifyAlbum {
    #[serde(default)]
    pub images: Vec<SpotifyImage>,
    #[serde(default)]
    pub release_date: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SpotifyImage {
    pub url: String,
}

impl From<SpotifyTrack> for Song {
    fn from(track: SpotifyTrack) -> Self {
        let (cover_url, release_date) = match track.album {
            Some(album) => (
                album.images.into_iter().next().map(|image| image.url),
                album
                    .release_date
                    .as_deref()
                    .and_then(utils::parse_release_date),
            ),
            None => (None, None),
        };

        Song {
            id: track.id,
            title: track.name,
            artist: track
                .artists
                .into_iter()
                .next()
                .map(|artist| artist.name)
                .unwrap_or_default(),
            cover_url,
            release_date,
            duration_ms: track.duration_ms,
            lyrics: None,
            preview_url: track.preview_url.filter(|url| !url.is_empty()),
        }
    }
}

// -- Genius payloads

#[derive(Debug, Clone, Deserialize)]
pub struct GeniusSearchResponse {
    pub response: GeniusHits,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GeniusHits {
    #[serde(default)]
    pub hits: Vec<GeniusHit>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GeniusHit {
    pub result: GeniusSong,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GeniusSongResponse {
    pub response: GeniusSongContainer,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GeniusSongContainer {
    pub song: GeniusSong,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GeniusSong {
    pub id: u64,
    pub title: String,
    pub primary_artist: GeniusArtist,
    #[serde(default)]
    pub song_art_image_url: Option<String>,
    #[serde(default)]
    pub release_date: Option<String>,
    #[serde(default)]
    pub release_date_components: Option<GeniusDateComponents>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GeniusArtist {
    pub name: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GeniusDateComponents {
    pub year: Option<i32>,
    pub month: Option<u32>,
    pub day: Option<u32>,
}

impl From<GeniusSong> for Song {
    fn from(song: GeniusSong) -> Self {
        let release_date = song
            .release_date
            .as_deref()
            .and_then(utils::parse_release_date)
            .or_else(|| {
                let components = song.release_date_components?;
                NaiveDate::from_ymd_opt(components.year?, components.month?, components.day?)
            });

        Song {
            id: song.id.to_string(),
            title: song.title,
            artist: song.primary_artist.name,
            cover_url: song.song_art_image_url.filter(|url| !url.is_empty()),
            release_date,
            duration_ms: None,
            lyrics: None,
            preview_url: None,
        }
    }
}

// -- Lyrics payloads

#[derive(Debug, Clone, Deserialize)]
pub struct LyricsOvhResponse {
    #[serde(default)]
    pub lyrics: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LrclibResponse {
    #[serde(default, rename = "plainLyrics")]
    pub plain_lyrics: Option<String>,
}

// -- CLI output

#[derive(Tabled)]
pub struct SongTableRow {
    pub title: String,
    pub artist: String,
    pub released: String,
    pub duration: String,
}

impl From<&Song> for SongTableRow {
    fn from(song: &Song) -> Self {
        SongTableRow {
            title: song.title.clone(),
            artist: song.artist.clone(),
            released: song
                .release_date
                .map(|date| date.to_string())
                .unwrap_or_else(|| "-".to_string()),
            duration: song
                .duration_ms
                .map(utils::format_duration)
                .unwrap_or_else(|| "-".to_string()),
        }
    }
}
