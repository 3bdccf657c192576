//! Response bodies of the `/api/v1` endpoints.
//!
//! These are deliberately separate from [`Song`] so provider details never end
//! up in the public contract.

use serde::Serialize;

use crate::{
    types::{SearchFilters, SearchPage, Song, SortKey, SortOrder},
    utils,
};

#[derive(Debug, Clone, Serialize)]
pub struct SongView {
    pub id: String,
    pub title: String,
    pub artist: String,
    pub cover_url: Option<String>,
    pub release_date: Option<String>,
    pub duration: Option<String>,
    pub duration_seconds: Option<u64>,
    pub preview_url: Option<String>,
}

impl From<&Song> for SongView {
    fn from(song: &Song) -> Self {
        SongView {
            id: song.id.clone(),
            title: song.title.clone(),
            artist: song.artist.clone(),
            cover_url: song.cover_url.clone(),
            release_date: song.release_date.map(|d| d.format("%Y-%m-%d").to_string()),
            duration: song.duration_ms.map(utils::format_duration),
            duration_seconds: song.duration_secs(),
            preview_url: song.preview_url.clone(),
        }
    }
}

/// Filters echoed back so a client can re-render its form.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FiltersView {
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub sort_by: Option<&'static str>,
    pub sort_order: &'static str,
    pub min_duration: u64,
    pub max_duration: u64,
}

impl From<&SearchFilters> for FiltersView {
    fn from(filters: &SearchFilters) -> Self {
        FiltersView {
            start_date: filters.start_date.map(|d| d.to_string()),
            end_date: filters.end_date.map(|d| d.to_string()),
            sort_by: filters.sort_by.map(|key| match key {
                SortKey::Title => "title",
                SortKey::Artist => "artist",
                SortKey::Date => "date",
            }),
            sort_order: match filters.sort_order {
                SortOrder::Asc => "asc",
                SortOrder::Desc => "desc",
            },
            min_duration: filters.min_duration,
            max_duration: filters.max_duration,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct SearchResultsView {
    pub query: String,
    pub songs: Vec<SongView>,
    pub current_page: usize,
    pub total_pages: usize,
    pub total_results: usize,
    pub filters: FiltersView,
}

impl SearchResultsView {
    pub fn new(query: &str, page: &SearchPage, filters: &SearchFilters) -> Self {
        SearchResultsView {
            query: query.to_string(),
            songs: page.songs.iter().map(SongView::from).collect(),
            current_page: page.page,
            total_pages: page.total_pages,
            total_results: page.total_results,
            filters: FiltersView::from(filters),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct LyricsView {
    pub id: String,
    pub title: String,
    pub artist: String,
    pub lyrics: String,
    pub lyrics_found: bool,
    pub preview_url: Option<String>,
    pub spotify_url: String,
    pub cover_url: Option<String>,
    pub release_date: Option<String>,
    pub duration: Option<String>,
    pub in_favorites: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct FavoritesView {
    pub favorites: Vec<SongView>,
}

#[derive(Debug, Clone, Serialize)]
pub struct FavoriteActionView {
    pub success: bool,
    pub message: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct RemoveFavoriteView {
    pub success: bool,
}
