use chrono::NaiveDate;
use lazy_regex::regex;
use reqwest::Url;

use crate::{
    error::ValidationError,
    types::{SearchFilters, Song, SortKey, SortOrder},
};

/// Number of songs on one result page.
pub const PAGE_SIZE: usize = 10;

/// How many records one catalog request asks for. The batch is filtered and
/// sorted locally before it is cut into pages.
pub const CATALOG_BATCH_SIZE: u32 = 50;

pub const MAX_LYRICS_CHARS: usize = 5000;
pub const LYRICS_TRUNCATION_MARKER: &str = "... (lyrics truncated)";

/// Cleans a free-text query before it is sent to a catalog provider.
///
/// Parenthesized annotations are removed together with the whitespace in
/// front of them, then everything from the first hyphen on is dropped.
/// Titles that contain a hyphen lose their tail; that trade-off is accepted
/// for better matches on "Artist - Title (Remastered)" style input.
///
/// ```text
/// "Shape of You (Remix) - Radio Edit" -> "Shape of You"
/// ```
pub fn sanitize_query(raw: &str) -> String {
    let mut cleaned = raw.to_string();

    // innermost groups first so nested annotations go away completely
    loop {
        let next = regex!(r"\s*\([^()]*\)").replace_all(&cleaned, "").into_owned();
        if next == cleaned {
            break;
        }
        cleaned = next;
    }

    // an unclosed "(" swallows the rest, a stray ")" is dropped
    let cleaned = regex!(r"(?s)\s*\(.*$").replace(&cleaned, "");
    let cleaned = cleaned.replace(')', "");

    let before_hyphen = cleaned.split('-').next().unwrap_or_default();

    before_hyphen.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Parses a `YYYY-MM-DD` release date. Coarser precisions such as `YYYY`
/// or `YYYY-MM` are treated as unknown.
pub fn parse_release_date(date: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(date.trim(), "%Y-%m-%d").ok()
}

/// Applies date and duration filters, then the requested sort.
///
/// Songs with an unknown release date or duration pass the respective filter.
pub fn apply_filters(songs: Vec<Song>, filters: &SearchFilters) -> Vec<Song> {
    let mut filtered: Vec<Song> = songs
        .into_iter()
        .filter(|song| matches_date(song, filters) && matches_duration(song, filters))
        .collect();

    if let Some(key) = filters.sort_by {
        sort_songs(&mut filtered, key, filters.sort_order);
    }

    filtered
}

fn matches_date(song: &Song, filters: &SearchFilters) -> bool {
    let Some(released) = song.release_date else {
        return true;
    };

    if filters.start_date.is_some_and(|start| released < start) {
        return false;
    }
    if filters.end_date.is_some_and(|end| released > end) {
        return false;
    }

    true
}

fn matches_duration(song: &Song, filters: &SearchFilters) -> bool {
    let Some(secs) = song.duration_secs() else {
        return true;
    };

    if filters.min_duration > 0 && secs < filters.min_duration {
        return false;
    }
    if filters.max_duration > 0 && secs > filters.max_duration {
        return false;
    }

    true
}

/// Stable sort by `key`. Unknown release dates come first in ascending order.
pub fn sort_songs(songs: &mut [Song], key: SortKey, order: SortOrder) {
    songs.sort_by(|a, b| {
        let ordering = match key {
            SortKey::Title => a.title.cmp(&b.title),
            SortKey::Artist => a.artist.cmp(&b.artist),
            SortKey::Date => a.release_date.cmp(&b.release_date),
        };

        match order {
            SortOrder::Asc => ordering,
            SortOrder::Desc => ordering.reverse(),
        }
    });
}

/// Number of pages needed for `total` results. Never less than one.
pub fn total_pages(total: usize) -> usize {
    if total == 0 {
        1
    } else {
        total.div_ceil(PAGE_SIZE)
    }
}

/// Returns the 1-based `page` of `items` and the full length of `items`.
///
/// Page `0` is read as page `1`; a page past the end is empty.
pub fn paginate<T>(items: &[T], page: usize) -> (&[T], usize) {
    let start = page.saturating_sub(1).saturating_mul(PAGE_SIZE);
    if start >= items.len() {
        return (&[], items.len());
    }

    let end = (start + PAGE_SIZE).min(items.len());
    (&items[start..end], items.len())
}

pub fn truncate_lyrics(lyrics: &str) -> String {
    match lyrics.char_indices().nth(MAX_LYRICS_CHARS) {
        Some((cut, _)) => format!("{}{}", &lyrics[..cut], LYRICS_TRUNCATION_MARKER),
        None => lyrics.to_string(),
    }
}

/// Formats milliseconds as `m:ss`.
pub fn format_duration(duration_ms: u64) -> String {
    let total_secs = duration_ms / 1000;
    format!("{}:{:02}", total_secs / 60, total_secs % 60)
}

/// Reads the `page` parameter. Absent or blank means the first page.
pub fn parse_page(page: Option<&str>) -> Result<usize, ValidationError> {
    let Some(raw) = page.map(str::trim).filter(|p| !p.is_empty()) else {
        return Ok(1);
    };

    match raw.parse::<usize>() {
        Ok(page) if page > 0 => Ok(page),
        _ => Err(ValidationError::InvalidParameter {
            name: "page",
            value: raw.to_string(),
        }),
    }
}

pub fn parse_date_param(
    name: &'static str,
    value: Option<&str>,
) -> Result<Option<NaiveDate>, ValidationError> {
    let Some(raw) = value.map(str::trim).filter(|v| !v.is_empty()) else {
        return Ok(None);
    };

    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .map(Some)
        .map_err(|_| ValidationError::InvalidParameter {
            name,
            value: raw.to_string(),
        })
}

/// Reads a duration bound in whole seconds. Absent or blank means unbounded.
pub fn parse_duration_param(
    name: &'static str,
    value: Option<&str>,
) -> Result<u64, ValidationError> {
    let Some(raw) = value.map(str::trim).filter(|v| !v.is_empty()) else {
        return Ok(0);
    };

    raw.parse::<u64>()
        .map_err(|_| ValidationError::InvalidParameter {
            name,
            value: raw.to_string(),
        })
}

/// Case-insensitive identifier comparison used by the favorites list.
pub fn same_id(a: &str, b: &str) -> bool {
    a.to_lowercase() == b.to_lowercase()
}

pub fn spotify_track_url(id: &str) -> String {
    format!("https://open.spotify.com/track/{}", id)
}

/// Spotify web search link, used when the song id does not come from Spotify.
pub fn spotify_search_url(title: &str, artist: &str) -> String {
    let query = format!("{} {}", title, artist);
    match Url::parse("https://open.spotify.com/search") {
        Ok(mut url) => {
            if let Ok(mut segments) = url.path_segments_mut() {
                segments.push(query.trim());
            }
            url.to_string()
        }
        Err(_) => String::new(),
    }
}
