//! Genius API, the alternate metadata catalog.
//!
//! Genius knows titles, artists, cover art and release dates, but neither
//! durations nor preview clips. Requests authenticate with a static access
//! token from the configuration.

use reqwest::Client;

use crate::{
    error::ProviderError,
    http,
    types::{GeniusSearchResponse, GeniusSongResponse, Song},
};

pub const PROVIDER: &str = "genius";

/// Largest page Genius serves on `/search`.
pub const MAX_PER_PAGE: u32 = 20;

pub async fn search_songs(
    client: &Client,
    api_url: &str,
    access_token: &str,
    query: &str,
    page: u32,
) -> Result<Vec<Song>, ProviderError> {
    let page = page.to_string();
    let per_page = MAX_PER_PAGE.to_string();
    let request = client
        .get(format!("{}/search", api_url))
        .bearer_auth(access_token)
        .query(&[
            ("q", query),
            ("page", page.as_str()),
            ("per_page", per_page.as_str()),
        ]);

    let res: GeniusSearchResponse = http::fetch_json(PROVIDER, request).await?;

    Ok(res
        .response
        .hits
        .into_iter()
        .map(|hit| Song::from(hit.result))
        .collect())
}

pub async fn get_song(
    client: &Client,
    api_url: &str,
    access_token: &str,
    id: &str,
) -> Result<Song, ProviderError> {
    let url = http::endpoint_url(PROVIDER, api_url, &["songs", id])?;
    let request = client.get(url).bearer_auth(access_token);

    let res: GeniusSongResponse = http::fetch_json(PROVIDER, request).await?;
    Ok(Song::from(res.response.song))
}
