use reqwest::Client;

use crate::{
    error::ProviderError,
    http,
    spotify::PROVIDER,
    types::{Song, SpotifySearchResponse, SpotifyTrack},
};

/// Searches tracks and maps them into [`Song`]s.
///
/// Returns the mapped songs together with the provider's own total, which
/// counts matches before any local filtering.
///
/// # Arguments
///
/// * `api_url` - Base URL of the Web API, e.g. `https://api.spotify.com/v1`
/// * `token` - Bearer token from the client credentials flow
/// * `query` - Already sanitized search text
/// * `limit` - Page size requested from Spotify (1-50)
/// * `offset` - Index of the first result
pub async fn search_tracks(
    client: &Client,
    api_url: &str,
    token: &str,
    query: &str,
    limit: u32,
    offset: u32,
) -> Result<(Vec<Song>, u64), ProviderError> {
    let limit = limit.to_string();
    let offset = offset.to_string();
    let request = client
        .get(format!("{}/search", api_url))
        .bearer_auth(token)
        .query(&[
            ("q", query),
            ("type", "track"),
            ("limit", limit.as_str()),
            ("offset", offset.as_str()),
        ]);

    let res: SpotifySearchResponse = http::fetch_json(PROVIDER, request).await?;
    let total = res.tracks.total;
    let songs = res
        .tracks
        .items
        .into_iter()
        .filter(|track| !track.id.is_empty())
        .map(Song::from)
        .collect();

    Ok((songs, total))
}

/// Fetches the full record of a single track.
///
/// `id` usually comes from a client, so it is sent as one escaped path segment.
pub async fn get_track(
    client: &Client,
    api_url: &str,
    token: &str,
    id: &str,
) -> Result<Song, ProviderError> {
    let url = http::endpoint_url(PROVIDER, api_url, &["tracks", id])?;
    let request = client.get(url).bearer_auth(token);

    let track: SpotifyTrack = http::fetch_json(PROVIDER, request).await?;
    Ok(Song::from(track))
}

/// Looks up a 30 second preview clip for `title` by `artist`.
///
/// Only the best match is considered; `Ok(None)` means that match has no
/// preview.
pub async fn find_preview_url(
    client: &Client,
    api_url: &str,
    token: &str,
    title: &str,
    artist: &str,
) -> Result<Option<String>, ProviderError> {
    let query = format!("{} {}", title, artist);
    let (songs, _) = search_tracks(client, api_url, token, query.trim(), 1, 0).await?;

    Ok(songs.into_iter().next().and_then(|song| song.preview_url))
}
