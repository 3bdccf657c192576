//! Lyrics providers.
//!
//! Each source answers `fetch(title, artist)` with the plain lyrics text, or
//! `None` when it has nothing for that song. The order in which sources are
//! tried is configured through `HARMONIFY_LYRICS_SOURCES`.

use reqwest::Client;

use crate::{
    error::{ConfigError, ProviderError},
    http,
    types::{LrclibResponse, LyricsOvhResponse},
};

pub const LYRICS_OVH: &str = "lyrics.ovh";
pub const LRCLIB: &str = "lrclib";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LyricsSource {
    /// `GET {base_url}/{artist}/{title}`
    LyricsOvh { base_url: String },
    /// `GET {base_url}/get?artist_name=..&track_name=..`
    Lrclib { base_url: String },
}

impl LyricsSource {
    pub fn name(&self) -> &'static str {
        match self {
            Self::LyricsOvh { .. } => LYRICS_OVH,
            Self::Lrclib { .. } => LRCLIB,
        }
    }

    /// Builds the source list from a comma separated order such as
    /// `"lyrics.ovh,lrclib"`. Duplicates are ignored; an order naming no
    /// source at all is rejected.
    pub fn parse_order(
        order: &str,
        lyrics_ovh_url: &str,
        lrclib_url: &str,
    ) -> Result<Vec<Self>, ConfigError> {
        let mut sources: Vec<Self> = Vec::new();

        for key in order.split(',').map(str::trim).filter(|k| !k.is_empty()) {
            let source = match key.to_ascii_lowercase().as_str() {
                "lyrics.ovh" | "lyricsovh" | "ovh" => Self::LyricsOvh {
                    base_url: lyrics_ovh_url.trim_end_matches('/').to_string(),
                },
                "lrclib" => Self::Lrclib {
                    base_url: lrclib_url.trim_end_matches('/').to_string(),
                },
                _ => {
                    return Err(ConfigError::InvalidValue {
                        key: "HARMONIFY_LYRICS_SOURCES",
                        value: key.to_string(),
                    });
                }
            };

            if !sources.iter().any(|s| s.name() == source.name()) {
                sources.push(source);
            }
        }

        if sources.is_empty() {
            return Err(ConfigError::InvalidValue {
                key: "HARMONIFY_LYRICS_SOURCES",
                value: order.to_string(),
            });
        }

        Ok(sources)
    }

    pub async fn fetch(
        &self,
        client: &Client,
        title: &str,
        artist: &str,
    ) -> Result<Option<String>, ProviderError> {
        let lyrics = match self {
            Self::LyricsOvh { base_url } => {
                let url = http::endpoint_url(LYRICS_OVH, base_url, &[artist, title])?;

                http::fetch_optional_json::<LyricsOvhResponse>(LYRICS_OVH, client.get(url))
                    .await?
                    .map(|res| res.lyrics)
            }
            Self::Lrclib { base_url } => {
                let request = client
                    .get(format!("{}/get", base_url))
                    .query(&[("artist_name", artist), ("track_name", title)]);

                http::fetch_optional_json::<LrclibResponse>(LRCLIB, request)
                    .await?
                    .and_then(|res| res.plain_lyrics)
            }
        };

        Ok(lyrics
            .map(|text| text.trim().to_string())
            .filter(|text| !text.is_empty()))
    }
}
