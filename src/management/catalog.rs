use reqwest::Client;

use crate::{
    config::{CatalogProvider, Settings},
    error::ProviderError,
    genius,
    management::TokenManager,
    spotify,
    types::{SearchFilters, SearchPage, Song},
    utils,
};

/// Entry point for everything that talks to the configured catalog.
pub struct CatalogManager {
    client: Client,
    provider: CatalogProvider,
    tokens: TokenManager,
    spotify_api_url: String,
    genius_api_url: String,
    genius_access_token: String,
}

impl CatalogManager {
    pub fn new(client: Client, settings: &Settings) -> Self {
        let tokens = TokenManager::new(
            client.clone(),
            settings.spotify_token_url.clone(),
            settings.spotify_client_id.clone(),
            settings.spotify_client_secret.clone(),
        );

        CatalogManager {
            client,
            provider: settings.catalog,
            tokens,
            spotify_api_url: settings.spotify_api_url.clone(),
            genius_api_url: settings.genius_api_url.clone(),
            genius_access_token: settings.genius_access_token.clone().unwrap_or_default(),
        }
    }

    pub fn provider(&self) -> CatalogProvider {
        self.provider
    }

    /// Runs the full search pipeline for one result page.
    ///
    /// The query is sanitized, one batch is fetched from the provider, the
    /// batch is filtered and sorted, and the requested page is cut out of the
    /// result. `total_results` counts songs after filtering.
    pub async fn search(
        &self,
        raw_query: &str,
        page: usize,
        filters: &SearchFilters,
    ) -> Result<SearchPage, ProviderError> {
        let query = utils::sanitize_query(raw_query);
        let fetched = if query.is_empty() {
            Vec::new()
        } else {
            self.fetch_batch(&query).await?
        };

        let filtered = utils::apply_filters(fetched, filters);
        let (songs, total_results) = utils::paginate(&filtered, page);

        Ok(SearchPage {
            songs: songs.to_vec(),
            page: page.max(1),
            total_results,
            total_pages: utils::total_pages(total_results),
        })
    }

    async fn fetch_batch(&self, query: &str) -> Result<Vec<Song>, ProviderError> {
        match self.provider {
            CatalogProvider::Spotify => {
                let token = self.tokens.get_valid_token().await?;
                let (songs, _) = spotify::tracks::search_tracks(
                    &self.client,
                    &self.spotify_api_url,
                    &token,
                    query,
                    utils::CATALOG_BATCH_SIZE,
                    0,
                )
                .await?;
                Ok(songs)
            }
            CatalogProvider::Genius => {
                genius::search_songs(
                    &self.client,
                    &self.genius_api_url,
                    &self.genius_access_token,
                    query,
                    1,
                )
                .await
            }
        }
    }

    /// Fetches the full record of one song by its provider id.
    pub async fn song(&self, id: &str) -> Result<Song, ProviderError> {
        match self.provider {
            CatalogProvider::Spotify => {
                let token = self.tokens.get_valid_token().await?;
                spotify::tracks::get_track(&self.client, &self.spotify_api_url, &token, id).await
            }
            CatalogProvider::Genius => {
                genius::get_song(
                    &self.client,
                    &self.genius_api_url,
                    &self.genius_access_token,
                    id,
                )
                .await
            }
        }
    }

    /// Preview clips always come from Spotify, whichever catalog is active.
    pub async fn preview_url(
        &self,
        title: &str,
        artist: &str,
    ) -> Result<Option<String>, ProviderError> {
        if title.trim().is_empty() {
            return Ok(None);
        }

        let token = self.tokens.get_valid_token().await?;
        spotify::tracks::find_preview_url(
            &self.client,
            &self.spotify_api_url,
            &token,
            title,
            artist,
        )
        .await
    }

    /// Link to the song on Spotify.
    pub fn external_url(&self, id: &str, title: &str, artist: &str) -> String {
        match self.provider {
            CatalogProvider::Spotify if !id.is_empty() => utils::spotify_track_url(id),
            _ => utils::spotify_search_url(title, artist),
        }
    }
}
