use reqwest::Client;
use tokio::sync::Mutex;

use crate::{error::ProviderError, spotify, types::Token};

/// Hands out Spotify access tokens, requesting a new one only when the cached
/// token is missing or about to expire.
pub struct TokenManager {
    client: Client,
    token_url: String,
    client_id: String,
    client_secret: String,
    token: Mutex<Option<Token>>,
}

impl TokenManager {
    pub fn new(client: Client, token_url: String, client_id: String, client_secret: String) -> Self {
        TokenManager {
            client,
            token_url,
            client_id,
            client_secret,
            token: Mutex::new(None),
        }
    }

    /// Returns a usable access token.
    ///
    /// The lock is held while a new token is requested, so concurrent callers
    /// wait for one refresh instead of each starting their own.
    pub async fn get_valid_token(&self) -> Result<String, ProviderError> {
        let mut cached = self.token.lock().await;
        if let Some(token) = cached.as_ref().filter(|t| !t.is_expired()) {
            return Ok(token.access_token.clone());
        }

        let token = spotify::auth::request_client_token(
            &self.client,
            &self.token_url,
            &self.client_id,
            &self.client_secret,
        )
        .await?;

        let access_token = token.access_token.clone();
        *cached = Some(token);
        Ok(access_token)
    }
}
