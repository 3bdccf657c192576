use base64::{Engine, engine::general_purpose::STANDARD};
use chrono::Utc;
use reqwest::{Client, header::AUTHORIZATION};

use crate::{
    error::ProviderError,
    http,
    spotify::PROVIDER,
    types::{Token, TokenResponse},
};

/// Requests an app-only access token using the client credentials grant.
///
/// The client id and secret travel as HTTP Basic credentials; no user is
/// involved, so the token only grants access to public catalog data.
///
/// # Errors
///
/// Fails with [`ProviderError`] on transport errors, a non-success status, or
/// a body without an `access_token`.
pub async fn request_client_token(
    client: &Client,
    token_url: &str,
    client_id: &str,
    client_secret: &str,
) -> Result<Token, ProviderError> {
    let credentials = STANDARD.encode(format!("{}:{}", client_id, client_secret));

    let request = client
        .post(token_url)
        .header(AUTHORIZATION, format!("Basic {}", credentials))
        .form(&[("grant_type", "client_credentials")]);

    let res: TokenResponse = http::fetch_json(PROVIDER, request).await?;
    if res.access_token.is_empty() {
        return Err(ProviderError::InvalidRequest {
            provider: PROVIDER,
            reason: "token endpoint returned an empty access token".to_string(),
        });
    }

    Ok(Token {
        access_token: res.access_token,
        expires_in: res.expires_in,
        obtained_at: Utc::now().timestamp() as u64,
    })
}
