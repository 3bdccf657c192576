use std::time::Duration;

use reqwest::{Client, RequestBuilder, StatusCode, Url};
use serde::de::DeserializeOwned;

use crate::error::ProviderError;

/// Upper bound for every call to a third-party provider. Calls are not retried.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

pub fn build_client() -> Result<Client, reqwest::Error> {
    Client::builder()
        .timeout(REQUEST_TIMEOUT)
        .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
        .build()
}

/// Appends `segments` to the path of `base_url`.
///
/// Each segment is percent-encoded as a whole, so `/`, `?` and `#` inside
/// user input never change the endpoint. `.` and `..` are rejected.
pub fn endpoint_url(
    provider: &'static str,
    base_url: &str,
    segments: &[&str],
) -> Result<Url, ProviderError> {
    if let Some(segment) = segments.iter().find(|s| matches!(**s, "" | "." | "..")) {
        return Err(ProviderError::InvalidRequest {
            provider,
            reason: format!("invalid path segment '{}'", segment),
        });
    }

    let mut url = Url::parse(base_url).map_err(|e| ProviderError::InvalidRequest {
        provider,
        reason: format!("invalid base url '{}': {}", base_url, e),
    })?;
    url.path_segments_mut()
        .map_err(|_| ProviderError::InvalidRequest {
            provider,
            reason: format!("base url '{}' cannot have a path", base_url),
        })?
        .pop_if_empty()
        .extend(segments);

    Ok(url)
}

/// Sends the request and decodes a successful JSON body.
pub async fn fetch_json<T: DeserializeOwned>(
    provider: &'static str,
    request: RequestBuilder,
) -> Result<T, ProviderError> {
    match fetch_optional_json(provider, request).await? {
        Some(value) => Ok(value),
        None => Err(ProviderError::Status {
            provider,
            status: StatusCode::NOT_FOUND,
        }),
    }
}

/// Like [`fetch_json`], but a `404 Not Found` yields `Ok(None)`.
pub async fn fetch_optional_json<T: DeserializeOwned>(
    provider: &'static str,
    request: RequestBuilder,
) -> Result<Option<T>, ProviderError> {
    let response = request
        .send()
        .await
        .map_err(|source| ProviderError::Transport { provider, source })?;

    let status = response.status();
    if status == StatusCode::NOT_FOUND {
        return Ok(None);
    }
    if !status.is_success() {
        return Err(ProviderError::Status { provider, status });
    }

    let body = response
        .bytes()
        .await
        .map_err(|source| ProviderError::Transport { provider, source })?;

    serde_json::from_slice(&body)
        .map(Some)
        .map_err(|source| ProviderError::Malformed { provider, source })
}
