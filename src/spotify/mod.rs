//! # Spotify Integration Module
//!
//! Thin wrappers around the Spotify Web API endpoints Harmonify needs. Every
//! function takes the shared HTTP client and an access token and returns a
//! [`ProviderError`](crate::error::ProviderError) on failure; token caching
//! lives in [`crate::management::TokenManager`].
//!
//! ## Endpoints
//!
//! - `POST /api/token` - client credentials grant ([`auth`])
//! - `GET /search?type=track` - track search and preview lookup ([`tracks`])
//! - `GET /tracks/{id}` - single track details ([`tracks`])

pub mod auth;
pub mod tracks;

pub const PROVIDER: &str = "spotify";
