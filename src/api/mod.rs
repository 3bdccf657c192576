//! # API Module
//!
//! HTTP endpoints served by Harmonify. Every handler receives the shared
//! [`AppState`](crate::server::AppState) through an axum `Extension` and
//! answers with one of the view models in [`views`].
//!
//! ## Endpoints
//!
//! - [`health`] - `GET /health`, status and version
//! - [`search`] - `GET /api/v1/search`, one page of filtered, sorted results
//! - [`lyrics`] - `GET /api/v1/lyrics`, lyrics plus preview clip and track details
//! - [`list_favorites`] - `GET /api/v1/favorites`
//! - [`add_favorite`] - `POST /api/v1/favorites/add`
//! - [`remove_favorite`] - `POST /api/v1/favorites/remove`
//!
//! ## Failure behaviour
//!
//! Invalid parameters are rejected with `400`. A failing catalog turns a
//! search into a `500` with a generic message. Lyrics and preview lookups
//! never fail the request; their part of the view is left empty instead.

mod favorites;
mod health;
mod lyrics;
mod search;
pub mod views;

pub use favorites::{
    AddFavoriteRequest, RemoveFavoriteRequest, add_favorite, list_favorites, remove_favorite,
};
pub use health::health;
pub use lyrics::{LYRICS_NOT_AVAILABLE, LyricsParams, lyrics};
pub use search::{SearchParams, search};
