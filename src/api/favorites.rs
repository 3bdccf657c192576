use axum::{Extension, Json, extract::rejection::JsonRejection};
use serde::Deserialize;

use crate::{
    api::views::{FavoriteActionView, FavoritesView, RemoveFavoriteView, SongView},
    error::{ApiError, ValidationError},
    server::AppState,
    types::{AddOutcome, Song},
    warning,
};

#[derive(Debug, Clone, Deserialize)]
pub struct AddFavoriteRequest {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub artist: String,
    #[serde(default, alias = "coverUrl")]
    pub cover_url: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RemoveFavoriteRequest {
    #[serde(default)]
    pub id: String,
}

pub async fn list_favorites(Extension(state): Extension<AppState>) -> Json<FavoritesView> {
    let favorites = state.favorites.list().await;
    Json(FavoritesView {
        favorites: favorites.iter().map(SongView::from).collect(),
    })
}

/// Adds a song to the favorites.
///
/// The submitted fields are completed with the catalog's track details when
/// those can be fetched; otherwise the song is stored as submitted.
pub async fn add_favorite(
    Extension(state): Extension<AppState>,
    payload: Result<Json<AddFavoriteRequest>, JsonRejection>,
) -> Result<Json<FavoriteActionView>, ApiError> {
    let Json(req) = payload?;
    let id = req.id.trim().to_string();
    if id.is_empty() {
        return Err(ValidationError::MissingParameter("id").into());
    }

    if state.favorites.contains(&id).await {
        return Ok(Json(duplicate()));
    }

    let song = match state.catalog.song(&id).await {
        Ok(mut details) => {
            details.id = id;
            details
        }
        Err(e) => {
            warning!("Cannot fetch details for favorite {}: {}", id, e);
            let mut submitted = Song::new(id, req.title.trim(), req.artist.trim());
            submitted.cover_url = req.cover_url.filter(|url| !url.is_empty());
            submitted
        }
    };

    let outcome = state.favorites.add(song).await?;
    Ok(Json(match outcome {
        AddOutcome::Added => FavoriteActionView {
            success: true,
            message: "Song added to favorites".to_string(),
        },
        AddOutcome::Duplicate => duplicate(),
    }))
}

pub async fn remove_favorite(
    Extension(state): Extension<AppState>,
    payload: Result<Json<RemoveFavoriteRequest>, JsonRejection>,
) -> Result<Json<RemoveFavoriteView>, ApiError> {
    let Json(req) = payload?;
    let id = req.id.trim();
    if id.is_empty() {
        return Err(ValidationError::MissingParameter("id").into());
    }

    Ok(Json(RemoveFavoriteView {
        success: state.favorites.remove(id).await,
    }))
}

fn duplicate() -> FavoriteActionView {
    FavoriteActionView {
        success: false,
        message: "Song already in favorites".to_string(),
    }
}
