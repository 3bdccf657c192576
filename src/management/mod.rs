mod auth;
mod catalog;
mod favorites;
mod lyrics;

pub use auth::TokenManager;
pub use catalog::CatalogManager;
pub use favorites::FavoritesManager;
pub use lyrics::LyricsManager;
