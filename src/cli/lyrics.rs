use crate::{config::Settings, error, http, management::LyricsManager, warning};

pub async fn lyrics(settings: Settings, title: String, artist: String) {
    let client = match http::build_client() {
        Ok(client) => client,
        Err(e) => error!("Cannot create HTTP client. Err: {}", e),
    };

    let manager = LyricsManager::new(client, settings.lyrics_sources);
    match manager.fetch(&title, &artist).await {
        Some(lyrics) => println!("{}", lyrics),
        None => warning!("Lyrics not available for '{}' by '{}'", title, artist),
    }
}
