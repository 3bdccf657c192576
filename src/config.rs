//! Configuration management for Harmonify.
//!
//! Settings are resolved once at startup, in this order (later wins):
//! 1. built-in defaults,
//! 2. the JSON credentials file (`HARMONIFY_CONFIG`, default `config.json`),
//! 3. environment variables, including those loaded from `.env` files.
//!
//! A malformed credentials file or a missing required credential is a
//! [`ConfigError`] and stops the process before the server starts.

use std::{
    env,
    net::SocketAddr,
    path::{Path, PathBuf},
    str::FromStr,
};

use serde::Deserialize;

use crate::{error::ConfigError, lyrics::LyricsSource};

pub const DEFAULT_SERVER_ADDRESS: &str = "127.0.0.1:8080";
pub const DEFAULT_CONFIG_FILE: &str = "config.json";
pub const DEFAULT_STATIC_DIR: &str = "static";
pub const DEFAULT_SPOTIFY_API_URL: &str = "https://api.spotify.com/v1";
pub const DEFAULT_SPOTIFY_TOKEN_URL: &str = "https://accounts.spotify.com/api/token";
pub const DEFAULT_GENIUS_API_URL: &str = "https://api.genius.com";
pub const DEFAULT_LYRICS_OVH_URL: &str = "https://api.lyrics.ovh/v1";
pub const DEFAULT_LRCLIB_URL: &str = "https://lrclib.net/api";
pub const DEFAULT_LYRICS_SOURCES: &str = "lyrics.ovh,lrclib";

/// Loads `.env` from the working directory and from the local data directory.
///
/// Variables already present in the environment are never overwritten, and
/// missing files are skipped:
/// - Linux: `~/.local/share/harmonify/.env`
/// - macOS: `~/Library/Application Support/harmonify/.env`
/// - Windows: `%LOCALAPPDATA%/harmonify/.env`
pub async fn load_env() -> Result<(), ConfigError> {
    let local = PathBuf::from(".env");
    if local.is_file() {
        dotenv::from_path(&local)?;
    }

    let mut path = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push("harmonify/.env");
    if path.is_file() {
        dotenv::from_path(&path)?;
    }

    Ok(())
}

/// Path of the JSON credentials file.
pub fn config_path() -> PathBuf {
    env::var("HARMONIFY_CONFIG")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from(DEFAULT_CONFIG_FILE))
}

/// Contents of the JSON credentials file. Every key is optional.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Credentials {
    #[serde(default)]
    pub spotify_client_id: Option<String>,
    #[serde(default)]
    pub spotify_client_secret: Option<String>,
    #[serde(default)]
    pub genius_access_token: Option<String>,
}

impl Credentials {
    /// Reads the credentials file. A missing file yields empty credentials so
    /// that environment variables alone can configure the server.
    pub async fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = match async_fs::read_to_string(path).await {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Self::default()),
            Err(source) => {
                return Err(ConfigError::ReadFailed {
                    path: path.to_path_buf(),
                    source,
                });
            }
        };

        serde_json::from_str(&content).map_err(|source| ConfigError::Malformed {
            path: path.to_path_buf(),
            source,
        })
    }
}

/// Which provider answers search queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogProvider {
    Spotify,
    Genius,
}

impl FromStr for CatalogProvider {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "spotify" => Ok(Self::Spotify),
            "genius" => Ok(Self::Genius),
            other => Err(ConfigError::InvalidValue {
                key: "HARMONIFY_CATALOG",
                value: other.to_string(),
            }),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Settings {
    pub server_address: SocketAddr,
    pub static_dir: PathBuf,
    pub catalog: CatalogProvider,
    pub lyrics_sources: Vec<LyricsSource>,
    pub spotify_client_id: String,
    pub spotify_client_secret: String,
    pub spotify_api_url: String,
    pub spotify_token_url: String,
    pub genius_access_token: Option<String>,
    pub genius_api_url: String,
}

impl Settings {
    /// Loads settings from the credentials file and the process environment.
    pub async fn load() -> Result<Self, ConfigError> {
        let credentials = Credentials::load(&config_path()).await?;
        Self::resolve(credentials, |key| env::var(key).ok())
    }

    /// Merges `credentials` with values returned by `lookup`.
    ///
    /// `lookup` stands in for the environment; blank values count as unset.
    pub fn resolve<F>(credentials: Credentials, lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let or_default = |key: &str, default: &str| get(key).unwrap_or_else(|| default.to_string());

        let raw_address = or_default("SERVER_ADDRESS", DEFAULT_SERVER_ADDRESS);
        let server_address =
            SocketAddr::from_str(&raw_address).map_err(|_| ConfigError::InvalidValue {
                key: "SERVER_ADDRESS",
                value: raw_address.clone(),
            })?;

        let catalog = match get("HARMONIFY_CATALOG") {
            Some(value) => value.parse()?,
            None => CatalogProvider::Spotify,
        };

        let spotify_client_id = get("SPOTIFY_API_AUTH_CLIENT_ID")
            .or(non_blank(credentials.spotify_client_id))
            .ok_or(ConfigError::MissingValue("SPOTIFY_API_AUTH_CLIENT_ID"))?;
        let spotify_client_secret = get("SPOTIFY_API_AUTH_CLIENT_SECRET")
            .or(non_blank(credentials.spotify_client_secret))
            .ok_or(ConfigError::MissingValue("SPOTIFY_API_AUTH_CLIENT_SECRET"))?;

        let genius_access_token =
            get("GENIUS_ACCESS_TOKEN").or(non_blank(credentials.genius_access_token));
        if catalog == CatalogProvider::Genius && genius_access_token.is_none() {
            return Err(ConfigError::MissingValue("GENIUS_ACCESS_TOKEN"));
        }

        let lyrics_sources = LyricsSource::parse_order(
            &or_default("HARMONIFY_LYRICS_SOURCES", DEFAULT_LYRICS_SOURCES),
            &or_default("LYRICS_OVH_URL", DEFAULT_LYRICS_OVH_URL),
            &or_default("LRCLIB_URL", DEFAULT_LRCLIB_URL),
        )?;

        Ok(Settings {
            server_address,
            static_dir: PathBuf::from(or_default("HARMONIFY_STATIC_DIR", DEFAULT_STATIC_DIR)),
            catalog,
            lyrics_sources,
            spotify_client_id,
            spotify_client_secret,
            spotify_api_url: trim_url(or_default("SPOTIFY_API_URL", DEFAULT_SPOTIFY_API_URL)),
            spotify_token_url: or_default("SPOTIFY_API_TOKEN_URL", DEFAULT_SPOTIFY_TOKEN_URL),
            genius_access_token,
            genius_api_url: trim_url(or_default("GENIUS_API_URL", DEFAULT_GENIUS_API_URL)),
        })
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

fn trim_url(url: String) -> String {
    url.trim_end_matches('/').to_string()
}
