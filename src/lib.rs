//! Harmonify Library
//!
//! A small web server that searches songs through a music catalog, shows
//! lyrics and preview clips, and keeps an in-memory list of favorites.
//!
//! # Modules
//!
//! - `api` - HTTP endpoints and their response view models
//! - `cli` - Command-line subcommands
//! - `config` - Settings from `.env`, the credentials file and the environment
//! - `error` - Error types shared by all layers
//! - `genius` - Genius API client, the alternate catalog
//! - `http` - Shared HTTP client and JSON fetch helpers
//! - `lyrics` - Lyrics providers
//! - `management` - Token cache, catalog search pipeline, lyrics fallback and favorites
//! - `server` - Router, shared state and request logging
//! - `spotify` - Spotify Web API client
//! - `types` - Data structures and provider payloads
//! - `utils` - Query sanitizing, filtering, sorting, pagination and formatting
//!
//! # Example
//!
//! ```
//! use harmonify::{config, server};
//!
//! #[tokio::main]
//! async fn main() -> harmonify::Res<()> {
//!     config::load_env().await?;
//!     let settings = config::Settings::load().await?;
//!     let state = server::AppState::from_settings(&settings)?;
//!     server::start_api_server(state, settings.server_address, &settings.static_dir).await
//! }
//! ```

pub mod api;
pub mod cli;
pub mod config;
pub mod error;
pub mod genius;
pub mod http;
pub mod lyrics;
pub mod management;
pub mod server;
pub mod spotify;
pub mod types;
pub mod utils;

/// A convenient Result type alias for top-level plumbing.
///
/// Domain code returns the specific errors from [`error`]; this alias is used
/// where several of them meet, such as server startup.
pub type Res<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// Prints an informational message with a blue bullet point.
///
/// # Example
///
/// ```
/// info!("Listening on http://{}", addr);
/// ```
#[macro_export]
macro_rules! info {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "o".blue().bold(), std::format_args!($($arg)*));
  })
}

/// Prints a success message with a green checkmark.
#[macro_export]
macro_rules! success {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "✓".green().bold(), std::format_args!($($arg)*));
  })
}

/// Prints an error message with a red exclamation mark and exits the program.
///
/// Only for fatal errors, such as invalid configuration at startup. Request
/// handlers never call it.
///
/// # Example
///
/// ```
/// error!("Cannot load settings. Err: {}", e);
/// // Program exits here - code after this will not execute
/// ```
#[macro_export]
macro_rules! error {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "!".red().bold(), std::format_args!($($arg)*));
    std::process::exit(1);
  })
}

/// Prints a warning message with a yellow exclamation mark.
///
/// Used for recoverable problems, most often a provider call that failed
/// and was replaced by an empty result.
#[macro_export]
macro_rules! warning {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "!".yellow().bold(), std::format_args!($($arg)*));
  })
}
