use std::net::SocketAddr;

use clap::{
    CommandFactory, Parser, Subcommand,
    builder::{
        Styles,
        styling::{AnsiColor, Effects},
    },
};
use clap_complete::{Shell, generate};

use harmonify::{
    cli,
    config::{self, Settings},
    error,
    types::{SearchFilters, SortKey, SortOrder},
    utils,
};

fn styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::White.on_default() | Effects::BOLD)
        .usage(AnsiColor::White.on_default() | Effects::BOLD)
        .literal(AnsiColor::BrightBlue.on_default())
        .placeholder(AnsiColor::BrightGreen.on_default())
}

#[derive(Parser, Debug, Clone)]
#[clap(
  version = env!("CARGO_PKG_VERSION"),
  name=env!("CARGO_PKG_NAME"),
  bin_name=env!("CARGO_PKG_NAME"),
  author=env!("CARGO_PKG_AUTHORS"),
  about=env!("CARGO_PKG_DESCRIPTION"),
  styles=styles(),
)]
struct Cli {
    #[clap(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Run the web server
    Serve(ServeOptions),

    /// Search songs from the command line
    Search(SearchOptions),

    /// Print lyrics of a song
    Lyrics(LyricsOptions),

    /// Get shell completions
    Completions(CompletionsOption),
}

#[derive(Parser, Debug, Clone)]
pub struct ServeOptions {
    /// Address to bind, overrides SERVER_ADDRESS
    #[clap(long)]
    pub address: Option<SocketAddr>,

    /// Open the home page in the default browser
    #[clap(long)]
    pub open: bool,
}

#[derive(Parser, Debug, Clone)]
pub struct SearchOptions {
    /// Free-text query, e.g. "Artist - Title (Remastered)"
    pub query: String,

    /// Result page, starting at 1
    #[clap(long, default_value_t = 1)]
    pub page: usize,

    /// Sort key: title, artist or date
    #[clap(long)]
    pub sort_by: Option<String>,

    /// Sort order: asc or desc
    #[clap(long)]
    pub sort_order: Option<String>,

    /// Earliest release date (YYYY-MM-DD)
    #[clap(long)]
    pub start_date: Option<String>,

    /// Latest release date (YYYY-MM-DD)
    #[clap(long)]
    pub end_date: Option<String>,

    /// Minimum duration in seconds
    #[clap(long, default_value_t = 0)]
    pub min_duration: u64,

    /// Maximum duration in seconds
    #[clap(long, default_value_t = 0)]
    pub max_duration: u64,
}

#[derive(Parser, Debug, Clone)]
pub struct LyricsOptions {
    #[clap(long)]
    pub title: String,

    #[clap(long)]
    pub artist: String,
}

#[derive(Parser, Debug, Clone)]
pub struct CompletionsOption {
    shell: Shell,
}

impl SearchOptions {
    fn filters(&self) -> SearchFilters {
        let start_date = match utils::parse_date_param("start-date", self.start_date.as_deref()) {
            Ok(date) => date,
            Err(e) => error!("{}", e),
        };
        let end_date = match utils::parse_date_param("end-date", self.end_date.as_deref()) {
            Ok(date) => date,
            Err(e) => error!("{}", e),
        };

        SearchFilters {
            start_date,
            end_date,
            sort_by: self.sort_by.as_deref().and_then(SortKey::from_key),
            sort_order: self
                .sort_order
                .as_deref()
                .map(SortOrder::from_key)
                .unwrap_or_default(),
            min_duration: self.min_duration,
            max_duration: self.max_duration,
        }
    }
}

async fn load_settings() -> Settings {
    match Settings::load().await {
        Ok(settings) => settings,
        Err(e) => error!("Cannot load configuration. Err: {}", e),
    }
}

#[tokio::main]
async fn main() {
    if let Err(e) = config::load_env().await {
        error!("Cannot load environment. Err: {}", e);
    }

    let cli = Cli::parse();

    match cli.command {
        Command::Serve(opt) => cli::serve(load_settings().await, opt.address, opt.open).await,
        Command::Search(opt) => {
            let filters = opt.filters();
            cli::search(load_settings().await, opt.query, opt.page, filters).await
        }
        Command::Lyrics(opt) => cli::lyrics(load_settings().await, opt.title, opt.artist).await,
        Command::Completions(opt) => {
            let mut cmd = Cli::command_for_update();
            let name = cmd.get_name().to_string();
            generate(opt.shell, &mut cmd, name, &mut std::io::stdout())
        }
    }
}
