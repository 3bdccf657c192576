use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};
use tabled::Table;

use crate::{
    config::Settings,
    error, http, info,
    management::CatalogManager,
    types::{SearchFilters, SongTableRow},
    warning,
};

pub async fn search(settings: Settings, query: String, page: usize, filters: SearchFilters) {
    let client = match http::build_client() {
        Ok(client) => client,
        Err(e) => error!("Cannot create HTTP client. Err: {}", e),
    };
    let catalog = CatalogManager::new(client, &settings);

    let pb = ProgressBar::new_spinner();
    pb.set_message(format!("Searching for \"{}\"...", query));
    pb.enable_steady_tick(Duration::from_millis(100));
    if let Ok(style) = ProgressStyle::with_template("{spinner:.blue} {msg}") {
        pb.set_style(style.tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"));
    }

    let result = catalog.search(&query, page, &filters).await;
    pb.finish_and_clear();

    match result {
        Ok(result) if result.songs.is_empty() => {
            warning!(
                "No songs on page {} ({} results in total)",
                result.page,
                result.total_results
            )
        }
        Ok(result) => {
            let rows: Vec<SongTableRow> = result.songs.iter().map(SongTableRow::from).collect();
            println!("{}", Table::new(rows));
            info!(
                "Page {}/{} - {} results",
                result.page, result.total_pages, result.total_results
            );
        }
        Err(e) => warning!("Search failed. Err: {}", e),
    }
}
