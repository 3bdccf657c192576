use std::net::SocketAddr;

use crate::{config::Settings, error, server, success, warning};

/// Starts the web server and blocks until it stops.
///
/// `address` overrides `SERVER_ADDRESS`; `open` launches the default browser
/// on the home page once the listener is about to start.
pub async fn serve(settings: Settings, address: Option<SocketAddr>, open: bool) {
    let addr = address.unwrap_or(settings.server_address);

    let state = match server::AppState::from_settings(&settings) {
        Ok(state) => state,
        Err(e) => error!("Cannot initialize server. Err: {}", e),
    };

    success!(
        "Harmonify {} using {:?} catalog, lyrics from [{}]",
        env!("CARGO_PKG_VERSION"),
        settings.catalog,
        settings
            .lyrics_sources
            .iter()
            .map(|s| s.name())
            .collect::<Vec<_>>()
            .join(", ")
    );

    if open && webbrowser::open(&format!("http://{}", addr)).is_err() {
        warning!(
            "Failed to open browser. Please navigate to http://{} manually.",
            addr
        );
    }

    if let Err(e) = server::start_api_server(state, addr, &settings.static_dir).await {
        error!("Server stopped. Err: {}", e);
    }
}
