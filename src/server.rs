use std::{
    net::SocketAddr,
    path::Path,
    sync::Arc,
    time::Instant,
};

use axum::{
    Extension, Router,
    extract::Request,
    middleware::{self, Next},
    response::Response,
    routing::{get, post},
};
use tower_http::services::{ServeDir, ServeFile};

use crate::{
    Res, api,
    config::Settings,
    http, info,
    management::{CatalogManager, FavoritesManager, LyricsManager},
    warning,
};

/// Everything a request handler needs, cloned into each request.
#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<CatalogManager>,
    pub lyrics: Arc<LyricsManager>,
    pub favorites: FavoritesManager,
}

impl AppState {
    /// Builds the shared HTTP client and the managers on top of it.
    pub fn from_settings(settings: &Settings) -> Res<Self> {
        let client = http::build_client()?;

        Ok(AppState {
            catalog: Arc::new(CatalogManager::new(client.clone(), settings)),
            lyrics: Arc::new(LyricsManager::new(
                client,
                settings.lyrics_sources.clone(),
            )),
            favorites: FavoritesManager::new(),
        })
    }
}

pub fn router(state: AppState, static_dir: &Path) -> Router {
    let api_routes = Router::new()
        .route("/search", get(api::search))
        .route("/lyrics", get(api::lyrics))
        .route("/favorites", get(api::list_favorites))
        .route("/favorites/add", post(api::add_favorite))
        .route("/favorites/remove", post(api::remove_favorite));

    Router::new()
        .route_service("/", ServeFile::new(static_dir.join("index.html")))
        .route("/health", get(api::health))
        .nest("/api/v1", api_routes)
        .nest_service("/static", ServeDir::new(static_dir))
        .layer(Extension(state))
        .layer(middleware::from_fn(log_request))
}

pub async fn start_api_server(state: AppState, addr: SocketAddr, static_dir: &Path) -> Res<()> {
    let app = router(state, static_dir);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("Listening on http://{}", listener.local_addr()?);

    axum::serve(listener, app).await?;
    Ok(())
}

async fn log_request(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let path = request.uri().path().to_string();
    let started = Instant::now();

    let response = next.run(request).await;

    let status = response.status();
    let latency_ms = started.elapsed().as_millis();
    if status.is_client_error() || status.is_server_error() {
        warning!("{} {} -> {} ({}ms)", method, path, status, latency_ms);
    } else {
        info!("{} {} -> {} ({}ms)", method, path, status, latency_ms);
    }

    response
}
