use std::{env, net::SocketAddr, path::Path, sync::Arc};

use axum::Router;
use common::utils::logging::init_logging_default;
use dotenvy::dotenv;
use tower_http::cors::CorsLayer;
use tracing::info;

use crate::routes;
use service::{ranking::RankingService, runtime, storage::json_file_store::JsonFileStore};

/// Initialize logging via shared common utils
fn init_logging() {
    init_logging_default();
}

/// The leaderboard is served to browser games from arbitrary origins.
fn build_cors() -> CorsLayer {
    CorsLayer::very_permissive()
}

/// Load host/port from configs or env vars, with sensible fallbacks
fn load_bind_addr() -> anyhow::Result<SocketAddr> {
    let (host, port) = match configs::load_default() {
        Ok(cfg) => {
            let s = cfg.server;
            (s.host, s.port)
        }
        Err(_) => {
            let host = env::var("SERVER_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
            let port = env::var("SERVER_PORT")
                .ok()
                .and_then(|p| p.parse::<u16>().ok())
                .unwrap_or(5000);
            (host, port)
        }
    };
    Ok(format!("{}:{}", host, port).parse()?)
}

/// Resolve the score file path from configs, env, or the default location.
fn load_score_file() -> String {
    let mut storage = configs::load_default().map(|cfg| cfg.storage).unwrap_or_default();
    storage.normalize_from_env();
    storage.score_file
}

/// Public entry: build the app and run the HTTP server
pub async fn run() -> anyhow::Result<()> {
    dotenv().ok();
    init_logging();

    let score_file = load_score_file();
    if let Some(parent) = Path::new(&score_file).parent() {
        runtime::ensure_data_dir(&parent.to_string_lossy()).await?;
    }

    let store = JsonFileStore::new(&score_file).await?;
    let ranking = RankingService::new(Arc::new(store));

    let cors = build_cors();
    let app: Router = routes::build_router(ranking, cors);

    let addr = load_bind_addr()?;
    info!(%addr, %score_file, "starting leaderboard server");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}
