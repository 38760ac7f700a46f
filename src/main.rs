//! Memorizer JSON API Server

use std::process;

use tokio::net::TcpListener;
use tracing::{error, info};

use memorizer::{
    api::{AppState, create_router},
    config::ServerConfig,
    error::MemorizerResult,
    observability, shutdown,
    store::Db,
};

#[tokio::main]
async fn main() {
    // Load configuration from .env and CLI arguments
    let config = ServerConfig::load().unwrap_or_else(|e| e.exit());

    if let Err(e) = observability::init(&config.logging) {
        eprintln!("Logging initialisation error: {e}");
        process::exit(1);
    }

    if let Err(e) = run(config).await {
        error!("server terminated: {e}");
        process::exit(1);
    }
}

async fn run(config: ServerConfig) -> MemorizerResult<()> {
    let db = Db::connect(
        &config.database.database_url,
        config.database.max_connections,
    )
    .await?;
    db.migrate().await?;

    let router = create_router(AppState::from_db(db));

    let addr = config.server.socket_addr();
    let listener = TcpListener::bind(&addr).await?;

    info!("Starting server on {addr}");

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown::signal())
        .await?;

    Ok(())
}
