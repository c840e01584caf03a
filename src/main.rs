mod config;
mod dto;
mod handlers;
mod models;
mod render;
mod repository;
mod service;

use std::sync::Arc;

use handlers::web;
use repository::{KeyValueStore, MemoryStore, RedisStore};
use service::NoteService;

#[tokio::main]
async fn main() {
    // Log setup
    tracing_subscriber::fmt::init();

    // Load config
    let cfg = config::load_config().expect("failed to locate or load config file");
    tracing::info!("Successfully loaded notepad config");

    // Store selection
    let store: Arc<dyn KeyValueStore> = match cfg.storage.as_str() {
        "memory" => {
            tracing::warn!("Using the in-memory store, notes will not survive a restart");
            Arc::new(MemoryStore::new())
        }
        _ => {
            let store = RedisStore::connect(&cfg.redis_url).await.unwrap_or_else(|e| {
                tracing::error!("Failed to connect to redis: {e}");
                panic!("failed to connect to redis: {e}");
            });
            tracing::info!("Connected to redis at {}", cfg.redis_url);
            Arc::new(store)
        }
    };

    // Service creation
    let service = Arc::new(NoteService::new(store));

    // Router config
    let router = web::router(service);

    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", cfg.port))
        .await
        .expect("Failed to bind to address");
    let addr = listener.local_addr().unwrap();

    tracing::info!("Notepad server starting, listening on {}", addr);

    axum::serve(listener, router)
        .await
        .expect("Failed to start server");
}
