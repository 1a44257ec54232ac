use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use vidstore::adapters::fs::FsBlobStore;
use vidstore::adapters::http;
use vidstore::adapters::memory::MemoryStore;
use vidstore::adapters::redis::RedisStore;
use vidstore::application::catalog::CatalogService;
use vidstore::config::{Config, StoreBackend};

#[tokio::main]
async fn main() {
    let config = Config::from_env();

    tracing_subscriber::fmt::init();

    // 1. Blob storage (shared by both backends)
    if let Err(e) = tokio::fs::create_dir_all(&config.media_dir).await {
        tracing::error!("failed to create media dir {}: {}", config.media_dir, e);
        std::process::exit(1);
    }
    let blobs = FsBlobStore::new(&config.media_dir);

    // 2. Catalog backend + HTTP layer
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let app = match config.store {
        StoreBackend::Memory => {
            tracing::info!("using in-memory catalog");
            http::router(Arc::new(CatalogService::new(MemoryStore::new(), blobs)))
        }
        StoreBackend::Redis => {
            let store = match RedisStore::new(&config.redis_url) {
                Ok(store) => store,
                Err(e) => {
                    tracing::error!("failed to connect to Redis: {}", e);
                    std::process::exit(1);
                }
            };
            tracing::info!("using Redis catalog at {}", config.redis_url);
            http::router(Arc::new(CatalogService::new(store, blobs)))
        }
    }
    .layer(cors);

    // 3. Start Server
    let listener = tokio::net::TcpListener::bind(format!("{}:{}", config.addr, config.port))
        .await
        .expect("Failed to bind TCP listener");
    tracing::info!("listening at {}:{}", config.addr, config.port);
    axum::serve(listener, app)
        .await
        .expect("Server failed to start");
}
