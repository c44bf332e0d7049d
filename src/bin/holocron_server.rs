//! Server binary: storage bootstrap, router assembly, HTTP listener.

use axum::Router;
use holocron::{
    catalog_routes, common_routes, connect_pool, database_url, ensure_database_exists,
    ensure_tables, AppState, StorageBackend,
};
use tokio::net::TcpListener;
use tower_http::limit::RequestBodyLimitLayer;
use tracing_subscriber::EnvFilter;

const MAX_BODY_BYTES: usize = 64 * 1024;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("holocron=info".parse()?))
        .init();

    let url = database_url();
    let backend = StorageBackend::from_url(&url);
    ensure_database_exists(&url).await?;
    let pool = connect_pool(&url).await?;
    ensure_tables(&pool, backend).await?;
    tracing::info!(backend = ?backend, "storage ready");

    let state = AppState { pool };
    let app = Router::new()
        .merge(common_routes(state.clone()))
        .merge(catalog_routes(state))
        .layer(RequestBodyLimitLayer::new(MAX_BODY_BYTES));

    let port: u16 = std::env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(3000);
    let listener = TcpListener::bind(("0.0.0.0", port)).await?;
    tracing::info!("listening on {}", listener.local_addr()?);
    axum::serve(listener, app).await?;
    Ok(())
}
