//! Server binary: settings from env, schema bootstrap, mount routes, serve.

use axum::Router;
use person_service::{
    common_routes_with_ready, connect_pool, ensure_schema, person_routes, AppConfig, AppState,
};
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("person_service=info,tower_http=info")),
        )
        .init();

    let config = AppConfig::from_env();
    let pool = connect_pool(&config.database_url, config.max_connections).await?;
    ensure_schema(&pool).await?;
    let state = AppState { pool };

    let app = Router::new()
        .merge(common_routes_with_ready(state.clone()))
        .merge(person_routes(state))
        .layer(TraceLayer::new_for_http());

    let listener = TcpListener::bind(config.server_addr()).await?;
    tracing::info!("listening on {}", listener.local_addr()?);
    axum::serve(listener, app).await?;
    Ok(())
}
