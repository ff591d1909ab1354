//! Layout Quest API server entry point.

use std::sync::Arc;

use layoutquest_api::config::ServerConfig;
use layoutquest_api::error::AppError;
use layoutquest_api::routes;
use layoutquest_api::state::AppState;
use layoutquest_core::clock::{Clock, SystemClock};
use layoutquest_guild::application::store::ProgressStore;
use layoutquest_guild::application::ticker::ExpiryTicker;
use layoutquest_guild::domain::catalog::QuestCatalog;
use layoutquest_oracle::GeminiClient;
use layoutquest_record_store::FileRecordStore;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), AppError> {
    // Initialize tracing subscriber.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .json()
        .init();

    tracing::info!("Starting Layout Quest API server");

    let config = ServerConfig::from_env()?;

    let catalog = match &config.quest_catalog_path {
        Some(path) => {
            let source = tokio::fs::read_to_string(path).await.map_err(|e| {
                AppError::Config(format!("cannot read quest catalog {}: {e}", path.display()))
            })?;
            QuestCatalog::from_yaml(&source)?
        }
        None => QuestCatalog::default_board()?,
    };
    tracing::info!(quests = catalog.len(), "quest catalog loaded");

    let generator = GeminiClient::from_env();
    let clock: Arc<dyn Clock> = Arc::new(SystemClock);
    let progress_store = ProgressStore::new(Arc::new(FileRecordStore::new(&config.data_dir)));
    tracing::info!(data_dir = %config.data_dir.display(), "progress store ready");

    let ticker = ExpiryTicker::spawn(clock.clone(), progress_store.clone(), config.expiry_interval);

    let app_state = AppState::new(clock, progress_store, catalog, Arc::new(generator));

    // TODO: Replace CorsLayer::permissive() with the front-end's origin once it has a fixed host.
    let app = routes::app(app_state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    tracing::info!("Listening on {}", config.addr);
    let listener = tokio::net::TcpListener::bind(config.addr).await?;

    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            if let Err(e) = tokio::signal::ctrl_c().await {
                tracing::warn!(error = %e, "failed to listen for shutdown signal");
            }
        })
        .await?;

    ticker.cancel();
    tracing::info!("Layout Quest API server stopped");
    Ok(())
}
