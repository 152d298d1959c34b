use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use fitment_api::config::Config;
use fitment_api::ranking::RuleBasedRanker;
use fitment_api::reference::ReferenceData;
use fitment_api::routes::build_router;
use fitment_api::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("fitment_api={}", &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Fitment API v{}", env!("CARGO_PKG_VERSION"));

    // Reference tables: built-in unless REFERENCE_DATA_PATH points at a JSON override
    let reference = match &config.reference_data_path {
        Some(path) => ReferenceData::from_json_file(path)?,
        None => {
            info!("Using built-in reference data");
            ReferenceData::default()
        }
    };
    let ranker = Arc::new(RuleBasedRanker::new(Arc::new(reference)));

    let state = AppState {
        config: config.clone(),
        ranker,
    };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr} (max batch size {})", config.max_batch_size);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
