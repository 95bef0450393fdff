mod catalog;
mod config;
mod diagnosis;
mod engine;
mod error;
mod model;
mod server;

use std::sync::Arc;

use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::EnvFilter;

use catalog::Catalog;
use config::Config;
use diagnosis::CannedDiagnosis;
use engine::RecommendationEngine;
use server::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into()),
        )
        .init();

    info!("starting agri-advisor server");

    let config = Config::from_env()?;
    info!(
        listen_addr = %config.listen_addr,
        analysis_delay_ms = config.analysis_delay.as_millis(),
        "configuration loaded"
    );

    let catalog = Catalog::builtin();
    catalog.validate()?;
    info!(crops = catalog.len(), "crop catalog loaded");

    let state = Arc::new(AppState {
        engine: RecommendationEngine::new(Arc::new(catalog)),
        diagnosis: Arc::new(CannedDiagnosis),
        analysis_delay: config.analysis_delay,
    });

    let app = server::router(state);
    let listener = TcpListener::bind(&config.listen_addr).await?;
    info!(listen_addr = %config.listen_addr, "advisory API ready");
    axum::serve(listener, app).await?;
    Ok(())
}
