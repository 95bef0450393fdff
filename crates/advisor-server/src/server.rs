//! HTTP surface of the advisory API.
//!
//! Routes:
//! - `POST /api/recommend`: crop recommendations for a farm query
//! - `POST /api/analyze-image`: mock leaf diagnosis for an uploaded photo
//! - `GET /api/weather`: fixed weather snapshot
//! - `GET /api/market`: fixed market price list
//! - `GET /api/health`: liveness probe

use std::sync::Arc;
use std::time::Duration;

use axum::extract::{Multipart, State};
use axum::response::Json;
use axum::routing::{get, post};
use axum::Router;
use serde_json::json;
use tower_http::cors::CorsLayer;
use tracing::info;

use advisor_common::api::{
    CropAdvice, LeafAnalysis, MarketQuote, RecommendRequest, RecommendResponse, WeatherReport,
};

use crate::diagnosis::DiagnosisProvider;
use crate::engine::RecommendationEngine;
use crate::error::AppError;
use crate::model::AdvisoryQuery;

/// Shared application state. Everything here is read-only after startup, so
/// plain `Arc` sharing is enough, no lock.
pub struct AppState {
    pub engine: RecommendationEngine,
    pub diagnosis: Arc<dyn DiagnosisProvider>,
    pub analysis_delay: Duration,
}

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/api/health", get(health))
        .route("/api/weather", get(weather))
        .route("/api/market", get(market))
        .route("/api/recommend", post(recommend))
        .route("/api/analyze-image", post(analyze_image))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

async fn health() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

/// Fixed snapshot; a live weather service is a collaborator this system mocks.
async fn weather() -> Json<WeatherReport> {
    Json(WeatherReport {
        temp: 28.0,
        humidity: 65,
        rainfall: "Moderate".to_string(),
        condition: "Cloudy".to_string(),
    })
}

async fn market() -> Json<Vec<MarketQuote>> {
    Json(market_prices())
}

async fn recommend(
    State(state): State<Arc<AppState>>,
    Json(request): Json<RecommendRequest>,
) -> Json<RecommendResponse> {
    let query = AdvisoryQuery::from_request(&request);
    let suggestions = state.engine.recommend(&query);
    info!(
        soil = query.soil.as_deref().unwrap_or("all"),
        season = query.season.as_deref().unwrap_or("all"),
        budget = query.budget,
        count = suggestions.len(),
        "recommendation served"
    );

    let recommendations = suggestions
        .into_iter()
        .map(|s| CropAdvice {
            name: s.name,
            details: s.details,
        })
        .collect();
    Json(RecommendResponse { recommendations })
}

/// Mock analysis: the upload is drained and dropped (nothing is persisted),
/// then a canned diagnosis is returned after the configured delay.
async fn analyze_image(
    State(state): State<Arc<AppState>>,
    mut multipart: Multipart,
) -> Result<Json<LeafAnalysis>, AppError> {
    let mut received = false;
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Upload(e.to_string()))?
    {
        if field.name() == Some("cropImage") {
            let file_name = field.file_name().map(|s| s.to_string());
            let bytes = field
                .bytes()
                .await
                .map_err(|e| AppError::Upload(e.to_string()))?;
            info!(
                file_name = file_name.as_deref().unwrap_or("<unnamed>"),
                size = bytes.len(),
                "leaf image received"
            );
            received = true;
        }
    }
    if !received {
        return Err(AppError::Upload("missing cropImage field".to_string()));
    }

    tokio::time::sleep(state.analysis_delay).await;
    Ok(Json(state.diagnosis.diagnose()))
}

fn market_prices() -> Vec<MarketQuote> {
    [
        ("Wheat", "2200/quintal", "+5%"),
        ("Rice", "1900/quintal", "-2%"),
        ("Cotton", "6000/quintal", "+1.5%"),
        ("Maize", "1500/quintal", "0%"),
        ("Tomato", "1200/quintal", "+10%"),
    ]
    .into_iter()
    .map(|(crop, price, change)| MarketQuote {
        crop: crop.to_string(),
        price: price.to_string(),
        change: change.to_string(),
    })
    .collect()
}
