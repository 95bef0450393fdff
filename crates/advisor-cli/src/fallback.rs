//! Local stand-ins used when the advisory API is unreachable.
//!
//! Every remote endpoint pairs with one of these: a coarse offline rule table
//! for recommendations, and fixed payloads for weather, market prices and
//! leaf analysis. None of them touch the network or the server's catalog.

use advisor_common::api::{
    CropAdvice, HealthStatus, LeafAnalysis, MarketQuote, RecommendRequest, RecommendResponse,
    WeatherReport,
};

const FALLBACK_DETAILS: &str = "Suitable match found.";

/// Coarse offline recommendation rules.
///
/// Rules are evaluated independently and stay additive: a query can collect
/// the same crop from more than one rule, and nothing is deduplicated.
pub fn fallback_recommend(request: &RecommendRequest) -> RecommendResponse {
    let soil = request
        .soil
        .as_deref()
        .unwrap_or("")
        .trim()
        .to_lowercase();
    let budget = request.budget;

    let mut names: Vec<&str> = Vec::new();
    if budget > 8000.0 && (soil == "clay" || soil == "loam") {
        names.extend(["Rice", "Sugarcane"]);
    }
    if budget > 5000.0 {
        names.extend(["Wheat", "Maize"]);
    }
    if soil == "black" {
        names.push("Cotton");
    }
    if names.is_empty() {
        names.extend(["Spinach", "Radish (Low Cost)"]);
    }

    RecommendResponse {
        recommendations: names
            .into_iter()
            .map(|name| CropAdvice {
                name: name.to_string(),
                details: FALLBACK_DETAILS.to_string(),
            })
            .collect(),
    }
}

pub fn fallback_weather() -> WeatherReport {
    WeatherReport {
        temp: 28.0,
        humidity: 65,
        rainfall: "Moderate".to_string(),
        condition: "Cloudy".to_string(),
    }
}

pub fn fallback_market() -> Vec<MarketQuote> {
    [
        ("Wheat", "2200/q", "+5%"),
        ("Rice", "1900/q", "-2%"),
        ("Cotton", "6000/q", "+1.5%"),
        ("Tomato", "1200/q", "+10%"),
        ("Potato", "900/q", "0%"),
    ]
    .into_iter()
    .map(|(crop, price, change)| MarketQuote {
        crop: crop.to_string(),
        price: price.to_string(),
        change: change.to_string(),
    })
    .collect()
}

pub fn fallback_analysis() -> LeafAnalysis {
    LeafAnalysis {
        status: HealthStatus::Healthy,
        disease: "None detected".to_string(),
        remedy: "Plant looks healthy. Keep monitoring.".to_string(),
    }
}
