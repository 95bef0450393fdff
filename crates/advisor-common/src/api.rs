//! Wire types shared by the advisory server and its clients.
//!
//! Fallback payloads substituted on the client side must keep these exact
//! shapes, so both sides depend on this module rather than redefining them.

use serde::{Deserialize, Deserializer, Serialize};

/// Request body for `POST /api/recommend`.
///
/// Form-style payload: every field may arrive as a string, the budget as a
/// stringified number. Absent or empty soil/season mean "no constraint", as
/// does the literal token "all".
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RecommendRequest {
    pub soil: Option<String>,
    pub season: Option<String>,
    #[serde(deserialize_with = "budget_or_zero")]
    pub budget: f64,
    pub location: Option<String>,
    pub prev_crop: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CropAdvice {
    pub name: String,
    pub details: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecommendResponse {
    pub recommendations: Vec<CropAdvice>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherReport {
    pub temp: f64,
    pub humidity: u32,
    pub rainfall: String,
    pub condition: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarketQuote {
    pub crop: String,
    pub price: String,
    pub change: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HealthStatus {
    Healthy,
    Diseased,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeafAnalysis {
    pub status: HealthStatus,
    pub disease: String,
    pub remedy: String,
}

/// Budget input degrades to 0 instead of failing the request: accepts a JSON
/// number or a numeric string, anything else coerces to 0.
fn budget_or_zero<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = serde_json::Value::deserialize(deserializer)?;
    Ok(coerce_budget(&raw))
}

fn coerce_budget(raw: &serde_json::Value) -> f64 {
    match raw {
        serde_json::Value::Number(n) => n.as_f64().unwrap_or(0.0),
        serde_json::Value::String(s) => s.trim().parse().unwrap_or(0.0),
        _ => 0.0,
    }
}
