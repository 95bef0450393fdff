//! HTTP client for the advisory API, plus the degradation wrapper.
//!
//! Remote calls never surface errors to presentation code: every call site
//! pairs the request with a locally-known fallback value and goes through
//! [`fetch_with_fallback`], which absorbs any failure after logging a single
//! warning. The system stays fully functional with the server unreachable.

use std::time::Duration;

use reqwest::StatusCode;
use serde::Deserialize;
use tracing::warn;

use crate::api::{LeafAnalysis, MarketQuote, RecommendRequest, RecommendResponse, WeatherReport};

const MAX_ERROR_BODY_BYTES: usize = 8 * 1024;

#[derive(Clone, Debug)]
pub struct ApiClientConfig {
    pub base_url: String,
    pub timeout: Duration,
}

impl ApiClientConfig {
    /// Optional:
    /// - `ADVISOR_BASE_URL` (default: "http://localhost:3000")
    /// - `ADVISOR_TIMEOUT_SECS` (default: 10)
    pub fn from_env() -> Self {
        let base_url = std::env::var("ADVISOR_BASE_URL")
            .unwrap_or_else(|_| "http://localhost:3000".to_string());

        let timeout = std::env::var("ADVISOR_TIMEOUT_SECS")
            .ok()
            .and_then(|s| s.parse::<u64>().ok())
            .map(Duration::from_secs)
            .unwrap_or_else(|| Duration::from_secs(10));

        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            timeout,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("server returned error: status={status} body={body}")]
    Upstream { status: StatusCode, body: String },
}

#[derive(Clone)]
pub struct ApiClient {
    config: ApiClientConfig,
    http: reqwest::Client,
}

impl ApiClient {
    pub fn new(config: ApiClientConfig) -> Result<Self, FetchError> {
        let http = reqwest::Client::builder()
            .user_agent("agri-advisor/client")
            .build()?;
        Ok(Self { config, http })
    }

    pub fn config(&self) -> &ApiClientConfig {
        &self.config
    }

    pub async fn recommend(
        &self,
        request: &RecommendRequest,
    ) -> Result<RecommendResponse, FetchError> {
        let url = format!("{}/api/recommend", self.config.base_url);
        let resp = self
            .http
            .post(&url)
            .timeout(self.config.timeout)
            .json(request)
            .send()
            .await?;
        Self::parse_json_response(resp).await
    }

    pub async fn weather(&self) -> Result<WeatherReport, FetchError> {
        let url = format!("{}/api/weather", self.config.base_url);
        let resp = self.http.get(&url).timeout(self.config.timeout).send().await?;
        Self::parse_json_response(resp).await
    }

    pub async fn market(&self) -> Result<Vec<MarketQuote>, FetchError> {
        let url = format!("{}/api/market", self.config.base_url);
        let resp = self.http.get(&url).timeout(self.config.timeout).send().await?;
        Self::parse_json_response(resp).await
    }

    pub async fn analyze_image(
        &self,
        file_name: &str,
        bytes: Vec<u8>,
    ) -> Result<LeafAnalysis, FetchError> {
        let url = format!("{}/api/analyze-image", self.config.base_url);
        let part = reqwest::multipart::Part::bytes(bytes).file_name(file_name.to_string());
        let form = reqwest::multipart::Form::new().part("cropImage", part);
        let resp = self
            .http
            .post(&url)
            .timeout(self.config.timeout)
            .multipart(form)
            .send()
            .await?;
        Self::parse_json_response(resp).await
    }

    async fn parse_json_response<T: for<'de> Deserialize<'de>>(
        resp: reqwest::Response,
    ) -> Result<T, FetchError> {
        if resp.status().is_success() {
            let json = resp.json::<T>().await?;
            return Ok(json);
        }
        let status = resp.status();
        let body = read_limited_text(resp, MAX_ERROR_BODY_BYTES).await;
        Err(FetchError::Upstream { status, body })
    }
}

/// Await a remote operation; on any failure (transport error, timeout,
/// non-2xx) log one warning and hand back the supplied fallback value.
/// Single attempt, nothing propagates to the caller.
pub async fn fetch_with_fallback<T, E, Fut>(endpoint: &str, operation: Fut, fallback: T) -> T
where
    Fut: std::future::Future<Output = Result<T, E>>,
    E: std::fmt::Display,
{
    match operation.await {
        Ok(value) => value,
        Err(e) => {
            warn!(endpoint, error = %e, "remote call failed, using fallback data");
            fallback
        }
    }
}

async fn read_limited_text(resp: reqwest::Response, max_bytes: usize) -> String {
    match resp.bytes().await {
        Ok(mut b) => {
            if b.len() > max_bytes {
                b.truncate(max_bytes);
            }
            String::from_utf8_lossy(&b).to_string()
        }
        Err(e) => {
            warn!(error = %e, "failed to read error body");
            "<failed to read error body>".to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn failing_operation_yields_the_exact_fallback_value() {
        let fallback = RecommendResponse {
            recommendations: vec![crate::api::CropAdvice {
                name: "Spinach".to_string(),
                details: "Suitable match found.".to_string(),
            }],
        };

        let operation = async {
            Err::<RecommendResponse, _>(std::io::Error::other("connection refused"))
        };
        let result = fetch_with_fallback("recommend", operation, fallback.clone()).await;
        assert_eq!(result, fallback);
    }

    #[tokio::test]
    async fn successful_operation_never_touches_the_fallback() {
        let operation = async { Ok::<_, std::io::Error>(41) };
        let result = fetch_with_fallback("weather", operation, 0).await;
        assert_eq!(result, 41);
    }

    #[tokio::test]
    async fn upstream_status_degrades_like_any_other_failure() {
        let operation = async {
            Err::<u32, _>(FetchError::Upstream {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                body: "boom".to_string(),
            })
        };
        let result = fetch_with_fallback("market", operation, 7).await;
        assert_eq!(result, 7);
    }
}
