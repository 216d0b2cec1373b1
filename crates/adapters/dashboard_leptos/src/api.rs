//! HTTP client for `POST /api/weather`, wrapping `gloo-net`.

use gloo_net::http::Request;
use weatherboard_app::error::TransportError;
use weatherboard_app::ports::{ApiResponse, WeatherApi};
use weatherboard_domain::query::Query;

/// Posts the form as JSON to the configured endpoint.
#[derive(Debug, Clone)]
pub struct HttpWeatherApi {
    endpoint: String,
}

impl HttpWeatherApi {
    #[must_use]
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
        }
    }
}

impl WeatherApi for HttpWeatherApi {
    async fn fetch(&self, query: &Query) -> Result<ApiResponse, TransportError> {
        let resp = Request::post(&self.endpoint)
            .json(&query.to_request())
            .map_err(transport)?
            .send()
            .await
            .map_err(transport)?;
        let status = resp.status();
        // An unreadable body is left for the decoder to classify.
        let body = resp.text().await.unwrap_or_default();
        Ok(ApiResponse::new(status, body))
    }
}

fn transport(err: gloo_net::Error) -> TransportError {
    TransportError::new(err.to_string())
}
