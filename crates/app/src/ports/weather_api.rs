//! Weather API port: the single call to the forecast endpoint.

use std::future::Future;

use weatherboard_domain::query::Query;

use crate::error::TransportError;

/// What came back from the endpoint, before any interpretation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiResponse {
    pub status: u16,
    pub body: String,
}

impl ApiResponse {
    #[must_use]
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// Whether the status is in the 2xx range.
    #[must_use]
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Client for `POST /api/weather`.
///
/// Implementations send `query.to_request()` as the JSON body and return the
/// raw status and body text. Only failures to obtain a response at all are
/// errors; HTTP error statuses are returned as data.
pub trait WeatherApi {
    fn fetch(&self, query: &Query) -> impl Future<Output = Result<ApiResponse, TransportError>>;
}
