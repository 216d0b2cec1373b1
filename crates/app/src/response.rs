//! Interpretation of raw endpoint responses.

use serde_json::Value;
use weatherboard_domain::forecast::WeatherResponse;

use crate::error::DashboardError;
use crate::ports::ApiResponse;

/// Turn a raw response into a weather payload or a user-facing error.
///
/// A response fails when its status is not 2xx or when its JSON body carries
/// an `error` field. Unparsable bodies fail with the generic message.
///
/// # Errors
///
/// Returns [`DashboardError::Rejected`] for failure statuses and `error`
/// fields, [`DashboardError::Malformed`] for 2xx bodies that are not a JSON
/// object.
pub fn decode(response: &ApiResponse) -> Result<WeatherResponse, DashboardError> {
    let Ok(body) = serde_json::from_str::<Value>(&response.body) else {
        return Err(if response.is_success() {
            DashboardError::Malformed
        } else {
            DashboardError::Rejected {
                status: response.status,
                message: None,
            }
        });
    };

    let has_error_field = body.get("error").is_some_and(|e| !e.is_null());
    if !response.is_success() || has_error_field {
        return Err(DashboardError::Rejected {
            status: response.status,
            message: error_message(&body),
        });
    }

    if !body.is_object() {
        return Err(DashboardError::Malformed);
    }
    serde_json::from_value(body).map_err(|_| DashboardError::Malformed)
}

/// The `error` field, when it is a non-empty string.
fn error_message(body: &Value) -> Option<String> {
    body.get("error")
        .and_then(Value::as_str)
        .filter(|msg| !msg.is_empty())
        .map(str::to_string)
}
