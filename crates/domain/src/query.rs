//! Query: what the user asks the weather endpoint for.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

use crate::de;

/// Presentation unit system, decided client-side.
///
/// Serialized with the endpoint's names: `celsius` for metric, `fahrenheit`
/// for imperial.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum UnitSystem {
    #[default]
    #[serde(rename = "celsius")]
    Metric,
    #[serde(rename = "fahrenheit")]
    Imperial,
}

impl UnitSystem {
    /// Read a wire or form value; anything but `fahrenheit` is metric.
    #[must_use]
    pub fn from_wire(value: &str) -> Self {
        if value == "fahrenheit" {
            Self::Imperial
        } else {
            Self::Metric
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Metric => "celsius",
            Self::Imperial => "fahrenheit",
        }
    }

    /// Suffix appended to temperatures, e.g. `°C`.
    #[must_use]
    pub fn temperature_suffix(self) -> &'static str {
        match self {
            Self::Metric => "°C",
            Self::Imperial => "°F",
        }
    }

    /// Unit appended to wind speeds.
    #[must_use]
    pub fn speed_unit(self) -> &'static str {
        match self {
            Self::Metric => "km/h",
            Self::Imperial => "mph",
        }
    }
}

impl fmt::Display for UnitSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for UnitSystem {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(Self::from_wire(&de::loose_string(deserializer)?))
    }
}

/// Forecast sampling granularity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Granularity {
    #[default]
    Hourly,
    Daily,
}

impl Granularity {
    /// Map the form's "daily" checkbox.
    #[must_use]
    pub fn from_toggle(daily: bool) -> Self {
        if daily { Self::Daily } else { Self::Hourly }
    }

    /// Read a wire value; anything but `daily` is hourly.
    #[must_use]
    pub fn from_wire(value: &str) -> Self {
        Self::from_toggle(value == "daily")
    }

    #[must_use]
    pub fn is_daily(self) -> bool {
        matches!(self, Self::Daily)
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Hourly => "hourly",
            Self::Daily => "daily",
        }
    }
}

impl fmt::Display for Granularity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Granularity {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(Self::from_wire(&de::loose_string(deserializer)?))
    }
}

/// A location query as read from the form.
///
/// Location fields are kept as trimmed text; validating them is left to the
/// endpoint.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Query {
    pub city: String,
    pub lat: String,
    pub lon: String,
    pub units: UnitSystem,
    pub granularity: Granularity,
}

impl Query {
    /// Build a query from raw form values, trimming the text fields.
    #[must_use]
    pub fn from_form(city: &str, lat: &str, lon: &str, units: UnitSystem, daily: bool) -> Self {
        Self {
            city: city.trim().to_string(),
            lat: lat.trim().to_string(),
            lon: lon.trim().to_string(),
            units,
            granularity: Granularity::from_toggle(daily),
        }
    }

    /// Same query with another granularity.
    #[must_use]
    pub fn with_granularity(mut self, granularity: Granularity) -> Self {
        self.granularity = granularity;
        self
    }

    /// Whether a city or a full coordinate pair is present.
    #[must_use]
    pub fn has_location(&self) -> bool {
        !self.city.is_empty() || (!self.lat.is_empty() && !self.lon.is_empty())
    }

    /// JSON body sent to the weather endpoint.
    #[must_use]
    pub fn to_request(&self) -> WeatherRequest<'_> {
        WeatherRequest {
            city: &self.city,
            lat: &self.lat,
            lon: &self.lon,
            units: self.units,
            forecast_type: self.granularity,
        }
    }

    /// Record written to the persisted-defaults slot.
    #[must_use]
    pub fn to_stored(&self) -> StoredDefaults {
        StoredDefaults {
            city: self.city.clone(),
            lat: self.lat.clone(),
            lon: self.lon.clone(),
            units: self.units,
            forecast_type: self.granularity,
        }
    }
}

impl From<StoredDefaults> for Query {
    fn from(stored: StoredDefaults) -> Self {
        Self {
            city: stored.city,
            lat: stored.lat,
            lon: stored.lon,
            units: stored.units,
            granularity: stored.forecast_type,
        }
    }
}

/// Body of `POST /api/weather`.
#[derive(Debug, Serialize)]
pub struct WeatherRequest<'a> {
    pub city: &'a str,
    pub lat: &'a str,
    pub lon: &'a str,
    pub units: UnitSystem,
    pub forecast_type: Granularity,
}

/// Persisted defaults as stored in the browser: `{city, lat, lon, units, forecastType}`.
///
/// Every field is optional on read so that older or hand-edited records still
/// pre-fill what they can.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoredDefaults {
    #[serde(default, deserialize_with = "de::loose_string")]
    pub city: String,
    #[serde(default, deserialize_with = "de::loose_string")]
    pub lat: String,
    #[serde(default, deserialize_with = "de::loose_string")]
    pub lon: String,
    #[serde(default)]
    pub units: UnitSystem,
    #[serde(default)]
    pub forecast_type: Granularity,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn should_trim_text_fields_when_reading_form() {
        let query = Query::from_form("  Paris ", " 48.85", "2.35 ", UnitSystem::Metric, false);
        assert_eq!(query.city, "Paris");
        assert_eq!(query.lat, "48.85");
        assert_eq!(query.lon, "2.35");
        assert_eq!(query.granularity, Granularity::Hourly);
    }

    #[test]
    fn should_map_checked_toggle_to_daily() {
        let query = Query::from_form("Oslo", "", "", UnitSystem::Imperial, true);
        assert_eq!(query.granularity, Granularity::Daily);
    }

    #[test]
    fn should_serialize_request_with_endpoint_field_names() {
        let query = Query::from_form("Paris", "", "", UnitSystem::Metric, false);
        let body = serde_json::to_value(query.to_request()).unwrap();
        assert_eq!(
            body,
            json!({
                "city": "Paris",
                "lat": "",
                "lon": "",
                "units": "celsius",
                "forecast_type": "hourly"
            })
        );
    }

    #[test]
    fn should_serialize_imperial_daily_request() {
        let query = Query::from_form("", "40.7", "-74.0", UnitSystem::Imperial, true);
        let body = serde_json::to_value(query.to_request()).unwrap();
        assert_eq!(body["units"], "fahrenheit");
        assert_eq!(body["forecast_type"], "daily");
    }

    #[test]
    fn should_store_defaults_with_camel_case_forecast_type() {
        let query = Query::from_form("Rome", "", "", UnitSystem::Metric, true);
        let stored = serde_json::to_value(query.to_stored()).unwrap();
        assert_eq!(stored["forecastType"], "daily");
        assert_eq!(stored["units"], "celsius");
        assert!(stored.get("forecast_type").is_none());
    }

    #[test]
    fn should_restore_same_query_from_stored_defaults() {
        let query = Query::from_form("Lyon", "45.7", "4.8", UnitSystem::Imperial, true);
        let json = serde_json::to_string(&query.to_stored()).unwrap();
        let stored: StoredDefaults = serde_json::from_str(&json).unwrap();
        assert_eq!(Query::from(stored), query);
    }

    #[test]
    fn should_default_units_to_metric_when_missing() {
        let stored: StoredDefaults = serde_json::from_str(r#"{"city":"Bern"}"#).unwrap();
        let query = Query::from(stored);
        assert_eq!(query.units, UnitSystem::Metric);
        assert_eq!(query.granularity, Granularity::Hourly);
        assert_eq!(query.lat, "");
    }

    #[test]
    fn should_default_units_to_metric_when_empty_or_null() {
        let stored: StoredDefaults =
            serde_json::from_str(r#"{"units":"","forecastType":null}"#).unwrap();
        assert_eq!(stored.units, UnitSystem::Metric);
        assert_eq!(stored.forecast_type, Granularity::Hourly);
    }

    #[test]
    fn should_accept_numeric_coordinates_in_stored_defaults() {
        let stored: StoredDefaults = serde_json::from_str(r#"{"lat":52.5,"lon":13.4}"#).unwrap();
        assert_eq!(stored.lat, "52.5");
        assert_eq!(stored.lon, "13.4");
    }

    #[test]
    fn should_report_location_presence() {
        assert!(Query::from_form("Paris", "", "", UnitSystem::Metric, false).has_location());
        assert!(Query::from_form("", "1", "2", UnitSystem::Metric, false).has_location());
        assert!(!Query::from_form("", "1", "", UnitSystem::Metric, false).has_location());
    }

    #[test]
    fn should_describe_unit_suffixes() {
        assert_eq!(UnitSystem::Metric.temperature_suffix(), "°C");
        assert_eq!(UnitSystem::Imperial.temperature_suffix(), "°F");
        assert_eq!(UnitSystem::Metric.speed_unit(), "km/h");
        assert_eq!(UnitSystem::Imperial.speed_unit(), "mph");
    }
}
