//! Weather Response: the payload returned by the weather endpoint.
//!
//! Decoding never fails on a missing or oddly shaped field: the affected
//! field is absent and the rest of the dashboard still renders.

use serde::Deserialize;

use crate::de;
use crate::query::{Granularity, UnitSystem};

/// Values of one forecast field, index-aligned to [`ForecastSeries::time`].
/// `None` marks a null (or non-numeric) entry.
pub type Series = Vec<Option<f64>>;

/// Successful response body of the weather endpoint.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct WeatherResponse {
    /// Human label such as `Paris, France`.
    #[serde(default, deserialize_with = "de::loose_string")]
    pub location: String,
    #[serde(default)]
    pub units: UnitSystem,
    #[serde(default)]
    pub forecast_type: Granularity,
    #[serde(default)]
    pub weather: WeatherPayload,
}

/// Current conditions plus the hourly and/or daily series.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct WeatherPayload {
    #[serde(default, deserialize_with = "de::record")]
    pub current: Option<CurrentConditions>,
    #[serde(default, deserialize_with = "de::record")]
    pub hourly: Option<ForecastSeries>,
    #[serde(default, deserialize_with = "de::record")]
    pub daily: Option<ForecastSeries>,
}

impl WeatherPayload {
    /// Series matching a granularity, if the endpoint sent one.
    #[must_use]
    pub fn series(&self, granularity: Granularity) -> Option<&ForecastSeries> {
        match granularity {
            Granularity::Hourly => self.hourly.as_ref(),
            Granularity::Daily => self.daily.as_ref(),
        }
    }
}

/// Conditions at request time.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct CurrentConditions {
    #[serde(default, deserialize_with = "de::number")]
    pub temperature_2m: Option<f64>,
    #[serde(default, deserialize_with = "de::number")]
    pub apparent_temperature: Option<f64>,
    #[serde(default, deserialize_with = "de::number")]
    pub wind_speed_10m: Option<f64>,
    #[serde(default, deserialize_with = "de::number")]
    pub wind_direction_10m: Option<f64>,
    #[serde(default, deserialize_with = "de::number")]
    pub relative_humidity_2m: Option<f64>,
    #[serde(default, deserialize_with = "de::number")]
    pub uv_index: Option<f64>,
    #[serde(default, deserialize_with = "de::number")]
    pub precipitation: Option<f64>,
    #[serde(default, deserialize_with = "de::number")]
    pub weather_code: Option<f64>,
}

/// A forecast: a timestamp series plus whichever field series the endpoint
/// chose to include.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ForecastSeries {
    #[serde(default, deserialize_with = "de::timestamps")]
    pub time: Option<Vec<String>>,
    #[serde(default, deserialize_with = "de::series")]
    pub weather_code: Option<Series>,
    #[serde(default, deserialize_with = "de::series")]
    pub temperature_2m: Option<Series>,
    #[serde(default, deserialize_with = "de::series")]
    pub apparent_temperature: Option<Series>,
    #[serde(default, deserialize_with = "de::series")]
    pub temperature_2m_max: Option<Series>,
    #[serde(default, deserialize_with = "de::series")]
    pub temperature_2m_min: Option<Series>,
    #[serde(default, deserialize_with = "de::series")]
    pub wind_speed_10m: Option<Series>,
    #[serde(default, deserialize_with = "de::series")]
    pub wind_speed_10m_max: Option<Series>,
    #[serde(default, deserialize_with = "de::series")]
    pub wind_direction_10m: Option<Series>,
    #[serde(default, deserialize_with = "de::series")]
    pub wind_direction_10m_dominant: Option<Series>,
    #[serde(default, deserialize_with = "de::series")]
    pub precipitation: Option<Series>,
    #[serde(default, deserialize_with = "de::series")]
    pub precipitation_sum: Option<Series>,
    #[serde(default, deserialize_with = "de::series")]
    pub precipitation_probability: Option<Series>,
    #[serde(default, deserialize_with = "de::series")]
    pub precipitation_probability_max: Option<Series>,
    #[serde(default, deserialize_with = "de::series")]
    pub relative_humidity_2m: Option<Series>,
    #[serde(default, deserialize_with = "de::series")]
    pub relative_humidity_2m_max: Option<Series>,
    #[serde(default, deserialize_with = "de::series")]
    pub uv_index: Option<Series>,
    #[serde(default, deserialize_with = "de::series")]
    pub uv_index_max: Option<Series>,
}

impl ForecastSeries {
    /// Condition code at `index`, if present and integral.
    #[must_use]
    pub fn weather_code_at(&self, index: usize) -> Option<i64> {
        self.weather_code
            .as_ref()?
            .get(index)
            .copied()
            .flatten()
            .and_then(crate::condition::code_of)
    }
}
