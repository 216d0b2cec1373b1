//! Forecast field descriptors in canonical column order.

use std::borrow::Cow;

use crate::forecast::{ForecastSeries, Series};
use crate::query::UnitSystem;

/// A forecast field that may appear as a table column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ForecastField {
    Temperature,
    ApparentTemperature,
    TemperatureMax,
    TemperatureMin,
    WindSpeed,
    WindSpeedMax,
    WindDirection,
    WindDirectionDominant,
    Precipitation,
    PrecipitationSum,
    PrecipitationProbability,
    PrecipitationProbabilityMax,
    Humidity,
    HumidityMax,
    UvIndex,
    UvIndexMax,
}

impl ForecastField {
    /// Every field, in the order columns are rendered.
    pub const ALL: [Self; 16] = [
        Self::Temperature,
        Self::ApparentTemperature,
        Self::TemperatureMax,
        Self::TemperatureMin,
        Self::WindSpeed,
        Self::WindSpeedMax,
        Self::WindDirection,
        Self::WindDirectionDominant,
        Self::Precipitation,
        Self::PrecipitationSum,
        Self::PrecipitationProbability,
        Self::PrecipitationProbabilityMax,
        Self::Humidity,
        Self::HumidityMax,
        Self::UvIndex,
        Self::UvIndexMax,
    ];

    /// Name of the field in the endpoint payload.
    #[must_use]
    pub fn key(self) -> &'static str {
        match self {
            Self::Temperature => "temperature_2m",
            Self::ApparentTemperature => "apparent_temperature",
            Self::TemperatureMax => "temperature_2m_max",
            Self::TemperatureMin => "temperature_2m_min",
            Self::WindSpeed => "wind_speed_10m",
            Self::WindSpeedMax => "wind_speed_10m_max",
            Self::WindDirection => "wind_direction_10m",
            Self::WindDirectionDominant => "wind_direction_10m_dominant",
            Self::Precipitation => "precipitation",
            Self::PrecipitationSum => "precipitation_sum",
            Self::PrecipitationProbability => "precipitation_probability",
            Self::PrecipitationProbabilityMax => "precipitation_probability_max",
            Self::Humidity => "relative_humidity_2m",
            Self::HumidityMax => "relative_humidity_2m_max",
            Self::UvIndex => "uv_index",
            Self::UvIndexMax => "uv_index_max",
        }
    }

    /// Column header. Only the plain temperature header carries the unit.
    #[must_use]
    pub fn header(self, units: UnitSystem) -> Cow<'static, str> {
        match self {
            Self::Temperature => Cow::Owned(format!("Temp ({})", units.temperature_suffix())),
            Self::ApparentTemperature => Cow::Borrowed("Feels Like"),
            Self::TemperatureMax => Cow::Borrowed("Max Temp"),
            Self::TemperatureMin => Cow::Borrowed("Min Temp"),
            Self::WindSpeed => Cow::Borrowed("Wind"),
            Self::WindSpeedMax => Cow::Borrowed("Max Wind"),
            Self::WindDirection => Cow::Borrowed("Wind Dir"),
            Self::WindDirectionDominant => Cow::Borrowed("Dom Wind Dir"),
            Self::Precipitation => Cow::Borrowed("Precipitation"),
            Self::PrecipitationSum => Cow::Borrowed("Precip Sum"),
            Self::PrecipitationProbability => Cow::Borrowed("Precip Prob"),
            Self::PrecipitationProbabilityMax => Cow::Borrowed("Max Precip Prob"),
            Self::Humidity => Cow::Borrowed("Humidity"),
            Self::HumidityMax => Cow::Borrowed("Max Humidity"),
            Self::UvIndex => Cow::Borrowed("UV Index"),
            Self::UvIndexMax => Cow::Borrowed("Max UV"),
        }
    }

    /// The field's series on a forecast, when the endpoint supplied it.
    #[must_use]
    pub fn series(self, forecast: &ForecastSeries) -> Option<&Series> {
        match self {
            Self::Temperature => forecast.temperature_2m.as_ref(),
            Self::ApparentTemperature => forecast.apparent_temperature.as_ref(),
            Self::TemperatureMax => forecast.temperature_2m_max.as_ref(),
            Self::TemperatureMin => forecast.temperature_2m_min.as_ref(),
            Self::WindSpeed => forecast.wind_speed_10m.as_ref(),
            Self::WindSpeedMax => forecast.wind_speed_10m_max.as_ref(),
            Self::WindDirection => forecast.wind_direction_10m.as_ref(),
            Self::WindDirectionDominant => forecast.wind_direction_10m_dominant.as_ref(),
            Self::Precipitation => forecast.precipitation.as_ref(),
            Self::PrecipitationSum => forecast.precipitation_sum.as_ref(),
            Self::PrecipitationProbability => forecast.precipitation_probability.as_ref(),
            Self::PrecipitationProbabilityMax => forecast.precipitation_probability_max.as_ref(),
            Self::Humidity => forecast.relative_humidity_2m.as_ref(),
            Self::HumidityMax => forecast.relative_humidity_2m_max.as_ref(),
            Self::UvIndex => forecast.uv_index.as_ref(),
            Self::UvIndexMax => forecast.uv_index_max.as_ref(),
        }
    }

    /// Fields present on a forecast, in canonical order.
    #[must_use]
    pub fn present_in(forecast: &ForecastSeries) -> Vec<Self> {
        Self::ALL
            .into_iter()
            .filter(|field| field.series(forecast).is_some())
            .collect()
    }
}
