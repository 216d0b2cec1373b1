//! Dashboard: the view-model rendered from a [`WeatherResponse`].
//!
//! Building is a pure function of the response and a [`DayLabeler`]. The
//! result is a tree of typed records that adapters turn into markup; the
//! same response always yields the same dashboard.

use crate::condition::{self, Condition};
use crate::field::ForecastField;
use crate::forecast::{CurrentConditions, ForecastSeries, WeatherResponse};
use crate::query::UnitSystem;
use crate::time::DayLabeler;

/// Shown in place of a missing value.
pub const PLACEHOLDER: &str = "-";

/// Header of the timestamp column.
pub const TIME_HEADER: &str = "Date/Time";

/// Header of the condition icon column.
pub const CONDITION_HEADER: &str = "Weather";

/// Everything the dashboard area shows for one response.
#[derive(Debug, Clone, PartialEq)]
pub struct Dashboard {
    pub heading: String,
    pub current: Option<CurrentPanel>,
    pub forecast: Option<ForecastTable>,
}

/// The current-conditions block, with values already formatted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurrentPanel {
    pub icon: Option<&'static str>,
    pub description: &'static str,
    /// e.g. `18.4°C`
    pub temperature: String,
    pub apparent_temperature: String,
    /// e.g. `12 km/h (250°)`
    pub wind: String,
    /// e.g. `81%`
    pub humidity: String,
    pub uv_index: String,
}

/// The forecast table: fixed leading columns, then one per present field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ForecastTable {
    pub headers: Vec<String>,
    pub columns: Vec<ForecastField>,
    pub rows: Vec<ForecastRow>,
}

/// One table row, index-aligned with the timestamp series.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ForecastRow {
    pub label: String,
    /// Only set for codes found in the condition table, clear sky (code 0)
    /// included.
    pub condition: Option<&'static Condition>,
    /// One cell per entry of [`ForecastTable::columns`].
    pub cells: Vec<String>,
}

impl Dashboard {
    /// Build the view-model for a response.
    #[must_use]
    pub fn build(response: &WeatherResponse, labeler: &impl DayLabeler) -> Self {
        let units = response.units;
        let current = response
            .weather
            .current
            .as_ref()
            .map(|current| CurrentPanel::build(current, units));
        let forecast = response
            .weather
            .series(response.forecast_type)
            .and_then(|series| ForecastTable::build(series, units, labeler));

        Self {
            heading: response.location.clone(),
            current,
            forecast,
        }
    }
}

impl CurrentPanel {
    fn build(current: &CurrentConditions, units: UnitSystem) -> Self {
        let (icon, description) = condition::describe(current.weather_code.and_then(condition::code_of));
        let wind = match (current.wind_speed_10m, current.wind_direction_10m) {
            (None, None) => PLACEHOLDER.to_string(),
            (Some(speed), None) => format!("{} {}", format_value(Some(speed)), units.speed_unit()),
            (None, Some(direction)) => format!("{PLACEHOLDER} ({}°)", format_value(Some(direction))),
            (Some(speed), Some(direction)) => format!(
                "{} {} ({}°)",
                format_value(Some(speed)),
                units.speed_unit(),
                format_value(Some(direction))
            ),
        };

        Self {
            icon,
            description,
            temperature: with_suffix(current.temperature_2m, units.temperature_suffix()),
            apparent_temperature: with_suffix(
                current.apparent_temperature,
                units.temperature_suffix(),
            ),
            wind,
            humidity: with_suffix(current.relative_humidity_2m, "%"),
            uv_index: format_value(current.uv_index),
        }
    }
}

impl ForecastTable {
    /// `None` when the series has no timestamps: there is nothing to index rows by.
    fn build(series: &ForecastSeries, units: UnitSystem, labeler: &impl DayLabeler) -> Option<Self> {
        let times = series.time.as_ref()?;
        let columns = ForecastField::present_in(series);

        let mut headers = vec![TIME_HEADER.to_string(), CONDITION_HEADER.to_string()];
        headers.extend(columns.iter().map(|field| field.header(units).into_owned()));

        let rows = times
            .iter()
            .enumerate()
            .map(|(idx, timestamp)| ForecastRow {
                label: labeler.label(timestamp),
                condition: series.weather_code_at(idx).and_then(condition::lookup),
                cells: columns
                    .iter()
                    .map(|field| {
                        let value = field
                            .series(series)
                            .and_then(|values| values.get(idx).copied().flatten());
                        format_value(value)
                    })
                    .collect(),
            })
            .collect();

        Some(Self {
            headers,
            columns,
            rows,
        })
    }
}

/// Render a number the way a browser would print it: integral values
/// without a fraction, others in shortest round-trip form.
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn format_value(value: Option<f64>) -> String {
    match value {
        None => PLACEHOLDER.to_string(),
        Some(v) if v.is_finite() && v.fract() == 0.0 && v.abs() < 1e15 => (v as i64).to_string(),
        Some(v) => v.to_string(),
    }
}

fn with_suffix(value: Option<f64>, suffix: &str) -> String {
    match value {
        None => PLACEHOLDER.to_string(),
        some => format!("{}{suffix}", format_value(some)),
    }
}
