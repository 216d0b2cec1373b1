//! Condition codes: the static WMO weather code table.
//!
//! The table is process-wide and immutable. Icons are Font Awesome class
//! names; descriptions are shown next to the icon and as its tooltip.

/// One row of the condition code table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Condition {
    pub code: i64,
    pub icon: &'static str,
    pub description: &'static str,
}

/// Description shown for codes missing from the table.
pub const UNKNOWN_DESCRIPTION: &str = "Unknown";

/// Known condition codes, sorted by code.
pub static CONDITIONS: [Condition; 28] = [
    row(0, "fa-sun", "Clear sky"),
    row(1, "fa-cloud-sun", "Mainly clear"),
    row(2, "fa-cloud-sun", "Partly cloudy"),
    row(3, "fa-cloud", "Overcast"),
    row(45, "fa-smog", "Fog"),
    row(48, "fa-smog", "Depositing rime fog"),
    row(51, "fa-cloud-rain", "Light drizzle"),
    row(53, "fa-cloud-rain", "Moderate drizzle"),
    row(55, "fa-cloud-showers-heavy", "Dense drizzle"),
    row(56, "fa-cloud-meatball", "Light freezing drizzle"),
    row(57, "fa-cloud-meatball", "Dense freezing drizzle"),
    row(61, "fa-cloud-showers-heavy", "Slight rain"),
    row(63, "fa-cloud-showers-heavy", "Moderate rain"),
    row(65, "fa-cloud-showers-heavy", "Heavy rain"),
    row(66, "fa-cloud-meatball", "Light freezing rain"),
    row(67, "fa-cloud-meatball", "Heavy freezing rain"),
    row(71, "fa-snowflake", "Slight snow fall"),
    row(73, "fa-snowflake", "Moderate snow fall"),
    row(75, "fa-snowflake", "Heavy snow fall"),
    row(77, "fa-snowflake", "Snow grains"),
    row(80, "fa-cloud-showers-heavy", "Slight rain showers"),
    row(81, "fa-cloud-showers-heavy", "Moderate rain showers"),
    row(82, "fa-cloud-showers-heavy", "Violent rain showers"),
    row(85, "fa-snowflake", "Slight snow showers"),
    row(86, "fa-snowflake", "Heavy snow showers"),
    row(95, "fa-bolt", "Thunderstorm"),
    row(96, "fa-bolt", "Thunderstorm with slight hail"),
    row(99, "fa-bolt", "Thunderstorm with heavy hail"),
];

const fn row(code: i64, icon: &'static str, description: &'static str) -> Condition {
    Condition {
        code,
        icon,
        description,
    }
}

/// Look up a code in the table.
#[must_use]
pub fn lookup(code: i64) -> Option<&'static Condition> {
    CONDITIONS
        .binary_search_by_key(&code, |c| c.code)
        .ok()
        .map(|idx| &CONDITIONS[idx])
}

/// Icon (if any) and description for a possibly missing code.
///
/// Misses fall back to no icon and [`UNKNOWN_DESCRIPTION`].
#[must_use]
pub fn describe(code: Option<i64>) -> (Option<&'static str>, &'static str) {
    match code.and_then(lookup) {
        Some(condition) => (Some(condition.icon), condition.description),
        None => (None, UNKNOWN_DESCRIPTION),
    }
}

/// Interpret a JSON number as a condition code. Fractional or non-finite
/// values are not codes.
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn code_of(value: f64) -> Option<i64> {
    if value.is_finite() && value.fract() == 0.0 && value.abs() <= f64::from(i32::MAX) {
        Some(value as i64)
    } else {
        None
    }
}
