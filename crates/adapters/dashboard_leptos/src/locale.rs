//! Locale-aware day labels via `Date.prototype.toLocaleDateString`.

use chrono::{Datelike, NaiveDateTime, Timelike};
use js_sys::{Date, Object, Reflect};
use wasm_bindgen::JsValue;
use weatherboard_domain::time::{DayLabeler, ForecastTime, parse_forecast_time};

/// Locale used when the browser does not report one.
const FALLBACK_LOCALE: &str = "en-US";

/// Labels forecast rows as short weekday, short month and day in the
/// viewer's locale.
#[derive(Debug, Clone)]
pub struct BrowserDayLabeler {
    locale: String,
}

impl BrowserDayLabeler {
    /// Use the locale reported by `navigator.language`.
    #[must_use]
    pub fn from_navigator() -> Self {
        let locale = web_sys::window()
            .map(|w| w.navigator().language())
            .and_then(|lang| lang.filter(|l| !l.is_empty()))
            .unwrap_or_else(|| FALLBACK_LOCALE.to_string());
        Self { locale }
    }

    fn format(&self, time: ForecastTime) -> Option<String> {
        let date = match time {
            ForecastTime::Local(dt) => local_date(dt)?,
            ForecastTime::Instant(dt) => instant_date(dt.timestamp_millis()),
        };
        if date.get_time().is_nan() {
            return None;
        }
        let options = Object::new();
        for (key, value) in [("weekday", "short"), ("month", "short"), ("day", "numeric")] {
            Reflect::set(&options, &JsValue::from_str(key), &JsValue::from_str(value)).ok()?;
        }
        date.to_locale_date_string(&self.locale, &options).as_string()
    }
}

/// A wall-clock time in the viewer's timezone.
fn local_date(dt: NaiveDateTime) -> Option<Date> {
    Some(Date::new_with_year_month_day_hr_min_sec(
        u32::try_from(dt.year()).ok()?,
        i32::try_from(dt.month0()).ok()?,
        i32::try_from(dt.day()).ok()?,
        i32::try_from(dt.hour()).ok()?,
        i32::try_from(dt.minute()).ok()?,
        i32::try_from(dt.second()).ok()?,
    ))
}

/// An absolute instant; the browser renders it in the viewer's timezone.
#[allow(clippy::cast_precision_loss)]
fn instant_date(millis: i64) -> Date {
    // Forecast-range millisecond timestamps fit an f64 exactly.
    Date::new(&JsValue::from_f64(millis as f64))
}

impl DayLabeler for BrowserDayLabeler {
    fn label(&self, timestamp: &str) -> String {
        parse_forecast_time(timestamp)
            .and_then(|dt| self.format(dt))
            .unwrap_or_else(|| timestamp.to_string())
    }
}
