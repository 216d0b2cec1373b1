//! Location form with units selector and granularity switch.

use leptos::prelude::*;
use weatherboard_domain::query::{Granularity, Query, UnitSystem};

/// Reactive field values of the form.
#[derive(Debug, Clone, Copy)]
pub struct FormState {
    pub city: RwSignal<String>,
    pub lat: RwSignal<String>,
    pub lon: RwSignal<String>,
    pub units: RwSignal<UnitSystem>,
    /// Checked means daily.
    pub daily: RwSignal<bool>,
}

impl FormState {
    /// Fields pre-filled from `initial`, or empty with metric units.
    pub fn new(initial: Option<&Query>) -> Self {
        let text =
            |pick: fn(&Query) -> &str| RwSignal::new(initial.map(pick).unwrap_or_default().to_string());
        Self {
            city: text(|q| &q.city),
            lat: text(|q| &q.lat),
            lon: text(|q| &q.lon),
            units: RwSignal::new(initial.map_or(UnitSystem::Metric, |q| q.units)),
            daily: RwSignal::new(initial.is_some_and(|q| q.granularity.is_daily())),
        }
    }

    /// Current field values as a trimmed query.
    pub fn snapshot(&self) -> Query {
        Query::from_form(
            &self.city.get_untracked(),
            &self.lat.get_untracked(),
            &self.lon.get_untracked(),
            self.units.get_untracked(),
            self.daily.get_untracked(),
        )
    }
}

/// The weather form. Submitting calls `on_submit` with the current values;
/// flipping the switch calls `on_granularity` with the new granularity.
#[component]
pub fn WeatherForm<S, G>(form: FormState, on_submit: S, on_granularity: G) -> impl IntoView
where
    S: Fn(Query) + 'static,
    G: Fn(Granularity) + 'static,
{
    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        on_submit(form.snapshot());
    };
    let switch = move |ev: web_sys::Event| {
        let daily = event_target_checked(&ev);
        form.daily.set(daily);
        on_granularity(Granularity::from_toggle(daily));
    };
    let units = move |ev: web_sys::Event| form.units.set(UnitSystem::from_wire(&event_target_value(&ev)));

    view! {
        <form id="weather-form" class="row g-2 align-items-end mb-3" on:submit=submit>
            <div class="col-md-4">
                <label for="city" class="form-label">"City"</label>
                <input id="city" type="text" class="form-control" bind:value=form.city/>
            </div>
            <div class="col-md-2">
                <label for="lat" class="form-label">"Latitude"</label>
                <input id="lat" type="text" class="form-control" bind:value=form.lat/>
            </div>
            <div class="col-md-2">
                <label for="lon" class="form-label">"Longitude"</label>
                <input id="lon" type="text" class="form-control" bind:value=form.lon/>
            </div>
            <div class="col-md-2">
                <label for="units" class="form-label">"Units"</label>
                <select id="units" class="form-select" on:change=units>
                    <option
                        value=UnitSystem::Metric.as_str()
                        selected=move || form.units.get() == UnitSystem::Metric
                    >
                        "Celsius"
                    </option>
                    <option
                        value=UnitSystem::Imperial.as_str()
                        selected=move || form.units.get() == UnitSystem::Imperial
                    >
                        "Fahrenheit"
                    </option>
                </select>
            </div>
            <div class="col-md-2">
                <button type="submit" class="btn btn-primary w-100">"Get weather"</button>
            </div>
            <div class="col-12 form-check form-switch ms-2">
                <input
                    id="forecast-type"
                    type="checkbox"
                    role="switch"
                    class="form-check-input"
                    prop:checked=move || form.daily.get()
                    on:change=switch
                />
                <label for="forecast-type" class="form-check-label">"Daily forecast"</label>
            </div>
        </form>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_default_to_empty_metric_hourly_when_nothing_is_stored() {
        let form = FormState::new(None);
        let query = form.snapshot();
        assert!(query.city.is_empty());
        assert_eq!(query.units, UnitSystem::Metric);
        assert_eq!(query.granularity, Granularity::Hourly);
    }

    #[test]
    fn should_restore_stored_query_when_prefilled() {
        let stored = Query::from_form("Oslo", "59.9", "10.7", UnitSystem::Imperial, true);
        let form = FormState::new(Some(&stored));
        assert_eq!(form.snapshot(), stored);
    }

    #[test]
    fn should_trim_field_values_when_snapshotting() {
        let form = FormState::new(None);
        form.city.set("  Bergen ".to_string());
        assert_eq!(form.snapshot().city, "Bergen");
    }
}
