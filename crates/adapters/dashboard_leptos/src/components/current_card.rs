//! Current conditions block.

use leptos::prelude::*;
use weatherboard_domain::dashboard::CurrentPanel;

/// Icon, description and the formatted current readings.
#[component]
pub fn CurrentCard(panel: CurrentPanel) -> impl IntoView {
    let description = panel.description;
    let icon = panel.icon.map(|icon| {
        view! {
            <i
                class=format!("fas {icon} fa-3x text-primary")
                title=description
                aria-label=description
            ></i>
        }
    });

    view! {
        <div class="row mb-3 align-items-center">
            <div class="col-auto">{icon}</div>
            <div class="col">
                <strong>{description}</strong>
                <br/>
                "Temp: " {panel.temperature} " | Feels like: " {panel.apparent_temperature}
                <br/>
                "Wind: " {panel.wind}
                <br/>
                "Humidity: " {panel.humidity} " | UV: " {panel.uv_index}
            </div>
        </div>
    }
}
