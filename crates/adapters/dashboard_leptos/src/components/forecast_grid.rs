//! Forecast table component.

use leptos::prelude::*;
use weatherboard_domain::dashboard::{ForecastRow, ForecastTable};

/// A striped table with one row per forecast timestamp.
#[component]
pub fn ForecastGrid(table: ForecastTable) -> impl IntoView {
    let fields: Vec<&'static str> = table.columns.iter().map(|field| field.key()).collect();

    view! {
        <div class="table-responsive">
            <table class="table table-striped">
                <thead>
                    <tr>
                        {table
                            .headers
                            .into_iter()
                            .map(|header| view! { <th>{header}</th> })
                            .collect_view()}
                    </tr>
                </thead>
                <tbody>
                    {table
                        .rows
                        .into_iter()
                        .map(|row| view! { <ForecastLine row fields=fields.clone()/> })
                        .collect_view()}
                </tbody>
            </table>
        </div>
    }
}

/// A single row in the forecast table. Each value cell carries the payload
/// field it came from as `data-field`.
#[component]
fn ForecastLine(row: ForecastRow, fields: Vec<&'static str>) -> impl IntoView {
    let icon = row.condition.map(|condition| {
        view! {
            <i
                class=format!("fas {} fa-lg text-primary", condition.icon)
                title=condition.description
                aria-label=condition.description
            ></i>
        }
    });

    view! {
        <tr>
            <td>{row.label}</td>
            <td>{icon}</td>
            {row
                .cells
                .into_iter()
                .zip(fields)
                .map(|(cell, field)| view! { <td data-field=field>{cell}</td> })
                .collect_view()}
        </tr>
    }
}
