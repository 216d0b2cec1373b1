//! The single error message area.

use leptos::prelude::*;

/// Shows the latest failure; hidden while `message` is `None`.
#[component]
pub fn ErrorBanner(#[prop(into)] message: Signal<Option<String>>) -> impl IntoView {
    view! {
        <div
            id="error-message"
            class="alert alert-danger"
            class=("d-none", move || message.with(Option::is_none))
            role="alert"
        >
            {move || message.get().unwrap_or_default()}
        </div>
    }
}
