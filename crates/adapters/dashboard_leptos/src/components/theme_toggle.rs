//! Light/dark theme toggle button.

use leptos::prelude::*;
use weatherboard_domain::theme::Theme;

use crate::document;

/// A button flipping the document theme.
///
/// The next theme is derived from the attribute currently on `<html>`, so a
/// theme set elsewhere is respected. `on_toggle` receives that current value
/// and returns the theme to apply (and persist).
#[component]
pub fn ThemeToggle<F>(
    /// Attribute on `<html>` holding the theme.
    #[prop(into)]
    attribute: String,
    /// Theme shown by the icon.
    theme: RwSignal<Option<Theme>>,
    on_toggle: F,
) -> impl IntoView
where
    F: Fn(Option<Theme>) -> Theme + 'static,
{
    let toggle = move |_| {
        let next = on_toggle(document::read_theme(&attribute));
        document::apply_theme(&attribute, next);
        theme.set(Some(next));
    };

    let label = move || {
        if theme.get() == Some(Theme::Dark) {
            "\u{263E}"
        } else {
            "\u{2600}"
        }
    };

    view! {
        <button
            id="theme-toggle"
            type="button"
            class="btn btn-outline-secondary"
            on:click=toggle
            title="Toggle theme"
        >
            {label}
        </button>
    }
}
