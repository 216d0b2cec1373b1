//! Theme attribute on the document root element.

use weatherboard_domain::theme::Theme;

fn root() -> Option<web_sys::Element> {
    web_sys::window()?.document()?.document_element()
}

/// Theme currently set on `<html>`; `None` when absent or unrecognized.
#[must_use]
pub fn read_theme(attribute: &str) -> Option<Theme> {
    root()?.get_attribute(attribute)?.parse().ok()
}

/// Set the theme attribute on `<html>`.
pub fn apply_theme(attribute: &str, theme: Theme) {
    let Some(root) = root() else {
        tracing::warn!("no document root to apply theme to");
        return;
    };
    if let Err(err) = root.set_attribute(attribute, theme.as_str()) {
        tracing::warn!(attribute, error = ?err, "failed to set theme attribute");
    }
}
