//! Theme: the light/dark display preference.

use std::fmt;
use std::str::FromStr;

/// Display theme applied as a document-level attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    /// Attribute / storage value.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// Next theme after a toggle from the current document attribute.
    ///
    /// Only an explicit `light` turns dark; a missing attribute toggles to
    /// light.
    #[must_use]
    pub fn toggle_from(current: Option<Self>) -> Self {
        match current {
            Some(Self::Light) => Self::Dark,
            Some(Self::Dark) | None => Self::Light,
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a string is neither `light` nor `dark`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown theme {0:?}")]
pub struct ParseThemeError(pub String);

impl FromStr for Theme {
    type Err = ParseThemeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            other => Err(ParseThemeError(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_turn_dark_when_current_is_light() {
        assert_eq!(Theme::toggle_from(Some(Theme::Light)), Theme::Dark);
    }

    #[test]
    fn should_turn_light_when_current_is_dark() {
        assert_eq!(Theme::toggle_from(Some(Theme::Dark)), Theme::Light);
    }

    #[test]
    fn should_turn_light_when_attribute_is_missing() {
        assert_eq!(Theme::toggle_from(None), Theme::Light);
    }

    #[test]
    fn should_restore_original_after_two_toggles() {
        for start in [Theme::Light, Theme::Dark] {
            let once = Theme::toggle_from(Some(start));
            assert_eq!(Theme::toggle_from(Some(once)), start);
        }
    }

    #[test]
    fn should_roundtrip_through_display_and_from_str() {
        for theme in [Theme::Light, Theme::Dark] {
            assert_eq!(theme.to_string().parse::<Theme>().unwrap(), theme);
        }
    }

    #[test]
    fn should_reject_unknown_theme_name() {
        assert_eq!(
            "Dark".parse::<Theme>(),
            Err(ParseThemeError("Dark".to_string()))
        );
    }
}
