//! Light/dark color scheme.

use std::fmt;

/// Color scheme selected by the mode toggle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// The other scheme.
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// Value of the `data-theme` attribute and of the stored preference.
    #[must_use]
    pub const fn as_attr(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// Parse a stored `data-theme` value. Unknown values yield `None`.
    #[must_use]
    pub fn from_attr(value: &str) -> Option<Self> {
        match value.trim() {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            _ => None,
        }
    }

    /// Accessible label for a button that switches away from `self`.
    #[must_use]
    pub const fn toggle_label(self) -> &'static str {
        match self {
            Self::Light => "Switch to dark mode",
            Self::Dark => "Switch to light mode",
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_attr())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_is_an_involution() {
        for theme in [Theme::Light, Theme::Dark] {
            assert_ne!(theme.toggled(), theme);
            assert_eq!(theme.toggled().toggled(), theme);
        }
    }

    #[test]
    fn attr_parses_back() {
        for theme in [Theme::Light, Theme::Dark] {
            assert_eq!(Theme::from_attr(theme.as_attr()), Some(theme));
        }
        assert_eq!(Theme::from_attr(" dark\n"), Some(Theme::Dark));
    }

    #[test]
    fn unknown_attr_is_none() {
        assert_eq!(Theme::from_attr(""), None);
        assert_eq!(Theme::from_attr("sepia"), None);
        assert_eq!(Theme::from_attr("Dark"), None);
    }
}
