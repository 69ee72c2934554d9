//! Light/dark theme model.
//!
//! SYSTEM CONTEXT
//! ==============
//! The theme is a single page-wide value mirrored in three places: the
//! `data-theme` attribute on `<html>` and `<body>`, the persisted preference,
//! and the visual state of every theme toggle button. [`controller`] keeps
//! them in agreement; this module only defines the value and how a toggle
//! looks for it.

pub mod controller;
pub mod icons;

/// Site-wide visual mode.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// Parse a persisted value. Only the two exact literals are accepted.
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            _ => None,
        }
    }

    /// Interpret a document attribute: anything other than `dark` is light.
    pub fn from_attribute(raw: Option<&str>) -> Self {
        if raw == Some("dark") { Self::Dark } else { Self::Light }
    }

    pub fn from_os_preference(prefers_dark: bool) -> Self {
        if prefers_dark { Self::Dark } else { Self::Light }
    }

    #[must_use]
    pub fn opposite(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    pub fn is_dark(self) -> bool {
        self == Self::Dark
    }
}

impl std::fmt::Display for Theme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Everything a toggle button shows for the current theme.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ToggleAppearance {
    pub icon_markup: &'static str,
    pub aria_label: &'static str,
    pub title: &'static str,
    pub is_dark: bool,
}

impl ToggleAppearance {
    /// The label describes the action a click performs, so a dark page
    /// offers the switch to light.
    pub fn for_theme(theme: Theme) -> Self {
        match theme {
            Theme::Dark => Self {
                icon_markup: icons::MOON,
                aria_label: "Switch to light theme",
                title: "Dark mode — switch to light",
                is_dark: theme.is_dark(),
            },
            Theme::Light => Self {
                icon_markup: icons::SUN,
                aria_label: "Switch to dark theme",
                title: "Light mode — switch to dark",
                is_dark: theme.is_dark(),
            },
        }
    }
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
