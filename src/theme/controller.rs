//! Theme resolution, application, and toggling.
//!
//! SYSTEM CONTEXT
//! ==============
//! The controller owns the two I/O seams of the theme subsystem: a
//! [`PreferenceStore`] for the persisted choice and a [`ThemeDocument`] for
//! the page. The browser build implements both over `web-sys`; tests use
//! in-memory fakes.
//!
//! TRADE-OFFS
//! ==========
//! DOM updates run before the storage write. When storage is disabled or
//! full the page still switches theme for the session and the failure is
//! returned to the caller instead of leaving toggles half-updated.

use super::{Theme, ToggleAppearance};
use crate::error::SiteError;

/// Persisted theme preference.
pub trait PreferenceStore {
    /// Raw persisted value, or `None` when nothing is stored or storage is
    /// unreadable.
    fn load(&self) -> Option<String>;
    fn save(&self, value: &str) -> Result<(), SiteError>;
}

/// The page surface the theme is applied to.
pub trait ThemeDocument {
    /// Whether the OS reports a dark color-scheme preference.
    fn prefers_dark(&self) -> bool;
    /// Current theme attribute on the document root.
    fn theme_attribute(&self) -> Option<String>;
    /// Set the theme attribute on the document root and body.
    fn set_theme_attribute(&self, value: &str);
    /// Restyle every toggle control in one pass.
    fn render_toggles(&self, appearance: &ToggleAppearance);
}

pub struct ThemeController<S, D> {
    store: S,
    document: D,
}

impl<S: PreferenceStore, D: ThemeDocument> ThemeController<S, D> {
    pub fn new(store: S, document: D) -> Self {
        Self { store, document }
    }

    /// Persisted theme if one is stored, otherwise the OS preference.
    pub fn resolve_initial_theme(&self) -> Theme {
        if let Some(raw) = self.store.load() {
            if let Some(theme) = Theme::parse(&raw) {
                return theme;
            }
            if !raw.is_empty() {
                log::debug!("ignoring unrecognized stored theme {raw:?}");
            }
        }
        Theme::from_os_preference(self.document.prefers_dark())
    }

    /// Apply `theme` to the document and every toggle, then persist it.
    ///
    /// The document is updated even when the write fails; the storage error
    /// is returned for the caller to report.
    pub fn apply_theme(&self, theme: Theme) -> Result<(), SiteError> {
        self.document.set_theme_attribute(theme.as_str());
        self.document.render_toggles(&ToggleAppearance::for_theme(theme));
        self.store.save(theme.as_str())
    }

    /// Flip the theme currently shown on the document root.
    pub fn toggle_theme(&self) -> Result<Theme, SiteError> {
        let current = Theme::from_attribute(self.document.theme_attribute().as_deref());
        let next = current.opposite();
        log::debug!("theme toggle {current} -> {next}");
        self.apply_theme(next)?;
        Ok(next)
    }

    /// Resolve and apply the initial theme for a fresh page load.
    pub fn initialize(&self) -> Theme {
        let theme = self.resolve_initial_theme();
        if let Err(e) = self.apply_theme(theme) {
            log::warn!("theme {theme} applied but not persisted: {e}");
        }
        theme
    }
}

#[cfg(test)]
#[path = "controller_test.rs"]
mod tests;
