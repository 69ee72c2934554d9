//! DOM conventions the behavior layer binds to.
//!
//! Every id, selector, class name, and the storage key live here so pages
//! with a different markup convention can override them. Overrides come
//! from a JSON object in the `data-site-config` attribute on `<html>`;
//! keys that are absent keep their defaults.

use serde::Deserialize;

use crate::error::SiteError;

/// Attribute on the document root that may carry a JSON config override.
pub const CONFIG_ATTRIBUTE: &str = "data-site-config";

pub const DEFAULT_STORAGE_KEY: &str = "site-theme";
pub const DEFAULT_INDEX_PAGE: &str = "index.html";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteConfig {
    pub storage_key: String,
    pub theme_attribute: String,
    pub loading_class: String,
    pub dark_class: String,
    pub open_class: String,
    pub active_class: String,
    pub nav_toggle_selector: String,
    pub nav_selector: String,
    pub nav_link_selector: String,
    pub anchor_selector: String,
    pub artifact_grid_id: String,
    pub filter_button_selector: String,
    pub artifact_card_selector: String,
    pub contact_form_id: String,
    pub contact_fields: ContactFields,
    pub theme_toggle_selector: String,
    pub index_page: String,
}

/// Selectors for the three contact form inputs, relative to the form.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ContactFields {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_STORAGE_KEY.into(),
            theme_attribute: "data-theme".into(),
            loading_class: "theme-loading".into(),
            dark_class: "is-dark".into(),
            open_class: "open".into(),
            active_class: "active".into(),
            nav_toggle_selector: "#nav-toggle".into(),
            nav_selector: "#main-nav".into(),
            nav_link_selector: ".main-nav a".into(),
            anchor_selector: "a[href^=\"#\"]".into(),
            artifact_grid_id: "artifact-grid".into(),
            filter_button_selector: ".artifact-filters .filter".into(),
            artifact_card_selector: ".artifact".into(),
            contact_form_id: "contact-form".into(),
            contact_fields: ContactFields::default(),
            theme_toggle_selector: "#theme-toggle".into(),
            index_page: DEFAULT_INDEX_PAGE.into(),
        }
    }
}

impl Default for ContactFields {
    fn default() -> Self {
        Self { name: "#name".into(), email: "#email".into(), message: "#message".into() }
    }
}

impl SiteConfig {
    /// Parse a JSON override. Blank input yields the defaults.
    pub fn from_json(raw: &str) -> Result<Self, SiteError> {
        if raw.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_json::from_str(raw)?)
    }

    /// Resolve the effective config from an optional override attribute.
    ///
    /// A malformed override is logged and replaced by the defaults so one bad
    /// attribute never disables the whole page.
    pub fn resolve(raw: Option<&str>) -> Self {
        let Some(raw) = raw else {
            return Self::default();
        };
        match Self::from_json(raw) {
            Ok(config) => config,
            Err(e) => {
                log::warn!("ignoring {CONFIG_ATTRIBUTE}: {e}");
                Self::default()
            }
        }
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
