//! `localStorage` and DOM implementations of the theme controller seams.

use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Element, HtmlElement, Storage, Window};

use super::{Page, dom};
use crate::error::SiteError;
use crate::theme::ToggleAppearance;
use crate::theme::controller::{PreferenceStore, ThemeController, ThemeDocument};

const DARK_SCHEME_QUERY: &str = "(prefers-color-scheme: dark)";

pub struct LocalStore {
    storage: Option<Storage>,
    key: String,
}

impl LocalStore {
    pub fn open(window: &Window, key: &str) -> Self {
        let storage = match window.local_storage() {
            Ok(storage) => storage,
            Err(e) => {
                log::debug!("localStorage blocked: {e:?}");
                None
            }
        };
        Self { storage, key: key.to_string() }
    }
}

impl PreferenceStore for LocalStore {
    fn load(&self) -> Option<String> {
        match self.storage.as_ref()?.get_item(&self.key) {
            Ok(value) => value,
            Err(e) => {
                log::debug!("reading {}: {e:?}", self.key);
                None
            }
        }
    }

    fn save(&self, value: &str) -> Result<(), SiteError> {
        let Some(storage) = &self.storage else {
            return Err(SiteError::Storage("localStorage unavailable".into()));
        };
        storage
            .set_item(&self.key, value)
            .map_err(|e| SiteError::Storage(format!("{}: {e:?}", self.key)))
    }
}

pub struct PageTheme {
    window: Window,
    root: Element,
    body: Option<HtmlElement>,
    toggles: Vec<Element>,
    attribute: String,
    dark_class: String,
}

impl PageTheme {
    fn style_toggle(&self, toggle: &Element, appearance: &ToggleAppearance) -> Result<(), SiteError> {
        toggle.set_inner_html(appearance.icon_markup);
        dom::set_attr(toggle, "aria-label", appearance.aria_label)?;
        dom::set_attr(toggle, "title", appearance.title)?;
        dom::set_class(toggle, &self.dark_class, appearance.is_dark)
    }
}

impl ThemeDocument for PageTheme {
    fn prefers_dark(&self) -> bool {
        match self.window.match_media(DARK_SCHEME_QUERY) {
            Ok(Some(query)) => query.matches(),
            _ => false,
        }
    }

    fn theme_attribute(&self) -> Option<String> {
        self.root.get_attribute(&self.attribute)
    }

    fn set_theme_attribute(&self, value: &str) {
        let body: Option<&Element> = self.body.as_deref();
        for el in std::iter::once(&self.root).chain(body) {
            if let Err(e) = dom::set_attr(el, &self.attribute, value) {
                log::warn!("{e}");
            }
        }
    }

    fn render_toggles(&self, appearance: &ToggleAppearance) {
        for toggle in &self.toggles {
            if let Err(e) = self.style_toggle(toggle, appearance) {
                log::warn!("theme toggle not restyled: {e}");
            }
        }
    }
}

pub(super) fn wire(page: &Page) -> Result<(), SiteError> {
    let cfg = &page.config;
    let root = page
        .document
        .document_element()
        .ok_or_else(|| SiteError::Dom("document has no root element".into()))?;
    let toggles = match dom::query_all(&page.document, &cfg.theme_toggle_selector) {
        Ok(toggles) => toggles,
        Err(e) => {
            log::warn!("theme toggles unavailable: {e}");
            Vec::new()
        }
    };

    let surface = PageTheme {
        window: page.window.clone(),
        root: root.clone(),
        body: page.document.body(),
        toggles: toggles.clone(),
        attribute: cfg.theme_attribute.clone(),
        dark_class: cfg.dark_class.clone(),
    };
    let controller = Rc::new(ThemeController::new(LocalStore::open(&page.window, &cfg.storage_key), surface));
    let initial = controller.initialize();
    log::info!("theme {initial} applied ({} toggle(s))", toggles.len());

    for toggle in &toggles {
        let controller = Rc::clone(&controller);
        let wired = dom::on(toggle, "click", move |_| {
            if let Err(e) = controller.toggle_theme() {
                log::warn!("theme toggle: {e}");
            }
        });
        if let Err(e) = wired {
            log::warn!("theme toggle listener: {e}");
        }
    }

    finish_loading(&page.window, root, cfg.loading_class.clone())
}

/// Drop the loading class on the next frame so transitions only run for
/// user-initiated theme changes.
fn finish_loading(window: &Window, root: Element, class: String) -> Result<(), SiteError> {
    let on_frame = Closure::once_into_js(move || {
        if let Err(e) = dom::set_class(&root, &class, false) {
            log::warn!("{e}");
        }
    });
    window
        .request_animation_frame(on_frame.unchecked_ref::<js_sys::Function>())
        .map_err(dom::js_err("requestAnimationFrame"))?;
    Ok(())
}
