//! Browser wiring and the WASM entry point.
//!
//! SYSTEM CONTEXT
//! ==============
//! Binds the pure decision logic in the rest of the crate to the live page
//! through `web-sys`. Each subsystem wires itself independently: a page
//! without a contact form or artifact grid simply skips that subsystem, and
//! a failure wiring one never prevents the others.

mod contact;
mod dom;
mod filter;
mod nav;
mod scroll;
mod theme;

use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Window};

use crate::config::{CONFIG_ATTRIBUTE, SiteConfig};
use crate::error::SiteError;

/// Handles shared by every subsystem's event listeners.
#[derive(Clone)]
pub(crate) struct Page {
    pub window: Window,
    pub document: Document,
    pub config: Rc<SiteConfig>,
}

type WireFn = fn(&Page) -> Result<(), SiteError>;

const SUBSYSTEMS: [(&str, WireFn); 5] = [
    ("navigation", nav::wire),
    ("smooth scroll", scroll::wire),
    ("artifact filter", filter::wire),
    ("contact form", contact::wire),
    ("theme", theme::wire),
];

#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    if let Err(e) = console_log::init_with_level(log::Level::Info) {
        web_sys::console::warn_1(&format!("console logger unavailable: {e}").into());
    }

    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        log::warn!("no document; site script inactive");
        return;
    };
    if document.ready_state() != "loading" {
        boot();
        return;
    }
    let on_ready = Closure::once_into_js(boot);
    if let Err(e) = document.add_event_listener_with_callback("DOMContentLoaded", on_ready.unchecked_ref()) {
        log::warn!("DOMContentLoaded listener failed: {e:?}");
    }
}

fn boot() {
    let Some(window) = web_sys::window() else {
        return;
    };
    let Some(document) = window.document() else {
        return;
    };
    let raw = document.document_element().and_then(|root| root.get_attribute(CONFIG_ATTRIBUTE));
    let page = Page { window, document, config: Rc::new(SiteConfig::resolve(raw.as_deref())) };

    for (name, wire) in SUBSYSTEMS {
        if let Err(e) = wire(&page) {
            log::warn!("{name} not wired: {e}");
        }
    }
    log::info!("site script ready");
}
