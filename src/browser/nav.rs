//! Hamburger toggle, close-on-link, and active link highlighting.

use std::rc::Rc;

use web_sys::{Document, Element};

use super::{Page, dom};
use crate::config::SiteConfig;
use crate::error::SiteError;
use crate::nav::{NavMenu, current_page, is_active_link};

pub(super) fn wire(page: &Page) -> Result<(), SiteError> {
    for button in dom::query_all(&page.document, &page.config.nav_toggle_selector)? {
        let document = page.document.clone();
        let cfg = Rc::clone(&page.config);
        let target = button.clone();
        dom::on(&button, "click", move |_| {
            if let Err(e) = toggle_menu(&document, &target, &cfg) {
                log::warn!("nav toggle: {e}");
            }
        })?;
    }

    let links = dom::query_all(&page.document, &page.config.nav_link_selector)?;
    for link in &links {
        let document = page.document.clone();
        let cfg = Rc::clone(&page.config);
        dom::on(link, "click", move |_| {
            if let Err(e) = close_menu(&document, &cfg) {
                log::warn!("nav close: {e}");
            }
        })?;
    }

    highlight_active(page, &links)
}

fn toggle_menu(document: &Document, button: &Element, cfg: &SiteConfig) -> Result<(), SiteError> {
    let menu = NavMenu::from_aria_expanded(button.get_attribute("aria-expanded").as_deref()).toggled();
    dom::set_attr(button, "aria-expanded", menu.aria_expanded())?;
    if let Some(nav) = dom::find(document, &cfg.nav_selector)? {
        dom::set_class(&nav, &cfg.open_class, menu.open)?;
    }
    dom::set_class(button, &cfg.open_class, menu.open)
}

/// Collapse the mobile nav if it is open.
pub(super) fn close_menu(document: &Document, cfg: &SiteConfig) -> Result<(), SiteError> {
    let Some(nav) = dom::find(document, &cfg.nav_selector)? else {
        return Ok(());
    };
    if !nav.class_list().contains(&cfg.open_class) {
        return Ok(());
    }
    dom::set_class(&nav, &cfg.open_class, false)?;
    if let Some(toggle) = dom::find(document, &cfg.nav_toggle_selector)? {
        dom::set_attr(&toggle, "aria-expanded", NavMenu::default().aria_expanded())?;
        dom::set_class(&toggle, &cfg.open_class, false)?;
    }
    Ok(())
}

fn highlight_active(page: &Page, links: &[Element]) -> Result<(), SiteError> {
    let pathname = page.window.location().pathname().map_err(dom::js_err("location.pathname"))?;
    let current = current_page(&pathname, &page.config.index_page);
    for link in links {
        if is_active_link(link.get_attribute("href").as_deref(), current) {
            dom::set_class(link, &page.config.active_class, true)?;
        }
    }
    Ok(())
}
