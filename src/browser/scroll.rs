//! Smooth scrolling for in-page `#fragment` links.

use std::rc::Rc;

use web_sys::{Event, ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition};

use super::{Page, dom, nav};
use crate::error::SiteError;
use crate::scroll::anchor_target;

pub(super) fn wire(page: &Page) -> Result<(), SiteError> {
    for anchor in dom::query_all(&page.document, &page.config.anchor_selector)? {
        let document = page.document.clone();
        let cfg = Rc::clone(&page.config);
        let link = anchor.clone();
        dom::on(&anchor, "click", move |event: Event| {
            event.prevent_default();
            let href = link.get_attribute("href");
            let Some(id) = anchor_target(href.as_deref()) else {
                return;
            };
            let Some(target) = document.get_element_by_id(id) else {
                log::debug!("no scroll target #{id}");
                return;
            };
            let options = ScrollIntoViewOptions::new();
            options.set_behavior(ScrollBehavior::Smooth);
            options.set_block(ScrollLogicalPosition::Start);
            target.scroll_into_view_with_scroll_into_view_options(&options);
            if let Err(e) = nav::close_menu(&document, &cfg) {
                log::warn!("nav close: {e}");
            }
        })?;
    }
    Ok(())
}
