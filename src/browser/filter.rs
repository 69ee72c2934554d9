//! Artifact grid filter buttons.

use std::rc::Rc;

use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlElement};

use super::{Page, dom};
use crate::config::SiteConfig;
use crate::error::SiteError;
use crate::filter::FilterSelection;

pub(super) fn wire(page: &Page) -> Result<(), SiteError> {
    let Some(grid) = page.document.get_element_by_id(&page.config.artifact_grid_id) else {
        log::debug!("no artifact grid on this page");
        return Ok(());
    };
    let buttons = Rc::new(dom::query_all(&page.document, &page.config.filter_button_selector)?);
    for button in buttons.iter() {
        let buttons = Rc::clone(&buttons);
        let grid = grid.clone();
        let cfg = Rc::clone(&page.config);
        let active = button.clone();
        dom::on(button, "click", move |_| {
            if let Err(e) = apply_filter(&grid, &buttons, &active, &cfg) {
                log::warn!("artifact filter: {e}");
            }
        })?;
    }
    Ok(())
}

fn apply_filter(grid: &Element, buttons: &[Element], active: &Element, cfg: &SiteConfig) -> Result<(), SiteError> {
    for button in buttons {
        dom::set_class(button, &cfg.active_class, false)?;
    }
    dom::set_class(active, &cfg.active_class, true)?;

    let selection = FilterSelection::from_data_filter(active.get_attribute("data-filter").as_deref());
    log::debug!("artifact filter {selection:?}");
    for card in dom::query_all_in(grid, &cfg.artifact_card_selector)? {
        let Some(card) = card.dyn_ref::<HtmlElement>() else {
            continue;
        };
        let display = selection.display_for(card.get_attribute("data-type").as_deref());
        card.style()
            .set_property("display", display)
            .map_err(dom::js_err("card display"))?;
    }
    Ok(())
}
