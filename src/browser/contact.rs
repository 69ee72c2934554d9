//! Placeholder contact form submit handler.

use std::rc::Rc;

use wasm_bindgen::JsCast;
use web_sys::{Element, Event, HtmlFormElement, HtmlInputElement, HtmlTextAreaElement, Window};

use super::{Page, dom};
use crate::config::SiteConfig;
use crate::contact::ContactForm;
use crate::error::SiteError;

pub(super) fn wire(page: &Page) -> Result<(), SiteError> {
    let Some(form) = page.document.get_element_by_id(&page.config.contact_form_id) else {
        log::debug!("no contact form on this page");
        return Ok(());
    };
    let window = page.window.clone();
    let cfg = Rc::clone(&page.config);
    let target = form.clone();
    dom::on(&form, "submit", move |event: Event| {
        event.prevent_default();
        if let Err(e) = handle_submit(&window, &target, &cfg) {
            log::warn!("contact form: {e}");
        }
    })
}

fn handle_submit(window: &Window, form: &Element, cfg: &SiteConfig) -> Result<(), SiteError> {
    let fields = &cfg.contact_fields;
    let submission = ContactForm::new(
        field_value(form, &fields.name)?,
        field_value(form, &fields.email)?,
        field_value(form, &fields.message)?,
    );
    let outcome = submission.submit();
    window.alert_with_message(outcome.notice()).map_err(dom::js_err("alert"))?;
    if outcome.resets_form() {
        if let Some(form) = form.dyn_ref::<HtmlFormElement>() {
            form.reset();
        }
    }
    Ok(())
}

/// Current value of the field matching `selector`; a missing or
/// non-text field reads as empty.
fn field_value(form: &Element, selector: &str) -> Result<String, SiteError> {
    let Some(field) = form.query_selector(selector).map_err(dom::js_err(selector))? else {
        return Ok(String::new());
    };
    if let Some(input) = field.dyn_ref::<HtmlInputElement>() {
        return Ok(input.value());
    }
    if let Some(area) = field.dyn_ref::<HtmlTextAreaElement>() {
        return Ok(area.value());
    }
    Ok(String::new())
}
