//! Small `web-sys` helpers shared by the subsystem wiring.

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, Event, EventTarget, NodeList};

use crate::error::SiteError;

/// Map a thrown `JsValue` into [`SiteError::Dom`] with context.
pub fn js_err(context: &str) -> impl Fn(JsValue) -> SiteError + '_ {
    move |value| SiteError::Dom(format!("{context}: {value:?}"))
}

pub fn query_all(document: &Document, selector: &str) -> Result<Vec<Element>, SiteError> {
    let list = document.query_selector_all(selector).map_err(js_err(selector))?;
    Ok(elements(&list))
}

pub fn query_all_in(parent: &Element, selector: &str) -> Result<Vec<Element>, SiteError> {
    let list = parent.query_selector_all(selector).map_err(js_err(selector))?;
    Ok(elements(&list))
}

pub fn find(document: &Document, selector: &str) -> Result<Option<Element>, SiteError> {
    document.query_selector(selector).map_err(js_err(selector))
}

fn elements(list: &NodeList) -> Vec<Element> {
    (0..list.length())
        .filter_map(|i| list.item(i))
        .flat_map(|node| node.dyn_into::<Element>())
        .collect()
}

/// Add or remove `class` so its presence matches `present`.
pub fn set_class(el: &Element, class: &str, present: bool) -> Result<(), SiteError> {
    let classes = el.class_list();
    if present {
        classes.add_1(class).map_err(js_err(class))
    } else {
        classes.remove_1(class).map_err(js_err(class))
    }
}

pub fn set_attr(el: &Element, name: &str, value: &str) -> Result<(), SiteError> {
    el.set_attribute(name, value).map_err(js_err(name))
}

/// Attach a listener for the lifetime of the page.
pub fn on(target: &EventTarget, event: &str, handler: impl FnMut(Event) + 'static) -> Result<(), SiteError> {
    let closure = Closure::<dyn FnMut(Event)>::new(handler);
    target
        .add_event_listener_with_callback(event, closure.as_ref().unchecked_ref::<js_sys::Function>())
        .map_err(js_err(event))?;
    closure.forget();
    Ok(())
}
