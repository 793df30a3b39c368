use crate::Result;
use crate::error::Error;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::Closure;
use web_sys::{Document, Element, Event, EventTarget, HtmlElement};

pub fn set_panic_hook() {
    // When the `console_error_panic_hook` feature is enabled, we can call the
    // `set_panic_hook` function at least once during initialization, and then
    // we will get better error messages if our code ever panics.
    //
    // For more details see
    // https://github.com/rustwasm/console_error_panic_hook#readme
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

pub fn get_window() -> Result<web_sys::Window> {
    web_sys::window().ok_or_else(|| Error::technical("no global `window` exists"))
}

pub fn get_document() -> Result<Document> {
    get_window()?
        .document()
        .ok_or_else(|| Error::technical("should have a document on window"))
}

pub fn get_element_by_id(document: &Document, id: &str) -> Result<Element> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| Error::technical(&format!("`{id}` element does not exist")))
}

pub fn get_element_by_id_dyn<T: JsCast>(document: &Document, id: &str) -> Result<T> {
    Ok(get_element_by_id(document, id)?.dyn_into()?)
}

pub fn query_selector_dyn<T: JsCast>(parent: &Element, selector: &str) -> Result<Option<T>> {
    match parent.query_selector(selector)? {
        None => Ok(None),
        Some(element) => Ok(Some(element.dyn_into()?)),
    }
}

/// All elements matching `selector`, in document order.
pub fn query_selector_all(document: &Document, selector: &str) -> Result<Vec<Element>> {
    let nodes = document.query_selector_all(selector)?;
    let mut elements = Vec::with_capacity(nodes.length() as usize);
    for index in 0..nodes.length() {
        if let Some(node) = nodes.get(index) {
            elements.push(node.dyn_into::<Element>()?);
        }
    }
    Ok(elements)
}

pub fn set_style(element: &Element, property: &str, value: &str) -> Result<()> {
    element
        .dyn_ref::<HtmlElement>()
        .ok_or_else(|| Error::technical("element is not an HTML element"))?
        .style()
        .set_property(property, value)?;
    Ok(())
}

/// Register `handler` for `event_type` on `target` for the lifetime of the page.
pub fn add_event_listener<F>(target: &EventTarget, event_type: &str, handler: F) -> Result<()>
where
    F: Fn(Event) + 'static,
{
    let closure = Closure::<dyn Fn(Event)>::new(handler);
    target.add_event_listener_with_callback(event_type, closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}

/// Run `callback` once after `delay` milliseconds.
pub fn set_timeout<F>(delay: i32, callback: F) -> Result<()>
where
    F: FnOnce() + 'static,
{
    let closure = Closure::once_into_js(callback);
    get_window()?
        .set_timeout_with_callback_and_timeout_and_arguments_0(closure.unchecked_ref(), delay)?;
    Ok(())
}

/// Log the error instead of stopping the caller.
pub fn log_on_error<T>(result: Result<T>) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(error) => {
            error!("{error:?}");
            None
        }
    }
}
