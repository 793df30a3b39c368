use crate::Result;
use crate::component::materialize::toast;
use crate::json::to_js_value;
use crate::utils::{add_event_listener, log_on_error, query_selector_all, set_style, set_timeout};
use serde::Serialize;
use web_sys::{Document, Element};

const SERVER_TOAST_SELECTOR: &str = ".toast";
const TOAST_LIFETIME_MS: i32 = 4000;
const TOAST_FADE_OUT_MS: i32 = 300;
const ERROR_TOAST_CLASSES: &str = "red";

#[derive(Serialize)]
struct ToastOptions<'a> {
    html: &'a str,
    classes: &'a str,
}

/// Show a transient error notification.
pub fn show_toast(message: &str) -> Result<()> {
    let options = ToastOptions {
        html: message,
        classes: ERROR_TOAST_CLASSES,
    };
    toast(&to_js_value(&options)?)?;
    Ok(())
}

/// Toasts rendered by the server disappear on click, or by themselves after a while.
pub fn init_server_toasts(document: &Document) -> Result<()> {
    for element in query_selector_all(document, SERVER_TOAST_SELECTOR)? {
        let clicked = element.clone();
        add_event_listener(&element, "click", move |_| clicked.remove())?;
        set_timeout(TOAST_LIFETIME_MS, move || {
            log_on_error(fade_out(&element));
        })?;
    }
    Ok(())
}

fn fade_out(element: &Element) -> Result<()> {
    set_style(element, "opacity", "0")?;
    set_style(element, "transform", "translateY(-10px)")?;
    let element = element.clone();
    set_timeout(TOAST_FADE_OUT_MS, move || element.remove())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::get_document;
    use wasm_bindgen::JsCast;
    use wasm_bindgen_test::*;
    use web_sys::HtmlElement;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn should_remove_toast_on_click() {
        let document = get_document().unwrap();
        let container = document.create_element("div").unwrap();
        container.set_inner_html(r#"<div class="toast" id="saved-toast">Saved</div>"#);
        document.body().unwrap().append_child(&container).unwrap();

        init_server_toasts(&document).unwrap();
        document
            .get_element_by_id("saved-toast")
            .unwrap()
            .dyn_into::<HtmlElement>()
            .unwrap()
            .click();

        assert!(document.get_element_by_id("saved-toast").is_none());
        container.remove();
    }

    #[wasm_bindgen_test]
    fn should_fade_out_toast() {
        let document = get_document().unwrap();
        let element = document.create_element("div").unwrap();

        fade_out(&element).unwrap();

        let style = element.dyn_into::<HtmlElement>().unwrap().style();
        assert_eq!("0", style.get_property_value("opacity").unwrap());
        assert_eq!(
            "translateY(-10px)",
            style.get_property_value("transform").unwrap()
        );
    }
}
