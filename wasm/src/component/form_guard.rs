use crate::Result;
use crate::page::PASSWORD_FORM_ID;
use crate::utils::{add_event_listener, get_window, log_on_error, query_selector_all, set_style};
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlButtonElement};

const SUBMIT_BUTTON_SELECTOR: &str = r#"button[type="submit"]"#;
/// Marks the buttons disabled by this guard, so that others are left alone.
const GUARDED_ATTRIBUTE: &str = "data-submitting";

/// Disable the submit button of a form once submitted, to avoid double submissions.
///
/// The button comes back when the page is shown again, e.g. from the back-forward cache.
pub fn init_form_guards(document: &Document) -> Result<()> {
    for form in query_selector_all(document, "form")? {
        if form.id() == PASSWORD_FORM_ID {
            continue;
        }
        let submitted = form.clone();
        add_event_listener(&form, "submit", move |_| {
            log_on_error(disable_submit_button(&submitted));
        })?;
    }

    let window = get_window()?;
    let document = document.clone();
    add_event_listener(&window, "pageshow", move |_| {
        log_on_error(enable_guarded_buttons(&document));
    })
}

fn disable_submit_button(form: &Element) -> Result<()> {
    let Some(button) = form.query_selector(SUBMIT_BUTTON_SELECTOR)? else {
        return Ok(());
    };
    if let Some(button) = button.dyn_ref::<HtmlButtonElement>() {
        button.set_disabled(true);
    }
    button.set_attribute(GUARDED_ATTRIBUTE, "")?;
    set_style(&button, "opacity", "0.5")
}

fn enable_guarded_buttons(document: &Document) -> Result<()> {
    for button in query_selector_all(document, &format!("[{GUARDED_ATTRIBUTE}]"))? {
        if let Some(button) = button.dyn_ref::<HtmlButtonElement>() {
            button.set_disabled(false);
        }
        button.remove_attribute(GUARDED_ATTRIBUTE)?;
        set_style(&button, "opacity", "1")?;
    }
    Ok(())
}
