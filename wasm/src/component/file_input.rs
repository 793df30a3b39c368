use crate::Result;
use crate::utils::{add_event_listener, log_on_error, query_selector_all, query_selector_dyn};
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Event, HtmlInputElement};

const FILE_INPUT_SELECTOR: &str = r#".file-field input[type="file"]"#;

/// Mirror the chosen file names into the `.file-path` field next to each file input.
pub fn init_file_inputs(document: &Document) -> Result<()> {
    for element in query_selector_all(document, FILE_INPUT_SELECTOR)? {
        let file_input = element.clone().dyn_into::<HtmlInputElement>()?;
        add_event_listener(&element, "change", move |_| {
            log_on_error(display_file_names(&file_input));
        })?;
    }
    Ok(())
}

fn display_file_names(file_input: &HtmlInputElement) -> Result<()> {
    let names = selected_file_names(file_input);
    if names.is_empty() {
        return Ok(());
    }

    if let Some(file_path) = file_path_input(file_input)? {
        file_path.set_value(&names.join(", "));
        file_path.dispatch_event(&Event::new("change")?)?;
    }
    Ok(())
}

fn selected_file_names(file_input: &HtmlInputElement) -> Vec<String> {
    let Some(files) = file_input.files() else {
        return vec![];
    };
    (0..files.length())
        .filter_map(|index| files.get(index))
        .map(|file| file.name())
        .collect()
}

fn file_path_input(file_input: &Element) -> Result<Option<HtmlInputElement>> {
    match file_input.closest(".file-field")? {
        None => Ok(None),
        Some(file_field) => query_selector_dyn::<HtmlInputElement>(&file_field, ".file-path"),
    }
}
