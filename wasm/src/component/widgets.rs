use crate::Result;
use crate::component::materialize::{
    init_carousels, init_datepickers, init_dropdowns, init_form_selects, init_modals,
    init_sidenavs, textarea_auto_resize, update_text_fields,
};
use crate::json::to_js_value;
use crate::utils::{log_on_error, query_selector_all};
use serde::Serialize;
use web_sys::Document;

#[derive(Serialize)]
struct SidenavOptions {
    edge: &'static str,
}

#[derive(Serialize)]
struct CarouselOptions {
    duration: u32,
    dist: i32,
    shift: i32,
    padding: i32,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct DropdownOptions {
    cover_trigger: bool,
    constrain_width: bool,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct DatepickerOptions {
    /// Matches `%d/%m/%Y` on the server side.
    format: &'static str,
    auto_close: bool,
    show_clear_btn: bool,
    /// Monday
    first_day: u8,
    i18n: DatepickerLabels,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct DatepickerLabels {
    cancel: &'static str,
    clear: &'static str,
    done: &'static str,
    months: [&'static str; 12],
    months_short: [&'static str; 12],
    weekdays: [&'static str; 7],
    weekdays_short: [&'static str; 7],
    weekdays_abbrev: [&'static str; 7],
}

const SIDENAV_OPTIONS: SidenavOptions = SidenavOptions { edge: "right" };

const CAROUSEL_OPTIONS: CarouselOptions = CarouselOptions {
    duration: 200,
    dist: -30,
    shift: 0,
    padding: 20,
};

const DROPDOWN_OPTIONS: DropdownOptions = DropdownOptions {
    cover_trigger: false,
    constrain_width: false,
};

const DATEPICKER_OPTIONS: DatepickerOptions = DatepickerOptions {
    format: "dd/mm/yyyy",
    auto_close: true,
    show_clear_btn: true,
    first_day: 1,
    i18n: DatepickerLabels {
        cancel: "Cancel",
        clear: "Clear",
        done: "Select",
        months: [
            "January",
            "February",
            "March",
            "April",
            "May",
            "June",
            "July",
            "August",
            "September",
            "October",
            "November",
            "December",
        ],
        months_short: [
            "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
        ],
        weekdays: [
            "Sunday",
            "Monday",
            "Tuesday",
            "Wednesday",
            "Thursday",
            "Friday",
            "Saturday",
        ],
        weekdays_short: ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"],
        weekdays_abbrev: ["S", "M", "T", "W", "T", "F", "S"],
    },
};

/// Initialize every Materialize widget of the page.
/// A widget failing to start is logged and the others are still initialized.
pub fn init_widgets(document: &Document) {
    log_on_error(init_sidenav(document));
    log_on_error(init_carousel(document));
    log_on_error(init_modal(document));
    log_on_error(init_dropdown(document));
    log_on_error(init_form_select(document));
    log_on_error(update_text_fields().map_err(Into::into));
    log_on_error(init_textareas(document));
    log_on_error(init_datepicker(document));
}

fn init_sidenav(document: &Document) -> Result<()> {
    init_sidenavs(
        &document.query_selector_all(".sidenav")?,
        &to_js_value(&SIDENAV_OPTIONS)?,
    )?;
    Ok(())
}

fn init_carousel(document: &Document) -> Result<()> {
    init_carousels(
        &document.query_selector_all(".carousel")?,
        &to_js_value(&CAROUSEL_OPTIONS)?,
    )?;
    Ok(())
}

fn init_modal(document: &Document) -> Result<()> {
    init_modals(&document.query_selector_all(".modal")?)?;
    Ok(())
}

fn init_dropdown(document: &Document) -> Result<()> {
    init_dropdowns(
        &document.query_selector_all(".dropdown-trigger")?,
        &to_js_value(&DROPDOWN_OPTIONS)?,
    )?;
    Ok(())
}

fn init_form_select(document: &Document) -> Result<()> {
    init_form_selects(&document.query_selector_all("select")?)?;
    Ok(())
}

fn init_textareas(document: &Document) -> Result<()> {
    for textarea in query_selector_all(document, ".materialize-textarea")? {
        textarea_auto_resize(&textarea)?;
    }
    Ok(())
}

fn init_datepicker(document: &Document) -> Result<()> {
    init_datepickers(
        &document.query_selector_all(".datepicker")?,
        &to_js_value(&DATEPICKER_OPTIONS)?,
    )?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::json::to_string;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn should_write_options_in_materialize_format() {
        assert_eq!(
            r#"{"coverTrigger":false,"constrainWidth":false}"#,
            to_string(&DROPDOWN_OPTIONS).unwrap()
        );
        assert_eq!(
            r#"{"duration":200,"dist":-30,"shift":0,"padding":20}"#,
            to_string(&CAROUSEL_OPTIONS).unwrap()
        );
    }

    #[wasm_bindgen_test]
    fn should_write_datepicker_labels() {
        let options = to_string(&DATEPICKER_OPTIONS).unwrap();

        assert!(options.starts_with(
            r#"{"format":"dd/mm/yyyy","autoClose":true,"showClearBtn":true,"firstDay":1,"i18n":{"cancel":"Cancel""#
        ));
        assert!(options.contains(r#""weekdaysAbbrev":["S","M","T","W","T","F","S"]"#));
    }
}
