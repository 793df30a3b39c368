use crate::Result;
use crate::error::Error;
use crate::json::from_js_value;
use crate::utils::get_window;
use confirmation::PageConfig;
use wasm_bindgen::JsValue;

const GLOBALS_KEY: &str = "GLOBALS";

/// Read the configuration the server rendered into `window.GLOBALS`.
/// A page without it gets the default endpoints and an empty CSRF token.
pub fn read_page_config() -> Result<PageConfig> {
    let window = get_window()?;
    let globals = js_sys::Reflect::get(&window, &JsValue::from_str(GLOBALS_KEY))?;
    if globals.is_undefined() || globals.is_null() {
        warn!("`window.{GLOBALS_KEY}` is not defined, using default configuration");
        return Ok(PageConfig::default());
    }

    let config: PageConfig = from_js_value(&globals)
        .map_err(|error| Error::from_parent("Can't read the page configuration.", error))?;
    if config.csrf_token().is_empty() {
        warn!("No CSRF token in `window.{GLOBALS_KEY}`");
    }
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use confirmation::Endpoints;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn set_globals(value: &JsValue) {
        js_sys::Reflect::set(&get_window().unwrap(), &JsValue::from_str(GLOBALS_KEY), value)
            .unwrap();
    }

    #[wasm_bindgen_test]
    fn should_read_globals() {
        let globals = js_sys::JSON::parse(
            r#"{"csrfToken": "token", "urls": {"changeEmail": "/profile/email/"}}"#,
        )
        .unwrap();
        set_globals(&globals);

        let config = read_page_config().unwrap();
        set_globals(&JsValue::UNDEFINED);

        assert_eq!("token", config.csrf_token().as_str());
        assert_eq!("/profile/email/", config.urls().change_email().as_str());
        assert_eq!(
            Endpoints::default().delete_account(),
            config.urls().delete_account()
        );
    }

    #[wasm_bindgen_test]
    fn should_use_defaults_without_globals() {
        set_globals(&JsValue::UNDEFINED);

        let config = read_page_config().unwrap();

        assert_eq!(PageConfig::default(), config);
    }
}
