use crate::Result;
use serde::{Serialize, de};
use wasm_bindgen::JsValue;

pub fn to_string<T>(value: &T) -> Result<String>
where
    T: Serialize + ?Sized,
{
    Ok(serde_json_wasm::to_string(value)?)
}

pub fn from_str<T>(s: &str) -> Result<T>
where
    T: de::DeserializeOwned,
{
    Ok(serde_json_wasm::from_str(s)?)
}

/// Build a plain JS object, e.g. options for a widget.
pub fn to_js_value<T>(value: &T) -> Result<JsValue>
where
    T: Serialize + ?Sized,
{
    Ok(js_sys::JSON::parse(&to_string(value)?)?)
}

pub fn from_js_value<T>(value: &JsValue) -> Result<T>
where
    T: de::DeserializeOwned,
{
    let text = String::from(js_sys::JSON::stringify(value)?);
    from_str(&text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use dto::action_response::ActionResponse;
    use dto::confirmation_payload::ConfirmationPayload;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn should_read_response_with_extra_fields() {
        let response: ActionResponse =
            from_str(r#"{"success": false, "error": "Incorrect password", "code": 401}"#).unwrap();

        assert_eq!(ActionResponse::failed("Incorrect password"), response);
    }

    #[wasm_bindgen_test]
    fn should_fail_to_read_html() {
        let result = from_str::<ActionResponse>("<html>Server Error</html>");

        assert!(result.is_err());
    }

    #[wasm_bindgen_test]
    fn should_write_payload() {
        let payload = ConfirmationPayload::new("secret".to_owned())
            .with_subscription_id("sub_1".to_owned());

        let body = to_string(&payload).unwrap();

        assert_eq!(r#"{"password":"secret","subscription_id":"sub_1"}"#, body);
    }
}
