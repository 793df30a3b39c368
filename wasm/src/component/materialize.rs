//! Bindings to the Materialize widgets loaded by the page (`window.M`).
//! Every call throws when Materialize is missing: they are all caught.

use wasm_bindgen::JsValue;
use wasm_bindgen::prelude::wasm_bindgen;
use web_sys::{Element, NodeList};

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = M, js_name = Modal)]
    pub type Modal;

    #[wasm_bindgen(catch, static_method_of = Modal, js_namespace = M, js_name = getInstance)]
    pub fn get_instance(element: &Element) -> Result<Option<Modal>, JsValue>;

    #[wasm_bindgen(catch, static_method_of = Modal, js_namespace = M, js_name = init)]
    pub fn init(element: &Element) -> Result<Modal, JsValue>;

    #[wasm_bindgen(method)]
    pub fn open(this: &Modal);

    #[wasm_bindgen(method)]
    pub fn close(this: &Modal);
}

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(catch, js_namespace = ["M", "Modal"], js_name = init)]
    pub fn init_modals(elements: &NodeList) -> Result<JsValue, JsValue>;

    #[wasm_bindgen(catch, js_namespace = ["M", "Sidenav"], js_name = init)]
    pub fn init_sidenavs(elements: &NodeList, options: &JsValue) -> Result<JsValue, JsValue>;

    #[wasm_bindgen(catch, js_namespace = ["M", "Carousel"], js_name = init)]
    pub fn init_carousels(elements: &NodeList, options: &JsValue) -> Result<JsValue, JsValue>;

    #[wasm_bindgen(catch, js_namespace = ["M", "Dropdown"], js_name = init)]
    pub fn init_dropdowns(elements: &NodeList, options: &JsValue) -> Result<JsValue, JsValue>;

    #[wasm_bindgen(catch, js_namespace = ["M", "FormSelect"], js_name = init)]
    pub fn init_form_selects(elements: &NodeList) -> Result<JsValue, JsValue>;

    #[wasm_bindgen(catch, js_namespace = ["M", "Datepicker"], js_name = init)]
    pub fn init_datepickers(elements: &NodeList, options: &JsValue) -> Result<JsValue, JsValue>;

    #[wasm_bindgen(catch, js_namespace = M, js_name = updateTextFields)]
    pub fn update_text_fields() -> Result<(), JsValue>;

    #[wasm_bindgen(catch, js_namespace = M, js_name = textareaAutoResize)]
    pub fn textarea_auto_resize(element: &Element) -> Result<(), JsValue>;

    #[wasm_bindgen(catch, js_namespace = M, js_name = toast)]
    pub fn toast(options: &JsValue) -> Result<JsValue, JsValue>;
}
