use crate::Result;
use crate::component::materialize::Modal;
use crate::component::toast::show_toast;
use crate::error::Error;
use crate::utils::{
    get_element_by_id, get_element_by_id_dyn, get_window, log_on_error, query_selector_all,
    set_style,
};
use confirmation::{AddressKind, ConfirmationPage, EmailField, Navigation};
use dto::admin_user_update::AdminUserUpdate;
use wasm_bindgen::JsCast;
use web_sys::{
    Document, Element, FormData, HtmlButtonElement, HtmlFormElement, HtmlInputElement,
};

pub const MODAL_ID: &str = "confirmation-modal";
const TITLE_ID: &str = "modal-title";
const MESSAGE_ID: &str = "modal-message";
const WARNING_ID: &str = "delete-warning";
pub const PASSWORD_FORM_ID: &str = "modal-password-form";
pub const PASSWORD_ID: &str = "modal-password";
const ERROR_ID: &str = "modal-error";
pub const CONFIRM_BUTTON_ID: &str = "modal-confirm-btn";
const EMAIL_INPUT_ID: &str = "id_email";
const USERNAME_INPUT_ID: &str = "username";
const ADMIN_EMAIL_INPUT_ID: &str = "email";
const STAFF_CHECKBOX_SELECTOR: &str = r#"input[name="is_staff"]"#;
pub const ORPHANED_FORM_ID: &str = "orphaned-products-form";
const ORPHANED_ACTION_ID: &str = "orphaned-action";
const SELECTED_PRODUCTS_SELECTOR: &str = r#"input[name="product_ids"]:checked"#;
const PERSONAL_ADDRESS_SELECTOR: &str = ".personal-address";
const ADDRESS_CARD_SELECTOR: &str = ".address-card";
const GIFT_ADDRESS_CLASS: &str = "gift-address";

/// The confirmation dialog and the forms around it, as rendered by the server.
///
/// Missing elements are logged and the operation is skipped, so a partial page
/// degrades instead of breaking every other binding.
pub struct DomPage {
    document: Document,
}

impl DomPage {
    pub fn new(document: Document) -> Self {
        Self { document }
    }

    fn element(&self, id: &str) -> Result<Element> {
        get_element_by_id(&self.document, id)
    }

    fn input(&self, id: &str) -> Result<HtmlInputElement> {
        get_element_by_id_dyn::<HtmlInputElement>(&self.document, id)
    }

    fn set_text(&self, id: &str, text: &str) {
        if let Some(element) = log_on_error(self.element(id)) {
            element.set_text_content(Some(text));
        }
    }

    /// The dialog widget, initialized on first use if the page didn't do it.
    fn modal(&self) -> Result<Modal> {
        let element = self.element(MODAL_ID)?;
        match Modal::get_instance(&element)? {
            Some(modal) => Ok(modal),
            None => Ok(Modal::init(&element)?),
        }
    }

    fn set_password_form_visible(&self, visible: bool) -> Result<()> {
        let form = self.element(PASSWORD_FORM_ID)?;
        set_style(&form, "display", if visible { "block" } else { "none" })
    }

    fn read_address_kind(&self, address_id: &str) -> Result<Option<AddressKind>> {
        let selector = format!(r#"button[data-id="{address_id}"]"#);
        let card = match self.document.query_selector(&selector)? {
            None => return Ok(None),
            Some(button) => button.closest(ADDRESS_CARD_SELECTOR)?,
        };
        Ok(card.map(|card| {
            if card.class_list().contains(GIFT_ADDRESS_CLASS) {
                AddressKind::Gift
            } else {
                AddressKind::Personal
            }
        }))
    }

    fn read_admin_user_fields(&self) -> Result<AdminUserUpdate> {
        let username = self.input(USERNAME_INPUT_ID)?.value();
        let email = self.input(ADMIN_EMAIL_INPUT_ID)?.value();
        let is_staff = self
            .document
            .query_selector(STAFF_CHECKBOX_SELECTOR)?
            .ok_or_else(|| Error::technical("`is_staff` checkbox does not exist"))?
            .dyn_into::<HtmlInputElement>()?
            .checked();
        Ok(AdminUserUpdate::new(username, email, is_staff))
    }

    fn read_bulk_selection_fields(&self) -> Result<Vec<(String, String)>> {
        let form = get_element_by_id_dyn::<HtmlFormElement>(&self.document, ORPHANED_FORM_ID)?;
        let form_data = FormData::new_with_form(&form)?;
        let entries = js_sys::try_iter(&form_data)?
            .ok_or_else(|| Error::technical("form data is not iterable"))?;

        let mut fields = vec![];
        for entry in entries {
            let entry = js_sys::Array::from(&entry?);
            // Files have no place in this form: only text values are kept.
            if let (Some(name), Some(value)) = (entry.get(0).as_string(), entry.get(1).as_string())
            {
                fields.push((name, value));
            }
        }
        Ok(fields)
    }

    fn do_navigate(&self, navigation: Navigation) -> Result<()> {
        let location = get_window()?.location();
        match navigation {
            Navigation::Root => location.set_href(Navigation::ROOT_PATH)?,
            Navigation::Reload => location.reload()?,
        }
        Ok(())
    }
}

impl ConfirmationPage for DomPage {
    fn set_title(&mut self, title: &str) {
        self.set_text(TITLE_ID, title);
    }

    fn set_message(&mut self, message: &str) {
        self.set_text(MESSAGE_ID, message);
    }

    fn set_warning(&mut self, warning: &str) {
        // Only the address list renders a warning slot.
        if let Some(element) = self.document.get_element_by_id(WARNING_ID) {
            element.set_text_content(Some(warning));
        }
    }

    fn set_error(&mut self, error: &str) {
        self.set_text(ERROR_ID, error);
    }

    fn clear_password(&mut self) {
        if let Some(input) = log_on_error(self.input(PASSWORD_ID)) {
            input.set_value("");
        }
    }

    fn password(&self) -> String {
        log_on_error(self.input(PASSWORD_ID))
            .map(|input| input.value())
            .unwrap_or_default()
    }

    fn show_dialog(&mut self) {
        log_on_error(self.set_password_form_visible(true));
        if let Some(modal) = log_on_error(self.modal()) {
            modal.open();
        }
    }

    fn hide_dialog(&mut self) {
        log_on_error(self.set_password_form_visible(false));
        if let Some(modal) = log_on_error(self.modal()) {
            modal.close();
        }
    }

    fn notify(&mut self, message: &str) {
        log_on_error(show_toast(message));
    }

    fn set_submitting(&mut self, submitting: bool) {
        let button = get_element_by_id_dyn::<HtmlButtonElement>(&self.document, CONFIRM_BUTTON_ID);
        if let Some(button) = log_on_error(button) {
            button.set_disabled(submitting);
        }
    }

    fn navigate(&mut self, navigation: Navigation) {
        log_on_error(self.do_navigate(navigation));
    }

    fn address_kind(&self, address_id: &str) -> Option<AddressKind> {
        log_on_error(self.read_address_kind(address_id)).flatten()
    }

    fn personal_address_count(&self) -> usize {
        log_on_error(query_selector_all(&self.document, PERSONAL_ADDRESS_SELECTOR))
            .map(|addresses| addresses.len())
            .unwrap_or_default()
    }

    fn email_field(&self) -> Option<EmailField> {
        self.document
            .get_element_by_id(EMAIL_INPUT_ID)
            .and_then(|element| element.dyn_into::<HtmlInputElement>().ok())
            .map(|input| EmailField::new(input.value(), input.default_value()))
    }

    fn admin_user_fields(&self) -> Option<AdminUserUpdate> {
        log_on_error(self.read_admin_user_fields())
    }

    fn selected_product_count(&self) -> usize {
        log_on_error(query_selector_all(&self.document, SELECTED_PRODUCTS_SELECTOR))
            .map(|products| products.len())
            .unwrap_or_default()
    }

    fn set_bulk_action(&mut self, action: &str) {
        if let Some(input) = log_on_error(self.input(ORPHANED_ACTION_ID)) {
            input.set_value(action);
        }
    }

    fn bulk_selection_fields(&self) -> Vec<(String, String)> {
        log_on_error(self.read_bulk_selection_fields()).unwrap_or_default()
    }
}

/// Whether `element` belongs to the orphaned products form.
pub fn is_in_orphaned_form(element: &Element) -> bool {
    log_on_error(query_closest_form(element))
        .flatten()
        .is_some_and(|form| form.id() == ORPHANED_FORM_ID)
}

fn query_closest_form(element: &Element) -> Result<Option<Element>> {
    Ok(element.closest("form")?)
}
