use derive_getters::Getters;
use dto::admin_user_update::AdminUserUpdate;

/// Kind of the address card a deletion button belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddressKind {
    Personal,
    Gift,
}

impl AddressKind {
    pub fn label(&self) -> &'static str {
        match self {
            AddressKind::Personal => "personal",
            AddressKind::Gift => "gift",
        }
    }
}

/// Where the page goes once the server has accepted the action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Navigation {
    /// The site root, used once the user no longer has an account.
    Root,
    Reload,
}

impl Navigation {
    pub const ROOT_PATH: &'static str = "/";
}

/// The email edit field: what the user typed and what the server rendered.
#[derive(Debug, Clone, PartialEq, Eq, Getters)]
pub struct EmailField {
    value: String,
    default_value: String,
}

impl EmailField {
    pub fn new(value: String, default_value: String) -> Self {
        Self {
            value,
            default_value,
        }
    }
}

/// Everything the dialog reads from or renders to the page.
pub trait ConfirmationPage {
    fn set_title(&mut self, title: &str);
    fn set_message(&mut self, message: &str);
    /// An empty text hides the warning.
    fn set_warning(&mut self, warning: &str);
    /// Inline error of the dialog. An empty text clears it.
    fn set_error(&mut self, error: &str);
    fn clear_password(&mut self);
    fn password(&self) -> String;
    fn show_dialog(&mut self);
    fn hide_dialog(&mut self);
    /// Transient notification, displayed outside the dialog.
    fn notify(&mut self, message: &str);
    /// Disables the confirm control while a request is in flight.
    fn set_submitting(&mut self, submitting: bool);
    fn navigate(&mut self, navigation: Navigation);

    /// `None` when the address card can't be found.
    fn address_kind(&self, address_id: &str) -> Option<AddressKind>;
    fn personal_address_count(&self) -> usize;
    fn email_field(&self) -> Option<EmailField>;
    fn admin_user_fields(&self) -> Option<AdminUserUpdate>;
    fn selected_product_count(&self) -> usize;
    /// Writes the action the orphaned products form will perform.
    fn set_bulk_action(&mut self, action: &str);
    /// Current fields of the orphaned products form.
    fn bulk_selection_fields(&self) -> Vec<(String, String)>;
}
