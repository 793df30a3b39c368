use crate::error::ApplicationError::{CantReadPassword, InvalidArgument};
use crate::error::Result;
use crate::options::ID_ARG;
use crate::tools::env_args::{is_flag_set, retrieve_arg_value, retrieve_arg_values};
use crate::tools::log_message_and_return;
use confirmation::{AddressKind, ConfirmationPage, EmailField, Navigation};
use dto::admin_user_update::AdminUserUpdate;

/// Meant for tests and scripts: the command line is visible to other processes.
const PASSWORD_ARG: &str = "--password";
const PASSWORD_PROMPT: &str = "Password: ";
const ADDRESS_KIND_ARG: &str = "--address-kind";
const PERSONAL_ADDRESSES_ARG: &str = "--personal-addresses";
const NEW_EMAIL_ARG: &str = "--new-email";
const CURRENT_EMAIL_ARG: &str = "--current-email";
const USERNAME_ARG: &str = "--username";
const EMAIL_ARG: &str = "--email";
const STAFF_ARG: &str = "--staff";
const PRODUCT_ID_ARG: &str = "--product-id";

const BULK_ACTION_FIELD: &str = "action";
const PRODUCT_IDS_FIELD: &str = "product_ids";

/// A page living in the terminal: dialog text goes to stdout,
/// form values come from the command line.
#[derive(Debug, Default)]
pub struct TerminalPage {
    password: String,
    target_id: Option<String>,
    address_kind: Option<AddressKind>,
    personal_addresses: usize,
    email: Option<EmailField>,
    admin_user: Option<AdminUserUpdate>,
    product_ids: Vec<String>,
    bulk_action: Option<String>,
    error: String,
    dialog_open: bool,
    navigation: Option<Navigation>,
}

impl TerminalPage {
    pub fn from_args() -> Result<Self> {
        let address_kind = match retrieve_arg_value(ADDRESS_KIND_ARG).as_deref() {
            None | Some("personal") => Some(AddressKind::Personal),
            Some("gift") => Some(AddressKind::Gift),
            Some(other) => return Err(InvalidArgument(ADDRESS_KIND_ARG, other.to_owned())),
        };
        let personal_addresses = match retrieve_arg_value(PERSONAL_ADDRESSES_ARG) {
            None => 0,
            Some(count) => count
                .parse()
                .map_err(|_| InvalidArgument(PERSONAL_ADDRESSES_ARG, count))?,
        };
        let email = retrieve_arg_value(NEW_EMAIL_ARG).map(|new_email| {
            EmailField::new(
                new_email,
                retrieve_arg_value(CURRENT_EMAIL_ARG).unwrap_or_default(),
            )
        });
        let admin_user = match (
            retrieve_arg_value(USERNAME_ARG),
            retrieve_arg_value(EMAIL_ARG),
        ) {
            (Some(username), Some(email)) => Some(AdminUserUpdate::new(
                username,
                email,
                is_flag_set(STAFF_ARG),
            )),
            _ => None,
        };

        let password = retrieve_arg_value(PASSWORD_ARG).unwrap_or_default();
        if !password.is_empty() {
            warn!("Password given with `{PASSWORD_ARG}`, other users of this machine may read it");
        }

        Ok(Self {
            password,
            target_id: retrieve_arg_value(ID_ARG),
            address_kind,
            personal_addresses,
            email,
            admin_user,
            product_ids: retrieve_arg_values(PRODUCT_ID_ARG),
            ..Self::default()
        })
    }

    /// Ask for the password without echoing it, unless it has been passed as an arg.
    pub fn prompt_password(&mut self) -> Result<()> {
        self.fill_password(|| rpassword::prompt_password(PASSWORD_PROMPT))
    }

    fn fill_password<F>(&mut self, read_password: F) -> Result<()>
    where
        F: FnOnce() -> std::io::Result<String>,
    {
        if !self.password.is_empty() {
            return Ok(());
        }

        self.password = read_password()
            .map_err(log_message_and_return("Can't read password", CantReadPassword))?;
        Ok(())
    }

    #[cfg(test)]
    pub fn error(&self) -> &str {
        &self.error
    }

    #[cfg(test)]
    pub fn navigation(&self) -> Option<Navigation> {
        self.navigation
    }

    #[cfg(test)]
    pub fn is_dialog_open(&self) -> bool {
        self.dialog_open
    }
}

impl ConfirmationPage for TerminalPage {
    fn set_title(&mut self, title: &str) {
        println!("== {title} ==");
    }

    fn set_message(&mut self, message: &str) {
        println!("{message}");
    }

    fn set_warning(&mut self, warning: &str) {
        if !warning.is_empty() {
            println!("/!\\ {warning}");
        }
    }

    fn set_error(&mut self, error: &str) {
        if !error.is_empty() {
            eprintln!("{error}");
        }
        self.error = error.to_owned();
    }

    fn clear_password(&mut self) {
        // The password comes from the command line and is typed once.
    }

    fn password(&self) -> String {
        self.password.clone()
    }

    fn show_dialog(&mut self) {
        self.dialog_open = true;
    }

    fn hide_dialog(&mut self) {
        self.dialog_open = false;
    }

    fn notify(&mut self, message: &str) {
        eprintln!("{message}");
    }

    fn set_submitting(&mut self, submitting: bool) {
        if submitting {
            println!("Sending...");
        }
    }

    fn navigate(&mut self, navigation: Navigation) {
        match navigation {
            Navigation::Root => println!("Done. Redirecting to {}", Navigation::ROOT_PATH),
            Navigation::Reload => println!("Done."),
        }
        self.navigation = Some(navigation);
    }

    fn address_kind(&self, address_id: &str) -> Option<AddressKind> {
        if self.target_id.as_deref() == Some(address_id) {
            self.address_kind
        } else {
            None
        }
    }

    fn personal_address_count(&self) -> usize {
        self.personal_addresses
    }

    fn email_field(&self) -> Option<EmailField> {
        self.email.clone()
    }

    fn admin_user_fields(&self) -> Option<AdminUserUpdate> {
        self.admin_user.clone()
    }

    fn selected_product_count(&self) -> usize {
        self.product_ids.len()
    }

    fn set_bulk_action(&mut self, action: &str) {
        self.bulk_action = Some(action.to_owned());
    }

    fn bulk_selection_fields(&self) -> Vec<(String, String)> {
        self.bulk_action
            .iter()
            .map(|action| (BULK_ACTION_FIELD.to_owned(), action.clone()))
            .chain(
                self.product_ids
                    .iter()
                    .map(|id| (PRODUCT_IDS_FIELD.to_owned(), id.clone())),
            )
            .collect()
    }
}
