use super::{
    ADDRESS_NOT_FOUND_MESSAGE, BULK_DELETE_ACTION, ConfirmationDialog, EMPTY_EMAIL_MESSAGE,
    GIFT_ADDRESS_WARNING, NO_PRODUCT_SELECTED_MESSAGE, ONLY_PERSONAL_ADDRESS_WARNING,
    PERSONAL_ADDRESS_WARNING, UNCHANGED_EMAIL_MESSAGE, UNIDENTIFIED_SUBSCRIPTION_MESSAGE,
};
use crate::action::ActionKind;
use crate::context::{ActionContext, RequestedAction};
use crate::page::{AddressKind, ConfirmationPage};
use crate::transport::Transport;

impl<T: Transport> ConfirmationDialog<T> {
    /// Open the dialog for the action named by `tag`.
    ///
    /// An unknown tag still opens a generic dialog; submitting it will be refused.
    /// Returns `None` when the dialog could not be opened.
    pub fn open<P: ConfirmationPage>(
        &self,
        page: &mut P,
        tag: &str,
        target_id: Option<&str>,
    ) -> Option<ActionContext> {
        let action = RequestedAction::parse(tag);
        if let RequestedAction::Unrecognized(tag) = &action {
            warn!("Opening generic confirmation for unknown action [tag: {tag}]");
        }
        self.open_requested(page, action, target_id)
    }

    pub fn open_action<P: ConfirmationPage>(
        &self,
        page: &mut P,
        kind: ActionKind,
        target_id: Option<&str>,
    ) -> Option<ActionContext> {
        self.open_requested(page, kind.into(), target_id)
    }

    fn open_requested<P: ConfirmationPage>(
        &self,
        page: &mut P,
        action: RequestedAction,
        target_id: Option<&str>,
    ) -> Option<ActionContext> {
        page.clear_password();
        page.set_error("");
        page.set_warning("");

        let dialog_text = action.dialog_text();
        page.set_title(dialog_text.title);
        page.set_message(dialog_text.message);

        if action.kind() == Some(ActionKind::DeleteAddress) {
            let address_kind = target_id.and_then(|address_id| page.address_kind(address_id));
            let Some(address_kind) = address_kind else {
                error!("Address card not found [id: {target_id:?}]");
                page.notify(ADDRESS_NOT_FOUND_MESSAGE);
                self.close(page);
                return None;
            };
            describe_address_deletion(page, address_kind);
        }

        debug!(
            "Opening confirmation [action: {}, target: {target_id:?}]",
            action.tag()
        );
        page.show_dialog();
        Some(ActionContext::new(action, target_id.map(str::to_owned)))
    }

    /// Open the email change confirmation if the email field holds a new, non-empty address.
    pub fn open_change_email<P: ConfirmationPage>(&self, page: &mut P) -> Option<ActionContext> {
        let Some(email_field) = page.email_field() else {
            error!("Email field not found");
            page.notify(EMPTY_EMAIL_MESSAGE);
            return None;
        };

        let original_email = self
            .original_email
            .get_or_init(|| email_field.default_value().trim().to_owned());
        let new_email = email_field.value().trim();

        if new_email.is_empty() {
            page.notify(EMPTY_EMAIL_MESSAGE);
            return None;
        }
        if new_email == original_email.as_str() {
            page.notify(UNCHANGED_EMAIL_MESSAGE);
            return None;
        }

        let new_email = new_email.to_owned();
        self.open_action(page, ActionKind::ChangeEmail, None)
            .map(|context| context.with_new_email(new_email))
    }

    pub fn open_cancel_subscription<P: ConfirmationPage>(
        &self,
        page: &mut P,
        subscription_id: Option<&str>,
    ) -> Option<ActionContext> {
        match subscription_id.filter(|id| !id.trim().is_empty()) {
            Some(subscription_id) => {
                self.open_action(page, ActionKind::CancelSubscription, Some(subscription_id))
            }
            None => {
                page.notify(UNIDENTIFIED_SUBSCRIPTION_MESSAGE);
                None
            }
        }
    }

    /// Products listed in the orphaned products form are deleted through the bulk endpoint.
    pub fn open_product_deletion<P: ConfirmationPage>(
        &self,
        page: &mut P,
        product_id: Option<&str>,
        orphaned: bool,
    ) -> Option<ActionContext> {
        let kind = if orphaned {
            ActionKind::DeleteSingleProduct
        } else {
            ActionKind::DeleteProduct
        };
        self.open_action(page, kind, product_id)
    }

    pub fn open_bulk_delete<P: ConfirmationPage>(&self, page: &mut P) -> Option<ActionContext> {
        if page.selected_product_count() == 0 {
            page.notify(NO_PRODUCT_SELECTED_MESSAGE);
            return None;
        }

        page.set_bulk_action(BULK_DELETE_ACTION);
        self.open_action(page, ActionKind::OrphanedBulkDelete, None)
    }

    pub fn close<P: ConfirmationPage>(&self, page: &mut P) {
        page.hide_dialog();
    }
}

fn describe_address_deletion<P: ConfirmationPage>(page: &mut P, address_kind: AddressKind) {
    page.set_message(&format!(
        "Please enter your password to delete this {} address.",
        address_kind.label()
    ));

    let warning = match address_kind {
        AddressKind::Gift => GIFT_ADDRESS_WARNING,
        AddressKind::Personal if page.personal_address_count() == 1 => {
            ONLY_PERSONAL_ADDRESS_WARNING
        }
        AddressKind::Personal => PERSONAL_ADDRESS_WARNING,
    };
    page.set_warning(warning);
}
