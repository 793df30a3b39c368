use crate::Result;
use crate::page::{CONFIRM_BUTTON_ID, DomPage, PASSWORD_ID, is_in_orphaned_form};
use crate::utils::{add_event_listener, query_selector_all};
use crate::web::FetchTransport;
use confirmation::{
    ActionContext, ActionKind, ConfirmationDialog, ConfirmationPage, PageConfig, SubmissionOutcome,
};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::{Document, Element, KeyboardEvent};

const CANCEL_BUTTON_ID: &str = "modal-cancel-btn";

/// Owns the dialog and the context of the action being confirmed.
pub struct Controller {
    document: Document,
    dialog: ConfirmationDialog<FetchTransport>,
    context: RefCell<Option<ActionContext>>,
}

impl Controller {
    pub fn new(document: Document, config: PageConfig) -> Self {
        Self {
            document,
            dialog: ConfirmationDialog::new(config, FetchTransport),
            context: RefCell::new(None),
        }
    }

    fn page(&self) -> DomPage {
        DomPage::new(self.document.clone())
    }

    /// Keep the context of a dialog that has actually been opened.
    fn remember(&self, context: Option<ActionContext>) {
        if let Some(context) = context {
            debug!("Confirmation dialog opened [action: {}]", context.action().tag());
            self.context.replace(Some(context));
        }
    }

    pub fn open(&self, kind: ActionKind, target_id: Option<String>) {
        let context = self
            .dialog
            .open_action(&mut self.page(), kind, target_id.as_deref());
        self.remember(context);
    }

    pub fn open_product_deletion(&self, button: &Element) {
        let context = self.dialog.open_product_deletion(
            &mut self.page(),
            data_id(button).as_deref(),
            is_in_orphaned_form(button),
        );
        self.remember(context);
    }

    pub fn open_cancel_subscription(&self, subscription_id: Option<String>) {
        let context = self
            .dialog
            .open_cancel_subscription(&mut self.page(), subscription_id.as_deref());
        self.remember(context);
    }

    pub fn open_bulk_delete(&self) {
        let context = self.dialog.open_bulk_delete(&mut self.page());
        self.remember(context);
    }

    pub fn open_change_email(&self) {
        let context = self.dialog.open_change_email(&mut self.page());
        self.remember(context);
    }

    pub fn set_orphaned_action(&self, action: &str) {
        self.page().set_bulk_action(action);
    }

    pub fn close(&self) {
        self.dialog.close(&mut self.page());
        self.context.replace(None);
    }

    pub async fn submit(&self) {
        let Some(context) = self.context.borrow().clone() else {
            warn!("Confirmation submitted without any opened action");
            return;
        };

        let outcome = self.dialog.submit(&mut self.page(), &context).await;
        match &outcome {
            SubmissionOutcome::Completed(_) => {
                info!("Action confirmed [action: {}]", context.action().tag())
            }
            SubmissionOutcome::AlreadySubmitting => {
                debug!("Confirmation ignored, a request is in flight")
            }
            _ => debug!("Action not confirmed [outcome: {outcome:?}]"),
        }
    }
}

fn data_id(element: &Element) -> Option<String> {
    element.get_attribute("data-id")
}

type Handler = fn(&Rc<Controller>, &Element);

/// Call `handler` when any element matching `selector` is clicked.
fn on_click_all(
    document: &Document,
    selector: &str,
    controller: &Rc<Controller>,
    handler: Handler,
) -> Result<()> {
    for element in query_selector_all(document, selector)? {
        on_click(&element, controller, handler)?;
    }
    Ok(())
}

/// Pages without the element simply don't get the binding.
fn on_click_id(
    document: &Document,
    id: &str,
    controller: &Rc<Controller>,
    handler: Handler,
) -> Result<()> {
    match document.get_element_by_id(id) {
        None => Ok(()),
        Some(element) => on_click(&element, controller, handler),
    }
}

fn on_click(element: &Element, controller: &Rc<Controller>, handler: Handler) -> Result<()> {
    let controller = controller.clone();
    let clicked = element.clone();
    add_event_listener(element, "click", move |_| handler(&controller, &clicked))
}

fn submit(controller: &Rc<Controller>) {
    let controller = controller.clone();
    spawn_local(async move {
        controller.submit().await;
    });
}

/// Wire every trigger of the page to the controller.
pub fn init_bindings(document: &Document, controller: &Rc<Controller>) -> Result<()> {
    on_click_all(document, ".delete-address-btn", controller, |controller, button| {
        controller.open(ActionKind::DeleteAddress, data_id(button))
    })?;
    on_click_id(document, "delete-account-btn", controller, |controller, _| {
        controller.open(ActionKind::DeleteAccount, None)
    })?;
    on_click_all(document, ".cancel-subscription-btn", controller, |controller, button| {
        controller.open_cancel_subscription(button.get_attribute("data-subscription-id"))
    })?;
    on_click_all(document, ".delete-box-btn", controller, |controller, button| {
        controller.open(ActionKind::DeleteBox, data_id(button))
    })?;
    on_click_all(document, ".delete-product-btn", controller, |controller, button| {
        controller.open_product_deletion(button)
    })?;
    on_click_all(document, ".admin-toggle-state-btn", controller, |controller, button| {
        controller.open(ActionKind::AdminToggleUserState, data_id(button))
    })?;
    on_click_all(document, ".admin-update-user-btn", controller, |controller, button| {
        controller.open(ActionKind::AdminSaveUser, data_id(button))
    })?;
    on_click_all(document, ".admin-password-reset-btn", controller, |controller, button| {
        controller.open(ActionKind::AdminPasswordReset, data_id(button))
    })?;
    on_click_all(document, ".orphan-action-btn", controller, |controller, button| {
        if let Some(action) = button.get_attribute("data-action") {
            controller.set_orphaned_action(&action);
        }
    })?;
    on_click_id(document, "orphaned-bulk-delete-btn", controller, |controller, _| {
        controller.open_bulk_delete()
    })?;
    on_click_id(document, "change-email-btn", controller, |controller, _| {
        controller.open_change_email()
    })?;
    on_click_id(document, CANCEL_BUTTON_ID, controller, |controller, _| {
        controller.close()
    })?;
    on_click_id(document, CONFIRM_BUTTON_ID, controller, |controller, _| {
        submit(controller)
    })?;
    add_enter_listener_on_password(document, controller)
}

/// Enter in the password field confirms instead of submitting the form.
fn add_enter_listener_on_password(document: &Document, controller: &Rc<Controller>) -> Result<()> {
    let Some(input) = document.get_element_by_id(PASSWORD_ID) else {
        return Ok(());
    };
    let controller = controller.clone();
    add_event_listener(&input, "keydown", move |event| {
        if event
            .dyn_ref::<KeyboardEvent>()
            .is_some_and(|event| event.key() == "Enter")
        {
            event.prevent_default();
            submit(&controller);
        }
    })
}
