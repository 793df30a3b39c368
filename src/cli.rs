use confirmation::{ActionContext, ActionKind, ConfirmationDialog, ConfirmationPage, Transport};

/// Open the dialog the same way the matching button of the web page would.
pub fn open_dialog<T: Transport, P: ConfirmationPage>(
    dialog: &ConfirmationDialog<T>,
    page: &mut P,
    tag: &str,
    target_id: Option<&str>,
) -> Option<ActionContext> {
    match tag.parse::<ActionKind>() {
        Ok(ActionKind::ChangeEmail) => dialog.open_change_email(page),
        Ok(ActionKind::CancelSubscription) => dialog.open_cancel_subscription(page, target_id),
        Ok(ActionKind::OrphanedBulkDelete) => dialog.open_bulk_delete(page),
        _ => dialog.open(page, tag, target_id),
    }
}
