use crate::descriptor::{
    ADMIN_PASSWORD_RESET, ADMIN_SAVE_USER, ADMIN_TOGGLE_USER_STATE, CANCEL_SUBSCRIPTION,
    CHANGE_EMAIL, DELETE_ACCOUNT, DELETE_ADDRESS, DELETE_BOX, DELETE_PRODUCT,
    DELETE_SINGLE_PRODUCT, Descriptor, ORPHANED_BULK_DELETE,
};
use crate::error::ConfirmationError;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// Every action that can be confirmed with a password.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ActionKind {
    DeleteAccount,
    DeleteAddress,
    CancelSubscription,
    ChangeEmail,
    DeleteBox,
    DeleteProduct,
    DeleteSingleProduct,
    AdminPasswordReset,
    AdminToggleUserState,
    AdminSaveUser,
    OrphanedBulkDelete,
}

impl ActionKind {
    pub const ALL: [ActionKind; 11] = [
        ActionKind::DeleteAccount,
        ActionKind::DeleteAddress,
        ActionKind::CancelSubscription,
        ActionKind::ChangeEmail,
        ActionKind::DeleteBox,
        ActionKind::DeleteProduct,
        ActionKind::DeleteSingleProduct,
        ActionKind::AdminPasswordReset,
        ActionKind::AdminToggleUserState,
        ActionKind::AdminSaveUser,
        ActionKind::OrphanedBulkDelete,
    ];

    /// Tag used by the page to name the action (e.g. in `data-action` attributes).
    pub fn tag(&self) -> &'static str {
        match self {
            ActionKind::DeleteAccount => "delete_account",
            ActionKind::DeleteAddress => "delete_address",
            ActionKind::CancelSubscription => "cancel_subscription",
            ActionKind::ChangeEmail => "change_email",
            ActionKind::DeleteBox => "delete_box",
            ActionKind::DeleteProduct => "delete_product",
            ActionKind::DeleteSingleProduct => "delete_single_product",
            ActionKind::AdminPasswordReset => "admin_password_reset",
            ActionKind::AdminToggleUserState => "admin_toggle_user_state",
            ActionKind::AdminSaveUser => "admin_save_user",
            ActionKind::OrphanedBulkDelete => "orphaned_bulk_delete",
        }
    }

    pub fn descriptor(&self) -> &'static Descriptor {
        match self {
            ActionKind::DeleteAccount => &DELETE_ACCOUNT,
            ActionKind::DeleteAddress => &DELETE_ADDRESS,
            ActionKind::CancelSubscription => &CANCEL_SUBSCRIPTION,
            ActionKind::ChangeEmail => &CHANGE_EMAIL,
            ActionKind::DeleteBox => &DELETE_BOX,
            ActionKind::DeleteProduct => &DELETE_PRODUCT,
            ActionKind::DeleteSingleProduct => &DELETE_SINGLE_PRODUCT,
            ActionKind::AdminPasswordReset => &ADMIN_PASSWORD_RESET,
            ActionKind::AdminToggleUserState => &ADMIN_TOGGLE_USER_STATE,
            ActionKind::AdminSaveUser => &ADMIN_SAVE_USER,
            ActionKind::OrphanedBulkDelete => &ORPHANED_BULK_DELETE,
        }
    }
}

impl FromStr for ActionKind {
    type Err = ConfirmationError;

    fn from_str(tag: &str) -> Result<Self, Self::Err> {
        ActionKind::ALL
            .into_iter()
            .find(|kind| kind.tag() == tag)
            .ok_or_else(|| ConfirmationError::UnknownAction(tag.to_owned()))
    }
}

impl Display for ActionKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.tag())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use parameterized::{ide, parameterized};

    ide!();

    #[test]
    fn should_parse_every_tag_back() {
        for kind in ActionKind::ALL {
            assert_eq!(Ok(kind), kind.tag().parse::<ActionKind>());
        }
    }

    #[parameterized(tag = {"", "Delete_Account", "delete account", "drop_database"})]
    fn should_fail_to_parse_unknown_tag(tag: &str) {
        let error = tag.parse::<ActionKind>().unwrap_err();
        assert_eq!(ConfirmationError::UnknownAction(tag.to_owned()), error);
    }
}
