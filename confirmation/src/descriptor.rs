//! Static description of every action: what the dialog says, where the request goes,
//! what it carries and what happens once the server agrees.

use crate::action::ActionKind;
use crate::config::Endpoints;
use crate::error::{ConfirmationError, Result};
use crate::page::Navigation;

#[derive(Debug, PartialEq, Eq)]
pub struct DialogText {
    pub title: &'static str,
    pub message: &'static str,
}

/// Shown when the page asks for an action this crate doesn't know.
pub const FALLBACK_DIALOG: DialogText = DialogText {
    title: "Confirm Action",
    message: "Please enter your password to proceed.",
};

/// URLs supplied by the page configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfiguredUrl {
    DeleteAccount,
    DeleteAddressBase,
    CancelSubscription,
    ChangeEmail,
    OrphanedBulkDelete,
}

#[derive(Debug, PartialEq, Eq)]
pub enum Endpoint {
    /// The configured URL, as is.
    Configured(ConfiguredUrl),
    /// The configured URL followed by the target id and a trailing slash.
    ConfiguredPrefix(ConfiguredUrl),
    /// A path where `{id}` is replaced by the target id.
    Template(&'static str),
}

const ID_PLACEHOLDER: &str = "{id}";

impl Endpoint {
    pub fn resolve(
        &self,
        kind: ActionKind,
        endpoints: &Endpoints,
        target_id: Option<&str>,
    ) -> Result<String> {
        match self {
            Endpoint::Configured(url) => Ok(endpoints.get(*url).to_owned()),
            Endpoint::ConfiguredPrefix(url) => {
                let target_id = require_target(kind, target_id)?;
                Ok(format!("{}{target_id}/", endpoints.get(*url)))
            }
            Endpoint::Template(template) => {
                let target_id = require_target(kind, target_id)?;
                Ok(template.replace(ID_PLACEHOLDER, target_id))
            }
        }
    }
}

fn require_target(kind: ActionKind, target_id: Option<&str>) -> Result<&str> {
    target_id
        .map(str::trim)
        .filter(|target_id| !target_id.is_empty())
        .ok_or(ConfirmationError::MissingTarget(kind))
}

/// Fields sent along with the password.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PayloadShape {
    PasswordOnly,
    SubscriptionId,
    NewEmail,
    AdminUser,
    /// Multipart: every field of the bulk selection form.
    BulkSelection,
    /// Multipart: the id of the single product to delete.
    SingleProduct,
}

#[derive(Debug, PartialEq, Eq)]
pub struct Descriptor {
    pub dialog: DialogText,
    pub endpoint: Endpoint,
    pub payload: PayloadShape,
    /// Displayed when the server refuses without saying why.
    pub failure_message: &'static str,
    pub on_success: Navigation,
}

const DEFAULT_FAILURE_MESSAGE: &str = "Failed to complete action.";

pub const DELETE_ACCOUNT: Descriptor = Descriptor {
    dialog: DialogText {
        title: "Confirm Account Deletion",
        message: "Please enter your password to permanently delete your account.",
    },
    endpoint: Endpoint::Configured(ConfiguredUrl::DeleteAccount),
    payload: PayloadShape::PasswordOnly,
    failure_message: DEFAULT_FAILURE_MESSAGE,
    on_success: Navigation::Root,
};

pub const DELETE_ADDRESS: Descriptor = Descriptor {
    dialog: DialogText {
        title: "Confirm Address Deletion",
        message: "Please enter your password to delete this address.",
    },
    endpoint: Endpoint::ConfiguredPrefix(ConfiguredUrl::DeleteAddressBase),
    payload: PayloadShape::PasswordOnly,
    failure_message: DEFAULT_FAILURE_MESSAGE,
    on_success: Navigation::Reload,
};

pub const CANCEL_SUBSCRIPTION: Descriptor = Descriptor {
    dialog: DialogText {
        title: "Cancel Subscription",
        message: "Please enter your password to cancel your subscription.",
    },
    endpoint: Endpoint::Configured(ConfiguredUrl::CancelSubscription),
    payload: PayloadShape::SubscriptionId,
    failure_message: DEFAULT_FAILURE_MESSAGE,
    on_success: Navigation::Reload,
};

pub const CHANGE_EMAIL: Descriptor = Descriptor {
    dialog: DialogText {
        title: "Confirm Email Change",
        message: "Please confirm your password to update your email address.",
    },
    endpoint: Endpoint::Configured(ConfiguredUrl::ChangeEmail),
    payload: PayloadShape::NewEmail,
    failure_message: DEFAULT_FAILURE_MESSAGE,
    on_success: Navigation::Reload,
};

pub const DELETE_BOX: Descriptor = Descriptor {
    dialog: FALLBACK_DIALOG,
    endpoint: Endpoint::Template("/dashboard/box_admin/{id}/delete/"),
    payload: PayloadShape::PasswordOnly,
    failure_message: DEFAULT_FAILURE_MESSAGE,
    on_success: Navigation::Reload,
};

pub const DELETE_PRODUCT: Descriptor = Descriptor {
    dialog: FALLBACK_DIALOG,
    endpoint: Endpoint::Template("/dashboard/products/{id}/delete/"),
    payload: PayloadShape::PasswordOnly,
    failure_message: DEFAULT_FAILURE_MESSAGE,
    on_success: Navigation::Reload,
};

pub const DELETE_SINGLE_PRODUCT: Descriptor = Descriptor {
    dialog: DialogText {
        title: "Confirm Product Deletion",
        message: "Please enter your password to delete this orphaned product.",
    },
    endpoint: Endpoint::Configured(ConfiguredUrl::OrphanedBulkDelete),
    payload: PayloadShape::SingleProduct,
    failure_message: "Failed to delete product.",
    on_success: Navigation::Reload,
};

pub const ADMIN_PASSWORD_RESET: Descriptor = Descriptor {
    dialog: DialogText {
        title: "Admin-Initiated Password Reset",
        message: "Are you sure you want to send a password reset email to this user?",
    },
    endpoint: Endpoint::Template("/dashboard/user_admin/password-reset/{id}/"),
    payload: PayloadShape::PasswordOnly,
    failure_message: DEFAULT_FAILURE_MESSAGE,
    on_success: Navigation::Reload,
};

pub const ADMIN_TOGGLE_USER_STATE: Descriptor = Descriptor {
    dialog: DialogText {
        title: "Toggle User Account State",
        message: "Are you sure you want to toggle this user's active state?",
    },
    endpoint: Endpoint::Template("/dashboard/user_admin/{id}/toggle-state/"),
    payload: PayloadShape::PasswordOnly,
    failure_message: DEFAULT_FAILURE_MESSAGE,
    on_success: Navigation::Reload,
};

pub const ADMIN_SAVE_USER: Descriptor = Descriptor {
    dialog: FALLBACK_DIALOG,
    endpoint: Endpoint::Template("/dashboard/user_admin/{id}/edit/"),
    payload: PayloadShape::AdminUser,
    failure_message: DEFAULT_FAILURE_MESSAGE,
    on_success: Navigation::Reload,
};

pub const ORPHANED_BULK_DELETE: Descriptor = Descriptor {
    dialog: DialogText {
        title: "Confirm Bulk Deletion",
        message: "Please enter your password to delete the selected orphaned products.",
    },
    endpoint: Endpoint::Configured(ConfiguredUrl::OrphanedBulkDelete),
    payload: PayloadShape::BulkSelection,
    failure_message: "Failed to delete products.",
    on_success: Navigation::Reload,
};
