use crate::action::ActionKind;
use thiserror::Error;

pub type Result<T, E = ConfirmationError> = std::result::Result<T, E>;

/// Failures detected before anything is sent to the server.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfirmationError {
    #[error("Password is required.")]
    PasswordRequired,
    #[error("Unknown action [tag: {0}]")]
    UnknownAction(String),
    #[error("No target has been selected [action: {0}]")]
    MissingTarget(ActionKind),
    #[error("No new email address has been provided.")]
    MissingNewEmail,
    #[error("The user edit form is not available on this page.")]
    MissingUserFields,
}

impl ConfirmationError {
    /// Text shown to the user in the dialog.
    pub fn user_message(&self) -> &'static str {
        match self {
            ConfirmationError::PasswordRequired => "Password is required.",
            ConfirmationError::UnknownAction(_) => {
                "This action is not supported. Please refresh the page."
            }
            ConfirmationError::MissingTarget(_) => {
                "Failed to identify the selected item. Please refresh the page."
            }
            ConfirmationError::MissingNewEmail => "Email cannot be empty.",
            ConfirmationError::MissingUserFields => {
                "Failed to read the user details. Please refresh the page."
            }
        }
    }
}
