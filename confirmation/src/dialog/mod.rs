mod presenter;
mod submission;

use crate::config::PageConfig;
use crate::error::ConfirmationError;
use crate::page::Navigation;
use crate::transport::Transport;
use std::cell::{Cell, OnceCell};

pub const GENERIC_FAILURE_MESSAGE: &str = "Sorry - there was a problem completing your request.";
pub const ADDRESS_NOT_FOUND_MESSAGE: &str = "Address not found. Please refresh the page.";
pub const ONLY_PERSONAL_ADDRESS_WARNING: &str =
    "This is your only personal address. You'll need to add another before ordering.";
pub const PERSONAL_ADDRESS_WARNING: &str = "This will affect your default delivery options.";
pub const GIFT_ADDRESS_WARNING: &str = "This is your only gift order address.";
pub const EMPTY_EMAIL_MESSAGE: &str = "Email cannot be empty.";
pub const UNCHANGED_EMAIL_MESSAGE: &str = "Email has not changed.";
pub const UNIDENTIFIED_SUBSCRIPTION_MESSAGE: &str =
    "Failed to identify subscription. Please try again.";
pub const NO_PRODUCT_SELECTED_MESSAGE: &str = "Please select at least one product to delete.";
pub const BULK_DELETE_ACTION: &str = "delete";

/// How a submission ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionOutcome {
    /// The server accepted the action and the page has been sent away.
    Completed(Navigation),
    /// Nothing has been sent: the input or the context was not usable.
    Rejected(ConfirmationError),
    /// The server refused; the displayed message is kept here.
    Refused(String),
    /// The request or its response got lost.
    Failed,
    /// Another submission is still waiting for its response.
    AlreadySubmitting,
}

/// The password confirmation dialog.
///
/// Opening returns an [`crate::ActionContext`] the caller keeps until the user submits.
/// The dialog itself only remembers the original email (the baseline for email changes)
/// and whether a request is in flight.
pub struct ConfirmationDialog<T: Transport> {
    config: PageConfig,
    transport: T,
    original_email: OnceCell<String>,
    in_flight: Cell<bool>,
}

impl<T: Transport> ConfirmationDialog<T> {
    pub fn new(config: PageConfig, transport: T) -> Self {
        Self {
            config,
            transport,
            original_email: OnceCell::new(),
            in_flight: Cell::new(false),
        }
    }

    pub fn config(&self) -> &PageConfig {
        &self.config
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub fn is_submitting(&self) -> bool {
        self.in_flight.get()
    }
}
