//! Password-gated confirmation of sensitive account actions.
//!
//! A front-end opens a dialog for an action tag, keeps the returned [`ActionContext`]
//! and hands it back when the user submits their password.
//! Everything touching the page goes through [`ConfirmationPage`],
//! everything touching the network goes through [`Transport`].

#[macro_use]
extern crate log;

pub mod action;
pub mod config;
pub mod context;
pub mod descriptor;
pub mod dialog;
pub mod error;
pub mod page;
pub mod request;
pub mod transport;


pub use action::ActionKind;
pub use config::{Endpoints, PageConfig};
pub use context::{ActionContext, RequestedAction};
pub use dialog::{ConfirmationDialog, SubmissionOutcome};
pub use error::{ConfirmationError, Result};
pub use page::{AddressKind, ConfirmationPage, EmailField, Navigation};
pub use request::{ActionRequest, RequestBody};
pub use transport::{Transport, TransportError};
