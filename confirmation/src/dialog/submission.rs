use super::{ConfirmationDialog, GENERIC_FAILURE_MESSAGE, SubmissionOutcome};
use crate::action::ActionKind;
use crate::context::ActionContext;
use crate::error::{ConfirmationError, Result};
use crate::page::ConfirmationPage;
use crate::request::ActionRequest;
use crate::transport::{Transport, TransportError};
use dto::action_response::ActionResponse;
use std::cell::Cell;

/// Marks a request as in flight until dropped, even if the submission future is dropped early.
struct InFlight<'a>(&'a Cell<bool>);

impl<'a> InFlight<'a> {
    fn start(flag: &'a Cell<bool>) -> Self {
        flag.set(true);
        Self(flag)
    }
}

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        self.0.set(false);
    }
}

impl<T: Transport> ConfirmationDialog<T> {
    /// Send the confirmation described by `context` with the password typed in the dialog.
    ///
    /// The confirm control stays disabled until the server has answered or the request failed.
    pub async fn submit<P: ConfirmationPage>(
        &self,
        page: &mut P,
        context: &ActionContext,
    ) -> SubmissionOutcome {
        if self.in_flight.get() {
            warn!("A confirmation is already in flight, ignoring submission");
            return SubmissionOutcome::AlreadySubmitting;
        }

        page.set_error("");
        let (kind, request) = match self.prepare_request(page, context) {
            Ok(prepared) => prepared,
            Err(error) => {
                warn!("Confirmation rejected before sending: {error}");
                page.set_error(error.user_message());
                return SubmissionOutcome::Rejected(error);
            }
        };

        debug!(
            "Sending confirmation [action: {kind}, url: {}]",
            request.url()
        );
        let response = {
            let _in_flight = InFlight::start(&self.in_flight);
            page.set_submitting(true);
            let response = self.transport.post(&request).await;
            page.set_submitting(false);
            response
        };

        handle_response(page, kind, response)
    }

    fn prepare_request<P: ConfirmationPage>(
        &self,
        page: &P,
        context: &ActionContext,
    ) -> Result<(ActionKind, ActionRequest)> {
        let password = page.password();
        if password.is_empty() {
            return Err(ConfirmationError::PasswordRequired);
        }

        let kind = context
            .action()
            .kind()
            .ok_or_else(|| ConfirmationError::UnknownAction(context.action().tag().to_owned()))?;
        let request = ActionRequest::build(kind, context, password, &self.config, page)?;

        Ok((kind, request))
    }
}

fn handle_response<P: ConfirmationPage>(
    page: &mut P,
    kind: ActionKind,
    response: Result<ActionResponse, TransportError>,
) -> SubmissionOutcome {
    let descriptor = kind.descriptor();
    match response {
        Ok(response) if *response.success() => {
            info!("Action confirmed [action: {kind}]");
            page.navigate(descriptor.on_success);
            SubmissionOutcome::Completed(descriptor.on_success)
        }
        Ok(response) => {
            let message = response
                .displayable_error()
                .unwrap_or(descriptor.failure_message)
                .to_owned();
            warn!("Action refused by server [action: {kind}, error: {message}]");
            page.set_error(&message);
            SubmissionOutcome::Refused(message)
        }
        Err(error) => {
            error!("Can't confirm action [action: {kind}]\n{error:#?}");
            page.set_error(GENERIC_FAILURE_MESSAGE);
            SubmissionOutcome::Failed
        }
    }
}
