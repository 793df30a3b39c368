use crate::request::ActionRequest;
use dto::action_response::ActionResponse;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransportError {
    #[error("The request couldn't be sent [reason: {0}]")]
    RequestFailed(String),
    #[error("The response couldn't be read [reason: {0}]")]
    InvalidResponse(String),
}

/// Posts a confirmation request and parses the server answer.
///
/// Implementations must parse the body whatever the HTTP status:
/// the server reports refusals (wrong password, ...) with a JSON body and a 4xx status.
#[allow(async_fn_in_trait)]
pub trait Transport {
    async fn post(&self, request: &ActionRequest) -> Result<ActionResponse, TransportError>;
}
