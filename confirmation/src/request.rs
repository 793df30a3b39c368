use crate::action::ActionKind;
use crate::config::PageConfig;
use crate::context::ActionContext;
use crate::descriptor::PayloadShape;
use crate::error::{ConfirmationError, Result};
use crate::page::ConfirmationPage;
use derive_getters::Getters;
use dto::confirmation_payload::ConfirmationPayload;

pub const CSRF_HEADER: &str = "X-CSRFToken";
pub const REQUESTED_WITH_HEADER: &str = "X-Requested-With";
pub const REQUESTED_WITH_VALUE: &str = "XMLHttpRequest";
pub const JSON_CONTENT_TYPE: &str = "application/json";

const PASSWORD_FIELD: &str = "password";
const DELETE_SINGLE_FIELD: &str = "delete_single";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RequestBody {
    Json(ConfirmationPayload),
    /// Form fields, in order. Keys may repeat (e.g. several selected products).
    Multipart(Vec<(String, String)>),
}

/// A fully resolved confirmation request, always sent with POST.
#[derive(Debug, Clone, PartialEq, Eq, Getters)]
pub struct ActionRequest {
    url: String,
    csrf_token: String,
    body: RequestBody,
}

impl ActionRequest {
    pub fn new(url: String, csrf_token: String, body: RequestBody) -> Self {
        Self {
            url,
            csrf_token,
            body,
        }
    }

    /// Resolve the request for a known action.
    /// Page fields (admin form, bulk selection) are read now, not when the dialog was opened.
    pub fn build<P: ConfirmationPage + ?Sized>(
        kind: ActionKind,
        context: &ActionContext,
        password: String,
        config: &PageConfig,
        page: &P,
    ) -> Result<Self> {
        let descriptor = kind.descriptor();
        let target_id = context.target_id().as_deref();
        let url = descriptor.endpoint.resolve(kind, config.urls(), target_id)?;

        let body = match descriptor.payload {
            PayloadShape::PasswordOnly => RequestBody::Json(ConfirmationPayload::new(password)),
            PayloadShape::SubscriptionId => {
                let subscription_id = target_id
                    .filter(|id| !id.is_empty())
                    .ok_or(ConfirmationError::MissingTarget(kind))?;
                RequestBody::Json(
                    ConfirmationPayload::new(password)
                        .with_subscription_id(subscription_id.to_owned()),
                )
            }
            PayloadShape::NewEmail => {
                let new_email = context
                    .new_email()
                    .clone()
                    .ok_or(ConfirmationError::MissingNewEmail)?;
                RequestBody::Json(ConfirmationPayload::new(password).with_new_email(new_email))
            }
            PayloadShape::AdminUser => {
                let user = page
                    .admin_user_fields()
                    .ok_or(ConfirmationError::MissingUserFields)?;
                RequestBody::Json(ConfirmationPayload::new(password).with_user(user))
            }
            PayloadShape::BulkSelection => {
                let mut fields = page.bulk_selection_fields();
                fields.push((PASSWORD_FIELD.to_owned(), password));
                RequestBody::Multipart(fields)
            }
            PayloadShape::SingleProduct => {
                let product_id = target_id
                    .filter(|id| !id.is_empty())
                    .ok_or(ConfirmationError::MissingTarget(kind))?;
                RequestBody::Multipart(vec![
                    (DELETE_SINGLE_FIELD.to_owned(), product_id.to_owned()),
                    (PASSWORD_FIELD.to_owned(), password),
                ])
            }
        };

        Ok(Self::new(url, config.csrf_token().clone(), body))
    }
}
