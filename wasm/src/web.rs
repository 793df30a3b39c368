use crate::Result;
use crate::error::Error;
use crate::json;
use crate::utils::get_window;
use confirmation::request::{
    CSRF_HEADER, JSON_CONTENT_TYPE, REQUESTED_WITH_HEADER, REQUESTED_WITH_VALUE,
};
use confirmation::{ActionRequest, RequestBody, Transport, TransportError};
use dto::action_response::ActionResponse;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{FormData, Headers, Request, RequestInit};

#[derive(Debug)]
pub struct Response {
    status: u16,
    body: Option<String>,
}

impl Response {
    pub fn status(&self) -> u16 {
        self.status
    }

    pub fn body(&self) -> &Option<String> {
        &self.body
    }
}

/// Post a request with the page's session cookies and return the raw answer.
pub async fn fetch(request: &ActionRequest) -> Result<Response> {
    let window = get_window()?;
    let request_init = RequestInit::new();
    request_init.set_method("POST");
    let headers = Headers::new()?;
    headers.append(CSRF_HEADER, request.csrf_token())?;
    match request.body() {
        RequestBody::Json(payload) => {
            headers.append("Content-Type", JSON_CONTENT_TYPE)?;
            request_init.set_body(&JsValue::from_str(&json::to_string(payload)?));
        }
        RequestBody::Multipart(fields) => {
            // The browser sets the multipart boundary itself.
            headers.append(REQUESTED_WITH_HEADER, REQUESTED_WITH_VALUE)?;
            let form_data = FormData::new()?;
            for (name, value) in fields {
                form_data.append_with_str(name, value)?;
            }
            request_init.set_body(&form_data);
        }
    }
    request_init.set_headers(&JsValue::from(&headers));

    let request = Request::new_with_str_and_init(request.url(), &request_init)?;
    let promise = window.fetch_with_request(&request);
    let response = wasm_bindgen_futures::JsFuture::from(promise)
        .await?
        .dyn_into::<web_sys::Response>()?;
    let status = response.status();
    Ok(Response {
        status,
        body: wasm_bindgen_futures::JsFuture::from(response.text()?)
            .await?
            .as_string(),
    })
}

/// Sends confirmation requests with the Fetch API.
#[derive(Debug, Default)]
pub struct FetchTransport;

impl Transport for FetchTransport {
    async fn post(&self, request: &ActionRequest) -> Result<ActionResponse, TransportError> {
        let response = fetch(request)
            .await
            .map_err(|error| TransportError::RequestFailed(format!("{error:?}")))?;
        debug!("Confirmation answered [status: {}]", response.status());

        let body = response.body().as_deref().ok_or_else(|| {
            TransportError::InvalidResponse(format!("empty body [status: {}]", response.status()))
        })?;
        json::from_str::<ActionResponse>(body).map_err(|error: Error| {
            TransportError::InvalidResponse(format!(
                "{error:?} [status: {}]",
                response.status()
            ))
        })
    }
}
