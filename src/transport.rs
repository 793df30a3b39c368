use confirmation::request::{CSRF_HEADER, REQUESTED_WITH_HEADER, REQUESTED_WITH_VALUE};
use confirmation::{ActionRequest, RequestBody, Transport, TransportError};
use dto::action_response::ActionResponse;
use reqwest::Client;
use reqwest::multipart::Form;

/// Sends confirmations to a remote server with `reqwest`.
/// Relative URLs from the page configuration are resolved against `base_url`.
pub struct ReqwestTransport {
    client: Client,
    base_url: String,
}

impl ReqwestTransport {
    pub fn new(client: Client, base_url: String) -> Self {
        Self { client, base_url }
    }

    fn absolute_url(&self, url: &str) -> String {
        if url.starts_with("http://") || url.starts_with("https://") {
            url.to_owned()
        } else {
            format!("{}/{}", self.base_url.trim_end_matches('/'), url.trim_start_matches('/'))
        }
    }
}

impl Transport for ReqwestTransport {
    async fn post(&self, request: &ActionRequest) -> Result<ActionResponse, TransportError> {
        let url = self.absolute_url(request.url());
        let builder = self
            .client
            .post(&url)
            .header(CSRF_HEADER, request.csrf_token());
        let builder = match request.body() {
            RequestBody::Json(payload) => builder.json(payload),
            RequestBody::Multipart(fields) => {
                let form = fields
                    .iter()
                    .fold(Form::new(), |form, (name, value)| {
                        form.text(name.clone(), value.clone())
                    });
                builder
                    .header(REQUESTED_WITH_HEADER, REQUESTED_WITH_VALUE)
                    .multipart(form)
            }
        };

        let response = builder.send().await.map_err(|error| {
            error!("Can't send confirmation [url: {url}]\n{error:#?}");
            TransportError::RequestFailed(error.to_string())
        })?;

        let status = response.status();
        debug!("Confirmation answered [url: {url}, status: {status}]");
        response.json::<ActionResponse>().await.map_err(|error| {
            error!("Can't read confirmation response [url: {url}, status: {status}]\n{error:#?}");
            TransportError::InvalidResponse(format!("{error} [status: {status}]"))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tools::test::init_logs;
    use crate::tools::web::{build_client, build_session_client};
    use dto::confirmation_payload::ConfirmationPayload;
    use parameterized::{ide, parameterized};
    use serde_json::json;
    use wiremock::matchers::{
        body_json, body_string_contains, header, header_exists, header_regex, method, path,
    };
    use wiremock::{Mock, MockServer, ResponseTemplate};

    ide!();

    fn json_request(url: &str) -> ActionRequest {
        ActionRequest::new(
            url.to_owned(),
            "csrf-token".to_owned(),
            RequestBody::Json(ConfirmationPayload::new("secret".to_owned())),
        )
    }

    // region absolute_url
    #[parameterized(
        base_url = {"https://shop.example", "https://shop.example/", "https://shop.example"},
        url = {"/accounts/secure_delete_account/", "/accounts/secure_delete_account/", "https://other.example/x/"},
        expected_url = {
            "https://shop.example/accounts/secure_delete_account/",
            "https://shop.example/accounts/secure_delete_account/",
            "https://other.example/x/",
        }
    )]
    fn should_resolve_absolute_url(base_url: &str, url: &str, expected_url: &str) {
        let transport = ReqwestTransport::new(build_client().unwrap(), base_url.to_owned());
        assert_eq!(expected_url, transport.absolute_url(url));
    }
    // endregion

    // region post
    #[tokio::test]
    async fn should_post_json_payload_with_csrf_token() {
        init_logs();
        let mock_server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/accounts/secure_delete_account/"))
            .and(header("X-CSRFToken", "csrf-token"))
            .and(header("Content-Type", "application/json"))
            .and(body_json(json!({"password": "secret"})))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"success": true})))
            .expect(1)
            .mount(&mock_server)
            .await;
        let transport = ReqwestTransport::new(build_client().unwrap(), mock_server.uri());

        let response = transport
            .post(&json_request("/accounts/secure_delete_account/"))
            .await
            .unwrap();

        assert_eq!(ActionResponse::succeeded(), response);
    }

    #[tokio::test]
    async fn should_post_multipart_fields() {
        init_logs();
        let mock_server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/dashboard/orphaned_products/"))
            .and(header("X-CSRFToken", "csrf-token"))
            .and(header("X-Requested-With", "XMLHttpRequest"))
            .and(header_exists("Content-Type"))
            .and(body_string_contains("name=\"delete_single\""))
            .and(body_string_contains("name=\"password\""))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"success": true})))
            .expect(1)
            .mount(&mock_server)
            .await;
        let transport = ReqwestTransport::new(build_client().unwrap(), mock_server.uri());
        let request = ActionRequest::new(
            "/dashboard/orphaned_products/".to_owned(),
            "csrf-token".to_owned(),
            RequestBody::Multipart(vec![
                ("delete_single".to_owned(), "8".to_owned()),
                ("password".to_owned(), "secret".to_owned()),
            ]),
        );

        let response = transport.post(&request).await.unwrap();

        assert_eq!(ActionResponse::succeeded(), response);
    }

    #[tokio::test]
    async fn should_read_refusal_whatever_the_status() {
        init_logs();
        let mock_server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(
                ResponseTemplate::new(401)
                    .set_body_json(json!({"success": false, "error": "Incorrect password."})),
            )
            .mount(&mock_server)
            .await;
        let transport = ReqwestTransport::new(build_client().unwrap(), mock_server.uri());

        let response = transport
            .post(&json_request("/accounts/change_email/"))
            .await
            .unwrap();

        assert_eq!(ActionResponse::failed("Incorrect password."), response);
    }

    #[tokio::test]
    async fn should_fail_when_response_is_not_json() {
        init_logs();
        let mock_server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(500).set_body_string("<html>Server Error</html>"))
            .mount(&mock_server)
            .await;
        let transport = ReqwestTransport::new(build_client().unwrap(), mock_server.uri());

        let error = transport
            .post(&json_request("/accounts/secure_delete_account/"))
            .await
            .unwrap_err();

        assert!(matches!(error, TransportError::InvalidResponse(_)));
    }

    #[tokio::test]
    async fn should_fail_when_server_is_unreachable() {
        init_logs();
        // Nothing listens on a port released right after being reserved.
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let port = listener.local_addr().unwrap().port();
        drop(listener);
        let transport =
            ReqwestTransport::new(build_client().unwrap(), format!("http://127.0.0.1:{port}"));

        let error = transport
            .post(&json_request("/accounts/secure_delete_account/"))
            .await
            .unwrap_err();

        assert!(matches!(error, TransportError::RequestFailed(_)));
    }

    #[tokio::test]
    async fn should_send_session_cookies() {
        init_logs();
        let mock_server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/accounts/secure_delete_account/"))
            .and(header("X-CSRFToken", "csrf-token"))
            .and(header_regex("cookie", "sessionid=abc123"))
            .and(header_regex("cookie", "csrftoken=csrf-token"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"success": true})))
            .expect(1)
            .mount(&mock_server)
            .await;
        let client =
            build_session_client(&mock_server.uri(), Some("abc123"), "csrf-token").unwrap();
        let transport = ReqwestTransport::new(client, mock_server.uri());

        let response = transport
            .post(&json_request("/accounts/secure_delete_account/"))
            .await
            .unwrap();

        assert_eq!(ActionResponse::succeeded(), response);
    }
    // endregion
}
