use crate::error::ApplicationError::{CantCreateClient, InvalidArgument};
use crate::error::Result;
use crate::options::BASE_URL_ARG;
use crate::tools::log_message_and_return;
use reqwest::cookie::Jar;
use reqwest::{Client, Url};
use std::sync::Arc;

const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));
const SESSION_COOKIE: &str = "sessionid";
const CSRF_COOKIE: &str = "csrftoken";

pub fn build_client() -> Result<Client> {
    reqwest::ClientBuilder::new()
        .user_agent(USER_AGENT)
        .cookie_store(true)
        .build()
        .map_err(log_message_and_return(
            "Can't build HTTP client.",
            CantCreateClient,
        ))
}

/// Build a client acting as a logged-in user of `base_url`.
/// The CSRF cookie has to match the `X-CSRFToken` header sent with each request.
pub fn build_session_client(
    base_url: &str,
    session_id: Option<&str>,
    csrf_token: &str,
) -> Result<Client> {
    let url = Url::parse(base_url).map_err(log_message_and_return(
        "Can't parse base URL.",
        InvalidArgument(BASE_URL_ARG, base_url.to_owned()),
    ))?;

    let jar = Jar::default();
    if let Some(session_id) = session_id {
        jar.add_cookie_str(&format!("{SESSION_COOKIE}={session_id}; Path=/"), &url);
    }
    if !csrf_token.is_empty() {
        jar.add_cookie_str(&format!("{CSRF_COOKIE}={csrf_token}; Path=/"), &url);
    }

    reqwest::ClientBuilder::new()
        .user_agent(USER_AGENT)
        .cookie_provider(Arc::new(jar))
        .build()
        .map_err(log_message_and_return(
            "Can't build HTTP client.",
            CantCreateClient,
        ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_build_client() {
        assert!(build_client().is_ok());
    }

    #[test]
    fn should_build_session_client() {
        assert!(build_session_client("https://shop.example", Some("abc123"), "token").is_ok());
    }

    #[test]
    fn should_fail_to_build_session_client_for_invalid_url() {
        let error = build_session_client("https://", None, "").unwrap_err();

        assert_eq!(InvalidArgument(BASE_URL_ARG, "https://".to_owned()), error);
    }
}
