use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// Body returned by every confirmation endpoint.
/// `error` is only expected when `success` is false.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct ActionResponse {
    success: bool,
    #[serde(default)]
    error: Option<String>,
}

impl ActionResponse {
    pub fn new(success: bool, error: Option<String>) -> Self {
        Self { success, error }
    }

    pub fn succeeded() -> Self {
        Self::new(true, None)
    }

    pub fn failed(error: &str) -> Self {
        Self::new(false, Some(error.to_owned()))
    }

    /// The error reported by the server, exactly as sent. An empty error doesn't count.
    pub fn displayable_error(&self) -> Option<&str> {
        self.error.as_deref().filter(|error| !error.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use parameterized::{ide, parameterized};

    ide!();

    #[parameterized(
        body = {
            r#"{"success": true}"#,
            r#"{"success": false, "error": "Incorrect password"}"#,
            r#"{"success": false}"#,
            r#"{"success": false, "error": null, "status": 401}"#,
        },
        expected = {
            ActionResponse::succeeded(),
            ActionResponse::failed("Incorrect password"),
            ActionResponse::new(false, None),
            ActionResponse::new(false, None),
        }
    )]
    fn should_deserialize_response(body: &str, expected: ActionResponse) {
        let response: ActionResponse = serde_json::from_str(body).unwrap();
        assert_eq!(expected, response);
    }

    #[test]
    fn should_not_deserialize_response_without_success_flag() {
        let result = serde_json::from_str::<ActionResponse>(r#"{"error": "Oops"}"#);
        assert!(result.is_err());
    }

    #[parameterized(
        response = {
            ActionResponse::failed("Incorrect password."),
            ActionResponse::failed(" Incorrect password. "),
            ActionResponse::failed("   "),
            ActionResponse::failed(""),
            ActionResponse::new(false, None),
        },
        expected = {
            Some("Incorrect password."),
            Some(" Incorrect password. "),
            Some("   "),
            None,
            None,
        }
    )]
    fn should_get_displayable_error(response: ActionResponse, expected: Option<&str>) {
        assert_eq!(expected, response.displayable_error());
    }
}
