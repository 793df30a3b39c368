use crate::error::ApplicationError::{InvalidArgument, MissingArgument};
use crate::error::Result;
use crate::tools::env_args::{retrieve_arg_value, retrieve_expected_arg_value};
use confirmation::descriptor::ConfiguredUrl;
use confirmation::{Endpoints, PageConfig};
use derive_getters::Getters;

pub const BASE_URL_ARG: &str = "--base-url";
pub const CSRF_TOKEN_ARG: &str = "--csrf-token";
pub const ACTION_ARG: &str = "--action";
pub const ID_ARG: &str = "--id";
pub const SESSION_ID_ARG: &str = "--session-id";

const URL_OVERRIDE_ARGS: [(&str, ConfiguredUrl); 5] = [
    ("--delete-account-url", ConfiguredUrl::DeleteAccount),
    ("--delete-address-url", ConfiguredUrl::DeleteAddressBase),
    ("--cancel-subscription-url", ConfiguredUrl::CancelSubscription),
    ("--change-email-url", ConfiguredUrl::ChangeEmail),
    ("--orphaned-products-url", ConfiguredUrl::OrphanedBulkDelete),
];

/// What to confirm and against which server.
#[derive(Debug, Getters)]
pub struct CommandLineOptions {
    base_url: String,
    action: String,
    target_id: Option<String>,
    /// `sessionid` cookie of a logged-in user.
    session_id: Option<String>,
    page_config: PageConfig,
}

impl CommandLineOptions {
    pub fn from_args() -> Result<Self> {
        let base_url = retrieve_expected_arg_value(BASE_URL_ARG, MissingArgument(BASE_URL_ARG))?;
        if !base_url.starts_with("http://") && !base_url.starts_with("https://") {
            return Err(InvalidArgument(BASE_URL_ARG, base_url));
        }
        let action = retrieve_expected_arg_value(ACTION_ARG, MissingArgument(ACTION_ARG))?;
        let target_id = retrieve_arg_value(ID_ARG);
        let session_id = retrieve_arg_value(SESSION_ID_ARG);
        if session_id.is_none() {
            warn!("No `{SESSION_ID_ARG}` given, the server will most likely ask to log in");
        }
        let csrf_token = retrieve_arg_value(CSRF_TOKEN_ARG).unwrap_or_default();

        let mut endpoints = Endpoints::default();
        for (arg_name, url) in URL_OVERRIDE_ARGS {
            if let Some(value) = retrieve_arg_value(arg_name) {
                endpoints.set(url, value);
            }
        }

        Ok(Self {
            base_url,
            action,
            target_id,
            session_id,
            page_config: PageConfig::new(csrf_token, endpoints),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ApplicationError;
    use crate::tools::env_args::with_env_args;
    use parameterized::{ide, parameterized};

    ide!();

    #[test]
    fn should_read_options() {
        let args = vec![
            "--base-url=https://shop.example".to_owned(),
            "--action=delete_box".to_owned(),
            "--id=12".to_owned(),
            "--csrf-token=token".to_owned(),
            "--session-id=abc123".to_owned(),
            "--change-email-url=/users/email/".to_owned(),
        ];

        let options = with_env_args(args, CommandLineOptions::from_args).unwrap();

        assert_eq!("https://shop.example", options.base_url().as_str());
        assert_eq!("delete_box", options.action().as_str());
        assert_eq!(&Some("12".to_owned()), options.target_id());
        assert_eq!(&Some("abc123".to_owned()), options.session_id());
        assert_eq!("token", options.page_config().csrf_token().as_str());
        assert_eq!("/users/email/", options.page_config().urls().change_email().as_str());
        assert_eq!(
            Endpoints::default().delete_account(),
            options.page_config().urls().delete_account()
        );
    }

    #[parameterized(
        args = {
            vec!["--action=delete_box".to_owned()],
            vec!["--base-url=https://shop.example".to_owned()],
            vec!["--base-url=shop.example".to_owned(), "--action=delete_box".to_owned()],
        },
        expected_error = {
            MissingArgument(BASE_URL_ARG),
            MissingArgument(ACTION_ARG),
            InvalidArgument(BASE_URL_ARG, "shop.example".to_owned()),
        }
    )]
    fn should_fail_to_read_options(args: Vec<String>, expected_error: ApplicationError) {
        let error = with_env_args(args, CommandLineOptions::from_args).unwrap_err();
        assert_eq!(expected_error, error);
    }
}
