#[cfg(test)]
use std::cell::RefCell;
#[cfg(not(test))]
use std::env;
use std::ops::Deref;

// region ArgName
/// One or several names for the same arg, e.g. `-a` and `--action`.
/// Can be built from a `&str` or a `Vec<&str>`.
pub struct ArgName<'a> {
    names: Vec<&'a str>,
}

impl<'a> From<&'a str> for ArgName<'a> {
    fn from(val: &'a str) -> Self {
        ArgName { names: vec![val] }
    }
}

impl<'a> From<Vec<&'a str>> for ArgName<'a> {
    fn from(val: Vec<&'a str>) -> Self {
        ArgName { names: val }
    }
}

impl<'a> Deref for ArgName<'a> {
    type Target = Vec<&'a str>;

    fn deref(&self) -> &Self::Target {
        &self.names
    }
}
// endregion

/// Retrieve every value passed as `name=value` for the given arg, in order.
///
/// /!\ Args are read from the process. Wrap tests with `with_env_args(args, fn)`.
pub fn retrieve_arg_values<'a, A>(arg_names: A) -> Vec<String>
where
    A: Into<ArgName<'a>>,
{
    let arg_names = arg_names.into();
    get_env_args()
        .iter()
        .filter_map(|arg| {
            arg_names.iter().find_map(|arg_name| {
                arg.strip_prefix(arg_name)
                    .and_then(|rest| rest.strip_prefix('='))
                    .map(str::to_owned)
            })
        })
        .collect()
}

/// Retrieve the first value passed for the given arg.
pub fn retrieve_arg_value<'a, A>(arg_names: A) -> Option<String>
where
    A: Into<ArgName<'a>>,
{
    retrieve_arg_values(arg_names).into_iter().next()
}

pub fn retrieve_expected_arg_value<E>(arg_name: &str, error_if_missing: E) -> Result<String, E> {
    retrieve_arg_value(arg_name).ok_or(error_if_missing)
}

/// A flag is set when passed bare (`--staff`) or with a truthy value (`--staff=true`).
pub fn is_flag_set<'a, A>(arg_names: A) -> bool
where
    A: Into<ArgName<'a>>,
{
    let arg_names = arg_names.into();
    let args = get_env_args();
    let bare = args
        .iter()
        .any(|arg| arg_names.iter().any(|arg_name| arg == arg_name));

    bare || retrieve_arg_value(arg_names.names)
        .is_some_and(|value| matches!(value.as_str(), "true" | "1" | "yes"))
}

#[cfg(not(test))]
fn get_env_args() -> Vec<String> {
    env::args().skip(1).collect()
}

#[cfg(test)]
thread_local! {
    /// Args seen by the functions above while running tests.
    /// Replaced for the duration of `with_env_args`, then restored.
    static ENV_ARGS: RefCell<Vec<String>> = const { RefCell::new(vec![]) };
}

#[cfg(test)]
fn get_env_args() -> Vec<String> {
    ENV_ARGS.with(|args| args.borrow().clone())
}

#[cfg(test)]
/// Run `function` as if the app had been started with `args`.
pub fn with_env_args<F, T>(args: Vec<String>, function: F) -> T
where
    F: FnOnce() -> T,
{
    ENV_ARGS.with(|refcell| {
        let old_value = refcell.replace(args);
        let result = function();
        refcell.replace(old_value);
        result
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use parameterized::{ide, parameterized};

    ide!();

    #[parameterized(
        args = {
            vec!["-a=delete_box".to_owned()],
            vec!["--action=delete_box".to_owned()],
            vec!["--action-id=12".to_owned()],
            vec!["--id=12".to_owned()],
        },
        arg_names = {
            vec!["-a", "--action"],
            vec!["-a", "--action"],
            vec!["-a", "--action"],
            vec!["-a", "--action"],
        },
        expected_result = {
            Some("delete_box".to_owned()),
            Some("delete_box".to_owned()),
            None,
            None,
        }
    )]
    fn should_retrieve_arg_value(
        args: Vec<String>,
        arg_names: Vec<&str>,
        expected_result: Option<String>,
    ) {
        let result = with_env_args(args, || retrieve_arg_value(arg_names));
        assert_eq!(expected_result, result);
    }

    #[test]
    fn should_keep_equal_signs_in_value() {
        let args = vec!["--csrf-token=abc==".to_owned()];

        let result = with_env_args(args, || retrieve_arg_value("--csrf-token"));

        assert_eq!(Some("abc==".to_owned()), result);
    }

    #[test]
    fn should_retrieve_every_value() {
        let args = vec![
            "--product-id=4".to_owned(),
            "--action=orphaned_bulk_delete".to_owned(),
            "--product-id=9".to_owned(),
        ];

        let result = with_env_args(args, || retrieve_arg_values("--product-id"));

        assert_eq!(vec!["4".to_owned(), "9".to_owned()], result);
    }

    #[test]
    fn should_retrieve_expected_arg_value() {
        let args = vec!["--base-url=https://shop.example".to_owned()];

        let result =
            with_env_args(args, || retrieve_expected_arg_value("--base-url", "missing")).unwrap();

        assert_eq!("https://shop.example", result);
    }

    #[test]
    fn should_fail_to_retrieve_expected_arg_value() {
        let result = with_env_args(vec![], || {
            retrieve_expected_arg_value("--base-url", "missing")
        });

        assert_eq!(Err("missing"), result);
    }

    #[parameterized(
        args = {
            vec!["--staff".to_owned()],
            vec!["--staff=true".to_owned()],
            vec!["--staff=false".to_owned()],
            vec!["--staffing".to_owned()],
            vec![],
        },
        expected_result = {true, true, false, false, false}
    )]
    fn should_tell_whether_flag_is_set(args: Vec<String>, expected_result: bool) {
        let result = with_env_args(args, || is_flag_set("--staff"));
        assert_eq!(expected_result, result);
    }
}
