pub mod env_args;
pub mod web;

use std::fmt::Debug;

/// Log the error with some context, then replace it with `value_to_return`.
/// Meant to be used with `map_err`.
pub fn log_message_and_return<E: Debug, T>(
    message: &str,
    value_to_return: T,
) -> impl FnOnce(E) -> T {
    move |e| {
        error!("{message}\n{e:#?}");
        value_to_return
    }
}
