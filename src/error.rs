use thiserror::Error;

pub type Result<T, E = ApplicationError> = std::result::Result<T, E>;

#[derive(Debug, PartialEq, Error)]
pub enum ApplicationError {
    #[error("Missing argument `{0}`.")]
    MissingArgument(&'static str),
    #[error("Invalid value for argument `{0}` [value: {1}]")]
    InvalidArgument(&'static str, String),
    #[error("HTTP client couldn't be created.")]
    CantCreateClient,
    #[error("The password couldn't be read.")]
    CantReadPassword,
    #[error("The confirmation dialog couldn't be opened for action `{0}`.")]
    DialogNotOpened(String),
}
