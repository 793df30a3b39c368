use std::fmt::{Debug, Display, Formatter};
use wasm_bindgen::JsValue;
use web_sys::{Element, Node};

pub const DEFAULT_ERROR_MESSAGE: &str = "Something went wrong. Please refresh the page.";

/// An error with a message for the user and another one for the logs.
pub struct Error {
    msg: String,
    technical_msg: String,
    parent: Option<Box<Error>>,
}

impl Error {
    pub fn new(msg: &str, technical_msg: &str) -> Self {
        Self {
            msg: msg.to_owned(),
            technical_msg: technical_msg.to_owned(),
            parent: None,
        }
    }

    /// An error hiding its technical details behind the default message.
    pub fn technical(technical_msg: &str) -> Self {
        Self::new(DEFAULT_ERROR_MESSAGE, technical_msg)
    }

    pub fn from_parent(msg: &str, parent: Error) -> Self {
        Self {
            msg: msg.to_owned(),
            technical_msg: msg.to_owned(),
            parent: Some(Box::from(parent)),
        }
    }
}

impl Default for Error {
    fn default() -> Self {
        Error::technical(DEFAULT_ERROR_MESSAGE)
    }
}

impl Debug for Error {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match &self.parent {
            None => {
                write!(f, "{}", self.technical_msg)
            }
            Some(parent) => {
                write!(f, "{}: caused by:\n{:?}", self.technical_msg, parent)
            }
        }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.msg)
    }
}

impl From<JsValue> for Error {
    fn from(value: JsValue) -> Self {
        let technical_msg = value
            .as_string()
            .unwrap_or_else(|| format!("JavaScript error: {value:?}"));
        Self::technical(&technical_msg)
    }
}

impl From<Element> for Error {
    fn from(element: Element) -> Self {
        Self::technical(&format!("A cast has failed for element: {element:?}"))
    }
}

impl From<Node> for Error {
    fn from(node: Node) -> Self {
        Self::technical(&format!("A cast has failed for node: {node:?}"))
    }
}

impl From<serde_json_wasm::ser::Error> for Error {
    fn from(error: serde_json_wasm::ser::Error) -> Self {
        Self::technical(&format!("Can't serialize value: {error}"))
    }
}

impl From<serde_json_wasm::de::Error> for Error {
    fn from(error: serde_json_wasm::de::Error) -> Self {
        Self::technical(&format!("Can't deserialize value: {error}"))
    }
}
