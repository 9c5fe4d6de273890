use std::fmt::{Display, Formatter};
use wasm_bindgen::JsValue;

#[derive(Debug)]
pub enum Error {
    /// No element with the given id exists in the document.
    MissingElement(String),
    Config(serde_json::Error),
    /// A JavaScript exception or unexpected value, rendered with `{:?}`.
    Js(String),
}

impl Display for Error {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::MissingElement(id) => write!(f, "could not find element #{id}"),
            Error::Config(e) => write!(f, "invalid configuration: {e}"),
            Error::Js(e) => write!(f, "javascript error: {e}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Config(e) => Some(e),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::Config(e)
    }
}

impl From<JsValue> for Error {
    fn from(value: JsValue) -> Self {
        Error::Js(value.as_string().unwrap_or_else(|| format!("{:?}", value)))
    }
}

impl From<Error> for JsValue {
    fn from(e: Error) -> Self {
        JsValue::from_str(&e.to_string())
    }
}
