use crate::error::Error;
use crate::notifications::Severity;
use bootstrap::toast::{Color, Options};
use serde::Deserialize;
use web_sys::Document;

/// Id of the optional `<script type="application/json">` element holding overrides.
pub(crate) const CONFIG_ELEMENT_ID: &str = "toast-config";

#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    pub elements: ElementIds,
    pub headers: Headers,
    pub messages: Messages,
    pub toast: Options,
    pub styles: Styles,
    pub events: EventNames,
    pub log_level: log::Level,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            elements: ElementIds::default(),
            headers: Headers::default(),
            messages: Messages::default(),
            toast: Options::default(),
            styles: Styles::default(),
            events: EventNames::default(),
            log_level: log::Level::Info,
        }
    }
}

impl Config {
    pub fn parse(json: &str) -> Result<Config, Error> {
        Ok(serde_json::from_str(json)?)
    }

    /// Reads overrides from the page. Absent or blank overrides give the defaults.
    pub fn from_document(document: &Document) -> Result<Config, Error> {
        Config::from_overrides(
            document
                .get_element_by_id(CONFIG_ELEMENT_ID)
                .and_then(|e| e.text_content()),
        )
    }

    pub(crate) fn from_overrides(json: Option<String>) -> Result<Config, Error> {
        match json {
            Some(json) if !json.trim().is_empty() => Config::parse(&json),
            _ => Ok(Config::default()),
        }
    }
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct ElementIds {
    pub container: String,
    pub title: String,
    pub body: String,
}

impl Default for ElementIds {
    fn default() -> Self {
        Self {
            container: "notificationToast".to_string(),
            title: "toastTitle".to_string(),
            body: "toastBody".to_string(),
        }
    }
}

/// Response headers the backend may set to describe the outcome of an operation.
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct Headers {
    pub status: String,
    pub message: String,
}

impl Default for Headers {
    fn default() -> Self {
        Self {
            status: "X-Operation-Status".to_string(),
            message: "X-Operation-Message".to_string(),
        }
    }
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct Messages {
    pub success_title: String,
    pub error_title: String,
    pub transport_error_title: String,
    pub success_fallback: String,
    pub error_fallback: String,
    pub transport_error_fallback: String,
}

impl Default for Messages {
    fn default() -> Self {
        Self {
            success_title: "Успех".to_string(),
            error_title: "Ошибка".to_string(),
            transport_error_title: "Ошибка запроса".to_string(),
            success_fallback: "Операция выполнена.".to_string(),
            error_fallback: "Произошла ошибка при выполнении операции.".to_string(),
            transport_error_fallback: "Ошибка сети или сервера.".to_string(),
        }
    }
}

/// Classes applied to the toast container per severity. An empty class disables styling.
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct Styles {
    pub success: String,
    pub error: String,
}

impl Styles {
    pub fn class(&self, severity: Severity) -> &str {
        match severity {
            Severity::Success => &self.success,
            Severity::Error => &self.error,
        }
    }

    pub fn all(&self) -> impl Iterator<Item = &str> {
        [self.success.as_str(), self.error.as_str()].into_iter()
    }
}

impl Default for Styles {
    fn default() -> Self {
        Self {
            success: Color::Success.as_str().to_string(),
            error: Color::Danger.as_str().to_string(),
        }
    }
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct EventNames {
    pub completed: Vec<String>,
    pub transport_error: Vec<String>,
}

impl Default for EventNames {
    fn default() -> Self {
        Self {
            completed: vec!["htmx:afterRequest".to_string()],
            transport_error: vec![
                "htmx:responseError".to_string(),
                "htmx:sendError".to_string(),
            ],
        }
    }
}
