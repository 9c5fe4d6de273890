use crate::config::Headers;
use crate::error::Error;
use js_sys::Reflect;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CustomEvent, Event, XmlHttpRequest};

/// The outcome of an htmx request, as carried on the event bus.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RequestEvent {
    /// The request finished, with either a success or an error status.
    Completed {
        successful: bool,
        verb: String,
        response: Response,
    },
    /// The request could not be completed.
    TransportError { detail: String, response: Response },
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Response {
    pub status: Option<String>,
    pub message: Option<String>,
    pub body: String,
}

impl RequestEvent {
    pub(crate) fn completed(event: &Event, headers: &Headers) -> Result<RequestEvent, Error> {
        let detail = detail(event)?;
        let successful = get(&detail, "successful").ok().and_then(|v| v.as_bool());
        // only consulted for successful requests, so a missing config must not drop a failure
        let verb = get(&detail, "requestConfig")
            .and_then(|config| get(&config, "verb"))
            .ok()
            .and_then(|v| v.as_string());
        Ok(RequestEvent::from_completion(
            successful,
            verb,
            read_response(&detail, headers),
        ))
    }

    pub(crate) fn transport_error(event: &Event, headers: &Headers) -> Result<RequestEvent, Error> {
        let detail = detail(event)?;
        let error = get(&detail, "error")
            .ok()
            .filter(|e| !e.is_undefined() && !e.is_null())
            .map(|e| e.as_string().unwrap_or_else(|| format!("{:?}", e)));
        Ok(RequestEvent::from_transport_error(
            error,
            event.type_(),
            read_response(&detail, headers),
        ))
    }

    /// Builds a completion from whatever the event carried. A missing flag counts as a failure.
    pub(crate) fn from_completion(
        successful: Option<bool>,
        verb: Option<String>,
        response: Response,
    ) -> RequestEvent {
        RequestEvent::Completed {
            successful: successful.unwrap_or(false),
            verb: verb.unwrap_or_default(),
            response,
        }
    }

    /// Builds a transport error, describing it by the event type when htmx gave no error.
    pub(crate) fn from_transport_error(
        error: Option<String>,
        event_type: String,
        response: Response,
    ) -> RequestEvent {
        RequestEvent::TransportError {
            detail: error.filter(|e| !e.is_empty()).unwrap_or(event_type),
            response,
        }
    }
}

impl Response {
    pub(crate) fn from_parts(
        status: Option<String>,
        message: Option<String>,
        body: Option<String>,
    ) -> Response {
        Response {
            status,
            message,
            body: body.unwrap_or_default(),
        }
    }

    fn read(xhr: &XmlHttpRequest, headers: &Headers) -> Response {
        Response::from_parts(
            header(xhr, &headers.status),
            header(xhr, &headers.message),
            xhr.response_text().ok().flatten(),
        )
    }
}

// sendError may fire before a response exists
fn read_response(detail: &JsValue, headers: &Headers) -> Response {
    match xhr(detail) {
        Ok(xhr) => Response::read(&xhr, headers),
        Err(e) => {
            log::trace!("no response available: {e}");
            Response::default()
        }
    }
}

fn header(xhr: &XmlHttpRequest, name: &str) -> Option<String> {
    match xhr.get_response_header(name) {
        Ok(value) => value,
        Err(e) => {
            log::trace!("unable to read {name} header: {:?}", e);
            None
        }
    }
}

fn detail(event: &Event) -> Result<JsValue, Error> {
    let event = event
        .dyn_ref::<CustomEvent>()
        .ok_or_else(|| Error::Js(format!("{} is not a custom event", event.type_())))?;
    Ok(event.detail())
}

fn get(target: &JsValue, key: &str) -> Result<JsValue, Error> {
    if target.is_undefined() || target.is_null() {
        return Err(Error::Js(format!("cannot read {key} of {:?}", target)));
    }
    Ok(Reflect::get(target, &JsValue::from_str(key))?)
}

fn xhr(detail: &JsValue) -> Result<XmlHttpRequest, Error> {
    get(detail, "xhr")?
        .dyn_into::<XmlHttpRequest>()
        .map_err(|value| Error::Js(format!("xhr is not an XMLHttpRequest: {:?}", value)))
}
