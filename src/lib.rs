//! Shows Bootstrap toasts for the outcome of htmx requests.
//!
//! Successful `POST`s report the `X-Operation-Message` header, failed requests
//! report the response body, and requests that never reach the server are
//! logged as well as reported.

use std::rc::Rc;
use wasm_bindgen::prelude::*;

pub mod bus;
pub mod config;
pub mod error;
pub mod events;
pub mod listeners;
pub mod notifications;
pub mod presenter;

pub use config::Config;
pub use error::Error;
pub use notifications::{Severity, Toast};

#[cfg(target_arch = "wasm32")]
#[global_allocator]
static ALLOC: wee_alloc::WeeAlloc = wee_alloc::WeeAlloc::INIT;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| Error::Js("no document available".to_string()))?;

    let (config, invalid) = match Config::from_document(&document) {
        Ok(config) => (config, None),
        Err(e) => (Config::default(), Some(e)),
    };
    wasm_logger::init(wasm_logger::Config::new(config.log_level));
    if let Some(e) = invalid {
        log::error!(
            "unable to parse #{}, using defaults: {e}",
            crate::config::CONFIG_ELEMENT_ID
        );
    }

    let body = document
        .body()
        .ok_or_else(|| Error::MissingElement("body".to_string()))?;
    let elements = match presenter::ToastElements::find(&document, &config.elements) {
        Ok(elements) => elements,
        Err(e) => {
            gloo_console::error!(format!("toasts disabled: {e}"));
            return Err(e.into());
        }
    };

    let Config {
        headers,
        messages,
        toast,
        styles,
        events,
        ..
    } = config;
    let presenter = presenter::DomPresenter::new(elements, messages.clone(), styles, toast);
    let bus = Rc::new(bus::EventBus::new(bus::Notifier::new(presenter, messages)));
    listeners::add_request_listeners(&body, &events, &headers, bus);

    log::trace!("toast notifications ready");
    Ok(())
}
