use crate::bus::{EventBus, Subscriber};
use crate::config::{EventNames, Headers};
use crate::error::Error;
use crate::events::RequestEvent;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Event, EventTarget};

type Extract = fn(&Event, &Headers) -> Result<RequestEvent, Error>;

/// Publishes htmx request events raised on `target` onto the bus.
pub fn add_request_listeners<S: Subscriber + 'static>(
    target: &EventTarget,
    events: &EventNames,
    headers: &Headers,
    bus: Rc<EventBus<S>>,
) {
    for name in &events.completed {
        add_listener(target, name, headers, bus.clone(), RequestEvent::completed);
    }
    for name in &events.transport_error {
        add_listener(
            target,
            name,
            headers,
            bus.clone(),
            RequestEvent::transport_error,
        );
    }
}

fn add_listener<S: Subscriber + 'static>(
    target: &EventTarget,
    name: &str,
    headers: &Headers,
    bus: Rc<EventBus<S>>,
    extract: Extract,
) {
    let headers = headers.clone();
    let listener = Closure::wrap(Box::new(move |event: Event| {
        match extract(&event, &headers) {
            Ok(request) => bus.publish(&request),
            Err(e) => log::error!("unable to read {} event: {e}", event.type_()),
        }
    }) as Box<dyn Fn(Event)>);
    if let Err(e) = target.add_event_listener_with_callback(name, listener.as_ref().unchecked_ref())
    {
        log::error!("unable to add {name} event listener: {:?}", e);
        return;
    }
    log::trace!("listening for {name}");
    listener.forget();
}
