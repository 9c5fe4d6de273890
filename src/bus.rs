use crate::config::Messages;
use crate::events::RequestEvent;
use crate::notifications::{diagnostic, notification_for};
use crate::presenter::Present;

pub trait Subscriber {
    fn handle(&self, event: &RequestEvent);
}

/// Delivers request events to a single subscriber, synchronously.
pub struct EventBus<S: Subscriber> {
    subscriber: S,
}

impl<S: Subscriber> EventBus<S> {
    pub fn new(subscriber: S) -> Self {
        Self { subscriber }
    }

    pub fn publish(&self, event: &RequestEvent) {
        self.subscriber.handle(event)
    }

    #[cfg(test)]
    pub(crate) fn subscriber(&self) -> &S {
        &self.subscriber
    }
}

/// Turns request events into toasts.
pub struct Notifier<P: Present> {
    presenter: P,
    messages: Messages,
}

impl<P: Present> Notifier<P> {
    pub fn new(presenter: P, messages: Messages) -> Self {
        Self {
            presenter,
            messages,
        }
    }

    #[cfg(test)]
    pub(crate) fn presenter(&self) -> &P {
        &self.presenter
    }
}

impl<P: Present> Subscriber for Notifier<P> {
    fn handle(&self, event: &RequestEvent) {
        if let RequestEvent::Completed {
            successful,
            verb,
            response,
        } = event
        {
            log::trace!(
                "{verb} request completed (successful: {successful}, status: {:?})",
                response.status
            );
        }

        if let Some(line) = diagnostic(event) {
            log::error!("{line}");
        }

        match notification_for(event, &self.messages) {
            Some(toast) => self.presenter.present(&toast),
            None => log::trace!("no notification for event"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{EventBus, Notifier};
    use crate::config::Messages;
    use crate::events::{RequestEvent, Response};
    use crate::notifications::{Severity, Toast};
    use crate::presenter::Present;
    use std::cell::RefCell;

    #[derive(Default)]
    struct Recorder {
        toasts: RefCell<Vec<Toast>>,
    }

    impl Present for Recorder {
        fn present(&self, toast: &Toast) {
            self.toasts.borrow_mut().push(toast.clone())
        }
    }

    fn bus() -> EventBus<Notifier<Recorder>> {
        EventBus::new(Notifier::new(Recorder::default(), Messages::default()))
    }

    fn shown(bus: &EventBus<Notifier<Recorder>>) -> Vec<Toast> {
        bus.subscriber().presenter().toasts.borrow().clone()
    }

    #[test]
    fn presents_saved_post() {
        let bus = bus();
        bus.publish(&RequestEvent::Completed {
            successful: true,
            verb: "post".to_string(),
            response: Response {
                status: Some("success".to_string()),
                message: Some("Saved".to_string()),
                body: String::new(),
            },
        });
        assert_eq!(vec![Toast::success("Успех", "Saved")], shown(&bus));
    }

    #[test]
    fn ignores_successful_get() {
        let bus = bus();
        bus.publish(&RequestEvent::Completed {
            successful: true,
            verb: "get".to_string(),
            response: Response::default(),
        });
        assert!(shown(&bus).is_empty());
    }

    #[test]
    fn later_events_replace_earlier_toasts() {
        let bus = bus();
        bus.publish(&RequestEvent::Completed {
            successful: false,
            verb: "post".to_string(),
            response: Response {
                body: "Disk full".to_string(),
                ..Response::default()
            },
        });
        bus.publish(&RequestEvent::TransportError {
            detail: "timeout".to_string(),
            response: Response::default(),
        });

        let toasts = shown(&bus);
        assert_eq!(2, toasts.len());
        assert_eq!("Disk full", toasts[0].message);
        assert_eq!("Ошибка сети или сервера.", toasts[1].message);
        assert!(toasts.iter().all(|t| t.severity == Severity::Error));
    }
}
