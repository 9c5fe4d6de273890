use crate::config::Messages;
use crate::events::{RequestEvent, Response};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Severity {
    #[default]
    Success,
    Error,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    pub title: String,
    pub message: String,
    pub severity: Severity,
}

impl Toast {
    pub fn success(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            message: message.into(),
            severity: Severity::Success,
        }
    }

    pub fn error(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            message: message.into(),
            severity: Severity::Error,
        }
    }

    /// The title as shown: error toasts always carry the fixed error title.
    pub fn display_title<'a>(&'a self, messages: &'a Messages) -> &'a str {
        match self.severity {
            Severity::Success => &self.title,
            Severity::Error => &messages.error_title,
        }
    }
}

/// Decides which toast, if any, a finished request produces.
pub fn notification_for(event: &RequestEvent, messages: &Messages) -> Option<Toast> {
    match event {
        RequestEvent::Completed {
            successful: true,
            verb,
            response,
        } => {
            if verb != "post" {
                return None;
            }
            let message = response
                .message
                .as_deref()
                .filter(|m| !m.is_empty())
                .unwrap_or(messages.success_fallback.as_str());
            Some(Toast::success(&messages.success_title, message))
        }
        RequestEvent::Completed {
            successful: false,
            response,
            ..
        } => Some(Toast::error(
            &messages.error_title,
            body_or(response, &messages.error_fallback),
        )),
        RequestEvent::TransportError { response, .. } => Some(Toast::error(
            &messages.transport_error_title,
            body_or(response, &messages.transport_error_fallback),
        )),
    }
}

/// The console line written for a request that never reached the server.
pub fn diagnostic(event: &RequestEvent) -> Option<String> {
    match event {
        RequestEvent::TransportError { detail, .. } => {
            Some(format!("htmx response error: {detail}"))
        }
        RequestEvent::Completed { .. } => None,
    }
}

fn body_or<'a>(response: &'a Response, fallback: &'a str) -> &'a str {
    if response.body.is_empty() {
        fallback
    } else {
        &response.body
    }
}

#[cfg(test)]
mod tests {
    use super::{diagnostic, notification_for, Severity, Toast};
    use crate::config::Messages;
    use crate::events::{RequestEvent, Response};

    fn completed(successful: bool, verb: &str, message: Option<&str>, body: &str) -> RequestEvent {
        RequestEvent::Completed {
            successful,
            verb: verb.to_string(),
            response: Response {
                status: None,
                message: message.map(str::to_string),
                body: body.to_string(),
            },
        }
    }

    fn transport_error(body: &str) -> RequestEvent {
        RequestEvent::TransportError {
            detail: "Response Status Error Code 502 from /items".to_string(),
            response: Response {
                body: body.to_string(),
                ..Response::default()
            },
        }
    }

    #[test]
    fn successful_post_uses_message_header() {
        let messages = Messages::default();
        let toast = notification_for(&completed(true, "post", Some("Saved"), ""), &messages)
            .expect("expected a toast");
        assert_eq!(Toast::success("Успех", "Saved"), toast);
        assert_eq!("Успех", toast.display_title(&messages));
    }

    #[test]
    fn successful_post_without_header_uses_fallback() {
        let messages = Messages::default();
        let toast = notification_for(&completed(true, "post", None, "<tr></tr>"), &messages)
            .expect("expected a toast");
        assert_eq!("Операция выполнена.", toast.message);
        assert_eq!(Severity::Success, toast.severity);
    }

    #[test]
    fn only_lowercase_post_is_announced() {
        let toast = notification_for(&completed(true, "POST", None, ""), &Messages::default());
        assert_eq!(None, toast);
    }

    #[test]
    fn successful_non_post_is_silent() {
        let messages = Messages::default();
        for verb in ["get", "put", "patch", "delete"] {
            assert_eq!(
                None,
                notification_for(&completed(true, verb, Some("Saved"), ""), &messages)
            );
        }
    }

    #[test]
    fn failed_request_shows_body() {
        let messages = Messages::default();
        let toast = notification_for(&completed(false, "post", None, "Disk full"), &messages)
            .expect("expected a toast");
        assert_eq!("Disk full", toast.message);
        assert_eq!(Severity::Error, toast.severity);
        assert_eq!("Ошибка", toast.display_title(&messages));
    }

    #[test]
    fn failed_request_ignores_message_header() {
        let toast = notification_for(
            &completed(false, "get", Some("Saved"), "Not found"),
            &Messages::default(),
        )
        .expect("expected a toast");
        assert_eq!("Not found", toast.message);
    }

    #[test]
    fn failed_request_without_body_uses_fallback() {
        let toast = notification_for(&completed(false, "delete", None, ""), &Messages::default())
            .expect("expected a toast");
        assert_eq!("Произошла ошибка при выполнении операции.", toast.message);
    }

    #[test]
    fn transport_error_shows_body_or_fallback() {
        let messages = Messages::default();
        let toast = notification_for(&transport_error("Bad gateway"), &messages)
            .expect("expected a toast");
        assert_eq!("Bad gateway", toast.message);
        assert_eq!("Ошибка запроса", toast.title);
        assert_eq!("Ошибка", toast.display_title(&messages));

        let toast =
            notification_for(&transport_error(""), &messages).expect("expected a toast");
        assert_eq!("Ошибка сети или сервера.", toast.message);
        assert_eq!(Severity::Error, toast.severity);
    }

    #[test]
    fn only_transport_errors_are_diagnosed() {
        assert_eq!(
            Some("htmx response error: Response Status Error Code 502 from /items".to_string()),
            diagnostic(&transport_error(""))
        );
        assert_eq!(None, diagnostic(&completed(false, "post", None, "Disk full")));
    }
}
