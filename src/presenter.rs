use crate::config::{ElementIds, Messages, Styles};
use crate::error::Error;
use crate::notifications::Toast;
use bootstrap::toast::Options;
use web_sys::{Document, Element};

/// Something that can put a toast in front of the user.
pub trait Present {
    fn present(&self, toast: &Toast);
}

/// The three page elements a toast is rendered into.
#[derive(Clone, Debug)]
pub struct ToastElements {
    pub container: Element,
    pub title: Element,
    pub body: Element,
}

impl ToastElements {
    pub fn find(document: &Document, ids: &ElementIds) -> Result<Self, Error> {
        let find = |id: &str| {
            document
                .get_element_by_id(id)
                .ok_or_else(|| Error::MissingElement(id.to_string()))
        };
        Ok(Self {
            container: find(&ids.container)?,
            title: find(&ids.title)?,
            body: find(&ids.body)?,
        })
    }
}

/// Renders toasts into a Bootstrap toast already present in the page.
pub struct DomPresenter {
    elements: ToastElements,
    messages: Messages,
    styles: Styles,
    options: Options,
}

impl DomPresenter {
    pub fn new(elements: ToastElements, messages: Messages, styles: Styles, options: Options) -> Self {
        Self {
            elements,
            messages,
            styles,
            options,
        }
    }
}

impl Present for DomPresenter {
    fn present(&self, toast: &Toast) {
        let ToastElements {
            container,
            title,
            body,
        } = &self.elements;

        title.set_text_content(Some(toast.display_title(&self.messages)));
        body.set_text_content(Some(&toast.message));

        bootstrap::remove_classes(container, self.styles.all());
        if let Err(e) = bootstrap::add_class(container, self.styles.class(toast.severity)) {
            log::error!("unable to style toast: {:?}", e)
        }

        if let Err(e) = bootstrap::toast::show(container, &self.options) {
            log::error!("unable to show toast: {:?}", e)
        }
    }
}
