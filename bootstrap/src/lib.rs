use gloo_console::error;
use wasm_bindgen::JsValue;
use web_sys::Element;

pub mod toast;

/// Removes each of `classes` from the element, logging any failure.
pub fn remove_classes<'a>(element: &Element, classes: impl IntoIterator<Item = &'a str>) {
    let class_list = element.class_list();
    for class in classes {
        if class.is_empty() {
            continue;
        }
        if let Err(e) = class_list.remove_1(class) {
            error!(format!("unable to remove {class} class from element: {:?}", e))
        }
    }
}

/// Adds a class to the element, ignoring empty class names.
pub fn add_class(element: &Element, class: &str) -> Result<(), JsValue> {
    if class.is_empty() {
        return Ok(());
    }
    element.class_list().add_1(class)
}
