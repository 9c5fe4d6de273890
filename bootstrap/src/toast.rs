use serde::{Deserialize, Serialize};
use wasm_bindgen::prelude::*;
use web_sys::Element;

/// Shows the toast rooted at `element`, creating the Bootstrap instance on first use.
pub fn show(element: &Element, options: &Options) -> Result<(), JsValue> {
    let options = JsValue::from_serde(options).map_err(|e| JsValue::from_str(&e.to_string()))?;
    let toast = Toast::get_or_create_instance(element, options)?;
    toast.show();
    Ok(())
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Options {
    /// Applies a CSS fade transition to the toast. Default is true.
    pub animation: bool,
    /// Automatically hides the toast after the delay. Default is true.
    pub autohide: bool,
    /// Delay in milliseconds before hiding the toast. Default is 5000.
    pub delay: u32,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            animation: true,
            autohide: true,
            delay: 5000,
        }
    }
}

/// Bootstrap's contextual background helpers, as applied to a toast container.
#[derive(Clone, Debug, PartialEq)]
pub enum Color {
    Success,
    Danger,
}

impl Color {
    pub fn as_str(&self) -> &str {
        match self {
            Color::Success => "text-bg-success",
            Color::Danger => "text-bg-danger",
        }
    }
}

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = bootstrap)]
    type Toast;

    #[wasm_bindgen(catch, static_method_of = Toast, js_namespace = bootstrap, js_class = "Toast", js_name = getOrCreateInstance)]
    fn get_or_create_instance(element: &Element, options: JsValue) -> Result<Toast, JsValue>;

    #[wasm_bindgen(method)]
    fn show(this: &Toast);
}
