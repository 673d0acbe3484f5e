// ============================================================================
// ELEMENT HELPERS
// ============================================================================

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlInputElement, HtmlSelectElement, Window};

pub fn window() -> Option<Window> {
    web_sys::window()
}

pub fn document() -> Option<Document> {
    window()?.document()
}

pub fn get_element_by_id(id: &str) -> Option<Element> {
    document()?.get_element_by_id(id)
}

pub fn create_element(tag: &str) -> Result<Element, JsValue> {
    document()
        .ok_or_else(|| JsValue::from_str("No document"))
        .and_then(|doc| doc.create_element(tag))
}

pub fn set_class_name(element: &Element, class: &str) {
    element.set_class_name(class);
}

pub fn set_text_content(element: &Element, text: &str) {
    element.set_text_content(Some(text));
}

/// Drop every child (and with them their listeners)
pub fn clear_children(element: &Element) {
    element.set_inner_html("");
}

pub fn append_child(parent: &Element, child: &Element) -> Result<(), JsValue> {
    parent.append_child(child).map(|_| ())
}

pub fn set_attribute(element: &Element, name: &str, value: &str) -> Result<(), JsValue> {
    element.set_attribute(name, value)
}

/// Boolean attributes (`disabled`, `selected`) are present or absent
pub fn toggle_attribute(element: &Element, name: &str, on: bool) -> Result<(), JsValue> {
    if on {
        element.set_attribute(name, "")
    } else {
        element.remove_attribute(name)
    }
}

/// Current value of an `<input>`, empty for any other element
pub fn input_value(target: Option<web_sys::EventTarget>) -> String {
    target
        .and_then(|t| t.dyn_into::<HtmlInputElement>().ok())
        .map(|input| input.value())
        .unwrap_or_default()
}

/// Current value of a `<select>`, empty for any other element
pub fn select_value(target: Option<web_sys::EventTarget>) -> String {
    target
        .and_then(|t| t.dyn_into::<HtmlSelectElement>().ok())
        .map(|select| select.value())
        .unwrap_or_default()
}
