// ============================================================================
// ELEMENT BUILDER
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::dom::{append_child, create_element, set_attribute, set_class_name, set_text_content, toggle_attribute};

pub struct ElementBuilder {
    element: Element,
}

impl ElementBuilder {
    pub fn new(tag: &str) -> Result<Self, JsValue> {
        Ok(Self {
            element: create_element(tag)?,
        })
    }

    /// Replaces every class
    pub fn class(self, class: &str) -> Self {
        set_class_name(&self.element, class);
        self
    }

    pub fn id(self, id: &str) -> Result<Self, JsValue> {
        set_attribute(&self.element, "id", id)?;
        Ok(self)
    }

    pub fn text(self, text: &str) -> Self {
        set_text_content(&self.element, text);
        self
    }

    pub fn attr(self, name: &str, value: &str) -> Result<Self, JsValue> {
        set_attribute(&self.element, name, value)?;
        Ok(self)
    }

    pub fn flag(self, name: &str, on: bool) -> Result<Self, JsValue> {
        toggle_attribute(&self.element, name, on)?;
        Ok(self)
    }

    pub fn child(self, child: Element) -> Result<Self, JsValue> {
        append_child(&self.element, &child)?;
        Ok(self)
    }

    pub fn children<I>(self, children: I) -> Result<Self, JsValue>
    where
        I: IntoIterator<Item = Element>,
    {
        for child in children {
            append_child(&self.element, &child)?;
        }
        Ok(self)
    }

    pub fn build(self) -> Element {
        self.element
    }
}

/// `<a href="#/...">`: hash links go through the router
pub fn link(href: &str, class: &str, text: &str) -> Result<Element, JsValue> {
    Ok(ElementBuilder::new("a")?
        .class(class)
        .attr("href", href)?
        .text(text)
        .build())
}

pub fn button(class: &str, text: &str) -> Result<Element, JsValue> {
    Ok(ElementBuilder::new("button")?
        .class(class)
        .attr("type", "button")?
        .text(text)
        .build())
}
