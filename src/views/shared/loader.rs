use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::dom::ElementBuilder;

/// Spinner + caption
pub fn render_loader(text: &str) -> Result<Element, JsValue> {
    let spinner = ElementBuilder::new("div")?.class("loader-spinner").build();
    let caption = ElementBuilder::new("div")?.class("loader-text").text(text).build();
    let inner = ElementBuilder::new("div")?.child(spinner)?.child(caption)?.build();

    Ok(ElementBuilder::new("div")?
        .class("loader-container")
        .child(inner)?
        .build())
}
