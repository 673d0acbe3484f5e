// ============================================================================
// EVENT HANDLING
// ============================================================================
// Every listener is leaked with forget(): the browser drops the element on a
// redraw but the boxed Rust closure stays allocated. Accepted for a small admin
// page. Window listeners are registered once from lib.rs.
// ============================================================================

use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Event, EventTarget, InputEvent, MouseEvent};

/// Attach `handler` for `event_type` on any event target
pub fn listen<F>(target: &EventTarget, event_type: &str, handler: F) -> Result<(), JsValue>
where
    F: FnMut(Event) + 'static,
{
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
    target.add_event_listener_with_callback(event_type, closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}

pub fn on_click<F>(element: &EventTarget, handler: F) -> Result<(), JsValue>
where
    F: FnMut(MouseEvent) + 'static,
{
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(MouseEvent)>);
    element.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}

pub fn on_input<F>(element: &EventTarget, handler: F) -> Result<(), JsValue>
where
    F: FnMut(InputEvent) + 'static,
{
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(InputEvent)>);
    element.add_event_listener_with_callback("input", closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}

/// `<select>` changes
pub fn on_change<F>(element: &EventTarget, handler: F) -> Result<(), JsValue>
where
    F: FnMut(Event) + 'static,
{
    listen(element, "change", handler)
}

/// Form submit with the browser's page reload suppressed
pub fn on_submit<F>(form: &EventTarget, mut handler: F) -> Result<(), JsValue>
where
    F: FnMut() + 'static,
{
    listen(form, "submit", move |e: Event| {
        e.prevent_default();
        handler();
    })
}
