// ============================================================================
// TOASTS - stack in the corner, each one dismissed by its own timer
// ============================================================================

use gloo_timers::callback::Timeout;
use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::dom::{append_child, button, on_click, ElementBuilder};
use crate::state::{AppState, Notification, NotificationCenter};

pub fn render_toasts(state: &AppState) -> Result<Element, JsValue> {
    let stack = ElementBuilder::new("div")?
        .class("toast-stack")
        .attr("aria-live", "polite")?
        .build();

    for notification in state.notifications.active() {
        append_child(&stack, &render_toast(&state.notifications, &notification)?)?;
    }

    // Arm one timer per new toast. Redraws do not re-arm.
    let duration = state.config.ui.toast_duration_ms;
    for id in state.notifications.take_unscheduled() {
        let notifications = state.notifications.clone();
        Timeout::new(duration, move || notifications.dismiss(id)).forget();
    }

    Ok(stack)
}

fn render_toast(notifications: &NotificationCenter, notification: &Notification) -> Result<Element, JsValue> {
    let text = ElementBuilder::new("span")?
        .class("toast-text")
        .text(&notification.text)
        .build();

    let close = button("toast-close", "×")?;
    {
        let notifications = notifications.clone();
        let id = notification.id;
        on_click(&close, move |_| notifications.dismiss(id))?;
    }

    Ok(ElementBuilder::new("div")?
        .class(&format!("toast {}", notification.kind.css_class()))
        .attr("role", "status")?
        .child(text)?
        .child(close)?
        .build())
}
