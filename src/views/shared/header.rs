// ============================================================================
// HEADER - title, signed-in identity, logout
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::app::navigate;
use crate::dom::{button, on_click, ElementBuilder};
use crate::models::Session;
use crate::state::{AppState, Route};

pub fn render_header(state: &AppState, session: &Session) -> Result<Element, JsValue> {
    let title = ElementBuilder::new("span")?
        .class("header-title")
        .text("Pet Store")
        .build();

    let identity = ElementBuilder::new("span")?
        .class("header-identity")
        .text(&session.identity)
        .build();

    let logout = button("btn-logout", "Logout")?;
    {
        let session = state.session.clone();
        on_click(&logout, move |_| {
            session.sign_out();
            navigate(Route::Login);
        })?;
    }

    let actions = ElementBuilder::new("div")?
        .class("header-actions")
        .child(identity)?
        .child(logout)?
        .build();

    let content = ElementBuilder::new("div")?
        .class("header-content")
        .child(title)?
        .child(actions)?
        .build();

    Ok(ElementBuilder::new("header")?
        .class("app-header")
        .child(content)?
        .build())
}
