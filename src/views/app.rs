// ============================================================================
// APP VIEW - shell: header, active page, toasts
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::dom::{append_child, ElementBuilder};
use crate::state::{ActiveView, AppState};
use crate::views::shared::{render_header, render_loader, render_toasts};
use crate::views::{render_login, render_pet_details, render_pet_edit, render_pet_list};

pub fn render_app(state: &AppState) -> Result<Element, JsValue> {
    let shell = ElementBuilder::new("div")?.class("app-shell").build();

    if state.current_route().shows_header() {
        if let Some(session) = state.session.current() {
            append_child(&shell, &render_header(state, &session)?)?;
        }
    }

    let page = match state.active_view() {
        Some(ActiveView::Login(vm)) => render_login(state, &vm)?,
        Some(ActiveView::List(vm)) => render_pet_list(&vm)?,
        Some(ActiveView::Details(vm)) => render_pet_details(&vm)?,
        Some(ActiveView::Edit(vm)) => render_pet_edit(&vm)?,
        None => render_loader("Loading...")?,
    };
    let main = ElementBuilder::new("main")?.class("app-main").child(page)?.build();

    append_child(&shell, &main)?;
    append_child(&shell, &render_toasts(state)?)?;
    Ok(shell)
}
