// ============================================================================
// PET STORE ADMIN - Rust/WASM, MVVM
// ============================================================================
// - Views: functions that build DOM from state
// - ViewModels: per-page state + logic, one mounted at a time
// - Services: remote API and credential check only
// - State: Rc<RefCell> state, session context, router, toasts
// - Models: shapes shared with the pet API
// ============================================================================

mod app;
mod config;
mod dom;
mod error;
mod models;
mod services;
mod state;
mod utils;
mod viewmodels;
mod views;

#[cfg(test)]
mod test_support;

use std::cell::{Cell, RefCell};

use gloo_timers::callback::Timeout;
use wasm_bindgen::prelude::*;

use crate::app::App;
use crate::config::CONFIG;

thread_local! {
    static APP: RefCell<Option<App>> = const { RefCell::new(None) };
    static RENDER_PENDING: Cell<bool> = const { Cell::new(false) };
}

#[wasm_bindgen(start)]
pub fn main() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::new(CONFIG.log_level()));
    log::info!("🚀 [APP] Pet Store Admin starting against {}", CONFIG.api_base_url);

    let app = App::new()?;
    APP.with(|cell| *cell.borrow_mut() = Some(app));

    // Registered once for the lifetime of the page
    if let Some(win) = web_sys::window() {
        dom::listen(&win, "hashchange", |_| handle_route_change())?;
    }

    handle_route_change();
    Ok(())
}

fn handle_route_change() {
    APP.with(|cell| match cell.borrow().as_ref() {
        Some(app) => {
            if let Err(e) = app.handle_route_change() {
                log::error!("❌ [ROUTER] {:?}", e);
            }
        }
        None => log::warn!("⚠️ [ROUTER] app not initialised"),
    });
}

/// Immediate full redraw
pub fn rerender_app() {
    APP.with(|cell| match cell.borrow().as_ref() {
        Some(app) => {
            if let Err(e) = app.render() {
                log::error!("❌ [RERENDER] {:?}", e);
            }
        }
        None => log::warn!("⚠️ [RERENDER] app not initialised"),
    });
}

/// Redraw on the next tick. Calls made before it fires are merged.
pub fn schedule_rerender() {
    if RENDER_PENDING.with(|pending| pending.replace(true)) {
        return;
    }
    Timeout::new(0, || {
        RENDER_PENDING.with(|pending| pending.set(false));
        rerender_app();
    })
    .forget();
}
