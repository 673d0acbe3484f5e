// ============================================================================
// APP - owns the state, follows the hash, draws into #app
// ============================================================================

use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::Element;

use crate::config::CONFIG;
use crate::dom::{append_child, clear_children, get_element_by_id, window};
use crate::state::{ActiveView, AppState, GateDecision, Route};
use crate::utils::storage::default_storage;
use crate::views::render_app;

pub struct App {
    state: AppState,
    root: Element,
}

impl App {
    pub fn new() -> Result<Self, JsValue> {
        let root = get_element_by_id("app").ok_or_else(|| JsValue::from_str("No #app element found"))?;

        let state = AppState::new(CONFIG.clone(), default_storage());

        // Bursts of changes collapse into one redraw
        state.subscribe_to_changes(crate::schedule_rerender);

        Ok(Self { state, root })
    }

    /// Gate the requested route, then mount its controller and start its load
    pub fn handle_route_change(&self) -> Result<(), JsValue> {
        let requested = Route::from_hash(&current_hash());

        match self.state.resolve(requested) {
            GateDecision::Redirect(target) => {
                log::info!("🔒 [ROUTER] {} -> {}", requested, target);
                // The follow-up hashchange mounts the target
                self.state.unmount();
                navigate(target);
            }
            GateDecision::Render(route) => {
                let view = self.state.mount(route);
                start(view);
                crate::schedule_rerender();
            }
        }
        Ok(())
    }

    /// Full redraw of #app from state
    pub fn render(&self) -> Result<(), JsValue> {
        // Session went away (or arrived) under the current page: nothing of
        // the old view is drawn, only the loader until the hashchange lands
        if let Some(target) = self.state.enforce_gate() {
            navigate(target);
        }

        clear_children(&self.root);
        let view = render_app(&self.state)?;
        append_child(&self.root, &view)
    }
}

/// Kick off the initial load of a freshly mounted controller
fn start(view: ActiveView) {
    match view {
        ActiveView::Login(_) => {}
        ActiveView::List(vm) => spawn_local(async move { vm.load().await }),
        ActiveView::Details(vm) => spawn_local(async move { vm.load().await }),
        ActiveView::Edit(vm) => spawn_local(async move { vm.load().await }),
    }
}

pub fn current_hash() -> String {
    window()
        .and_then(|w| w.location().hash().ok())
        .unwrap_or_default()
}

/// Route change by hash. The hashchange listener does the rest.
pub fn navigate(route: Route) {
    let Some(win) = window() else {
        return;
    };
    if let Err(e) = win.location().set_hash(&route.to_hash()) {
        log::error!("❌ [ROUTER] could not navigate to {}: {:?}", route, e);
    }
}
