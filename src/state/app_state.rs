// ============================================================================
// APP STATE - everything the shell and the views share
// ============================================================================

use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

use crate::config::AppConfig;
use crate::services::{ApiClient, Authenticator, StaticCredentials};
use crate::state::{AuthGate, GateDecision, NotificationCenter, Route, SessionContext, SessionStore};
use crate::utils::storage::KeyValueStorage;
use crate::viewmodels::{LoginViewModel, PetDetailsViewModel, PetEditViewModel, PetListViewModel};

type Subscribers = RefCell<Vec<Rc<dyn Fn()>>>;

/// The controller behind the page currently on screen
#[derive(Clone)]
pub enum ActiveView {
    Login(LoginViewModel),
    List(PetListViewModel<ApiClient>),
    Details(PetDetailsViewModel<ApiClient>),
    Edit(PetEditViewModel<ApiClient>),
}

impl ActiveView {
    /// Late results for this view are dropped from now on
    pub fn dismount(&self) {
        match self {
            ActiveView::Login(vm) => vm.dismount(),
            ActiveView::List(vm) => vm.dismount(),
            ActiveView::Details(vm) => vm.dismount(),
            ActiveView::Edit(vm) => vm.dismount(),
        }
    }

    fn subscribe<F: Fn() + 'static>(&self, callback: F) {
        match self {
            ActiveView::Login(vm) => vm.subscribe(callback),
            ActiveView::List(vm) => vm.subscribe(callback),
            ActiveView::Details(vm) => vm.subscribe(callback),
            ActiveView::Edit(vm) => vm.subscribe(callback),
        }
    }
}

#[derive(Clone)]
pub struct AppState {
    pub config: Rc<AppConfig>,
    pub session: SessionContext,
    pub notifications: NotificationCenter,
    pub gate: AuthGate,
    pub api: Rc<ApiClient>,
    pub authenticator: Rc<dyn Authenticator>,

    pub route: Rc<Cell<Route>>,
    pub active_view: Rc<RefCell<Option<ActiveView>>>,

    // Re-render callbacks registered by the shell
    change_subscribers: Rc<Subscribers>,
}

impl AppState {
    pub fn new(config: AppConfig, storage: Rc<dyn KeyValueStorage>) -> Self {
        let session = SessionContext::init(SessionStore::new(storage, config.session_storage_key.clone()));
        let state = Self {
            session,
            notifications: NotificationCenter::new(),
            gate: AuthGate::new(config.auth.redirect_authenticated_login),
            api: Rc::new(ApiClient::with_base_url(&config.api_base_url)),
            authenticator: Rc::new(StaticCredentials::from_config(&config.auth)),
            route: Rc::new(Cell::new(Route::PetList)),
            active_view: Rc::new(RefCell::new(None)),
            change_subscribers: Rc::new(RefCell::new(Vec::new())),
            config: Rc::new(config),
        };

        state.session.subscribe(state.change_notifier());
        state.notifications.subscribe(state.change_notifier());
        state
    }

    pub fn subscribe_to_changes<F: Fn() + 'static>(&self, callback: F) {
        self.change_subscribers.borrow_mut().push(Rc::new(callback));
    }

    pub fn notify_change(&self) {
        notify(&self.change_subscribers);
    }

    /// Weak handle for viewmodels, so a dismounted view does not keep the state alive
    fn change_notifier(&self) -> impl Fn() + 'static {
        let subscribers: Weak<Subscribers> = Rc::downgrade(&self.change_subscribers);
        move || {
            if let Some(subscribers) = subscribers.upgrade() {
                notify(&subscribers);
            }
        }
    }

    pub fn current_route(&self) -> Route {
        self.route.get()
    }

    pub fn active_view(&self) -> Option<ActiveView> {
        self.active_view.borrow().clone()
    }

    /// Gate check against the live session
    pub fn resolve(&self, requested: Route) -> GateDecision {
        let session = self.session.current();
        self.gate.decide(session.as_ref(), requested)
    }

    /// Drop the controller on screen. Its pending results are discarded.
    pub fn unmount(&self) {
        let previous = self.active_view.borrow_mut().take();
        if let Some(previous) = previous {
            previous.dismount();
        }
    }

    /// Re-check the gate for the route on screen. On a redirect the current
    /// controller is unmounted and the target is returned.
    pub fn enforce_gate(&self) -> Option<Route> {
        match self.resolve(self.current_route()) {
            GateDecision::Render(_) => None,
            GateDecision::Redirect(target) => {
                self.unmount();
                Some(target)
            }
        }
    }

    /// Swap the controller for `route`. The previous one is dismounted first.
    pub fn mount(&self, route: Route) -> ActiveView {
        self.unmount();

        let view = match route {
            Route::Login => ActiveView::Login(LoginViewModel::new(
                self.session.clone(),
                self.authenticator.clone(),
                self.notifications.clone(),
            )),
            Route::PetList => ActiveView::List(PetListViewModel::new(
                self.api.clone(),
                self.notifications.clone(),
                self.config.ui.list_page_size,
            )),
            Route::PetDetails(id) => {
                ActiveView::Details(PetDetailsViewModel::new(self.api.clone(), self.notifications.clone(), id))
            }
            Route::PetEdit(id) => {
                ActiveView::Edit(PetEditViewModel::new(self.api.clone(), self.notifications.clone(), id))
            }
        };
        view.subscribe(self.change_notifier());

        log::info!("🧭 [APP] mounted {}", route);
        self.route.set(route);
        *self.active_view.borrow_mut() = Some(view.clone());
        view
    }
}

fn notify(subscribers: &Subscribers) {
    let snapshot: Vec<Rc<dyn Fn()>> = subscribers.borrow().clone();
    for callback in snapshot {
        callback();
    }
}
