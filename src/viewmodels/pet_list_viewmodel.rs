// ============================================================================
// PET LIST VIEWMODEL - status filter, name search, pagination
// ============================================================================

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use crate::error::ApiError;
use crate::models::{dedup_by_id, filter_by_name, Pet, PetStatus};
use crate::services::PetApi;
use crate::state::{FetchState, LoadTicket, MountFlag, NotificationCenter, ReactiveState};

const FETCH_ERROR: &str = "Failed to fetch pets";

/// One page of the filtered list
#[derive(Debug, Clone, PartialEq)]
pub struct PetPage {
    pub pets: Vec<Pet>,
    /// Zero-based, clamped to the last page
    pub page: usize,
    pub page_count: usize,
    pub total: usize,
    pub first: usize,
    pub last: usize,
}

impl PetPage {
    /// `"11-20 of 25 pets"`
    pub fn summary(&self) -> String {
        if self.total == 0 {
            "0 pets".to_string()
        } else {
            format!("{}-{} of {} pets", self.first, self.last, self.total)
        }
    }

    pub fn has_previous(&self) -> bool {
        self.page > 0
    }

    pub fn has_next(&self) -> bool {
        self.page + 1 < self.page_count
    }
}

pub fn paginate(items: &[&Pet], page: usize, page_size: usize) -> PetPage {
    let page_size = page_size.max(1);
    let total = items.len();
    let page_count = total.div_ceil(page_size).max(1);
    let page = page.min(page_count - 1);
    let start = (page * page_size).min(total);
    let end = (start + page_size).min(total);

    PetPage {
        pets: items[start..end].iter().map(|p| (*p).clone()).collect(),
        page,
        page_count,
        total,
        first: if total == 0 { 0 } else { start + 1 },
        last: end,
    }
}

pub struct PetListViewModel<A> {
    api: Rc<A>,
    notifications: NotificationCenter,
    mount: MountFlag,
    status: Rc<Cell<PetStatus>>,
    query: Rc<RefCell<String>>,
    page: Rc<Cell<usize>>,
    page_size: usize,
    state: ReactiveState<FetchState<Vec<Pet>>>,
}

impl<A> Clone for PetListViewModel<A> {
    fn clone(&self) -> Self {
        Self {
            api: self.api.clone(),
            notifications: self.notifications.clone(),
            mount: self.mount.clone(),
            status: self.status.clone(),
            query: self.query.clone(),
            page: self.page.clone(),
            page_size: self.page_size,
            state: self.state.clone(),
        }
    }
}

impl<A: PetApi> PetListViewModel<A> {
    pub fn new(api: Rc<A>, notifications: NotificationCenter, page_size: usize) -> Self {
        Self {
            api,
            notifications,
            mount: MountFlag::new(),
            status: Rc::new(Cell::new(PetStatus::Available)),
            query: Rc::new(RefCell::new(String::new())),
            page: Rc::new(Cell::new(0)),
            page_size,
            state: ReactiveState::new(FetchState::Idle),
        }
    }

    pub fn state(&self) -> FetchState<Vec<Pet>> {
        self.state.get()
    }

    pub fn status(&self) -> PetStatus {
        self.status.get()
    }

    pub fn query(&self) -> String {
        self.query.borrow().clone()
    }

    pub fn subscribe<F: Fn() + 'static>(&self, callback: F) {
        self.state.subscribe(callback);
    }

    pub fn dismount(&self) {
        self.mount.dismount();
    }

    pub fn begin_load(&self) -> LoadTicket {
        self.state.set(FetchState::Loading);
        self.mount.ticket()
    }

    /// Applies the result if the view is still mounted. Returns whether it was applied.
    pub fn complete_load(&self, ticket: &LoadTicket, result: Result<Vec<Pet>, ApiError>) -> bool {
        if !ticket.is_live() {
            log::debug!("🗑️ [PETS] list result arrived after dismount, dropped");
            return false;
        }
        match result {
            Ok(pets) => self.state.set(FetchState::Success(dedup_by_id(pets))),
            Err(e) => {
                log::error!("❌ [PETS] {}", e);
                self.notifications.error(e.user_message());
                self.state.set(FetchState::Error(FETCH_ERROR.to_string()));
            }
        }
        true
    }

    /// Mount, refresh and retry all go through here
    pub async fn load(&self) {
        let ticket = self.begin_load();
        let result = self.api.list_by_status(self.status.get()).await;
        self.complete_load(&ticket, result);
    }

    /// Switch status and refetch. Same status is a no-op.
    pub async fn change_status(&self, status: PetStatus) {
        if status == self.status.get() {
            return;
        }
        self.status.set(status);
        self.page.set(0);
        self.load().await;
    }

    /// No fetch, no notify: only the table is redrawn
    pub fn set_query(&self, query: &str) {
        *self.query.borrow_mut() = query.to_string();
        self.page.set(0);
    }

    pub fn set_page(&self, page: usize) {
        self.page.set(page);
    }

    /// Filtered + paginated view of the last successful payload
    pub fn visible(&self) -> Option<PetPage> {
        let state = self.state.borrow();
        let pets = state.data()?;
        let query = self.query.borrow();
        let matching = filter_by_name(pets, &query);
        let page = paginate(&matching, self.page.get(), self.page_size);
        self.page.set(page.page);
        Some(page)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{pet, FakePetApi};
    use futures::executor::{block_on, LocalPool};
    use futures::task::LocalSpawnExt;

    fn vm(api: &Rc<FakePetApi>) -> (PetListViewModel<FakePetApi>, NotificationCenter) {
        let notifications = NotificationCenter::new();
        (PetListViewModel::new(api.clone(), notifications.clone(), 10), notifications)
    }

    fn ids(state: &FetchState<Vec<Pet>>) -> Vec<i64> {
        state.data().map(|p| p.iter().map(|p| p.id).collect()).unwrap_or_default()
    }

    #[test]
    fn load_dedups_upstream_duplicates() {
        let api = Rc::new(FakePetApi::new());
        api.push_list(Ok(vec![
            pet(5, "Rex", PetStatus::Available),
            pet(2, "Max", PetStatus::Available),
            pet(5, "Rex again", PetStatus::Available),
            pet(9, "Bo", PetStatus::Available),
            pet(2, "Max again", PetStatus::Available),
        ]));
        let (vm, _) = vm(&api);

        block_on(vm.load());

        let state = vm.state();
        assert_eq!(ids(&state), vec![5, 2, 9]);
        assert_eq!(state.data().unwrap()[0].name, "Rex");
        assert_eq!(*api.list_calls.borrow(), vec![PetStatus::Available]);
    }

    #[test]
    fn failure_sets_error_state_and_toast() {
        let api = Rc::new(FakePetApi::new());
        api.push_list(Err(ApiError::Fetch { reason: "HTTP 500".into() }));
        let (vm, notifications) = vm(&api);

        block_on(vm.load());

        assert_eq!(vm.state(), FetchState::Error("Failed to fetch pets".into()));
        assert_eq!(notifications.active()[0].text, "Failed to fetch pets");
        assert!(vm.visible().is_none());

        api.push_list(Ok(vec![pet(1, "Rex", PetStatus::Available)]));
        block_on(vm.load());
        assert_eq!(ids(&vm.state()), vec![1]);
    }

    #[test]
    fn search_filters_without_refetching() {
        let api = Rc::new(FakePetApi::new());
        api.push_list(Ok(vec![
            pet(1, "Rex", PetStatus::Available),
            pet(2, "rexy", PetStatus::Available),
            pet(3, "Max", PetStatus::Available),
        ]));
        let (vm, _) = vm(&api);
        block_on(vm.load());

        vm.set_query("REX");
        let page = vm.visible().unwrap();
        assert_eq!(page.pets.iter().map(|p| p.id).collect::<Vec<_>>(), vec![1, 2]);

        vm.set_query("");
        assert_eq!(vm.visible().unwrap().total, 3);
        assert_eq!(api.list_calls.borrow().len(), 1);
    }

    #[test]
    fn changing_status_refetches_and_resets_page() {
        let api = Rc::new(FakePetApi::new());
        let (vm, _) = vm(&api);
        block_on(vm.load());
        vm.set_page(3);

        block_on(vm.change_status(PetStatus::Sold));
        block_on(vm.change_status(PetStatus::Sold));

        assert_eq!(*api.list_calls.borrow(), vec![PetStatus::Available, PetStatus::Sold]);
        assert_eq!(vm.status(), PetStatus::Sold);
        assert_eq!(vm.visible().unwrap().page, 0);
    }

    #[test]
    fn pagination_summary() {
        let pets: Vec<Pet> = (1..=25).map(|i| pet(i, "p", PetStatus::Available)).collect();
        let refs: Vec<&Pet> = pets.iter().collect();

        let second = paginate(&refs, 1, 10);
        assert_eq!(second.summary(), "11-20 of 25 pets");
        assert!(second.has_previous() && second.has_next());

        let clamped = paginate(&refs, 9, 10);
        assert_eq!(clamped.page, 2);
        assert_eq!(clamped.summary(), "21-25 of 25 pets");
        assert!(!clamped.has_next());

        let empty = paginate(&[], 0, 10);
        assert_eq!(empty.summary(), "0 pets");
        assert_eq!(empty.page_count, 1);
    }

    #[test]
    fn late_result_after_dismount_is_dropped() {
        let api = Rc::new(FakePetApi::new());
        api.push_list(Ok(vec![pet(1, "Stale", PetStatus::Available)]));
        let release = api.gate_next();
        let (old_view, notifications) = vm(&api);

        let mut pool = LocalPool::new();
        let task = old_view.clone();
        pool.spawner().spawn_local(async move { task.load().await }).unwrap();
        pool.run_until_stalled();
        assert!(old_view.state().is_loading());

        old_view.dismount();
        let (new_view, _) = vm(&api);
        api.push_list(Ok(vec![pet(2, "Fresh", PetStatus::Available)]));
        block_on(new_view.load());

        release.send(()).unwrap();
        pool.run_until_stalled();

        assert!(old_view.state().is_loading());
        assert_eq!(ids(&new_view.state()), vec![2]);
        assert!(notifications.active().is_empty());
    }

    #[test]
    fn overlapping_loads_last_completion_wins() {
        let api = Rc::new(FakePetApi::new());
        api.push_list(Ok(vec![pet(1, "first", PetStatus::Available)]));
        api.push_list(Ok(vec![pet(2, "second", PetStatus::Available)]));
        let first_gate = api.gate_next();
        let second_gate = api.gate_next();
        let (vm, _) = vm(&api);

        let mut pool = LocalPool::new();
        for _ in 0..2 {
            let task = vm.clone();
            pool.spawner().spawn_local(async move { task.load().await }).unwrap();
            pool.run_until_stalled();
        }
        assert!(vm.state().is_loading());

        second_gate.send(()).unwrap();
        pool.run_until_stalled();
        assert_eq!(ids(&vm.state()), vec![2]);

        first_gate.send(()).unwrap();
        pool.run_until_stalled();
        assert_eq!(ids(&vm.state()), vec![1]);
    }
}
