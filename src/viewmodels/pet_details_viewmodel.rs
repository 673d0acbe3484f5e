use std::rc::Rc;

use crate::error::ApiError;
use crate::models::Pet;
use crate::services::PetApi;
use crate::state::{FetchState, LoadTicket, MountFlag, NotificationCenter, ReactiveState};

const LOAD_ERROR: &str = "Could not load pet details. Please try again.";

/// Read-only view of one pet
pub struct PetDetailsViewModel<A> {
    api: Rc<A>,
    notifications: NotificationCenter,
    mount: MountFlag,
    pet_id: i64,
    state: ReactiveState<FetchState<Pet>>,
}

impl<A> Clone for PetDetailsViewModel<A> {
    fn clone(&self) -> Self {
        Self {
            api: self.api.clone(),
            notifications: self.notifications.clone(),
            mount: self.mount.clone(),
            pet_id: self.pet_id,
            state: self.state.clone(),
        }
    }
}

impl<A: PetApi> PetDetailsViewModel<A> {
    pub fn new(api: Rc<A>, notifications: NotificationCenter, pet_id: i64) -> Self {
        Self {
            api,
            notifications,
            mount: MountFlag::new(),
            pet_id,
            state: ReactiveState::new(FetchState::Idle),
        }
    }

    pub fn pet_id(&self) -> i64 {
        self.pet_id
    }

    pub fn state(&self) -> FetchState<Pet> {
        self.state.get()
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

    pub fn complete_load(&self, ticket: &LoadTicket, result: Result<Pet, ApiError>) -> bool {
        if !ticket.is_live() {
            log::debug!("🗑️ [DETAILS] pet {} arrived after dismount, dropped", self.pet_id);
            return false;
        }
        match result {
            Ok(pet) => self.state.set(FetchState::Success(pet)),
            Err(e) => {
                log::error!("❌ [DETAILS] {}", e);
                self.notifications.error(e.user_message());
                self.state.set(FetchState::Error(LOAD_ERROR.to_string()));
            }
        }
        true
    }

    /// Mount and retry
    pub async fn load(&self) {
        let ticket = self.begin_load();
        let result = self.api.get_by_id(self.pet_id).await;
        self.complete_load(&ticket, result);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::PetStatus;
    use crate::test_support::{pet, FakePetApi};
    use futures::executor::block_on;

    #[test]
    fn loads_the_requested_pet() {
        let api = Rc::new(FakePetApi::new());
        api.push_get(Ok(pet(7, "Rex", PetStatus::Pending)));
        let vm = PetDetailsViewModel::new(api.clone(), NotificationCenter::new(), 7);

        assert_eq!(vm.state(), FetchState::Idle);
        block_on(vm.load());
        assert_eq!(vm.state().data().map(|p| p.name.as_str()), Some("Rex"));
    }

    #[test]
    fn not_found_then_manual_retry() {
        let api = Rc::new(FakePetApi::new());
        let notifications = NotificationCenter::new();
        let vm = PetDetailsViewModel::new(api.clone(), notifications.clone(), 404);

        block_on(vm.load());
        assert_eq!(vm.state().error(), Some(LOAD_ERROR));
        assert_eq!(notifications.active()[0].text, "Could not load pet details");
        assert_eq!(api.get_calls.get(), 1);

        api.push_get(Ok(pet(404, "Found", PetStatus::Sold)));
        block_on(vm.load());
        assert!(vm.state().data().is_some());
        assert_eq!(api.get_calls.get(), 2);
    }

    #[test]
    fn dismounted_view_ignores_completion() {
        let api = Rc::new(FakePetApi::new());
        let vm = PetDetailsViewModel::new(api, NotificationCenter::new(), 1);
        let ticket = vm.begin_load();
        vm.dismount();

        assert!(!vm.complete_load(&ticket, Ok(pet(1, "Rex", PetStatus::Available))));
        assert!(vm.state().is_loading());
    }
}
