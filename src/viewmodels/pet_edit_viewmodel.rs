// ============================================================================
// PET EDIT VIEWMODEL - load, form, validate, merge, full-record PUT
// ============================================================================
// The initial load and the save are tracked separately: saving never brings
// back the loading skeleton.
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;

use crate::error::{ApiError, ValidationError};
use crate::models::{Category, Pet, PetStatus};
use crate::services::PetApi;
use crate::state::{FetchState, LoadTicket, MountFlag, NotificationCenter, ReactiveState};

const LOAD_ERROR: &str = "Failed to fetch pet details";
const SAVE_ERROR: &str = "Failed to update pet";
const MIN_FIELD_LEN: usize = 2;

/// Editable fields as typed
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PetForm {
    pub name: String,
    pub status: PetStatus,
    pub category: String,
}

impl PetForm {
    pub fn from_pet(pet: &Pet) -> Self {
        Self {
            name: pet.name.clone(),
            status: pet.status,
            category: pet.category_name().unwrap_or_default().to_string(),
        }
    }

    pub fn validate(&self, original: &Pet) -> Result<(), ValidationError> {
        if self.name.trim().is_empty() {
            return Err(ValidationError::new("name", "Please enter pet name!"));
        }
        if self.name.trim().chars().count() < MIN_FIELD_LEN {
            return Err(ValidationError::new("name", "Name must be at least 2 characters!"));
        }
        if !PetStatus::ALL.contains(&self.status) {
            return Err(ValidationError::new("status", "Please select status!"));
        }

        let category = self.category.trim();
        if category.is_empty() {
            if original.category_name().is_some() {
                return Err(ValidationError::new("category", "Please enter category!"));
            }
        } else if category.chars().count() < MIN_FIELD_LEN {
            return Err(ValidationError::new(
                "category",
                "Category must be at least 2 characters!",
            ));
        }
        Ok(())
    }

    /// Last fetched record with the edited fields applied. Everything else is carried over.
    pub fn apply_to(&self, original: &Pet) -> Pet {
        let mut pet = original.clone();
        pet.name = self.name.clone();
        pet.status = self.status;

        let category = self.category.trim();
        if !category.is_empty() && original.category_name() != Some(category) {
            pet.category = Some(Category {
                id: original.category.as_ref().map(|c| c.id).unwrap_or(0),
                name: category.to_string(),
            });
        }
        pet
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    Saved(Pet),
    Invalid(ValidationError),
    Failed(ApiError),
    /// A save is already running, or there is nothing loaded to edit
    Ignored,
}

pub struct PetEditViewModel<A> {
    api: Rc<A>,
    notifications: NotificationCenter,
    mount: MountFlag,
    pet_id: i64,
    state: ReactiveState<FetchState<Pet>>,
    saving: ReactiveState<bool>,
    form_error: ReactiveState<Option<String>>,
    form: Rc<RefCell<PetForm>>,
}

impl<A> Clone for PetEditViewModel<A> {
    fn clone(&self) -> Self {
        Self {
            api: self.api.clone(),
            notifications: self.notifications.clone(),
            mount: self.mount.clone(),
            pet_id: self.pet_id,
            state: self.state.clone(),
            saving: self.saving.clone(),
            form_error: self.form_error.clone(),
            form: self.form.clone(),
        }
    }
}

impl<A: PetApi> PetEditViewModel<A> {
    pub fn new(api: Rc<A>, notifications: NotificationCenter, pet_id: i64) -> Self {
        Self {
            api,
            notifications,
            mount: MountFlag::new(),
            pet_id,
            state: ReactiveState::new(FetchState::Idle),
            saving: ReactiveState::new(false),
            form_error: ReactiveState::new(None),
            form: Rc::new(RefCell::new(PetForm::default())),
        }
    }

    pub fn pet_id(&self) -> i64 {
        self.pet_id
    }

    pub fn state(&self) -> FetchState<Pet> {
        self.state.get()
    }

    pub fn is_saving(&self) -> bool {
        self.saving.get()
    }

    pub fn form(&self) -> PetForm {
        self.form.borrow().clone()
    }

    pub fn form_error(&self) -> Option<String> {
        self.form_error.get()
    }

    pub fn set_name(&self, name: &str) {
        self.form.borrow_mut().name = name.to_string();
    }

    pub fn set_status(&self, status: PetStatus) {
        self.form.borrow_mut().status = status;
    }

    pub fn set_category(&self, category: &str) {
        self.form.borrow_mut().category = category.to_string();
    }

    pub fn subscribe<F: Fn() + 'static>(&self, callback: F) {
        let callback = Rc::new(callback);
        {
            let callback = callback.clone();
            self.state.subscribe(move || callback());
        }
        {
            let callback = callback.clone();
            self.saving.subscribe(move || callback());
        }
        self.form_error.subscribe(move || callback());
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
            log::debug!("🗑️ [EDIT] pet {} arrived after dismount, dropped", self.pet_id);
            return false;
        }
        match result {
            Ok(pet) => {
                *self.form.borrow_mut() = PetForm::from_pet(&pet);
                self.state.set(FetchState::Success(pet));
            }
            Err(e) => {
                log::error!("❌ [EDIT] {}", e);
                self.notifications.error(LOAD_ERROR);
                self.state.set(FetchState::Error(LOAD_ERROR.to_string()));
            }
        }
        true
    }

    pub async fn load(&self) {
        let ticket = self.begin_load();
        let result = self.api.get_by_id(self.pet_id).await;
        self.complete_load(&ticket, result);
    }

    pub async fn submit(&self) -> SubmitOutcome {
        if self.saving.get() {
            log::debug!("⏳ [EDIT] save already in flight, submit ignored");
            return SubmitOutcome::Ignored;
        }
        let original = match self.state.borrow().data() {
            Some(pet) => pet.clone(),
            None => return SubmitOutcome::Ignored,
        };

        let form = self.form();
        if let Err(e) = form.validate(&original) {
            self.form_error.set(Some(e.message.clone()));
            return SubmitOutcome::Invalid(e);
        }

        let merged = form.apply_to(&original);
        let ticket = self.mount.ticket();
        self.form_error.set(None);
        self.saving.set(true);

        let result = self.api.update(&merged).await;

        // Toasts are app-wide and go out either way; view state only while mounted
        let live = ticket.is_live();
        if live {
            self.saving.set(false);
        } else {
            log::debug!("🗑️ [EDIT] save result for pet {} arrived after dismount", self.pet_id);
        }

        match result {
            Ok(updated) => {
                if live {
                    *self.form.borrow_mut() = PetForm::from_pet(&updated);
                    self.state.set(FetchState::Success(updated.clone()));
                }
                self.notifications.success("Pet updated successfully!");
                SubmitOutcome::Saved(updated)
            }
            Err(e) => {
                log::error!("❌ [EDIT] {}", e);
                self.notifications.error(e.user_message());
                if live {
                    self.form_error.set(Some(SAVE_ERROR.to_string()));
                }
                SubmitOutcome::Failed(e)
            }
        }
    }
}
