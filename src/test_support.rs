//! Fakes shared by the viewmodel tests

use std::cell::{Cell, RefCell};
use std::collections::VecDeque;

use futures::channel::oneshot;

use crate::error::ApiError;
use crate::models::{Pet, PetStatus};
use crate::services::PetApi;

pub fn pet(id: i64, name: &str, status: PetStatus) -> Pet {
    Pet {
        id,
        name: name.to_string(),
        status,
        category: None,
        tags: None,
        photo_urls: None,
    }
}

/// Scripted `PetApi`. Responses are taken in call order; gates hold a call
/// open until the matching sender fires.
#[derive(Default)]
pub struct FakePetApi {
    list_responses: RefCell<VecDeque<Result<Vec<Pet>, ApiError>>>,
    get_responses: RefCell<VecDeque<Result<Pet, ApiError>>>,
    update_responses: RefCell<VecDeque<Result<Pet, ApiError>>>,
    gates: RefCell<VecDeque<oneshot::Receiver<()>>>,
    pub list_calls: RefCell<Vec<PetStatus>>,
    pub get_calls: Cell<usize>,
    pub updates: RefCell<Vec<Pet>>,
}

impl FakePetApi {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_list(&self, response: Result<Vec<Pet>, ApiError>) -> &Self {
        self.list_responses.borrow_mut().push_back(response);
        self
    }

    pub fn push_get(&self, response: Result<Pet, ApiError>) -> &Self {
        self.get_responses.borrow_mut().push_back(response);
        self
    }

    pub fn push_update(&self, response: Result<Pet, ApiError>) -> &Self {
        self.update_responses.borrow_mut().push_back(response);
        self
    }

    /// The next call waits until the returned sender fires (or is dropped)
    pub fn gate_next(&self) -> oneshot::Sender<()> {
        let (tx, rx) = oneshot::channel();
        self.gates.borrow_mut().push_back(rx);
        tx
    }

    async fn pass_gate(&self) {
        let gate = self.gates.borrow_mut().pop_front();
        if let Some(rx) = gate {
            let _ = rx.await;
        }
    }
}

impl PetApi for FakePetApi {
    async fn list_by_status(&self, status: PetStatus) -> Result<Vec<Pet>, ApiError> {
        self.list_calls.borrow_mut().push(status);
        let response = self
            .list_responses
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| Ok(Vec::new()));
        self.pass_gate().await;
        response
    }

    async fn get_by_id(&self, id: i64) -> Result<Pet, ApiError> {
        self.get_calls.set(self.get_calls.get() + 1);
        let response = self.get_responses.borrow_mut().pop_front().unwrap_or_else(|| {
            Err(ApiError::NotFound {
                id,
                reason: "HTTP 404: Not Found".to_string(),
            })
        });
        self.pass_gate().await;
        response
    }

    async fn update(&self, pet: &Pet) -> Result<Pet, ApiError> {
        self.updates.borrow_mut().push(pet.clone());
        let response = self
            .update_responses
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| Ok(pet.clone()));
        self.pass_gate().await;
        response
    }
}
