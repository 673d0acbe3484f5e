// ============================================================================
// FETCH STATE - per-view network state + mount liveness
// ============================================================================

use std::cell::Cell;
use std::rc::Rc;

/// A view's relationship to its current network operation.
/// Always replaced as a whole, never patched.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum FetchState<T> {
    #[default]
    Idle,
    Loading,
    Success(T),
    Error(String),
}

impl<T> FetchState<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, FetchState::Loading)
    }

    pub fn data(&self) -> Option<&T> {
        match self {
            FetchState::Success(data) => Some(data),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            FetchState::Error(message) => Some(message),
            _ => None,
        }
    }
}

/// Liveness of one mounted view. Cleared on dismount; clones share the flag.
#[derive(Debug, Clone)]
pub struct MountFlag {
    alive: Rc<Cell<bool>>,
}

impl MountFlag {
    pub fn new() -> Self {
        Self {
            alive: Rc::new(Cell::new(true)),
        }
    }

    pub fn is_mounted(&self) -> bool {
        self.alive.get()
    }

    pub fn dismount(&self) {
        self.alive.set(false);
    }

    /// Ticket for an operation started now
    pub fn ticket(&self) -> LoadTicket {
        LoadTicket { mount: self.clone() }
    }
}

impl Default for MountFlag {
    fn default() -> Self {
        Self::new()
    }
}

/// Carried across an await. Results are applied only while the view is mounted.
#[derive(Debug, Clone)]
pub struct LoadTicket {
    mount: MountFlag,
}

impl LoadTicket {
    pub fn is_live(&self) -> bool {
        self.mount.is_mounted()
    }
}
