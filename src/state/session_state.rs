// ============================================================================
// SESSION STATE - persisted session + the context passed to every view
// ============================================================================

use std::rc::Rc;

use crate::error::StorageError;
use crate::models::Session;
use crate::state::ReactiveState;
use crate::utils::storage::{load_json, save_json, KeyValueStorage};

/// Persistence of the single session record
#[derive(Clone)]
pub struct SessionStore {
    storage: Rc<dyn KeyValueStorage>,
    key: String,
}

impl SessionStore {
    pub fn new(storage: Rc<dyn KeyValueStorage>, key: impl Into<String>) -> Self {
        Self {
            storage,
            key: key.into(),
        }
    }

    /// Absent, malformed or unreadable data all mean "no session"
    pub fn load(&self) -> Option<Session> {
        load_json(self.storage.as_ref(), &self.key)
    }

    /// Overwrites the single key
    pub fn save(&self, session: &Session) -> Result<(), StorageError> {
        save_json(self.storage.as_ref(), &self.key, session)
    }

    pub fn clear(&self) -> Result<(), StorageError> {
        self.storage.remove_item(&self.key)
    }
}

/// The current session, handed to the router and every viewmodel.
/// Created once at startup, mutated only by sign_in / sign_out.
#[derive(Clone)]
pub struct SessionContext {
    store: SessionStore,
    current: ReactiveState<Option<Session>>,
}

impl SessionContext {
    /// Rehydrate from storage
    pub fn init(store: SessionStore) -> Self {
        let current = store.load();
        match &current {
            Some(session) => log::info!("💾 [SESSION] restored session for {}", session.identity),
            None => log::info!("🔒 [SESSION] no stored session"),
        }
        Self {
            store,
            current: ReactiveState::new(current),
        }
    }

    pub fn current(&self) -> Option<Session> {
        self.current.get()
    }

    pub fn is_authenticated(&self) -> bool {
        self.current.borrow().is_some()
    }

    /// Replaces any previous session. A storage failure keeps the in-memory session.
    pub fn sign_in(&self, identity: &str, token: &str) -> Session {
        let session = Session::new(identity, token);
        if let Err(e) = self.store.save(&session) {
            log::error!("❌ [SESSION] could not persist session: {}", e);
        }
        log::info!("✅ [SESSION] signed in as {}", identity);
        self.current.set(Some(session.clone()));
        session
    }

    pub fn sign_out(&self) {
        if let Err(e) = self.store.clear() {
            log::warn!("⚠️ [SESSION] could not clear stored session: {}", e);
        }
        log::info!("👋 [SESSION] signed out");
        self.current.set(None);
    }

    pub fn subscribe<F>(&self, callback: F)
    where
        F: Fn() + 'static,
    {
        self.current.subscribe(callback);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::storage::MemoryStorage;
    use std::cell::Cell;

    const KEY: &str = "petstore_user";

    fn store(storage: &MemoryStorage) -> SessionStore {
        SessionStore::new(Rc::new(storage.clone()), KEY)
    }

    #[test]
    fn absent_or_malformed_data_is_no_session() {
        let storage = MemoryStorage::new();
        assert_eq!(store(&storage).load(), None);

        for garbage in ["", "null", "[]", "{\"email\":1}", "{\"token\":\"t\"}", "not json", "{"] {
            storage.set_item(KEY, garbage).unwrap();
            assert_eq!(store(&storage).load(), None, "input {:?}", garbage);
        }
    }

    #[test]
    fn save_then_load_in_fresh_store() {
        let storage = MemoryStorage::new();
        let session = Session::new("omar@gmail.com", "tok-1");
        store(&storage).save(&session).unwrap();

        let reloaded = store(&storage).load();
        assert_eq!(reloaded, Some(session));
    }

    #[test]
    fn clear_removes_the_record() {
        let storage = MemoryStorage::new();
        let s = store(&storage);
        s.save(&Session::new("a@b.io", "t")).unwrap();
        s.clear().unwrap();
        assert_eq!(s.load(), None);
        assert_eq!(storage.get_item(KEY).unwrap(), None);
    }

    #[test]
    fn context_persists_sign_in_and_sign_out() {
        let storage = MemoryStorage::new();
        let ctx = SessionContext::init(store(&storage));
        assert!(!ctx.is_authenticated());

        let changes = Rc::new(Cell::new(0));
        {
            let changes = changes.clone();
            ctx.subscribe(move || changes.set(changes.get() + 1));
        }

        let session = ctx.sign_in("omar@gmail.com", "tok");
        assert!(ctx.is_authenticated());
        assert_eq!(SessionContext::init(store(&storage)).current(), Some(session));

        ctx.sign_out();
        assert!(!ctx.is_authenticated());
        assert_eq!(SessionContext::init(store(&storage)).current(), None);
        assert_eq!(changes.get(), 2);
    }

    #[test]
    fn second_sign_in_replaces_the_first() {
        let storage = MemoryStorage::new();
        let ctx = SessionContext::init(store(&storage));
        ctx.sign_in("first@x.io", "1");
        ctx.sign_in("second@x.io", "2");
        assert_eq!(store(&storage).load().map(|s| s.identity), Some("second@x.io".to_string()));
    }
}
