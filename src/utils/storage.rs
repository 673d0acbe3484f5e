use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use serde::{de::DeserializeOwned, Serialize};
use web_sys::{window, Storage};

use crate::error::StorageError;

/// String key/value storage, implemented over localStorage or memory
pub trait KeyValueStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError>;
    fn remove_item(&self, key: &str) -> Result<(), StorageError>;
}

pub fn get_local_storage() -> Option<Storage> {
    window()?.local_storage().ok()?
}

/// `window.localStorage`
#[derive(Clone)]
pub struct BrowserStorage {
    storage: Storage,
}

impl BrowserStorage {
    /// `None` when the browser refuses access (private mode, sandboxed iframe)
    pub fn open() -> Option<Self> {
        get_local_storage().map(|storage| Self { storage })
    }
}

impl KeyValueStorage for BrowserStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        self.storage
            .get_item(key)
            .map_err(|_| StorageError::Unavailable)
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.storage
            .set_item(key, value)
            .map_err(|_| StorageError::Write(key.to_string()))
    }

    fn remove_item(&self, key: &str) -> Result<(), StorageError> {
        self.storage
            .remove_item(key)
            .map_err(|_| StorageError::Remove(key.to_string()))
    }
}

/// Process-lifetime storage. Clones share the same map.
#[derive(Clone, Default)]
pub struct MemoryStorage {
    items: Rc<RefCell<HashMap<String, String>>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStorage for MemoryStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.items.borrow().get(key).cloned())
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.items
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove_item(&self, key: &str) -> Result<(), StorageError> {
        self.items.borrow_mut().remove(key);
        Ok(())
    }
}

/// localStorage when reachable, otherwise memory (session lasts until reload)
pub fn default_storage() -> Rc<dyn KeyValueStorage> {
    match BrowserStorage::open() {
        Some(storage) => Rc::new(storage),
        None => {
            log::warn!("⚠️ [STORAGE] localStorage unavailable, session will not survive a reload");
            Rc::new(MemoryStorage::new())
        }
    }
}

pub fn save_json<T: Serialize>(
    storage: &dyn KeyValueStorage,
    key: &str,
    value: &T,
) -> Result<(), StorageError> {
    let json = serde_json::to_string(value).map_err(|_| StorageError::Write(key.to_string()))?;
    storage.set_item(key, &json)
}

/// Missing, unreadable and malformed entries all read as `None`
pub fn load_json<T: DeserializeOwned>(storage: &dyn KeyValueStorage, key: &str) -> Option<T> {
    let raw = match storage.get_item(key) {
        Ok(Some(raw)) => raw,
        Ok(None) => return None,
        Err(e) => {
            log::warn!("⚠️ [STORAGE] {}", e);
            return None;
        }
    };
    match serde_json::from_str(&raw) {
        Ok(value) => Some(value),
        Err(e) => {
            log::warn!("⚠️ [STORAGE] ignoring malformed `{}`: {}", key, e);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_clones_share_items() {
        let a = MemoryStorage::new();
        let b = a.clone();
        a.set_item("k", "v").unwrap();
        assert_eq!(b.get_item("k").unwrap().as_deref(), Some("v"));
        b.remove_item("k").unwrap();
        assert_eq!(a.get_item("k").unwrap(), None);
    }

    #[test]
    fn load_json_tolerates_garbage() {
        let storage = MemoryStorage::new();
        storage.set_item("k", "{not json").unwrap();
        assert_eq!(load_json::<Vec<u32>>(&storage, "k"), None);
        assert_eq!(load_json::<Vec<u32>>(&storage, "missing"), None);

        save_json(&storage, "k", &vec![1u32, 2]).unwrap();
        assert_eq!(load_json::<Vec<u32>>(&storage, "k"), Some(vec![1, 2]));
    }
}
