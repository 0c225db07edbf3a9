use std::collections::BTreeMap;
use std::sync::RwLock;

use crate::error::KVError;
use crate::traits::KVStore;

/// MemoryStore keeps everything in a process-local map. Nothing survives a
/// restart; used for tests and throwaway sessions.
#[derive(Default)]
pub struct MemoryStore {
    entries: RwLock<BTreeMap<String, Vec<u8>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

fn poisoned<T>(_: T) -> KVError {
    KVError::Storage("memory store lock poisoned".to_string())
}

impl KVStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>, KVError> {
        let entries = self.entries.read().map_err(poisoned)?;
        Ok(entries.get(key).cloned())
    }

    fn set(&self, key: &str, value: &[u8]) -> Result<(), KVError> {
        let mut entries = self.entries.write().map_err(poisoned)?;
        entries.insert(key.to_string(), value.to_vec());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_get_overwrite() {
        let store = MemoryStore::new();
        assert!(store.get("a").unwrap().is_none());

        store.set("a", b"1").unwrap();
        store.set("b", b"2").unwrap();
        assert_eq!(store.get("a").unwrap(), Some(b"1".to_vec()));

        store.set("a", b"3").unwrap();
        assert_eq!(store.get("a").unwrap(), Some(b"3".to_vec()));
        assert_eq!(store.get("b").unwrap(), Some(b"2".to_vec()));
        assert!(store.get("missing").unwrap().is_none());
    }

    #[test]
    fn poisoned_lock_is_a_storage_error() {
        let store = std::sync::Arc::new(MemoryStore::new());
        store.set("a", b"1").unwrap();

        let held = store.clone();
        let joined = std::thread::spawn(move || {
            let _guard = held.entries.write().unwrap();
            panic!("writer died holding the lock");
        })
        .join();
        assert!(joined.is_err());

        let err = store.get("a").unwrap_err();
        assert!(matches!(err, KVError::Storage(_)));
        assert!(err.to_string().contains("poisoned"));
        assert!(matches!(store.set("b", b"2"), Err(KVError::Storage(_))));
    }
}
