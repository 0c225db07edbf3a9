use crate::error::KVError;

/// KVStore is the storage backend behind the record store.
///
/// Each key names one whole collection (`labguard_skus`, `labguard_reports`)
/// and the value is that collection's serialized form. Implementations must
/// make every call complete before returning; there is no async path.
pub trait KVStore: Send + Sync {
    /// Get the value for a key. Returns None if the key does not exist.
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>, KVError>;

    /// Set a key-value pair, replacing any previous value.
    fn set(&self, key: &str, value: &[u8]) -> Result<(), KVError>;
}
