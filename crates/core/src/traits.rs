//! Core traits for storage abstraction
//!
//! This module defines the KeyValueStore trait so that callers feeding the
//! store (such as the request-inference layer) do not depend on a concrete
//! store implementation.

use crate::error::Result;
use crate::key::Key;
use crate::optional::Optional;

/// Insert-once key-value storage
///
/// Thread safety: All methods must be safe to call concurrently from
/// multiple threads (requires Send + Sync).
///
/// # Contract
///
/// - `store` is an atomic test-and-set: it fails with `EmptyKey` for
///   [`Key::no_key`], fails with `KeyFound` if the key already has a value,
///   and otherwise inserts. A failed call never modifies the store.
/// - `load` returns `Absent` for no-key and for missing keys.
pub trait KeyValueStore: Send + Sync {
    /// Insert `value` under `key` unless the key already has a value
    ///
    /// # Errors
    ///
    /// Returns `EmptyKey` or `KeyFound` as described above.
    fn store(&self, key: Key, value: String) -> Result<()>;

    /// Look up the value stored under `key`
    fn load(&self, key: &Key) -> Optional<String>;

    /// Number of stored entries
    fn len(&self) -> usize;

    /// True if nothing has been stored
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Look up the value stored under the key built from `tokens`
    fn fetch(&self, tokens: &[&str]) -> Optional<String> {
        self.load(&Key::some_key(tokens))
    }
}
