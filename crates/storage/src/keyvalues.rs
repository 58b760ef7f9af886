//! KeyValues: insert-once concurrent key-value store
//!
//! This module implements the KeyValueStore trait using:
//! - `FxHashMap<Key, String>` for O(1) lookups by canonical key
//! - `parking_lot::RwLock` for thread-safe access
//!
//! # Design Notes
//!
//! - **Insert once**: an entry is never overwritten. A second `store` under the
//!   same key fails with `KeyFound` and leaves the first value in place.
//! - **Test-and-set under one lock**: the presence check and the insert happen
//!   while holding the write lock, so no reader can observe a state between
//!   them.
//! - **Readers share**: `load`, `fetch`, `for_each`, `len` and `snapshot` take
//!   the lock in shared mode.
//! - **Explicit construction**: there is no unconstructed store. Build one
//!   with [`KeyValues::new`] or [`KeyValues::with_config`].

use std::collections::hash_map::Entry;
use std::fmt::Write as _;

use parking_lot::RwLock;
use rustc_hash::FxHashMap;
use tracing::{debug, trace};

use tokenkv_core::{Error, Key, KeyValueStore, Optional, Result};

use crate::config::StoreConfig;

/// Concurrent map from [`Key`] to string with at-most-once insert
///
/// # Example
///
/// ```
/// use tokenkv_core::{Key, Optional};
/// use tokenkv_storage::KeyValues;
///
/// let kv = KeyValues::new();
/// kv.store(Key::some_key(["when"]), "now").unwrap();
/// assert!(kv.store(Key::some_key(["when"]), "later").is_err());
/// assert_eq!(kv.fetch(["when"]), Optional::present("now".to_string()));
/// ```
#[derive(Debug, Default)]
pub struct KeyValues {
    data: RwLock<FxHashMap<Key, String>>,
}

impl KeyValues {
    /// Create a new empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new empty store with the given configuration
    pub fn with_config(config: StoreConfig) -> Self {
        Self {
            data: RwLock::new(FxHashMap::with_capacity_and_hasher(
                config.initial_capacity,
                Default::default(),
            )),
        }
    }

    /// Insert `value` under `key`
    ///
    /// # Errors
    ///
    /// - `EmptyKey` if `key` is [`Key::no_key`]
    /// - `KeyFound` if the key already has a value; the stored value is kept
    pub fn store(&self, key: Key, value: impl Into<String>) -> Result<()> {
        let value = value.into();
        if key.is_no_key() {
            debug!(value_len = value.len(), "rejected store under empty key");
            return Err(Error::EmptyKey);
        }

        let mut data = self.data.write();
        match data.entry(key) {
            Entry::Occupied(entry) => {
                let key = entry.key().clone();
                let found_value = entry.get().clone();
                // Values may be secrets; only sizes are logged
                debug!(%key, value_len = value.len(), found_len = found_value.len(), "rejected store, key found");
                Err(Error::KeyFound {
                    key,
                    value,
                    found_value,
                })
            }
            Entry::Vacant(entry) => {
                trace!(key = %entry.key(), "stored value");
                entry.insert(value);
                Ok(())
            }
        }
    }

    /// Insert `value` under the single-token key `token`
    pub fn shallow_store(&self, token: impl AsRef<str>, value: impl Into<String>) -> Result<()> {
        self.store(Key::shallow(token), value)
    }

    /// Look up the value stored under `key`
    ///
    /// `Absent` for no-key and for keys without an entry.
    pub fn load(&self, key: &Key) -> Optional<String> {
        if key.is_no_key() {
            return Optional::Absent;
        }
        self.data.read().get(key).cloned().into()
    }

    /// Look up the value stored under the key built from `tokens`
    pub fn fetch<I, S>(&self, tokens: I) -> Optional<String>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.load(&Key::some_key(tokens))
    }

    /// Visit every entry under one shared lock
    ///
    /// Entry order is unspecified. The visitor must not call back into this
    /// store.
    pub fn for_each<F>(&self, mut visitor: F)
    where
        F: FnMut(&Key, &str),
    {
        let data = self.data.read();
        for (key, value) in data.iter() {
            visitor(key, value);
        }
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.data.read().len()
    }

    /// True if no entries have been stored
    pub fn is_empty(&self) -> bool {
        self.data.read().is_empty()
    }

    /// Copy of all entries, sorted by key, taken under one shared lock
    pub fn snapshot(&self) -> Vec<(Key, String)> {
        let mut entries: Vec<(Key, String)> = self
            .data
            .read()
            .iter()
            .map(|(key, value)| (key.clone(), value.clone()))
            .collect();
        entries.sort();
        entries
    }

    /// Deterministic text rendering of all entries, one `key -> "value"` per line
    ///
    /// Two stores with the same entries render identically regardless of
    /// insertion order.
    pub fn canonical_form(&self) -> String {
        let mut out = String::new();
        for (key, value) in self.snapshot() {
            // Writing to a String cannot fail
            let _ = writeln!(out, "{} -> {:?}", key, value);
        }
        out
    }
}

impl KeyValueStore for KeyValues {
    fn store(&self, key: Key, value: String) -> Result<()> {
        KeyValues::store(self, key, value)
    }

    fn load(&self, key: &Key) -> Optional<String> {
        KeyValues::load(self, key)
    }

    fn len(&self) -> usize {
        KeyValues::len(self)
    }
}
