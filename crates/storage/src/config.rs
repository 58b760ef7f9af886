//! Store configuration
//!
//! Configuration is a plain struct with defaults. There is no file or
//! environment layer; callers build it in code.

/// Configuration for a [`crate::KeyValues`] store
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    /// Number of entries to pre-allocate room for (default: 0)
    pub initial_capacity: usize,
}

impl Default for StoreConfig {
    fn default() -> Self {
        StoreConfig {
            initial_capacity: 0,
        }
    }
}

impl StoreConfig {
    /// Configuration that pre-allocates room for `capacity` entries
    pub fn with_capacity(capacity: usize) -> Self {
        StoreConfig {
            initial_capacity: capacity,
        }
    }
}
