//! Storage layer for tokenkv
//!
//! This crate implements the in-memory store:
//! - KeyValues: FxHashMap-based insert-once store behind a RwLock
//! - StoreConfig: construction-time configuration
//!
//! Nothing is persisted; the map lives exactly as long as the store.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod config;
pub mod keyvalues;

pub use config::StoreConfig;
pub use keyvalues::KeyValues;
