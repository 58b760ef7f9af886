//! Core types and traits for tokenkv
//!
//! This crate defines the foundational types used throughout the system:
//! - Optional: present/absent values that keep "absent" apart from ""
//! - codec: reversible encoding of a token sequence into one string
//! - Key: composite key identity built on the codec
//! - Error: Error type hierarchy
//! - Traits: Core trait definitions (KeyValueStore)

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod codec;
pub mod error;
pub mod key;
pub mod optional;
pub mod traits;

pub use codec::{decode, encode};
pub use error::{Error, Result};
pub use key::Key;
pub use optional::{AsText, Optional, ScanSource, TextError, TryText};
pub use traits::KeyValueStore;
