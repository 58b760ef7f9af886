//! Error types for tokenkv
//!
//! This module defines all error types used by the core and the store.
//! We use `thiserror` for automatic `Display` and `Error` trait implementations.

use crate::key::Key;
use thiserror::Error;

/// Result type alias for tokenkv operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for tokenkv
///
/// Every failure is returned as a value. None of them leave the store in a
/// partially written state.
#[derive(Debug, Error)]
pub enum Error {
    /// Attempted to store a value under the no-key sentinel
    #[error("empty key")]
    EmptyKey,

    /// The key already has a value; the existing entry is untouched
    #[error("key {key} found with value {found_value:?}, cannot store value {value:?}")]
    KeyFound {
        /// Key the insert was attempted under
        key: Key,
        /// Value the caller tried to store
        value: String,
        /// Value already stored at the key
        found_value: String,
    },

    /// An absent optional was unwrapped without a default
    #[error("not loaded")]
    NotLoaded,

    /// The conversion source is not one of the recognized kinds
    #[error("unsupported source: {type_name}")]
    UnsupportedSource {
        /// Type name of the offending value
        type_name: &'static str,
        /// Source file of the conversion call
        file: &'static str,
        /// Source line of the conversion call
        line: u32,
    },

    /// Serialized text could not be decoded
    #[error("decode error at byte {offset}: {reason}")]
    Decode {
        /// Byte offset of the first undecodable input
        offset: usize,
        /// What went wrong
        reason: String,
    },

    /// A fallible text source failed to produce its text
    #[error("source text error: {0}")]
    SourceText(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl Error {
    /// Build an `UnsupportedSource` error tagged with the caller's location
    #[track_caller]
    pub fn unsupported_source(type_name: &'static str) -> Self {
        let location = std::panic::Location::caller();
        Error::UnsupportedSource {
            type_name,
            file: location.file(),
            line: location.line(),
        }
    }

    /// Like `Display`, plus the file name and line the error came from when known
    pub fn debug(&self) -> String {
        match self {
            Error::UnsupportedSource {
                type_name,
                file,
                line,
            } => {
                let file = file.rsplit(['/', '\\']).next().unwrap_or(file);
                format!("{}:{}: unsupported source: {}", file, line, type_name)
            }
            other => other.to_string(),
        }
    }

    /// Get the reason code for this error kind
    pub fn reason_code(&self) -> &'static str {
        match self {
            Error::EmptyKey => "empty_key",
            Error::KeyFound { .. } => "key_found",
            Error::NotLoaded => "not_loaded",
            Error::UnsupportedSource { .. } => "unsupported_source",
            Error::Decode { .. } => "decode_error",
            Error::SourceText(_) => "source_text",
        }
    }

    /// True for [`Error::EmptyKey`]
    pub fn is_empty_key(&self) -> bool {
        matches!(self, Error::EmptyKey)
    }

    /// True for [`Error::KeyFound`]
    pub fn is_key_found(&self) -> bool {
        matches!(self, Error::KeyFound { .. })
    }

    /// True for [`Error::NotLoaded`]
    pub fn is_not_loaded(&self) -> bool {
        matches!(self, Error::NotLoaded)
    }

    /// True for [`Error::UnsupportedSource`]
    pub fn is_unsupported_source(&self) -> bool {
        matches!(self, Error::UnsupportedSource { .. })
    }

    /// True for [`Error::Decode`]
    pub fn is_decode(&self) -> bool {
        matches!(self, Error::Decode { .. })
    }
}

impl From<std::str::Utf8Error> for Error {
    fn from(e: std::str::Utf8Error) -> Self {
        Error::Decode {
            offset: e.valid_up_to(),
            reason: "invalid UTF-8".to_string(),
        }
    }
}
