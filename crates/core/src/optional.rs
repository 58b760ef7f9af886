//! Optional values
//!
//! `Optional<T>` is an explicit two-variant sum type. It exists so that
//! "not provided" and "provided as the empty string" never collapse into the
//! same value: `Optional::Absent != Optional::Present(String::new())`.
//!
//! The combinators mirror the usual option algebra:
//!
//! | Operation | Absent | Present(x) |
//! |-----------|--------|------------|
//! | `or_present(d)` | `Present(d)` | `Present(x)` |
//! | `unwrap_or(d)` | `d` | `x` |
//! | `map(f)` | `Absent` | `Present(f(x))` |
//! | `and_then(f)` | `Absent` | `f(x)` |
//! | `into_parts()` | `(T::default(), false)` | `(x, true)` |

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{Error, Result};
use crate::key::Key;

/// A value that is either absent or present
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Optional<T> {
    /// No value (the zero value)
    #[default]
    Absent,
    /// Some value, possibly an empty one
    Present(T),
}

impl<T> Optional<T> {
    /// The absent value
    pub fn absent() -> Self {
        Optional::Absent
    }

    /// A present value
    pub fn present(datum: T) -> Self {
        Optional::Present(datum)
    }

    /// True if a value is present
    pub fn is_present(&self) -> bool {
        matches!(self, Optional::Present(_))
    }

    /// True if no value is present
    pub fn is_absent(&self) -> bool {
        matches!(self, Optional::Absent)
    }

    /// Borrow the datum, if any
    pub fn get(&self) -> Option<&T> {
        match self {
            Optional::Present(datum) => Some(datum),
            Optional::Absent => None,
        }
    }

    /// Convert `&Optional<T>` into `Optional<&T>`
    pub fn as_ref(&self) -> Optional<&T> {
        match self {
            Optional::Present(datum) => Optional::Present(datum),
            Optional::Absent => Optional::Absent,
        }
    }

    /// Return self if present, otherwise `Present(default)`
    pub fn or_present(self, default: T) -> Self {
        match self {
            Optional::Present(_) => self,
            Optional::Absent => Optional::Present(default),
        }
    }

    /// Return the datum if present, otherwise `default`
    pub fn unwrap_or(self, default: T) -> T {
        match self {
            Optional::Present(datum) => datum,
            Optional::Absent => default,
        }
    }

    /// Apply `f` to a present datum; `Absent` is a fixed point
    pub fn map<U, F>(self, f: F) -> Optional<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Optional::Present(datum) => Optional::Present(f(datum)),
            Optional::Absent => Optional::Absent,
        }
    }

    /// Monadic bind; `Absent` is a fixed point
    pub fn and_then<U, F>(self, f: F) -> Optional<U>
    where
        F: FnOnce(T) -> Optional<U>,
    {
        match self {
            Optional::Present(datum) => f(datum),
            Optional::Absent => Optional::Absent,
        }
    }

    /// The datum (or `T::default()`) together with a presence flag
    ///
    /// Never fails.
    pub fn into_parts(self) -> (T, bool)
    where
        T: Default,
    {
        match self {
            Optional::Present(datum) => (datum, true),
            Optional::Absent => (T::default(), false),
        }
    }

    /// Convert into a standard `Option`
    pub fn into_option(self) -> Option<T> {
        self.into()
    }
}

impl<T> From<Option<T>> for Optional<T> {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(datum) => Optional::Present(datum),
            None => Optional::Absent,
        }
    }
}

impl<T> From<Optional<T>> for Option<T> {
    fn from(value: Optional<T>) -> Self {
        match value {
            Optional::Present(datum) => Some(datum),
            Optional::Absent => None,
        }
    }
}

/// Values that can be read back as text
///
/// Fails with [`Error::NotLoaded`] when there is nothing to read.
pub trait AsText {
    /// The textual datum
    fn as_text(&self) -> Result<&str>;
}

impl AsText for Optional<String> {
    fn as_text(&self) -> Result<&str> {
        match self {
            Optional::Present(datum) => Ok(datum.as_str()),
            Optional::Absent => Err(Error::NotLoaded),
        }
    }
}

impl fmt::Display for Optional<String> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Optional::Present(datum) => write!(f, "{:?}", datum),
            Optional::Absent => f.write_str("«no-string»"),
        }
    }
}

impl<T: Serialize> Serialize for Optional<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        match self {
            Optional::Present(datum) => serializer.serialize_some(datum),
            Optional::Absent => serializer.serialize_none(),
        }
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for Optional<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        Option::<T>::deserialize(deserializer).map(Optional::from)
    }
}

// ============================================================================
// Scanning
// ============================================================================

/// Boxed error produced by a fallible text source
pub type TextError = Box<dyn std::error::Error + Send + Sync>;

/// A value that can produce its text, but may fail doing so
pub trait TryText {
    /// Produce the text
    fn try_text(&self) -> std::result::Result<String, TextError>;
}

/// The closed set of values an `Optional<String>` can be scanned from
///
/// Variants are tried in declaration order, which is also the priority order.
pub enum ScanSource {
    /// Another optional string, copied as-is
    Optional(Optional<String>),
    /// A key, copied as-is; as a string it is the canonical form
    Key(Key),
    /// Raw text, always present
    Text(String),
    /// A byte buffer; `None` means unset and scans as absent
    Bytes(Option<Vec<u8>>),
    /// Something with an infallible text rendering
    Display(Box<dyn fmt::Display>),
    /// Something with a fallible text rendering
    TryText(Box<dyn TryText>),
    /// Anything else; only its type name is kept
    Other {
        /// Type name of the unsupported value
        type_name: &'static str,
    },
}

impl ScanSource {
    /// Wrap a value that implements `Display`
    pub fn display<D: fmt::Display + 'static>(value: D) -> Self {
        ScanSource::Display(Box::new(value))
    }

    /// Wrap a value that implements [`TryText`]
    pub fn try_text<T: TryText + 'static>(value: T) -> Self {
        ScanSource::TryText(Box::new(value))
    }

    /// Record an unsupported value by its type name
    pub fn other<T: ?Sized>(_value: &T) -> Self {
        ScanSource::Other {
            type_name: std::any::type_name::<T>(),
        }
    }
}

impl fmt::Debug for ScanSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScanSource::Optional(o) => f.debug_tuple("Optional").field(o).finish(),
            ScanSource::Key(k) => f.debug_tuple("Key").field(k).finish(),
            ScanSource::Text(s) => f.debug_tuple("Text").field(s).finish(),
            ScanSource::Bytes(b) => f.debug_tuple("Bytes").field(b).finish(),
            ScanSource::Display(d) => f.debug_tuple("Display").field(&d.to_string()).finish(),
            ScanSource::TryText(_) => f.write_str("TryText(..)"),
            ScanSource::Other { type_name } => {
                f.debug_struct("Other").field("type_name", type_name).finish()
            }
        }
    }
}

impl From<Optional<String>> for ScanSource {
    fn from(value: Optional<String>) -> Self {
        ScanSource::Optional(value)
    }
}

impl From<String> for ScanSource {
    fn from(value: String) -> Self {
        ScanSource::Text(value)
    }
}

impl From<&str> for ScanSource {
    fn from(value: &str) -> Self {
        ScanSource::Text(value.to_string())
    }
}

impl From<Vec<u8>> for ScanSource {
    fn from(value: Vec<u8>) -> Self {
        ScanSource::Bytes(Some(value))
    }
}

impl From<&[u8]> for ScanSource {
    fn from(value: &[u8]) -> Self {
        ScanSource::Bytes(Some(value.to_vec()))
    }
}

impl From<Option<Vec<u8>>> for ScanSource {
    fn from(value: Option<Vec<u8>>) -> Self {
        ScanSource::Bytes(value)
    }
}

impl Optional<String> {
    /// Convert an external value into an optional string
    ///
    /// Unsupported sources fail with [`Error::UnsupportedSource`] naming the
    /// caller's file and line.
    #[track_caller]
    pub fn scan(src: impl Into<ScanSource>) -> Result<Self> {
        match src.into() {
            ScanSource::Optional(o) => Ok(o),
            ScanSource::Key(key) => Ok(key.into()),
            ScanSource::Text(s) => Ok(Optional::Present(s)),
            ScanSource::Bytes(None) => Ok(Optional::Absent),
            ScanSource::Bytes(Some(bytes)) => String::from_utf8(bytes)
                .map(Optional::Present)
                .map_err(|e| e.utf8_error().into()),
            ScanSource::Display(d) => Ok(Optional::Present(d.to_string())),
            ScanSource::TryText(t) => t.try_text().map(Optional::Present).map_err(Error::SourceText),
            ScanSource::Other { type_name } => Err(Error::unsupported_source(type_name)),
        }
    }

    /// Decode text bytes into a present optional string
    #[track_caller]
    pub fn from_text(text: &[u8]) -> Result<Self> {
        Self::scan(text)
    }
}
