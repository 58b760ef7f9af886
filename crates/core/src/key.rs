//! Composite keys
//!
//! A [`Key`] is an ordered sequence of tokens. Internally it only keeps the
//! canonical encoded form (see [`crate::codec`]) wrapped in an
//! [`Optional`], so equality, ordering and hashing are plain string
//! operations. Tokens are decoded again on demand.
//!
//! ## States
//!
//! - *no-key*: the absent sentinel and the `Default` value. `Key::some_key`
//!   with zero tokens collapses to it.
//! - *some-key*: any key built from at least one token.
//!
//! `Key::some_key([""])` is a some-key whose canonical form is the empty
//! string. It is distinct from no-key. [`Key::parse`] maps the empty string to
//! no-key, but serde, [`Key::scan`] and copying a key keep presence: a present
//! serialized form always gives a some-key.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::codec::{self, decode_str, encode};
use crate::error::{Error, Result};
use crate::optional::{AsText, Optional, ScanSource};

/// Immutable composite key, compared by canonical form
///
/// No-key sorts before every some-key.
#[derive(Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Key {
    encoded: Optional<String>,
}

impl Key {
    /// The absent key
    pub fn no_key() -> Self {
        Key {
            encoded: Optional::Absent,
        }
    }

    /// Build a key from its tokens
    ///
    /// Zero tokens give [`Key::no_key`].
    ///
    /// # Examples
    ///
    /// ```
    /// use tokenkv_core::Key;
    ///
    /// let key = Key::some_key(["database", "password"]);
    /// assert_eq!(key.canonical_form(), "database/password");
    /// assert_eq!(Key::some_key(Vec::<String>::new()), Key::no_key());
    /// ```
    pub fn some_key<I, S>(tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut tokens = tokens.into_iter().peekable();
        if tokens.peek().is_none() {
            return Key::no_key();
        }
        Key {
            encoded: Optional::Present(encode(tokens)),
        }
    }

    /// A key made of one token
    pub fn shallow(token: impl AsRef<str>) -> Self {
        Key::some_key([token])
    }

    /// Build a key from its serialized form
    ///
    /// The text is decoded and re-encoded, so tolerant escapes such as `\a`
    /// normalize to their canonical spelling. The empty string is no-key.
    pub fn parse(serialized: &str) -> Self {
        Key::some_key(decode_str(serialized))
    }

    /// Build a key from serialized bytes, which must be UTF-8
    pub fn decode<B: AsRef<[u8]>>(serialized: B) -> Result<Self> {
        codec::decode(serialized).map(Key::some_key)
    }

    /// Convert an external value holding a serialized key
    ///
    /// A key source is returned unchanged. Other sources follow the priority
    /// of [`Optional::scan`]; an absent source gives no-key and a present one,
    /// even the empty string, gives a some-key.
    #[track_caller]
    pub fn scan(src: impl Into<ScanSource>) -> Result<Self> {
        match src.into() {
            ScanSource::Key(key) => Ok(key),
            src => match Optional::<String>::scan(src)? {
                Optional::Present(serialized) => Ok(Key::from_serialized(&serialized)),
                Optional::Absent => Ok(Key::no_key()),
            },
        }
    }

    /// Present text always gives a some-key
    fn from_serialized(serialized: &str) -> Self {
        let key = Key::parse(serialized);
        if key.is_no_key() {
            return Key {
                encoded: Optional::Present(String::new()),
            };
        }
        key
    }

    /// True for the absent key
    pub fn is_no_key(&self) -> bool {
        self.encoded.is_absent()
    }

    /// The encoded form, or the empty string for no-key
    pub fn canonical_form(&self) -> &str {
        match &self.encoded {
            Optional::Present(encoded) => encoded,
            Optional::Absent => "",
        }
    }

    /// The decoded tokens; empty for no-key
    pub fn tokens(&self) -> Vec<String> {
        match &self.encoded {
            Optional::Present(encoded) if encoded.is_empty() => vec![String::new()],
            Optional::Present(encoded) => decode_str(encoded),
            Optional::Absent => Vec::new(),
        }
    }

    /// The underlying optional encoded form
    pub fn as_optional(&self) -> &Optional<String> {
        &self.encoded
    }

    /// Return self if it is a some-key, otherwise a key built from `tokens`
    pub fn or_tokens<I, S>(self, tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        if self.is_no_key() {
            return Key::some_key(tokens);
        }
        self
    }

    /// The decoded tokens, or `tokens` for no-key
    pub fn unwrap_or_tokens<I, S>(self, tokens: I) -> Vec<String>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        if self.is_no_key() {
            return tokens.into_iter().map(Into::into).collect();
        }
        self.tokens()
    }

    /// Rewrite the tokens of a some-key; no-key is a fixed point
    pub fn map<F>(self, f: F) -> Self
    where
        F: FnOnce(Vec<String>) -> Vec<String>,
    {
        if self.is_no_key() {
            return self;
        }
        Key::some_key(f(self.tokens()))
    }

    /// Replace a some-key by the key `f` builds from its tokens
    pub fn and_then<F>(self, f: F) -> Self
    where
        F: FnOnce(Vec<String>) -> Key,
    {
        if self.is_no_key() {
            return self;
        }
        f(self.tokens())
    }

    /// The tokens together with a presence flag
    pub fn into_parts(self) -> (Vec<String>, bool) {
        let present = !self.is_no_key();
        (self.tokens(), present)
    }
}

impl AsText for Key {
    fn as_text(&self) -> Result<&str> {
        self.as_optional().as_text()
    }
}

impl From<Key> for ScanSource {
    fn from(key: Key) -> Self {
        ScanSource::Key(key)
    }
}

impl FromStr for Key {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Ok(Key::parse(s))
    }
}

impl From<Key> for Optional<String> {
    fn from(key: Key) -> Self {
        key.encoded
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.encoded {
            Optional::Present(encoded) => write!(f, "{:?}", encoded),
            Optional::Absent => f.write_str("«no-key»"),
        }
    }
}

impl fmt::Debug for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_no_key() {
            return f.write_str("Key::no_key()");
        }
        write!(f, "Key::some_key({:?})", self.tokens())
    }
}

impl Serialize for Key {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        self.encoded.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Key {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let encoded = Option::<String>::deserialize(deserializer)?;
        Ok(match encoded {
            Some(serialized) => Key::from_serialized(&serialized),
            None => Key::no_key(),
        })
    }
}
