//! Key codec: token sequence <-> canonical string
//!
//! A composite key is conceptually a sequence of tokens. The codec maps that
//! sequence onto one string so keys can be compared, hashed and persisted as
//! plain text.
//!
//! ## Grammar
//!
//! Tokens are joined with an unescaped `/`. Inside a token the writer escapes:
//! - `\` as `\\`
//! - `/` as `\/`
//! - `{` as `\{`
//! - any whitespace character `c` as `\c`
//!
//! The reader accepts a backslash in front of *any* character and takes that
//! character literally, so it accepts more than the writer produces.

use crate::error::Result;

/// Separator between encoded tokens
pub const DELIMITER: char = '/';

/// Escape character
pub const ESCAPE: char = '\\';

/// Encode a token sequence into its canonical string
///
/// Zero tokens, or a single empty token, encode to the empty string.
///
/// # Examples
///
/// ```
/// use tokenkv_core::codec::encode;
///
/// assert_eq!(encode(["database", "password"]), "database/password");
/// assert_eq!(encode(["i/o"]), r"i\/o");
/// ```
pub fn encode<I, S>(tokens: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut out = String::new();
    for (i, token) in tokens.into_iter().enumerate() {
        if i != 0 {
            out.push(DELIMITER);
        }
        encode_token(&mut out, token.as_ref());
    }
    out
}

/// Append the escaped form of a single token to `out`
pub fn encode_token(out: &mut String, token: &str) {
    out.reserve(token.len());
    for c in token.chars() {
        if needs_escape(c) {
            out.push(ESCAPE);
        }
        out.push(c);
    }
}

#[inline]
fn needs_escape(c: char) -> bool {
    matches!(c, '\\' | '/' | '{') || c.is_whitespace()
}

/// Decode a serialized key back into its tokens
///
/// Accepts `&str`, `String`, `&[u8]` or `Vec<u8>`. Byte input must be valid
/// UTF-8, otherwise a `Decode` error carries the offset of the first bad byte.
/// The empty string decodes to no tokens at all.
///
/// # Examples
///
/// ```
/// use tokenkv_core::codec::decode;
///
/// assert_eq!(decode(r"i\/o").unwrap(), vec!["i/o".to_string()]);
/// assert!(decode("").unwrap().is_empty());
/// assert!(decode(&[0xFFu8][..]).is_err());
/// ```
pub fn decode<B: AsRef<[u8]>>(serialized: B) -> Result<Vec<String>> {
    let text = std::str::from_utf8(serialized.as_ref())?;
    Ok(decode_str(text))
}

/// Decode already-validated text
///
/// Infallible: every `&str` is decodable. A trailing lone escape is dropped.
pub(crate) fn decode_str(serialized: &str) -> Vec<String> {
    let mut tokens = Vec::new();
    if serialized.is_empty() {
        return tokens;
    }

    let mut current = String::new();
    let mut escaped = false;
    for c in serialized.chars() {
        if escaped {
            escaped = false;
            current.push(c);
        } else if c == ESCAPE {
            escaped = true;
        } else if c == DELIMITER {
            tokens.push(std::mem::take(&mut current));
        } else {
            current.push(c);
        }
    }
    tokens.push(current);
    tokens
}
