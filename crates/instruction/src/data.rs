//! Key-value data inference from the request body.
//!
//! Only `application/x-www-form-urlencoded` bodies are understood. Each form
//! field name becomes a one-token [`Key`]; when a name repeats, its first value
//! wins. The whole body is decoded before anything is stored, so a malformed or
//! oversized body never reaches the store.

use rustc_hash::FxHashSet;
use tracing::debug;

use tokenkv_core::{Key, KeyValueStore};
use tokenkv_storage::KeyValues;

use crate::error::BodyError;
use crate::limits::RequestLimits;
use crate::request::{InboundRequest, CONTENT_TYPE_HEADER};

/// The only supported body media type
pub const FORM_MEDIA_TYPE: &str = "application/x-www-form-urlencoded";

/// Decode the request body into a fresh store
pub fn infer_data(
    request: &InboundRequest,
    limits: &RequestLimits,
) -> Result<KeyValues, BodyError> {
    let data = KeyValues::new();
    infer_data_into(&data, request, limits)?;
    Ok(data)
}

/// Decode the request body and store each field into `store`
///
/// Returns the number of entries stored. Decoding finishes before the first
/// store call; the first store error aborts the rest, so pass an empty store
/// to get all-or-nothing behavior.
pub fn infer_data_into<S>(
    store: &S,
    request: &InboundRequest,
    limits: &RequestLimits,
) -> Result<usize, BodyError>
where
    S: KeyValueStore + ?Sized,
{
    let pairs = decode_body(request, limits)?;
    let count = pairs.len();
    for (name, value) in pairs {
        store.store(Key::shallow(name), value)?;
    }
    debug!(entries = count, "inferred request data");
    Ok(count)
}

/// Validate and decode the body into `(name, value)` pairs, first value per name
fn decode_body(
    request: &InboundRequest,
    limits: &RequestLimits,
) -> Result<Vec<(String, String)>, BodyError> {
    let content_type = request.header(CONTENT_TYPE_HEADER).unwrap_or("");
    let media_type = content_type.split(';').next().unwrap_or("").trim();
    if !media_type.eq_ignore_ascii_case(FORM_MEDIA_TYPE) {
        return Err(BodyError::UnsupportedMediaType {
            media_type: media_type.to_string(),
        });
    }

    let body = match request.body() {
        Some(body) => body,
        None => return Ok(Vec::new()),
    };
    if limits.exceeds_body_limit(body.len()) {
        return Err(BodyError::PayloadTooLarge {
            limit: limits.max_body_bytes,
            actual: body.len(),
        });
    }

    Ok(decode_form(body))
}

/// Percent-decode a form body, keeping the first value of each name
pub fn decode_form(body: &[u8]) -> Vec<(String, String)> {
    let mut seen = FxHashSet::default();
    form_urlencoded::parse(body)
        .filter(|(name, _)| seen.insert(name.to_string()))
        .map(|(name, value)| (name.into_owned(), value.into_owned()))
        .collect()
}
