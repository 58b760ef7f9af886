//! Verb inference.
//!
//! The verb is the name of the instruction. It comes from the request
//! method, unless a `POST` or `PATCH` request names another one in the
//! `X-HTTP-Method-Override` header.

use crate::request::{InboundRequest, METHOD_OVERRIDE_HEADER};

/// Infer the verb of a request; `None` if the method is empty
pub fn infer_verb(request: &InboundRequest) -> Option<String> {
    if matches!(request.method(), "POST" | "PATCH") {
        if let Some(value) = request.header(METHOD_OVERRIDE_HEADER) {
            if !value.is_empty() {
                return Some(value.to_string());
            }
        }
    }

    let method = request.method();
    if method.is_empty() {
        return None;
    }
    Some(method.to_string())
}
