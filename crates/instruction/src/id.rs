//! Idempotent id inference.
//!
//! The idempotent id lets a client retry an instruction without it being
//! executed twice. Clients send it in the `X-Idempotent-ID` header.

use crate::request::{InboundRequest, IDEMPOTENT_ID_HEADER};

/// Infer the idempotent id of a request; `None` if missing or empty
pub fn infer_idempotent_id(request: &InboundRequest) -> Option<String> {
    request
        .header(IDEMPOTENT_ID_HEADER)
        .filter(|value| !value.is_empty())
        .map(str::to_string)
}
