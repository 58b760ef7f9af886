//! Error types for instruction inference.
//!
//! Any error rejects the whole request. No partially inferred instruction is
//! ever handed back to the caller.

/// Instruction inference errors.
#[derive(Debug, thiserror::Error)]
pub enum InstructionError {
    /// The request carries no usable verb
    #[error("bad verb: request has no method")]
    BadVerb,

    /// The request carries no idempotent id
    #[error("bad idempotent id: missing or empty idempotent id header")]
    BadIdempotentId,

    /// The request body could not be turned into key-value data
    #[error("bad body: {0}")]
    BadBody(#[from] BodyError),
}

impl InstructionError {
    /// Get the reason code for this error
    pub fn reason_code(&self) -> &'static str {
        match self {
            InstructionError::BadVerb => "bad_verb",
            InstructionError::BadIdempotentId => "bad_id",
            InstructionError::BadBody(_) => "bad_body",
        }
    }
}

/// Request body errors.
#[derive(Debug, thiserror::Error)]
pub enum BodyError {
    /// The body's media type is not supported
    #[error("{media_type:?} is an unsupported media type")]
    UnsupportedMediaType {
        /// Media type named by the request (empty if none)
        media_type: String,
    },

    /// The body exceeds the configured limit
    #[error("payload too large: {actual} bytes exceeds limit of {limit} bytes")]
    PayloadTooLarge {
        /// Configured maximum body size
        limit: usize,
        /// Actual body size
        actual: usize,
    },

    /// The store rejected a decoded entry
    #[error("store error: {0}")]
    Store(#[from] tokenkv_core::Error),
}

impl BodyError {
    /// Get the reason code for this error
    pub fn reason_code(&self) -> &'static str {
        match self {
            BodyError::UnsupportedMediaType { .. } => "unsupported_media_type",
            BodyError::PayloadTooLarge { .. } => "payload_too_large",
            BodyError::Store(e) => e.reason_code(),
        }
    }
}
