//! Instruction: a command inferred from an inbound request.
//!
//! An instruction is the "C" in CQRS: a verb such as `RECORD_EMAIL`, an
//! idempotent id that lets the client retry safely, and key-value data.
//!
//! Inference follows one convention:
//! - **Verb**: the request method, or `X-HTTP-Method-Override` on `POST`/`PATCH`
//! - **Idempotent id**: the `X-Idempotent-ID` header
//! - **Data**: the form-encoded body
//!
//! # Example
//!
//! ```
//! use tokenkv_instruction::{InboundRequest, Instruction};
//!
//! let request = InboundRequest::new("POST")
//!     .with_header("X-Idempotent-ID", "z-2015-05-07T10:25:09Z_tleEiguQe67z")
//!     .with_header("X-HTTP-Method-Override", "RECORD_EMAIL")
//!     .with_header("Content-Type", "application/x-www-form-urlencoded")
//!     .with_body("email_address=joeblow@example.com");
//!
//! let instruction = Instruction::scan(&request).unwrap();
//! assert_eq!(instruction.verb.get().map(String::as_str), Some("RECORD_EMAIL"));
//! assert_eq!(instruction.data.len(), 1);
//! ```

use tracing::{debug, warn};

use tokenkv_core::Optional;
use tokenkv_storage::KeyValues;

use crate::data::infer_data;
use crate::error::InstructionError;
use crate::id::infer_idempotent_id;
use crate::limits::RequestLimits;
use crate::request::InboundRequest;
use crate::verb::infer_verb;

/// A command with its idempotent id and data
#[derive(Debug, Default)]
pub struct Instruction {
    /// Unique id making the instruction execute at most once
    pub idempotent_id: Optional<String>,
    /// Name of the instruction
    pub verb: Optional<String>,
    /// Key-value data carried by the instruction
    pub data: KeyValues,
}

impl Instruction {
    /// Infer an instruction from a request using default limits
    pub fn scan(request: &InboundRequest) -> Result<Self, InstructionError> {
        Self::scan_with_limits(request, &RequestLimits::default())
    }

    /// Infer an instruction from a request
    ///
    /// Any failure rejects the whole request.
    pub fn scan_with_limits(
        request: &InboundRequest,
        limits: &RequestLimits,
    ) -> Result<Self, InstructionError> {
        match Self::infer(request, limits) {
            Ok(instruction) => Ok(instruction),
            Err(e) => {
                warn!(method = %request.method(), reason = e.reason_code(), error = %e, "rejected request");
                Err(e)
            }
        }
    }

    fn infer(
        request: &InboundRequest,
        limits: &RequestLimits,
    ) -> Result<Self, InstructionError> {
        let verb = infer_verb(request).ok_or(InstructionError::BadVerb)?;
        let idempotent_id = infer_idempotent_id(request).ok_or(InstructionError::BadIdempotentId)?;
        let data = infer_data(request, limits)?;

        debug!(verb = %verb, idempotent_id = %idempotent_id, entries = data.len(), "inferred instruction");

        Ok(Instruction {
            idempotent_id: Optional::present(idempotent_id),
            verb: Optional::present(verb),
            data,
        })
    }
}
