//! # tokenkv Instruction
//!
//! Turns an inbound request into an [`Instruction`]: a verb, an idempotent id
//! and key-value data held in a [`tokenkv_storage::KeyValues`] store.
//!
//! The request is modeled by [`InboundRequest`], so this crate does not depend
//! on any particular transport.
//!
//! | Part | Source |
//! |------|--------|
//! | verb | method, or `X-HTTP-Method-Override` on `POST`/`PATCH` |
//! | idempotent id | `X-Idempotent-ID` header |
//! | data | `application/x-www-form-urlencoded` body |

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod data;
pub mod error;
pub mod id;
pub mod instruction;
pub mod limits;
pub mod request;
pub mod verb;

pub use data::{decode_form, infer_data, infer_data_into, FORM_MEDIA_TYPE};
pub use error::{BodyError, InstructionError};
pub use id::infer_idempotent_id;
pub use instruction::Instruction;
pub use limits::{RequestLimits, DEFAULT_MAX_BODY_BYTES};
pub use request::{
    InboundRequest, CONTENT_TYPE_HEADER, IDEMPOTENT_ID_HEADER, METHOD_OVERRIDE_HEADER,
};
pub use verb::infer_verb;
