//! tokenkv - Composite keys, optional values and an insert-once key-value store
//!
//! tokenkv gives a service three small building blocks:
//!
//! - [`Optional`]: a value that is either absent or present, including a present
//!   empty string
//! - [`Key`]: an ordered list of string tokens with one canonical, escaped text form
//! - [`KeyValues`]: a concurrent map from keys to strings where each key is
//!   written at most once
//!
//! On top of those, [`Instruction`] infers a command (verb, idempotent id and
//! data) from an inbound request.
//!
//! # Quick Start
//!
//! ```
//! use tokenkv::{Key, KeyValues, Optional};
//!
//! let store = KeyValues::new();
//! store.store(Key::some_key(["user", "123"]), "Alice")?;
//!
//! assert_eq!(store.fetch(["user", "123"]), Optional::present("Alice".to_string()));
//! assert!(store.store(Key::some_key(["user", "123"]), "Bob").is_err());
//! # Ok::<(), tokenkv::Error>(())
//! ```
//!
//! # Architecture
//!
//! | Crate | Contents |
//! |-------|----------|
//! | `tokenkv-core` | `Optional`, `Key`, the key codec, errors, `KeyValueStore` |
//! | `tokenkv-storage` | `KeyValues`, `StoreConfig` |
//! | `tokenkv-instruction` | `Instruction`, `InboundRequest`, `RequestLimits` |

pub use tokenkv_core::codec::{decode, encode};
pub use tokenkv_core::{
    AsText, Error, Key, KeyValueStore, Optional, Result, ScanSource, TextError, TryText,
};
pub use tokenkv_instruction::{
    infer_data, infer_data_into, infer_idempotent_id, infer_verb, BodyError, InboundRequest,
    Instruction, InstructionError, RequestLimits, CONTENT_TYPE_HEADER, FORM_MEDIA_TYPE,
    IDEMPOTENT_ID_HEADER, METHOD_OVERRIDE_HEADER,
};
pub use tokenkv_storage::{KeyValues, StoreConfig};
