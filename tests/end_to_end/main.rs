//! End-to-end flows through the public facade
//!
//! Requests are turned into instructions, their data is copied into a shared
//! store, and the store is read back from several threads.

#[path = "../common/mod.rs"]
mod common;

mod instruction_flow;
