//! Shared test utilities for the integration test suites.
//!
//! Import via `#[path = "../common/mod.rs"] mod common;` from a suite's main.rs.

#![allow(dead_code)]

use std::sync::Once;

use proptest::prelude::*;

pub use tokenkv::{Key, KeyValues, Optional};

static INIT_TRACING: Once = Once::new();

/// Route `tracing` output through the test harness, once per binary
pub fn init_tracing() {
    INIT_TRACING.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::TRACE)
            .with_test_writer()
            .try_init();
    });
}

pub fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

pub fn present(s: &str) -> Optional<String> {
    Optional::present(s.to_string())
}

// ============================================================================
// Strategies
// ============================================================================

/// Tokens biased toward the characters the codec escapes
pub fn token_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        "[a-z]{0,6}",
        "[a-z/\\\\{ \t\n]{1,8}",
        any::<String>(),
    ]
}

/// Token lists that survive a text round trip: anything except `[""]`
pub fn token_list_strategy() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(token_strategy(), 0..6)
        .prop_filter("single empty token has no distinct text form", |ts| {
            ts.len() != 1 || !ts[0].is_empty()
        })
}
