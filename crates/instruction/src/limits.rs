//! Size limits for inbound requests
//!
//! The core store imposes no limits of its own; bounding what a single
//! request may put into it is this layer's job.

/// Default maximum body size: 100 MiB
pub const DEFAULT_MAX_BODY_BYTES: usize = 100 << 20;

/// Size limits applied while inferring an instruction
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestLimits {
    /// Maximum request body length in bytes (default: 100 MiB)
    pub max_body_bytes: usize,
}

impl Default for RequestLimits {
    fn default() -> Self {
        RequestLimits {
            max_body_bytes: DEFAULT_MAX_BODY_BYTES,
        }
    }
}

impl RequestLimits {
    /// Create limits with small values for testing
    pub fn with_small_limits() -> Self {
        RequestLimits {
            max_body_bytes: 1024,
        }
    }

    /// Check a body length against the limit
    pub(crate) fn exceeds_body_limit(&self, len: usize) -> bool {
        len > self.max_body_bytes
    }
}
