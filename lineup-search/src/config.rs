//! Search configuration
//!
//! Level 4 - Configuration

/// Trial budget of the reference configuration
pub const DEFAULT_TRIALS: u64 = 1_000_000;

/// Configuration for a search run
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SearchConfig {
    /// Number of random assignments to evaluate
    pub trials: u64,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            trials: DEFAULT_TRIALS,
        }
    }
}

impl SearchConfig {
    /// Create config with the given trial budget
    pub fn new(trials: u64) -> Self {
        Self { trials }
    }
}
