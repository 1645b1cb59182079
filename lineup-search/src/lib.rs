//! Lineup Search - Random-trial search for balanced lineups
//!
//! This crate provides the optimisation side of a lineup search:
//! - Fitness evaluation of an assignment against a template
//! - The fixed-budget random search loop and best-candidate tracking
//!
//! ## Architecture (4-layer granularity)
//!
//! - Level 1: search, search_with_callback (orchestration)
//! - Level 2: run_trial, BestResult::offer (phases)
//! - Level 3: evaluate, match_diffs (steps)
//! - Level 4: configuration and errors

mod config;
mod fitness;
mod search;

pub use config::{SearchConfig, DEFAULT_TRIALS};
pub use fitness::{evaluate, match_diffs, Score};
pub use search::{
    search, search_with_callback, search_with_control, BestResult, Improvement, SearchResult, TrialReport,
};

/// Errors raised before a search starts
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SearchError {
    #[error("trial budget must be at least 1")]
    NoTrials,

    #[error("roster has {roster} players but the template addresses {template} seats")]
    SeatCountMismatch { roster: usize, template: usize },
}
