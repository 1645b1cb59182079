//! Lineup Core - Players, templates and assignments
//!
//! This crate provides the static data of a lineup search:
//! - Players and the roster they are drawn from
//! - The lineup template (rounds of courts of four seats)
//! - Assignments of roster players to template seats
//! - The compiled-in Americano roster and template
//! - Human-readable round/court reports

pub mod error;
pub mod player;
pub mod template;
pub mod assignment;
pub mod americano;
pub mod report;

// Re-exports for convenient access
pub use error::LineupError;
pub use player::{Player, Roster};
pub use template::{Court, Round, Template, SEATS_PER_COURT};
pub use assignment::Assignment;
pub use americano::{americano_roster, americano_template};
pub use report::{render_report, write_report};
