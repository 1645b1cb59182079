//! Error types for roster, template and assignment construction

/// Errors raised while building the static lineup data
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum LineupError {
    #[error("roster has no players")]
    EmptyRoster,

    #[error("player {name} has a non-finite rating: {rating}")]
    InvalidRating { name: String, rating: f64 },

    #[error("template has no rounds")]
    EmptyTemplate,

    #[error("round {round} has no courts")]
    EmptyRound { round: usize },

    #[error("round {round}, court {court}: seat {seat} is out of range (seat count {seat_count})")]
    SeatOutOfRange {
        round: usize,
        court: usize,
        seat: usize,
        seat_count: usize,
    },

    #[error("round {round}, court {court}: seat {seat} appears more than once")]
    DuplicateSeatInCourt { round: usize, court: usize, seat: usize },

    #[error("round {round}: seat {seat} is used on more than one court")]
    SeatReusedInRound { round: usize, seat: usize },

    #[error("assignment covers {assignment} seats but the template addresses {seat_count}")]
    AssignmentSizeMismatch { assignment: usize, seat_count: usize },

    #[error("failed to format report")]
    Format(#[from] std::fmt::Error),

    #[error("order is not a permutation of {expected} roster slots: {reason}")]
    InvalidOrder { expected: usize, reason: String },
}
