//! Fitness evaluation of an assignment
//!
//! Level 3 - Steps

use lineup_core::{Assignment, Court, Template};
use serde::Serialize;

use crate::SearchError;

/// Balance of one assignment (lower = better)
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Score {
    /// Largest team-rating difference over all matches
    pub worst_case: f64,
    /// Mean team-rating difference over all matches
    pub average: f64,
}

/// Per-match differences, round order then court order
pub fn match_diffs(assignment: &Assignment, template: &Template) -> Result<Vec<f64>, SearchError> {
    check_sizes(assignment, template)?;
    Ok(template
        .matches()
        .map(|(_, _, court)| court_diff(assignment, court))
        .collect())
}

/// Score an assignment against a template.
///
/// Fails only when the assignment does not fill the template's seats.
pub fn evaluate(assignment: &Assignment, template: &Template) -> Result<Score, SearchError> {
    check_sizes(assignment, template)?;

    let mut worst_case = 0.0f64;
    let mut sum = 0.0f64;
    let mut count = 0usize;

    for (_, _, court) in template.matches() {
        let diff = court_diff(assignment, court);
        worst_case = worst_case.max(diff);
        sum += diff;
        count += 1;
    }

    // Validated templates always hold at least one match
    Ok(Score {
        worst_case,
        average: sum / count as f64,
    })
}

fn check_sizes(assignment: &Assignment, template: &Template) -> Result<(), SearchError> {
    if assignment.len() != template.seat_count() {
        return Err(SearchError::SeatCountMismatch {
            roster: assignment.len(),
            template: template.seat_count(),
        });
    }
    Ok(())
}

/// Absolute difference between the two teams' rating sums on one court.
///
/// Callers check sizes first; validated courts only hold in-range seats.
fn court_diff(assignment: &Assignment, court: &Court) -> f64 {
    let [a, b, c, d] = court.seats();
    (assignment[a].rating + assignment[b].rating - assignment[c].rating - assignment[d].rating).abs()
}
