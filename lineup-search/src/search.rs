//! Fixed-budget random search
//!
//! Level 1 - Orchestration and Level 2 - Phases

use std::ops::ControlFlow;

use lineup_core::{Assignment, Roster, Template};
use rand::Rng;
use serde::Serialize;

use crate::config::SearchConfig;
use crate::fitness::{evaluate, Score};
use crate::SearchError;

/// One evaluated candidate, handed to the per-trial callback
#[derive(Clone, Copy, Debug)]
pub struct TrialReport<'t, 'a> {
    /// 0-based trial index
    pub trial: u64,
    pub score: Score,
    pub assignment: &'t Assignment<'a>,
}

/// Best candidate seen so far
#[derive(Clone, Debug, PartialEq)]
pub struct BestResult<'a> {
    /// Trial at which this candidate was drawn
    pub trial: u64,
    pub score: Score,
    pub assignment: Assignment<'a>,
}

impl BestResult<'_> {
    /// A candidate replaces the best only on a strictly lower worst case,
    /// so ties keep the earliest candidate.
    pub fn is_beaten_by(&self, score: &Score) -> bool {
        score.worst_case < self.score.worst_case
    }
}

/// A replacement of the best candidate
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Improvement {
    pub trial: u64,
    pub worst_case: f64,
    pub average: f64,
}

/// Result of a search run
#[derive(Clone, Debug)]
pub struct SearchResult<'a> {
    /// Final best candidate
    pub best: BestResult<'a>,
    /// Trials evaluated (the full budget unless the caller stopped early)
    pub trials: u64,
    /// Every replacement of the best, in trial order
    pub improvements: Vec<Improvement>,
}

// ============================================================================
// Level 1 - Orchestration
// ============================================================================

/// Run a search without observing individual trials
pub fn search<'a, R: Rng + ?Sized>(
    roster: &'a Roster,
    template: &Template,
    config: &SearchConfig,
    rng: &mut R,
) -> Result<SearchResult<'a>, SearchError> {
    search_with_callback(roster, template, config, rng, |_| {})
}

/// Run a search, calling `on_trial` after every evaluated candidate
///
/// # Arguments
/// * `roster` - Players to assign
/// * `template` - Lineup the players are assigned into
/// * `config` - Trial budget
/// * `rng` - Random source for the shuffles
/// * `on_trial` - Progress callback, sees every candidate in trial order
///
/// # Returns
/// The candidate with the lowest worst-case difference, earliest on ties
pub fn search_with_callback<'a, R, F>(
    roster: &'a Roster,
    template: &Template,
    config: &SearchConfig,
    rng: &mut R,
    mut on_trial: F,
) -> Result<SearchResult<'a>, SearchError>
where
    R: Rng + ?Sized,
    F: FnMut(&TrialReport<'_, 'a>),
{
    search_with_control(roster, template, config, rng, |report| {
        on_trial(report);
        ControlFlow::Continue(())
    })
}

/// Run a search whose callback may stop it before the budget is spent.
///
/// A `Break` from `on_trial` ends the loop after that trial has been
/// considered for the best slot; `SearchResult::trials` then counts the
/// trials actually evaluated.
pub fn search_with_control<'a, R, F>(
    roster: &'a Roster,
    template: &Template,
    config: &SearchConfig,
    rng: &mut R,
    mut on_trial: F,
) -> Result<SearchResult<'a>, SearchError>
where
    R: Rng + ?Sized,
    F: FnMut(&TrialReport<'_, 'a>) -> ControlFlow<()>,
{
    check_inputs(roster, template, config)?;

    let mut best: Option<BestResult<'a>> = None;
    let mut improvements = Vec::new();
    let mut trials = 0;

    for trial in 0..config.trials {
        let (assignment, score) = run_trial(roster, template, rng)?;
        trials += 1;

        let flow = on_trial(&TrialReport {
            trial,
            score,
            assignment: &assignment,
        });

        if offer(&mut best, trial, score, assignment) {
            tracing::debug!(
                "Trial {}: new best max={:.3}, avg={:.3}",
                trial,
                score.worst_case,
                score.average
            );
            improvements.push(Improvement {
                trial,
                worst_case: score.worst_case,
                average: score.average,
            });
        }

        if flow.is_break() {
            tracing::debug!("Search stopped by caller after {} trials", trials);
            break;
        }
    }

    let best = best.ok_or(SearchError::NoTrials)?;

    Ok(SearchResult {
        best,
        trials,
        improvements,
    })
}

// ============================================================================
// Level 2 - Phases
// ============================================================================

/// Reject budgets and roster/template pairs that cannot produce a result
fn check_inputs(roster: &Roster, template: &Template, config: &SearchConfig) -> Result<(), SearchError> {
    if config.trials == 0 {
        return Err(SearchError::NoTrials);
    }
    if roster.len() != template.seat_count() {
        return Err(SearchError::SeatCountMismatch {
            roster: roster.len(),
            template: template.seat_count(),
        });
    }
    Ok(())
}

/// Draw one fresh candidate and score it
fn run_trial<'a, R: Rng + ?Sized>(
    roster: &'a Roster,
    template: &Template,
    rng: &mut R,
) -> Result<(Assignment<'a>, Score), SearchError> {
    let assignment = roster.shuffled(rng);
    let score = evaluate(&assignment, template)?;
    Ok((assignment, score))
}

/// Keep the candidate if the slot is empty or it strictly improves on it.
///
/// Returns whether the slot was replaced.
fn offer<'a>(
    best: &mut Option<BestResult<'a>>,
    trial: u64,
    score: Score,
    assignment: Assignment<'a>,
) -> bool {
    let improves = match best {
        None => true,
        Some(current) => current.is_beaten_by(&score),
    };

    if improves {
        *best = Some(BestResult {
            trial,
            score,
            assignment,
        });
    }

    improves
}

#[cfg(test)]
mod tests {
    use super::*;
    use lineup_core::{americano_roster, americano_template, Player};
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn four_players() -> Roster {
        Roster::new(vec![
            Player::new("A", 1.0),
            Player::new("B", 2.0),
            Player::new("C", 3.0),
            Player::new("D", 4.0),
        ])
        .unwrap()
    }

    fn single_court() -> Template {
        Template::from_table(&[[[0, 1, 2, 3]]], 4).unwrap()
    }

    #[test]
    fn test_balanced_candidate_beats_identity() {
        let roster = four_players();
        let template = single_court();
        let identity = Assignment::identity(&roster);
        let balanced = Assignment::from_order(&roster, &[3, 0, 1, 2]).unwrap();

        let mut best = None;
        assert!(offer(&mut best, 0, evaluate(&identity, &template).unwrap(), identity.clone()));
        assert!(offer(&mut best, 1, evaluate(&balanced, &template).unwrap(), balanced.clone()));

        let best = best.unwrap();
        assert_eq!(best.trial, 1);
        assert_eq!(best.score.worst_case, 0.0);
        assert_eq!(best.assignment, balanced);
    }

    #[test]
    fn test_worse_candidate_is_discarded() {
        let roster = four_players();
        let template = single_court();
        let identity = Assignment::identity(&roster);
        let balanced = Assignment::from_order(&roster, &[3, 0, 1, 2]).unwrap();

        let mut best = None;
        assert!(offer(&mut best, 0, evaluate(&balanced, &template).unwrap(), balanced.clone()));
        assert!(!offer(&mut best, 1, evaluate(&identity, &template).unwrap(), identity));

        assert_eq!(best.unwrap().assignment, balanced);
    }

    #[test]
    fn test_ties_keep_earliest_candidate() {
        let roster = four_players();
        let template = single_court();
        // Both score 0.0: {D,A} vs {B,C} and {A,D} vs {B,C}
        let first = Assignment::from_order(&roster, &[3, 0, 1, 2]).unwrap();
        let second = Assignment::from_order(&roster, &[0, 3, 1, 2]).unwrap();

        let mut best = None;
        assert!(offer(&mut best, 0, evaluate(&first, &template).unwrap(), first.clone()));
        assert!(!offer(&mut best, 1, evaluate(&second, &template).unwrap(), second));

        let best = best.unwrap();
        assert_eq!(best.trial, 0);
        assert_eq!(best.assignment, first);
    }

    #[test]
    fn test_single_trial_returns_that_candidate() {
        let roster = americano_roster().unwrap();
        let template = americano_template().unwrap();
        let mut rng = ChaCha8Rng::seed_from_u64(42);

        let mut seen = Vec::new();
        let result = search_with_callback(&roster, &template, &SearchConfig::new(1), &mut rng, |report| {
            seen.push((report.score, report.assignment.clone()));
        })
        .unwrap();

        assert_eq!(seen.len(), 1);
        assert_eq!(result.trials, 1);
        assert_eq!(result.best.trial, 0);
        assert_eq!(result.best.score, seen[0].0);
        assert_eq!(result.best.assignment, seen[0].1);
        assert_eq!(result.improvements.len(), 1);
    }

    #[test]
    fn test_best_bounds_every_trial() {
        let roster = americano_roster().unwrap();
        let template = americano_template().unwrap();
        let mut rng = ChaCha8Rng::seed_from_u64(7);

        let mut trial_scores = Vec::new();
        let result = search_with_callback(&roster, &template, &SearchConfig::new(500), &mut rng, |report| {
            trial_scores.push(report.score.worst_case);
        })
        .unwrap();

        assert_eq!(trial_scores.len(), 500);
        let min = trial_scores.iter().cloned().fold(f64::INFINITY, f64::min);
        assert_eq!(result.best.score.worst_case, min);

        // Earliest trial reaching the minimum wins
        let first_min = trial_scores.iter().position(|&s| s == min).unwrap() as u64;
        assert_eq!(result.best.trial, first_min);
    }

    #[test]
    fn test_improvements_strictly_decrease() {
        let roster = americano_roster().unwrap();
        let template = americano_template().unwrap();
        let mut rng = ChaCha8Rng::seed_from_u64(11);

        let result = search(&roster, &template, &SearchConfig::new(2000), &mut rng).unwrap();

        assert!(!result.improvements.is_empty());
        assert_eq!(result.improvements[0].trial, 0);
        for pair in result.improvements.windows(2) {
            assert!(pair[1].trial > pair[0].trial);
            assert!(pair[1].worst_case < pair[0].worst_case);
        }

        let last = result.improvements.last().unwrap();
        assert_eq!(last.trial, result.best.trial);
        assert_eq!(last.worst_case, result.best.score.worst_case);
    }

    #[test]
    fn test_same_seed_same_result() {
        let roster = americano_roster().unwrap();
        let template = americano_template().unwrap();
        let config = SearchConfig::new(300);

        let a = search(&roster, &template, &config, &mut ChaCha8Rng::seed_from_u64(3)).unwrap();
        let b = search(&roster, &template, &config, &mut ChaCha8Rng::seed_from_u64(3)).unwrap();

        assert_eq!(a.best, b.best);
        assert_eq!(a.improvements, b.improvements);
    }

    #[test]
    fn test_zero_trials_rejected() {
        let roster = four_players();
        let mut rng = ChaCha8Rng::seed_from_u64(0);
        let err = search(&roster, &single_court(), &SearchConfig::new(0), &mut rng).unwrap_err();
        assert_eq!(err, SearchError::NoTrials);
    }

    #[test]
    fn test_seat_count_mismatch_rejected() {
        let roster = americano_roster().unwrap();
        let mut rng = ChaCha8Rng::seed_from_u64(0);
        let err = search(&roster, &single_court(), &SearchConfig::new(10), &mut rng).unwrap_err();
        assert_eq!(err, SearchError::SeatCountMismatch { roster: 12, template: 4 });
    }

    #[test]
    fn test_four_player_search_keeps_first_perfect_split() {
        // 1+4 = 2+3, so a third of all draws are perfect splits
        let roster = four_players();
        let template = single_court();
        let mut rng = ChaCha8Rng::seed_from_u64(21);

        let mut trial_scores = Vec::new();
        let result = search_with_callback(&roster, &template, &SearchConfig::new(200), &mut rng, |report| {
            trial_scores.push(report.score.worst_case);
        })
        .unwrap();

        let zeros: Vec<u64> = trial_scores
            .iter()
            .enumerate()
            .filter(|&(_, &s)| s == 0.0)
            .map(|(i, _)| i as u64)
            .collect();
        assert!(zeros.len() > 1, "expected several perfect splits, got {}", zeros.len());

        // Later perfect splits tie with the first and never replace it
        assert_eq!(result.best.score.worst_case, 0.0);
        assert_eq!(result.best.trial, zeros[0]);
        assert!(result.improvements.iter().all(|imp| imp.trial <= zeros[0]));
    }

    #[test]
    fn test_control_break_stops_early() {
        let roster = americano_roster().unwrap();
        let template = americano_template().unwrap();
        let mut rng = ChaCha8Rng::seed_from_u64(4);

        let mut seen = Vec::new();
        let result = search_with_control(&roster, &template, &SearchConfig::new(1000), &mut rng, |report| {
            seen.push(report.score.worst_case);
            if report.trial == 9 {
                ControlFlow::Break(())
            } else {
                ControlFlow::Continue(())
            }
        })
        .unwrap();

        assert_eq!(seen.len(), 10);
        assert_eq!(result.trials, 10);
        let min = seen.iter().cloned().fold(f64::INFINITY, f64::min);
        assert_eq!(result.best.score.worst_case, min);
        assert!(result.best.trial <= 9);
    }

    #[test]
    fn test_control_matches_callback_when_never_stopped() {
        let roster = americano_roster().unwrap();
        let template = americano_template().unwrap();
        let config = SearchConfig::new(200);

        let a = search_with_control(&roster, &template, &config, &mut ChaCha8Rng::seed_from_u64(6), |_| {
            ControlFlow::Continue(())
        })
        .unwrap();
        let b = search(&roster, &template, &config, &mut ChaCha8Rng::seed_from_u64(6)).unwrap();

        assert_eq!(a.trials, 200);
        assert_eq!(a.best, b.best);
    }
}
