//! Lineup template - rounds of courts of four seats
//!
//! A template describes, for every round and court, which four roster slots
//! play together. Seats 0 and 1 form one team, seats 2 and 3 the other.
//! Round and court indices in errors are 0-based.

use crate::assignment::Assignment;
use crate::error::LineupError;

/// Seats on one court (two teams of two)
pub const SEATS_PER_COURT: usize = 4;

/// One match: four seat indices, `[a, b]` vs `[c, d]`
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Court {
    seats: [usize; SEATS_PER_COURT],
}

impl Court {
    pub fn new(seats: [usize; SEATS_PER_COURT]) -> Self {
        Self { seats }
    }

    pub fn seats(&self) -> [usize; SEATS_PER_COURT] {
        self.seats
    }

    /// The two opposing pairs
    pub fn teams(&self) -> ([usize; 2], [usize; 2]) {
        let [a, b, c, d] = self.seats;
        ([a, b], [c, d])
    }
}

/// Courts played simultaneously
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Round {
    courts: Vec<Court>,
}

impl Round {
    pub fn new(courts: Vec<Court>) -> Self {
        Self { courts }
    }

    pub fn courts(&self) -> &[Court] {
        &self.courts
    }
}

/// Validated lineup template
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Template {
    rounds: Vec<Round>,
    seat_count: usize,
}

impl Template {
    /// Build a template addressing `seat_count` roster slots.
    ///
    /// Rejects templates without rounds, rounds without courts, seats
    /// outside `0..seat_count`, a seat listed twice on one court and a seat
    /// playing on two courts of the same round.
    pub fn new(rounds: Vec<Round>, seat_count: usize) -> Result<Self, LineupError> {
        validate_rounds(&rounds, seat_count)?;
        Ok(Self { rounds, seat_count })
    }

    /// Build a template from a plain table of `[round][court] -> seats`
    pub fn from_table<R>(table: &[R], seat_count: usize) -> Result<Self, LineupError>
    where
        R: AsRef<[[usize; SEATS_PER_COURT]]>,
    {
        let rounds = table
            .iter()
            .map(|courts| Round::new(courts.as_ref().iter().copied().map(Court::new).collect()))
            .collect();
        Self::new(rounds, seat_count)
    }

    pub fn rounds(&self) -> &[Round] {
        &self.rounds
    }

    /// Number of roster slots the template addresses
    pub fn seat_count(&self) -> usize {
        self.seat_count
    }

    /// Check that `assignment` fills exactly this template's seats
    pub fn check_assignment(&self, assignment: &Assignment) -> Result<(), LineupError> {
        if assignment.len() != self.seat_count {
            return Err(LineupError::AssignmentSizeMismatch {
                assignment: assignment.len(),
                seat_count: self.seat_count,
            });
        }
        Ok(())
    }

    /// Total number of matches (courts summed over rounds)
    pub fn match_count(&self) -> usize {
        self.rounds.iter().map(|r| r.courts.len()).sum()
    }

    /// All matches as `(round, court, &Court)`, round order then court order
    pub fn matches(&self) -> impl Iterator<Item = (usize, usize, &Court)> + '_ {
        self.rounds.iter().enumerate().flat_map(|(r, round)| {
            round
                .courts
                .iter()
                .enumerate()
                .map(move |(c, court)| (r, c, court))
        })
    }
}

fn validate_rounds(rounds: &[Round], seat_count: usize) -> Result<(), LineupError> {
    if rounds.is_empty() {
        return Err(LineupError::EmptyTemplate);
    }

    for (r, round) in rounds.iter().enumerate() {
        if round.courts.is_empty() {
            return Err(LineupError::EmptyRound { round: r });
        }

        let mut used = vec![false; seat_count];
        for (c, court) in round.courts.iter().enumerate() {
            validate_court(court, r, c, seat_count)?;

            for &seat in &court.seats {
                if used[seat] {
                    return Err(LineupError::SeatReusedInRound { round: r, seat });
                }
                used[seat] = true;
            }
        }
    }

    Ok(())
}

fn validate_court(court: &Court, round: usize, index: usize, seat_count: usize) -> Result<(), LineupError> {
    for (i, &seat) in court.seats.iter().enumerate() {
        if seat >= seat_count {
            return Err(LineupError::SeatOutOfRange {
                round,
                court: index,
                seat,
                seat_count,
            });
        }
        if court.seats[..i].contains(&seat) {
            return Err(LineupError::DuplicateSeatInCourt {
                round,
                court: index,
                seat,
            });
        }
    }
    Ok(())
}
