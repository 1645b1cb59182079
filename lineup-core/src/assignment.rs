//! Assignments of roster players to template seats
//!
//! An assignment is one candidate of the search: seat `i` of the template is
//! occupied by `assignment[i]`. Assignments borrow from the roster and are
//! never edited once built; the search replaces them wholesale.

use std::fmt;
use std::ops::Index;

use rand::seq::SliceRandom;
use rand::Rng;
use serde::Serialize;

use crate::error::LineupError;
use crate::player::{Player, Roster};

/// Permuted ordering of the roster, indexed by seat
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Assignment<'a> {
    seats: Vec<&'a Player>,
}

impl<'a> Assignment<'a> {
    /// Seat `i` holds roster player `i`
    pub fn identity(roster: &'a Roster) -> Self {
        Self {
            seats: roster.iter().collect(),
        }
    }

    /// Seat `i` holds roster player `order[i]`.
    ///
    /// `order` must mention every roster index exactly once.
    pub fn from_order(roster: &'a Roster, order: &[usize]) -> Result<Self, LineupError> {
        let expected = roster.len();
        if order.len() != expected {
            return Err(LineupError::InvalidOrder {
                expected,
                reason: format!("got {} entries", order.len()),
            });
        }

        let mut seen = vec![false; expected];
        let mut seats = Vec::with_capacity(expected);
        for &index in order {
            let player = roster.get(index).ok_or_else(|| LineupError::InvalidOrder {
                expected,
                reason: format!("index {} out of range", index),
            })?;
            if std::mem::replace(&mut seen[index], true) {
                return Err(LineupError::InvalidOrder {
                    expected,
                    reason: format!("index {} repeated", index),
                });
            }
            seats.push(player);
        }

        Ok(Self { seats })
    }

    pub fn len(&self) -> usize {
        self.seats.len()
    }

    pub fn is_empty(&self) -> bool {
        self.seats.is_empty()
    }

    /// Player occupying `seat`
    pub fn get(&self, seat: usize) -> Option<&'a Player> {
        self.seats.get(seat).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = &'a Player> + '_ {
        self.seats.iter().copied()
    }
}

impl<'a> Index<usize> for Assignment<'a> {
    type Output = Player;

    fn index(&self, seat: usize) -> &Player {
        self.seats[seat]
    }
}

impl fmt::Display for Assignment<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, player) in self.seats.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{}", player)?;
        }
        f.write_str("]")
    }
}

impl Roster {
    /// Draw a uniformly random assignment of this roster.
    ///
    /// Fisher-Yates over a fresh copy of the roster references; the roster
    /// itself is left untouched.
    pub fn shuffled<R: Rng + ?Sized>(&self, rng: &mut R) -> Assignment<'_> {
        let mut seats: Vec<&Player> = self.iter().collect();
        seats.shuffle(rng);
        Assignment { seats }
    }
}
