//! Players and the roster they are drawn from

use std::fmt;

use serde::Serialize;

use crate::error::LineupError;

/// A player with a skill rating
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Player {
    pub name: String,
    pub rating: f64,
}

impl Player {
    pub fn new(name: impl Into<String>, rating: f64) -> Self {
        Self {
            name: name.into(),
            rating,
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{{} {}}}", self.name, self.rating)
    }
}

/// Fixed, ordered set of players eligible for assignment
///
/// A roster is built once and never changes afterwards. Its length is the
/// number of seats a template must address.
#[derive(Clone, Debug, PartialEq)]
pub struct Roster {
    players: Vec<Player>,
}

impl Roster {
    /// Build a roster, rejecting an empty list and non-finite ratings
    pub fn new(players: Vec<Player>) -> Result<Self, LineupError> {
        if players.is_empty() {
            return Err(LineupError::EmptyRoster);
        }

        if let Some(bad) = players.iter().find(|p| !p.rating.is_finite()) {
            return Err(LineupError::InvalidRating {
                name: bad.name.clone(),
                rating: bad.rating,
            });
        }

        Ok(Self { players })
    }

    /// Number of players (and therefore seats)
    pub fn len(&self) -> usize {
        self.players.len()
    }

    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Player> {
        self.players.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Player> {
        self.players.iter()
    }
}
