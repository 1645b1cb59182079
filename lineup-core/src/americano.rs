//! Compiled-in Americano configuration: 12 players, 11 rounds of 3 courts
//!
//! Every player partners every other player exactly once over the 11
//! rounds, and every round seats all 12 players.

use crate::error::LineupError;
use crate::player::{Player, Roster};
use crate::template::{Template, SEATS_PER_COURT};

/// Players in the compiled-in roster
pub const AMERICANO_PLAYERS: usize = 12;

const ROSTER: [(&str, f64); AMERICANO_PLAYERS] = [
    ("A", 1.0),
    ("B", 1.2),
    ("C", 1.4),
    ("D", 1.6),
    ("E", 1.8),
    ("F", 2.0),
    ("G", 2.2),
    ("H", 2.4),
    ("I", 2.6),
    ("J", 2.8),
    ("K", 3.0),
    ("L", 3.2),
];

const LINEUP: [[[usize; SEATS_PER_COURT]; 3]; 11] = [
    [[11, 4, 3, 2], [8, 5, 7, 0], [10, 1, 6, 9]],
    [[8, 6, 4, 9], [3, 10, 11, 1], [2, 0, 7, 5]],
    [[3, 5, 2, 10], [7, 9, 4, 6], [8, 11, 0, 1]],
    [[4, 1, 11, 0], [8, 2, 9, 10], [6, 5, 7, 3]],
    [[7, 8, 3, 1], [11, 6, 4, 5], [10, 0, 9, 2]],
    [[11, 2, 6, 0], [3, 9, 7, 1], [8, 4, 5, 10]],
    [[5, 1, 4, 10], [8, 0, 6, 3], [7, 2, 11, 9]],
    [[8, 9, 11, 5], [7, 4, 2, 1], [6, 10, 3, 0]],
    [[4, 0, 7, 10], [11, 3, 9, 5], [8, 1, 6, 2]],
    [[5, 2, 6, 1], [8, 10, 7, 11], [9, 0, 4, 3]],
    [[8, 3, 4, 2], [9, 1, 5, 0], [7, 6, 11, 10]],
];

/// The compiled-in roster
pub fn americano_roster() -> Result<Roster, LineupError> {
    Roster::new(
        ROSTER
            .iter()
            .map(|&(name, rating)| Player::new(name, rating))
            .collect(),
    )
}

/// The compiled-in lineup template
pub fn americano_template() -> Result<Template, LineupError> {
    Template::from_table(&LINEUP, AMERICANO_PLAYERS)
}
