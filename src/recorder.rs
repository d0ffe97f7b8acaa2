/*
recorder.rs

Copyright 2025 Hervé Quatremain

This file is part of DS Quest.

DS Quest is free software: you can redistribute it and/or modify it under the
terms of the GNU General Public License as published by the Free Software
Foundation, either version 3 of the License, or (at your option) any later
version.

DS Quest is distributed in the hope that it will be useful, but WITHOUT ANY
WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS FOR
A PARTICULAR PURPOSE. See the GNU General Public License for more details.

You should have received a copy of the GNU General Public License along with
DS Quest. If not, see <https://www.gnu.org/licenses/>.

SPDX-License-Identifier: GPL-3.0-or-later
*/

//! Report game sessions to a session recorder.
//!
//! When a puzzle is completed or abandoned, the game builds a [`SessionRecord`] and gives it to a
//! [`SessionRecorder`].
//! Sessions played as a guest are never recorded.
//!
//! Recording is best effort: a recorder failure is reported to the caller but never changes the
//! game in progress. See [`crate::scoreboard::ScoreBoard`] for an in-memory recorder, and
//! [`crate::saver::scoreboard::PersistentScoreBoard`] for a recorder that saves to disk.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::{Duration, SystemTime};

use crate::catalog::Kind;
use crate::saver::SaverError;

/// Name used for guest players.
pub const GUEST_NAME: &str = "Guest";

/// Player of the game.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
pub enum Player {
    /// Anonymous player. Progress is not saved.
    #[default]
    Guest,

    /// Player with a name. Sessions are recorded.
    Registered(String),
}

impl Player {
    /// Create a player from an optional name.
    ///
    /// No name, an empty name, or the guest name gives a [`Player::Guest`].
    pub fn from_name(name: Option<&str>) -> Self {
        match name.map(str::trim) {
            None | Some("") => Player::Guest,
            Some(n) if n.eq_ignore_ascii_case(GUEST_NAME) => Player::Guest,
            Some(n) => Player::Registered(n.to_string()),
        }
    }

    /// Whether the player is a guest.
    pub fn is_guest(&self) -> bool {
        matches!(self, Player::Guest)
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Player::Guest => write!(f, "{GUEST_NAME}"),
            Player::Registered(name) => write!(f, "{name}"),
        }
    }
}

/// Statistics of a finished session.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct SessionRecord {
    /// Player name.
    pub player: String,

    /// Data structure of the puzzle.
    pub kind: Kind,

    /// Level number.
    pub level: u32,

    /// Final score.
    pub score: u32,

    /// Number of applied operations.
    pub moves: u32,

    /// Time spent on the puzzle.
    pub elapsed: Duration,

    /// Whether the puzzle was solved. False for abandoned sessions.
    pub completed: bool,

    /// When the session ended.
    pub finished_at: SystemTime,
}

/// Error reported by a session recorder.
#[derive(thiserror::Error, Debug)]
pub enum RecorderError {
    /// The record could not be stored.
    #[error("Cannot store the session: {0}")]
    Storage(#[from] SaverError),

    /// The recorder cannot be reached.
    #[error("Session recorder unavailable: {0}")]
    Unavailable(String),
}

/// Collaborator that stores finished sessions.
pub trait SessionRecorder {
    /// Store a session.
    ///
    /// Recorders that rank the completed sessions return the position of the session in the
    /// ranking (1 is the best), or None if the session does not make it to the ranking.
    ///
    /// # Errors
    ///
    /// Return a [`RecorderError`] if the session cannot be stored.
    fn record(&mut self, record: &SessionRecord) -> Result<Option<usize>, RecorderError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_player_from_name() {
        assert_eq!(Player::from_name(None), Player::Guest);
        assert_eq!(Player::from_name(Some("  ")), Player::Guest);
        assert_eq!(Player::from_name(Some("guest")), Player::Guest);
        assert_eq!(
            Player::from_name(Some(" alice ")),
            Player::Registered(String::from("alice"))
        );
        assert!(Player::Guest.is_guest());
        assert_eq!(Player::Guest.to_string(), "Guest");
    }
}
