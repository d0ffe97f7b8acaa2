/*
scoreboard.rs

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

//! Manage the score boards and the player progress.
//!
//! The main object, [`ScoreBoard`], keeps the top runs for each level, and the progress of each
//! player per data structure kind.
//! It is a [`SessionRecorder`]: every recorded session updates the progress, and completed
//! sessions compete for a place on the board of their level.
//! See the [`crate::saver::scoreboard`] module that saves and restores the [`ScoreBoard`] object.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::{BTreeMap, BTreeSet, HashMap};
use std::time::{Duration, SystemTime};

use crate::catalog::Kind;
use crate::recorder::{RecorderError, SessionRecord, SessionRecorder};

/// Number of entries per board (number of top runs to keep).
const BOARD_SIZE: usize = 10;

/// Object that represents a completed run.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Score {
    /// Player name.
    pub player: String,

    /// Final score.
    pub score: u32,

    /// Number of operations.
    pub moves: u32,

    /// How long it took to solve the puzzle.
    pub time: Duration,

    /// Completion timestamp, which is used to display the date and time in the board.
    pub when: SystemTime,
}

impl Score {
    /// Ranking order: higher score first, then fewer moves, then shorter time.
    fn rank(&self, other: &Score) -> Ordering {
        other
            .score
            .cmp(&self.score)
            .then(self.moves.cmp(&other.moves))
            .then(self.time.cmp(&other.time))
    }
}

/// Sorted list of the top runs for a level.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
struct LevelBoard {
    /// Sorted list of the top runs.
    /// The number of runs in this list is controlled by the [`BOARD_SIZE`] constant.
    top: Vec<Score>,
}

impl LevelBoard {
    /// Add a run to the board and return the position in the board, or None if the run does not
    /// make it to the board.
    ///
    /// The returned position starts at 1 (top run). A run that ties with an existing run is
    /// placed after it.
    fn add_score(&mut self, score: Score) -> Option<usize> {
        let index: usize = self
            .top
            .iter()
            .position(|s| score.rank(s) == Ordering::Less)
            .unwrap_or(self.top.len());
        if index >= BOARD_SIZE {
            return None;
        }
        self.top.insert(index, score);
        self.top.truncate(BOARD_SIZE);
        Some(index + 1)
    }
}

/// Progress of a player for a data structure kind.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct Progress {
    /// Levels the player played, solved or not.
    pub attempted: BTreeSet<u32>,

    /// Levels the player solved.
    pub completed: BTreeSet<u32>,

    /// Number of recorded sessions.
    pub games: u32,

    /// Sum of the scores of all the sessions.
    pub total_score: u64,
}

impl Progress {
    /// Return the percentage of the attempted levels that are solved.
    pub fn completion_percentage(&self) -> f64 {
        if self.attempted.is_empty() {
            return 0.0;
        }
        self.completed.len() as f64 * 100.0 / self.attempted.len() as f64
    }
}

/// List of the level boards and of the player progress.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct ScoreBoard {
    /// Map of the [`LevelBoard`] boards indexed by the level.
    ///
    /// The level index is a string in the format "<kind>@@<level>".
    boards: HashMap<String, LevelBoard>,

    /// Progress per player, and then per kind.
    progress: BTreeMap<String, BTreeMap<Kind, Progress>>,
}

impl ScoreBoard {
    /// Create a [`ScoreBoard`] object.
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the string that is used as an index for the list of boards.
    fn build_key(kind: Kind, level: u32) -> String {
        format!("{kind}@@{level}")
    }

    /// Add a session. Update the player progress and, for a completed session, the board of the
    /// level.
    ///
    /// Return the position in the board (starting at 1), or None if the session does not make it
    /// to the board.
    pub fn add_record(&mut self, record: &SessionRecord) -> Option<usize> {
        let progress: &mut Progress = self
            .progress
            .entry(record.player.clone())
            .or_default()
            .entry(record.kind)
            .or_default();
        progress.attempted.insert(record.level);
        progress.games += 1;
        progress.total_score += u64::from(record.score);
        if !record.completed {
            return None;
        }
        progress.completed.insert(record.level);

        let board: &mut LevelBoard = self
            .boards
            .entry(Self::build_key(record.kind, record.level))
            .or_default();
        board.add_score(Score {
            player: record.player.clone(),
            score: record.score,
            moves: record.moves,
            time: record.elapsed,
            when: record.finished_at,
        })
    }

    /// Return the top runs of a level.
    ///
    /// Return None when nobody solved the level yet.
    pub fn get_scores(&self, kind: Kind, level: u32) -> Option<&Vec<Score>> {
        self.boards.get(&Self::build_key(kind, level)).map(|b| &b.top)
    }

    /// Return the best run of a level.
    pub fn best(&self, kind: Kind, level: u32) -> Option<&Score> {
        self.get_scores(kind, level).and_then(|s| s.first())
    }

    /// Return the progress of a player for a kind.
    pub fn progress(&self, player: &str, kind: Kind) -> Option<&Progress> {
        self.progress.get(player).and_then(|p| p.get(&kind))
    }

    /// Return the total score of a player, all kinds together.
    pub fn total_score(&self, player: &str) -> u64 {
        self.progress
            .get(player)
            .map(|p| p.values().map(|k| k.total_score).sum())
            .unwrap_or(0)
    }

    /// Return the number of recorded sessions, all players together.
    pub fn games_played(&self) -> u32 {
        self.progress
            .values()
            .flat_map(|p| p.values())
            .map(|k| k.games)
            .sum()
    }

    /// Return whether the board is empty (no session recorded)
    pub fn is_empty(&self) -> bool {
        self.progress.is_empty()
    }
}

impl SessionRecorder for ScoreBoard {
    fn record(&mut self, record: &SessionRecord) -> Result<Option<usize>, RecorderError> {
        Ok(self.add_record(record))
    }
}
