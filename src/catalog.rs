/*
catalog.rs

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

//! Level catalog.
//!
//! [`Puzzle`] objects describe a level: the data structure [`Kind`] it is played with, the
//! initial and target element sequences, and the texts displayed to the player.
//!
//! Stack, queue, and linked list puzzles are curated and only exist for some of the level
//! numbers. Binary tree and graph levels are not designed yet: the catalog returns a placeholder
//! puzzle for every level number of these kinds.
//!
//! The [`Catalog`] object returns [`None`] for levels that do not exist. Callers must not start a
//! game in that case.

// For developers: add the levels of a new data structure kind to this list of modules.
pub mod linked_list;
pub mod placeholder;
pub mod queue;
pub mod stack;

use log::debug;
use rand::Rng;
use rand::seq::IndexedRandom;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;
use strum_macros::FromRepr;

use crate::error::GameError;

/// Number of levels per data structure kind.
pub const LEVEL_COUNT: u32 = 30;

/// Number of levels per difficulty band.
const LEVELS_PER_DIFFICULTY: u32 = 10;

/// Data structure used to play a puzzle.
#[derive(
    Serialize,
    Deserialize,
    Debug,
    Copy,
    Clone,
    PartialOrd,
    Ord,
    PartialEq,
    Eq,
    Hash,
    FromRepr,
    Default,
)]
#[repr(u8)]
pub enum Kind {
    #[default]
    Stack,
    Queue,
    LinkedList,
    BinaryTree,
    Graph,
}

impl Kind {
    /// Return all the kinds, in declaration order.
    pub fn all() -> impl Iterator<Item = Kind> {
        (0u8..).map_while(Kind::from_repr)
    }

    /// Prefix used to build the puzzle identifiers.
    pub fn id_prefix(&self) -> &'static str {
        match self {
            Kind::Stack => "stack",
            Kind::Queue => "queue",
            Kind::LinkedList => "ll",
            Kind::BinaryTree => "tree",
            Kind::Graph => "graph",
        }
    }

    /// Whether the kind has no playable operations yet.
    pub fn is_placeholder(&self) -> bool {
        matches!(self, Kind::BinaryTree | Kind::Graph)
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Kind::Stack => write!(f, "Stack"),
            Kind::Queue => write!(f, "Queue"),
            Kind::LinkedList => write!(f, "LinkedList"),
            Kind::BinaryTree => write!(f, "BinaryTree"),
            Kind::Graph => write!(f, "Graph"),
        }
    }
}

impl FromStr for Kind {
    type Err = GameError;

    /// Parse a kind name. The comparison ignores case, spaces, dashes, and underscores so that
    /// `LinkedList`, `linked-list`, and `linked list` are all accepted.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .chars()
            .filter(|c| !matches!(c, '-' | '_' | ' '))
            .collect::<String>()
            .to_lowercase();
        Kind::all()
            .find(|k| k.to_string().to_lowercase() == normalized)
            .ok_or_else(|| GameError::UnknownKind(s.to_string()))
    }
}

/// Level difficulty, derived from the level number.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialOrd, PartialEq, Eq, Hash, FromRepr)]
#[repr(u8)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    /// Return the difficulty of a level: 1 to 10 are easy, 11 to 20 medium, and 21 to 30 hard.
    ///
    /// Return None for level numbers out of range.
    pub fn from_level(level: u32) -> Option<Self> {
        if level == 0 || level > LEVEL_COUNT {
            return None;
        }
        u8::try_from((level - 1) / LEVELS_PER_DIFFICULTY)
            .ok()
            .and_then(Difficulty::from_repr)
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Difficulty::Easy => write!(f, "Easy"),
            Difficulty::Medium => write!(f, "Medium"),
            Difficulty::Hard => write!(f, "Hard"),
        }
    }
}

/// Parameters for the [`Puzzle`] object creation.
///
/// The level modules ([`stack`], [`queue`], [`linked_list`]) declare their puzzles with this
/// structure.
pub struct PuzzleParameters<'a> {
    /// Level number.
    pub level: u32,

    /// Short title.
    pub title: &'a str,

    /// One line description of the goal.
    pub description: &'a str,

    /// Elements at the beginning of the game.
    pub initial_state: &'a [&'a str],

    /// Elements that the player must reach.
    pub target_state: &'a [&'a str],

    /// Hint text.
    pub hint: &'a str,

    /// Advisory move budget.
    pub max_moves: u32,
}

/// Puzzle parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Puzzle {
    /// Puzzle identifier, such as `stack_3`.
    pub id: String,

    /// Data structure used to play the puzzle.
    pub kind: Kind,

    /// Level number.
    pub level: u32,

    /// Short title.
    pub title: String,

    /// One line description of the goal.
    pub description: String,

    /// Elements at the beginning of the game.
    pub initial_state: Vec<String>,

    /// Elements that the player must reach.
    pub target_state: Vec<String>,

    /// Hint text.
    pub hint: String,

    /// Move budget. The budget is displayed to the player but is not enforced.
    pub max_moves: u32,
}

impl Puzzle {
    /// Create a puzzle.
    pub fn new(kind: Kind, parameters: PuzzleParameters) -> Self {
        Self {
            id: format!("{}_{}", kind.id_prefix(), parameters.level),
            kind,
            level: parameters.level,
            title: String::from(parameters.title),
            description: String::from(parameters.description),
            initial_state: parameters.initial_state.iter().map(|s| s.to_string()).collect(),
            target_state: parameters.target_state.iter().map(|s| s.to_string()).collect(),
            hint: String::from(parameters.hint),
            max_moves: parameters.max_moves,
        }
    }

    /// Return the level difficulty.
    pub fn difficulty(&self) -> Option<Difficulty> {
        Difficulty::from_level(self.level)
    }
}

/// List of the puzzles, indexed by kind and level number.
#[derive(Debug, Clone)]
pub struct Catalog {
    puzzles: HashMap<(Kind, u32), Puzzle>,
}

impl Default for Catalog {
    fn default() -> Self {
        Self::new()
    }
}

impl Catalog {
    /// Create a [`Catalog`] object with all the curated puzzles.
    pub fn new() -> Self {
        let mut puzzles: HashMap<(Kind, u32), Puzzle> = HashMap::new();

        // For developers: add the levels of a new kind to the list.
        let curated = [
            (Kind::Stack, stack::levels()),
            (Kind::Queue, queue::levels()),
            (Kind::LinkedList, linked_list::levels()),
        ];
        for (kind, levels) in curated {
            for parameters in levels {
                let p: Puzzle = Puzzle::new(kind, parameters);
                puzzles.insert((kind, p.level), p);
            }
        }
        debug!("Catalog loaded with {} curated puzzles", puzzles.len());
        Self { puzzles }
    }

    /// Return the puzzle for the given kind and level, or None if that level does not exist.
    pub fn get(&self, kind: Kind, level: u32) -> Option<Puzzle> {
        if kind.is_placeholder() {
            return placeholder::get(kind, level);
        }
        self.puzzles.get(&(kind, level)).cloned()
    }

    /// Return the puzzle for the given kind and level.
    ///
    /// # Errors
    ///
    /// Return [`GameError::MissingPuzzle`] if the level does not exist.
    pub fn require(&self, kind: Kind, level: u32) -> Result<Puzzle, GameError> {
        self.get(kind, level)
            .ok_or(GameError::MissingPuzzle { kind, level })
    }

    /// Return the sorted list of the defined level numbers for the given kind.
    ///
    /// Placeholder kinds have a puzzle for every level number; the levels of the level screen
    /// (1 to [`LEVEL_COUNT`]) are returned for them.
    pub fn levels(&self, kind: Kind) -> Vec<u32> {
        if kind.is_placeholder() {
            return (1..=LEVEL_COUNT).collect();
        }
        let mut levels: Vec<u32> = self
            .puzzles
            .keys()
            .filter(|(k, _)| *k == kind)
            .map(|(_, level)| *level)
            .collect();
        levels.sort_unstable();
        levels
    }

    /// Return the level that follows the given level, or None if there is no puzzle for it.
    pub fn next_level(&self, kind: Kind, level: u32) -> Option<u32> {
        let next: u32 = level.checked_add(1)?;
        self.get(kind, next).map(|p| p.level)
    }

    /// Pick a random level among the defined levels for the given kind.
    pub fn random_level<R: Rng + ?Sized>(&self, kind: Kind, rng: &mut R) -> Option<u32> {
        self.levels(kind).choose(rng).copied()
    }
}
