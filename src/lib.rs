/*
lib.rs

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

//! DS Quest: learn data structure operations by solving puzzles.
//!
//! Each puzzle gives an initial list of elements in a data structure (stack, queue, or linked
//! list) and a target list. The player applies the operations of the data structure (PUSH, POP,
//! ENQUEUE, INSERT, ...) to reach the target. Operations earn points, showing the hint costs
//! points, and the game counts the moves and the time.
//!
//! The [`GameSession`] object is the puzzle engine. The [`Catalog`] provides the puzzles, and
//! finished sessions are sent to a [`SessionRecorder`].
//!
//! ```
//! use dsquest::{Catalog, GameSession, Kind, Operation};
//!
//! let catalog = Catalog::new();
//! let mut game = GameSession::start(&catalog, Kind::Queue, 2).unwrap();
//! let result = game.apply(&Operation::Dequeue);
//! assert!(result.completed);
//! assert_eq!(game.score(), 15);
//! ```

pub mod catalog;
pub mod error;
pub mod game;
pub mod operation;
pub mod recorder;
pub mod saver;
pub mod scoreboard;
pub mod shell;
pub mod structures;

pub use catalog::{Catalog, Difficulty, Kind, Puzzle};
pub use error::GameError;
pub use game::GameSession;
pub use operation::{Operation, OperationResult, Rejection};
pub use recorder::{Player, RecorderError, SessionRecord, SessionRecorder};
pub use scoreboard::ScoreBoard;
