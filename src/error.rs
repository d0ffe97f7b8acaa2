/*
error.rs

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

//! Errors that prevent a game from starting.

use crate::catalog::Kind;

/// Error returned when a game session cannot be created.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    /// The catalog has no puzzle for the requested kind and level.
    #[error("No puzzle found for {kind} level {level}")]
    MissingPuzzle { kind: Kind, level: u32 },

    /// The data structure name is not known.
    #[error("Unknown data structure {0:?}")]
    UnknownKind(String),
}
