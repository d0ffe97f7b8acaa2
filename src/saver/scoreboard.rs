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

//! Save and restore the score boards.
//!
//! The saved object is a serialization of the [`ScoreBoard`] object in JSON format by
//! using [`serde`].

use log::{debug, warn};
use std::path::PathBuf;

use super::{JsonFile, SaverError};
use crate::recorder::{RecorderError, SessionRecord, SessionRecorder};
use crate::scoreboard::ScoreBoard;

/// Object to save and restore the score boards.
pub struct SaverScoreBoard {
    file: JsonFile,
}

impl SaverScoreBoard {
    /// Create a [`SaverScoreBoard`] object.
    ///
    /// The provided [`PathBuf`] is the path to the directory where the boards must be saved.
    pub fn new(data_dir: PathBuf) -> Self {
        let file: JsonFile = JsonFile::new(data_dir, "scoreboard.json");
        debug!("Score board file: {:?}", file.path());
        Self { file }
    }

    /// Retrieve the [`ScoreBoard`] object from the score board file.
    ///
    /// Return None if the score board file does not exist.
    pub fn get_scoreboard(&self) -> Result<Option<ScoreBoard>, SaverError> {
        self.file.load()
    }

    /// Save the provided [`ScoreBoard`] object.
    pub fn save_scoreboard(&self, scoreboard: &ScoreBoard) -> Result<(), SaverError> {
        self.file.save(scoreboard)
    }

    /// Delete the score board file.
    pub fn delete_save(&self) {
        self.file.delete();
    }
}

/// Session recorder that saves the score boards after every session.
pub struct PersistentScoreBoard {
    board: ScoreBoard,
    saver: SaverScoreBoard,
}

impl PersistentScoreBoard {
    /// Load the score boards from the disk.
    ///
    /// A file that cannot be read is deleted, and the boards start empty.
    pub fn open(saver: SaverScoreBoard) -> Self {
        let board: ScoreBoard = match saver.get_scoreboard() {
            Ok(Some(b)) => b,
            Ok(None) => ScoreBoard::new(),
            Err(error) => {
                warn!("Error getting the score boards: {error}");
                // Delete the file in error for trying to resolve the issue for the next start
                saver.delete_save();
                ScoreBoard::new()
            }
        };
        Self { board, saver }
    }

    /// Return the score boards.
    pub fn board(&self) -> &ScoreBoard {
        &self.board
    }
}

impl SessionRecorder for PersistentScoreBoard {
    fn record(&mut self, record: &SessionRecord) -> Result<Option<usize>, RecorderError> {
        let position: Option<usize> = self.board.add_record(record);
        self.saver.save_scoreboard(&self.board)?;
        Ok(position)
    }
}
