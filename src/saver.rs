/*
saver.rs

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

//! Save and restore the game state on disk.
//!
//! Two files are stored in the data directory, in JSON format:
//!
//! * `savegame.json`: the game in progress, see [`game::SaverGame`].
//! * `scoreboard.json`: the score boards and the player progress, see
//!   [`scoreboard::SaverScoreBoard`].

pub mod game;
pub mod scoreboard;

use log::debug;
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::fs::{self, File, remove_file};
use std::io::{self, BufReader, BufWriter, ErrorKind, Write};
use std::path::{Path, PathBuf};

/// Name of the application directory under the user data directory.
const APP_DIR: &str = "dsquest";

/// Error while reading or writing a save file.
#[derive(thiserror::Error, Debug)]
pub enum SaverError {
    /// The file cannot be read or written.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The file content is not valid.
    #[error("Invalid save file: {0}")]
    Json(#[from] serde_json::Error),
}

/// Return the default data directory, such as `~/.local/share/dsquest`.
pub fn default_data_dir() -> Option<PathBuf> {
    dirs::data_dir().map(|d| d.join(APP_DIR))
}

/// JSON file that stores one serialized object.
#[derive(Debug, Clone)]
pub(crate) struct JsonFile {
    /// Absolute path to the file.
    path: PathBuf,
}

impl JsonFile {
    /// Create a [`JsonFile`] object for the given file in the given directory.
    pub(crate) fn new(mut data_dir: PathBuf, file_name: &str) -> Self {
        data_dir.push(file_name);
        Self { path: data_dir }
    }

    pub(crate) fn path(&self) -> &Path {
        &self.path
    }

    /// Read the object from the file.
    ///
    /// Return None if the file does not exist.
    pub(crate) fn load<T: DeserializeOwned>(&self) -> Result<Option<T>, SaverError> {
        let file: File = match File::open(&self.path) {
            Ok(f) => f,
            Err(error) => match error.kind() {
                ErrorKind::NotFound => return Ok(None),
                _ => return Err(SaverError::Io(error)),
            },
        };
        let reader: BufReader<File> = BufReader::new(file);
        let object: T = serde_json::from_reader(reader)?;
        Ok(Some(object))
    }

    /// Write the object to the file. The data directory is created if needed.
    pub(crate) fn save<T: Serialize>(&self, object: &T) -> Result<(), SaverError> {
        if let Some(dir) = self.path.parent() {
            fs::create_dir_all(dir)?;
        }
        let file: File = File::create(&self.path)?;
        let mut writer: BufWriter<File> = BufWriter::new(file);
        serde_json::to_writer(&mut writer, object)?;
        writer.flush()?;
        Ok(())
    }

    /// Delete the file.
    pub(crate) fn delete(&self) {
        if remove_file(&self.path).is_ok() {
            debug!("Deleted {:?}", self.path);
        }
    }
}
