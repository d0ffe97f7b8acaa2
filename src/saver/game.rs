/*
game.rs

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

//! Save and restore the game in progress when quitting or starting DS Quest.
//!
//! When a game is in progress and the player quits, the game status is saved in the
//! `savegame.json` file.
//! When DS Quest is restarted, the saved game is loaded, and the player can continue the puzzle.
//!
//! The saved object is a serialization of the [`GameSession`] object in JSON format by using
//! [`serde`]. The puzzle itself is not saved: only its kind and level are, and the puzzle is
//! retrieved from the [`Catalog`] when the game is loaded.

use log::debug;
use serde::de::{self, Deserialize, Deserializer};
use serde::ser::{Serialize, Serializer};
use std::path::{Path, PathBuf};

use super::{JsonFile, SaverError};
use crate::catalog::{Catalog, Kind, Puzzle};
use crate::game::GameSession;

/// Serialize and deserialize [`std::time::Instant`] objects with Serde.
pub mod instant {
    use serde::{Deserialize, Deserializer, Serialize, Serializer, de::Error};
    use std::time::{Duration, Instant};

    /// Serialize an [`std::time::Instant`] object as the time elapsed since that instant.
    pub fn serialize<S>(instant: &Instant, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let duration: Duration = instant.elapsed();
        duration.serialize(serializer)
    }

    /// Deserialize an [`std::time::Instant`] object from the time elapsed since that instant.
    pub fn deserialize<'de, D>(deserializer: D) -> Result<Instant, D::Error>
    where
        D: Deserializer<'de>,
    {
        let duration: Duration = Duration::deserialize(deserializer)?;
        let now: Instant = Instant::now();
        let instant: Instant = now
            .checked_sub(duration)
            .ok_or_else(|| Error::custom("Cannot compute the saved game duration"))?;
        Ok(instant)
    }
}

/// Reference to a catalog puzzle, as stored in the save file.
#[derive(serde::Serialize, serde::Deserialize)]
struct PuzzleKey {
    kind: Kind,
    level: u32,
}

/// Serialize a [`Puzzle`] object.
impl Serialize for Puzzle {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        // Only serialize the kind and the level. During deserialization, a complete Puzzle
        // object is retrieved from these two fields.
        PuzzleKey {
            kind: self.kind,
            level: self.level,
        }
        .serialize(serializer)
    }
}

/// Deserialize a [`Puzzle`] object.
impl<'de> Deserialize<'de> for Puzzle {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let key: PuzzleKey = PuzzleKey::deserialize(deserializer)?;
        // From the catalog, retrieve the Puzzle object that matches the serialized kind and
        // level.
        Catalog::new().get(key.kind, key.level).ok_or_else(|| {
            de::Error::custom(format!("No puzzle for {} level {}", key.kind, key.level))
        })
    }
}

/// Object to save and restore a puzzle in progress.
pub struct SaverGame {
    file: JsonFile,
}

impl SaverGame {
    /// Create a [`SaverGame`] object.
    ///
    /// The provided [`PathBuf`] is the path to the directory where the puzzle must be saved.
    pub fn new(data_dir: PathBuf) -> Self {
        let file: JsonFile = JsonFile::new(data_dir, "savegame.json");
        debug!("Save game file: {:?}", file.path());
        Self { file }
    }

    /// Return the path to the save file.
    pub fn path(&self) -> &Path {
        self.file.path()
    }

    /// Retrieve the [`GameSession`] object for the saved puzzle.
    ///
    /// Return the [`GameSession`] object or None if there is no saved puzzle.
    pub fn get_game(&self) -> Result<Option<GameSession>, SaverError> {
        self.file.load()
    }

    /// Save the provided [`GameSession`] object.
    pub fn save_game(&self, game: &GameSession) -> Result<(), SaverError> {
        self.file.save(game)
    }

    /// Delete the saved game.
    pub fn delete_save(&self) {
        self.file.delete();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::operation::Operation;

    #[test]
    fn test_save_and_restore_game() {
        let dir = tempfile::tempdir().expect("temporary directory");
        let saver = SaverGame::new(dir.path().to_path_buf());
        assert!(saver.get_game().expect("no file is not an error").is_none());

        let catalog = Catalog::new();
        let mut game = GameSession::start(&catalog, Kind::LinkedList, 11).expect("ll 11");
        game.apply(&Operation::Insert {
            value: String::from("X"),
            position: 0,
        });
        game.show_hint();
        saver.save_game(&game).expect("save");

        let restored = saver.get_game().expect("load").expect("saved game");
        assert_eq!(restored.puzzle, game.puzzle);
        assert_eq!(restored.elements(), vec!["X", "A", "B"]);
        assert_eq!(restored.score(), game.score());
        assert_eq!(restored.moves(), 1);
        assert!(restored.is_hint_shown());
        assert!(!restored.is_completed());

        saver.delete_save();
        assert!(saver.get_game().expect("deleted").is_none());
    }

    #[test]
    fn test_puzzle_saved_as_reference() {
        let catalog = Catalog::new();
        let puzzle = catalog.get(Kind::Queue, 3).expect("queue 3");
        let json = serde_json::to_string(&puzzle).expect("serialize");
        assert_eq!(json, r#"{"kind":"Queue","level":3}"#);
        let back: Puzzle = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(back, puzzle);
    }

    #[test]
    fn test_unknown_puzzle_is_an_error() {
        let result: Result<Puzzle, _> = serde_json::from_str(r#"{"kind":"Stack","level":9}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_corrupted_file() {
        let dir = tempfile::tempdir().expect("temporary directory");
        let saver = SaverGame::new(dir.path().to_path_buf());
        std::fs::write(saver.path(), "{not json").expect("write");
        assert!(matches!(saver.get_game(), Err(SaverError::Json(_))));
    }
}
