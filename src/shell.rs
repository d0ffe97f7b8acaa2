/*
shell.rs

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

//! Play the puzzles in a terminal.
//!
//! The shell displays the puzzle, reads the commands of the player line by line, sends the
//! operations to the [`GameSession`], and displays the result.
//!
//! ```text
//! Stack level 1 (Easy): Basic Push Operations
//! Learn to push elements onto the stack
//! Target: [A, B, C]
//! Suggested moves: 5
//! TOP ↑
//! Score: 0   Moves: 0   Time: 0:00
//! > push A
//! ```
//!
//! When the puzzle is solved, the session is recorded (unless the player is a guest), and the
//! shell offers to play the next level.
//! When the player quits an unfinished puzzle, the game is saved so that it can be continued at
//! the next start.

use chrono::{DateTime, Local};
use log::{debug, warn};
use std::io::{self, BufRead, Write};

use crate::catalog::Catalog;
use crate::game::GameSession;
use crate::operation::Operation;
use crate::recorder::{Player, SessionRecorder};
use crate::saver::game::SaverGame;
use crate::saver::scoreboard::PersistentScoreBoard;
use crate::scoreboard::ScoreBoard;

/// Session recorder that can display its score boards.
pub trait ScoreKeeper: SessionRecorder {
    /// Return the score boards.
    fn scores(&self) -> &ScoreBoard;
}

impl ScoreKeeper for ScoreBoard {
    fn scores(&self) -> &ScoreBoard {
        self
    }
}

impl ScoreKeeper for PersistentScoreBoard {
    fn scores(&self) -> &ScoreBoard {
        self.board()
    }
}

/// What to do after a command.
#[derive(Debug, PartialEq, Eq)]
enum Flow {
    Continue,
    Quit,
}

/// Format a number of seconds as displayed by the game clock.
fn format_time(seconds: u64) -> String {
    format!("{}:{:02}", seconds / 60, seconds % 60)
}

/// Terminal front end for the game.
pub struct Shell<R, W, K> {
    input: R,
    output: W,
    catalog: Catalog,
    player: Player,
    keeper: K,

    /// Saver for the game in progress. None disables saving.
    saver: Option<SaverGame>,
}

impl<R: BufRead, W: Write, K: ScoreKeeper> Shell<R, W, K> {
    /// Create a [`Shell`] object.
    pub fn new(input: R, output: W, player: Player, keeper: K, saver: Option<SaverGame>) -> Self {
        Self {
            input,
            output,
            catalog: Catalog::new(),
            player,
            keeper,
            saver,
        }
    }

    /// Return the score boards.
    pub fn scores(&self) -> &ScoreBoard {
        self.keeper.scores()
    }

    /// Return the game saved when the player last quit, if any.
    ///
    /// A save file that cannot be read is deleted.
    pub fn saved_game(&self) -> Option<GameSession> {
        let saver: &SaverGame = self.saver.as_ref()?;
        match saver.get_game() {
            Ok(Some(g)) => {
                debug!("Game value = {g:?}");
                Some(g)
            }
            Ok(None) => {
                debug!("No saved game");
                None
            }
            Err(error) => {
                warn!("Error getting the saved game: {error}");
                // Delete the file in error for trying to resolve the issue for the next start
                saver.delete_save();
                None
            }
        }
    }

    /// Play the given game, and then the next levels, until the player quits.
    ///
    /// The end of the input is processed as a quit command.
    pub fn run(&mut self, mut game: GameSession) -> io::Result<()> {
        self.show_puzzle(&game)?;
        loop {
            let Some(line) = self.prompt("> ")? else {
                return self.quit(&game);
            };
            if self.execute(&mut game, &line)? == Flow::Quit {
                return self.quit(&game);
            }
            if game.is_completed() {
                match self.complete(&game)? {
                    Some(next) => {
                        game = next;
                        self.show_puzzle(&game)?;
                    }
                    None => return self.quit(&game),
                }
            }
        }
    }

    /// Display the prompt and read a line. Return None at the end of the input.
    fn prompt(&mut self, prompt: &str) -> io::Result<Option<String>> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;
        let mut line: String = String::new();
        if self.input.read_line(&mut line)? == 0 {
            writeln!(self.output)?;
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    /// Run one command of the player.
    fn execute(&mut self, game: &mut GameSession, line: &str) -> io::Result<Flow> {
        let mut tokens = line.split_whitespace();
        let Some(command) = tokens.next() else {
            return Ok(Flow::Continue);
        };
        let first: Option<&str> = tokens.next();
        let second: Option<&str> = tokens.next();

        match command.to_lowercase().as_str() {
            "quit" | "exit" => return Ok(Flow::Quit),
            "help" | "?" => self.show_help(game)?,
            "hint" => match game.toggle_hint() {
                Some(hint) => writeln!(self.output, "Hint: {hint}")?,
                None => writeln!(self.output, "Hint hidden.")?,
            },
            "reset" => {
                *game = game.reset();
                writeln!(self.output, "Puzzle reset.")?;
                self.show_state(game)?;
            }
            "pause" => {
                game.pause();
                writeln!(self.output, "Game paused. Type \"resume\" to continue.")?;
            }
            "resume" => {
                game.resume();
                self.show_state(game)?;
            }
            "scores" => self.show_scores(game)?,
            name => {
                if game.is_paused() {
                    game.resume();
                }
                // DELETE only takes a position, INSERT takes a value and a position
                let (value, position) = match name {
                    "delete" => (None, first),
                    "insert" => (first, second),
                    _ => (first, None),
                };
                let result = game.apply_named(name, value, position);
                if let Some(message) = &result.message {
                    writeln!(self.output, "{message}")?;
                }
                if !result.completed {
                    self.show_state(game)?;
                }
            }
        }
        Ok(Flow::Continue)
    }

    /// Record the solved puzzle and offer the next level.
    ///
    /// Return the session for the next level, or None if the player stops.
    fn complete(&mut self, game: &GameSession) -> io::Result<Option<GameSession>> {
        let (minutes, seconds) = game.get_duration_ms();
        writeln!(
            self.output,
            "Final score: {}   Moves: {}   Time: {minutes}:{seconds:02}",
            game.score(),
            game.moves()
        )?;
        match game.report(&self.player, &mut self.keeper) {
            Ok(Some(position)) => writeln!(self.output, "New high score, rank #{position}!")?,
            Ok(None) if self.player.is_guest() => writeln!(
                self.output,
                "Guest runs are not recorded. Use --player to keep your scores."
            )?,
            Ok(None) => (),
            Err(error) => writeln!(self.output, "Warning: {error}")?,
        }

        let Some(level) = self
            .catalog
            .next_level(game.puzzle.kind, game.puzzle.level)
        else {
            writeln!(
                self.output,
                "You completed the last {} level.",
                game.puzzle.kind
            )?;
            return Ok(None);
        };
        let answer: Option<String> = self.prompt(&format!("Play level {level}? [Y/n] "))?;
        match answer.as_deref().map(str::to_lowercase).as_deref() {
            Some("" | "y" | "yes") => Ok(game.advance(&self.catalog).ok()),
            _ => Ok(None),
        }
    }

    /// Leave the game.
    ///
    /// An unfinished game is saved so that the player can continue it later. It is recorded as
    /// abandoned only when it cannot be saved: a resumed game is recorded when it ends.
    fn quit(&mut self, game: &GameSession) -> io::Result<()> {
        if game.is_completed() {
            if let Some(saver) = &self.saver {
                saver.delete_save();
            }
        } else if !self.save(game)? {
            if let Err(error) = game.report(&self.player, &mut self.keeper) {
                writeln!(self.output, "Warning: {error}")?;
            }
        }
        writeln!(self.output, "Goodbye, {}!", self.player)
    }

    /// Save the game in progress. Return whether the game is saved.
    fn save(&mut self, game: &GameSession) -> io::Result<bool> {
        let Some(saver) = &self.saver else {
            return Ok(false);
        };
        debug!("Saving the game");
        match saver.save_game(game) {
            Ok(()) => {
                writeln!(self.output, "Game saved.")?;
                Ok(true)
            }
            Err(error) => {
                warn!("Error saving the game: {error}");
                Ok(false)
            }
        }
    }

    fn show_puzzle(&mut self, game: &GameSession) -> io::Result<()> {
        let puzzle = &game.puzzle;
        let difficulty: String = puzzle
            .difficulty()
            .map(|d| format!(" ({d})"))
            .unwrap_or_default();
        writeln!(
            self.output,
            "\n{} level {}{difficulty}: {}",
            puzzle.kind, puzzle.level, puzzle.title
        )?;
        writeln!(self.output, "{}", puzzle.description)?;
        writeln!(self.output, "Target: [{}]", puzzle.target_state.join(", "))?;
        writeln!(self.output, "Suggested moves: {}", puzzle.max_moves)?;
        if game.is_hint_shown() {
            writeln!(self.output, "Hint: {}", game.hint_text())?;
        }
        self.show_state(game)
    }

    fn show_state(&mut self, game: &GameSession) -> io::Result<()> {
        writeln!(self.output, "{}", game.describe())?;
        writeln!(
            self.output,
            "Score: {}   Moves: {}   Time: {}",
            game.score(),
            game.moves(),
            format_time(game.get_duration().as_secs())
        )
    }

    fn show_help(&mut self, game: &GameSession) -> io::Result<()> {
        let names: &[&str] = Operation::names_for(game.puzzle.kind);
        if names.is_empty() {
            writeln!(self.output, "No operation available for this puzzle yet.")?;
        } else {
            writeln!(self.output, "Operations: {}", names.join(", ").to_lowercase())?;
        }
        writeln!(
            self.output,
            "Commands: hint, reset, pause, resume, scores, help, quit"
        )
    }

    fn show_scores(&mut self, game: &GameSession) -> io::Result<()> {
        let kind = game.puzzle.kind;
        let level: u32 = game.puzzle.level;
        let board: &ScoreBoard = self.keeper.scores();
        let mut lines: Vec<String> = Vec::new();

        match board.get_scores(kind, level) {
            Some(scores) if !scores.is_empty() => {
                lines.push(format!("Best runs for {kind} level {level}:"));
                for (i, s) in scores.iter().enumerate() {
                    let dt: DateTime<Local> = DateTime::from(s.when);
                    lines.push(format!(
                        "{:>2}. {:<12} {:>5} pts {:>3} moves {:>6}  {}",
                        i + 1,
                        s.player,
                        s.score,
                        s.moves,
                        format_time(s.time.as_secs()),
                        dt.format("%Y-%m-%d %H:%M")
                    ));
                }
            }
            _ => lines.push(format!("No score yet for {kind} level {level}.")),
        }

        if let Player::Registered(name) = &self.player {
            if let Some(progress) = board.progress(name, kind) {
                lines.push(format!(
                    "{name}: {} of {} attempted {kind} levels completed ({:.0}%), {} games",
                    progress.completed.len(),
                    progress.attempted.len(),
                    progress.completion_percentage(),
                    progress.games
                ));
            }
            lines.push(format!("{name}: total score {}", board.total_score(name)));
        }

        for line in lines {
            writeln!(self.output, "{line}")?;
        }
        Ok(())
    }
}
