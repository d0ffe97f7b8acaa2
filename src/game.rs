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

//! Manage the status of a game in progress.
//!
//! A [`GameSession`] owns the [`Puzzle`] being played and the live data structure. The
//! presentation layer sends it the operations collected from the player with
//! [`GameSession::apply`] or [`GameSession::apply_named`], and displays the returned
//! [`OperationResult`].
//!
//! The session is the only place where the elements, the score, and the move counter change.

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::time::{Duration, Instant, SystemTime};

use crate::catalog::{Catalog, Kind, Puzzle};
use crate::error::GameError;
use crate::operation::{Operation, OperationResult, Rejection};
use crate::recorder::{Player, RecorderError, SessionRecord, SessionRecorder};
use crate::saver::game::instant;
use crate::structures::{DataStructure, Structure};

/// Points removed each time the player displays the hint.
pub const HINT_PENALTY: u32 = 5;

/// Message displayed when the puzzle is solved.
pub const COMPLETED_MESSAGE: &str = "Puzzle complete! Excellent work!";

/// Hint text for puzzles without a hint.
const NO_HINT: &str = "No hint available for this puzzle.";

/// Manage the status of the game in progress.
#[derive(Serialize, Deserialize, Debug)]
pub struct GameSession {
    /// Puzzle details.
    pub puzzle: Puzzle,

    /// Live elements, in the data structure of the puzzle.
    structure: Structure,

    /// Current score. Never negative.
    score: u32,

    /// Number of operations applied so far.
    moves: u32,

    /// Whether the puzzle is solved.
    completed: bool,

    /// Whether the hint is displayed.
    hint_shown: bool,

    /// Whether the player paused the game.
    paused: bool,

    /// Time when the game started. Used to compute game duration.
    #[serde(with = "instant")]
    start_time: Instant,

    /// The elapsed time when the player paused the game.
    pause_duration: Option<Duration>,

    /// The elapsed time when the puzzle was solved. The clock stops at that time.
    final_duration: Option<Duration>,
}

impl GameSession {
    /// Create a [`GameSession`] object for the given puzzle. The clock starts immediately.
    pub fn new(puzzle: Puzzle) -> Self {
        debug!(
            "New session for {} level {} ({})",
            puzzle.kind, puzzle.level, puzzle.id
        );
        Self {
            structure: Structure::new(puzzle.kind, &puzzle.initial_state),
            puzzle,
            score: 0,
            moves: 0,
            completed: false,
            hint_shown: false,
            paused: false,
            start_time: Instant::now(),
            pause_duration: None,
            final_duration: None,
        }
    }

    /// Create a [`GameSession`] object for the given kind and level.
    ///
    /// # Errors
    ///
    /// Return [`GameError::MissingPuzzle`] if the catalog has no puzzle for that level.
    pub fn start(catalog: &Catalog, kind: Kind, level: u32) -> Result<Self, GameError> {
        let puzzle: Puzzle = catalog.require(kind, level)?;
        Ok(Self::new(puzzle))
    }

    /// Return a new session for the same puzzle, from its initial state.
    pub fn reset(&self) -> Self {
        Self::new(self.puzzle.clone())
    }

    /// Return a session for the next level.
    ///
    /// # Errors
    ///
    /// Return [`GameError::MissingPuzzle`] if the catalog has no puzzle for the next level.
    pub fn advance(&self, catalog: &Catalog) -> Result<Self, GameError> {
        let level: u32 = self.puzzle.level.saturating_add(1);
        Self::start(catalog, self.puzzle.kind, level)
    }

    /// Apply an operation to the elements.
    ///
    /// When the operation is rejected, nothing changes and the result carries the reason.
    /// Otherwise the move counter is incremented, the points of the operation are added, and the
    /// elements are compared with the target.
    pub fn apply(&mut self, operation: &Operation) -> OperationResult {
        if self.completed {
            return self.rejected(Rejection::Completed);
        }
        match self.structure.apply(operation) {
            Err(rejection) => {
                debug!("{operation} rejected: {rejection}");
                self.rejected(rejection)
            }
            Ok(outcome) => {
                self.moves += 1;
                self.score += operation.points();
                debug!(
                    "{operation} applied: score = {}, moves = {}",
                    self.score, self.moves
                );
                let mut message: Option<String> = outcome.message;
                if self.structure.is_win(&self.puzzle.target_state) {
                    self.complete();
                    message = Some(String::from(COMPLETED_MESSAGE));
                }
                OperationResult {
                    success: outcome.success,
                    message,
                    elements: self.structure.elements(),
                    completed: self.completed,
                }
            }
        }
    }

    /// Build the operation from its name and raw arguments, and then apply it.
    ///
    /// See [`Operation::parse`] for the argument rules.
    pub fn apply_named(
        &mut self,
        name: &str,
        value: Option<&str>,
        position: Option<&str>,
    ) -> OperationResult {
        match Operation::parse(name, value, position) {
            Ok(operation) => self.apply(&operation),
            Err(rejection) => self.rejected(rejection),
        }
    }

    fn rejected(&self, rejection: Rejection) -> OperationResult {
        OperationResult {
            success: false,
            message: Some(rejection.to_string()),
            elements: self.structure.elements(),
            completed: self.completed,
        }
    }

    /// Stop the clock and mark the puzzle as solved.
    fn complete(&mut self) {
        self.final_duration = Some(self.get_duration());
        self.completed = true;
        self.paused = false;
        self.pause_duration = None;
        info!(
            "{} level {} completed: score = {}, moves = {}",
            self.puzzle.kind, self.puzzle.level, self.score, self.moves
        );
    }

    /// Toggle the hint. Showing the hint costs [`HINT_PENALTY`] points.
    ///
    /// Return the hint text when the hint is now displayed, or None when it is now hidden.
    pub fn toggle_hint(&mut self) -> Option<&str> {
        if self.hint_shown {
            self.hide_hint();
            None
        } else {
            Some(self.show_hint())
        }
    }

    /// Display the hint and return its text.
    ///
    /// Points are only removed when the hint was hidden.
    pub fn show_hint(&mut self) -> &str {
        if !self.hint_shown {
            self.hint_shown = true;
            self.score = self.score.saturating_sub(HINT_PENALTY);
            debug!("Hint displayed: score = {}", self.score);
        }
        self.hint_text()
    }

    /// Hide the hint.
    pub fn hide_hint(&mut self) {
        self.hint_shown = false;
    }

    /// Whether the hint is displayed.
    pub fn is_hint_shown(&self) -> bool {
        self.hint_shown
    }

    /// Return the hint text.
    pub fn hint_text(&self) -> &str {
        if self.puzzle.hint.is_empty() {
            NO_HINT
        } else {
            &self.puzzle.hint
        }
    }

    /// Return the score.
    pub fn score(&self) -> u32 {
        self.score
    }

    /// Return the number of applied operations.
    pub fn moves(&self) -> u32 {
        self.moves
    }

    /// Whether the puzzle is solved.
    pub fn is_completed(&self) -> bool {
        self.completed
    }

    /// Whether the game is paused.
    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// Return the elements, in order.
    pub fn elements(&self) -> Vec<String> {
        self.structure.elements()
    }

    /// Return a text rendering of the data structure.
    pub fn describe(&self) -> String {
        self.structure.describe()
    }

    /// Pause the game.
    pub fn pause(&mut self) {
        if self.completed || self.paused {
            return;
        }
        // Store the played time so far, so that the pause time can be deduced when the
        // player resumes the game.
        self.pause_duration = Some(self.start_time.elapsed());
        self.paused = true;
    }

    /// Resume the game.
    pub fn resume(&mut self) {
        // Refresh the game elapsed time by removing the pause time.
        if let Some(d) = self.pause_duration {
            self.start_time += self.start_time.elapsed() - d;
            self.pause_duration = None;
        }
        self.paused = false;
    }

    /// Return the game duration.
    pub fn get_duration(&self) -> Duration {
        self.final_duration
            .or(self.pause_duration)
            .unwrap_or_else(|| self.start_time.elapsed())
    }

    /// Return the game duration in minutes and seconds, as displayed by the game clock.
    pub fn get_duration_ms(&self) -> (u64, u64) {
        let duration: u64 = self.get_duration().as_secs();
        (duration / 60, duration % 60)
    }

    /// Build the record of the session for the given player name.
    pub fn to_record(&self, player: &str) -> SessionRecord {
        SessionRecord {
            player: player.to_string(),
            kind: self.puzzle.kind,
            level: self.puzzle.level,
            score: self.score,
            moves: self.moves,
            elapsed: self.get_duration(),
            completed: self.completed,
            finished_at: SystemTime::now(),
        }
    }

    /// Send the session to the recorder, after the puzzle is solved or when the player abandons
    /// it. Guest sessions are not recorded.
    ///
    /// Return the position of the session in the recorder ranking, if any.
    ///
    /// # Errors
    ///
    /// Return the recorder error. The session itself is not modified.
    pub fn report<R: SessionRecorder + ?Sized>(
        &self,
        player: &Player,
        recorder: &mut R,
    ) -> Result<Option<usize>, RecorderError> {
        let Player::Registered(name) = player else {
            debug!("Guest session: not recorded");
            return Ok(None);
        };
        recorder
            .record(&self.to_record(name))
            .inspect_err(|error| warn!("Cannot record the session: {error}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scoreboard::ScoreBoard;

    fn strings(values: &[&str]) -> Vec<String> {
        values.iter().map(|s| s.to_string()).collect()
    }

    fn puzzle(kind: Kind, initial: &[&str], target: &[&str]) -> Puzzle {
        Puzzle {
            id: String::from("test_1"),
            kind,
            level: 1,
            title: String::from("Test"),
            description: String::new(),
            initial_state: strings(initial),
            target_state: strings(target),
            hint: String::from("Try harder"),
            max_moves: 5,
        }
    }

    /// Recorder that always fails.
    struct Offline;

    impl SessionRecorder for Offline {
        fn record(&mut self, _record: &SessionRecord) -> Result<Option<usize>, RecorderError> {
            Err(RecorderError::Unavailable(String::from("network down")))
        }
    }

    #[test]
    fn test_build_stack_from_scratch() {
        let mut game = GameSession::new(puzzle(Kind::Stack, &[], &["A", "B", "C"]));
        game.apply_named("PUSH", Some("A"), None);
        game.apply_named("PUSH", Some("B"), None);
        let result = game.apply_named("PUSH", Some("C"), None);

        assert_eq!(result.elements, strings(&["A", "B", "C"]));
        assert!(result.completed);
        assert_eq!(result.message.as_deref(), Some(COMPLETED_MESSAGE));
        assert_eq!(game.moves(), 3);
        assert_eq!(game.score(), 30);
        assert!(game.is_completed());
    }

    #[test]
    fn test_stack_reversal() {
        let mut game = GameSession::new(puzzle(Kind::Stack, &["A", "B", "C"], &["C", "B", "A"]));
        for _ in 0..3 {
            assert!(!game.apply(&Operation::Pop).completed);
        }
        game.apply(&Operation::Push(String::from("C")));
        game.apply(&Operation::Push(String::from("B")));
        let result = game.apply(&Operation::Push(String::from("A")));

        assert_eq!(result.elements, strings(&["C", "B", "A"]));
        assert!(result.completed);
        assert_eq!(game.score(), 3 * 15 + 3 * 10);
    }

    #[test]
    fn test_queue_dequeue_wins() {
        let mut game = GameSession::new(puzzle(Kind::Queue, &["A", "B", "C"], &["B", "C"]));
        let result = game.apply(&Operation::Dequeue);
        assert_eq!(result.elements, strings(&["B", "C"]));
        assert_eq!(game.score(), 15);
        assert!(game.is_completed());
    }

    #[test]
    fn test_rejection_changes_nothing() {
        let mut game = GameSession::new(puzzle(Kind::Stack, &[], &["A"]));
        let result = game.apply(&Operation::Pop);
        assert!(!result.success);
        assert_eq!(
            result.message.as_deref(),
            Some("Stack is empty - cannot pop")
        );
        assert_eq!(game.moves(), 0);
        assert_eq!(game.score(), 0);
        assert!(game.elements().is_empty());
    }

    #[test]
    fn test_unknown_and_foreign_operations() {
        let mut game = GameSession::new(puzzle(Kind::Queue, &["A"], &[]));
        let result = game.apply_named("spin", None, None);
        assert_eq!(result.message.as_deref(), Some("Unknown operation \"spin\""));
        let result = game.apply_named("push", Some("B"), None);
        assert_eq!(
            result.message.as_deref(),
            Some("Operation PUSH is not available for a Queue puzzle")
        );
        assert_eq!(game.moves(), 0);
        assert_eq!(game.elements(), strings(&["A"]));
    }

    #[test]
    fn test_search_miss_is_charged() {
        let mut game = GameSession::new(puzzle(Kind::LinkedList, &["A"], &["B"]));
        let result = game.apply_named("search", Some("Z"), None);
        assert!(!result.success);
        assert_eq!(game.moves(), 1);
        assert_eq!(game.score(), 5);
    }

    #[test]
    fn test_completed_session_rejects_operations() {
        let mut game = GameSession::new(puzzle(Kind::Stack, &[], &["A"]));
        assert!(game.apply(&Operation::Push(String::from("A"))).completed);
        let result = game.apply(&Operation::Pop);
        assert!(!result.success);
        assert_eq!(result.message.as_deref(), Some("Puzzle already completed"));
        assert_eq!(game.elements(), strings(&["A"]));
        assert_eq!(game.moves(), 1);
    }

    #[test]
    fn test_placeholder_never_completes() {
        let catalog = Catalog::new();
        let mut game = GameSession::start(&catalog, Kind::BinaryTree, 3).expect("placeholder");
        let result = game.apply_named("push", Some("A"), None);
        assert!(!result.success);
        assert!(!game.is_completed());
        assert_eq!(game.moves(), 0);
    }

    #[test]
    fn test_hint_penalty_once_per_display() {
        let mut game = GameSession::new(puzzle(Kind::Stack, &[], &["A", "B"]));
        game.apply(&Operation::Push(String::from("A")));
        assert_eq!(game.score(), 10);

        assert_eq!(game.show_hint(), "Try harder");
        assert_eq!(game.show_hint(), "Try harder");
        assert_eq!(game.score(), 5);

        assert_eq!(game.toggle_hint(), None);
        assert_eq!(game.toggle_hint(), Some("Try harder"));
        assert_eq!(game.score(), 0);

        game.hide_hint();
        game.show_hint();
        assert_eq!(game.score(), 0);
        assert_eq!(game.moves(), 1);
    }

    #[test]
    fn test_hint_fallback_text() {
        let mut p = puzzle(Kind::Stack, &[], &["A"]);
        p.hint = String::new();
        let game = GameSession::new(p);
        assert_eq!(game.hint_text(), NO_HINT);
    }

    #[test]
    fn test_start_missing_level() {
        let catalog = Catalog::new();
        assert_eq!(
            GameSession::start(&catalog, Kind::Stack, 7).err(),
            Some(GameError::MissingPuzzle {
                kind: Kind::Stack,
                level: 7
            })
        );
    }

    #[test]
    fn test_reset_and_advance() {
        let catalog = Catalog::new();
        let mut game = GameSession::start(&catalog, Kind::Queue, 2).expect("queue 2");
        game.apply(&Operation::Dequeue);
        assert!(game.is_completed());

        let again = game.reset();
        assert_eq!(again.elements(), strings(&["A", "B", "C"]));
        assert_eq!(again.score(), 0);
        assert!(!again.is_completed());

        let next = game.advance(&catalog).expect("queue 3");
        assert_eq!(next.puzzle.id, "queue_3");

        let last = GameSession::start(&catalog, Kind::Queue, 3).expect("queue 3");
        assert!(last.advance(&catalog).is_err());
    }

    #[test]
    fn test_clock_stops_when_completed() {
        let mut game = GameSession::new(puzzle(Kind::Stack, &[], &["A"]));
        game.apply(&Operation::Push(String::from("A")));
        let first: Duration = game.get_duration();
        std::thread::sleep(Duration::from_millis(20));
        assert_eq!(game.get_duration(), first);
    }

    #[test]
    fn test_pause_freezes_clock() {
        let mut game = GameSession::new(puzzle(Kind::Stack, &[], &["A"]));
        game.pause();
        assert!(game.is_paused());
        let paused: Duration = game.get_duration();
        std::thread::sleep(Duration::from_millis(20));
        assert_eq!(game.get_duration(), paused);
        game.resume();
        assert!(!game.is_paused());
        assert!(game.get_duration() < paused + Duration::from_millis(20));
    }

    #[test]
    fn test_report_skips_guests() {
        let mut game = GameSession::new(puzzle(Kind::Stack, &[], &["A"]));
        game.apply(&Operation::Push(String::from("A")));
        let mut board = ScoreBoard::new();
        assert_eq!(game.report(&Player::Guest, &mut board).ok(), Some(None));
        assert_eq!(board.games_played(), 0);

        let player = Player::Registered(String::from("alice"));
        assert_eq!(game.report(&player, &mut board).ok(), Some(Some(1)));
        assert_eq!(board.games_played(), 1);
    }

    #[test]
    fn test_recorder_failure_keeps_state() {
        let mut game = GameSession::new(puzzle(Kind::Stack, &[], &["A", "B"]));
        game.apply(&Operation::Push(String::from("A")));
        let player = Player::Registered(String::from("bob"));
        assert!(game.report(&player, &mut Offline).is_err());
        assert_eq!(game.elements(), strings(&["A"]));
        assert_eq!(game.score(), 10);
        let result = game.apply(&Operation::Push(String::from("B")));
        assert!(result.completed);
    }

    #[test]
    fn test_to_record() {
        let mut game = GameSession::new(puzzle(Kind::Stack, &["A"], &[]));
        game.apply(&Operation::Pop);
        let record = game.to_record("carol");
        assert_eq!(record.player, "carol");
        assert_eq!(record.kind, Kind::Stack);
        assert_eq!(record.score, 15);
        assert_eq!(record.moves, 1);
        assert!(record.completed);
    }
}
