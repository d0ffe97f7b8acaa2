/*
queue.rs

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

//! Queue levels.

use super::PuzzleParameters;

/// Return the curated queue puzzles.
pub fn levels() -> Vec<PuzzleParameters<'static>> {
    vec![
        // Easy levels
        PuzzleParameters {
            level: 1,
            title: "Basic Enqueue",
            description: "Learn to enqueue elements",
            initial_state: &[],
            target_state: &["A", "B", "C"],
            hint: "Use ENQUEUE operations to add elements A, B, and C",
            max_moves: 5,
        },
        PuzzleParameters {
            level: 2,
            title: "Enqueue and Dequeue",
            description: "Practice both enqueue and dequeue",
            initial_state: &["A", "B", "C"],
            target_state: &["B", "C"],
            hint: "Remove the front element using DEQUEUE",
            max_moves: 3,
        },
        PuzzleParameters {
            level: 3,
            title: "Queue Rotation",
            description: "Rotate the queue elements",
            initial_state: &["A", "B", "C"],
            target_state: &["B", "C", "A"],
            hint: "Dequeue A, then enqueue A at the rear",
            max_moves: 4,
        },
        // Medium levels
        PuzzleParameters {
            level: 11,
            title: "Complex Queue Operations",
            description: "Multiple enqueue and dequeue operations",
            initial_state: &["A", "B"],
            target_state: &["B", "C", "D"],
            hint: "Dequeue A, enqueue C and D",
            max_moves: 6,
        },
        PuzzleParameters {
            level: 12,
            title: "Queue Building",
            description: "Build target queue from current",
            initial_state: &["X"],
            target_state: &["X", "Y", "Z", "W"],
            hint: "Enqueue Y, Z, and W in order",
            max_moves: 4,
        },
        // Hard levels
        PuzzleParameters {
            level: 21,
            title: "Advanced Queue Logic",
            description: "Complex queue manipulation",
            initial_state: &["A", "B", "C", "D"],
            target_state: &["C", "D", "E"],
            hint: "Dequeue A and B, then enqueue E",
            max_moves: 8,
        },
        PuzzleParameters {
            level: 22,
            title: "Queue Transformation",
            description: "Transform queue completely",
            initial_state: &["X", "Y"],
            target_state: &["A", "B", "C", "D"],
            hint: "Remove existing elements and add new ones",
            max_moves: 10,
        },
    ]
}
