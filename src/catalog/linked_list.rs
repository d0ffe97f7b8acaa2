/*
linked_list.rs

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

//! Linked list levels.

use super::PuzzleParameters;

/// Return the curated linked list puzzles.
pub fn levels() -> Vec<PuzzleParameters<'static>> {
    vec![
        // Easy levels
        PuzzleParameters {
            level: 1,
            title: "Basic Insertion",
            description: "Learn to insert elements",
            initial_state: &[],
            target_state: &["A", "B", "C"],
            hint: "Use INSERT operations to add elements at positions 0, 1, and 2",
            max_moves: 5,
        },
        PuzzleParameters {
            level: 2,
            title: "Insert and Delete",
            description: "Practice both insert and delete",
            initial_state: &["A", "B", "C"],
            target_state: &["A", "C"],
            hint: "Delete the element at position 1",
            max_moves: 3,
        },
        PuzzleParameters {
            level: 3,
            title: "List Reversal",
            description: "Reverse the linked list",
            initial_state: &["A", "B", "C"],
            target_state: &["C", "B", "A"],
            hint: "Delete all elements and insert them in reverse order",
            max_moves: 8,
        },
        // Medium levels
        PuzzleParameters {
            level: 11,
            title: "Complex List Operations",
            description: "Multiple insertions and deletions",
            initial_state: &["A", "B"],
            target_state: &["X", "A", "Y", "B"],
            hint: "Insert X at position 0, Y at position 2",
            max_moves: 6,
        },
        PuzzleParameters {
            level: 12,
            title: "List Building",
            description: "Build target list from scratch",
            initial_state: &[],
            target_state: &["P", "Q", "R", "S"],
            hint: "Insert elements in the correct order",
            max_moves: 5,
        },
        // Hard levels
        PuzzleParameters {
            level: 21,
            title: "Advanced List Logic",
            description: "Complex linked list manipulation",
            initial_state: &["A", "B", "C", "D"],
            target_state: &["B", "C", "E"],
            hint: "Delete A and D, insert E at position 2",
            max_moves: 8,
        },
        PuzzleParameters {
            level: 22,
            title: "List Transformation",
            description: "Transform list completely",
            initial_state: &["X", "Y"],
            target_state: &["A", "B", "C", "D", "E"],
            hint: "Remove existing elements and build new list",
            max_moves: 12,
        },
    ]
}
