/*
stack.rs

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

//! Stack levels.

use super::PuzzleParameters;

/// Return the curated stack puzzles.
pub fn levels() -> Vec<PuzzleParameters<'static>> {
    vec![
        // Easy levels
        PuzzleParameters {
            level: 1,
            title: "Basic Push Operations",
            description: "Learn to push elements onto the stack",
            initial_state: &[],
            target_state: &["A", "B", "C"],
            hint: "Use PUSH operations to add elements A, B, and C to the stack",
            max_moves: 5,
        },
        PuzzleParameters {
            level: 2,
            title: "Push and Pop",
            description: "Practice both push and pop operations",
            initial_state: &["A", "B"],
            target_state: &["A"],
            hint: "Remove one element using POP operation",
            max_moves: 3,
        },
        PuzzleParameters {
            level: 3,
            title: "Stack Reversal",
            description: "Reverse the stack using operations",
            initial_state: &["A", "B", "C"],
            target_state: &["C", "B", "A"],
            hint: "Pop all elements and push them back in reverse order",
            max_moves: 8,
        },
        PuzzleParameters {
            level: 4,
            title: "Stack Manipulation",
            description: "Manipulate the stack to reach target",
            initial_state: &["X"],
            target_state: &["X", "Y", "Z"],
            hint: "Push Y and Z to the stack",
            max_moves: 3,
        },
        PuzzleParameters {
            level: 5,
            title: "Empty Stack Challenge",
            description: "Empty the stack completely",
            initial_state: &["A", "B", "C", "D"],
            target_state: &[],
            hint: "Use POP operations to remove all elements",
            max_moves: 5,
        },
        // Medium levels
        PuzzleParameters {
            level: 11,
            title: "Complex Reversal",
            description: "Reverse a longer stack",
            initial_state: &["A", "B", "C", "D", "E"],
            target_state: &["E", "D", "C", "B", "A"],
            hint: "Pop all elements and push them back in reverse order",
            max_moves: 12,
        },
        PuzzleParameters {
            level: 12,
            title: "Selective Removal",
            description: "Remove specific elements",
            initial_state: &["A", "B", "C", "D", "E"],
            target_state: &["A", "C", "E"],
            hint: "Remove B and D using POP operations",
            max_moves: 6,
        },
        PuzzleParameters {
            level: 13,
            title: "Stack Building",
            description: "Build the target stack from scratch",
            initial_state: &[],
            target_state: &["X", "Y", "Z", "W"],
            hint: "Push elements in the correct order",
            max_moves: 5,
        },
        PuzzleParameters {
            level: 14,
            title: "Pattern Matching",
            description: "Create the exact pattern",
            initial_state: &["A"],
            target_state: &["A", "B", "A", "C"],
            hint: "Push B, then A, then C",
            max_moves: 4,
        },
        PuzzleParameters {
            level: 15,
            title: "Stack Transformation",
            description: "Transform the stack completely",
            initial_state: &["X", "Y"],
            target_state: &["A", "B", "C"],
            hint: "Remove existing elements and add new ones",
            max_moves: 8,
        },
        // Hard levels
        PuzzleParameters {
            level: 21,
            title: "Advanced Stack Logic",
            description: "Complex stack manipulation",
            initial_state: &["A", "B", "C", "D", "E", "F"],
            target_state: &["C", "D", "E"],
            hint: "Remove A, B, F using POP operations",
            max_moves: 10,
        },
        PuzzleParameters {
            level: 22,
            title: "Perfect Reversal",
            description: "Reverse with minimal moves",
            initial_state: &["P", "Q", "R", "S", "T", "U"],
            target_state: &["U", "T", "S", "R", "Q", "P"],
            hint: "Find the most efficient way to reverse",
            max_moves: 15,
        },
        PuzzleParameters {
            level: 23,
            title: "Stack Puzzle Master",
            description: "Ultimate stack challenge",
            initial_state: &["A", "B", "C"],
            target_state: &["X", "Y", "Z", "A", "B"],
            hint: "Think about the order of operations",
            max_moves: 12,
        },
    ]
}
