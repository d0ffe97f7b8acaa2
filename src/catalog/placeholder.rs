/*
placeholder.rs

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

//! Placeholder levels for the data structures that are not playable yet.

use super::{Kind, Puzzle};

/// Move budget of the placeholder puzzles.
const PLACEHOLDER_MAX_MOVES: u32 = 10;

/// Return the placeholder puzzle for binary tree and graph levels.
///
/// Every level number has a placeholder, including the numbers past the level screen. Return
/// None for the other kinds.
pub fn get(kind: Kind, level: u32) -> Option<Puzzle> {
    let (title, name): (&str, &str) = match kind {
        Kind::BinaryTree => ("Binary Tree", "Binary tree"),
        Kind::Graph => ("Graph", "Graph"),
        _ => return None,
    };
    Some(Puzzle {
        id: format!("{}_{level}", kind.id_prefix()),
        kind,
        level,
        title: format!("{title} Puzzle {level}"),
        description: format!("{name} operations coming soon!"),
        initial_state: Vec::new(),
        target_state: Vec::new(),
        hint: format!("{name} visualization will be available soon"),
        max_moves: PLACEHOLDER_MAX_MOVES,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_placeholder_texts() {
        let p = get(Kind::BinaryTree, 4).expect("placeholder");
        assert_eq!(p.id, "tree_4");
        assert_eq!(p.title, "Binary Tree Puzzle 4");
        assert_eq!(p.hint, "Binary tree visualization will be available soon");
        assert_eq!(p.max_moves, 10);
    }

    #[test]
    fn test_placeholder_only_for_unplayable_kinds() {
        assert!(get(Kind::Stack, 1).is_none());
        assert!(get(Kind::Queue, 31).is_none());
    }

    #[test]
    fn test_placeholder_for_every_level() {
        let p = get(Kind::Graph, 31).expect("past the level screen");
        assert_eq!(p.id, "graph_31");
        assert_eq!(p.title, "Graph Puzzle 31");
        assert!(get(Kind::BinaryTree, 250).is_some());
    }
}
