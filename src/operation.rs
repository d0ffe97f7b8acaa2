/*
operation.rs

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

//! Operations that the player applies to the data structure of a puzzle.
//!
//! The presentation layer collects an operation name and its arguments from the player, and
//! then builds an [`Operation`] with [`Operation::parse`].
//! Only the arguments are validated at that stage: whether the operation is allowed for the
//! current data structure, and whether its preconditions hold, is decided when the operation is
//! applied (see [`crate::structures`]).

use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::IntErrorKind;

use crate::catalog::Kind;

/// Points for an operation that adds an element.
pub const ADD_POINTS: u32 = 10;

/// Points for an operation that removes an element.
pub const REMOVE_POINTS: u32 = 15;

/// Points for a read-only operation.
pub const QUERY_POINTS: u32 = 5;

/// Operation on the elements of a puzzle.
///
/// Positions are 0-based indexes into the element sequence. A negative position counts from the
/// end of the sequence: -1 is the last element.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub enum Operation {
    /// Add an element at the top of a stack.
    Push(String),
    /// Remove the element at the top of a stack.
    Pop,
    /// Report the element at the top of a stack.
    Peek,
    /// Add an element at the rear of a queue.
    Enqueue(String),
    /// Remove the element at the front of a queue.
    Dequeue,
    /// Report the element at the front of a queue.
    Front,
    /// Report the element at the rear of a queue.
    Rear,
    /// Insert an element in a linked list.
    Insert { value: String, position: isize },
    /// Delete an element from a linked list.
    Delete { position: isize },
    /// Look for an element in a linked list.
    Search(String),
    /// Report all the elements of a linked list.
    Traverse,
}

/// Reason why an operation was not applied.
///
/// A rejected operation does not change the puzzle, the score, or the move counter.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum Rejection {
    /// The operation needs a value and the player did not provide one.
    #[error("Please enter a value to {verb}")]
    MissingValue { verb: &'static str },

    /// The data structure is empty.
    #[error("{structure} is empty{}", .action.map(|a| format!(" - cannot {a}")).unwrap_or_default())]
    Empty {
        structure: &'static str,
        action: Option<&'static str>,
    },

    /// The operation does not belong to the data structure of the puzzle.
    #[error("Operation {operation} is not available for a {kind} puzzle")]
    Unavailable { operation: &'static str, kind: Kind },

    /// The operation name is not known.
    #[error("Unknown operation {0:?}")]
    Unknown(String),

    /// The puzzle is already solved.
    #[error("Puzzle already completed")]
    Completed,
}

/// Convert a position argument to a signed index.
///
/// Like the number fields of the game, an optional sign and the leading digits are read. A
/// missing or non-numeric position is 0. A number too large for an index saturates, so that it
/// still designates the end of the sequence.
pub fn parse_position(position: Option<&str>) -> isize {
    let text: &str = position.unwrap_or_default().trim();
    let (negative, unsigned): (bool, &str) = match text.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, text.strip_prefix('+').unwrap_or(text)),
    };
    let end: usize = unsigned
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(unsigned.len());
    let digits: &str = &unsigned[..end];
    if digits.is_empty() {
        return 0;
    }
    let magnitude: isize = match digits.parse::<isize>() {
        Ok(n) => n,
        Err(error) => match error.kind() {
            IntErrorKind::PosOverflow => isize::MAX,
            _ => 0,
        },
    };
    if negative { -magnitude } else { magnitude }
}

/// Resolve a signed position against a sequence length.
///
/// Negative positions count from the end and stop at the head. The result is at most `len`.
pub fn resolve_position(position: isize, len: usize) -> usize {
    if position < 0 {
        len.saturating_sub(position.unsigned_abs())
    } else {
        position.unsigned_abs().min(len)
    }
}

impl Operation {
    /// Build an operation from its name and the raw arguments collected from the player.
    ///
    /// The name is case-insensitive. Values are kept as provided: an empty value is rejected
    /// later, when the operation is applied.
    ///
    /// # Errors
    ///
    /// Return [`Rejection::Unknown`] if the operation name is not known.
    pub fn parse(
        name: &str,
        value: Option<&str>,
        position: Option<&str>,
    ) -> Result<Self, Rejection> {
        let value: String = value.unwrap_or_default().to_string();
        let operation: Operation = match name.trim().to_uppercase().as_str() {
            "PUSH" => Operation::Push(value),
            "POP" => Operation::Pop,
            "PEEK" => Operation::Peek,
            "ENQUEUE" => Operation::Enqueue(value),
            "DEQUEUE" => Operation::Dequeue,
            "FRONT" => Operation::Front,
            "REAR" => Operation::Rear,
            "INSERT" => Operation::Insert {
                value,
                position: parse_position(position),
            },
            "DELETE" => Operation::Delete {
                position: parse_position(position),
            },
            "SEARCH" => Operation::Search(value),
            "TRAVERSE" => Operation::Traverse,
            _ => return Err(Rejection::Unknown(name.to_string())),
        };
        Ok(operation)
    }

    /// Return the operation name, as displayed on the buttons of the game.
    pub fn name(&self) -> &'static str {
        match self {
            Operation::Push(_) => "PUSH",
            Operation::Pop => "POP",
            Operation::Peek => "PEEK",
            Operation::Enqueue(_) => "ENQUEUE",
            Operation::Dequeue => "DEQUEUE",
            Operation::Front => "FRONT",
            Operation::Rear => "REAR",
            Operation::Insert { .. } => "INSERT",
            Operation::Delete { .. } => "DELETE",
            Operation::Search(_) => "SEARCH",
            Operation::Traverse => "TRAVERSE",
        }
    }

    /// Return the data structure kind the operation belongs to.
    pub fn kind(&self) -> Kind {
        match self {
            Operation::Push(_) | Operation::Pop | Operation::Peek => Kind::Stack,
            Operation::Enqueue(_) | Operation::Dequeue | Operation::Front | Operation::Rear => {
                Kind::Queue
            }
            Operation::Insert { .. }
            | Operation::Delete { .. }
            | Operation::Search(_)
            | Operation::Traverse => Kind::LinkedList,
        }
    }

    /// Return the points earned when the operation is applied.
    pub fn points(&self) -> u32 {
        match self {
            Operation::Push(_) | Operation::Enqueue(_) | Operation::Insert { .. } => ADD_POINTS,
            Operation::Pop | Operation::Dequeue | Operation::Delete { .. } => REMOVE_POINTS,
            Operation::Peek
            | Operation::Front
            | Operation::Rear
            | Operation::Search(_)
            | Operation::Traverse => QUERY_POINTS,
        }
    }

    /// Return the names of the operations available for the given kind.
    pub fn names_for(kind: Kind) -> &'static [&'static str] {
        match kind {
            Kind::Stack => &["PUSH", "POP", "PEEK"],
            Kind::Queue => &["ENQUEUE", "DEQUEUE", "FRONT", "REAR"],
            Kind::LinkedList => &["INSERT", "DELETE", "SEARCH", "TRAVERSE"],
            Kind::BinaryTree | Kind::Graph => &[],
        }
    }

    /// Return the rejection for this operation when it is used with another kind.
    pub fn unavailable(&self, kind: Kind) -> Rejection {
        Rejection::Unavailable {
            operation: self.name(),
            kind,
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Operation::Push(v) | Operation::Enqueue(v) | Operation::Search(v) => {
                write!(f, "{} {v}", self.name())
            }
            Operation::Insert { value, position } => write!(f, "INSERT {value} {position}"),
            Operation::Delete { position } => write!(f, "DELETE {position}"),
            _ => write!(f, "{}", self.name()),
        }
    }
}

/// Result of an operation, reported to the presentation layer.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct OperationResult {
    /// Whether the operation succeeded. A search that does not find its value is applied, but
    /// is reported as unsuccessful.
    pub success: bool,

    /// Message for the player, if any.
    pub message: Option<String>,

    /// Elements after the operation, in order.
    pub elements: Vec<String>,

    /// Whether the puzzle is solved.
    pub completed: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!(
            Operation::parse("push", Some("A"), None),
            Ok(Operation::Push(String::from("A")))
        );
        assert_eq!(Operation::parse(" Pop ", None, None), Ok(Operation::Pop));
        assert_eq!(Operation::parse("TRAVERSE", None, None), Ok(Operation::Traverse));
    }

    #[test]
    fn test_parse_unknown_name() {
        assert_eq!(
            Operation::parse("rotate", None, None),
            Err(Rejection::Unknown(String::from("rotate")))
        );
    }

    #[test]
    fn test_parse_keeps_empty_values() {
        assert_eq!(
            Operation::parse("enqueue", None, None),
            Ok(Operation::Enqueue(String::new()))
        );
    }

    #[test]
    fn test_position_defaults_to_zero() {
        assert_eq!(parse_position(None), 0);
        assert_eq!(parse_position(Some("")), 0);
        assert_eq!(parse_position(Some("abc")), 0);
        assert_eq!(parse_position(Some("-")), 0);
        assert_eq!(parse_position(Some(" 3 ")), 3);
        assert_eq!(parse_position(Some("4th")), 4);
    }

    #[test]
    fn test_signed_positions() {
        assert_eq!(parse_position(Some("-2")), -2);
        assert_eq!(parse_position(Some("+3")), 3);
        assert_eq!(parse_position(Some("-0")), 0);
    }

    #[test]
    fn test_huge_position_saturates() {
        assert_eq!(parse_position(Some("99999999999999999999999")), isize::MAX);
        assert_eq!(parse_position(Some("-99999999999999999999999")), -isize::MAX);
    }

    #[test]
    fn test_resolve_position() {
        assert_eq!(resolve_position(1, 3), 1);
        assert_eq!(resolve_position(7, 3), 3);
        assert_eq!(resolve_position(isize::MAX, 3), 3);
        assert_eq!(resolve_position(-1, 3), 2);
        assert_eq!(resolve_position(-5, 3), 0);
        assert_eq!(resolve_position(-1, 0), 0);
    }

    #[test]
    fn test_parse_insert_and_delete() {
        assert_eq!(
            Operation::parse("insert", Some("X"), Some("2")),
            Ok(Operation::Insert {
                value: String::from("X"),
                position: 2
            })
        );
        assert_eq!(
            Operation::parse("delete", None, Some("oops")),
            Ok(Operation::Delete { position: 0 })
        );
    }

    #[test]
    fn test_points() {
        assert_eq!(Operation::Push(String::from("A")).points(), 10);
        assert_eq!(Operation::Dequeue.points(), 15);
        assert_eq!(Operation::Delete { position: 0 }.points(), 15);
        assert_eq!(Operation::Rear.points(), 5);
        assert_eq!(Operation::Traverse.points(), 5);
    }

    #[test]
    fn test_kind_matches_vocabulary() {
        for kind in Kind::all() {
            for name in Operation::names_for(kind) {
                let operation = Operation::parse(name, Some("A"), None).expect("known name");
                assert_eq!(operation.kind(), kind);
            }
        }
    }

    #[test]
    fn test_rejection_messages() {
        assert_eq!(
            Rejection::Empty {
                structure: "Stack",
                action: Some("pop")
            }
            .to_string(),
            "Stack is empty - cannot pop"
        );
        assert_eq!(
            Rejection::Empty {
                structure: "Queue",
                action: None
            }
            .to_string(),
            "Queue is empty"
        );
        assert_eq!(
            Operation::Pop.unavailable(Kind::Queue).to_string(),
            "Operation POP is not available for a Queue puzzle"
        );
    }
}
