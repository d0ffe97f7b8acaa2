/*
structures.rs

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

//! Data structures that hold the elements of a puzzle.
//!
//! Every puzzle kind has its own structure, which implements the [`DataStructure`] trait:
//!
//! * [`stack::Stack`] accepts PUSH, POP, and PEEK.
//! * [`queue::Queue`] accepts ENQUEUE, DEQUEUE, FRONT, and REAR.
//! * [`linked_list::List`] accepts INSERT, DELETE, SEARCH, and TRAVERSE.
//! * [`placeholder::Placeholder`] is used for binary trees and graphs, and accepts nothing.
//!
//! The [`Structure`] enum selects the structure from the puzzle kind and forwards the calls.

pub mod linked_list;
pub mod placeholder;
pub mod queue;
pub mod stack;

use serde::{Deserialize, Serialize};

use crate::catalog::Kind;
use crate::operation::{Operation, Rejection};

/// What an applied operation reports back.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Outcome {
    /// Whether the operation is reported as successful.
    pub success: bool,

    /// Message for the player.
    pub message: Option<String>,
}

impl Outcome {
    /// The operation changed the elements and has nothing to report.
    pub fn done() -> Self {
        Self {
            success: true,
            message: None,
        }
    }

    /// The operation succeeded and reports a message.
    pub fn report(message: String) -> Self {
        Self {
            success: true,
            message: Some(message),
        }
    }

    /// The operation was applied but did not find what it looked for.
    pub fn miss(message: String) -> Self {
        Self {
            success: false,
            message: Some(message),
        }
    }
}

/// Capabilities shared by the data structures.
pub trait DataStructure {
    /// Return the kind of the structure.
    fn kind(&self) -> Kind;

    /// Return the elements, in order: bottom to top for a stack, front to rear for a queue, and
    /// head to tail for a linked list.
    fn elements(&self) -> Vec<String>;

    /// Apply an operation.
    ///
    /// # Errors
    ///
    /// When the operation does not belong to the structure or when its precondition does not
    /// hold, the structure is left untouched and the [`Rejection`] is returned.
    fn apply(&mut self, operation: &Operation) -> Result<Outcome, Rejection>;

    /// Return a text rendering of the structure.
    fn describe(&self) -> String;

    /// Whether the elements are the target elements, in the same order.
    fn is_win(&self, target: &[String]) -> bool {
        self.elements() == target
    }
}

/// Structure of a puzzle, selected from its kind.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub enum Structure {
    Stack(stack::Stack),
    Queue(queue::Queue),
    LinkedList(linked_list::List),
    Placeholder(placeholder::Placeholder),
}

impl Structure {
    /// Create the structure for the given kind, filled with the given elements.
    pub fn new(kind: Kind, elements: &[String]) -> Self {
        match kind {
            Kind::Stack => Structure::Stack(stack::Stack::new(elements)),
            Kind::Queue => Structure::Queue(queue::Queue::new(elements)),
            Kind::LinkedList => Structure::LinkedList(linked_list::List::new(elements)),
            Kind::BinaryTree | Kind::Graph => {
                Structure::Placeholder(placeholder::Placeholder::new(kind, elements))
            }
        }
    }

    fn inner(&self) -> &dyn DataStructure {
        match self {
            Structure::Stack(s) => s,
            Structure::Queue(q) => q,
            Structure::LinkedList(l) => l,
            Structure::Placeholder(p) => p,
        }
    }

    fn inner_mut(&mut self) -> &mut dyn DataStructure {
        match self {
            Structure::Stack(s) => s,
            Structure::Queue(q) => q,
            Structure::LinkedList(l) => l,
            Structure::Placeholder(p) => p,
        }
    }
}

impl DataStructure for Structure {
    fn kind(&self) -> Kind {
        self.inner().kind()
    }

    fn elements(&self) -> Vec<String> {
        self.inner().elements()
    }

    fn apply(&mut self, operation: &Operation) -> Result<Outcome, Rejection> {
        self.inner_mut().apply(operation)
    }

    fn describe(&self) -> String {
        self.inner().describe()
    }

    fn is_win(&self, target: &[String]) -> bool {
        self.inner().is_win(target)
    }
}

/// Reject empty values.
pub(crate) fn require_value(value: &str, verb: &'static str) -> Result<(), Rejection> {
    if value.is_empty() {
        return Err(Rejection::MissingValue { verb });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(values: &[&str]) -> Vec<String> {
        values.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_structure_from_kind() {
        let initial = strings(&["A", "B"]);
        for kind in Kind::all() {
            let structure = Structure::new(kind, &initial);
            assert_eq!(structure.kind(), kind);
            assert_eq!(structure.elements(), initial);
        }
    }

    #[test]
    fn test_is_win_is_ordered() {
        let structure = Structure::new(Kind::Queue, &strings(&["A", "B"]));
        assert!(structure.is_win(&strings(&["A", "B"])));
        assert!(!structure.is_win(&strings(&["B", "A"])));
        assert!(!structure.is_win(&strings(&["A"])));
        assert!(!structure.is_win(&strings(&["A", "B", "C"])));
    }

    #[test]
    fn test_operations_of_other_kinds_are_rejected() {
        let mut structure = Structure::new(Kind::Stack, &strings(&["A"]));
        assert_eq!(
            structure.apply(&Operation::Dequeue),
            Err(Rejection::Unavailable {
                operation: "DEQUEUE",
                kind: Kind::Stack
            })
        );
        assert_eq!(structure.elements(), strings(&["A"]));
    }
}
