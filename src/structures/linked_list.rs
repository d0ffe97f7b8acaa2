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

//! Singly linked list: elements are inserted and deleted at any position.

use serde::{Deserialize, Serialize};
use std::collections::LinkedList;

use super::{DataStructure, Outcome, require_value};
use crate::catalog::Kind;
use crate::operation::{Operation, Rejection, resolve_position};

/// Linked list of elements.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
pub struct List {
    nodes: LinkedList<String>,
}

impl List {
    /// Create a [`List`] object. The first given element is the head of the list.
    pub fn new(elements: &[String]) -> Self {
        Self {
            nodes: elements.iter().cloned().collect(),
        }
    }

    /// Insert a node. A position past the end of the list appends the node.
    fn insert(&mut self, value: &str, position: isize) {
        let index: usize = resolve_position(position, self.nodes.len());
        let mut tail: LinkedList<String> = self.nodes.split_off(index);
        self.nodes.push_back(value.to_string());
        self.nodes.append(&mut tail);
    }

    /// Delete a node. A position past the end of the list deletes the last node.
    fn delete(&mut self, position: isize) -> Result<(), Rejection> {
        if self.nodes.is_empty() {
            return Err(Rejection::Empty {
                structure: "Linked list",
                action: Some("delete"),
            });
        }
        let last: usize = self.nodes.len() - 1;
        let index: usize = resolve_position(position, self.nodes.len()).min(last);
        let mut tail: LinkedList<String> = self.nodes.split_off(index);
        tail.pop_front();
        self.nodes.append(&mut tail);
        Ok(())
    }
}

impl DataStructure for List {
    fn kind(&self) -> Kind {
        Kind::LinkedList
    }

    fn elements(&self) -> Vec<String> {
        self.nodes.iter().cloned().collect()
    }

    fn apply(&mut self, operation: &Operation) -> Result<Outcome, Rejection> {
        match operation {
            Operation::Insert { value, position } => {
                require_value(value, "insert")?;
                self.insert(value, *position);
                Ok(Outcome::done())
            }
            Operation::Delete { position } => {
                self.delete(*position)?;
                Ok(Outcome::done())
            }
            Operation::Search(value) => {
                require_value(value, "search")?;
                match self.nodes.iter().position(|n| n == value) {
                    Some(i) => Ok(Outcome::report(format!("Found \"{value}\" at position {i}"))),
                    None => Ok(Outcome::miss(format!("\"{value}\" not found in the list"))),
                }
            }
            Operation::Traverse => Ok(Outcome::report(format!(
                "Current list: [{}]",
                self.elements().join(", ")
            ))),
            _ => Err(operation.unavailable(Kind::LinkedList)),
        }
    }

    fn describe(&self) -> String {
        let mut s: String = String::from("HEAD →");
        for node in &self.nodes {
            s.push_str(&format!(" [{node}] →"));
        }
        s.push_str(" NULL");
        s
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn list(values: &[&str]) -> List {
        let v: Vec<String> = values.iter().map(|s| s.to_string()).collect();
        List::new(&v)
    }

    fn insert(value: &str, position: isize) -> Operation {
        Operation::Insert {
            value: value.to_string(),
            position,
        }
    }

    #[test]
    fn test_insert_at_position() {
        let mut l = list(&["A", "B"]);
        assert!(l.apply(&insert("X", 0)).is_ok());
        assert!(l.apply(&insert("Y", 2)).is_ok());
        assert_eq!(l.elements(), vec!["X", "A", "Y", "B"]);
    }

    #[test]
    fn test_insert_past_end_appends() {
        let mut l = list(&["A"]);
        assert!(l.apply(&insert("Z", 42)).is_ok());
        assert_eq!(l.elements(), vec!["A", "Z"]);
    }

    #[test]
    fn test_insert_requires_value() {
        let mut l = list(&["A"]);
        assert_eq!(
            l.apply(&insert("", 0)),
            Err(Rejection::MissingValue { verb: "insert" })
        );
        assert_eq!(l.elements(), vec!["A"]);
    }

    #[test]
    fn test_delete_at_position() {
        let mut l = list(&["A", "B", "C"]);
        assert!(l.apply(&Operation::Delete { position: 1 }).is_ok());
        assert_eq!(l.elements(), vec!["A", "C"]);
    }

    #[test]
    fn test_delete_past_end_removes_last() {
        let mut l = list(&["A", "B", "C"]);
        assert!(l.apply(&Operation::Delete { position: 9 }).is_ok());
        assert_eq!(l.elements(), vec!["A", "B"]);
    }

    #[test]
    fn test_negative_positions_count_from_end() {
        let mut l = list(&["A", "B", "C"]);
        assert!(l.apply(&insert("X", -1)).is_ok());
        assert_eq!(l.elements(), vec!["A", "B", "X", "C"]);
        assert!(l.apply(&Operation::Delete { position: -1 }).is_ok());
        assert_eq!(l.elements(), vec!["A", "B", "X"]);
        assert!(l.apply(&Operation::Delete { position: -10 }).is_ok());
        assert_eq!(l.elements(), vec!["B", "X"]);
    }

    #[test]
    fn test_delete_empty() {
        let mut l = list(&[]);
        let err = l
            .apply(&Operation::Delete { position: 0 })
            .expect_err("empty list");
        assert_eq!(err.to_string(), "Linked list is empty - cannot delete");
    }

    #[test]
    fn test_search() {
        let mut l = list(&["A", "B", "B"]);
        assert_eq!(
            l.apply(&Operation::Search(String::from("B"))),
            Ok(Outcome::report(String::from("Found \"B\" at position 1")))
        );
        assert_eq!(
            l.apply(&Operation::Search(String::from("Q"))),
            Ok(Outcome::miss(String::from("\"Q\" not found in the list")))
        );
        assert_eq!(
            l.apply(&Operation::Search(String::new())),
            Err(Rejection::MissingValue { verb: "search" })
        );
    }

    #[test]
    fn test_traverse_empty_list_is_allowed() {
        let mut l = list(&[]);
        assert_eq!(
            l.apply(&Operation::Traverse),
            Ok(Outcome::report(String::from("Current list: []")))
        );
        let mut l = list(&["A", "B"]);
        assert_eq!(
            l.apply(&Operation::Traverse),
            Ok(Outcome::report(String::from("Current list: [A, B]")))
        );
    }

    #[test]
    fn test_describe() {
        assert_eq!(list(&["A", "B"]).describe(), "HEAD → [A] → [B] → NULL");
        assert_eq!(list(&[]).describe(), "HEAD → NULL");
    }
}
