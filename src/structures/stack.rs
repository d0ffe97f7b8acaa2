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

//! Stack: elements are added to and removed from the top.

use serde::{Deserialize, Serialize};

use super::{DataStructure, Outcome, require_value};
use crate::catalog::Kind;
use crate::operation::{Operation, Rejection};

/// Stack of elements. The last element of the vector is the top of the stack.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
pub struct Stack {
    items: Vec<String>,
}

impl Stack {
    /// Create a [`Stack`] object. The last given element is the top of the stack.
    pub fn new(elements: &[String]) -> Self {
        Self {
            items: elements.to_vec(),
        }
    }

    fn top(&self, action: Option<&'static str>) -> Result<&String, Rejection> {
        self.items.last().ok_or(Rejection::Empty {
            structure: "Stack",
            action,
        })
    }
}

impl DataStructure for Stack {
    fn kind(&self) -> Kind {
        Kind::Stack
    }

    fn elements(&self) -> Vec<String> {
        self.items.clone()
    }

    fn apply(&mut self, operation: &Operation) -> Result<Outcome, Rejection> {
        match operation {
            Operation::Push(value) => {
                require_value(value, "push")?;
                self.items.push(value.clone());
                Ok(Outcome::done())
            }
            Operation::Pop => {
                self.top(Some("pop"))?;
                self.items.pop();
                Ok(Outcome::done())
            }
            Operation::Peek => {
                let top: &String = self.top(None)?;
                Ok(Outcome::report(format!("Top element: {top}")))
            }
            _ => Err(operation.unavailable(Kind::Stack)),
        }
    }

    fn describe(&self) -> String {
        let mut lines: Vec<String> = self.items.iter().rev().map(|e| format!("| {e} |")).collect();
        lines.push(String::from("TOP ↑"));
        lines.join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stack(values: &[&str]) -> Stack {
        let v: Vec<String> = values.iter().map(|s| s.to_string()).collect();
        Stack::new(&v)
    }

    #[test]
    fn test_push_adds_at_top() {
        let mut s = stack(&["A"]);
        assert_eq!(s.apply(&Operation::Push(String::from("B"))), Ok(Outcome::done()));
        assert_eq!(s.elements(), vec!["A", "B"]);
    }

    #[test]
    fn test_push_requires_value() {
        let mut s = stack(&["A"]);
        assert_eq!(
            s.apply(&Operation::Push(String::new())),
            Err(Rejection::MissingValue { verb: "push" })
        );
        assert_eq!(s.elements(), vec!["A"]);
    }

    #[test]
    fn test_pop_removes_top() {
        let mut s = stack(&["A", "B"]);
        assert!(s.apply(&Operation::Pop).is_ok());
        assert_eq!(s.elements(), vec!["A"]);
    }

    #[test]
    fn test_pop_empty() {
        let mut s = stack(&[]);
        let err = s.apply(&Operation::Pop).expect_err("empty stack");
        assert_eq!(err.to_string(), "Stack is empty - cannot pop");
    }

    #[test]
    fn test_peek_reports_top() {
        let mut s = stack(&["A", "B"]);
        assert_eq!(
            s.apply(&Operation::Peek),
            Ok(Outcome::report(String::from("Top element: B")))
        );
        assert_eq!(s.elements(), vec!["A", "B"]);

        let mut empty = stack(&[]);
        let err = empty.apply(&Operation::Peek).expect_err("empty stack");
        assert_eq!(err.to_string(), "Stack is empty");
    }

    #[test]
    fn test_describe_lists_top_first() {
        let s = stack(&["A", "B"]);
        assert_eq!(s.describe(), "| B |\n| A |\nTOP ↑");
    }
}
