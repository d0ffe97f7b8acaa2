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

//! Structure for the kinds that have no operations yet (binary trees and graphs).

use serde::{Deserialize, Serialize};

use super::{DataStructure, Outcome};
use crate::catalog::Kind;
use crate::operation::{Operation, Rejection};

/// Elements of a puzzle whose data structure is not playable yet.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Placeholder {
    kind: Kind,
    items: Vec<String>,
}

impl Placeholder {
    /// Create a [`Placeholder`] object.
    pub fn new(kind: Kind, elements: &[String]) -> Self {
        Self {
            kind,
            items: elements.to_vec(),
        }
    }
}

impl DataStructure for Placeholder {
    fn kind(&self) -> Kind {
        self.kind
    }

    fn elements(&self) -> Vec<String> {
        self.items.clone()
    }

    fn apply(&mut self, operation: &Operation) -> Result<Outcome, Rejection> {
        Err(operation.unavailable(self.kind))
    }

    fn describe(&self) -> String {
        format!("{} visualization coming soon!", self.kind)
    }

    /// Placeholder puzzles cannot be solved.
    fn is_win(&self, _target: &[String]) -> bool {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_operation_is_rejected() {
        let mut p = Placeholder::new(Kind::Graph, &[]);
        for operation in [
            Operation::Push(String::from("A")),
            Operation::Dequeue,
            Operation::Traverse,
        ] {
            assert!(matches!(
                p.apply(&operation),
                Err(Rejection::Unavailable {
                    kind: Kind::Graph,
                    ..
                })
            ));
        }
        assert!(p.elements().is_empty());
        assert!(!p.is_win(&[]));
    }
}
