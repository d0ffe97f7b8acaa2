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

//! Queue: elements are added at the rear and removed from the front.

use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

use super::{DataStructure, Outcome, require_value};
use crate::catalog::Kind;
use crate::operation::{Operation, Rejection};

/// First-in first-out queue of elements.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
pub struct Queue {
    items: VecDeque<String>,
}

impl Queue {
    /// Create a [`Queue`] object. The first given element is the front of the queue.
    pub fn new(elements: &[String]) -> Self {
        Self {
            items: elements.iter().cloned().collect(),
        }
    }

    fn empty(action: Option<&'static str>) -> Rejection {
        Rejection::Empty {
            structure: "Queue",
            action,
        }
    }
}

impl DataStructure for Queue {
    fn kind(&self) -> Kind {
        Kind::Queue
    }

    fn elements(&self) -> Vec<String> {
        self.items.iter().cloned().collect()
    }

    fn apply(&mut self, operation: &Operation) -> Result<Outcome, Rejection> {
        match operation {
            Operation::Enqueue(value) => {
                require_value(value, "enqueue")?;
                self.items.push_back(value.clone());
                Ok(Outcome::done())
            }
            Operation::Dequeue => {
                self.items
                    .pop_front()
                    .ok_or_else(|| Queue::empty(Some("dequeue")))?;
                Ok(Outcome::done())
            }
            Operation::Front => {
                let front: &String = self.items.front().ok_or_else(|| Queue::empty(None))?;
                Ok(Outcome::report(format!("Front element: {front}")))
            }
            Operation::Rear => {
                let rear: &String = self.items.back().ok_or_else(|| Queue::empty(None))?;
                Ok(Outcome::report(format!("Rear element: {rear}")))
            }
            _ => Err(operation.unavailable(Kind::Queue)),
        }
    }

    fn describe(&self) -> String {
        let items: Vec<&str> = self.items.iter().map(String::as_str).collect();
        format!("FRONT → [{}] ← REAR", items.join("] ["))
    }
}
