/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/. */

//! Snapshot-based undo/redo over the whole graph.
//!
//! Every mutating command captures a checkpoint of the live graph *before*
//! it mutates. Undo swaps the live graph with the newest checkpoint and keeps
//! the displaced state on the redo stack; redo does the reverse. A fresh
//! checkpoint invalidates the redo stack.

use serde::{Deserialize, Serialize};

use crate::model::graph::Graph;

pub const DEFAULT_HISTORY_CAPACITY: usize = 50;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HistoryConfig {
    /// Maximum number of undo steps kept; the oldest are dropped first.
    pub capacity: usize,
    /// Whether label and attribute edits take a checkpoint.
    pub record_cosmetic_edits: bool,
}

impl Default for HistoryConfig {
    fn default() -> Self {
        Self {
            capacity: DEFAULT_HISTORY_CAPACITY,
            record_cosmetic_edits: true,
        }
    }
}

/// Immutable deep copy of the graph at a point in time.
#[derive(Debug, Clone, PartialEq)]
pub struct HistoryEntry {
    graph: Graph,
}

impl HistoryEntry {
    pub fn graph(&self) -> &Graph {
        &self.graph
    }
}

#[derive(Debug, Clone)]
pub struct HistoryManager {
    /// Undo checkpoints, newest last.
    past: Vec<HistoryEntry>,
    /// Redo checkpoints, newest last.
    future: Vec<HistoryEntry>,
    capacity: usize,
}

impl Default for HistoryManager {
    fn default() -> Self {
        Self::new(DEFAULT_HISTORY_CAPACITY)
    }
}

impl HistoryManager {
    /// A capacity of zero is treated as one.
    pub fn new(capacity: usize) -> Self {
        Self {
            past: Vec::new(),
            future: Vec::new(),
            capacity: capacity.max(1),
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Capture `graph` as an undo checkpoint and clear the redo stack.
    pub fn snapshot(&mut self, graph: &Graph) {
        self.past.push(HistoryEntry {
            graph: graph.clone(),
        });
        self.future.clear();
        self.trim_past();
    }

    /// Step back one checkpoint. Returns false when there is nothing to undo.
    pub fn undo(&mut self, live: &mut Graph) -> bool {
        let Some(prev) = self.past.pop() else {
            return false;
        };
        let current = std::mem::replace(live, prev.graph);
        self.future.push(HistoryEntry { graph: current });
        true
    }

    /// Step forward one checkpoint. Returns false when there is nothing to redo.
    pub fn redo(&mut self, live: &mut Graph) -> bool {
        let Some(next) = self.future.pop() else {
            return false;
        };
        let current = std::mem::replace(live, next.graph);
        self.past.push(HistoryEntry { graph: current });
        self.trim_past();
        true
    }

    pub fn can_undo(&self) -> bool {
        !self.past.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.future.is_empty()
    }

    pub fn undo_len(&self) -> usize {
        self.past.len()
    }

    pub fn redo_len(&self) -> usize {
        self.future.len()
    }

    /// Newest undo checkpoint, if any.
    pub fn peek_undo(&self) -> Option<&HistoryEntry> {
        self.past.last()
    }

    pub fn clear(&mut self) {
        self.past.clear();
        self.future.clear();
    }

    fn trim_past(&mut self) {
        if self.past.len() > self.capacity {
            let excess = self.past.len() - self.capacity;
            self.past.drain(0..excess);
        }
    }
}
