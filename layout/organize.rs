/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/. */

//! Tree re-organization ("organize").
//!
//! Roots of the target set keep their position. Every other reachable target
//! node is stacked in a column one `horizontal_gap` to the right of its
//! parent, centered on the parent's y with `vertical_gap` spacing.
//!
//! The graph is not required to be a tree. Traversal keeps the current
//! recursion path on an explicit stack and refuses to descend into a node
//! already on it, so cycles terminate while DAG reconvergence from a
//! different path is still laid out (the later visit wins).

use log::debug;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::model::error::EditError;
use crate::model::graph::{Graph, NodeId};
use euclid::default::Point2D;

pub const DEFAULT_HORIZONTAL_GAP: f32 = 300.0;
pub const DEFAULT_VERTICAL_GAP: f32 = 120.0;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OrganizeConfig {
    pub horizontal_gap: f32,
    pub vertical_gap: f32,
}

impl Default for OrganizeConfig {
    fn default() -> Self {
        Self {
            horizontal_gap: DEFAULT_HORIZONTAL_GAP,
            vertical_gap: DEFAULT_VERTICAL_GAP,
        }
    }
}

/// What an organize pass did.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct OrganizeReport {
    /// Roots of the target set, in target order. Their positions are kept.
    pub roots: Vec<NodeId>,
    /// Nodes that received a position, in first-placement order.
    pub moved: Vec<NodeId>,
    /// Children skipped because they were already on the recursion path.
    pub cycle_guard_trips: Vec<NodeId>,
}

impl OrganizeReport {
    pub fn tripped_cycle_guard(&self) -> bool {
        !self.cycle_guard_trips.is_empty()
    }

    /// One `CycleGuardTripped` per skipped branch.
    pub fn errors(&self) -> Vec<EditError> {
        self.cycle_guard_trips
            .iter()
            .map(|id| EditError::CycleGuardTripped(*id))
            .collect()
    }
}

/// Per-call traversal state.
struct Pass<'a> {
    targets: &'a HashSet<NodeId>,
    path: Vec<NodeId>,
    moved: Vec<NodeId>,
    moved_set: HashSet<NodeId>,
    trips: Vec<NodeId>,
}

pub struct Organizer {
    config: OrganizeConfig,
}

impl Organizer {
    pub fn new(config: OrganizeConfig) -> Self {
        Self { config }
    }

    pub fn with_defaults() -> Self {
        Self::new(OrganizeConfig::default())
    }

    pub fn config(&self) -> &OrganizeConfig {
        &self.config
    }

    /// Lay out `selection`, or the whole graph when `selection` is empty.
    ///
    /// Unknown ids in the selection are ignored. A target set without roots
    /// (a pure cycle) is left untouched.
    pub fn organize(&self, graph: &mut Graph, selection: &[NodeId]) -> OrganizeReport {
        let order: Vec<NodeId> = if selection.is_empty() {
            graph.node_ids()
        } else {
            let mut seen = HashSet::new();
            selection
                .iter()
                .copied()
                .filter(|id| graph.contains_node(*id) && seen.insert(*id))
                .collect()
        };
        let targets: HashSet<NodeId> = order.iter().copied().collect();
        let roots = graph.roots(&order);

        let mut pass = Pass {
            targets: &targets,
            path: Vec::new(),
            moved: Vec::new(),
            moved_set: HashSet::new(),
            trips: Vec::new(),
        };
        for root in &roots {
            pass.path.push(*root);
            self.place_children(graph, *root, &mut pass);
            pass.path.pop();
        }

        OrganizeReport {
            roots,
            moved: pass.moved,
            cycle_guard_trips: pass.trips,
        }
    }

    fn place_children(&self, graph: &mut Graph, parent: NodeId, pass: &mut Pass<'_>) {
        let Some(origin) = graph.node(parent).map(|node| node.position) else {
            return;
        };
        let children: Vec<NodeId> = graph
            .children_of(parent)
            .into_iter()
            .filter(|child| pass.targets.contains(child))
            .collect();
        if children.is_empty() {
            return;
        }

        let gap = self.config.vertical_gap;
        let total_height = (children.len() - 1) as f32 * gap;
        let x = origin.x + self.config.horizontal_gap;
        let top = origin.y - total_height / 2.0;

        for (slot, child) in children.into_iter().enumerate() {
            if pass.path.contains(&child) {
                debug!("organize: {child} is already on the path below {parent}; skipping branch");
                pass.trips.push(child);
                continue;
            }
            graph.set_position(child, Point2D::new(x, top + slot as f32 * gap));
            if pass.moved_set.insert(child) {
                pass.moved.push(child);
            }
            pass.path.push(child);
            self.place_children(graph, child, pass);
            pass.path.pop();
        }
    }
}
