/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/. */

//! Automatic placement of a new child next to its parent.
//!
//! Children fan out around the parent's y: the first sits level with it, the
//! next ones alternate below and above at growing distance
//! (`0, +g, -g, +2g, -2g, ...`).

use euclid::default::Point2D;
use serde::{Deserialize, Serialize};

use crate::model::graph::{Graph, NodeId};

pub const DEFAULT_HORIZONTAL_GAP: f32 = 280.0;
pub const DEFAULT_VERTICAL_GAP: f32 = 120.0;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlacementConfig {
    /// Distance from parent to child along x.
    pub horizontal_gap: f32,
    /// Spacing between sibling slots along y.
    pub vertical_gap: f32,
}

impl Default for PlacementConfig {
    fn default() -> Self {
        Self {
            horizontal_gap: DEFAULT_HORIZONTAL_GAP,
            vertical_gap: DEFAULT_VERTICAL_GAP,
        }
    }
}

/// Vertical offset of the child that follows `existing` siblings.
pub fn fan_out_offset(existing: usize, gap: f32) -> f32 {
    if existing == 0 {
        return 0.0;
    }
    let steps = existing.div_ceil(2) as f32;
    if existing % 2 == 1 {
        steps * gap
    } else {
        -steps * gap
    }
}

pub struct PlacementEngine {
    config: PlacementConfig,
}

impl PlacementEngine {
    pub fn new(config: PlacementConfig) -> Self {
        Self { config }
    }

    pub fn with_defaults() -> Self {
        Self::new(PlacementConfig::default())
    }

    pub fn config(&self) -> &PlacementConfig {
        &self.config
    }

    /// Position for the next child of `parent`, or `None` if the parent is gone.
    ///
    /// The sibling count is read from the graph's edges at call time, so it
    /// reflects earlier deletions and manual connections.
    pub fn place_child(&self, graph: &Graph, parent: NodeId) -> Option<Point2D<f32>> {
        let origin = graph.node(parent)?.position;
        let existing = graph.children_of(parent).len();
        Some(Point2D::new(
            origin.x + self.config.horizontal_gap,
            origin.y + fan_out_offset(existing, self.config.vertical_gap),
        ))
    }
}
