/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/. */

//! Serializable types for the exported map document.

use euclid::default::Point2D;
use serde::{Deserialize, Serialize};

use crate::model::graph::{Edge, EdgeId, Node, NodeAttributes, NodeId};

/// Plane coordinates as they appear in the document.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct PlanePosition {
    pub x: f32,
    pub y: f32,
}

impl PlanePosition {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

impl From<Point2D<f32>> for PlanePosition {
    fn from(point: Point2D<f32>) -> Self {
        Self::new(point.x, point.y)
    }
}

impl From<PlanePosition> for Point2D<f32> {
    fn from(position: PlanePosition) -> Self {
        Point2D::new(position.x, position.y)
    }
}

/// Exported node.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExportedNode {
    pub id: NodeId,
    pub position: PlanePosition,
    pub label: String,
    #[serde(default)]
    pub attributes: NodeAttributes,
}

impl From<&Node> for ExportedNode {
    fn from(node: &Node) -> Self {
        Self {
            id: node.id,
            position: node.position.into(),
            label: node.label.clone(),
            attributes: node.attributes,
        }
    }
}

/// Exported edge. `id` is informational; it is re-derived on import.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportedEdge {
    pub id: EdgeId,
    pub source: NodeId,
    pub target: NodeId,
}

impl From<&Edge> for ExportedEdge {
    fn from(edge: &Edge) -> Self {
        Self {
            id: edge.id.clone(),
            source: edge.source,
            target: edge.target,
        }
    }
}

/// Complete graph snapshot handed to the external store.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct MapDocument {
    pub nodes: Vec<ExportedNode>,
    pub edges: Vec<ExportedEdge>,
}

impl MapDocument {
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty() && self.edges.is_empty()
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }
}
