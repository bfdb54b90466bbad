/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/. */

//! Graph data structures for the mind-map canvas.
//!
//! Core structures:
//! - `Graph`: node/edge container backed by petgraph::StableGraph
//! - `Node`: labeled point with a plane position and categorical attributes
//! - `Edge`: directed connection whose id is derived from its endpoints
//!
//! Nodes and edges iterate in insertion order; removals never reorder the
//! survivors. Deleting a node always deletes every edge touching it.

use euclid::default::Point2D;
use indexmap::IndexMap;
use log::warn;
use petgraph::stable_graph::{EdgeIndex, NodeIndex, StableGraph};
use petgraph::visit::EdgeRef;
use petgraph::{Directed, Direction};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use uuid::Uuid;

use crate::model::error::EditError;
use crate::services::export::types::{ExportedEdge, ExportedNode, MapDocument};

pub mod attributes;

pub use attributes::{AttributeKey, AttributeValue, NodeAttributes, NodeColor, NodeKind};

/// Stable node identity.
pub type NodeId = Uuid;

/// Internal petgraph handle (survives other deletions).
pub(crate) type NodeKey = NodeIndex;

/// Internal petgraph edge handle.
pub(crate) type EdgeKey = EdgeIndex;

/// Edge identity, derived from the ordered `(source, target)` pair.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EdgeId(String);

impl EdgeId {
    pub fn between(source: NodeId, target: NodeId) -> Self {
        Self(format!("e-{source}-{target}"))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for EdgeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// A mind-map node.
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    pub id: NodeId,

    /// Center position in plane coordinates.
    pub position: Point2D<f32>,

    pub label: String,

    pub attributes: NodeAttributes,
}

impl Node {
    pub fn new(id: NodeId, label: impl Into<String>, position: Point2D<f32>) -> Self {
        Self {
            id,
            position,
            label: label.into(),
            attributes: NodeAttributes::default(),
        }
    }

    pub fn with_attributes(mut self, attributes: NodeAttributes) -> Self {
        self.attributes = attributes;
        self
    }
}

/// A directed connection between two nodes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Edge {
    pub id: EdgeId,
    pub source: NodeId,
    pub target: NodeId,
}

impl Edge {
    pub fn new(source: NodeId, target: NodeId) -> Self {
        Self {
            id: EdgeId::between(source, target),
            source,
            target,
        }
    }
}

/// Main graph structure backed by petgraph::StableGraph
#[derive(Debug, Clone, Default)]
pub struct Graph {
    inner: StableGraph<Node, Edge, Directed>,

    /// Node id index; its order is the node insertion order.
    id_to_node: IndexMap<NodeId, NodeKey>,

    /// Edge id index; its order is the edge insertion order.
    id_to_edge: IndexMap<EdgeId, EdgeKey>,
}

impl Graph {
    /// Create a new empty graph
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a node. Fails with `DuplicateId` when the id is taken.
    pub fn add_node(&mut self, node: Node) -> Result<NodeId, EditError> {
        let id = node.id;
        if self.id_to_node.contains_key(&id) {
            return Err(EditError::duplicate_node(id));
        }
        let key = self.inner.add_node(node);
        self.id_to_node.insert(id, key);
        Ok(id)
    }

    /// Remove a node and every edge touching it. Unknown ids are a no-op.
    pub fn remove_node(&mut self, id: NodeId) -> bool {
        let Some(key) = self.id_to_node.get(&id).copied() else {
            return false;
        };
        let incident: Vec<EdgeId> = self
            .inner
            .edges_directed(key, Direction::Outgoing)
            .chain(self.inner.edges_directed(key, Direction::Incoming))
            .map(|edge| edge.weight().id.clone())
            .collect();
        for edge_id in incident {
            self.id_to_edge.shift_remove(&edge_id);
        }
        self.id_to_node.shift_remove(&id);
        self.inner.remove_node(key).is_some()
    }

    /// Insert an edge. Both endpoints must exist and the id must be free.
    pub fn add_edge(&mut self, edge: Edge) -> Result<EdgeId, EditError> {
        let from = self.node_key(edge.source)?;
        let to = self.node_key(edge.target)?;
        if self.id_to_edge.contains_key(&edge.id) {
            return Err(EditError::DuplicateId(edge.id.to_string()));
        }
        let id = edge.id.clone();
        let key = self.inner.add_edge(from, to, edge);
        self.id_to_edge.insert(id.clone(), key);
        Ok(id)
    }

    /// Remove a single edge. Unknown ids are a no-op.
    pub fn remove_edge(&mut self, id: &EdgeId) -> bool {
        let Some(key) = self.id_to_edge.shift_remove(id) else {
            return false;
        };
        self.inner.remove_edge(key).is_some()
    }

    /// Targets of edges leaving `id`, in edge insertion order, without repeats.
    pub fn children_of(&self, id: NodeId) -> Vec<NodeId> {
        let mut seen = HashSet::new();
        self.edges()
            .filter(|edge| edge.source == id && self.contains_node(edge.target))
            .map(|edge| edge.target)
            .filter(|target| seen.insert(*target))
            .collect()
    }

    /// Source of the first incoming edge, in edge insertion order.
    pub fn parent_of(&self, id: NodeId) -> Option<NodeId> {
        self.edges()
            .find(|edge| edge.target == id && self.contains_node(edge.source))
            .map(|edge| edge.source)
    }

    /// Members of `subset` with no incoming edge whose source is also in `subset`.
    ///
    /// Ids missing from the graph are ignored; output follows `subset` order.
    pub fn roots(&self, subset: &[NodeId]) -> Vec<NodeId> {
        let members: HashSet<NodeId> = subset
            .iter()
            .copied()
            .filter(|id| self.contains_node(*id))
            .collect();
        let mut emitted = HashSet::new();
        subset
            .iter()
            .copied()
            .filter(|id| members.contains(id))
            .filter(|id| {
                !self
                    .edges()
                    .any(|edge| edge.target == *id && members.contains(&edge.source))
            })
            .filter(|id| emitted.insert(*id))
            .collect()
    }

    /// Get a node by id
    pub fn node(&self, id: NodeId) -> Option<&Node> {
        let key = *self.id_to_node.get(&id)?;
        self.inner.node_weight(key)
    }

    /// Get a mutable node by id
    pub(crate) fn node_mut(&mut self, id: NodeId) -> Option<&mut Node> {
        let key = *self.id_to_node.get(&id)?;
        self.inner.node_weight_mut(key)
    }

    /// Get an edge by id
    pub fn edge(&self, id: &EdgeId) -> Option<&Edge> {
        let key = *self.id_to_edge.get(id)?;
        self.inner.edge_weight(key)
    }

    /// Move a node. Returns false when the node does not exist or the
    /// position is not finite.
    pub fn set_position(&mut self, id: NodeId, position: Point2D<f32>) -> bool {
        if !(position.x.is_finite() && position.y.is_finite()) {
            return false;
        }
        match self.node_mut(id) {
            Some(node) => {
                node.position = position;
                true
            },
            None => false,
        }
    }

    /// Iterate over all nodes in insertion order
    pub fn nodes(&self) -> impl Iterator<Item = &Node> + '_ {
        self.id_to_node
            .values()
            .filter_map(move |key| self.inner.node_weight(*key))
    }

    /// Iterate over all edges in insertion order
    pub fn edges(&self) -> impl Iterator<Item = &Edge> + '_ {
        self.id_to_edge
            .values()
            .filter_map(move |key| self.inner.edge_weight(*key))
    }

    /// Node ids in insertion order
    pub fn node_ids(&self) -> Vec<NodeId> {
        self.id_to_node.keys().copied().collect()
    }

    pub fn contains_node(&self, id: NodeId) -> bool {
        self.id_to_node.contains_key(&id)
    }

    pub fn contains_edge(&self, id: &EdgeId) -> bool {
        self.id_to_edge.contains_key(id)
    }

    /// Check if a directed edge exists from `from` to `to`
    pub fn has_edge_between(&self, from: NodeId, to: NodeId) -> bool {
        match (self.id_to_node.get(&from), self.id_to_node.get(&to)) {
            (Some(a), Some(b)) => self.inner.find_edge(*a, *b).is_some(),
            _ => false,
        }
    }

    /// Count of nodes in the graph
    pub fn node_count(&self) -> usize {
        self.inner.node_count()
    }

    /// Count of edges in the graph
    pub fn edge_count(&self) -> usize {
        self.inner.edge_count()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.node_count() == 0
    }

    /// Serialize the graph to a document for the external store
    pub fn to_document(&self) -> MapDocument {
        MapDocument {
            nodes: self.nodes().map(ExportedNode::from).collect(),
            edges: self.edges().map(ExportedEdge::from).collect(),
        }
    }

    /// Rebuild a graph from a stored document.
    ///
    /// Duplicate node ids keep the first occurrence. Edge ids are re-derived
    /// from their endpoints; edges with a missing endpoint are dropped.
    pub fn from_document(document: &MapDocument) -> Self {
        let mut graph = Graph::new();

        for exported in &document.nodes {
            let node = Node {
                id: exported.id,
                position: exported.position.into(),
                label: exported.label.clone(),
                attributes: exported.attributes,
            };
            if let Err(e) = graph.add_node(node) {
                warn!("Skipping stored node: {e}");
            }
        }

        for exported in &document.edges {
            if let Err(e) = graph.add_edge(Edge::new(exported.source, exported.target)) {
                warn!("Skipping stored edge {}: {e}", exported.id);
            }
        }

        graph
    }

    fn node_key(&self, id: NodeId) -> Result<NodeKey, EditError> {
        self.id_to_node
            .get(&id)
            .copied()
            .ok_or_else(|| EditError::node_not_found(id))
    }
}

/// Two graphs are equal when their nodes and edges match in insertion order.
impl PartialEq for Graph {
    fn eq(&self, other: &Self) -> bool {
        self.nodes().eq(other.nodes()) && self.edges().eq(other.edges())
    }
}
