/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/. */

//! Canvas engine: owns the live graph and resolves every command against it.
//!
//! All graph mutation goes through here. Each mutating entry point validates
//! first, then captures an undo checkpoint, then mutates, so a rejected
//! command leaves both the graph and the history untouched.

use euclid::default::Point2D;
use log::{debug, warn};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::history::HistoryManager;
use crate::input::{ClickOutcome, ConnectionSession, SelfConnectPolicy};
use crate::layout::{OrganizeReport, Organizer, PlacementEngine};
use crate::model::error::EditError;
use crate::model::graph::{AttributeValue, Edge, EdgeId, Graph, Node, NodeId};
use crate::prefs::EngineConfig;
use crate::services::export::{MapDocument, PlanePosition};

/// Commands accepted from the rendering surface.
///
/// Serialized as `{"command": "<snake_case name>", ...fields}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "command", rename_all = "snake_case")]
pub enum Command {
    AddRoot {
        #[serde(default)]
        id: Option<NodeId>,
    },
    AddChild {
        parent: NodeId,
        #[serde(default)]
        id: Option<NodeId>,
    },
    DeleteNode {
        id: NodeId,
    },
    DeleteEdge {
        id: EdgeId,
    },
    StartConnection {
        id: NodeId,
    },
    ClickNode {
        id: NodeId,
    },
    CancelConnection,
    ConnectDirect {
        source: NodeId,
        target: NodeId,
    },
    BeginDrag {
        id: NodeId,
    },
    MoveNode {
        id: NodeId,
        position: PlanePosition,
    },
    EndDrag,
    RenameNode {
        id: NodeId,
        label: String,
    },
    SetAttribute {
        id: NodeId,
        key: String,
        value: String,
    },
    Organize {
        #[serde(default)]
        selection: Vec<NodeId>,
    },
    Undo,
    Redo,
}

#[derive(Debug, Clone, PartialEq)]
pub enum CommandOutcome {
    /// Accepted, but nothing changed (unknown delete target, empty history...).
    NoOp,
    Applied,
    NodeCreated(NodeId),
    EdgeCreated(EdgeId),
    Organized(OrganizeReport),
}

pub struct CanvasEngine {
    graph: Graph,
    history: HistoryManager,
    connection: ConnectionSession,
    /// Node whose drag gesture already took its checkpoint.
    dragging: Option<NodeId>,
    config: EngineConfig,
    placement: PlacementEngine,
    organizer: Organizer,
}

impl Default for CanvasEngine {
    fn default() -> Self {
        Self::new(EngineConfig::default())
    }
}

impl CanvasEngine {
    pub fn new(config: EngineConfig) -> Self {
        Self {
            graph: Graph::new(),
            history: HistoryManager::new(config.history.capacity),
            connection: ConnectionSession::new(),
            dragging: None,
            placement: PlacementEngine::new(config.placement),
            organizer: Organizer::new(config.organize),
            config,
        }
    }

    pub fn graph(&self) -> &Graph {
        &self.graph
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn history(&self) -> &HistoryManager {
        &self.history
    }

    /// Pending source of the connection session, for highlighting.
    pub fn connecting_source(&self) -> Option<NodeId> {
        self.connection.pending_source()
    }

    pub fn dragging(&self) -> Option<NodeId> {
        self.dragging
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    /// Any checkpoint closes an open drag, so the next move of that node
    /// starts its own undo step.
    fn capture_undo_checkpoint(&mut self) {
        self.history.snapshot(&self.graph);
        self.dragging = None;
    }

    fn require_node(&self, id: NodeId) -> Result<(), EditError> {
        if self.graph.contains_node(id) {
            Ok(())
        } else {
            Err(EditError::node_not_found(id))
        }
    }

    fn fresh_node(&self, id: NodeId, label: &str, position: Point2D<f32>) -> Node {
        Node::new(id, label, position).with_attributes(self.config.nodes.attributes())
    }

    /// Create a parentless node at the configured root position.
    pub fn add_root(&mut self) -> Result<NodeId, EditError> {
        self.add_root_with_id(Uuid::new_v4())
    }

    pub fn add_root_with_id(&mut self, id: NodeId) -> Result<NodeId, EditError> {
        if self.graph.contains_node(id) {
            return Err(EditError::duplicate_node(id));
        }
        let defaults = &self.config.nodes;
        let node = self.fresh_node(id, &defaults.root_label, defaults.root_position.into());
        self.capture_undo_checkpoint();
        self.graph.add_node(node)
    }

    /// Create a child of `parent` at the fan-out position and link it.
    pub fn add_child(&mut self, parent: NodeId) -> Result<NodeId, EditError> {
        self.add_child_with_id(parent, Uuid::new_v4())
    }

    pub fn add_child_with_id(&mut self, parent: NodeId, id: NodeId) -> Result<NodeId, EditError> {
        let position = self
            .placement
            .place_child(&self.graph, parent)
            .ok_or_else(|| EditError::node_not_found(parent))?;
        if self.graph.contains_node(id) {
            return Err(EditError::duplicate_node(id));
        }
        let node = self.fresh_node(id, &self.config.nodes.child_label, position);
        self.capture_undo_checkpoint();
        self.graph.add_node(node)?;
        self.graph.add_edge(Edge::new(parent, id))?;
        Ok(id)
    }

    /// Delete a node and its incident edges. Unknown ids return `Ok(false)`.
    pub fn delete_node(&mut self, id: NodeId) -> Result<bool, EditError> {
        if !self.graph.contains_node(id) {
            return Ok(false);
        }
        self.capture_undo_checkpoint();
        self.graph.remove_node(id);
        if self.connection.pending_source() == Some(id) {
            self.connection.cancel();
        }
        Ok(true)
    }

    /// Delete a single edge. Unknown ids return `Ok(false)`.
    pub fn delete_edge(&mut self, id: &EdgeId) -> Result<bool, EditError> {
        if !self.graph.contains_edge(id) {
            return Ok(false);
        }
        self.capture_undo_checkpoint();
        Ok(self.graph.remove_edge(id))
    }

    /// Arm connection mode with `id` as the source.
    pub fn start_connection(&mut self, id: NodeId) -> Result<(), EditError> {
        self.require_node(id)?;
        if let Some(previous) = self.connection.start(id) {
            debug!("Connection source {previous} replaced by {id}");
        }
        Ok(())
    }

    pub fn cancel_connection(&mut self) -> bool {
        self.connection.cancel()
    }

    /// Feed a node click into connection mode.
    ///
    /// Returns the new edge when the click completed a connection.
    pub fn click_node(&mut self, id: NodeId) -> Result<Option<EdgeId>, EditError> {
        match self
            .connection
            .node_clicked(id, self.config.connection.self_connect)
        {
            ClickOutcome::Ignored => Ok(None),
            ClickOutcome::Cancelled => {
                debug!("Connection cancelled by clicking its source {id}");
                Ok(None)
            },
            ClickOutcome::Connect { source, target } => self.connect(source, target).map(Some),
        }
    }

    /// Create `source -> target` without going through connection mode.
    pub fn connect_direct(&mut self, source: NodeId, target: NodeId) -> Result<EdgeId, EditError> {
        if source == target && self.config.connection.self_connect == SelfConnectPolicy::Reject {
            return Err(EditError::SelfConnect(source));
        }
        self.connect(source, target)
    }

    fn connect(&mut self, source: NodeId, target: NodeId) -> Result<EdgeId, EditError> {
        self.require_node(source)?;
        self.require_node(target)?;
        let edge = Edge::new(source, target);
        if self.graph.contains_edge(&edge.id) {
            return Err(EditError::DuplicateId(edge.id.to_string()));
        }
        self.capture_undo_checkpoint();
        self.graph.add_edge(edge)
    }

    /// Start a drag gesture. One checkpoint covers every move until `end_drag`.
    pub fn begin_drag(&mut self, id: NodeId) -> Result<(), EditError> {
        self.require_node(id)?;
        self.capture_undo_checkpoint();
        self.dragging = Some(id);
        Ok(())
    }

    /// Move a node. A vanished node is a silent no-op (`Ok(false)`); a NaN or
    /// infinite coordinate is rejected.
    pub fn move_node(&mut self, id: NodeId, position: Point2D<f32>) -> Result<bool, EditError> {
        if !self.graph.contains_node(id) {
            debug!("Move of vanished node {id} ignored");
            return Ok(false);
        }
        if !(position.x.is_finite() && position.y.is_finite()) {
            return Err(EditError::NonFinitePosition(id));
        }
        if self.dragging != Some(id) {
            self.capture_undo_checkpoint();
        }
        Ok(self.graph.set_position(id, position))
    }

    /// Close the drag gesture, returning the node that was dragged.
    pub fn end_drag(&mut self) -> Option<NodeId> {
        self.dragging.take()
    }

    /// Returns false (silently) when the node has vanished.
    pub fn rename_node(&mut self, id: NodeId, label: impl Into<String>) -> bool {
        if !self.graph.contains_node(id) {
            debug!("Rename of vanished node {id} ignored");
            return false;
        }
        if self.config.history.record_cosmetic_edits {
            self.capture_undo_checkpoint();
        }
        match self.graph.node_mut(id) {
            Some(node) => {
                node.label = label.into();
                true
            },
            None => false,
        }
    }

    /// Set a categorical attribute, e.g. `("color", "green")`.
    pub fn set_attribute(&mut self, id: NodeId, key: &str, value: &str) -> Result<(), EditError> {
        self.require_node(id)?;
        let value = AttributeValue::parse(key, value)?;
        if self.config.history.record_cosmetic_edits {
            self.capture_undo_checkpoint();
        }
        if let Some(node) = self.graph.node_mut(id) {
            node.attributes.apply(value);
        }
        Ok(())
    }

    /// Re-flow `selection` (or everything when empty) into a tidy tree.
    pub fn organize(&mut self, selection: &[NodeId]) -> OrganizeReport {
        self.capture_undo_checkpoint();
        let report = self.organizer.organize(&mut self.graph, selection);
        for id in &report.cycle_guard_trips {
            warn!("Organize skipped a branch at {id}: already on the current path");
        }
        report
    }

    pub fn undo(&mut self) -> bool {
        let changed = self.history.undo(&mut self.graph);
        if changed {
            self.after_history_jump();
        }
        changed
    }

    pub fn redo(&mut self) -> bool {
        let changed = self.history.redo(&mut self.graph);
        if changed {
            self.after_history_jump();
        }
        changed
    }

    fn after_history_jump(&mut self) {
        self.dragging = None;
        if let Some(source) = self.connection.pending_source()
            && !self.graph.contains_node(source)
        {
            self.connection.cancel();
        }
    }

    /// Serializable copy of the live graph for the external store.
    pub fn export_snapshot(&self) -> MapDocument {
        self.graph.to_document()
    }

    /// Replace the live graph with a stored document. History starts over.
    pub fn load_document(&mut self, document: &MapDocument) {
        self.graph = Graph::from_document(document);
        self.history.clear();
        self.connection.cancel();
        self.dragging = None;
    }

    pub fn apply_commands<I>(&mut self, commands: I) -> Vec<Result<CommandOutcome, EditError>>
    where
        I: IntoIterator<Item = Command>,
    {
        commands
            .into_iter()
            .map(|command| {
                let result = self.apply_command(command);
                if let Err(e) = &result {
                    warn!("Command rejected: {e}");
                }
                result
            })
            .collect()
    }

    pub fn apply_command(&mut self, command: Command) -> Result<CommandOutcome, EditError> {
        let outcome = match command {
            Command::AddRoot { id } => {
                let id = match id {
                    Some(id) => self.add_root_with_id(id)?,
                    None => self.add_root()?,
                };
                CommandOutcome::NodeCreated(id)
            },
            Command::AddChild { parent, id } => {
                let id = match id {
                    Some(id) => self.add_child_with_id(parent, id)?,
                    None => self.add_child(parent)?,
                };
                CommandOutcome::NodeCreated(id)
            },
            Command::DeleteNode { id } => applied_if(self.delete_node(id)?),
            Command::DeleteEdge { id } => applied_if(self.delete_edge(&id)?),
            Command::StartConnection { id } => {
                self.start_connection(id)?;
                CommandOutcome::Applied
            },
            Command::ClickNode { id } => match self.click_node(id)? {
                Some(edge) => CommandOutcome::EdgeCreated(edge),
                None => CommandOutcome::NoOp,
            },
            Command::CancelConnection => applied_if(self.cancel_connection()),
            Command::ConnectDirect { source, target } => {
                CommandOutcome::EdgeCreated(self.connect_direct(source, target)?)
            },
            Command::BeginDrag { id } => {
                self.begin_drag(id)?;
                CommandOutcome::Applied
            },
            Command::MoveNode { id, position } => applied_if(self.move_node(id, position.into())?),
            Command::EndDrag => applied_if(self.end_drag().is_some()),
            Command::RenameNode { id, label } => applied_if(self.rename_node(id, label)),
            Command::SetAttribute { id, key, value } => {
                self.set_attribute(id, &key, &value)?;
                CommandOutcome::Applied
            },
            Command::Organize { selection } => CommandOutcome::Organized(self.organize(&selection)),
            Command::Undo => applied_if(self.undo()),
            Command::Redo => applied_if(self.redo()),
        };
        debug!("Command outcome: {outcome:?}");
        Ok(outcome)
    }
}

fn applied_if(changed: bool) -> CommandOutcome {
    if changed {
        CommandOutcome::Applied
    } else {
        CommandOutcome::NoOp
    }
}
