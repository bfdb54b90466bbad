/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/. */

//! Two-step "pick source, pick target" connection mode.
//!
//! The session only decides; it never touches the graph. A `Connect`
//! outcome is turned into an edge by the engine, which also takes the undo
//! checkpoint.

use serde::{Deserialize, Serialize};

use crate::model::graph::NodeId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ConnectionState {
    #[default]
    Idle,
    AwaitingTarget(NodeId),
}

/// What to do when the target click lands on the pending source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SelfConnectPolicy {
    /// Cancel the session without creating an edge.
    #[default]
    Reject,
    /// Create a self-loop.
    Allow,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickOutcome {
    /// No session was armed.
    Ignored,
    /// The session ended without an edge.
    Cancelled,
    Connect { source: NodeId, target: NodeId },
}

#[derive(Debug, Clone, Default)]
pub struct ConnectionSession {
    state: ConnectionState,
}

impl ConnectionSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> ConnectionState {
        self.state
    }

    pub fn pending_source(&self) -> Option<NodeId> {
        match self.state {
            ConnectionState::Idle => None,
            ConnectionState::AwaitingTarget(source) => Some(source),
        }
    }

    pub fn is_armed(&self) -> bool {
        self.pending_source().is_some()
    }

    /// Arm (or re-arm) with `source`. Returns the source it replaced.
    pub fn start(&mut self, source: NodeId) -> Option<NodeId> {
        let previous = self.pending_source();
        self.state = ConnectionState::AwaitingTarget(source);
        previous
    }

    /// Returns true if a session was pending.
    pub fn cancel(&mut self) -> bool {
        std::mem::take(&mut self.state) != ConnectionState::Idle
    }

    /// Feed a node click. Any click on an armed session ends it.
    pub fn node_clicked(&mut self, target: NodeId, policy: SelfConnectPolicy) -> ClickOutcome {
        let ConnectionState::AwaitingTarget(source) = std::mem::take(&mut self.state) else {
            return ClickOutcome::Ignored;
        };
        if source == target && policy == SelfConnectPolicy::Reject {
            return ClickOutcome::Cancelled;
        }
        ClickOutcome::Connect { source, target }
    }
}
