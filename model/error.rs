/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/. */

//! Failure signals raised by canvas commands.
//!
//! None of these are fatal. Each one leaves the graph's structural invariants
//! intact (no dangling edges, no duplicate ids); the integrator decides
//! whether to surface it, for example as a toast.

use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditError {
    /// A node or edge id that is not (or no longer) in the graph.
    NotFound(String),
    /// Creation with an id that is already taken; the caller must pick a fresh id.
    DuplicateId(String),
    /// Attribute write outside the enumerated key/value set.
    InvalidAttributeValue { key: String, value: String },
    /// Connection whose source equals its target.
    SelfConnect(Uuid),
    /// Organize reached a node already on the current recursion path.
    CycleGuardTripped(Uuid),
    /// Move to a NaN or infinite coordinate; the node keeps its position.
    NonFinitePosition(Uuid),
}

impl EditError {
    pub(crate) fn node_not_found(id: Uuid) -> Self {
        Self::NotFound(id.to_string())
    }

    pub(crate) fn duplicate_node(id: Uuid) -> Self {
        Self::DuplicateId(id.to_string())
    }
}

impl std::fmt::Display for EditError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EditError::NotFound(id) => write!(f, "Not found: {id}"),
            EditError::DuplicateId(id) => write!(f, "Duplicate id: {id}"),
            EditError::InvalidAttributeValue { key, value } => {
                write!(f, "Invalid attribute value: {key}={value}")
            },
            EditError::SelfConnect(id) => write!(f, "Self connection rejected for {id}"),
            EditError::CycleGuardTripped(id) => {
                write!(f, "Cycle guard tripped at {id}; branch skipped")
            },
            EditError::NonFinitePosition(id) => {
                write!(f, "Non-finite position rejected for {id}")
            },
        }
    }
}

impl std::error::Error for EditError {}
