/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/. */

//! Categorical per-node attributes.
//!
//! Values come from a closed set; anything else is rejected with
//! `EditError::InvalidAttributeValue` before the node is touched.

use serde::{Deserialize, Serialize};

use crate::model::error::EditError;

/// Visual kind of a node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeKind {
    #[default]
    Step,
    Start,
    Decision,
    End,
    Note,
}

impl NodeKind {
    pub const ALL: [NodeKind; 5] = [
        NodeKind::Step,
        NodeKind::Start,
        NodeKind::Decision,
        NodeKind::End,
        NodeKind::Note,
    ];

    pub fn as_persisted_str(self) -> &'static str {
        match self {
            Self::Step => "step",
            Self::Start => "start",
            Self::Decision => "decision",
            Self::End => "end",
            Self::Note => "note",
        }
    }

    pub fn from_persisted_str(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "step" => Some(Self::Step),
            "start" => Some(Self::Start),
            "decision" => Some(Self::Decision),
            "end" => Some(Self::End),
            "note" => Some(Self::Note),
            _ => None,
        }
    }
}

/// Color tag of a node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeColor {
    #[default]
    Blue,
    Green,
    Amber,
    Red,
    Purple,
    Slate,
}

impl NodeColor {
    pub const ALL: [NodeColor; 6] = [
        NodeColor::Blue,
        NodeColor::Green,
        NodeColor::Amber,
        NodeColor::Red,
        NodeColor::Purple,
        NodeColor::Slate,
    ];

    pub fn as_persisted_str(self) -> &'static str {
        match self {
            Self::Blue => "blue",
            Self::Green => "green",
            Self::Amber => "amber",
            Self::Red => "red",
            Self::Purple => "purple",
            Self::Slate => "slate",
        }
    }

    pub fn from_persisted_str(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "blue" => Some(Self::Blue),
            "green" => Some(Self::Green),
            "amber" => Some(Self::Amber),
            "red" => Some(Self::Red),
            "purple" => Some(Self::Purple),
            "slate" => Some(Self::Slate),
            _ => None,
        }
    }
}

/// Attribute slot addressed by `set_attribute`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttributeKey {
    Kind,
    Color,
}

impl AttributeKey {
    pub fn as_persisted_str(self) -> &'static str {
        match self {
            Self::Kind => "kind",
            Self::Color => "color",
        }
    }

    /// `type` is accepted as an alias of `kind`.
    pub fn from_persisted_str(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "kind" | "type" => Some(Self::Kind),
            "color" => Some(Self::Color),
            _ => None,
        }
    }
}

/// A validated attribute write.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttributeValue {
    Kind(NodeKind),
    Color(NodeColor),
}

impl AttributeValue {
    pub fn parse(key: &str, value: &str) -> Result<Self, EditError> {
        let invalid = || EditError::InvalidAttributeValue {
            key: key.to_string(),
            value: value.to_string(),
        };
        match AttributeKey::from_persisted_str(key).ok_or_else(invalid)? {
            AttributeKey::Kind => NodeKind::from_persisted_str(value)
                .map(Self::Kind)
                .ok_or_else(invalid),
            AttributeKey::Color => NodeColor::from_persisted_str(value)
                .map(Self::Color)
                .ok_or_else(invalid),
        }
    }

    pub fn key(self) -> AttributeKey {
        match self {
            Self::Kind(_) => AttributeKey::Kind,
            Self::Color(_) => AttributeKey::Color,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct NodeAttributes {
    pub kind: NodeKind,
    pub color: NodeColor,
}

impl NodeAttributes {
    pub fn new(kind: NodeKind, color: NodeColor) -> Self {
        Self { kind, color }
    }

    /// Apply a validated write. Returns whether the stored value changed.
    pub fn apply(&mut self, value: AttributeValue) -> bool {
        match value {
            AttributeValue::Kind(kind) => std::mem::replace(&mut self.kind, kind) != kind,
            AttributeValue::Color(color) => std::mem::replace(&mut self.color, color) != color,
        }
    }
}
