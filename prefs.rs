/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/. */

//! Engine configuration and command-line options.
//!
//! Every field has a default, so an empty TOML file (or none at all) yields
//! the stock engine.

use bpaf::Bpaf;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::history::HistoryConfig;
use crate::input::SelfConnectPolicy;
use crate::layout::{OrganizeConfig, PlacementConfig};
use crate::model::graph::{NodeAttributes, NodeColor, NodeKind};
use crate::services::export::PlanePosition;

/// Labels, position and attributes given to freshly created nodes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NodeDefaults {
    pub root_position: PlanePosition,
    pub root_label: String,
    pub child_label: String,
    pub default_kind: NodeKind,
    pub default_color: NodeColor,
}

impl Default for NodeDefaults {
    fn default() -> Self {
        Self {
            root_position: PlanePosition::new(100.0, 250.0),
            root_label: "Start".to_string(),
            child_label: "New Step".to_string(),
            default_kind: NodeKind::default(),
            default_color: NodeColor::default(),
        }
    }
}

impl NodeDefaults {
    pub fn attributes(&self) -> NodeAttributes {
        NodeAttributes::new(self.default_kind, self.default_color)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ConnectionConfig {
    pub self_connect: SelfConnectPolicy,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub placement: PlacementConfig,
    pub organize: OrganizeConfig,
    pub history: HistoryConfig,
    pub nodes: NodeDefaults,
    pub connection: ConnectionConfig,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PrefsError {
    Io(String),
    Parse(String),
    /// Parsed, but a value is out of range (e.g. a NaN gap).
    Invalid(String),
}

impl std::fmt::Display for PrefsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PrefsError::Io(msg) => write!(f, "Config IO error: {msg}"),
            PrefsError::Parse(msg) => write!(f, "Config parse error: {msg}"),
            PrefsError::Invalid(msg) => write!(f, "Invalid config value: {msg}"),
        }
    }
}

impl std::error::Error for PrefsError {}

impl EngineConfig {
    pub fn from_toml_str(raw: &str) -> Result<Self, PrefsError> {
        let config: Self = toml::from_str(raw).map_err(|e| PrefsError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Every gap and the root position must be finite.
    pub fn validate(&self) -> Result<(), PrefsError> {
        let coordinates = [
            ("placement.horizontal_gap", self.placement.horizontal_gap),
            ("placement.vertical_gap", self.placement.vertical_gap),
            ("organize.horizontal_gap", self.organize.horizontal_gap),
            ("organize.vertical_gap", self.organize.vertical_gap),
            ("nodes.root_position.x", self.nodes.root_position.x),
            ("nodes.root_position.y", self.nodes.root_position.y),
        ];
        match coordinates.iter().find(|(_, value)| !value.is_finite()) {
            Some((name, value)) => Err(PrefsError::Invalid(format!("{name} = {value}"))),
            None => Ok(()),
        }
    }

    pub fn load(path: &Path) -> Result<Self, PrefsError> {
        let raw = std::fs::read_to_string(path)
            .map_err(|e| PrefsError::Io(format!("{}: {e}", path.display())))?;
        Self::from_toml_str(&raw)
    }
}

/// Replay a command script against a fresh canvas and print the resulting map.
#[derive(Debug, Clone, Bpaf)]
#[bpaf(options, version)]
pub struct CliOptions {
    /// Engine configuration file (TOML)
    #[bpaf(long, argument("PATH"))]
    pub config: Option<PathBuf>,

    /// Log filter directives; overrides RUST_LOG
    #[bpaf(long("log-filter"), argument("FILTER"))]
    pub log_filter: Option<String>,

    /// Pretty-print the exported document
    #[bpaf(long)]
    pub pretty: bool,

    /// Script with one JSON command per line; read from stdin when omitted
    #[bpaf(positional("SCRIPT"))]
    pub script: Option<PathBuf>,
}
