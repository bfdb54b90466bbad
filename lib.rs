/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/. */

//! Mind-map canvas editing engine.
//!
//! The rendering surface owns drawing, selection and pan/zoom; it feeds user
//! gestures into a [`CanvasEngine`] as [`Command`]s and reads back either the
//! live [`Graph`] or an exported [`MapDocument`].

pub mod app;
pub mod history;
pub mod input;
pub mod layout;
pub mod model;
pub mod prefs;
pub mod services;

pub use app::{CanvasEngine, Command, CommandOutcome};
pub use layout::organize::OrganizeReport;
pub use model::error::EditError;
pub use model::graph::{Edge, EdgeId, Graph, Node, NodeAttributes, NodeColor, NodeId, NodeKind};
pub use prefs::EngineConfig;
pub use services::export::types::{MapDocument, PlanePosition};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Install the stderr log subscriber used by the `mindcanvas` binary.
///
/// `filter` takes precedence over `RUST_LOG`; both fall back to `info`.
/// `log` records emitted by the library are bridged into the subscriber.
#[cfg(feature = "tracing")]
pub fn init_tracing(filter: Option<&str>) {
    use tracing_subscriber::EnvFilter;

    let filter = match filter {
        Some(directives) => EnvFilter::new(directives),
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
    };
    if let Err(e) = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
    {
        // No subscriber means no log output, so report on stderr directly.
        eprintln!("mindcanvas: failed to install log subscriber: {e}");
    }
}

#[cfg(not(feature = "tracing"))]
pub fn init_tracing(_filter: Option<&str>) {}
