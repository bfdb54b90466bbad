/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/. */

//! Snapshot export for the external map store.
//!
//! The engine never writes files. It hands out a [`MapDocument`] and accepts
//! one back through `CanvasEngine::load_document`; where the document lives
//! is the integrator's concern.

pub mod types;

pub use types::{ExportedEdge, ExportedNode, MapDocument, PlanePosition};
