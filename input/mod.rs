/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/. */

//! Gesture state owned by the engine.
//!
//! Pointer hit-testing, selection and pan/zoom belong to the rendering
//! surface. What lives here is the state that spans several gestures and
//! decides what a click means.

pub mod connection;

pub use connection::{ClickOutcome, ConnectionSession, ConnectionState, SelfConnectPolicy};
