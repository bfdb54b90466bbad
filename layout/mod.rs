/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/. */

//! Position producers.
//!
//! Neither engine here changes edge topology. `placement` answers where a new
//! child goes; `organize` re-flows an existing subset into a tidy tree.

pub mod organize;
pub mod placement;

pub use organize::{OrganizeConfig, OrganizeReport, Organizer};
pub use placement::{PlacementConfig, PlacementEngine, fan_out_offset};
