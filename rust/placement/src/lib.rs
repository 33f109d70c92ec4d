// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! MEP-Lite Placement
//!
//! The wall-penetration placement command: find the companion MEP
//! document, collect its ducts and pipes, ray-cast each centerline
//! against the active document's walls, and place one parametrized
//! opening instance per distinct wall crossing.
//!
//! The whole command is a single synchronous pass. Preconditions
//! (companion document, hole family, 3D view) fail fast with a
//! [`CommandOutcome::Cancelled`] and zero mutation; any failure during
//! the placement batch rolls the entire batch back and reports
//! [`CommandOutcome::Failed`].

pub mod collector;
pub mod command;
pub mod config;
pub mod error;
pub mod notify;
pub mod report;
pub mod resolver;

pub use collector::{collect_mep_curves, MepCategory, MepCurve};
pub use command::{add_holes, CommandOutcome, DIALOG_TITLE};
pub use config::PlacementConfig;
pub use error::{Error, Precondition, Result};
pub use notify::{Notifier, TracingNotifier};
pub use report::PlacementReport;
