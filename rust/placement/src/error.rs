// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Error types for the placement command.

use mep_lite_model::ElementId;
use thiserror::Error;

/// Result type alias for placement operations.
pub type Result<T> = std::result::Result<T, Error>;

/// The three fatal precondition misses of the placement command. Each
/// maps to a fixed user-facing message and a `Cancelled` outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Precondition {
    MepDocumentNotFound,
    HoleFamilyNotFound,
    View3dNotFound,
}

impl Precondition {
    /// The fixed dialog message for this precondition.
    pub fn message(&self) -> &'static str {
        match self {
            Precondition::MepDocumentNotFound => "MEP document not found",
            Precondition::HoleFamilyNotFound => "Hole family not found",
            Precondition::View3dNotFound => "3D view not found",
        }
    }
}

/// Errors that can occur while running the placement command.
#[derive(Debug, Error)]
pub enum Error {
    #[error("{}", .0.message())]
    Precondition(Precondition),

    /// A duct or pipe has a zero-length centerline. The model stores
    /// straight segments only, so this is the one way a centerline can
    /// be unusable for casting.
    #[error("degenerate centerline on element {element:?}")]
    DegenerateCenterline { element: ElementId },

    /// An intersected wall is owned by a linked document and cannot
    /// host an opening in the active one.
    #[error("wall {element:?} is owned by a linked document and cannot host an opening")]
    LinkedWallHost { element: ElementId },

    #[error("document model error: {0}")]
    Model(#[from] mep_lite_model::Error),

    #[error("geometry error: {0}")]
    Geometry(#[from] mep_lite_geometry::Error),
}
