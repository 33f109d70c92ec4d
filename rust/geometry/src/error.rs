// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use thiserror::Error;

/// Result type for geometry operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while building intersection targets
#[derive(Error, Debug)]
pub enum Error {
    #[error("view is not usable for intersection: {0}")]
    InvalidView(String),

    #[error("degenerate wall solid: {0}")]
    DegenerateWall(String),

    #[error("document model error: {0}")]
    Model(#[from] mep_lite_model::Error),
}
