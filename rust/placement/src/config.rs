// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Placement configuration loaded from environment variables.

/// Placement command configuration.
#[derive(Debug, Clone)]
pub struct PlacementConfig {
    /// Title substring identifying the companion MEP document.
    pub link_marker: String,
    /// Family name of the hole template.
    pub family_name: String,
    /// Type name of the hole template within its family.
    pub type_name: String,
    /// Named parameter receiving the opening width.
    pub width_param: String,
    /// Named parameter receiving the opening height.
    pub height_param: String,
}

impl PlacementConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        Self {
            link_marker: std::env::var("MEP_LINK_MARKER").unwrap_or_else(|_| "MEP".into()),
            family_name: std::env::var("HOLE_FAMILY_NAME")
                .unwrap_or_else(|_| "Rectangular Wall Opening".into()),
            type_name: std::env::var("HOLE_TYPE_NAME").unwrap_or_else(|_| "Standard".into()),
            width_param: std::env::var("HOLE_WIDTH_PARAM")
                .unwrap_or_else(|_| "Opening Width".into()),
            height_param: std::env::var("HOLE_HEIGHT_PARAM")
                .unwrap_or_else(|_| "Opening Height".into()),
        }
    }
}

impl Default for PlacementConfig {
    fn default() -> Self {
        Self::from_env()
    }
}
