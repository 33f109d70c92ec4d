// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Run summary types.

use serde::Serialize;

/// Summary of one placement run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PlacementReport {
    /// Ducts collected from the MEP document.
    pub ducts: usize,
    /// Pipes collected from the MEP document.
    pub pipes: usize,
    /// Opening instances created and committed.
    pub holes_created: usize,
}

impl PlacementReport {
    /// Serialize the report as pretty-printed JSON.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn report_serializes_to_json() {
        let report = PlacementReport {
            ducts: 2,
            pipes: 1,
            holes_created: 3,
        };
        let json = report.to_json().unwrap();
        assert!(json.contains("\"holes_created\": 3"));
    }
}
