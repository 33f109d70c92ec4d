// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Harvesting duct and pipe centerlines from the MEP document.
//!
//! No filtering beyond category: every duct, then every pipe, in arena
//! order. Order is not contractual; placement is independent per
//! element.

use nalgebra::{Point3, Unit, Vector3};
use serde::Serialize;

use mep_lite_model::{Category, Document, ElementId, MepCurveData};

use crate::error::{Error, Result};

/// Category of a collected linear MEP element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum MepCategory {
    Duct,
    Pipe,
}

/// A straight duct or pipe centerline, ready for casting.
#[derive(Debug, Clone)]
pub struct MepCurve {
    pub id: ElementId,
    pub category: MepCategory,
    pub start: Point3<f64>,
    pub direction: Unit<Vector3<f64>>,
    pub length: f64,
    pub diameter: f64,
}

/// Collect every duct and pipe of a document.
pub fn collect_mep_curves(doc: &Document) -> Result<Vec<MepCurve>> {
    let mut curves =
        Vec::with_capacity(doc.count(Category::Duct) + doc.count(Category::Pipe));
    for (id, data) in doc.ducts() {
        curves.push(to_curve(id, MepCategory::Duct, data)?);
    }
    for (id, data) in doc.pipes() {
        curves.push(to_curve(id, MepCategory::Pipe, data)?);
    }
    Ok(curves)
}

fn to_curve(id: ElementId, category: MepCategory, data: &MepCurveData) -> Result<MepCurve> {
    let direction = data
        .direction()
        .ok_or(Error::DegenerateCenterline { element: id })?;
    Ok(MepCurve {
        id,
        category,
        start: data.start,
        direction,
        length: data.length(),
        diameter: data.diameter,
    })
}
