// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Typed element data stored in document arenas.
//!
//! Only the categories the placement command touches are modeled: walls,
//! duct/pipe centerlines, levels, 3D views, family symbols, and placed
//! family instances. Geometry is deliberately minimal — walls and MEP
//! curves carry straight location lines only.

use nalgebra::{Point3, Unit, Vector3};

use crate::keys::ElementId;
use crate::parameters::ParameterSet;

/// Structural classification of a placed family instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum StructuralType {
    NonStructural,
    Structural,
}

/// Category discriminant for indexed element queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Category {
    Wall,
    Duct,
    Pipe,
    Level,
    View3d,
    FamilySymbol,
    FamilyInstance,
}

impl Category {
    /// Returns the category name as a string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Wall => "Wall",
            Category::Duct => "Duct",
            Category::Pipe => "Pipe",
            Category::Level => "Level",
            Category::View3d => "View3d",
            Category::FamilySymbol => "FamilySymbol",
            Category::FamilyInstance => "FamilyInstance",
        }
    }
}

/// A wall: straight location line, thickness, height, hosting level.
///
/// The location line runs along the wall centerline at the base level's
/// elevation; the solid extends `thickness / 2` to each side and
/// `height` upward.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WallData {
    pub start: Point3<f64>,
    pub end: Point3<f64>,
    pub thickness: f64,
    pub height: f64,
    /// The level the wall is based on.
    pub level: ElementId,
}

/// A duct or pipe: straight centerline plus outer diameter.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MepCurveData {
    pub start: Point3<f64>,
    pub end: Point3<f64>,
    pub diameter: f64,
}

impl MepCurveData {
    /// Unit direction of the centerline, `None` for a degenerate
    /// (zero-length) segment.
    pub fn direction(&self) -> Option<Unit<Vector3<f64>>> {
        Unit::try_new(self.end - self.start, 1e-12)
    }

    /// Length of the centerline.
    pub fn length(&self) -> f64 {
        (self.end - self.start).norm()
    }
}

/// A named level at an absolute elevation.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LevelData {
    pub name: String,
    pub elevation: f64,
}

/// A 3D view. Template views cannot scope an intersector.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ViewData {
    pub name: String,
    pub is_template: bool,
}

/// A loadable family type: the template holes are stamped from.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FamilySymbolData {
    /// Type name within the family.
    pub name: String,
    /// Name of the owning family.
    pub family_name: String,
    /// Symbols must be activated once before instances can be placed.
    pub is_active: bool,
    /// Default parameter values copied onto each new instance.
    pub defaults: ParameterSet,
}

/// A placed copy of a family symbol, hosted on a wall.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FamilyInstanceData {
    pub symbol: ElementId,
    pub host: ElementId,
    pub level: ElementId,
    pub location: Point3<f64>,
    pub structural: StructuralType,
    pub parameters: ParameterSet,
}

/// One stored element, wrapping its per-category data.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Element {
    Wall(WallData),
    Duct(MepCurveData),
    Pipe(MepCurveData),
    Level(LevelData),
    View3d(ViewData),
    FamilySymbol(FamilySymbolData),
    FamilyInstance(FamilyInstanceData),
}

impl Element {
    /// Returns the category of this element.
    pub fn category(&self) -> Category {
        match self {
            Element::Wall(_) => Category::Wall,
            Element::Duct(_) => Category::Duct,
            Element::Pipe(_) => Category::Pipe,
            Element::Level(_) => Category::Level,
            Element::View3d(_) => Category::View3d,
            Element::FamilySymbol(_) => Category::FamilySymbol,
            Element::FamilyInstance(_) => Category::FamilyInstance,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mep_curve_direction_and_length() {
        let curve = MepCurveData {
            start: Point3::new(1.0, 2.0, 3.0),
            end: Point3::new(1.0, 7.0, 3.0),
            diameter: 0.2,
        };
        let dir = curve.direction().unwrap();
        assert!((dir.y - 1.0).abs() < 1e-12);
        assert!((curve.length() - 5.0).abs() < 1e-12);
    }

    #[test]
    fn degenerate_curve_has_no_direction() {
        let curve = MepCurveData {
            start: Point3::origin(),
            end: Point3::origin(),
            diameter: 0.2,
        };
        assert!(curve.direction().is_none());
    }
}
