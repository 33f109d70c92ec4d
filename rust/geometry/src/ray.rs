// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Ray/triangle intersection (Möller–Trumbore).

use nalgebra::{Point3, Unit, Vector3};
use smallvec::SmallVec;

use crate::mesh::Mesh;

/// Determinant threshold below which a ray is treated as parallel to a
/// triangle, and minimum positive distance for a hit. Skimming hits and
/// hits behind the origin are discarded.
const EPSILON: f64 = 1e-9;

/// A ray with unit direction.
#[derive(Debug, Clone, Copy)]
pub struct Ray {
    pub origin: Point3<f64>,
    pub direction: Unit<Vector3<f64>>,
}

impl Ray {
    /// Create a ray from origin and unit direction
    pub fn new(origin: Point3<f64>, direction: Unit<Vector3<f64>>) -> Self {
        Self { origin, direction }
    }

    /// Distance along the ray to a triangle crossing, front and back
    /// faces alike. `None` if the ray misses or runs parallel.
    pub fn intersect_triangle(
        &self,
        v0: Point3<f64>,
        v1: Point3<f64>,
        v2: Point3<f64>,
    ) -> Option<f64> {
        let edge1 = v1 - v0;
        let edge2 = v2 - v0;

        let p = self.direction.cross(&edge2);
        let det = edge1.dot(&p);
        // No culling: both entry and exit faces of a solid must report.
        if det.abs() < EPSILON {
            return None;
        }
        let inv_det = 1.0 / det;

        let s = self.origin - v0;
        let u = s.dot(&p) * inv_det;
        if !(0.0..=1.0).contains(&u) {
            return None;
        }

        let q = s.cross(&edge1);
        let v = self.direction.dot(&q) * inv_det;
        if v < 0.0 || u + v > 1.0 {
            return None;
        }

        let t = edge2.dot(&q) * inv_det;
        (t > EPSILON).then_some(t)
    }

    /// Distances to every face of a mesh the ray crosses, ascending.
    /// A convex solid yields at most one entry and one exit distance:
    /// a crossing on the shared edge of two coplanar triangles (the
    /// diagonal of a face quad) reports once, not once per triangle.
    pub fn intersect_mesh(&self, mesh: &Mesh) -> SmallVec<[f64; 4]> {
        let mut hits: SmallVec<[f64; 4]> = SmallVec::new();
        for i in 0..mesh.triangle_count() {
            let (v0, v1, v2) = mesh.triangle(i);
            if let Some(t) = self.intersect_triangle(v0, v1, v2) {
                hits.push(t);
            }
        }
        hits.sort_by(f64::total_cmp);
        hits.dedup_by(|a, b| (*a - *b).abs() < EPSILON);
        hits
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn x_ray() -> Ray {
        Ray::new(
            Point3::new(0.0, 0.0, 0.0),
            Unit::new_normalize(Vector3::new(1.0, 0.0, 0.0)),
        )
    }

    #[test]
    fn hits_a_facing_triangle() {
        let t = x_ray()
            .intersect_triangle(
                Point3::new(2.0, -1.0, -1.0),
                Point3::new(2.0, 1.0, -1.0),
                Point3::new(2.0, 0.0, 2.0),
            )
            .unwrap();
        assert_relative_eq!(t, 2.0);
    }

    #[test]
    fn back_faces_report_too() {
        // Same triangle, reversed winding.
        let t = x_ray()
            .intersect_triangle(
                Point3::new(2.0, 1.0, -1.0),
                Point3::new(2.0, -1.0, -1.0),
                Point3::new(2.0, 0.0, 2.0),
            )
            .unwrap();
        assert_relative_eq!(t, 2.0);
    }

    #[test]
    fn misses_outside_the_triangle() {
        assert!(x_ray()
            .intersect_triangle(
                Point3::new(2.0, 5.0, 5.0),
                Point3::new(2.0, 6.0, 5.0),
                Point3::new(2.0, 5.5, 6.0),
            )
            .is_none());
    }

    #[test]
    fn parallel_ray_does_not_hit() {
        assert!(x_ray()
            .intersect_triangle(
                Point3::new(0.0, -1.0, 1.0),
                Point3::new(4.0, -1.0, 1.0),
                Point3::new(2.0, 1.0, 1.0),
            )
            .is_none());
    }

    #[test]
    fn hits_behind_the_origin_are_discarded() {
        assert!(x_ray()
            .intersect_triangle(
                Point3::new(-2.0, -1.0, -1.0),
                Point3::new(-2.0, 1.0, -1.0),
                Point3::new(-2.0, 0.0, 2.0),
            )
            .is_none());
    }
}
