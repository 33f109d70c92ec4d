// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Triangle mesh data and wall solid generation.
//!
//! Walls are stored parametrically in the document model (location line,
//! thickness, height); ray casting needs an explicit watertight solid.
//! [`wall_solid`] builds the oriented box for a wall: the location line
//! runs along the wall centerline, the solid extends half the thickness
//! to each side and the full height above the base level.

use nalgebra::{Point3, Vector3};

use mep_lite_model::WallData;

use crate::error::{Error, Result};

const DEGENERATE_EPSILON: f64 = 1e-9;

/// A triangle mesh with f64 positions.
#[derive(Debug, Clone, Default)]
pub struct Mesh {
    /// Vertex positions.
    pub positions: Vec<Point3<f64>>,
    /// Triangle indices (i0, i1, i2).
    pub indices: Vec<u32>,
}

impl Mesh {
    /// Create an empty mesh
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a mesh with preallocated capacity
    pub fn with_capacity(vertices: usize, indices: usize) -> Self {
        Self {
            positions: Vec::with_capacity(vertices),
            indices: Vec::with_capacity(indices),
        }
    }

    /// Add a vertex, returning its index
    pub fn add_vertex(&mut self, position: Point3<f64>) -> u32 {
        let index = self.positions.len() as u32;
        self.positions.push(position);
        index
    }

    /// Add a triangle by vertex indices
    pub fn add_triangle(&mut self, i0: u32, i1: u32, i2: u32) {
        self.indices.extend_from_slice(&[i0, i1, i2]);
    }

    /// Number of vertices
    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    /// Number of triangles
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Check if mesh has no triangles
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    /// The three corner positions of triangle `i`
    pub fn triangle(&self, i: usize) -> (Point3<f64>, Point3<f64>, Point3<f64>) {
        let i0 = self.indices[i * 3] as usize;
        let i1 = self.indices[i * 3 + 1] as usize;
        let i2 = self.indices[i * 3 + 2] as usize;
        (self.positions[i0], self.positions[i1], self.positions[i2])
    }

    /// Axis-aligned bounds, `None` for an empty mesh
    pub fn bounds(&self) -> Option<(Point3<f64>, Point3<f64>)> {
        let first = *self.positions.first()?;
        let mut min = first;
        let mut max = first;
        for p in &self.positions[1..] {
            min = Point3::new(min.x.min(p.x), min.y.min(p.y), min.z.min(p.z));
            max = Point3::new(max.x.max(p.x), max.y.max(p.y), max.z.max(p.z));
        }
        Some((min, max))
    }
}

/// Build a closed box mesh from 8 corner vertices.
///
/// Corner order: bottom ring (0..4) counter-clockwise seen from above,
/// then the matching top ring (4..8).
fn box_mesh(corners: [Point3<f64>; 8]) -> Mesh {
    let mut mesh = Mesh::with_capacity(8, 36);
    for corner in corners {
        mesh.add_vertex(corner);
    }

    // Bottom
    mesh.add_triangle(0, 2, 1);
    mesh.add_triangle(0, 3, 2);
    // Top
    mesh.add_triangle(4, 5, 6);
    mesh.add_triangle(4, 6, 7);
    // Sides
    mesh.add_triangle(0, 1, 5);
    mesh.add_triangle(0, 5, 4);
    mesh.add_triangle(1, 2, 6);
    mesh.add_triangle(1, 6, 5);
    mesh.add_triangle(2, 3, 7);
    mesh.add_triangle(2, 7, 6);
    mesh.add_triangle(3, 0, 4);
    mesh.add_triangle(3, 4, 7);

    mesh
}

/// Build the watertight solid of a wall.
///
/// `base_elevation` is the elevation of the wall's base level; `offset`
/// is the translation of the link instance the wall came through (zero
/// for host-owned walls). The wall location line must be horizontal and
/// non-degenerate.
pub fn wall_solid(wall: &WallData, base_elevation: f64, offset: Vector3<f64>) -> Result<Mesh> {
    let along = Vector3::new(wall.end.x - wall.start.x, wall.end.y - wall.start.y, 0.0);
    let length = along.norm();
    if length < DEGENERATE_EPSILON {
        return Err(Error::DegenerateWall(
            "location line has zero horizontal extent".into(),
        ));
    }
    if wall.thickness < DEGENERATE_EPSILON || wall.height < DEGENERATE_EPSILON {
        return Err(Error::DegenerateWall(format!(
            "thickness {} or height {} is not positive",
            wall.thickness, wall.height
        )));
    }

    let dir = along / length;
    // Horizontal normal of the wall face.
    let lateral = Vector3::new(-dir.y, dir.x, 0.0) * (wall.thickness / 2.0);

    let z0 = base_elevation;
    let z1 = base_elevation + wall.height;
    let a = Point3::new(wall.start.x, wall.start.y, 0.0);
    let b = Point3::new(wall.end.x, wall.end.y, 0.0);

    let corners = [
        Point3::new(a.x - lateral.x, a.y - lateral.y, z0) + offset,
        Point3::new(b.x - lateral.x, b.y - lateral.y, z0) + offset,
        Point3::new(b.x + lateral.x, b.y + lateral.y, z0) + offset,
        Point3::new(a.x + lateral.x, a.y + lateral.y, z0) + offset,
        Point3::new(a.x - lateral.x, a.y - lateral.y, z1) + offset,
        Point3::new(b.x - lateral.x, b.y - lateral.y, z1) + offset,
        Point3::new(b.x + lateral.x, b.y + lateral.y, z1) + offset,
        Point3::new(a.x + lateral.x, a.y + lateral.y, z1) + offset,
    ];

    Ok(box_mesh(corners))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use mep_lite_model::{Document, Element, LevelData};

    fn sample_wall() -> WallData {
        let mut doc = Document::new("AR");
        let level = doc.insert(Element::Level(LevelData {
            name: "L1".into(),
            elevation: 0.0,
        }));
        WallData {
            start: Point3::new(0.0, 0.0, 0.0),
            end: Point3::new(4.0, 0.0, 0.0),
            thickness: 0.2,
            height: 3.0,
            level,
        }
    }

    #[test]
    fn wall_solid_is_a_closed_box() {
        let mesh = wall_solid(&sample_wall(), 0.0, Vector3::zeros()).unwrap();
        assert_eq!(mesh.vertex_count(), 8);
        assert_eq!(mesh.triangle_count(), 12);

        let (min, max) = mesh.bounds().unwrap();
        assert_relative_eq!(min.x, 0.0);
        assert_relative_eq!(max.x, 4.0);
        assert_relative_eq!(min.y, -0.1);
        assert_relative_eq!(max.y, 0.1);
        assert_relative_eq!(min.z, 0.0);
        assert_relative_eq!(max.z, 3.0);
    }

    #[test]
    fn wall_solid_applies_base_elevation_and_link_offset() {
        let mesh = wall_solid(&sample_wall(), 3.0, Vector3::new(10.0, 0.0, 0.0)).unwrap();
        let (min, max) = mesh.bounds().unwrap();
        assert_relative_eq!(min.x, 10.0);
        assert_relative_eq!(max.x, 14.0);
        assert_relative_eq!(min.z, 3.0);
        assert_relative_eq!(max.z, 6.0);
    }

    #[test]
    fn degenerate_wall_is_rejected() {
        let mut wall = sample_wall();
        wall.end = wall.start;
        assert!(matches!(
            wall_solid(&wall, 0.0, Vector3::zeros()),
            Err(Error::DegenerateWall(_))
        ));
    }
}
