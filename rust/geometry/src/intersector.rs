// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! View-scoped ray intersector over the wall set of a document.
//!
//! Mirrors the host intersector the original tool used: construct once
//! per command against a non-template 3D view, then cast one ray per MEP
//! centerline. Raw hits carry the `(link, element)` identity of the wall
//! so callers can clip them to the element's length and collapse
//! front/back-face duplicates.

use nalgebra::{Point3, Unit, Vector3};
use rustc_hash::FxHashSet;

use mep_lite_model::{Application, DocumentKey, ElementId, ElementRef};

use crate::error::{Error, Result};
use crate::mesh::{wall_solid, Mesh};
use crate::ray::Ray;

/// One raw ray crossing: distance from the origin along the ray plus the
/// wall it hit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RayHit {
    /// Distance from the ray origin along the (unit) direction.
    pub proximity: f64,
    /// Identity of the intersected wall.
    pub reference: ElementRef,
}

#[derive(Debug)]
struct Target {
    reference: ElementRef,
    solid: Mesh,
}

/// Ray intersector over every wall visible in a 3D view: the document's
/// own walls plus the walls of each linked document.
#[derive(Debug)]
pub struct ReferenceIntersector {
    targets: Vec<Target>,
}

impl ReferenceIntersector {
    /// Gather wall solids from `document` and its link instances, scoped
    /// by a non-template 3D view.
    pub fn for_view(
        app: &Application,
        document: DocumentKey,
        view: ElementId,
    ) -> Result<Self> {
        let doc = app.document(document)?;
        let view_data = doc.view_3d(view)?;
        if view_data.is_template {
            return Err(Error::InvalidView(format!(
                "{} is a view template",
                view_data.name
            )));
        }

        let mut targets = Vec::with_capacity(doc.walls().count());
        for (id, wall) in doc.walls() {
            let base = doc.level(wall.level)?.elevation;
            targets.push(Target {
                reference: ElementRef::host(id),
                solid: wall_solid(wall, base, Vector3::zeros())?,
            });
        }
        for (link_key, link) in doc.links() {
            let source = app.document(link.source)?;
            for (id, wall) in source.walls() {
                let base = source.level(wall.level)?.elevation;
                targets.push(Target {
                    reference: ElementRef::linked(link_key, id),
                    solid: wall_solid(wall, base, link.offset)?,
                });
            }
        }

        Ok(Self { targets })
    }

    /// Number of wall targets gathered for this view.
    pub fn target_count(&self) -> usize {
        self.targets.len()
    }

    /// Cast a ray, returning every wall-face crossing ordered by
    /// ascending proximity. A wall the ray passes through reports twice,
    /// once per face.
    pub fn find(&self, origin: Point3<f64>, direction: Unit<Vector3<f64>>) -> Vec<RayHit> {
        let ray = Ray::new(origin, direction);
        let mut hits = Vec::new();
        for target in &self.targets {
            for proximity in ray.intersect_mesh(&target.solid) {
                hits.push(RayHit {
                    proximity,
                    reference: target.reference,
                });
            }
        }
        hits.sort_by(|a, b| a.proximity.total_cmp(&b.proximity));
        hits
    }
}

/// Keep only hits the source element physically passes through:
/// proximity within `[0, length]`. Negative proximities never come out
/// of [`ReferenceIntersector::find`], but hand-built hit lists are
/// clipped the same way.
pub fn clip_to_length(hits: Vec<RayHit>, length: f64) -> Vec<RayHit> {
    hits.into_iter()
        .filter(|hit| hit.proximity >= 0.0 && hit.proximity <= length)
        .collect()
}

/// Collapse raw hits to one per `(link, element)` pair, keeping the
/// first occurrence in sequence. With input ordered by proximity the
/// survivor is the nearest crossing, but only pair identity is
/// contractual.
pub fn dedup_by_reference(hits: Vec<RayHit>) -> Vec<RayHit> {
    let mut seen: FxHashSet<ElementRef> = FxHashSet::default();
    hits.into_iter()
        .filter(|hit| seen.insert(hit.reference))
        .collect()
}
