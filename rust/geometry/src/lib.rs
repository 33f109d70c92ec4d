// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! MEP-Lite Geometry
//!
//! Ray casting of MEP centerlines against wall solids, with the two
//! pieces of logic the placement command owns outright: proximity
//! clipping to the source element's length and deduplication of raw
//! hits by `(link, element)` identity.

pub mod error;
pub mod intersector;
pub mod mesh;
pub mod ray;

// Re-export nalgebra types for convenience
pub use nalgebra::{Point3, Unit, Vector3};

pub use error::{Error, Result};
pub use intersector::{clip_to_length, dedup_by_reference, RayHit, ReferenceIntersector};
pub use mesh::{wall_solid, Mesh};
pub use ray::Ray;
