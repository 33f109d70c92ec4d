// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! End-to-end intersector tests against a small two-wall scene.

use approx::assert_relative_eq;
use nalgebra::{Point3, Unit, Vector3};

use mep_lite_geometry::{clip_to_length, dedup_by_reference, ReferenceIntersector};
use mep_lite_model::{
    Application, Document, DocumentKey, Element, ElementId, ElementRef, LevelData, ViewData,
    WallData,
};

struct Scene {
    app: Application,
    doc: DocumentKey,
    view: ElementId,
    walls: Vec<ElementId>,
}

/// Two parallel walls crossing the X axis: one centered at x=2.1
/// (faces at 2.0 and 2.2), one centered at x=8.0.
fn build_scene() -> Scene {
    let mut doc = Document::new("AR_Building");
    let level = doc.insert(Element::Level(LevelData {
        name: "Level 1".into(),
        elevation: -1.0,
    }));
    let view = doc.insert(Element::View3d(ViewData {
        name: "{3D}".into(),
        is_template: false,
    }));

    let mut walls = Vec::new();
    for center_x in [2.1, 8.0] {
        walls.push(doc.insert(Element::Wall(WallData {
            start: Point3::new(center_x, -3.0, 0.0),
            end: Point3::new(center_x, 3.0, 0.0),
            thickness: 0.2,
            height: 4.0,
            level,
        })));
    }

    let mut app = Application::new();
    let doc = app.open(doc);
    Scene {
        app,
        doc,
        view,
        walls,
    }
}

fn x_direction() -> Unit<Vector3<f64>> {
    Unit::new_normalize(Vector3::new(1.0, 0.0, 0.0))
}

#[test]
fn finds_both_faces_of_each_wall_in_proximity_order() {
    let scene = build_scene();
    let intersector =
        ReferenceIntersector::for_view(&scene.app, scene.doc, scene.view).unwrap();
    assert_eq!(intersector.target_count(), 2);

    let hits = intersector.find(Point3::new(0.0, 0.0, 1.0), x_direction());
    assert_eq!(hits.len(), 4);
    assert_relative_eq!(hits[0].proximity, 2.0, epsilon = 1e-9);
    assert_relative_eq!(hits[1].proximity, 2.2, epsilon = 1e-9);
    assert_relative_eq!(hits[2].proximity, 7.9, epsilon = 1e-9);
    assert_relative_eq!(hits[3].proximity, 8.1, epsilon = 1e-9);
    assert_eq!(hits[0].reference, ElementRef::host(scene.walls[0]));
    assert_eq!(hits[2].reference, ElementRef::host(scene.walls[1]));
}

#[test]
fn clip_then_dedup_yields_one_hit_per_crossed_wall() {
    let scene = build_scene();
    let intersector =
        ReferenceIntersector::for_view(&scene.app, scene.doc, scene.view).unwrap();

    // A 5.0-long element reaches past the first wall but not the second.
    let hits = intersector.find(Point3::new(0.0, 0.0, 1.0), x_direction());
    let hits = dedup_by_reference(clip_to_length(hits, 5.0));

    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].reference, ElementRef::host(scene.walls[0]));
    assert_relative_eq!(hits[0].proximity, 2.0, epsilon = 1e-9);
}

#[test]
fn ray_above_the_walls_misses() {
    let scene = build_scene();
    let intersector =
        ReferenceIntersector::for_view(&scene.app, scene.doc, scene.view).unwrap();

    // Walls span z in [-1, 3]; cast at z = 5.
    let hits = intersector.find(Point3::new(0.0, 0.0, 5.0), x_direction());
    assert!(hits.is_empty());
}

#[test]
fn link_owned_walls_carry_link_identity_and_offset() {
    let mut scene = build_scene();

    // A structural model linked in, shifted 20 units along X.
    let mut linked = Document::new("ST_Building");
    let level = linked.insert(Element::Level(LevelData {
        name: "Level 1".into(),
        elevation: -1.0,
    }));
    let linked_wall = linked.insert(Element::Wall(WallData {
        start: Point3::new(2.1, -3.0, 0.0),
        end: Point3::new(2.1, 3.0, 0.0),
        thickness: 0.2,
        height: 4.0,
        level,
    }));
    let linked_key = scene.app.open(linked);
    let link = scene
        .app
        .document_mut(scene.doc)
        .unwrap()
        .add_link(linked_key, Vector3::new(20.0, 0.0, 0.0));

    let intersector =
        ReferenceIntersector::for_view(&scene.app, scene.doc, scene.view).unwrap();
    assert_eq!(intersector.target_count(), 3);

    let hits = intersector.find(Point3::new(20.0, 0.0, 1.0), x_direction());
    let hits = dedup_by_reference(hits);
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].reference, ElementRef::linked(link, linked_wall));
    assert_relative_eq!(hits[0].proximity, 2.0, epsilon = 1e-9);
}

#[test]
fn template_views_are_rejected() {
    let mut scene = build_scene();
    let template = scene
        .app
        .document_mut(scene.doc)
        .unwrap()
        .insert(Element::View3d(ViewData {
            name: "Analysis Template".into(),
            is_template: true,
        }));

    assert!(ReferenceIntersector::for_view(&scene.app, scene.doc, template).is_err());
}
