/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/. */

use mindcanvas::{CanvasEngine, EditError, EngineConfig};

use crate::harness::{id, position, root_with_children};

#[test]
fn placement_fans_out_around_parent() {
    let engine = root_with_children(EngineConfig::default(), 4);
    let offsets: Vec<f32> = (2..6)
        .map(|n| position(engine.graph(), id(n)).1 - 250.0)
        .collect();

    assert_eq!(offsets, vec![0.0, 120.0, -120.0, 240.0]);
}

#[test]
fn two_cycle_organize_terminates_and_is_undoable() {
    let mut engine = CanvasEngine::default();
    engine.add_root_with_id(id(1)).unwrap();
    engine.add_root_with_id(id(2)).unwrap();
    engine.connect_direct(id(1), id(2)).unwrap();
    engine.connect_direct(id(2), id(1)).unwrap();
    let before = engine.graph().clone();

    let report = engine.organize(&[id(1), id(2)]);

    for node in engine.graph().nodes() {
        assert!(node.position.x.is_finite() && node.position.y.is_finite());
    }
    assert!(report.roots.is_empty());
    assert!(engine.undo());
    assert_eq!(engine.graph(), &before);
}

#[test]
fn cycle_reached_from_root_reports_trip() {
    let mut engine = root_with_children(EngineConfig::default(), 1);
    engine.add_child_with_id(id(2), id(3)).unwrap();
    engine.connect_direct(id(3), id(2)).unwrap();

    let report = engine.organize(&[]);

    assert_eq!(report.errors(), vec![EditError::CycleGuardTripped(id(2))]);
    assert_eq!(position(engine.graph(), id(2)), (400.0, 250.0));
    assert_eq!(position(engine.graph(), id(3)), (700.0, 250.0));
}

#[test]
fn organize_custom_gaps() {
    let mut config = EngineConfig::default();
    config.organize.horizontal_gap = 50.0;
    config.organize.vertical_gap = 10.0;
    let mut engine = root_with_children(config, 2);

    engine.organize(&[]);

    assert_eq!(position(engine.graph(), id(2)), (150.0, 245.0));
    assert_eq!(position(engine.graph(), id(3)), (150.0, 255.0));
}
