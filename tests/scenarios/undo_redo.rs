/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/. */

use euclid::default::Point2D;
use mindcanvas::{CanvasEngine, EngineConfig};

use crate::harness::{assert_no_dangling_edges, id, root_with_children};

#[test]
fn undo_redo_on_fresh_engine_are_noops() {
    let mut engine = CanvasEngine::default();
    assert!(!engine.undo());
    assert!(!engine.redo());
    assert!(engine.graph().is_empty());
}

#[test]
fn cascade_delete_then_undo_restores_edges() {
    let mut engine = root_with_children(EngineConfig::default(), 2);
    let before = engine.graph().clone();

    assert_eq!(engine.delete_node(id(1)), Ok(true));
    assert_eq!(engine.graph().edge_count(), 0);
    assert_eq!(engine.graph().node_count(), 2);
    assert_no_dangling_edges(engine.graph());

    assert!(engine.undo());
    assert_eq!(engine.graph(), &before);
    assert!(engine.redo());
    assert_eq!(engine.graph().edge_count(), 0);
}

#[test]
fn new_command_clears_redo() {
    let mut engine = root_with_children(EngineConfig::default(), 1);
    engine.undo();
    assert!(engine.can_redo());

    assert!(engine.rename_node(id(1), "Intake"));
    assert!(!engine.can_redo());
    assert!(!engine.redo());
}

#[test]
fn history_capacity_bounds_undo_depth() {
    let mut config = EngineConfig::default();
    config.history.capacity = 3;
    let mut engine = CanvasEngine::new(config);
    engine.add_root_with_id(id(1)).unwrap();
    for step in 0..5 {
        engine
            .move_node(id(1), Point2D::new(step as f32, 0.0))
            .unwrap();
    }

    let mut undone = 0;
    while engine.undo() {
        undone += 1;
    }
    assert_eq!(undone, 3);
    assert_eq!(engine.graph().node(id(1)).unwrap().position, Point2D::new(1.0, 0.0));
}

#[test]
fn move_after_interleaved_command_is_its_own_undo_step() {
    let mut engine = CanvasEngine::default();
    engine.add_root_with_id(id(1)).unwrap();
    engine.begin_drag(id(1)).unwrap();
    engine.move_node(id(1), Point2D::new(5.0, 5.0)).unwrap();
    engine.add_child_with_id(id(1), id(2)).unwrap();
    let after_child = engine.graph().clone();

    engine.move_node(id(1), Point2D::new(900.0, 900.0)).unwrap();
    assert!(engine.undo());

    assert_eq!(engine.graph(), &after_child);
    assert!(engine.graph().contains_node(id(2)));
}

#[test]
fn drag_gesture_undoes_in_one_step() {
    let mut engine = root_with_children(EngineConfig::default(), 1);
    let before = engine.graph().clone();

    engine.begin_drag(id(2)).unwrap();
    engine.move_node(id(2), Point2D::new(10.0, 10.0)).unwrap();
    engine.move_node(id(2), Point2D::new(20.0, 20.0)).unwrap();
    engine.end_drag();

    assert!(engine.undo());
    assert_eq!(engine.graph(), &before);
}
