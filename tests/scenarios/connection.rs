/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/. */

use mindcanvas::{CanvasEngine, EdgeId, EditError, EngineConfig};

use crate::harness::{id, root_with_children};

#[test]
fn start_then_click_creates_exactly_one_edge() {
    let mut engine = root_with_children(EngineConfig::default(), 2);
    let edges_before = engine.graph().edge_count();

    engine.start_connection(id(2)).unwrap();
    assert_eq!(engine.connecting_source(), Some(id(2)));
    assert_eq!(engine.click_node(id(3)), Ok(Some(EdgeId::between(id(2), id(3)))));

    assert_eq!(engine.graph().edge_count(), edges_before + 1);
    assert_eq!(engine.connecting_source(), None);
    // Idle again: a further click does nothing.
    assert_eq!(engine.click_node(id(1)), Ok(None));
    assert_eq!(engine.graph().edge_count(), edges_before + 1);
}

#[test]
fn clicking_the_source_leaves_graph_unchanged() {
    let mut engine = root_with_children(EngineConfig::default(), 1);
    let before = engine.graph().clone();
    let checkpoints = engine.history().undo_len();

    engine.start_connection(id(1)).unwrap();
    assert_eq!(engine.click_node(id(1)), Ok(None));

    assert_eq!(engine.graph(), &before);
    assert_eq!(engine.history().undo_len(), checkpoints);
    assert_eq!(engine.connecting_source(), None);
}

#[test]
fn reverse_edge_may_coexist() {
    let mut engine = root_with_children(EngineConfig::default(), 1);
    engine.start_connection(id(2)).unwrap();

    assert!(engine.click_node(id(1)).unwrap().is_some());
    assert!(engine.graph().has_edge_between(id(1), id(2)));
    assert!(engine.graph().has_edge_between(id(2), id(1)));
}

#[test]
fn connect_direct_rejects_duplicates_and_self_links() {
    let mut engine = root_with_children(EngineConfig::default(), 1);

    assert_eq!(
        engine.connect_direct(id(1), id(2)),
        Err(EditError::DuplicateId(EdgeId::between(id(1), id(2)).to_string()))
    );
    assert_eq!(engine.connect_direct(id(2), id(2)), Err(EditError::SelfConnect(id(2))));
    assert!(matches!(
        engine.connect_direct(id(2), id(99)),
        Err(EditError::NotFound(_))
    ));
}

#[test]
fn completed_connection_is_undoable() {
    let mut engine = CanvasEngine::default();
    engine.add_root_with_id(id(1)).unwrap();
    engine.add_root_with_id(id(2)).unwrap();
    let before = engine.graph().clone();

    engine.start_connection(id(1)).unwrap();
    engine.click_node(id(2)).unwrap();
    assert!(engine.undo());
    assert_eq!(engine.graph(), &before);
}

#[test]
fn cancel_connection_disarms() {
    let mut engine = root_with_children(EngineConfig::default(), 1);
    engine.start_connection(id(1)).unwrap();

    assert!(engine.cancel_connection());
    assert_eq!(engine.click_node(id(2)), Ok(None));
    assert_eq!(engine.graph().edge_count(), 1);
}
