/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/. */

use mindcanvas::{CanvasEngine, EngineConfig, Graph, NodeId};
use uuid::Uuid;

/// Deterministic node id for readable assertions.
pub fn id(n: u128) -> NodeId {
    Uuid::from_u128(n)
}

pub fn position(graph: &Graph, node: NodeId) -> (f32, f32) {
    let p = graph
        .node(node)
        .unwrap_or_else(|| panic!("node {node} missing"))
        .position;
    (p.x, p.y)
}

pub fn assert_no_dangling_edges(graph: &Graph) {
    for edge in graph.edges() {
        assert!(
            graph.contains_node(edge.source) && graph.contains_node(edge.target),
            "edge {} references a missing node",
            edge.id
        );
    }
}

/// Engine seeded with a root `id(1)` and `children` children `id(2)..`.
pub fn root_with_children(config: EngineConfig, children: u128) -> CanvasEngine {
    let mut engine = CanvasEngine::new(config);
    engine.add_root_with_id(id(1)).unwrap();
    for n in 0..children {
        engine.add_child_with_id(id(1), id(2 + n)).unwrap();
    }
    engine
}
