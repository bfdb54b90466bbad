/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/. */

use mindcanvas::{CanvasEngine, Command, CommandOutcome, EngineConfig, Graph, MapDocument};

use crate::harness::{id, position};

#[test]
fn build_organize_and_unwind() {
    let mut engine = CanvasEngine::default();

    let root = engine.add_root().unwrap();
    assert_eq!(position(engine.graph(), root), (100.0, 250.0));
    let after_root = engine.graph().clone();

    let children: Vec<_> = (0..3).map(|_| engine.add_child(root).unwrap()).collect();
    let ys: Vec<f32> = children
        .iter()
        .map(|child| position(engine.graph(), *child).1 - 250.0)
        .collect();
    assert_eq!(ys, vec![0.0, 120.0, -120.0]);

    let report = engine.organize(&[]);
    assert_eq!(report.roots, vec![root]);
    assert_eq!(position(engine.graph(), children[0]), (400.0, 130.0));
    assert_eq!(position(engine.graph(), children[1]), (400.0, 250.0));
    assert_eq!(position(engine.graph(), children[2]), (400.0, 370.0));
    assert_eq!(position(engine.graph(), root), (100.0, 250.0));

    // Organize and the three children unwind first; the root goes last.
    for _ in 0..4 {
        assert!(engine.undo());
    }
    assert_eq!(engine.graph(), &after_root);
    assert!(engine.undo());
    assert_eq!(engine.graph(), &Graph::new());
    assert!(!engine.undo());
}

#[test]
fn command_script_round_trips_through_the_store() {
    let script = [
        r#"{"command":"add_root","id":"00000000-0000-0000-0000-000000000001"}"#,
        r#"{"command":"add_child","parent":"00000000-0000-0000-0000-000000000001","id":"00000000-0000-0000-0000-000000000002"}"#,
        r#"{"command":"rename_node","id":"00000000-0000-0000-0000-000000000002","label":"Qualify lead"}"#,
        r#"{"command":"set_attribute","id":"00000000-0000-0000-0000-000000000002","key":"kind","value":"decision"}"#,
        r#"{"command":"set_attribute","id":"00000000-0000-0000-0000-000000000002","key":"color","value":"mauve"}"#,
    ];
    let commands: Vec<Command> = script
        .iter()
        .map(|line| serde_json::from_str(line).unwrap())
        .collect();

    let mut engine = CanvasEngine::new(EngineConfig::default());
    let results = engine.apply_commands(commands);
    assert_eq!(results[0], Ok(CommandOutcome::NodeCreated(id(1))));
    assert!(results[4].is_err());

    let json = engine.export_snapshot().to_json().unwrap();
    let document = MapDocument::from_json(&json).unwrap();
    let mut restored = CanvasEngine::default();
    restored.load_document(&document);

    assert_eq!(restored.graph(), engine.graph());
    let child = restored.graph().node(id(2)).unwrap();
    assert_eq!(child.label, "Qualify lead");
    assert_eq!(child.attributes.kind.as_persisted_str(), "decision");
    assert_eq!(child.attributes.color.as_persisted_str(), "blue");
}

#[test]
fn exported_document_shape() {
    let mut engine = CanvasEngine::default();
    engine.add_root_with_id(id(1)).unwrap();
    engine.add_child_with_id(id(1), id(2)).unwrap();
    engine.set_attribute(id(2), "color", "red").unwrap();

    insta::assert_snapshot!(engine.export_snapshot().to_json_pretty().unwrap(), @r#"
    {
      "nodes": [
        {
          "id": "00000000-0000-0000-0000-000000000001",
          "position": {
            "x": 100.0,
            "y": 250.0
          },
          "label": "Start",
          "attributes": {
            "kind": "step",
            "color": "blue"
          }
        },
        {
          "id": "00000000-0000-0000-0000-000000000002",
          "position": {
            "x": 380.0,
            "y": 250.0
          },
          "label": "New Step",
          "attributes": {
            "kind": "step",
            "color": "red"
          }
        }
      ],
      "edges": [
        {
          "id": "e-00000000-0000-0000-0000-000000000001-00000000-0000-0000-0000-000000000002",
          "source": "00000000-0000-0000-0000-000000000001",
          "target": "00000000-0000-0000-0000-000000000002"
        }
      ]
    }
    "#);
}
