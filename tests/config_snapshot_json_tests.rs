use orgchart_rs::OrgChartError;
use orgchart_rs::api::{
    LayoutMetrics, ORG_CHART_SNAPSHOT_JSON_SCHEMA_V1, OrgChart, OrgChartConfig, OrgChartSnapshot,
    PointerBehavior,
};
use orgchart_rs::core::{MAX_JSON_TREE_DEPTH, NodeId, OrgTree, Viewport, sample_organization};
use orgchart_rs::render::NullRenderer;

#[test]
fn config_json_keeps_custom_behavior() {
    let config = OrgChartConfig::new(Viewport::new(900, 700))
        .with_highlighted_id("eng-backend-1")
        .with_zoom_limits(0.25, 3.0)
        .with_initial_zoom(0.75)
        .with_pointer_behavior(PointerBehavior { click_slop_px: 6.0 })
        .with_layout_metrics(LayoutMetrics {
            node_width: 180.0,
            ..LayoutMetrics::default()
        })
        .with_notification_capacity(3);

    let json = config.to_json_pretty().expect("serialize config");
    let parsed = OrgChartConfig::from_json_str(&json).expect("parse config");
    assert_eq!(parsed, config);
}

#[test]
fn minimal_config_json_fills_defaults() {
    let parsed = OrgChartConfig::from_json_str(r#"{ "viewport": { "width": 640, "height": 480 } }"#)
        .expect("parse minimal config");
    assert_eq!(parsed, OrgChartConfig::new(Viewport::new(640, 480)));
}

#[test]
fn malformed_config_json_is_invalid_data() {
    let err = OrgChartConfig::from_json_str("{ not json").expect_err("malformed");
    assert!(matches!(err, OrgChartError::InvalidData(_)));
}

#[test]
fn tree_json_accepts_nested_children_and_integer_like_ids() {
    let input = r#"{
        "id": "1",
        "name": "Root Person",
        "role": "Director",
        "children": [
            { "id": "2", "name": "Left", "role": "Manager" },
            { "id": "3", "name": "Right", "role": "Manager",
              "children": [ { "id": "4", "name": "Leaf", "role": "Engineer" } ] }
        ]
    }"#;
    let tree = OrgTree::from_json_str(input).expect("parse tree");
    assert_eq!(tree.len(), 4);
    assert!(tree.contains(&NodeId::from(4)));

    let reparsed = OrgTree::from_json_str(&tree.to_json_pretty().expect("serialize tree"))
        .expect("reparse tree");
    assert_eq!(reparsed, tree);
}

#[test]
fn tree_json_with_duplicate_ids_is_rejected() {
    let input = r#"{ "id": "a", "name": "A", "role": "x",
        "children": [ { "id": "a", "name": "Again", "role": "y" } ] }"#;
    let err = OrgTree::from_json_str(input).expect_err("duplicate id");
    assert!(matches!(err, OrgChartError::InvalidTree(_)));
}

#[test]
fn snapshot_reflects_chart_state() {
    let mut chart = OrgChart::new(
        NullRenderer::default(),
        sample_organization(),
        OrgChartConfig::new(Viewport::new(1000, 700)).with_highlighted_id("cfo"),
    )
    .expect("chart init");
    chart.toggle_collapse(&NodeId::from("cto"));
    chart.toggle_collapse(&NodeId::from("cpo"));
    chart.set_search_term("ana");

    let snapshot = chart.snapshot();
    assert_eq!(snapshot.collapsed, vec![NodeId::from("cto"), NodeId::from("cpo")]);
    assert_eq!(
        snapshot.rendered,
        vec![
            NodeId::from("ceo"),
            NodeId::from("cto"),
            NodeId::from("cpo"),
            NodeId::from("cfo"),
        ]
    );
    assert_eq!(snapshot.highlighted_id, Some(NodeId::from("cfo")));
    assert_eq!(snapshot.search_term, "ana");
    assert_eq!(snapshot.tree_node_count, 12);
}

#[test]
fn snapshot_contract_v1_is_versioned_and_compat_parsed() {
    let chart = OrgChart::new(
        NullRenderer::default(),
        sample_organization(),
        OrgChartConfig::new(Viewport::new(800, 600)),
    )
    .expect("chart init");
    let snapshot = chart.snapshot();

    let contract = chart
        .snapshot_json_contract_v1_pretty()
        .expect("contract json");
    let value: serde_json::Value = serde_json::from_str(&contract).expect("json value");
    assert_eq!(
        value["schema_version"].as_u64(),
        Some(u64::from(ORG_CHART_SNAPSHOT_JSON_SCHEMA_V1))
    );
    assert_eq!(
        OrgChartSnapshot::from_json_compat_str(&contract).expect("contract parse"),
        snapshot
    );

    let bare = serde_json::to_string(&snapshot).expect("bare json");
    assert_eq!(
        OrgChartSnapshot::from_json_compat_str(&bare).expect("bare parse"),
        snapshot
    );
}

#[test]
fn unsupported_snapshot_schema_version_is_rejected() {
    let chart = OrgChart::new(
        NullRenderer::default(),
        sample_organization(),
        OrgChartConfig::new(Viewport::new(800, 600)),
    )
    .expect("chart init");
    let mut value: serde_json::Value =
        serde_json::from_str(&chart.snapshot_json_contract_v1_pretty().expect("contract"))
            .expect("json value");
    value["schema_version"] = serde_json::json!(99);

    let err = OrgChartSnapshot::from_json_compat_str(&value.to_string())
        .expect_err("unsupported version");
    assert!(matches!(err, OrgChartError::InvalidData(_)));
}

fn chain_json(levels: usize) -> String {
    let mut json = String::new();
    for level in 0..levels {
        json.push_str(&format!(
            r#"{{ "id": "n{level}", "name": "Person {level}", "role": "Level {level}""#
        ));
        if level + 1 < levels {
            json.push_str(r#", "children": ["#);
        }
    }
    for level in (0..levels).rev() {
        if level + 1 < levels {
            json.push(']');
        }
        json.push('}');
    }
    json
}

#[test]
fn tree_json_at_supported_depth_parses() {
    let tree = OrgTree::from_json_str(&chain_json(MAX_JSON_TREE_DEPTH)).expect("parse chain");
    assert_eq!(tree.len(), MAX_JSON_TREE_DEPTH);
}

#[test]
fn tree_json_beyond_supported_depth_is_invalid_tree() {
    let err = OrgTree::from_json_str(&chain_json(MAX_JSON_TREE_DEPTH + 8)).expect_err("too deep");
    assert!(matches!(err, OrgChartError::InvalidTree(_)));
    assert!(err.to_string().contains("deeper than"));
}
