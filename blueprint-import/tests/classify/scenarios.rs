//! Whole-node classification scenarios.

use blueprint_core::{Align, Column, Columns, LayoutNode};
use blueprint_import::{Classifier, SourceNode, Thresholds};
use serde_json::json;

fn classify(value: serde_json::Value) -> Option<LayoutNode> {
    Classifier::default().classify(&SourceNode::from_value(&value))
}

#[test]
fn horizontal_title_and_body_become_columns() {
    let out = classify(json!({
        "type": "FRAME",
        "layoutMode": "HORIZONTAL",
        "absoluteBoundingBox": {"x": 0, "y": 0, "width": 600, "height": 60},
        "children": [
            {"type": "TEXT", "characters": "Welcome", "style": {"fontSize": 32},
             "absoluteBoundingBox": {"x": 0, "y": 0, "width": 300, "height": 40}},
            {"type": "TEXT", "characters": "Glad you are here", "style": {"fontSize": 16},
             "absoluteBoundingBox": {"x": 300, "y": 10, "width": 300, "height": 20}}
        ]
    }));

    let Some(LayoutNode::Columns(columns)) = out else {
        panic!("expected columns, got {out:?}");
    };
    assert_eq!(columns.columns.len(), 2);
    match &columns.columns[0].children[..] {
        [LayoutNode::Heading(h)] => {
            assert_eq!(h.level, 1);
            assert_eq!(h.text, "Welcome");
        }
        other => panic!("expected heading, got {other:?}"),
    }
    assert!(matches!(
        &columns.columns[1].children[..],
        [LayoutNode::Text(t)] if t.text == "Glad you are here"
    ));
}

#[test]
fn full_bleed_rectangle_makes_a_card() {
    let out = classify(json!({
        "type": "FRAME",
        "absoluteBoundingBox": {"x": 100, "y": 100, "width": 300, "height": 200},
        "children": [
            {
                "type": "RECTANGLE",
                "absoluteBoundingBox": {"x": 100, "y": 100, "width": 300, "height": 200},
                "cornerRadius": 12,
                "fills": [{"type": "SOLID", "color": {"r": 1, "g": 1, "b": 1}}],
                "effects": [{"type": "DROP_SHADOW", "color": {"r": 0, "g": 0, "b": 0, "a": 0.2},
                             "offset": {"x": 0, "y": 2}, "radius": 6, "spread": 0}]
            },
            {"type": "TEXT", "characters": "Plan", "style": {"fontSize": 20},
             "absoluteBoundingBox": {"x": 116, "y": 116, "width": 100, "height": 24}},
            {"type": "TEXT", "characters": "All features included",
             "absoluteBoundingBox": {"x": 116, "y": 150, "width": 200, "height": 20}}
        ]
    }));

    let Some(LayoutNode::Container(card)) = out else {
        panic!("expected container, got {out:?}");
    };
    assert_eq!(card.children.len(), 2);
    let style = card.style.unwrap();
    assert_eq!(style.background_color.as_deref(), Some("rgba(255,255,255,1)"));
    assert_eq!(style.border_radius.as_deref(), Some("12px"));
    assert_eq!(
        style.box_shadow.as_deref(),
        Some("0px 2px 6px 0px rgba(0,0,0,0.2)")
    );
    assert!(matches!(card.children[0], LayoutNode::Heading(_)));
}

#[test]
fn background_with_single_label_falls_through_to_button() {
    let out = classify(json!({
        "type": "FRAME",
        "absoluteBoundingBox": {"x": 0, "y": 0, "width": 300, "height": 200},
        "children": [
            {"type": "RECTANGLE", "absoluteBoundingBox": {"x": 0, "y": 0, "width": 300, "height": 200},
             "fills": [{"type": "SOLID", "color": {"r": 0, "g": 0, "b": 0}}]},
            {"type": "TEXT", "characters": "Alone",
             "absoluteBoundingBox": {"x": 10, "y": 10, "width": 100, "height": 20}}
        ]
    }));

    // One content child is too few for a card; the painted label reads as a button.
    let Some(LayoutNode::Button(button)) = out else {
        panic!("expected button, got {out:?}");
    };
    assert_eq!(button.label, "Alone");
    assert_eq!(
        button.style.unwrap().background_color.as_deref(),
        Some("rgba(0,0,0,1)")
    );
}

#[test]
fn thresholds_change_the_centering_rewrite() {
    let bar = json!({
        "type": "FRAME",
        "layoutMode": "HORIZONTAL",
        "primaryAxisAlignItems": "SPACE_BETWEEN",
        "absoluteBoundingBox": {"x": 0, "y": 0, "width": 400, "height": 60},
        "children": [
            {"type": "TEXT", "characters": "Cart", "style": {"fontSize": 24},
             "absoluteBoundingBox": {"x": 110, "y": 20, "width": 100, "height": 30}},
            {"type": "TEXT", "characters": "Done", "style": {"fontSize": 24},
             "absoluteBoundingBox": {"x": 340, "y": 20, "width": 60, "height": 30}}
        ]
    });
    let node = SourceNode::from_value(&bar);

    let justify = |classifier: Classifier| match classifier.classify(&node) {
        Some(LayoutNode::Columns(c)) => c.style.and_then(|s| s.justify),
        other => panic!("expected columns, got {other:?}"),
    };

    // Label center is 40 units left of the bar center.
    assert_eq!(justify(Classifier::default()), Some(Align::Min));
    let strict = Thresholds {
        centered_label_tolerance: 20.0,
        ..Thresholds::default()
    };
    assert_eq!(justify(Classifier::new(strict)), Some(Align::SpaceBetween));
}

#[test]
fn malformed_fields_still_classify() {
    let out = classify(json!({
        "type": "FRAME",
        "layoutMode": 12,
        "absoluteBoundingBox": null,
        "children": [
            {"type": "TEXT", "characters": "Still here", "style": "bold"},
            {"type": "TEXT", "characters": 7},
            "garbage"
        ]
    }));

    // Without boxes both texts share one row; the blank one is pruned.
    let Some(LayoutNode::Container(block)) = out else {
        panic!("expected container, got {out:?}");
    };
    assert_eq!(
        block.children,
        vec![LayoutNode::Columns(Columns {
            style: None,
            columns: vec![Column::new(None, vec![LayoutNode::text("Still here")])],
        })]
    );
}
