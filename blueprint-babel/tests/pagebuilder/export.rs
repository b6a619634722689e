use crate::outline;
use blueprint_babel::{export, Dialect, Element};
use blueprint_core::{Column, Columns, Image, LayoutNode, Padding, Style};
use serde_json::{json, Value};

fn exported(layout: &LayoutNode, dialect: Dialect) -> Value {
    serde_json::to_value(export(Some(layout), "Test", dialect)).unwrap()
}

fn text_with_align(text: &str, align: &str) -> LayoutNode {
    let mut node = LayoutNode::text(text);
    *node.style_mut() = Some(Style {
        text_align: Some(align.to_string()),
        ..Style::default()
    });
    node
}

fn sized(style: Style, children: Vec<LayoutNode>) -> Column {
    Column::new(Some(style), children)
}

#[test]
fn empty_layout_exports_empty_content() {
    let document = export(None, "Empty", Dialect::Classic);
    assert_eq!(document.title, "Empty");
    assert!(document.content.is_empty());

    let blank = LayoutNode::section(vec![LayoutNode::text(" ")]);
    for dialect in Dialect::ALL {
        assert!(export(Some(&blank), "Blank", dialect).content.is_empty());
    }
}

#[test]
fn one_heading_in_classic_is_section_column_widget() {
    let layout = LayoutNode::section(vec![LayoutNode::heading("Hello World", 1)]);
    let document = export(Some(&layout), "My Design", Dialect::Classic);

    assert_eq!(document.content[0].id.len(), 8);
    insta::assert_snapshot!(outline(&document.content), @r##"
    Section
      Column
        Widget Heading {"header_size":"h1","title":"Hello World"}
    "##);
}

#[test]
fn one_heading_in_container_dialect_has_no_section_or_column() {
    let layout = LayoutNode::section(vec![LayoutNode::heading("Hello World", 1)]);
    let value = exported(&layout, Dialect::Container);

    let content = value["content"].as_array().unwrap();
    assert_eq!(content.len(), 1);
    assert_eq!(content[0]["elType"], "container");
    assert_eq!(content[0]["isInner"], false);
    assert_eq!(content[0]["elements"].as_array().unwrap().len(), 1);
    assert_eq!(content[0]["elements"][0]["widgetType"], "heading");
}

#[test]
fn root_level_leaves_are_wrapped() {
    let layout = LayoutNode::text("Hello");

    let classic = exported(&layout, Dialect::Classic);
    let widget = &classic["content"][0]["elements"][0]["elements"][0];
    assert_eq!(classic["content"][0]["elType"], "section");
    assert_eq!(widget["widgetType"], "text-editor");
    assert_eq!(widget["settings"]["editor"], "<p>Hello</p>");

    let container = exported(&layout, Dialect::Container);
    assert_eq!(container["content"][0]["elType"], "container");
    assert_eq!(
        container["content"][0]["elements"][0]["widgetType"],
        "text-editor"
    );
}

#[test]
fn classic_columns_carry_background_padding_and_sizes() {
    let layout = LayoutNode::section(vec![LayoutNode::Columns(Columns {
        style: Some(Style {
            background_color: Some("#92245A".to_string()),
            padding: Some(Padding {
                top: 8.0,
                right: 12.0,
                bottom: 8.0,
                left: 12.0,
            }),
            ..Style::default()
        }),
        columns: vec![
            sized(
                Style {
                    width_px: Some(600.0),
                    ..Style::default()
                },
                vec![text_with_align("LIMITED TIME!", "center")],
            ),
            sized(
                Style {
                    width_px: Some(200.0),
                    ..Style::default()
                },
                vec![LayoutNode::Button(blueprint_core::Button {
                    label: "Ends in 48 hours".to_string(),
                    href: "#".to_string(),
                    style: None,
                })],
            ),
        ],
    })]);

    let document = export(Some(&layout), "Test", Dialect::Classic);
    insta::assert_snapshot!(outline(&document.content), @r##"
    Section {"background_background":"classic","background_color":"#92245A","padding":{"bottom":"8","isLinked":false,"left":"12","right":"12","top":"8","unit":"px"}}
      Column {"_column_size":"75"}
        Widget TextEditor {"align":"center","editor":"<p>LIMITED TIME!</p>"}
      Column {"_column_size":"25"}
        Widget Button {"link":{"url":"#"},"text":"Ends in 48 hours"}
    "##);
}

#[test]
fn column_sizes_follow_width_percent_then_grow() {
    let layout = LayoutNode::section(vec![LayoutNode::Columns(Columns {
        style: None,
        columns: vec![
            sized(
                Style {
                    width_percent: Some(25.0),
                    ..Style::default()
                },
                vec![LayoutNode::text("Left")],
            ),
            sized(
                Style {
                    flex_grow: Some(1.0),
                    flex_basis: Some(0.0),
                    ..Style::default()
                },
                vec![LayoutNode::text("Right")],
            ),
        ],
    })]);

    let classic = exported(&layout, Dialect::Classic);
    assert_eq!(classic["content"][0]["elements"][0]["settings"]["_column_size"], "25");
    assert_eq!(classic["content"][0]["elements"][1]["settings"]["_column_size"], "75");

    let container = exported(&layout, Dialect::Container);
    let row = &container["content"][0]["elements"][0];
    assert_eq!(row["elType"], "container");
    assert_eq!(row["isInner"], true);
    assert_eq!(row["settings"]["flex_direction"], "row");
    assert_eq!(
        row["elements"][1]["settings"]["width"],
        json!({"unit": "%", "size": 75, "sizes": []})
    );
}

#[test]
fn hugging_column_next_to_percent_column_keeps_its_width() {
    let layout = LayoutNode::Columns(Columns {
        style: None,
        columns: vec![
            sized(
                Style {
                    flex_grow: Some(0.0),
                    flex_basis_auto: Some(true),
                    ..Style::default()
                },
                vec![LayoutNode::text("Logo")],
            ),
            sized(
                Style {
                    width_percent: Some(25.0),
                    flex_grow: Some(0.0),
                    ..Style::default()
                },
                vec![LayoutNode::text("Menu")],
            ),
        ],
    });

    let classic = exported(&layout, Dialect::Classic);
    let columns = &classic["content"][0]["elements"];
    assert_eq!(columns[0]["settings"]["_column_size"], "75");
    assert_eq!(columns[1]["settings"]["_column_size"], "25");

    let container = exported(&layout, Dialect::Container);
    let row = &container["content"][0];
    assert_eq!(row["elements"][0]["settings"]["width"]["size"], 75);
    assert_eq!(row["elements"][1]["settings"]["width"]["size"], 25);
}

#[test]
fn columns_without_hints_get_no_size() {
    let layout = LayoutNode::Columns(Columns {
        style: None,
        columns: vec![
            Column::new(None, vec![LayoutNode::text("A")]),
            Column::new(None, vec![LayoutNode::text("B")]),
        ],
    });
    let value = exported(&layout, Dialect::Classic);
    let column = &value["content"][0]["elements"][0];
    assert!(column["settings"].get("_column_size").is_none());
}

#[test]
fn image_widgets_need_a_source() {
    let with_src = LayoutNode::Image(Image {
        src: "https://example.com/a.png".to_string(),
        alt: "Alt".to_string(),
        style: None,
    });
    let without_src = LayoutNode::Image(Image {
        src: String::new(),
        alt: "Alt".to_string(),
        style: None,
    });
    let layout = LayoutNode::container(None, vec![without_src, with_src]);

    let value = exported(&layout, Dialect::Container);
    let widgets = value["content"][0]["elements"].as_array().unwrap();
    assert_eq!(widgets.len(), 1);
    assert_eq!(
        widgets[0]["settings"],
        json!({"image": {"url": "https://example.com/a.png"}, "caption": "Alt"})
    );
}

#[test]
fn text_is_escaped_in_editor_markup() {
    let layout = LayoutNode::text("Fish & \"chips\"");
    let value = exported(&layout, Dialect::Container);
    assert_eq!(
        value["content"][0]["elements"][0]["settings"]["editor"],
        "<p>Fish &amp; &quot;chips&quot;</p>"
    );
}

#[test]
fn classic_landing_page() {
    let document = export(Some(&crate::landing()), "Landing", Dialect::Classic);
    insta::assert_snapshot!(outline(&document.content), @r##"
    Section
      Column
        Section inner
          Column {"_column_size":"25"}
            Widget Heading {"header_size":"h2","title":"Acme"}
          Column {"_column_size":"75"}
            Widget Html {"html":"<nav><a href=\"/shop\">Shop</a><a href=\"/about\">About</a></nav>"}
        Widget Html {"html":"<input type=\"text\" placeholder=\"Search products\" />"}
        Section inner {"background_background":"classic","background_color":"rgba(245,247,250,1)","padding":{"bottom":"24","isLinked":true,"left":"24","right":"24","top":"24","unit":"px"}}
          Column
            Widget Image {"caption":"Product photo","image":{"url":"https://placehold.co/328x220?text=Product%20photo"}}
            Widget Heading {"header_size":"h2","title":"Trail shoe"}
            Widget Button {"link":{"url":"#"},"text":"Buy now"}
        Widget TextEditor {"align":"center","editor":"<p>Free shipping on orders over $50 &amp; more</p>"}
    "##);
}

#[test]
fn container_landing_page() {
    let document = export(Some(&crate::landing()), "Landing", Dialect::Container);
    insta::assert_snapshot!(outline(&document.content), @r##"
    Container
      Container inner {"flex_direction":"row"}
        Container inner {"width":{"size":25,"sizes":[],"unit":"%"}}
          Widget Heading {"header_size":"h2","title":"Acme"}
        Container inner {"width":{"size":75,"sizes":[],"unit":"%"}}
          Widget Html {"html":"<nav><a href=\"/shop\">Shop</a><a href=\"/about\">About</a></nav>"}
      Widget Html {"html":"<input type=\"text\" placeholder=\"Search products\" />"}
      Container inner {"background_background":"classic","background_color":"rgba(245,247,250,1)","flex_direction":"column","padding":{"bottom":"24","isLinked":true,"left":"24","right":"24","top":"24","unit":"px"}}
        Widget Image {"caption":"Product photo","image":{"url":"https://placehold.co/328x220?text=Product%20photo"}}
        Widget Heading {"header_size":"h2","title":"Trail shoe"}
        Widget Button {"link":{"url":"#"},"text":"Buy now"}
      Container inner
        Widget TextEditor {"align":"center","editor":"<p>Free shipping on orders over $50 &amp; more</p>"}
    "##);
}

#[test]
fn repeated_exports_are_byte_identical() {
    let layout = crate::landing();
    for dialect in Dialect::ALL {
        let first = serde_json::to_string(&export(Some(&layout), "Landing", dialect)).unwrap();
        let second = serde_json::to_string(&export(Some(&layout), "Landing", dialect)).unwrap();
        assert_eq!(first, second, "dialect {dialect}");
    }
}

#[test]
fn element_counts_include_nested_elements() {
    let layout = LayoutNode::section(vec![LayoutNode::heading("Hello", 1)]);
    let document = export(Some(&layout), "Count", Dialect::Classic);
    let total: usize = document.content.iter().map(Element::count).sum();
    assert_eq!(total, 3);
}
