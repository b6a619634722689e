use blueprint_babel::formats::pagebuilder::{ElType, WidgetType};
use blueprint_babel::mappings::flatten::is_redundant_inner_section;
use blueprint_babel::{export, Dialect, Element};
use rstest::rstest;
use std::collections::HashSet;

fn all_elements(content: &[Element]) -> Vec<&Element> {
    let mut out = Vec::new();
    let mut stack: Vec<&Element> = content.iter().rev().collect();
    while let Some(element) = stack.pop() {
        out.push(element);
        stack.extend(element.elements.iter().rev());
    }
    out
}

fn landing_content(dialect: Dialect) -> Vec<Element> {
    export(Some(&crate::landing()), "Landing", dialect).content
}

#[rstest]
#[case(Dialect::Classic, 1, ElType::Section)]
#[case(Dialect::ClassicSimple, 4, ElType::Section)]
#[case(Dialect::Container, 1, ElType::Container)]
fn top_level_blocks_match_the_dialect(
    #[case] dialect: Dialect,
    #[case] blocks: usize,
    #[case] el_type: ElType,
) {
    let content = landing_content(dialect);
    assert_eq!(content.len(), blocks);
    for block in &content {
        assert_eq!(block.el_type, el_type);
        assert!(!block.is_inner);
    }
}

#[rstest]
#[case(Dialect::Classic)]
#[case(Dialect::ClassicSimple)]
#[case(Dialect::Container)]
fn ids_are_unique_and_short(#[case] dialect: Dialect) {
    let content = landing_content(dialect);
    let elements = all_elements(&content);
    let ids: HashSet<&str> = elements.iter().map(|e| e.id.as_str()).collect();
    assert_eq!(ids.len(), elements.len());
    assert!(ids.iter().all(|id| id.len() == 8));
}

#[rstest]
#[case(Dialect::Classic)]
#[case(Dialect::ClassicSimple)]
#[case(Dialect::Container)]
fn no_empty_wrappers_or_widgets_are_emitted(#[case] dialect: Dialect) {
    let content = landing_content(dialect);
    for element in all_elements(&content) {
        match element.el_type {
            ElType::Widget => {
                assert!(element.elements.is_empty());
                if element.widget_type == Some(WidgetType::Image) {
                    assert_ne!(element.settings["image"]["url"], "");
                }
            }
            _ => assert!(
                !element.elements.is_empty(),
                "empty {:?} {}",
                element.el_type,
                element.id
            ),
        }
    }
}

#[rstest]
#[case(Dialect::Classic)]
#[case(Dialect::ClassicSimple)]
fn flattened_columns_hold_no_redundant_wrappers(#[case] dialect: Dialect) {
    let content = landing_content(dialect);
    for element in all_elements(&content) {
        if element.el_type == ElType::Column {
            assert!(!element.elements.iter().any(is_redundant_inner_section));
        }
    }
}

#[rstest]
#[case(Dialect::Classic)]
#[case(Dialect::ClassicSimple)]
#[case(Dialect::Container)]
fn card_background_and_padding_survive(#[case] dialect: Dialect) {
    let content = landing_content(dialect);
    let card = all_elements(&content)
        .into_iter()
        .find(|e| e.settings.contains_key("background_color"))
        .expect("card wrapper");

    assert_eq!(card.settings["background_color"], "rgba(245,247,250,1)");
    assert_eq!(card.settings["padding"]["top"], "24");
    assert_eq!(card.settings["padding"]["isLinked"], true);
}

#[rstest]
#[case(Dialect::Classic)]
#[case(Dialect::Container)]
fn nav_and_input_become_html_widgets(#[case] dialect: Dialect) {
    let content = landing_content(dialect);
    let html: Vec<&str> = all_elements(&content)
        .into_iter()
        .filter(|e| e.widget_type == Some(WidgetType::Html))
        .filter_map(|e| e.settings["html"].as_str())
        .collect();

    assert_eq!(
        html,
        vec![
            r#"<nav><a href="/shop">Shop</a><a href="/about">About</a></nav>"#,
            r#"<input type="text" placeholder="Search products" />"#,
        ]
    );
}

#[test]
fn classic_keeps_loose_blocks_in_one_column() {
    let content = landing_content(Dialect::Classic);
    let column = &content[0].elements[0];
    let kinds: Vec<(ElType, Option<WidgetType>)> = column
        .elements
        .iter()
        .map(|e| (e.el_type, e.widget_type))
        .collect();

    assert_eq!(
        kinds,
        vec![
            (ElType::Section, None),
            (ElType::Widget, Some(WidgetType::Html)),
            (ElType::Section, None),
            (ElType::Widget, Some(WidgetType::TextEditor)),
        ]
    );
    assert!(column.elements[0].is_inner);
}

#[test]
fn classic_simple_promotes_each_block() {
    let content = landing_content(Dialect::ClassicSimple);

    let header = &content[0];
    assert_eq!(header.elements.len(), 2);
    assert_eq!(header.elements[0].settings["_column_size"], "25");
    assert_eq!(header.elements[1].settings["_column_size"], "75");

    let search = &content[1].elements[0].elements;
    assert_eq!(search.len(), 1);
    assert_eq!(search[0].widget_type, Some(WidgetType::Html));

    let card_widgets: Vec<Option<WidgetType>> = content[2].elements[0]
        .elements
        .iter()
        .map(|e| e.widget_type)
        .collect();
    assert_eq!(
        card_widgets,
        vec![
            Some(WidgetType::Image),
            Some(WidgetType::Heading),
            Some(WidgetType::Button)
        ]
    );

    let note = &content[3].elements[0].elements[0];
    assert_eq!(note.settings["editor"], "<p>Free shipping on orders over $50 &amp; more</p>");
    assert_eq!(note.settings["align"], "center");
}

#[test]
fn container_dialect_nests_columns_as_containers() {
    let content = landing_content(Dialect::Container);
    let root = &content[0];
    assert_eq!(root.elements.len(), 4);

    let row = &root.elements[0];
    assert_eq!(row.el_type, ElType::Container);
    assert_eq!(row.settings["flex_direction"], "row");
    assert_eq!(row.elements.len(), 2);
    assert_eq!(row.elements[0].settings["width"]["size"], 25);
    assert!(row.elements.iter().all(|c| c.el_type == ElType::Container && c.is_inner));

    let card = &root.elements[2];
    assert_eq!(card.settings["flex_direction"], "column");
}
