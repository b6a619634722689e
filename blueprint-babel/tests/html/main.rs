//! HTML preview tests.

use blueprint_babel::{Format, FormatRegistry, HtmlFormat};
use blueprint_core::LayoutNode;

fn landing() -> LayoutNode {
    LayoutNode::from_json(include_str!("../pagebuilder/fixtures/landing.layout.json"))
        .expect("landing fixture parses")
}

#[test]
fn renders_a_complete_document() {
    let html = HtmlFormat.serialize(&landing()).unwrap();

    assert!(html.starts_with("<!DOCTYPE html>"));
    assert!(html.contains("<meta charset=\"UTF-8\">"));
    assert!(html.trim_end().ends_with("</html>"));
    assert_eq!(html.matches("<div class=\"container\">").count(), 1);
}

/// The markup inside the page container, one tag per line.
fn body_lines(html: &str) -> String {
    let start = html.find("<div class=\"container\">\n").expect("container opens")
        + "<div class=\"container\">\n".len();
    let end = html.rfind("\n</div>\n</body>").expect("container closes");
    html[start..end].replace("><", ">\n<")
}

#[test]
fn landing_page_markup() {
    let html = HtmlFormat.serialize(&landing()).unwrap();
    insta::assert_snapshot!(body_lines(&html), @r##"
    <div class="section">
    <div class="row" style="display:flex;flex-direction:row;gap:24px">
    <div class="col" style="flex-grow:1;flex-basis:0px">
    <h2>Acme</h2>
    </div>
    <div class="col" style="flex-grow:1;flex-basis:0px">
    <nav style="display:flex;flex-direction:row">
    <a href="/shop">Shop</a>
    <a href="/about">About</a>
    </nav>
    </div>
    </div>
    <input type="text" placeholder="Search products">
    <div class="section" style="display:flex;flex-direction:column;background-color:rgba(245,247,250,1);border-radius:16px;padding:24px 24px 24px 24px">
    <img src="https://placehold.co/328x220?text=Product%20photo" alt="Product photo">
    <h2>Trail shoe</h2>
    <a class="button" href="#">Buy now</a>
    </div>
    <div class="section">
    <p style="text-align:center">Free shipping on orders over $50 &amp; more</p>
    </div>
    </div>
    "##);
}

#[test]
fn pruned_nodes_leave_no_markup() {
    let html = HtmlFormat.serialize(&landing()).unwrap();
    assert!(!html.contains("alt=\"missing\""));
    assert!(!html.contains("<a href=\"#\"></a>"));
}

#[test]
fn registry_serializes_through_the_same_backend() {
    let registry = FormatRegistry::default();
    let layout = landing();
    assert_eq!(
        registry.serialize(&layout, "html").unwrap(),
        HtmlFormat.serialize(&layout).unwrap()
    );
}
