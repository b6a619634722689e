//! Core IR node definitions.

use super::lenient;
use super::style::Style;
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

/// A node of the layout tree.
///
/// Serialized with an internal `"type"` tag, e.g.
/// `{"type": "heading", "text": "Hello", "level": 1}`. Objects whose tag is
/// missing or not one of the known kinds are kept verbatim as [`LayoutNode::Unknown`].
#[derive(Debug, Clone, PartialEq)]
pub enum LayoutNode {
    Section(Block),
    Container(Block),
    Columns(Columns),
    Heading(Heading),
    Text(Text),
    Image(Image),
    Button(Button),
    Input(Input),
    Nav(Nav),
    Unknown(UnknownNode),
}

const KNOWN_KINDS: &[&str] = &[
    "section",
    "container",
    "columns",
    "heading",
    "text",
    "image",
    "button",
    "input",
    "nav",
];

/// Borrowed mirror of the known variants, for the tagged JSON form.
#[derive(Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
enum TaggedRef<'a> {
    Section(&'a Block),
    Container(&'a Block),
    Columns(&'a Columns),
    Heading(&'a Heading),
    Text(&'a Text),
    Image(&'a Image),
    Button(&'a Button),
    Input(&'a Input),
    Nav(&'a Nav),
}

#[derive(Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
enum Tagged {
    Section(Block),
    Container(Block),
    Columns(Columns),
    Heading(Heading),
    Text(Text),
    Image(Image),
    Button(Button),
    Input(Input),
    Nav(Nav),
}

impl From<Tagged> for LayoutNode {
    fn from(tagged: Tagged) -> Self {
        match tagged {
            Tagged::Section(b) => LayoutNode::Section(b),
            Tagged::Container(b) => LayoutNode::Container(b),
            Tagged::Columns(c) => LayoutNode::Columns(c),
            Tagged::Heading(h) => LayoutNode::Heading(h),
            Tagged::Text(t) => LayoutNode::Text(t),
            Tagged::Image(i) => LayoutNode::Image(i),
            Tagged::Button(b) => LayoutNode::Button(b),
            Tagged::Input(i) => LayoutNode::Input(i),
            Tagged::Nav(n) => LayoutNode::Nav(n),
        }
    }
}

impl Serialize for LayoutNode {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let tagged = match self {
            LayoutNode::Section(b) => TaggedRef::Section(b),
            LayoutNode::Container(b) => TaggedRef::Container(b),
            LayoutNode::Columns(c) => TaggedRef::Columns(c),
            LayoutNode::Heading(h) => TaggedRef::Heading(h),
            LayoutNode::Text(t) => TaggedRef::Text(t),
            LayoutNode::Image(i) => TaggedRef::Image(i),
            LayoutNode::Button(b) => TaggedRef::Button(b),
            LayoutNode::Input(i) => TaggedRef::Input(i),
            LayoutNode::Nav(n) => TaggedRef::Nav(n),
            LayoutNode::Unknown(unknown) => return unknown.to_value().serialize(serializer),
        };
        tagged.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for LayoutNode {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        if !value.is_object() {
            return Err(de::Error::custom("expected a layout node object"));
        }

        let known = value
            .get("type")
            .and_then(Value::as_str)
            .is_some_and(|kind| KNOWN_KINDS.contains(&kind));
        if known {
            Tagged::deserialize(value)
                .map(LayoutNode::from)
                .map_err(de::Error::custom)
        } else {
            Ok(LayoutNode::Unknown(UnknownNode::from_value(value)))
        }
    }
}

/// A node of a kind this crate does not model, e.g. `{"type": "spacer"}`.
///
/// The original object is kept in `raw`; its `style`, when it parses, is lifted
/// out so style counting sees it like any other node.
#[derive(Debug, Clone, PartialEq)]
pub struct UnknownNode {
    pub kind: String,
    pub raw: Value,
    pub style: Option<Style>,
}

impl UnknownNode {
    fn from_value(raw: Value) -> Self {
        let kind = raw
            .get("type")
            .and_then(Value::as_str)
            .unwrap_or("unknown")
            .to_string();
        let style = raw
            .get("style")
            .and_then(|style| Style::deserialize(style).ok());
        UnknownNode { kind, raw, style }
    }

    /// The JSON form: `raw`, with `style` replaced by the current style.
    pub fn to_value(&self) -> Value {
        let mut value = self.raw.clone();
        if let Value::Object(map) = &mut value {
            match self.style.as_ref().and_then(|s| serde_json::to_value(s).ok()) {
                Some(style) => {
                    map.insert("style".to_string(), style);
                }
                None => {
                    map.remove("style");
                }
            }
        }
        value
    }
}

/// Payload of `section` and `container` nodes: an ordered list of children.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Block {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub style: Option<Style>,
    #[serde(default)]
    pub children: Vec<LayoutNode>,
}

/// Payload of `columns` nodes.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Columns {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub style: Option<Style>,
    #[serde(default)]
    pub columns: Vec<Column>,
}

/// Marker serialized as `"type": "container"` on column entries.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ColumnTag {
    #[default]
    #[serde(rename = "container")]
    Container,
}

/// One column of a `columns` node. Its style carries the sizing hints
/// (`widthPercent`, `widthPx`, `flexGrow`, ...) used for column-size inference.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Column {
    #[serde(rename = "type", default)]
    pub tag: ColumnTag,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub style: Option<Style>,
    #[serde(default)]
    pub children: Vec<LayoutNode>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Heading {
    #[serde(default)]
    pub text: String,
    #[serde(default = "default_heading_level", deserialize_with = "lenient::level")]
    pub level: u8,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub style: Option<Style>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Text {
    #[serde(default)]
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub style: Option<Style>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Image {
    #[serde(default)]
    pub src: String,
    #[serde(default)]
    pub alt: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub style: Option<Style>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Button {
    #[serde(default = "default_button_label")]
    pub label: String,
    #[serde(default = "default_href")]
    pub href: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub style: Option<Style>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Input {
    #[serde(default)]
    pub placeholder: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub style: Option<Style>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Nav {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub style: Option<Style>,
    #[serde(default)]
    pub items: Vec<NavItem>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NavItem {
    #[serde(default)]
    pub label: String,
    #[serde(default = "default_href")]
    pub href: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub style: Option<Style>,
}

fn default_heading_level() -> u8 {
    2
}

fn default_button_label() -> String {
    "Button".to_string()
}

fn default_href() -> String {
    "#".to_string()
}

impl LayoutNode {
    /// Parse an IR document from its JSON form.
    pub fn from_json(source: &str) -> serde_json::Result<LayoutNode> {
        serde_json::from_str(source)
    }

    pub fn section(children: Vec<LayoutNode>) -> Self {
        LayoutNode::Section(Block {
            style: None,
            children,
        })
    }

    pub fn container(style: Option<Style>, children: Vec<LayoutNode>) -> Self {
        LayoutNode::Container(Block { style, children })
    }

    pub fn heading(text: impl Into<String>, level: u8) -> Self {
        LayoutNode::Heading(Heading {
            text: text.into(),
            level,
            style: None,
        })
    }

    pub fn text(text: impl Into<String>) -> Self {
        LayoutNode::Text(Text {
            text: text.into(),
            style: None,
        })
    }

    /// The `"type"` tag of this node.
    pub fn kind(&self) -> &str {
        match self {
            LayoutNode::Section(_) => "section",
            LayoutNode::Container(_) => "container",
            LayoutNode::Columns(_) => "columns",
            LayoutNode::Heading(_) => "heading",
            LayoutNode::Text(_) => "text",
            LayoutNode::Image(_) => "image",
            LayoutNode::Button(_) => "button",
            LayoutNode::Input(_) => "input",
            LayoutNode::Nav(_) => "nav",
            LayoutNode::Unknown(u) => u.kind.as_str(),
        }
    }

    pub fn style(&self) -> Option<&Style> {
        match self {
            LayoutNode::Section(b) | LayoutNode::Container(b) => b.style.as_ref(),
            LayoutNode::Columns(c) => c.style.as_ref(),
            LayoutNode::Heading(h) => h.style.as_ref(),
            LayoutNode::Text(t) => t.style.as_ref(),
            LayoutNode::Image(i) => i.style.as_ref(),
            LayoutNode::Button(b) => b.style.as_ref(),
            LayoutNode::Input(i) => i.style.as_ref(),
            LayoutNode::Nav(n) => n.style.as_ref(),
            LayoutNode::Unknown(u) => u.style.as_ref(),
        }
    }

    pub fn style_mut(&mut self) -> &mut Option<Style> {
        match self {
            LayoutNode::Section(b) | LayoutNode::Container(b) => &mut b.style,
            LayoutNode::Columns(c) => &mut c.style,
            LayoutNode::Heading(h) => &mut h.style,
            LayoutNode::Text(t) => &mut t.style,
            LayoutNode::Image(i) => &mut i.style,
            LayoutNode::Button(b) => &mut b.style,
            LayoutNode::Input(i) => &mut i.style,
            LayoutNode::Nav(n) => &mut n.style,
            LayoutNode::Unknown(u) => &mut u.style,
        }
    }

    /// Whether this node renders anything at all.
    ///
    /// Wrappers need at least one content-bearing descendant, text needs
    /// non-blank characters, images need a source and navs a labelled item.
    /// Unknown nodes never count as content.
    pub fn has_content(&self) -> bool {
        match self {
            LayoutNode::Section(b) | LayoutNode::Container(b) => {
                b.children.iter().any(LayoutNode::has_content)
            }
            LayoutNode::Columns(c) => c.columns.iter().any(Column::has_content),
            LayoutNode::Heading(h) => !h.text.trim().is_empty(),
            LayoutNode::Text(t) => !t.text.trim().is_empty(),
            LayoutNode::Image(i) => !i.src.is_empty(),
            LayoutNode::Button(_) | LayoutNode::Input(_) => true,
            LayoutNode::Nav(n) => n.items.iter().any(|item| !item.label.is_empty()),
            LayoutNode::Unknown(_) => false,
        }
    }
}

impl Column {
    pub fn new(style: Option<Style>, children: Vec<LayoutNode>) -> Self {
        Column {
            tag: ColumnTag::Container,
            style,
            children,
        }
    }

    pub fn has_content(&self) -> bool {
        self.children.iter().any(LayoutNode::has_content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn parses_authored_layout() {
        let source = json!({
            "type": "section",
            "children": [
                {"type": "heading", "text": "Hello", "level": 1},
                {
                    "type": "columns",
                    "columns": [
                        {"type": "container", "style": {"widthPercent": 25}, "children": [
                            {"type": "text", "text": "Left"}
                        ]},
                        {"children": [{"type": "button", "label": "Go"}]}
                    ]
                }
            ]
        })
        .to_string();

        let node = LayoutNode::from_json(&source).unwrap();
        let LayoutNode::Section(block) = &node else {
            panic!("expected section, got {}", node.kind());
        };
        assert_eq!(block.children.len(), 2);

        let LayoutNode::Columns(columns) = &block.children[1] else {
            panic!("expected columns");
        };
        assert_eq!(columns.columns.len(), 2);
        assert_eq!(
            columns.columns[0].style.as_ref().unwrap().width_percent,
            Some(25.0)
        );
        match &columns.columns[1].children[0] {
            LayoutNode::Button(button) => {
                assert_eq!(button.label, "Go");
                assert_eq!(button.href, "#");
            }
            other => panic!("expected button, got {}", other.kind()),
        }
    }

    #[test]
    fn heading_level_defaults_to_two() {
        let node = LayoutNode::from_json(r#"{"type":"heading","text":"x"}"#).unwrap();
        assert_eq!(node, LayoutNode::heading("x", 2));
    }

    #[test]
    fn heading_level_accepts_whole_floats() {
        let node = LayoutNode::from_json(r#"{"type":"heading","text":"x","level":3.0}"#).unwrap();
        assert_eq!(node, LayoutNode::heading("x", 3));
    }

    #[test]
    fn unrecognized_kinds_are_kept_verbatim() {
        let source = json!({
            "type": "section",
            "children": [
                {"type": "spacer", "height": 24, "style": {"backgroundColor": "#fff"}},
                {"label": "untagged"},
                {"type": "text", "text": "After"}
            ]
        });

        let node = LayoutNode::from_json(&source.to_string()).unwrap();
        let LayoutNode::Section(block) = &node else {
            panic!("expected section, got {}", node.kind());
        };
        let LayoutNode::Unknown(spacer) = &block.children[0] else {
            panic!("expected unknown node, got {}", block.children[0].kind());
        };
        assert_eq!(spacer.kind, "spacer");
        assert_eq!(spacer.raw["height"], 24);
        assert_eq!(
            spacer.style.as_ref().unwrap().background_color.as_deref(),
            Some("#fff")
        );
        assert!(!block.children[0].has_content());
        assert_eq!(block.children[1].kind(), "unknown");
        assert_eq!(block.children[2], LayoutNode::text("After"));

        assert_eq!(serde_json::to_value(&node).unwrap(), source);
    }

    #[test]
    fn known_kinds_with_bad_fields_are_rejected() {
        assert!(LayoutNode::from_json(r#"{"type":"heading","level":"one"}"#).is_err());
        assert!(LayoutNode::from_json(r#""text""#).is_err());
    }

    #[test]
    fn column_entries_serialize_as_containers() {
        let node = LayoutNode::Columns(Columns {
            style: None,
            columns: vec![Column::new(None, vec![LayoutNode::text("A")])],
        });
        let value = serde_json::to_value(&node).unwrap();
        assert_eq!(value["type"], "columns");
        assert_eq!(value["columns"][0]["type"], "container");
        assert_eq!(value["columns"][0]["children"][0]["text"], "A");
    }

    #[test]
    fn has_content_requires_renderable_descendants() {
        assert!(!LayoutNode::section(vec![]).has_content());
        assert!(!LayoutNode::container(None, vec![LayoutNode::text("  ")]).has_content());
        assert!(LayoutNode::section(vec![LayoutNode::container(
            None,
            vec![LayoutNode::heading("Title", 1)]
        )])
        .has_content());

        let image = LayoutNode::Image(Image {
            src: String::new(),
            alt: "x".to_string(),
            style: None,
        });
        assert!(!image.has_content());

        let nav = LayoutNode::Nav(Nav {
            style: None,
            items: vec![NavItem {
                label: String::new(),
                href: "#".to_string(),
                style: None,
            }],
        });
        assert!(!nav.has_content());
    }
}
