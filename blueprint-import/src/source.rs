//! Typed view of a visual-tool node tree.
//!
//! Remote payloads are loosely shaped: fields go missing, numbers arrive as
//! strings, lists hold stray scalars. [`SourceNode::from_value`] reads whatever is
//! usable and defaults the rest to zero or empty, so classification never fails
//! on malformed geometry or style data.

use serde_json::{Map, Value};

/// Node type tag, upper-cased on read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NodeType {
    Frame,
    Component,
    Instance,
    Group,
    Text,
    Rectangle,
    Vector,
    Ellipse,
    Polygon,
    Star,
    Line,
    BooleanOperation,
    Other(String),
}

impl NodeType {
    pub fn parse(tag: &str) -> NodeType {
        match tag.trim().to_ascii_uppercase().as_str() {
            "FRAME" => NodeType::Frame,
            "COMPONENT" => NodeType::Component,
            "INSTANCE" => NodeType::Instance,
            "GROUP" => NodeType::Group,
            "TEXT" => NodeType::Text,
            "RECTANGLE" => NodeType::Rectangle,
            "VECTOR" => NodeType::Vector,
            "ELLIPSE" => NodeType::Ellipse,
            "POLYGON" => NodeType::Polygon,
            "STAR" => NodeType::Star,
            "LINE" => NodeType::Line,
            "BOOLEAN_OPERATION" => NodeType::BooleanOperation,
            other => NodeType::Other(other.to_string()),
        }
    }

    /// Frames and their relatives: the node kinds that can act as cards,
    /// buttons or inputs.
    pub fn is_frame_like(&self) -> bool {
        matches!(
            self,
            NodeType::Frame | NodeType::Component | NodeType::Instance | NodeType::Group
        )
    }

    /// Shapes that read as icons next to a label.
    pub fn is_icon_like(&self) -> bool {
        matches!(
            self,
            NodeType::Vector
                | NodeType::BooleanOperation
                | NodeType::Star
                | NodeType::Ellipse
                | NodeType::Line
                | NodeType::Polygon
        )
    }

    /// Shapes that may carry an image paint.
    pub fn is_shape(&self) -> bool {
        matches!(self, NodeType::Rectangle) || self.is_icon_like()
    }
}

/// Auto-layout axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LayoutMode {
    #[default]
    None,
    Horizontal,
    Vertical,
}

/// Per-child sizing mode along one axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sizing {
    Fixed,
    Fill,
    Hug,
}

impl Sizing {
    fn parse(tag: &str) -> Option<Sizing> {
        match tag.trim().to_ascii_uppercase().as_str() {
            "FIXED" => Some(Sizing::Fixed),
            "FILL" => Some(Sizing::Fill),
            "HUG" => Some(Sizing::Hug),
            _ => None,
        }
    }
}

/// Absolute bounding box. Missing coordinates read as zero.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct BoundingBox {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl BoundingBox {
    pub fn center_x(&self) -> f64 {
        self.x + self.width / 2.0
    }

    pub fn center_y(&self) -> f64 {
        self.y + self.height / 2.0
    }
}

/// RGBA color with channels in `0..=1`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgba {
    pub r: f64,
    pub g: f64,
    pub b: f64,
    pub a: f64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PaintKind {
    Solid,
    Image,
    Other(String),
}

/// A fill or stroke entry.
#[derive(Debug, Clone, PartialEq)]
pub struct Paint {
    pub kind: PaintKind,
    pub visible: bool,
    pub opacity: Option<f64>,
    pub color: Option<Rgba>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Effect {
    pub is_drop_shadow: bool,
    pub visible: bool,
    pub color: Option<Rgba>,
    pub offset_x: f64,
    pub offset_y: f64,
    pub radius: f64,
    pub spread: f64,
}

/// Typography record of a text node.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TypeStyle {
    pub font_family: Option<String>,
    pub font_size: Option<f64>,
    pub font_weight: Option<f64>,
    pub letter_spacing: Option<f64>,
    pub line_height_px: Option<f64>,
    pub text_align_horizontal: Option<String>,
    pub text_case: Option<String>,
}

/// Per-edge padding as given by the source; absent edges stay `None`.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct EdgePadding {
    pub top: Option<f64>,
    pub right: Option<f64>,
    pub bottom: Option<f64>,
    pub left: Option<f64>,
}

impl EdgePadding {
    pub fn edges(&self) -> [Option<f64>; 4] {
        [self.top, self.right, self.bottom, self.left]
    }

    /// True if any edge is present and non-zero.
    pub fn is_nonzero(&self) -> bool {
        self.edges().iter().any(|e| matches!(e, Some(v) if *v != 0.0))
    }
}

/// One node of the visual-tool tree.
#[derive(Debug, Clone, PartialEq)]
pub struct SourceNode {
    pub id: String,
    pub name: String,
    pub node_type: NodeType,
    pub characters: Option<String>,
    pub bounds: Option<BoundingBox>,

    pub layout_mode: LayoutMode,
    pub item_spacing: Option<f64>,
    pub padding: EdgePadding,
    pub primary_axis_align: Option<String>,
    pub counter_axis_align: Option<String>,
    pub layout_align: Option<String>,
    pub layout_grow: Option<f64>,
    pub sizing_horizontal: Option<Sizing>,
    pub sizing_vertical: Option<Sizing>,

    pub fills: Vec<Paint>,
    pub strokes: Vec<Paint>,
    pub stroke_weight: Option<f64>,
    pub corner_radius: Option<f64>,
    pub corner_radii: Option<[f64; 4]>,
    pub effects: Vec<Effect>,

    pub type_style: Option<TypeStyle>,
    pub override_font_sizes: Vec<f64>,

    pub children: Vec<SourceNode>,
}

impl SourceNode {
    /// Read a node (and its subtree) from JSON. Non-object values produce an
    /// empty node of type `Other("")`.
    pub fn from_value(value: &Value) -> SourceNode {
        let empty = Map::new();
        let obj = value.as_object().unwrap_or(&empty);

        let children = obj
            .get("children")
            .and_then(Value::as_array)
            .map(|items| {
                items
                    .iter()
                    .filter(|v| v.is_object())
                    .map(SourceNode::from_value)
                    .collect()
            })
            .unwrap_or_default();

        SourceNode {
            id: string(obj, "id").unwrap_or_default(),
            name: string(obj, "name").unwrap_or_default(),
            node_type: NodeType::parse(&string(obj, "type").unwrap_or_default()),
            characters: string(obj, "characters"),
            bounds: obj
                .get("absoluteBoundingBox")
                .and_then(Value::as_object)
                .map(|b| BoundingBox {
                    x: number(b, "x").unwrap_or(0.0),
                    y: number(b, "y").unwrap_or(0.0),
                    width: number(b, "width").unwrap_or(0.0),
                    height: number(b, "height").unwrap_or(0.0),
                }),
            layout_mode: match string(obj, "layoutMode")
                .unwrap_or_default()
                .to_ascii_uppercase()
                .as_str()
            {
                "HORIZONTAL" => LayoutMode::Horizontal,
                "VERTICAL" => LayoutMode::Vertical,
                _ => LayoutMode::None,
            },
            item_spacing: number(obj, "itemSpacing"),
            padding: EdgePadding {
                top: number(obj, "paddingTop"),
                right: number(obj, "paddingRight"),
                bottom: number(obj, "paddingBottom"),
                left: number(obj, "paddingLeft"),
            },
            primary_axis_align: upper(obj, "primaryAxisAlignItems"),
            counter_axis_align: upper(obj, "counterAxisAlignItems"),
            layout_align: upper(obj, "layoutAlign"),
            layout_grow: number(obj, "layoutGrow"),
            sizing_horizontal: string(obj, "layoutSizingHorizontal")
                .as_deref()
                .and_then(Sizing::parse),
            sizing_vertical: string(obj, "layoutSizingVertical")
                .as_deref()
                .and_then(Sizing::parse),
            fills: paints(obj.get("fills")),
            strokes: paints(obj.get("strokes")),
            stroke_weight: number(obj, "strokeWeight"),
            corner_radius: number(obj, "cornerRadius"),
            corner_radii: obj
                .get("rectangleCornerRadii")
                .and_then(Value::as_array)
                .filter(|radii| radii.len() == 4)
                .map(|radii| {
                    let mut out = [0.0; 4];
                    for (slot, v) in out.iter_mut().zip(radii) {
                        *slot = as_number(v).unwrap_or(0.0);
                    }
                    out
                }),
            effects: effects(obj.get("effects")),
            type_style: obj.get("style").and_then(Value::as_object).map(type_style),
            override_font_sizes: obj
                .get("styleOverrideTable")
                .and_then(Value::as_object)
                .map(|table| {
                    table
                        .values()
                        .filter_map(Value::as_object)
                        .filter_map(|o| number(o, "fontSize"))
                        .collect()
                })
                .unwrap_or_default(),
            children,
        }
    }

    /// Absolute box, zero-sized when absent.
    pub fn bbox(&self) -> BoundingBox {
        self.bounds.unwrap_or_default()
    }

    pub fn is_text(&self) -> bool {
        self.node_type == NodeType::Text
    }

    /// Trimmed text content; empty for non-text nodes.
    pub fn text(&self) -> &str {
        self.characters.as_deref().map(str::trim).unwrap_or("")
    }
}

fn string(obj: &Map<String, Value>, key: &str) -> Option<String> {
    obj.get(key).and_then(Value::as_str).map(str::to_string)
}

fn upper(obj: &Map<String, Value>, key: &str) -> Option<String> {
    string(obj, key)
        .map(|s| s.trim().to_ascii_uppercase())
        .filter(|s| !s.is_empty())
}

fn number(obj: &Map<String, Value>, key: &str) -> Option<f64> {
    obj.get(key).and_then(as_number)
}

/// Numbers and numeric strings; anything else is absent.
fn as_number(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    }
    .filter(|n| n.is_finite())
}

fn color(value: Option<&Value>) -> Option<Rgba> {
    let obj = value?.as_object()?;
    Some(Rgba {
        r: number(obj, "r").unwrap_or(0.0),
        g: number(obj, "g").unwrap_or(0.0),
        b: number(obj, "b").unwrap_or(0.0),
        a: number(obj, "a").unwrap_or(1.0),
    })
}

fn visible(obj: &Map<String, Value>) -> bool {
    obj.get("visible").and_then(Value::as_bool).unwrap_or(true)
}

fn paints(value: Option<&Value>) -> Vec<Paint> {
    let Some(items) = value.and_then(Value::as_array) else {
        return Vec::new();
    };
    items
        .iter()
        .filter_map(Value::as_object)
        .map(|obj| Paint {
            kind: match string(obj, "type").unwrap_or_default().to_ascii_uppercase().as_str() {
                "SOLID" => PaintKind::Solid,
                "IMAGE" => PaintKind::Image,
                other => PaintKind::Other(other.to_string()),
            },
            visible: visible(obj),
            opacity: number(obj, "opacity"),
            color: color(obj.get("color")),
        })
        .collect()
}

fn effects(value: Option<&Value>) -> Vec<Effect> {
    let Some(items) = value.and_then(Value::as_array) else {
        return Vec::new();
    };
    items
        .iter()
        .filter_map(Value::as_object)
        .map(|obj| {
            let offset = obj.get("offset").and_then(Value::as_object);
            Effect {
                is_drop_shadow: upper(obj, "type").as_deref() == Some("DROP_SHADOW"),
                visible: visible(obj),
                color: color(obj.get("color")),
                offset_x: offset.and_then(|o| number(o, "x")).unwrap_or(0.0),
                offset_y: offset.and_then(|o| number(o, "y")).unwrap_or(0.0),
                radius: number(obj, "radius").unwrap_or(0.0),
                spread: number(obj, "spread").unwrap_or(0.0),
            }
        })
        .collect()
}

fn type_style(obj: &Map<String, Value>) -> TypeStyle {
    TypeStyle {
        font_family: string(obj, "fontFamily").filter(|s| !s.is_empty()),
        font_size: number(obj, "fontSize"),
        font_weight: number(obj, "fontWeight"),
        letter_spacing: number(obj, "letterSpacing"),
        line_height_px: number(obj, "lineHeightPx"),
        text_align_horizontal: string(obj, "textAlignHorizontal").filter(|s| !s.is_empty()),
        text_case: string(obj, "textCase").filter(|s| !s.is_empty()),
    }
}
