//! Node and edge style entries of a [`StyleConfiguration`].
//!
//! Node shapes form a closed set selected by the `type` field of the style
//! document. Every shape shares the same [`NodeAppearance`]; variants only add
//! what is specific to them (`sides` for polygons).
//!
//! [`StyleConfiguration`]: super::StyleConfiguration

use serde::{Deserialize, Serialize};

use super::attributes::{AttributeBuilder, escape_html};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Font {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

impl Font {
    pub fn new(name: Option<&str>, size: Option<u32>, color: Option<&str>) -> Self {
        Self {
            name: name.map(str::to_string),
            size,
            color: color.map(str::to_string),
        }
    }

    pub fn sized(size: u32) -> Self {
        Self::new(None, Some(size), None)
    }

    fn is_empty(&self) -> bool {
        self.name.is_none() && self.size.is_none() && self.color.is_none()
    }

    /// Wraps already escaped label text in a `<font>` element carrying the set attributes.
    fn wrap(&self, text: &str) -> String {
        if self.is_empty() {
            return text.to_string();
        }
        let mut element = String::from("<font");
        if let Some(name) = &self.name {
            element.push_str(&format!(" face=\"{}\"", escape_html(name)));
        }
        if let Some(size) = self.size {
            element.push_str(&format!(" point-size=\"{size}\""));
        }
        if let Some(color) = &self.color {
            element.push_str(&format!(" color=\"{}\"", escape_html(color)));
        }
        format!("{element}>{text}</font>")
    }
}

/// Attributes shared by all node shapes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct NodeAppearance {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fill_color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub style: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_font: Option<Font>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group_id_font: Option<Font>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub artifact_id_font: Option<Font>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version_font: Option<Font>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scope_font: Option<Font>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoxNode {
    #[serde(flatten)]
    pub appearance: NodeAppearance,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PolygonNode {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sides: Option<u32>,
    #[serde(flatten)]
    pub appearance: NodeAppearance,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EllipseNode {
    #[serde(flatten)]
    pub appearance: NodeAppearance,
}

/// Node shape variant, discriminated by `type` in style documents.
///
/// A missing or unknown `type` fails deserialization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum NodeShape {
    Box(BoxNode),
    Polygon(PolygonNode),
    Ellipse(EllipseNode),
}

impl NodeShape {
    /// DOT shape name.
    pub fn shape_name(&self) -> &'static str {
        match self {
            NodeShape::Box(_) => "box",
            NodeShape::Polygon(_) => "polygon",
            NodeShape::Ellipse(_) => "ellipse",
        }
    }

    pub fn appearance(&self) -> &NodeAppearance {
        match self {
            NodeShape::Box(b) => &b.appearance,
            NodeShape::Polygon(p) => &p.appearance,
            NodeShape::Ellipse(e) => &e.appearance,
        }
    }

    /// Shape-level attributes: shape, colors, style and the default font.
    pub fn attributes(&self) -> AttributeBuilder {
        let appearance = self.appearance();
        let font = appearance.default_font.clone().unwrap_or_default();
        let builder = AttributeBuilder::new()
            .shape(self.shape_name())
            .style(appearance.style.as_deref())
            .color(appearance.color.as_deref())
            .fill_color(appearance.fill_color.as_deref())
            .font_name(font.name.as_deref())
            .font_size(font.size)
            .font_color(font.color.as_deref());

        match self {
            NodeShape::Polygon(p) => builder.sides(p.sides),
            NodeShape::Box(_) | NodeShape::Ellipse(_) => builder,
        }
    }

    /// HTML-like label: one line per coordinate part, then `(scopes)` when there are any.
    pub fn render_label(
        &self,
        group_id: &str,
        artifact_id: &str,
        version: &str,
        scopes: &str,
    ) -> String {
        let appearance = self.appearance();
        let part = |font: &Option<Font>, text: &str| {
            let text = escape_html(text);
            match font {
                Some(font) => font.wrap(&text),
                None => text,
            }
        };

        let mut lines = vec![
            part(&appearance.group_id_font, group_id),
            part(&appearance.artifact_id_font, artifact_id),
            part(&appearance.version_font, version),
        ];
        if !scopes.is_empty() {
            lines.push(part(&appearance.scope_font, &format!("({scopes})")));
        }
        lines.join("<br/>")
    }
}

impl Default for NodeShape {
    fn default() -> Self {
        NodeShape::Box(BoxNode::default())
    }
}

/// Edge style entry: line style, color and label font.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct EdgeStyle {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub style: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font: Option<Font>,
}

impl EdgeStyle {
    pub fn attributes(&self) -> AttributeBuilder {
        let font = self.font.clone().unwrap_or_default();
        AttributeBuilder::new()
            .style(self.style.as_deref())
            .color(self.color.as_deref())
            .font_name(font.name.as_deref())
            .font_size(font.size)
            .font_color(font.color.as_deref())
    }
}
