//! Declarative style table mapping graph semantics onto DOT attributes.
//!
//! Style documents are JSON with kebab-case keys:
//!
//! ```json
//! {
//!   "default-node": { "type": "box", "default-font": { "name": "Helvetica", "size": 14 } },
//!   "default-edge": { "font": { "size": 10 } },
//!   "scoped-nodes": { "test": { "type": "ellipse", "color": "grey" } },
//!   "edge-types": { "omitted-for-conflict": { "style": "dashed", "color": "red" } }
//! }
//! ```
//!
//! Unknown top-level keys are ignored and missing ones keep their built-in
//! defaults. A shape object without a `type`, or with an unknown one, is a
//! configuration error.

pub mod attributes;
pub mod shape;

use std::collections::BTreeMap;

use anyhow::{Context as _, Result};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::domain::edge::NodeResolution;
use crate::domain::node::ArtifactNode;

pub use attributes::AttributeBuilder;
pub use shape::{BoxNode, EdgeStyle, EllipseNode, Font, NodeAppearance, NodeShape, PolygonNode};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct StyleConfiguration {
    pub default_node: NodeShape,
    pub default_edge: EdgeStyle,
    pub scoped_nodes: BTreeMap<String, NodeShape>,
    pub edge_types: BTreeMap<NodeResolution, EdgeStyle>,
}

impl Default for StyleConfiguration {
    /// Built-in style: Helvetica boxes, dashed omitted edges, red conflicts.
    fn default() -> Self {
        let default_node = NodeShape::Box(BoxNode {
            appearance: NodeAppearance {
                default_font: Some(Font::new(Some("Helvetica"), Some(14), None)),
                group_id_font: Some(Font::sized(10)),
                version_font: Some(Font::sized(10)),
                scope_font: Some(Font::sized(10)),
                ..Default::default()
            },
        });

        let default_edge = EdgeStyle {
            font: Some(Font::new(Some("Helvetica"), Some(10), None)),
            ..Default::default()
        };

        let duplicate_edge = EdgeStyle {
            style: Some("dashed".into()),
            ..Default::default()
        };
        let conflict_edge = EdgeStyle {
            style: Some("dashed".into()),
            color: Some("red".into()),
            font: Some(Font::new(None, None, Some("red"))),
        };

        Self {
            default_node,
            default_edge,
            scoped_nodes: BTreeMap::new(),
            edge_types: BTreeMap::from([
                (NodeResolution::OmittedForDuplicate, duplicate_edge),
                (NodeResolution::OmittedForConflict, conflict_edge),
            ]),
        }
    }
}

impl StyleConfiguration {
    /// Parses a single style document; keys it does not set keep their defaults.
    pub fn from_json(document: &str) -> Result<Self> {
        serde_json::from_str(document).context("Invalid style configuration")
    }

    /// Applies style documents in order on top of the built-in defaults.
    ///
    /// JSON objects are merged key by key, so a later document only replaces
    /// what it mentions. Validation happens once on the merged result.
    pub fn from_layers<S: AsRef<str>>(documents: &[S]) -> Result<Self> {
        let mut merged =
            serde_json::to_value(Self::default()).context("Failed to serialize default style")?;
        for (i, document) in documents.iter().enumerate() {
            let layer: Value = serde_json::from_str(document.as_ref())
                .with_context(|| format!("Style document #{} is not valid JSON", i + 1))?;
            merge_values(&mut merged, layer);
        }
        serde_json::from_value(merged).context("Invalid style configuration")
    }

    /// Pretty-printed document, suitable as an editable template.
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).context("Failed to serialize style configuration")
    }

    pub fn configure_default_node(&self) -> AttributeBuilder {
        self.default_node.attributes()
    }

    pub fn configure_default_edge(&self) -> AttributeBuilder {
        self.default_edge.attributes()
    }

    /// Override attributes for an edge kind; empty when the kind has no entry,
    /// which leaves the graph-wide default edge attributes in effect.
    pub fn configure_edge(&self, resolution: NodeResolution) -> AttributeBuilder {
        self.edge_types
            .get(&resolution)
            .map(EdgeStyle::attributes)
            .unwrap_or_default()
    }

    /// Shape used for a node with the given effective scope.
    pub fn node_shape(&self, effective_scope: Option<&str>) -> &NodeShape {
        effective_scope
            .and_then(|scope| self.scoped_nodes.get(scope))
            .unwrap_or(&self.default_node)
    }

    pub fn render_node(
        &self,
        group_id: &str,
        artifact_id: &str,
        version: &str,
        scopes: &str,
        effective_scope: Option<&str>,
    ) -> String {
        self.node_shape(effective_scope)
            .render_label(group_id, artifact_id, version, scopes)
    }

    /// Attributes of one node statement.
    ///
    /// Nodes drawn with the default shape only carry their label; the rest
    /// comes from the graph-wide node attributes.
    pub fn configure_node(&self, node: &ArtifactNode) -> AttributeBuilder {
        let label = self.render_node(
            node.group_id(),
            node.artifact_id(),
            node.version(),
            &node.scope_label(),
            node.effective_scope(),
        );
        let scoped = node
            .effective_scope()
            .and_then(|scope| self.scoped_nodes.get(scope));
        match scoped {
            Some(shape) => shape.attributes().html_label(label),
            None => AttributeBuilder::new().html_label(label),
        }
    }
}

/// Deep merge: objects merge per key, anything else is replaced by `layer`.
fn merge_values(base: &mut Value, layer: Value) {
    match (base, layer) {
        (Value::Object(base), Value::Object(layer)) => {
            for (key, value) in layer {
                match base.get_mut(&key) {
                    Some(existing) => merge_values(existing, value),
                    None => {
                        base.insert(key, value);
                    }
                }
            }
        }
        (base, layer) => *base = layer,
    }
}
