//! Template rendering - pure projection of a template against a data context.
//!
//! Rendering is a pure function of (template, primary record, auxiliary
//! snapshot): no I/O, no randomness, no side effects. Resolution misses
//! never error; a node that cannot resolve simply contributes nothing,
//! so partial source records always render.

use serde_json::{Map, Value};

use crate::schema::{DataSource, NodeKind, TemplateDefinition, TemplateNode};
use crate::value::{truncate_list, walk_path};

/// Normalized node returned by the renderer.
///
/// Ephemeral: produced fresh per render call and never mutated. Absent
/// nodes are omitted from the output entirely, not emitted as null
/// placeholders.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct RenderedNode {
    pub id: String,
    /// Copy of the template node's label.
    pub name: String,
    #[serde(rename = "type")]
    pub kind: NodeKind,
    pub value: Value,
}

impl RenderedNode {
    fn new(node: &TemplateNode, value: Value) -> Self {
        Self {
            id: node.id.clone(),
            name: node.label.clone(),
            kind: node.kind,
            value,
        }
    }
}

impl TemplateNode {
    /// Render this node against a data context.
    ///
    /// `snapshot` is the auxiliary context substituted wholesale for
    /// nodes with [`DataSource::Auxiliary`]; `context` is the current
    /// primary context (the full record at the root, a list element
    /// inside repeated blocks).
    ///
    /// Returns `None` when the node is invisible, its path does not
    /// resolve, the resolved value is null, or all of its children
    /// come up empty.
    pub fn render(&self, snapshot: &Value, context: &Value) -> Option<RenderedNode> {
        if !self.visible {
            return None;
        }

        let resolved = match self.source {
            DataSource::Auxiliary => snapshot,
            DataSource::Primary => walk_path(context, &self.path)?,
        };
        if resolved.is_null() {
            return None;
        }

        if self.children.is_empty() {
            // Leaf: the resolved value itself, capped if it is a list.
            return Some(RenderedNode::new(
                self,
                truncate_list(resolved.clone(), self.limit),
            ));
        }

        let value = match resolved {
            Value::Array(entries) => {
                let mut rows: Vec<Value> = Vec::new();
                for entry in entries {
                    if !entry.is_object() {
                        continue;
                    }
                    let mut row = Map::new();
                    for child in &self.children {
                        if let Some(rendered) = child.render(snapshot, entry) {
                            row.insert(rendered.name, rendered.value);
                        }
                    }
                    if !row.is_empty() {
                        rows.push(Value::Object(row));
                    }
                }
                // The cap applies to the qualifying rows, not the raw
                // input list: filtering first, then truncation.
                if let Some(cap) = self.limit {
                    rows.truncate(cap);
                }
                if rows.is_empty() {
                    return None;
                }
                Value::Array(rows)
            }
            other => {
                let mut map = Map::new();
                for child in &self.children {
                    if let Some(rendered) = child.render(snapshot, other) {
                        map.insert(rendered.name, rendered.value);
                    }
                }
                if map.is_empty() {
                    return None;
                }
                Value::Object(map)
            }
        };

        Some(RenderedNode::new(self, value))
    }
}

impl TemplateDefinition {
    /// Render every root block against the primary record.
    ///
    /// Blocks render in declared order; absent blocks are dropped, not
    /// nulled. The result is deterministic for a given (template, data,
    /// snapshot) triple.
    pub fn render(&self, data: &Value, snapshot: Option<&Value>) -> Vec<RenderedNode> {
        let snapshot = snapshot.unwrap_or(&Value::Null);
        self.blocks
            .iter()
            .filter_map(|block| block.render(snapshot, data))
            .collect()
    }
}
