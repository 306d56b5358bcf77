//! Template definitions - the declarative tree of configurable page slots.
//!
//! A [`TemplateDefinition`] is constructed once (from a JSON file or the
//! built-in default), is immutable afterwards, and may be shared freely
//! across concurrent render calls.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::defaults::default_template;
use crate::error::TemplateError;

/// The kind of output slot a node produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeKind {
    /// Container whose children render into a map.
    #[default]
    Group,
    /// Scalar leaf value.
    Field,
    /// Repeated value; `limit` caps its length.
    List,
    /// Verbatim auxiliary snapshot block.
    Snapshot,
}

/// Which top-level context a node reads from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum DataSource {
    /// The primary source record, navigated via the node's `path`.
    #[default]
    #[serde(rename = "data")]
    Primary,
    /// The auxiliary snapshot, substituted wholesale.
    ///
    /// The node's `path` is not consulted at all for auxiliary nodes.
    /// This matches the observed behavior of existing templates and is
    /// preserved as-is pending confirmation with the template authors.
    #[serde(rename = "snapshot")]
    Auxiliary,
}

/// One configurable block or field within a template definition.
///
/// Nodes own their children exclusively; a template is an acyclic tree
/// by construction. Ids are assumed unique within a template but this is
/// not validated - duplicate ids are a template-author error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TemplateNode {
    pub id: String,
    /// Display name, used as the output key when rendered under a group.
    pub label: String,
    /// Keys used to navigate the data context; empty means "use the
    /// context unchanged".
    #[serde(default)]
    pub path: Vec<String>,
    #[serde(rename = "type", default)]
    pub kind: NodeKind,
    /// When false, the node and its entire subtree are excluded from
    /// rendering and from the enabled-generation set.
    #[serde(default = "default_true")]
    pub visible: bool,
    /// Cap on list length; applied only when the resolved value is a list.
    #[serde(default)]
    pub limit: Option<usize>,
    #[serde(rename = "dataSource", default)]
    pub source: DataSource,
    /// Names the external content-generation slot this node corresponds to.
    #[serde(rename = "generationId", default)]
    pub generation_id: Option<String>,
    /// The node's own willingness to generate; combined with inherited
    /// visibility to compute final eligibility.
    #[serde(rename = "generationEnabled", default = "default_true")]
    pub generation_enabled: bool,
    #[serde(default)]
    pub children: Vec<TemplateNode>,
}

fn default_true() -> bool {
    true
}

impl TemplateNode {
    /// Create a node with the given kind and an empty path.
    pub fn new(id: impl Into<String>, label: impl Into<String>, kind: NodeKind) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            path: Vec::new(),
            kind,
            visible: true,
            limit: None,
            source: DataSource::Primary,
            generation_id: None,
            generation_enabled: true,
            children: Vec::new(),
        }
    }

    /// Group node navigating to `path`.
    pub fn group(id: impl Into<String>, label: impl Into<String>, path: &[&str]) -> Self {
        Self::new(id, label, NodeKind::Group).at(path)
    }

    /// Scalar field node navigating to `path`.
    pub fn field(id: impl Into<String>, label: impl Into<String>, path: &[&str]) -> Self {
        Self::new(id, label, NodeKind::Field).at(path)
    }

    /// List node navigating to `path`, capped at `limit` entries.
    pub fn list(
        id: impl Into<String>,
        label: impl Into<String>,
        path: &[&str],
        limit: usize,
    ) -> Self {
        let mut node = Self::new(id, label, NodeKind::List).at(path);
        node.limit = Some(limit);
        node
    }

    /// Set the lookup path.
    pub fn at(mut self, path: &[&str]) -> Self {
        self.path = path.iter().map(|s| s.to_string()).collect();
        self
    }

    /// Attach child nodes.
    pub fn with_children(mut self, children: Vec<TemplateNode>) -> Self {
        self.children = children;
        self
    }

    /// Mark the node (and thereby its subtree) invisible.
    pub fn hidden(mut self) -> Self {
        self.visible = false;
        self
    }

    /// Read from the auxiliary snapshot instead of the primary record.
    pub fn from_snapshot(mut self) -> Self {
        self.source = DataSource::Auxiliary;
        self
    }

    /// Name the generation slot this node corresponds to.
    pub fn generated(mut self, slot: impl Into<String>) -> Self {
        self.generation_id = Some(slot.into());
        self
    }
}

/// Top-level template: a name plus an ordered list of root blocks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TemplateDefinition {
    pub name: String,
    pub blocks: Vec<TemplateNode>,
}

impl TemplateDefinition {
    pub fn new(name: impl Into<String>, blocks: Vec<TemplateNode>) -> Self {
        Self {
            name: name.into(),
            blocks,
        }
    }
}

/// Load a template definition from disk or fall back to the default.
///
/// A missing path (or no path at all) yields the built-in default
/// template. An existing but unparsable file is fatal for the load call;
/// callers are expected to abort the affected batch rather than continue
/// on partial template data.
///
/// # Errors
///
/// Returns `TemplateError::ReadError` if the file cannot be read, or
/// `TemplateError::InvalidJson` if it is not a valid template document.
pub fn load_template(path: Option<&Path>) -> Result<TemplateDefinition, TemplateError> {
    let Some(path) = path.filter(|p| p.exists()) else {
        return Ok(default_template().clone());
    };

    let content = std::fs::read_to_string(path).map_err(|source| TemplateError::ReadError {
        path: path.to_path_buf(),
        source,
    })?;

    load_template_str(&content)
}

/// Parse a template definition from a JSON string.
///
/// # Errors
///
/// Returns `TemplateError::InvalidJson` if the string is not a valid
/// template document.
pub fn load_template_str(content: &str) -> Result<TemplateDefinition, TemplateError> {
    serde_json::from_str(content).map_err(|source| TemplateError::InvalidJson { source })
}

/// Serialize a template definition to disk as pretty-printed JSON.
///
/// Parent directories are created as needed.
///
/// # Errors
///
/// Returns `TemplateError::WriteError` if the file cannot be written.
pub fn save_template(template: &TemplateDefinition, path: &Path) -> Result<(), TemplateError> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|source| TemplateError::WriteError {
            path: path.to_path_buf(),
            source,
        })?;
    }

    let json = serde_json::to_string_pretty(template).expect("template serialization is total");
    std::fs::write(path, json).map_err(|source| TemplateError::WriteError {
        path: path.to_path_buf(),
        source,
    })
}
