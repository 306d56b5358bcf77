//! Page Template Engine
//!
//! Declarative projection of normalized data profiles into editable page
//! documents.
//!
//! A [`TemplateDefinition`] is a tree of typed [`TemplateNode`]s, each
//! describing one output slot: a lookup path into a nested source record,
//! a kind, a visibility flag, an optional list cap, and optionally the id
//! of an external content-generation slot. Rendering walks the tree
//! against the record (plus an optional auxiliary snapshot) and produces
//! a pruned, ordered output tree; nodes that do not resolve are omitted,
//! never nulled.
//!
//! # Example
//!
//! ```
//! use page_template::{TemplateDefinition, TemplateNode};
//! use serde_json::json;
//!
//! let template = TemplateDefinition::new(
//!     "Example",
//!     vec![
//!         TemplateNode::group("overview", "Overview", &["overview"]).with_children(vec![
//!             TemplateNode::field("overview-summary", "Summary", &["summary"]),
//!             TemplateNode::list("overview-tags", "Tags", &["tags"], 2),
//!         ]),
//!     ],
//! );
//!
//! let data = json!({
//!     "overview": { "summary": "short", "tags": ["a", "b", "c"] }
//! });
//!
//! let rendered = template.render(&data, None);
//! assert_eq!(rendered.len(), 1);
//! assert_eq!(rendered[0].value, json!({ "Summary": "short", "Tags": ["a", "b"] }));
//! ```
//!
//! # Generation gating
//!
//! Templates may name external content-generation slots. The flags are
//! computed from the template alone, so a batch pipeline resolves them
//! once per template and skips expensive generation for any slot that is
//! absent or false:
//!
//! ```
//! use page_template::{TemplateDefinition, TemplateNode};
//!
//! let template = TemplateDefinition::new(
//!     "Example",
//!     vec![TemplateNode::group("hidden", "Hidden", &["x"])
//!         .hidden()
//!         .with_children(vec![
//!             TemplateNode::field("hidden-summary", "Summary", &["summary"])
//!                 .generated("sectionSummary"),
//!         ])],
//! );
//!
//! // Hiding a section masks every generation slot beneath it.
//! assert_eq!(template.generation_flags().get("sectionSummary"), Some(&false));
//! ```

mod defaults;
mod error;
mod flags;
mod render;
mod schema;
mod value;

pub use defaults::default_template;
pub use error::TemplateError;
pub use render::RenderedNode;
pub use schema::{
    load_template, load_template_str, save_template, DataSource, NodeKind, TemplateDefinition,
    TemplateNode,
};
pub use value::{truncate_list, walk_path};
