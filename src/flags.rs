//! Generation-flag resolution - schema-only gating of expensive content
//! generation.
//!
//! Before the external generation service produces text for a named slot
//! it consults these flags and skips the slot entirely when it is absent
//! or false. The computation is data-independent and cacheable once per
//! template load.
//!
//! The load-bearing rule is visibility masking: an invisible ancestor
//! forces every generation slot declared anywhere in its subtree to
//! false, regardless of each descendant's own `generationEnabled`. A
//! template editor who hides a section also stops its generation work.

use std::collections::{BTreeMap, BTreeSet};

use crate::schema::{TemplateDefinition, TemplateNode};

impl TemplateDefinition {
    /// True iff at least one node in the tree declares a generation id.
    ///
    /// Consumers must treat every slot as enabled when this is false:
    /// templates that predate generation controls keep their legacy
    /// generate-everything behavior instead of generating nothing.
    pub fn has_generation_controls(&self) -> bool {
        self.blocks.iter().any(declares_generation)
    }

    /// Eligibility of every declared generation slot.
    ///
    /// The map holds an entry for each declared id even when it is
    /// false, so "declared but disabled" is distinguishable from "never
    /// declared". A slot is eligible only when every ancestor and the
    /// node itself are visible and the node's own `generationEnabled`
    /// is true.
    pub fn generation_flags(&self) -> BTreeMap<String, bool> {
        let mut flags = BTreeMap::new();
        for block in &self.blocks {
            collect_flags(block, true, &mut flags);
        }
        flags
    }

    /// The ids of the generation slots currently eligible to run.
    pub fn enabled_generations(&self) -> BTreeSet<String> {
        self.generation_flags()
            .into_iter()
            .filter_map(|(id, enabled)| enabled.then_some(id))
            .collect()
    }
}

fn declares_generation(node: &TemplateNode) -> bool {
    node.generation_id.is_some() || node.children.iter().any(declares_generation)
}

/// Top-down walk carrying the inherited-visibility accumulator.
///
/// `visible_ancestor` is the AND of `visible` along the path from the
/// root; it is passed explicitly rather than held in shared state so the
/// walk stays pure.
fn collect_flags(node: &TemplateNode, visible_ancestor: bool, flags: &mut BTreeMap<String, bool>) {
    let current_visible = visible_ancestor && node.visible;

    if let Some(id) = &node.generation_id {
        flags.insert(id.clone(), current_visible && node.generation_enabled);
    }

    for child in &node.children {
        collect_flags(child, current_visible, flags);
    }
}
