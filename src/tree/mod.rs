// ABOUTME: Tree assembly: normalize, validate settings, group or sort, then label.
// ABOUTME: A pure function from descriptors and raw settings to display nodes.

mod group;
mod sort;

pub use group::{Group, group_labeled};
pub use sort::{Labeled, sort_labeled};

use crate::descriptor::RawDescriptor;
use crate::diagnostics::Diagnostics;
use crate::normalize::{NormalizedItem, normalize_all};
use crate::resource::{ContextValue, ResourceAdapter, ResourceKind};
use crate::settings::{TreeSettings, validate_settings};
use serde::Serialize;
use serde_json::Value;

/// Separator between the parts of a leaf description.
pub const DESCRIPTION_SEPARATOR: &str = " - ";

/// A node in the rendered tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum TreeNode {
    Group(GroupNode),
    Leaf(LeafNode),
}

impl TreeNode {
    pub fn label(&self) -> &str {
        match self {
            TreeNode::Group(group) => &group.label,
            TreeNode::Leaf(leaf) => &leaf.label,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupNode {
    pub label: String,
    /// Ascending order of siblings.
    pub sort_rank: u64,
    pub children: Vec<TreeNode>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LeafNode {
    pub label: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub context_value: ContextValue,
    /// Full identifier of the resource the leaf stands for.
    pub backing_id: String,
}

/// Build the ordered top-level nodes for `kind`.
///
/// `now` is the reference time in epoch seconds for age buckets. Malformed
/// settings and descriptor fields never fail the build; the fallbacks taken
/// are discarded. Use [`build_tree_with_diagnostics`] to see them.
pub fn build_tree(
    kind: ResourceKind,
    descriptors: &[RawDescriptor],
    raw_settings: &Value,
    now: i64,
) -> Vec<TreeNode> {
    build_tree_with_diagnostics(kind, descriptors, raw_settings, now, &mut Diagnostics::default())
}

/// [`build_tree`] against the system clock.
pub fn build_tree_now(
    kind: ResourceKind,
    descriptors: &[RawDescriptor],
    raw_settings: &Value,
) -> Vec<TreeNode> {
    build_tree(kind, descriptors, raw_settings, chrono::Utc::now().timestamp())
}

pub fn build_tree_with_diagnostics(
    kind: ResourceKind,
    descriptors: &[RawDescriptor],
    raw_settings: &Value,
    now: i64,
    diagnostics: &mut Diagnostics,
) -> Vec<TreeNode> {
    let adapter = kind.adapter();
    let items = normalize_all(adapter, descriptors, now, diagnostics);
    let settings = validate_settings(adapter, raw_settings, diagnostics);
    assemble(adapter, &items, &settings)
}

/// Arrange already normalized items under already validated settings.
pub fn assemble(
    adapter: &dyn ResourceAdapter,
    items: &[NormalizedItem],
    settings: &TreeSettings,
) -> Vec<TreeNode> {
    let entries: Vec<Labeled<'_>> = items
        .iter()
        .map(|item| Labeled {
            item,
            label: adapter.format(settings.label_key, item),
        })
        .collect();

    let nodes = match settings.group_by_key {
        Some(group_by) => group_labeled(adapter, entries, group_by, settings.sort_by_key)
            .into_iter()
            .map(|group| {
                TreeNode::Group(GroupNode {
                    label: group.label,
                    sort_rank: group.rank,
                    children: leaves(adapter, group.members, settings),
                })
            })
            .collect(),
        None => {
            let mut entries = entries;
            sort_labeled(&mut entries, settings.sort_by_key);
            leaves(adapter, entries, settings)
        }
    };

    tracing::debug!(kind = %adapter.kind(), top_level = nodes.len(), "assembled tree");
    nodes
}

fn leaves(
    adapter: &dyn ResourceAdapter,
    entries: Vec<Labeled<'_>>,
    settings: &TreeSettings,
) -> Vec<TreeNode> {
    entries
        .into_iter()
        .map(|entry| TreeNode::Leaf(leaf(adapter, entry, settings)))
        .collect()
}

fn leaf(adapter: &dyn ResourceAdapter, entry: Labeled<'_>, settings: &TreeSettings) -> LeafNode {
    let description = if settings.description_keys.is_empty() {
        None
    } else {
        Some(
            settings
                .description_keys
                .iter()
                .map(|key| adapter.format(*key, entry.item))
                .collect::<Vec<_>>()
                .join(DESCRIPTION_SEPARATOR),
        )
    };

    LeafNode {
        label: entry.label,
        description,
        context_value: adapter.context_value(entry.item),
        backing_id: entry.item.id().to_string(),
    }
}
