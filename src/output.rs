// ABOUTME: Output formatting for rendered trees and adapter key tables.
// ABOUTME: Supports normal (indented tree), quiet (labels only), and JSON output modes.

use crate::error::Result;
use crate::resource::ResourceAdapter;
use crate::tree::TreeNode;
use std::fmt::Write as _;

const INDENT: &str = "  ";

/// Output mode for rendered trees.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    /// Indented tree with descriptions and context values
    Normal,
    /// Indented labels only
    Quiet,
    /// JSON array of nodes for scripting
    Json,
}

/// Renders trees based on the configured mode.
pub struct Output {
    mode: OutputMode,
}

impl Output {
    pub fn new(mode: OutputMode) -> Self {
        Self { mode }
    }

    /// Render nodes to text.
    pub fn render(&self, nodes: &[TreeNode]) -> Result<String> {
        match self.mode {
            OutputMode::Json => Ok(serde_json::to_string_pretty(nodes)? + "\n"),
            OutputMode::Normal | OutputMode::Quiet => {
                let mut text = String::new();
                for node in nodes {
                    self.render_node(&mut text, node, 0);
                }
                Ok(text)
            }
        }
    }

    /// Print nodes to stdout.
    pub fn print(&self, nodes: &[TreeNode]) -> Result<()> {
        print!("{}", self.render(nodes)?);
        Ok(())
    }

    fn render_node(&self, out: &mut String, node: &TreeNode, depth: usize) {
        let indent = INDENT.repeat(depth);
        // Writing to a String cannot fail.
        match node {
            TreeNode::Group(group) => {
                let _ = writeln!(out, "{indent}{}", group.label);
                for child in &group.children {
                    self.render_node(out, child, depth + 1);
                }
            }
            TreeNode::Leaf(leaf) => {
                if self.mode == OutputMode::Quiet {
                    let _ = writeln!(out, "{indent}{}", leaf.label);
                    return;
                }
                let _ = write!(out, "{indent}{}", leaf.label);
                if let Some(description) = &leaf.description {
                    let _ = write!(out, "  [{description}]");
                }
                let _ = writeln!(out, "  <{}>", leaf.context_value);
            }
        }
    }
}

/// Describe the keys an adapter accepts and its defaults.
pub fn render_keys(adapter: &dyn ResourceAdapter) -> String {
    let join = |keys: &[crate::resource::FormatKey]| {
        keys.iter().map(|k| k.as_str()).collect::<Vec<_>>().join(", ")
    };
    let sort_keys = adapter
        .sort_by_keys()
        .iter()
        .map(|k| k.to_string())
        .collect::<Vec<_>>()
        .join(", ");

    format!(
        "{kind}\n\
         {INDENT}label:       {labels} (default: {label_default})\n\
         {INDENT}description: {descriptions} (default: [{description_default}])\n\
         {INDENT}groupBy:     None, {groups} (default: None)\n\
         {INDENT}sortBy:      {sort_keys} (default: {sort_default})\n",
        kind = adapter.kind(),
        labels = join(adapter.label_keys()),
        label_default = adapter.default_label_key(),
        descriptions = join(adapter.description_keys()),
        description_default = join(adapter.default_description_keys()),
        groups = join(adapter.group_by_keys()),
        sort_default = adapter.default_sort_by_key(),
    )
}
