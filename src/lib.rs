// ABOUTME: Library root for docktree - builds grouped, sorted resource trees.
// ABOUTME: The command-line front end is in main.rs.

pub mod config;
pub mod descriptor;
pub mod diagnostics;
pub mod error;
pub mod normalize;
pub mod output;
pub mod resource;
pub mod settings;
pub mod tree;
pub mod types;

pub use resource::ResourceKind;
pub use tree::{TreeNode, build_tree, build_tree_now, build_tree_with_diagnostics};
