//! # Tree Command Implementation
//!
//! This module implements the `tree` subcommand, which packs a configuration
//! directory and displays the resulting document's structure as a tree.
//!
//! Mappings are expanded key by key, sequences are shown with their length,
//! and scalars are shown inline. The `--depth` flag limits how far the tree
//! is expanded.

use anyhow::{Context, Result};
use clap::Args;
use ptree::{print_tree, TreeItem};
use std::borrow::Cow;

use config_pack::node::{key_label, Node};

use super::SourceArgs;

/// Display the structure of a packed configuration
#[derive(Args, Debug)]
pub struct TreeArgs {
    #[command(flatten)]
    pub source: SourceArgs,

    /// Maximum depth to display in the tree.
    ///
    /// If not specified, displays the full tree.
    /// Use 0 to show only the root, 1 to show its top-level keys, etc.
    #[arg(long, value_name = "NUM")]
    pub depth: Option<usize>,
}

/// Execute the `tree` command.
pub fn execute(args: TreeArgs) -> Result<()> {
    let path = &args.source.path;
    let node = config_pack::pack_node(path, &args.source.options())
        .with_context(|| format!("Failed to pack {}", path.display()))?;

    let root = build_tree_node(
        path.display().to_string(),
        &node,
        args.depth.unwrap_or(usize::MAX),
        0,
    );
    print_tree(&root).map_err(|e| anyhow::anyhow!("Failed to display tree: {}", e))?;

    Ok(())
}

/// Build a display node for `node`, labelled with `label`.
fn build_tree_node(label: String, node: &Node, max_depth: usize, current_depth: usize) -> TreeNode {
    let (label, children) = match node {
        Node::Mapping(mapping) => {
            let children = if current_depth >= max_depth {
                vec![]
            } else {
                mapping
                    .iter()
                    .map(|(k, v)| build_tree_node(key_label(k), v, max_depth, current_depth + 1))
                    .collect()
            };
            (label, children)
        }
        Node::Sequence(items) => (format!("{} [{} items]", label, items.len()), vec![]),
        Node::Tagged(tagged) => {
            return build_tree_node(label, &tagged.value, max_depth, current_depth);
        }
        scalar => (format!("{}: {}", label, scalar_label(scalar)), vec![]),
    };
    TreeNode { label, children }
}

fn scalar_label(node: &Node) -> String {
    match node {
        Node::String(s) => s.clone(),
        other => key_label(other),
    }
}

/// Tree node structure for ptree visualization
#[derive(Clone)]
struct TreeNode {
    label: String,
    children: Vec<TreeNode>,
}

impl TreeItem for TreeNode {
    type Child = TreeNode;

    fn write_self<W: std::io::Write>(
        &self,
        f: &mut W,
        _style: &ptree::Style,
    ) -> std::io::Result<()> {
        write!(f, "{}", self.label)
    }

    fn children(&self) -> Cow<'_, [Self::Child]> {
        Cow::from(&self.children[..])
    }
}
