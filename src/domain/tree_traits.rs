//! ASCII rendering of a store via `termtree`.

use std::fmt;
use std::ops::Deref;

use generational_arena::Index;
use termtree::Tree;
use tracing::instrument;

use crate::domain::arena::TreeArena;
use crate::domain::error::TreeResult;
use crate::domain::record::NodeId;
use crate::domain::store::TreeStore;

/// A rendered `termtree::Tree` that is torn down without recursion.
///
/// `Tree` drops its leaves recursively; a long parent chain would exhaust the
/// stack when the rendering goes out of scope.
#[derive(Debug)]
pub struct RenderedTree(Tree<String>);

impl Deref for RenderedTree {
    type Target = Tree<String>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl fmt::Display for RenderedTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl Drop for RenderedTree {
    fn drop(&mut self) {
        let mut stack = std::mem::take(&mut self.0.leaves);
        while let Some(mut tree) = stack.pop() {
            stack.append(&mut tree.leaves);
        }
    }
}

pub trait TreeNodeConvert {
    fn to_tree_string(&self) -> RenderedTree;
}

impl TreeNodeConvert for TreeArena {
    fn to_tree_string(&self) -> RenderedTree {
        match self.root() {
            Some(root_idx) => build_tree(self, root_idx),
            None => RenderedTree(Tree::new("Empty tree".to_string())),
        }
    }
}

impl TreeNodeConvert for TreeStore {
    fn to_tree_string(&self) -> RenderedTree {
        self.arena().to_tree_string()
    }
}

impl TreeStore {
    /// Renders the subtree rooted at `id`.
    #[instrument(level = "debug", skip(self))]
    pub fn subtree_string(&self, id: NodeId) -> TreeResult<RenderedTree> {
        let idx = self.node_index(id)?;
        Ok(build_tree(self.arena(), idx))
    }
}

fn label(arena: &TreeArena, node_idx: Index) -> String {
    match arena.get_node(node_idx) {
        Some(node) if node.parent.is_none() => format!("{} (root)", node.id()),
        Some(node) => node.data.to_string(),
        None => String::new(),
    }
}

/// Post-order walk with an explicit stack. Finished subtrees wait on `built`
/// until their parent collects them.
fn build_tree(arena: &TreeArena, node_idx: Index) -> RenderedTree {
    let mut pending = vec![(node_idx, false)];
    let mut built: Vec<Tree<String>> = Vec::new();

    while let Some((idx, expanded)) = pending.pop() {
        let children = arena
            .get_node(idx)
            .map(|node| node.children.as_slice())
            .unwrap_or_default();

        if expanded {
            let leaves = built.split_off(built.len() - children.len());
            built.push(Tree::new(label(arena, idx)).with_leaves(leaves));
        } else {
            pending.push((idx, true));
            pending.extend(children.iter().rev().map(|&child| (child, false)));
        }
    }

    RenderedTree(built.pop().unwrap_or_else(|| Tree::new(String::new())))
}
