use std::collections::VecDeque;
use std::fmt;

use generational_arena::{Arena, Index};
use tracing::instrument;

use crate::domain::record::{NodeId, Record};

/// Data payload for tree nodes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NodeData {
    /// Unique identifier, immutable after creation
    pub id: NodeId,
    /// Optional type tag, always `None` for the root
    pub kind: Option<String>,
}

impl fmt::Display for NodeData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            Some(kind) => write!(f, "{} [{}]", self.id, kind),
            None => write!(f, "{} [null]", self.id),
        }
    }
}

/// Tree node in the arena-based hierarchy structure.
#[derive(Debug)]
pub struct TreeNode {
    pub data: NodeData,
    /// Index of parent node in the arena, None for the root
    pub parent: Option<Index>,
    /// Indices of child nodes in the arena, in insertion order
    pub children: Vec<Index>,
}

impl TreeNode {
    pub fn id(&self) -> NodeId {
        self.data.id
    }
}

/// Arena-based tree structure.
///
/// Parents own their children through index lists; the parent link is a plain
/// index back into the same arena, so the graph holds no reference cycles.
#[derive(Debug)]
pub struct TreeArena {
    arena: Arena<TreeNode>,
    /// Index of the root node, None for empty trees
    root: Option<Index>,
}

impl Default for TreeArena {
    fn default() -> Self {
        Self::new()
    }
}

impl TreeArena {
    pub fn new() -> Self {
        Self {
            arena: Arena::new(),
            root: None,
        }
    }

    pub fn with_capacity(n: usize) -> Self {
        Self {
            arena: Arena::with_capacity(n),
            root: None,
        }
    }

    /// Inserts a node. Without a parent it becomes the root; otherwise it is
    /// attached to `parent` via [`TreeArena::add_child`].
    #[instrument(level = "trace", skip(self))]
    pub fn insert_node(&mut self, data: NodeData, parent: Option<Index>) -> Index {
        let node_idx = self.arena.insert(TreeNode {
            data,
            parent: None,
            children: Vec::new(),
        });

        match parent {
            Some(parent_idx) => self.add_child(parent_idx, node_idx),
            None => self.root = Some(node_idx),
        }

        node_idx
    }

    /// Sets `child.parent` to `parent` and appends `child` to the parent's children.
    ///
    /// The child must not already be attached elsewhere; this is not checked.
    #[instrument(level = "trace", skip(self))]
    pub fn add_child(&mut self, parent_idx: Index, child_idx: Index) {
        if let Some(child) = self.arena.get_mut(child_idx) {
            child.parent = Some(parent_idx);
        }
        if let Some(parent) = self.arena.get_mut(parent_idx) {
            parent.children.push(child_idx);
        }
    }

    #[instrument(level = "trace", skip(self))]
    pub fn get_node(&self, idx: Index) -> Option<&TreeNode> {
        self.arena.get(idx)
    }

    #[instrument(level = "trace", skip(self))]
    pub fn root(&self) -> Option<Index> {
        self.root
    }

    pub fn len(&self) -> usize {
        self.arena.len()
    }

    pub fn is_empty(&self) -> bool {
        self.arena.is_empty()
    }

    /// Serializes a node to its record form.
    ///
    /// A node without a parent yields the root shape; all others carry
    /// their parent's id and their type tag.
    #[instrument(level = "trace", skip(self))]
    pub fn to_record(&self, idx: Index) -> Option<Record> {
        let node = self.get_node(idx)?;
        let record = match node.parent.and_then(|p| self.get_node(p)) {
            Some(parent) => Record::node(node.id(), parent.id(), node.data.kind.as_deref()),
            None => Record::root(node.id()),
        };
        Some(record)
    }

    /// Pre-order walk over all descendants of `idx`, excluding `idx` itself.
    #[instrument(level = "trace", skip(self))]
    pub fn descendants(&self, idx: Index) -> Descendants<'_> {
        Descendants::new(self, idx)
    }

    /// Walk from the immediate parent of `idx` up to and including the root.
    #[instrument(level = "trace", skip(self))]
    pub fn ancestors(&self, idx: Index) -> Ancestors<'_> {
        Ancestors {
            arena: self,
            next: self.get_node(idx).and_then(|n| n.parent),
        }
    }

    /// Height of the tree in levels: 1 for a lone root, 0 when empty.
    ///
    /// Breadth-first walk with an explicit queue, so deep chains do not grow
    /// the call stack.
    #[instrument(level = "debug", skip(self))]
    pub fn depth(&self) -> usize {
        let mut max_depth = 0;
        let mut queue = VecDeque::new();
        if let Some(root) = self.root {
            queue.push_back((root, 1));
        }

        while let Some((node_idx, depth)) = queue.pop_front() {
            max_depth = max_depth.max(depth);
            if let Some(node) = self.get_node(node_idx) {
                queue.extend(node.children.iter().map(|&child| (child, depth + 1)));
            }
        }

        max_depth
    }

    /// Collects all leaf nodes (nodes with no children), in pre-order.
    #[instrument(level = "debug", skip(self))]
    pub fn leaf_nodes(&self) -> Vec<Index> {
        let Some(root) = self.root else {
            return Vec::new();
        };
        std::iter::once(root)
            .filter_map(|idx| self.get_node(idx).map(|node| (idx, node)))
            .chain(self.descendants(root))
            .filter(|(_, node)| node.children.is_empty())
            .map(|(idx, _)| idx)
            .collect()
    }
}

pub struct Descendants<'a> {
    arena: &'a TreeArena,
    stack: Vec<Index>,
}

impl<'a> Descendants<'a> {
    fn new(arena: &'a TreeArena, start: Index) -> Self {
        let stack = arena
            .get_node(start)
            .map(|node| node.children.iter().rev().copied().collect())
            .unwrap_or_default();
        Self { arena, stack }
    }
}

impl<'a> Iterator for Descendants<'a> {
    type Item = (Index, &'a TreeNode);

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(current_idx) = self.stack.pop() {
            if let Some(node) = self.arena.get_node(current_idx) {
                // Push children in reverse order for left-to-right traversal
                self.stack.extend(node.children.iter().rev());
                return Some((current_idx, node));
            }
        }
        None
    }
}

pub struct Ancestors<'a> {
    arena: &'a TreeArena,
    next: Option<Index>,
}

impl<'a> Iterator for Ancestors<'a> {
    type Item = (Index, &'a TreeNode);

    fn next(&mut self) -> Option<Self::Item> {
        let current_idx = self.next?;
        let node = self.arena.get_node(current_idx)?;
        self.next = node.parent;
        Some((current_idx, node))
    }
}
