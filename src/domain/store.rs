//! Read-only query API over a built tree.

use std::collections::HashMap;

use generational_arena::Index;
use tracing::instrument;

use crate::domain::arena::TreeArena;
use crate::domain::builder::TreeBuilder;
use crate::domain::error::{DomainError, TreeResult};
use crate::domain::record::{InputItem, NodeId, Record};

/// Immutable tree indexed by node id.
///
/// Built once from a flat list of records (see [`TreeBuilder`]); every
/// operation afterwards is a lookup or a traversal from a looked-up node.
#[derive(Debug)]
pub struct TreeStore {
    tree: TreeArena,
    index: HashMap<NodeId, Index>,
    /// Arena indices in construction order, root first
    order: Vec<Index>,
    root_id: NodeId,
}

impl TreeStore {
    /// Builds the store with default (permissive) builder settings.
    ///
    /// # Errors
    /// [`DomainError::EmptyInput`] for no items, [`DomainError::MalformedInput`]
    /// for forward, dangling or duplicate references.
    pub fn new<I>(items: I) -> TreeResult<Self>
    where
        I: IntoIterator<Item = InputItem>,
    {
        TreeBuilder::new().build(items)
    }

    pub(crate) fn from_parts(
        tree: TreeArena,
        index: HashMap<NodeId, Index>,
        order: Vec<Index>,
        root_id: NodeId,
    ) -> Self {
        Self {
            tree,
            index,
            order,
            root_id,
        }
    }

    /// Every node as a record, in construction order.
    #[instrument(level = "debug", skip(self))]
    pub fn get_all(&self) -> Vec<Record> {
        self.order
            .iter()
            .filter_map(|&idx| self.tree.to_record(idx))
            .collect()
    }

    /// The record for `id`, or `None` when no such node exists.
    #[instrument(level = "debug", skip(self))]
    pub fn get_item(&self, id: NodeId) -> Option<Record> {
        self.index
            .get(&id)
            .and_then(|&idx| self.tree.to_record(idx))
    }

    /// Direct children of `id` in insertion order.
    #[instrument(level = "debug", skip(self))]
    pub fn get_children(&self, id: NodeId) -> TreeResult<Vec<Record>> {
        let idx = self.node_index(id)?;
        Ok(self
            .tree
            .get_node(idx)
            .map(|node| {
                node.children
                    .iter()
                    .filter_map(|&child| self.tree.to_record(child))
                    .collect()
            })
            .unwrap_or_default())
    }

    /// All descendants of `id` in pre-order, excluding `id` itself.
    #[instrument(level = "debug", skip(self))]
    pub fn get_all_children(&self, id: NodeId) -> TreeResult<Vec<Record>> {
        let idx = self.node_index(id)?;
        Ok(self
            .tree
            .descendants(idx)
            .filter_map(|(child, _)| self.tree.to_record(child))
            .collect())
    }

    /// Ancestors of `id`, nearest first, ending with the root.
    #[instrument(level = "debug", skip(self))]
    pub fn get_all_parents(&self, id: NodeId) -> TreeResult<Vec<Record>> {
        let idx = self.node_index(id)?;
        Ok(self
            .tree
            .ancestors(idx)
            .filter_map(|(parent, _)| self.tree.to_record(parent))
            .collect())
    }

    /// Records of childless nodes, in pre-order from the root.
    #[instrument(level = "debug", skip(self))]
    pub fn leaves(&self) -> Vec<Record> {
        self.tree
            .leaf_nodes()
            .into_iter()
            .filter_map(|idx| self.tree.to_record(idx))
            .collect()
    }

    /// Number of ancestors of `id` (0 for the root).
    #[instrument(level = "debug", skip(self))]
    pub fn depth_of(&self, id: NodeId) -> TreeResult<usize> {
        let idx = self.node_index(id)?;
        Ok(self.tree.ancestors(idx).count())
    }

    /// Height of the whole tree in levels.
    pub fn depth(&self) -> usize {
        self.tree.depth()
    }

    pub fn root_id(&self) -> NodeId {
        self.root_id
    }

    pub fn contains(&self, id: NodeId) -> bool {
        self.index.contains_key(&id)
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Always false for a successfully built store.
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    pub(crate) fn arena(&self) -> &TreeArena {
        &self.tree
    }

    pub(crate) fn node_index(&self, id: NodeId) -> TreeResult<Index> {
        self.index
            .get(&id)
            .copied()
            .ok_or(DomainError::UnknownId(id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> TreeStore {
        TreeStore::new(vec![
            InputItem::root(1),
            InputItem::child(2, 1, Some("test")),
            InputItem::child(3, 1, None),
        ])
        .unwrap()
    }

    #[test]
    fn given_store_when_introspecting_then_counts_match() {
        let store = sample();
        assert_eq!(store.len(), 3);
        assert!(!store.is_empty());
        assert_eq!(store.root_id(), 1);
        assert!(store.contains(3));
        assert!(!store.contains(4));
        assert_eq!(store.depth(), 2);
    }

    #[test]
    fn given_unknown_id_when_resolving_then_unknown_id_error() {
        let store = sample();
        assert_eq!(store.node_index(42).err(), Some(DomainError::UnknownId(42)));
        assert_eq!(store.depth_of(42), Err(DomainError::UnknownId(42)));
    }

    #[test]
    fn given_store_when_listing_leaves_then_childless_nodes_in_order() {
        let store = sample();
        let ids: Vec<NodeId> = store.leaves().iter().map(Record::id).collect();
        assert_eq!(ids, vec![2, 3]);
    }
}
