//! Single-pass tree construction from flat parent-referencing records.

use std::collections::HashMap;

use generational_arena::Index;
use tracing::{debug, info, instrument};

use crate::domain::arena::{NodeData, TreeArena};
use crate::domain::error::{DomainError, TreeResult};
use crate::domain::record::{InputItem, NodeId, ParentRef};
use crate::domain::store::TreeStore;

/// Constructs a [`TreeStore`] from records ordered parent-before-child.
///
/// The first record always seeds the root. Every later record must name a
/// parent that was already processed; forward and dangling references fail.
#[derive(Debug, Default, Clone)]
pub struct TreeBuilder {
    strict_root: bool,
}

impl TreeBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reject a first record whose `parent` is not the `"root"` marker.
    ///
    /// Off by default: the first record is taken as root whatever it declares.
    pub fn strict_root(mut self, strict: bool) -> Self {
        self.strict_root = strict;
        self
    }

    #[instrument(level = "debug", skip(self, items))]
    pub fn build<I>(&self, items: I) -> TreeResult<TreeStore>
    where
        I: IntoIterator<Item = InputItem>,
    {
        let mut items = items.into_iter();
        let root = items.next().ok_or(DomainError::EmptyInput)?;

        if self.strict_root && !root.parent.is_root() {
            return Err(DomainError::malformed(
                root.id,
                format!("first record must have parent \"root\", found {}", root.parent),
            ));
        }

        let (lower, _) = items.size_hint();
        let mut tree = TreeArena::with_capacity(lower + 1);
        let mut index: HashMap<NodeId, Index> = HashMap::with_capacity(lower + 1);
        let mut order = Vec::with_capacity(lower + 1);

        // Root never carries a type, whatever the record says
        let root_idx = tree.insert_node(
            NodeData {
                id: root.id,
                kind: None,
            },
            None,
        );
        index.insert(root.id, root_idx);
        order.push(root_idx);
        debug!(id = root.id, "seeded root");

        for item in items {
            let parent_id = match item.parent {
                ParentRef::Id(id) => id,
                ParentRef::Root(_) => {
                    return Err(DomainError::malformed(
                        item.id,
                        "only the first record may be the root",
                    ));
                }
            };
            if index.contains_key(&item.id) {
                return Err(DomainError::malformed(item.id, "duplicate id"));
            }
            let parent_idx = *index.get(&parent_id).ok_or_else(|| {
                DomainError::malformed(
                    item.id,
                    format!("parent {parent_id} not defined before its child"),
                )
            })?;

            let node_idx = tree.insert_node(
                NodeData {
                    id: item.id,
                    kind: item.kind,
                },
                Some(parent_idx),
            );
            index.insert(item.id, node_idx);
            order.push(node_idx);
            debug!(id = item.id, parent = parent_id, "attached node");
        }

        info!(nodes = order.len(), "tree built");
        Ok(TreeStore::from_parts(tree, index, order, root.id))
    }
}
