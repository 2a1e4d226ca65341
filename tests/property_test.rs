//! Property tests over generated parent-before-child item lists

use proptest::prelude::*;

use treestore::domain::{InputItem, NodeId, Record, TreeStore};

/// A generated tree: `parents[i]` is the position of node `i`'s parent.
#[derive(Debug, Clone)]
struct Generated {
    ids: Vec<NodeId>,
    parents: Vec<Option<usize>>,
    kinds: Vec<Option<String>>,
}

impl Generated {
    fn items(&self) -> Vec<InputItem> {
        (0..self.ids.len())
            .map(|pos| match self.parents[pos] {
                Some(parent) => {
                    InputItem::child(self.ids[pos], self.ids[parent], self.kinds[pos].as_deref())
                }
                None => InputItem::root(self.ids[pos]),
            })
            .collect()
    }

    fn record(&self, pos: usize) -> Record {
        match self.parents[pos] {
            Some(parent) => Record::node(self.ids[pos], self.ids[parent], self.kinds[pos].as_deref()),
            None => Record::root(self.ids[pos]),
        }
    }

    /// Node count of every subtree, the node itself included.
    fn subtree_sizes(&self) -> Vec<usize> {
        let mut sizes = vec![1; self.ids.len()];
        for pos in (1..self.ids.len()).rev() {
            if let Some(parent) = self.parents[pos] {
                sizes[parent] += sizes[pos];
            }
        }
        sizes
    }
}

/// Root first, then each node attached to some node generated before it.
/// Ids are sparse so positions and ids never coincide.
fn tree_items() -> impl Strategy<Value = Generated> {
    prop::collection::vec(
        (any::<prop::sample::Index>(), proptest::option::of("[a-z]{1,4}")),
        0..40,
    )
    .prop_map(|nodes| {
        let mut generated = Generated {
            ids: vec![7],
            parents: vec![None],
            kinds: vec![None],
        };
        for (pos, (parent, kind)) in nodes.into_iter().enumerate() {
            let existing = pos + 1;
            generated.ids.push(existing as NodeId * 3 + 7);
            generated.parents.push(Some(parent.index(existing)));
            generated.kinds.push(kind);
        }
        generated
    })
}

fn ids(records: &[Record]) -> Vec<NodeId> {
    records.iter().map(Record::id).collect()
}

proptest! {
    #[test]
    fn given_generated_items_when_reading_back_then_records_match_input(tree in tree_items()) {
        let store = TreeStore::new(tree.items()).unwrap();

        let expected: Vec<Record> = (0..tree.ids.len()).map(|pos| tree.record(pos)).collect();
        prop_assert_eq!(store.get_all(), expected.clone());
        for record in expected {
            prop_assert_eq!(store.get_item(record.id()), Some(record));
        }
    }

    #[test]
    fn given_generated_items_when_walking_parents_then_chain_matches_depth(tree in tree_items()) {
        let store = TreeStore::new(tree.items()).unwrap();

        for (pos, &id) in tree.ids.iter().enumerate() {
            let parents = store.get_all_parents(id).unwrap();
            prop_assert_eq!(parents.len(), store.depth_of(id).unwrap());

            let mut expected = Vec::new();
            let mut next = tree.parents[pos];
            while let Some(parent) = next {
                expected.push(tree.ids[parent]);
                next = tree.parents[parent];
            }
            prop_assert_eq!(ids(&parents), expected);
            if pos > 0 {
                prop_assert_eq!(parents.last(), Some(&Record::root(tree.ids[0])));
            }
        }
    }

    #[test]
    fn given_generated_items_when_listing_children_then_ordered_subset_of_descendants(tree in tree_items()) {
        let store = TreeStore::new(tree.items()).unwrap();

        for (pos, &id) in tree.ids.iter().enumerate() {
            let children = store.get_children(id).unwrap();
            let expected: Vec<NodeId> = (0..tree.ids.len())
                .filter(|&other| tree.parents[other] == Some(pos))
                .map(|other| tree.ids[other])
                .collect();
            prop_assert_eq!(ids(&children), expected);

            let descendants = store.get_all_children(id).unwrap();
            let mut rest = descendants.iter();
            for child in &children {
                prop_assert!(rest.any(|d| d == child), "child {} out of order under {}", child.id(), id);
            }
        }
    }

    #[test]
    fn given_generated_items_when_counting_descendants_then_equals_subtree_size(tree in tree_items()) {
        let store = TreeStore::new(tree.items()).unwrap();
        let sizes = tree.subtree_sizes();

        for (pos, &id) in tree.ids.iter().enumerate() {
            prop_assert_eq!(store.get_all_children(id).unwrap().len(), sizes[pos] - 1);
        }
        prop_assert_eq!(sizes[0], store.len());
    }

    #[test]
    fn given_generated_items_when_collecting_leaves_then_exactly_childless_nodes(tree in tree_items()) {
        let store = TreeStore::new(tree.items()).unwrap();

        let mut leaves = ids(&store.leaves());
        let mut expected: Vec<NodeId> = (0..tree.ids.len())
            .filter(|&pos| !tree.parents.contains(&Some(pos)))
            .map(|pos| tree.ids[pos])
            .collect();
        leaves.sort_unstable();
        expected.sort_unstable();
        prop_assert_eq!(leaves, expected);
    }
}
