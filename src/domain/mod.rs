//! Domain layer: tree data model and queries
//!
//! This layer is independent of external concerns (no I/O, no CLI, no config loading).

pub mod arena;
pub mod builder;
pub mod error;
pub mod record;
pub mod store;
pub mod tree_traits;

pub use arena::{NodeData, TreeArena, TreeNode};
pub use builder::TreeBuilder;
pub use error::{DomainError, TreeResult};
pub use record::{InputItem, NodeId, NodeRecord, ParentRef, Record, RootMarker, RootRecord};
pub use store::TreeStore;
pub use tree_traits::{RenderedTree, TreeNodeConvert};
