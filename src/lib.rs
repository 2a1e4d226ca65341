//! In-memory tree built from a flat, parent-referencing list of records.
//!
//! ```
//! use treestore::domain::{InputItem, Record, TreeStore};
//!
//! let store = TreeStore::new(vec![
//!     InputItem::root(1),
//!     InputItem::child(2, 1, Some("test")),
//!     InputItem::child(4, 2, None),
//! ])?;
//!
//! assert_eq!(store.get_item(1), Some(Record::root(1)));
//! assert_eq!(
//!     store.get_all_parents(4)?,
//!     vec![Record::node(2, 1, Some("test")), Record::root(1)]
//! );
//! # Ok::<(), treestore::domain::DomainError>(())
//! ```

pub mod application;
pub mod cli;
pub mod config;
pub mod domain;
pub mod exitcode;
pub mod util;

pub use domain::{DomainError, InputItem, Record, TreeBuilder, TreeStore};
