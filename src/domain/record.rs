//! Input items and output records.
//!
//! Both sides share the same JSON shape:
//! - root: `{"id": 1, "parent": "root"}`
//! - node: `{"id": 2, "parent": 1, "type": "test"}` (`type` may be `null`)

use std::fmt;

use serde::{Deserialize, Serialize};

/// Node identifier.
pub type NodeId = i64;

/// The literal `"root"` marker used in the `parent` field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RootMarker {
    #[serde(rename = "root")]
    Root,
}

/// Parent reference of an input item: either the root marker or a parent id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ParentRef {
    Root(RootMarker),
    Id(NodeId),
}

impl ParentRef {
    pub fn is_root(&self) -> bool {
        matches!(self, ParentRef::Root(_))
    }
}

impl fmt::Display for ParentRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParentRef::Root(_) => write!(f, "root"),
            ParentRef::Id(id) => write!(f, "{id}"),
        }
    }
}

/// One record of the flat construction input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputItem {
    pub id: NodeId,
    pub parent: ParentRef,
    /// Absent and `null` are treated alike.
    #[serde(rename = "type", default)]
    pub kind: Option<String>,
}

impl InputItem {
    pub fn root(id: NodeId) -> Self {
        Self {
            id,
            parent: ParentRef::Root(RootMarker::Root),
            kind: None,
        }
    }

    pub fn child(id: NodeId, parent: NodeId, kind: Option<&str>) -> Self {
        Self {
            id,
            parent: ParentRef::Id(parent),
            kind: kind.map(str::to_string),
        }
    }
}

/// Output shape of the root node. Carries no `type` field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RootRecord {
    pub id: NodeId,
    pub parent: RootMarker,
}

/// Output shape of a non-root node.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NodeRecord {
    pub id: NodeId,
    pub parent: NodeId,
    #[serde(rename = "type")]
    pub kind: Option<String>,
}

/// A node serialized to its plain record form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Record {
    Node(NodeRecord),
    Root(RootRecord),
}

impl Record {
    pub fn root(id: NodeId) -> Self {
        Record::Root(RootRecord {
            id,
            parent: RootMarker::Root,
        })
    }

    pub fn node(id: NodeId, parent: NodeId, kind: Option<&str>) -> Self {
        Record::Node(NodeRecord {
            id,
            parent,
            kind: kind.map(str::to_string),
        })
    }

    pub fn id(&self) -> NodeId {
        match self {
            Record::Root(r) => r.id,
            Record::Node(n) => n.id,
        }
    }

    /// Parent id, `None` for the root record.
    pub fn parent_id(&self) -> Option<NodeId> {
        match self {
            Record::Root(_) => None,
            Record::Node(n) => Some(n.parent),
        }
    }

    pub fn is_root(&self) -> bool {
        matches!(self, Record::Root(_))
    }
}
