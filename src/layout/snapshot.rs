//! Serializable layout snapshot
//!
//! A flat box tree captured from (or standing in for) a rendered page. Hosts
//! can hand a snapshot to `planEqualization` to see what the equalizer would
//! do without touching the live DOM.

use serde::{Deserialize, Serialize};

use super::{plan, Equalization, HeightTarget, LayoutBox, Px};
use crate::error::BalanceError;

/// One box in a snapshot
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SnapshotNode {
    pub id: String,

    #[serde(default)]
    pub offset_height: Px,

    #[serde(default)]
    pub offset_top: Px,

    /// Index of the offset parent in `LayoutSnapshot::nodes`
    #[serde(default)]
    pub parent: Option<usize>,
}

impl SnapshotNode {
    pub fn new(id: impl Into<String>, offset_top: Px, offset_height: Px, parent: Option<usize>) -> Self {
        Self {
            id: id.into(),
            offset_height,
            offset_top,
            parent,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LayoutSnapshot {
    pub nodes: Vec<SnapshotNode>,
}

impl LayoutSnapshot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a snapshot from its JSON form
    pub fn from_json(json: &str) -> Result<Self, BalanceError> {
        serde_json::from_str(json).map_err(|e| BalanceError::InvalidSnapshot(e.to_string()))
    }

    /// Append a node and return its index
    pub fn push(&mut self, node: SnapshotNode) -> usize {
        self.nodes.push(node);
        self.nodes.len() - 1
    }

    pub fn index_of(&self, id: &str) -> Option<usize> {
        self.nodes.iter().position(|node| node.id == id)
    }

    /// Box handle for `id`; unknown ids give an empty box that measures as zero
    pub fn find(&self, id: &str) -> SnapshotBox<'_> {
        SnapshotBox {
            snapshot: self,
            index: self.index_of(id),
            depth: 0,
        }
    }

    pub fn height_of(&self, id: &str) -> Option<Px> {
        self.index_of(id).map(|index| self.nodes[index].offset_height)
    }

    /// Run the equalizer over this snapshot, writing the container's new height back
    pub fn equalize<S: AsRef<str>>(&mut self, container_id: &str, column_ids: &[S]) -> Equalization {
        let equalization = {
            let container = self.find(container_id);
            let columns: Vec<_> = column_ids.iter().map(|id| self.find(id.as_ref())).collect();
            plan(&container, &columns)
        };

        let index = self.index_of(container_id);
        let mut slot = NodeSlot {
            node: index.and_then(|i| self.nodes.get_mut(i)),
        };
        equalization.apply(&mut slot)
    }
}

/// Read-only handle to a node in a snapshot
#[derive(Debug, Clone, Copy)]
pub struct SnapshotBox<'a> {
    snapshot: &'a LayoutSnapshot,
    index: Option<usize>,
    // Number of parent links followed; bounds the walk when parents form a cycle
    depth: usize,
}

impl<'a> SnapshotBox<'a> {
    fn node(&self) -> Option<&'a SnapshotNode> {
        self.index.and_then(|i| self.snapshot.nodes.get(i))
    }

    pub fn is_present(&self) -> bool {
        self.node().is_some()
    }
}

impl LayoutBox for SnapshotBox<'_> {
    fn offset_height(&self) -> Px {
        self.node().map_or(0, |node| node.offset_height)
    }

    fn offset_top(&self) -> Px {
        self.node().map_or(0, |node| node.offset_top)
    }

    fn offset_parent(&self) -> Option<Self> {
        if self.depth >= self.snapshot.nodes.len() {
            return None;
        }

        let parent = self.node()?.parent?;
        if parent >= self.snapshot.nodes.len() {
            return None;
        }

        Some(SnapshotBox {
            snapshot: self.snapshot,
            index: Some(parent),
            depth: self.depth + 1,
        })
    }
}

struct NodeSlot<'a> {
    node: Option<&'a mut SnapshotNode>,
}

impl HeightTarget for NodeSlot<'_> {
    fn set_height(&mut self, height: Px) -> bool {
        match self.node.as_deref_mut() {
            Some(node) => {
                node.offset_height = height;
                true
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::document_bottom_of;

    #[test]
    fn test_missing_id_measures_zero() {
        let snapshot = LayoutSnapshot::new();
        let missing = snapshot.find("training");

        assert!(!missing.is_present());
        assert_eq!(document_bottom_of(&missing), 0);
    }

    #[test]
    fn test_dangling_parent_stops_walk() {
        let mut snapshot = LayoutSnapshot::new();
        snapshot.push(SnapshotNode::new("orphan", 15, 40, Some(7)));

        assert_eq!(document_bottom_of(&snapshot.find("orphan")), 40);
    }

    #[test]
    fn test_parent_cycle_terminates() {
        let mut snapshot = LayoutSnapshot::new();
        snapshot.push(SnapshotNode::new("a", 10, 5, Some(1)));
        snapshot.push(SnapshotNode::new("b", 20, 5, Some(0)));

        // a -> b -> a, cut after one link per node
        assert_eq!(document_bottom_of(&snapshot.find("a")), 35);
    }

    #[test]
    fn test_parses_camel_case_json() {
        let json = r#"{"nodes":[
            {"id":"body","offsetHeight":900},
            {"id":"homeColumns","offsetTop":200,"offsetHeight":100,"parent":0}
        ]}"#;

        let snapshot = LayoutSnapshot::from_json(json).unwrap();
        assert_eq!(snapshot.nodes[1].parent, Some(0));
        assert_eq!(snapshot.height_of("homeColumns"), Some(100));
    }

    #[test]
    fn test_rejects_malformed_json() {
        let err = LayoutSnapshot::from_json("{\"nodes\": 3}").unwrap_err();
        assert!(matches!(err, BalanceError::InvalidSnapshot(_)));
    }

    #[test]
    fn test_equalize_missing_container_is_noop() {
        let mut snapshot = LayoutSnapshot::new();
        let body = snapshot.push(SnapshotNode::new("body", 0, 900, None));
        snapshot.push(SnapshotNode::new("news", 30, 70, Some(body)));

        let result = snapshot.equalize("homeColumns", &["news"]);
        assert_eq!(result.needed, 100);
        assert_eq!(result.new_height, None);
        assert!(!result.is_change());
        assert_eq!(snapshot.nodes.len(), 2);
        assert_eq!(snapshot.height_of("news"), Some(70));
    }
}
