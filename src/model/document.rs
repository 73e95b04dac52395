// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Dendrite-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Dendrite and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::collections::BTreeMap;

use super::camera::Camera;
use super::ids::NodeId;
use super::node::{Edge, Node};

/// Branch colors cycled for direct children of the root.
pub const BRANCH_PALETTE: [&str; 8] = [
    "#FF6B6B", // red
    "#4ECDC4", // cyan
    "#45B7D1", // blue
    "#FFA07A", // light salmon
    "#98D8C8", // mint
    "#F7DC6F", // yellow
    "#BB8FCE", // purple
    "#85C1E2", // sky blue
];

const ROOT_TEXT: &str = "Root Idea";

/// The single in-memory mind map.
///
/// Node iteration order is the `BTreeMap` key order; the cyclic selector
/// relies on it being stable, nothing else does.
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    nodes: BTreeMap<NodeId, Node>,
    edges: Vec<Edge>,
    camera: Camera,
    selected: Option<NodeId>,
    next_id: u64,
    palette_cursor: usize,
}

impl Document {
    /// A fresh document seeded with the root node at the world origin.
    pub fn new() -> Self {
        let root = Node::new(NodeId::root(), ROOT_TEXT, 0.0, 0.0);
        let mut nodes = BTreeMap::new();
        nodes.insert(root.id.clone(), root);
        Self {
            nodes,
            edges: Vec::new(),
            camera: Camera::new(),
            selected: Some(NodeId::root()),
            next_id: 1,
            palette_cursor: 0,
        }
    }

    /// Rebuilds a document from deserialized parts.
    ///
    /// Stored box sizes are never trusted (recomputed from text), the id
    /// counter reseeds to one past the largest numeric id, the camera
    /// re-anchors its targets (no motion on load), and selection falls back
    /// to the first node in key order.
    pub fn from_parts(
        mut nodes: BTreeMap<NodeId, Node>,
        edges: Vec<Edge>,
        mut camera: Camera,
    ) -> Self {
        for node in nodes.values_mut() {
            node.update_size();
        }
        camera.anchor_targets();

        let next_id = nodes
            .keys()
            .filter_map(NodeId::as_number)
            .max()
            .unwrap_or(0)
            + 1;
        let selected = nodes.keys().next().cloned();

        Self {
            nodes,
            edges,
            camera,
            selected,
            next_id,
            palette_cursor: 0,
        }
    }

    pub fn nodes(&self) -> &BTreeMap<NodeId, Node> {
        &self.nodes
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    pub fn camera_mut(&mut self) -> &mut Camera {
        &mut self.camera
    }

    pub fn set_camera(&mut self, camera: Camera) {
        self.camera = camera;
    }

    pub fn node(&self, id: &NodeId) -> Option<&Node> {
        self.nodes.get(id)
    }

    pub fn node_mut(&mut self, id: &NodeId) -> Option<&mut Node> {
        self.nodes.get_mut(id)
    }

    pub fn selected(&self) -> Option<&NodeId> {
        self.selected.as_ref()
    }

    pub fn selected_node(&self) -> Option<&Node> {
        self.selected.as_ref().and_then(|id| self.nodes.get(id))
    }

    pub fn set_selected(&mut self, id: Option<NodeId>) {
        self.selected = id;
    }

    /// All nodes whose parent id equals `parent`, in key order.
    pub fn children_of<'doc>(&'doc self, parent: &NodeId) -> Vec<&'doc Node> {
        self.nodes
            .values()
            .filter(|node| node.parent_id.as_ref() == Some(parent))
            .collect()
    }

    /// Hands out the next engine-assigned id.
    pub fn allocate_id(&mut self) -> NodeId {
        let id = NodeId::from_counter(self.next_id);
        self.next_id += 1;
        id
    }

    /// Next branch color for a direct child of the root; advances the cursor.
    pub fn next_branch_color(&mut self) -> String {
        let color = BRANCH_PALETTE[self.palette_cursor % BRANCH_PALETTE.len()];
        self.palette_cursor += 1;
        color.to_owned()
    }

    /// The palette cursor is process state: carried across in-session loads,
    /// never persisted.
    pub fn palette_cursor(&self) -> usize {
        self.palette_cursor
    }

    pub fn set_palette_cursor(&mut self, cursor: usize) {
        self.palette_cursor = cursor;
    }

    pub fn insert_node(&mut self, node: Node) {
        self.nodes.insert(node.id.clone(), node);
    }

    pub fn remove_node(&mut self, id: &NodeId) -> Option<Node> {
        self.nodes.remove(id)
    }

    pub fn has_edge(&self, from: &NodeId, to: &NodeId) -> bool {
        self.edges
            .iter()
            .any(|edge| edge.from == *from && edge.to == *to)
    }

    pub fn push_edge(&mut self, edge: Edge) {
        self.edges.push(edge);
    }

    pub fn retain_edges(&mut self, keep: impl FnMut(&Edge) -> bool) {
        self.edges.retain(keep);
    }

    /// Push-down: shifts every node at or below `threshold_y` down by
    /// `amount`. Unconditional across branches; nodes in unrelated branches
    /// at the same y can still collide in x (known limitation).
    pub fn shift_nodes_below(&mut self, threshold_y: f64, amount: f64) {
        for node in self.nodes.values_mut() {
            if node.y >= threshold_y {
                node.y += amount;
            }
        }
    }

    /// First node id in key order, used for selection fallback.
    pub fn first_node_id(&self) -> Option<NodeId> {
        self.nodes.keys().next().cloned()
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::{Document, BRANCH_PALETTE};
    use crate::model::{Camera, Node, NodeId};
    use std::collections::BTreeMap;

    #[test]
    fn new_document_seeds_the_root() {
        let doc = Document::new();
        assert_eq!(doc.nodes().len(), 1);
        let root = doc.node(&NodeId::root()).expect("root");
        assert_eq!(root.text, "Root Idea");
        assert_eq!(doc.selected(), Some(&NodeId::root()));
    }

    #[test]
    fn allocated_ids_increase() {
        let mut doc = Document::new();
        assert_eq!(doc.allocate_id().as_str(), "1");
        assert_eq!(doc.allocate_id().as_str(), "2");
    }

    #[test]
    fn branch_colors_cycle_through_the_palette() {
        let mut doc = Document::new();
        for k in 0..(BRANCH_PALETTE.len() + 2) {
            assert_eq!(
                doc.next_branch_color(),
                BRANCH_PALETTE[k % BRANCH_PALETTE.len()]
            );
        }
    }

    #[test]
    fn from_parts_reseeds_counter_past_max_numeric_id() {
        let mut nodes = BTreeMap::new();
        for raw in ["0", "7", "3", "branch-a"] {
            let id = NodeId::new(raw).expect("id");
            nodes.insert(id.clone(), Node::new(id, raw, 0.0, 0.0));
        }
        let mut doc = Document::from_parts(nodes, Vec::new(), Camera::new());
        assert_eq!(doc.allocate_id().as_str(), "8");
    }

    #[test]
    fn from_parts_recomputes_sizes_and_anchors_camera() {
        let id = NodeId::root();
        let mut node = Node::new(id.clone(), "short", 0.0, 0.0);
        node.width = 99;
        node.height = 42;
        let mut nodes = BTreeMap::new();
        nodes.insert(id.clone(), node);

        let mut camera = Camera::new();
        camera.x = 12.0;
        camera.zoom = 2.0;
        // Deserialized cameras carry default (zeroed) targets.
        camera.target_x = 0.0;
        camera.target_zoom = 0.0;

        let doc = Document::from_parts(nodes, Vec::new(), camera);
        let node = doc.node(&id).expect("node");
        assert_eq!((node.width, node.height), (10, 3));
        assert_eq!(doc.camera().target_x, 12.0);
        assert_eq!(doc.camera().target_zoom, 2.0);
        assert_eq!(doc.selected(), Some(&id));
    }

    #[test]
    fn shift_nodes_below_moves_only_at_or_below_threshold() {
        let mut doc = Document::new();
        for (raw, y) in [("1", 5.0), ("2", 10.0), ("3", 4.9)] {
            let id = NodeId::new(raw).expect("id");
            doc.insert_node(Node::new(id, raw, 0.0, y));
        }
        doc.shift_nodes_below(5.0, 6.0);
        assert_eq!(doc.node(&NodeId::new("1").expect("id")).expect("n").y, 11.0);
        assert_eq!(doc.node(&NodeId::new("2").expect("id")).expect("n").y, 16.0);
        assert_eq!(doc.node(&NodeId::new("3").expect("id")).expect("n").y, 4.9);
    }
}
