// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Dendrite-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Dendrite and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Document mutations.
//!
//! Every operation either applies fully or leaves the document unchanged and
//! returns an [`OpError`]; nothing here is fatal — the TUI turns errors into
//! status text.

use std::fmt;

use crate::layout;
use crate::model::{node_size, Document, Edge, Node, NodeId};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OpError {
    /// The root node cannot be deleted.
    RootProtected,
    SelfLink { id: NodeId },
    DuplicateEdge { from: NodeId, to: NodeId },
    MissingNode { id: NodeId },
}

impl fmt::Display for OpError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::RootProtected => f.write_str("cannot delete root node"),
            Self::SelfLink { id } => write!(f, "cannot link node {id} to itself"),
            Self::DuplicateEdge { from, to } => {
                write!(f, "edge {from} \u{2192} {to} already exists")
            }
            Self::MissingNode { id } => write!(f, "no node with id {id}"),
        }
    }
}

impl std::error::Error for OpError {}

/// Creates a child of `anchor`, placed by [`layout::child_slot`], and selects
/// it. Children of the root draw the next branch color; everyone else
/// inherits the parent's. The parent→child edge is created automatically.
pub fn create_child(doc: &mut Document, anchor: &NodeId, text: &str) -> Result<NodeId, OpError> {
    let parent = doc
        .node(anchor)
        .cloned()
        .ok_or_else(|| OpError::MissingNode { id: anchor.clone() })?;

    let (_, height) = node_size(text);
    let slot = layout::child_slot(doc, &parent, height);
    // Push-down happens before insertion so the new node itself stays put.
    layout::apply_push_down(doc, &slot);

    let id = doc.allocate_id();
    let mut node = Node::new(id.clone(), text, slot.x, slot.y);
    node.parent_id = Some(parent.id.clone());
    node.color = if parent.id.is_root() {
        Some(doc.next_branch_color())
    } else {
        parent.color.clone()
    };
    doc.insert_node(node);

    // A fresh id cannot collide with an existing edge.
    let _ = link(doc, &parent.id, &id);
    doc.set_selected(Some(id.clone()));
    Ok(id)
}

/// Creates a sibling of `anchor` directly below it, in the same column, with
/// the same parent, and selects it. The root has no siblings; the request
/// falls back to child creation.
pub fn create_sibling(doc: &mut Document, anchor: &NodeId, text: &str) -> Result<NodeId, OpError> {
    let anchor_node = doc
        .node(anchor)
        .cloned()
        .ok_or_else(|| OpError::MissingNode { id: anchor.clone() })?;

    if anchor_node.id.is_root() {
        return create_child(doc, anchor, text);
    }

    let (_, height) = node_size(text);
    let slot = layout::sibling_slot(&anchor_node, height);
    layout::apply_push_down(doc, &slot);

    let id = doc.allocate_id();
    let mut node = Node::new(id.clone(), text, slot.x, slot.y);
    node.parent_id = anchor_node.parent_id.clone();
    node.color = match &anchor_node.parent_id {
        // A new branch directly under the root gets its own color.
        Some(parent_id) if parent_id.is_root() => Some(doc.next_branch_color()),
        _ => anchor_node.color.clone(),
    };
    doc.insert_node(node);

    if let Some(parent_id) = &anchor_node.parent_id {
        let _ = link(doc, parent_id, &id);
    }
    doc.set_selected(Some(id.clone()));
    Ok(id)
}

/// Replaces a node's text and recomputes its box size.
pub fn set_text(doc: &mut Document, id: &NodeId, text: &str) -> Result<(), OpError> {
    let node = doc
        .node_mut(id)
        .ok_or_else(|| OpError::MissingNode { id: id.clone() })?;
    node.text = text.to_owned();
    node.update_size();
    Ok(())
}

/// Deletes a node, sweeps every edge referencing it, and reassigns selection
/// when the deleted node was selected. Descendants are not cascaded; their
/// parent ids dangle and every consumer tolerates that.
pub fn delete_node(doc: &mut Document, id: &NodeId) -> Result<(), OpError> {
    if id.is_root() {
        return Err(OpError::RootProtected);
    }
    if doc.remove_node(id).is_none() {
        return Err(OpError::MissingNode { id: id.clone() });
    }

    doc.retain_edges(|edge| edge.from != *id && edge.to != *id);

    if doc.selected() == Some(id) {
        let fallback = doc.first_node_id();
        doc.set_selected(fallback);
    }
    Ok(())
}

/// Records a directed link. Self-links and duplicate ordered pairs are
/// rejected; dangling endpoints are allowed (storage tolerates them).
pub fn link(doc: &mut Document, from: &NodeId, to: &NodeId) -> Result<(), OpError> {
    if from == to {
        return Err(OpError::SelfLink { id: from.clone() });
    }
    if doc.has_edge(from, to) {
        return Err(OpError::DuplicateEdge {
            from: from.clone(),
            to: to.clone(),
        });
    }

    doc.push_edge(Edge {
        from: from.clone(),
        to: to.clone(),
    });
    if let Some(node) = doc.node_mut(from) {
        node.links.push(to.clone());
    }
    Ok(())
}
