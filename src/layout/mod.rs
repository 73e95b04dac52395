// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Dendrite-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Dendrite and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Automatic node placement.
//!
//! Slot computation is pure: it inspects the document and returns where a new
//! node goes plus an optional push-down plan; `ops` applies both. Overlap is
//! only defended along the y axis — branches grow rightward and unrelated
//! branches at the same y can still collide in x (known limitation).

use crate::model::{Document, Node};

/// World-space gap between a parent's right border and its children.
pub const HORIZONTAL_SPACING: f64 = 5.0;

/// World-space gap between vertically stacked nodes.
pub const VERTICAL_SPACING: f64 = 3.0;

/// Where a new node goes, and what has to move to make room.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Slot {
    pub x: f64,
    pub y: f64,
    pub push_down: Option<PushDown>,
}

/// Plan to shift every node with `y >= threshold_y` down by `amount`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PushDown {
    pub threshold_y: f64,
    pub amount: f64,
}

/// Slot for a new child of `parent`: to the right of the parent box, aligned
/// with the parent when it is the first child, otherwise below the lowest
/// existing child with a push-down reserving the new node's height.
pub fn child_slot(doc: &Document, parent: &Node, new_height: usize) -> Slot {
    let x = parent.x + parent.width as f64 + HORIZONTAL_SPACING;

    let lowest_bottom = doc
        .children_of(&parent.id)
        .into_iter()
        .map(Node::bottom)
        .fold(None::<f64>, |acc, bottom| {
            Some(acc.map_or(bottom, |best| best.max(bottom)))
        });

    match lowest_bottom {
        None => Slot {
            x,
            y: parent.y,
            push_down: None,
        },
        Some(bottom) => {
            let y = bottom + VERTICAL_SPACING;
            Slot {
                x,
                y,
                push_down: Some(PushDown {
                    threshold_y: y,
                    amount: new_height as f64 + VERTICAL_SPACING,
                }),
            }
        }
    }
}

/// Slot for a new sibling of `anchor`: same column, directly below, always
/// with a push-down. Siblings of the root are not a valid request; callers
/// fall back to [`child_slot`] before getting here.
pub fn sibling_slot(anchor: &Node, new_height: usize) -> Slot {
    let y = anchor.bottom() + VERTICAL_SPACING;
    Slot {
        x: anchor.x,
        y,
        push_down: Some(PushDown {
            threshold_y: y,
            amount: new_height as f64 + VERTICAL_SPACING,
        }),
    }
}

/// Convenience used by `ops`: resolve the slot's world position after
/// applying its own push-down (the new node itself must not be shifted, so
/// the plan is applied before insertion).
pub fn apply_push_down(doc: &mut Document, slot: &Slot) {
    if let Some(push) = slot.push_down {
        doc.shift_nodes_below(push.threshold_y, push.amount);
    }
}

#[cfg(test)]
mod tests {
    use super::{child_slot, sibling_slot, HORIZONTAL_SPACING, VERTICAL_SPACING};
    use crate::model::{Document, Node, NodeId};

    fn node_at(doc: &mut Document, raw: &str, parent: Option<&str>, y: f64) -> NodeId {
        let id = NodeId::new(raw).expect("id");
        let mut node = Node::new(id.clone(), raw, 20.0, y);
        node.parent_id = parent.map(|p| NodeId::new(p).expect("parent id"));
        doc.insert_node(node);
        id
    }

    #[test]
    fn first_child_aligns_with_parent() {
        let doc = Document::new();
        let root = doc.node(&NodeId::root()).expect("root").clone();

        let slot = child_slot(&doc, &root, 3);
        assert_eq!(slot.x, root.x + root.width as f64 + HORIZONTAL_SPACING);
        assert_eq!(slot.y, root.y);
        assert!(slot.push_down.is_none());
    }

    #[test]
    fn later_children_stack_below_the_lowest() {
        let mut doc = Document::new();
        node_at(&mut doc, "1", Some("0"), 0.0);
        node_at(&mut doc, "2", Some("0"), 6.0);
        let root = doc.node(&NodeId::root()).expect("root").clone();

        // Lowest child bottom is 6 + 3 = 9.
        let slot = child_slot(&doc, &root, 5);
        assert_eq!(slot.y, 9.0 + VERTICAL_SPACING);
        let push = slot.push_down.expect("push-down");
        assert_eq!(push.threshold_y, slot.y);
        assert_eq!(push.amount, 5.0 + VERTICAL_SPACING);
    }

    #[test]
    fn sibling_goes_directly_below_the_anchor() {
        let mut doc = Document::new();
        let id = node_at(&mut doc, "1", Some("0"), 4.0);
        let anchor = doc.node(&id).expect("anchor").clone();

        let slot = sibling_slot(&anchor, 3);
        assert_eq!(slot.x, anchor.x);
        assert_eq!(slot.y, anchor.bottom() + VERTICAL_SPACING);
        assert_eq!(
            slot.push_down.expect("push-down").amount,
            3.0 + VERTICAL_SPACING
        );
    }
}
