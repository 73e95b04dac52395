// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Dendrite-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Dendrite and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use super::{cycle_next, cycle_prev, select_in_direction};
use crate::model::{Document, Node, NodeId};

/// Inserts a single-line node whose *center* lands on `(cx, cy)`.
fn node_centered(doc: &mut Document, raw: &str, cx: f64, cy: f64) -> NodeId {
    let id = NodeId::new(raw).expect("id");
    let mut node = Node::new(id.clone(), raw, 0.0, 0.0);
    node.x = cx - node.width as f64 / 2.0;
    node.y = cy - node.height as f64 / 2.0;
    doc.insert_node(node);
    id
}

fn empty_document() -> Document {
    let mut doc = Document::new();
    doc.remove_node(&NodeId::root());
    doc.set_selected(None);
    doc
}

#[test]
fn right_prefers_aligned_over_closer_misaligned() {
    let mut doc = empty_document();
    let a = node_centered(&mut doc, "a", 0.0, 0.0);
    let b = node_centered(&mut doc, "b", 5.0, 0.0);
    node_centered(&mut doc, "c", 5.0, 3.0);
    doc.set_selected(Some(a));

    // b scores 5, c scores 3*2 + 5 = 11.
    assert_eq!(select_in_direction(&doc, 1.0, 0.0), Some(b));
}

#[test]
fn candidates_must_be_strictly_on_the_requested_side() {
    let mut doc = empty_document();
    let a = node_centered(&mut doc, "a", 0.0, 0.0);
    node_centered(&mut doc, "b", 0.0, 5.0); // same center x
    doc.set_selected(Some(a));

    assert_eq!(select_in_direction(&doc, 1.0, 0.0), None);
    assert_eq!(select_in_direction(&doc, -1.0, 0.0), None);
}

#[test]
fn vertical_movement_scores_x_as_perpendicular() {
    let mut doc = empty_document();
    let a = node_centered(&mut doc, "a", 0.0, 0.0);
    let b = node_centered(&mut doc, "b", 0.0, 8.0);
    node_centered(&mut doc, "c", 4.0, 4.0); // score 4*2 + 4 = 12 vs b's 8
    doc.set_selected(Some(a));

    assert_eq!(select_in_direction(&doc, 0.0, 1.0), Some(b));
}

#[test]
fn no_eligible_candidate_returns_none() {
    let mut doc = empty_document();
    let a = node_centered(&mut doc, "a", 0.0, 0.0);
    node_centered(&mut doc, "b", 10.0, 0.0);
    doc.set_selected(Some(a));

    assert_eq!(select_in_direction(&doc, -1.0, 0.0), None);
    assert_eq!(select_in_direction(&doc, 0.0, -1.0), None);
}

#[test]
fn stale_selection_yields_none() {
    let mut doc = empty_document();
    node_centered(&mut doc, "a", 0.0, 0.0);
    doc.set_selected(Some(NodeId::new("gone").expect("id")));

    assert_eq!(select_in_direction(&doc, 1.0, 0.0), None);
}

#[test]
fn cycle_wraps_at_both_ends() {
    let mut doc = empty_document();
    let a = node_centered(&mut doc, "a", 0.0, 0.0);
    let b = node_centered(&mut doc, "b", 5.0, 0.0);
    let c = node_centered(&mut doc, "c", 9.0, 0.0);

    doc.set_selected(Some(c.clone()));
    assert_eq!(cycle_next(&doc), Some(a.clone()));

    doc.set_selected(Some(a.clone()));
    assert_eq!(cycle_prev(&doc), Some(c));
    assert_eq!(cycle_next(&doc), Some(b));
}

#[test]
fn cycle_with_missing_selection_starts_at_the_edges() {
    let mut doc = empty_document();
    let a = node_centered(&mut doc, "a", 0.0, 0.0);
    let b = node_centered(&mut doc, "b", 5.0, 0.0);
    doc.set_selected(None);

    assert_eq!(cycle_next(&doc), Some(a));
    assert_eq!(cycle_prev(&doc), Some(b));
}

#[test]
fn cycle_on_empty_document_is_none() {
    let doc = empty_document();
    assert_eq!(cycle_next(&doc), None);
    assert_eq!(cycle_prev(&doc), None);
}
