// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Dendrite-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Dendrite and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Read-only selection queries.
//!
//! Directional selection maps a unit axis direction onto the best candidate
//! node by on-screen intent; cyclic selection walks the stable id order.

use crate::model::{Document, NodeId};

/// Misaligned candidates pay double for perpendicular distance, so visually
/// aligned nodes beat merely-closer ones.
const PERPENDICULAR_WEIGHT: f64 = 2.0;

/// Picks the best node in the direction `(dx, dy)` (one of the four unit axis
/// directions) from the currently selected node.
///
/// Candidates are compared by their centers: eligible only when strictly on
/// the requested side along the dominant axis, scored
/// `perpendicular * 2 + axial`, lowest wins, ties to the first candidate in
/// iteration order. Returns `None` (selection unchanged) when nothing is
/// eligible or the selection is missing.
pub fn select_in_direction(doc: &Document, dx: f64, dy: f64) -> Option<NodeId> {
    let selected_id = doc.selected()?;
    let selected = doc.node(selected_id)?;
    let (cx, cy) = selected.center();

    let mut best: Option<(f64, &NodeId)> = None;

    for (id, node) in doc.nodes() {
        if id == selected_id {
            continue;
        }

        let (nx, ny) = node.center();
        let rel_x = nx - cx;
        let rel_y = ny - cy;

        let (axial, perpendicular) = if dx != 0.0 {
            if (dx > 0.0 && rel_x > 0.0) || (dx < 0.0 && rel_x < 0.0) {
                (rel_x.abs(), rel_y.abs())
            } else {
                continue;
            }
        } else if dy != 0.0 {
            if (dy > 0.0 && rel_y > 0.0) || (dy < 0.0 && rel_y < 0.0) {
                (rel_y.abs(), rel_x.abs())
            } else {
                continue;
            }
        } else {
            continue;
        };

        let score = perpendicular * PERPENDICULAR_WEIGHT + axial;
        if best.map_or(true, |(best_score, _)| score < best_score) {
            best = Some((score, id));
        }
    }

    best.map(|(_, id)| id.clone())
}

/// Next node id in stable order, wrapping at the end. A missing or absent
/// selection starts from the first id.
pub fn cycle_next(doc: &Document) -> Option<NodeId> {
    let ids: Vec<&NodeId> = doc.nodes().keys().collect();
    if ids.is_empty() {
        return None;
    }

    let current = doc
        .selected()
        .and_then(|selected| ids.iter().position(|id| *id == selected));
    let next = match current {
        Some(idx) => (idx + 1) % ids.len(),
        None => 0,
    };
    Some(ids[next].clone())
}

/// Previous node id in stable order, wrapping at the start.
pub fn cycle_prev(doc: &Document) -> Option<NodeId> {
    let ids: Vec<&NodeId> = doc.nodes().keys().collect();
    if ids.is_empty() {
        return None;
    }

    let current = doc
        .selected()
        .and_then(|selected| ids.iter().position(|id| *id == selected));
    let prev = match current {
        Some(idx) if idx > 0 => idx - 1,
        _ => ids.len() - 1,
    };
    Some(ids[prev].clone())
}

#[cfg(test)]
mod tests;
