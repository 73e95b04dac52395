// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Dendrite-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Dendrite and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Scene composition.
//!
//! Painting order is fixed: every edge first, then every node box, so boxes
//! occlude edge endpoints. Edge anchors sit on box borders, not centers.

use ratatui::style::Color;

use super::{curve, parse_hex_color, Canvas};
use crate::model::{wrap_text, Document, Node, NODE_TEXT_WRAP_WIDTH};

/// Nodes whose scaled box drops below 3x2 degrade to this marker.
const MARKER: char = '●';
/// Drawn two cells left of a selected node's origin.
const SELECTION_POINTER: char = '▶';

struct BorderGlyphs {
    horizontal: char,
    vertical: char,
    top_left: char,
    top_right: char,
    bottom_left: char,
    bottom_right: char,
}

const SELECTED_BORDER: BorderGlyphs = BorderGlyphs {
    horizontal: '━',
    vertical: '┃',
    top_left: '┏',
    top_right: '┓',
    bottom_left: '┗',
    bottom_right: '┛',
};

const NORMAL_BORDER: BorderGlyphs = BorderGlyphs {
    horizontal: '─',
    vertical: '│',
    top_left: '╭',
    top_right: '╮',
    bottom_left: '╰',
    bottom_right: '╯',
};

/// Rasterizes one frame of the document onto a fresh canvas.
pub fn render_scene(doc: &Document, width: usize, height: usize) -> Canvas {
    let mut canvas = Canvas::new(width, height);
    draw_edges(doc, &mut canvas);
    draw_nodes(doc, &mut canvas);
    canvas
}

fn draw_edges(doc: &Document, canvas: &mut Canvas) {
    for edge in doc.edges() {
        // Dangling endpoints are tolerated in storage, skipped here.
        let (Some(from), Some(to)) = (doc.node(&edge.from), doc.node(&edge.to)) else {
            continue;
        };
        draw_edge(doc, canvas, from, to);
    }
}

fn draw_edge(doc: &Document, canvas: &mut Canvas, from: &Node, to: &Node) {
    let (from_cx, from_cy) = from.center();
    let (to_cx, to_cy) = to.center();

    // Horizontal neighbors connect right-edge to left-edge (or mirrored);
    // exact x alignment falls through to vertical attachment.
    let (fx, fy, tx, ty) = if to_cx > from_cx {
        (from.x + from.width as f64, from_cy, to.x, to_cy)
    } else if to_cx < from_cx {
        (from.x, from_cy, to.x + to.width as f64, to_cy)
    } else if to_cy > from_cy {
        (from_cx, from.y + from.height as f64, to_cx, to.y)
    } else {
        (from_cx, from.y, to_cx, to.y + to.height as f64)
    };

    let camera = doc.camera();
    let (sx1, sy1) = camera.world_to_screen(fx, fy, canvas.width(), canvas.height());
    let (sx2, sy2) = camera.world_to_screen(tx, ty, canvas.width(), canvas.height());

    let color = branch_color(to);
    curve::draw_curve(canvas, sx1, sy1, sx2, sy2, color);
}

fn draw_nodes(doc: &Document, canvas: &mut Canvas) {
    for (id, node) in doc.nodes() {
        let selected = doc.selected() == Some(id);
        draw_node(doc, canvas, node, selected);
    }
}

fn draw_node(doc: &Document, canvas: &mut Canvas, node: &Node, selected: bool) {
    let camera = doc.camera();
    let (sx, sy) = camera.world_to_screen(node.x, node.y, canvas.width(), canvas.height());

    // A node whose origin row left the grid is skipped wholesale.
    if sy < 0 || sy >= canvas.height() as i32 {
        return;
    }

    let width = (node.width as f64 * camera.zoom) as i32;
    let height = (node.height as f64 * camera.zoom) as i32;
    let color = branch_color(node);

    if width < 3 || height < 2 {
        canvas.put(sx, sy, MARKER, color);
        return;
    }

    let border = if selected {
        &SELECTED_BORDER
    } else {
        &NORMAL_BORDER
    };

    if selected {
        canvas.put(sx - 2, sy, SELECTION_POINTER, color);
    }

    // Top border.
    canvas.put(sx, sy, border.top_left, color);
    for x in (sx + 1)..(sx + width - 1) {
        canvas.put(x, sy, border.horizontal, color);
    }
    canvas.put(sx + width - 1, sy, border.top_right, color);

    // Interior rows: border, padding column, clipped text, padding, border.
    // Text re-wraps at the fixed budget regardless of zoom and truncates to
    // the scaled interior width.
    let lines = wrap_text(&node.text, NODE_TEXT_WRAP_WIDTH);
    let interior_width = (width - 4).max(0) as usize;
    for row in 1..(height - 1) {
        let y = sy + row;

        canvas.put(sx, y, border.vertical, color);
        canvas.put(sx + 1, y, ' ', None);

        if let Some(line) = lines.get((row - 1) as usize) {
            for (i, ch) in line.chars().take(interior_width).enumerate() {
                canvas.put(sx + 2 + i as i32, y, ch, color);
            }
        }

        canvas.put(sx + width - 2, y, ' ', None);
        canvas.put(sx + width - 1, y, border.vertical, color);
    }

    // Bottom border.
    let bottom = sy + height - 1;
    canvas.put(sx, bottom, border.bottom_left, color);
    for x in (sx + 1)..(sx + width - 1) {
        canvas.put(x, bottom, border.horizontal, color);
    }
    canvas.put(sx + width - 1, bottom, border.bottom_right, color);
}

fn branch_color(node: &Node) -> Option<Color> {
    node.color.as_deref().and_then(parse_hex_color)
}
