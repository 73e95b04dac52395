// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Dendrite-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Dendrite and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Curved connector rasterization.
//!
//! A connector is a cubic Bézier between two border points, sampled into
//! short straight segments; each segment is filled with Bresenham and every
//! plotted cell takes a glyph from its segment's slope class. Cells are only
//! written while blank, so earlier edges win collisions.

use ratatui::style::Color;

use super::Canvas;

/// Control points sit this fraction of the endpoint distance out...
const CONTROL_OFFSET_RATIO: f64 = 0.4;
/// ...capped at this many screen cells.
const MAX_CONTROL_OFFSET: f64 = 30.0;
/// Sampling floor so short connectors still bend smoothly.
const MIN_SAMPLE_STEPS: usize = 10;

/// Draws a curved connector from `(x1, y1)` to `(x2, y2)` in screen cells.
///
/// Control points push along the travel axis: horizontally for mostly
/// horizontal links, vertically (signed toward the target) when the link is
/// more vertical than horizontal.
pub fn draw_curve(canvas: &mut Canvas, x1: i32, y1: i32, x2: i32, y2: i32, color: Option<Color>) {
    let dx = (x2 - x1) as f64;
    let dy = (y2 - y1) as f64;
    let dist = (dx * dx + dy * dy).sqrt();
    let offset = (dist * CONTROL_OFFSET_RATIO).min(MAX_CONTROL_OFFSET);

    let (cp1x, cp1y, cp2x, cp2y) = if dy.abs() > dx.abs() {
        let sign = if dy < 0.0 { -1.0 } else { 1.0 };
        (
            x1 as f64,
            y1 as f64 + offset * sign,
            x2 as f64,
            y2 as f64 - offset * sign,
        )
    } else {
        (x1 as f64 + offset, y1 as f64, x2 as f64 - offset, y2 as f64)
    };

    let steps = ((dist * 2.0) as usize).max(MIN_SAMPLE_STEPS);

    let (mut prev_x, mut prev_y) = (x1, y1);
    for i in 0..=steps {
        let t = i as f64 / steps as f64;
        let omt = 1.0 - t;
        let omt2 = omt * omt;
        let omt3 = omt2 * omt;
        let t2 = t * t;
        let t3 = t2 * t;

        let x = omt3 * x1 as f64 + 3.0 * omt2 * t * cp1x + 3.0 * omt * t2 * cp2x + t3 * x2 as f64;
        let y = omt3 * y1 as f64 + 3.0 * omt2 * t * cp1y + 3.0 * omt * t2 * cp2y + t3 * y2 as f64;

        let (cur_x, cur_y) = (x.round() as i32, y.round() as i32);
        draw_segment(canvas, prev_x, prev_y, cur_x, cur_y, color);
        (prev_x, prev_y) = (cur_x, cur_y);
    }
}

/// Plots one straight sample-to-sample segment; all of its cells share the
/// glyph picked from the segment's overall direction.
fn draw_segment(canvas: &mut Canvas, x1: i32, y1: i32, x2: i32, y2: i32, color: Option<Color>) {
    let dx = x2 - x1;
    let dy = y2 - y1;
    let glyph = segment_glyph(dx, dy);

    canvas.put_if_blank(x1, y1, glyph, color);
    if dx == 0 && dy == 0 {
        return;
    }

    let abs_dx = dx.abs();
    let abs_dy = dy.abs();
    let step_x = if x1 < x2 { 1 } else { -1 };
    let step_y = if y1 < y2 { 1 } else { -1 };

    let mut err = abs_dx - abs_dy;
    let (mut x, mut y) = (x1, y1);
    while x != x2 || y != y2 {
        let e2 = 2 * err;
        if e2 > -abs_dy {
            err -= abs_dy;
            x += step_x;
        }
        if e2 < abs_dx {
            err += abs_dx;
            y += step_y;
        }
        canvas.put_if_blank(x, y, glyph, color);
    }
}

/// Slope classification: mostly-horizontal, mostly-vertical, or one of the
/// two diagonals by slope sign. Degenerate segments plot a dot.
fn segment_glyph(dx: i32, dy: i32) -> char {
    if dx == 0 && dy == 0 {
        return '\u{b7}'; // ·
    }

    let abs_dx = dx.abs();
    let abs_dy = dy.abs();
    if abs_dx > 2 * abs_dy {
        return '─';
    }
    if abs_dy > 2 * abs_dx {
        return '│';
    }
    if (dx > 0 && dy < 0) || (dx < 0 && dy > 0) {
        '╱'
    } else {
        '╲'
    }
}

#[cfg(test)]
mod tests {
    use super::{draw_curve, segment_glyph};
    use crate::render::Canvas;

    #[test]
    fn slope_classes_pick_the_expected_glyphs() {
        assert_eq!(segment_glyph(0, 0), '·');
        assert_eq!(segment_glyph(5, 0), '─');
        assert_eq!(segment_glyph(5, 2), '─');
        assert_eq!(segment_glyph(0, 5), '│');
        assert_eq!(segment_glyph(-2, 5), '│');
        assert_eq!(segment_glyph(3, -3), '╱');
        assert_eq!(segment_glyph(-3, 3), '╱');
        assert_eq!(segment_glyph(3, 3), '╲');
        assert_eq!(segment_glyph(-3, -3), '╲');
    }

    #[test]
    fn horizontal_curve_degenerates_to_a_straight_run() {
        let mut canvas = Canvas::new(16, 3);
        draw_curve(&mut canvas, 2, 1, 12, 1, None);

        // The zero-length opening sample plots a dot; the rest of the row is
        // horizontal line art.
        assert_eq!(canvas.get(2, 1).map(|cell| cell.ch), Some('·'));
        for x in 3..=12 {
            assert_eq!(canvas.get(x, 1).map(|cell| cell.ch), Some('─'), "x={x}");
        }
        assert_eq!(canvas.get(13, 1).map(|cell| cell.ch), Some(' '));
        assert_eq!(canvas.get(2, 0).map(|cell| cell.ch), Some(' '));
    }

    #[test]
    fn vertical_curve_stays_in_its_column() {
        let mut canvas = Canvas::new(5, 16);
        draw_curve(&mut canvas, 2, 1, 2, 13, None);

        for y in 2..=13 {
            assert_eq!(canvas.get(2, y).map(|cell| cell.ch), Some('│'), "y={y}");
        }
        assert!(canvas.get(1, 7).map(|cell| cell.is_blank()).unwrap());
        assert!(canvas.get(3, 7).map(|cell| cell.is_blank()).unwrap());
    }

    #[test]
    fn occupied_cells_are_never_repainted() {
        let mut canvas = Canvas::new(16, 3);
        canvas.put(6, 1, 'X', None);
        draw_curve(&mut canvas, 2, 1, 12, 1, None);
        assert_eq!(canvas.get(6, 1).map(|cell| cell.ch), Some('X'));
    }

    #[test]
    fn curves_clip_at_the_grid_border() {
        let mut canvas = Canvas::new(6, 3);
        draw_curve(&mut canvas, -4, 1, 9, 1, None);
        for x in 0..6 {
            assert_eq!(canvas.get(x, 1).map(|cell| cell.ch), Some('─'), "x={x}");
        }
    }
}
