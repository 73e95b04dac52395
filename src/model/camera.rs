// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Dendrite-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Dendrite and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Viewport into world space.
//!
//! Pan/zoom requests mutate targets only; the visible position follows via
//! [`Camera::update`] ticks. Targets are not serialized and must be
//! re-anchored after deserialization.

use serde::{Deserialize, Serialize};

pub const MIN_ZOOM: f64 = 0.25;
pub const MAX_ZOOM: f64 = 4.0;
pub const ZOOM_IN_FACTOR: f64 = 1.2;
pub const ZOOM_OUT_FACTOR: f64 = 0.8;

/// Remaining distance below which interpolation snaps to the target.
const SETTLE_THRESHOLD: f64 = 0.001;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Camera {
    pub x: f64,
    pub y: f64,
    pub zoom: f64,
    #[serde(skip)]
    pub target_x: f64,
    #[serde(skip)]
    pub target_y: f64,
    #[serde(skip)]
    pub target_zoom: f64,
}

impl Default for Camera {
    fn default() -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            zoom: 1.0,
            target_x: 0.0,
            target_y: 0.0,
            target_zoom: 1.0,
        }
    }
}

impl Camera {
    pub fn new() -> Self {
        Self::default()
    }

    /// World point to the nearest integer screen cell, centering the viewport
    /// on the camera position and scaling by zoom.
    pub fn world_to_screen(
        &self,
        wx: f64,
        wy: f64,
        viewport_w: usize,
        viewport_h: usize,
    ) -> (i32, i32) {
        let sx = (wx - self.x) * self.zoom + viewport_w as f64 / 2.0;
        let sy = (wy - self.y) * self.zoom + viewport_h as f64 / 2.0;
        (sx.round() as i32, sy.round() as i32)
    }

    /// Exact inverse of [`Camera::world_to_screen`] for the same zoom/offset.
    pub fn screen_to_world(
        &self,
        sx: i32,
        sy: i32,
        viewport_w: usize,
        viewport_h: usize,
    ) -> (f64, f64) {
        let wx = (sx as f64 - viewport_w as f64 / 2.0) / self.zoom + self.x;
        let wy = (sy as f64 - viewport_h as f64 / 2.0) / self.zoom + self.y;
        (wx, wy)
    }

    /// Moves the pan target; the visible position catches up on ticks.
    pub fn pan(&mut self, dx: f64, dy: f64) {
        self.target_x += dx;
        self.target_y += dy;
    }

    pub fn zoom_in(&mut self) {
        self.target_zoom = (self.target_zoom * ZOOM_IN_FACTOR).min(MAX_ZOOM);
    }

    pub fn zoom_out(&mut self) {
        self.target_zoom = (self.target_zoom * ZOOM_OUT_FACTOR).max(MIN_ZOOM);
    }

    /// Retargets the camera onto a world point.
    pub fn center_on(&mut self, wx: f64, wy: f64) {
        self.target_x = wx;
        self.target_y = wy;
    }

    /// Snaps targets onto the current values; used after deserialization so a
    /// loaded camera does not drift.
    pub fn anchor_targets(&mut self) {
        self.target_x = self.x;
        self.target_y = self.y;
        self.target_zoom = self.zoom;
    }

    /// Advances one interpolation tick: each axis moves `smoothness` of the
    /// remaining distance toward its target and snaps once within the settle
    /// threshold. Returns whether any axis is still moving.
    pub fn update(&mut self, smoothness: f64) -> bool {
        let mut moving = false;

        for (current, target) in [
            (&mut self.x, self.target_x),
            (&mut self.y, self.target_y),
            (&mut self.zoom, self.target_zoom),
        ] {
            if (*current - target).abs() > SETTLE_THRESHOLD {
                *current += (target - *current) * smoothness;
                moving = true;
            } else {
                *current = target;
            }
        }

        moving
    }
}
