// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Dendrite-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Dendrite and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Nodes, edges, and box sizing.
//!
//! `node_size` is the sole source of truth for a node's footprint; layout and
//! rendering both go through it (and through the same `wrap_text`).

use serde::{Deserialize, Serialize};

use super::ids::NodeId;

/// Wrap budget for node text, in characters, independent of zoom.
pub const NODE_TEXT_WRAP_WIDTH: usize = 22;

/// Minimum box width in world cells.
pub const MIN_NODE_WIDTH: usize = 10;

/// A labeled box on the world canvas.
///
/// `width`/`height` are derived from `text` and must never be set directly;
/// callers that change `text` go through [`Node::update_size`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Node {
    pub id: NodeId,
    pub text: String,
    pub x: f64,
    pub y: f64,
    pub width: usize,
    pub height: usize,
    #[serde(default)]
    pub parent_id: Option<NodeId>,
    #[serde(default)]
    pub color: Option<String>,
    #[serde(default)]
    pub links: Vec<NodeId>,
}

impl Node {
    pub fn new(id: NodeId, text: impl Into<String>, x: f64, y: f64) -> Self {
        let text = text.into();
        let (width, height) = node_size(&text);
        Self {
            id,
            text,
            x,
            y,
            width,
            height,
            parent_id: None,
            color: None,
            links: Vec::new(),
        }
    }

    /// Center of the box in world coordinates.
    pub fn center(&self) -> (f64, f64) {
        (
            self.x + self.width as f64 / 2.0,
            self.y + self.height as f64 / 2.0,
        )
    }

    pub fn bottom(&self) -> f64 {
        self.y + self.height as f64
    }

    /// Recomputes `width`/`height` from the current text.
    pub fn update_size(&mut self) {
        let (width, height) = node_size(&self.text);
        self.width = width;
        self.height = height;
    }
}

/// A directed connection between two nodes.
///
/// Dangling endpoints are tolerated in storage and skipped at render time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Edge {
    pub from: NodeId,
    pub to: NodeId,
}

/// Wraps text to `max_width` characters per line.
///
/// Explicit line breaks are honored first. Within a paragraph, words are
/// packed greedily; a single word longer than `max_width` is hard-broken into
/// `max_width`-sized chunks. An empty paragraph yields one empty line.
pub fn wrap_text(text: &str, max_width: usize) -> Vec<String> {
    let max_width = max_width.max(1);
    let mut lines = Vec::new();

    for paragraph in text.split('\n') {
        let mut line = String::new();
        let mut line_len = 0usize;

        for word in paragraph.split_whitespace() {
            let word_len = word.chars().count();

            if word_len > max_width {
                if !line.is_empty() {
                    lines.push(std::mem::take(&mut line));
                    line_len = 0;
                }
                let chars: Vec<char> = word.chars().collect();
                for chunk in chars.chunks(max_width) {
                    if chunk.len() == max_width {
                        lines.push(chunk.iter().collect());
                    } else {
                        line = chunk.iter().collect();
                        line_len = chunk.len();
                    }
                }
                continue;
            }

            if line.is_empty() {
                line.push_str(word);
                line_len = word_len;
            } else if line_len + 1 + word_len <= max_width {
                line.push(' ');
                line.push_str(word);
                line_len += 1 + word_len;
            } else {
                lines.push(std::mem::take(&mut line));
                line.push_str(word);
                line_len = word_len;
            }
        }

        lines.push(line);
    }

    lines
}

/// Box size for the given text: wrapped lines + 2 border rows, longest line +
/// 4 columns (borders and one padding column each side), floored at
/// [`MIN_NODE_WIDTH`].
pub fn node_size(text: &str) -> (usize, usize) {
    let lines = wrap_text(text, NODE_TEXT_WRAP_WIDTH);
    let height = lines.len() + 2;
    let longest = lines
        .iter()
        .map(|line| line.chars().count())
        .max()
        .unwrap_or(0);
    let width = (longest + 4).max(MIN_NODE_WIDTH);
    (width, height)
}
