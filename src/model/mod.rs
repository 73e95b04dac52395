// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Dendrite-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Dendrite and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Core data model.
//!
//! A document maps node ids to nodes, holds the edge list and the camera, and
//! tracks the current selection.

pub mod camera;
pub mod document;
pub mod ids;
pub mod node;

pub use camera::{Camera, MAX_ZOOM, MIN_ZOOM};
pub use document::{Document, BRANCH_PALETTE};
pub use ids::{IdError, NodeId};
pub use node::{node_size, wrap_text, Edge, Node, MIN_NODE_WIDTH, NODE_TEXT_WRAP_WIDTH};
