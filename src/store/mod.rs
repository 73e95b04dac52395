// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Dendrite-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Dendrite and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Document persistence.
//!
//! One pretty-printed JSON file per document: the node map, the edge list,
//! and the camera. Sizes, the id counter, camera targets, and selection are
//! session state and are rebuilt on load, never trusted from disk.

use std::collections::BTreeMap;
use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::model::{Camera, Document, Edge, Node, NodeId};

/// On-disk shape of a document.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct DocumentFile {
    nodes: BTreeMap<NodeId, Node>,
    edges: Vec<Edge>,
    camera: Camera,
}

#[derive(Debug)]
pub enum StoreError {
    Io {
        path: PathBuf,
        source: io::Error,
    },
    Json {
        path: PathBuf,
        source: serde_json::Error,
    },
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io { path, source } => write!(f, "io error at {path:?}: {source}"),
            Self::Json { path, source } => write!(f, "json error at {path:?}: {source}"),
        }
    }
}

impl std::error::Error for StoreError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Json { source, .. } => Some(source),
        }
    }
}

/// Writes the document to `path` as pretty-printed JSON.
pub fn save(path: &Path, doc: &Document) -> Result<(), StoreError> {
    let file = DocumentFile {
        nodes: doc.nodes().clone(),
        edges: doc.edges().to_vec(),
        camera: doc.camera().clone(),
    };

    let json = serde_json::to_string_pretty(&file).map_err(|source| StoreError::Json {
        path: path.to_owned(),
        source,
    })?;

    fs::write(path, json).map_err(|source| StoreError::Io {
        path: path.to_owned(),
        source,
    })
}

/// Reads a document from `path`.
///
/// Box sizes are recomputed from text, the id counter reseeds to one past
/// the largest numeric id, and the camera re-anchors its interpolation
/// targets so a freshly loaded document does not drift. On failure the
/// caller's in-memory document is untouched (nothing is mutated here).
pub fn load(path: &Path) -> Result<Document, StoreError> {
    let json = fs::read_to_string(path).map_err(|source| StoreError::Io {
        path: path.to_owned(),
        source,
    })?;

    let file: DocumentFile = serde_json::from_str(&json).map_err(|source| StoreError::Json {
        path: path.to_owned(),
        source,
    })?;

    Ok(Document::from_parts(file.nodes, file.edges, file.camera))
}
