// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Dendrite-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Dendrite and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::borrow::Borrow;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// A stable node identifier.
///
/// Ids created by the engine are decimal counter values (`"0"`, `"1"`, ...);
/// ids loaded from a document file only need to be non-empty. `"0"` is the
/// root and always exists once the document is non-empty.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct NodeId(String);

impl NodeId {
    pub fn new(value: impl Into<String>) -> Result<Self, IdError> {
        let value = value.into();
        if value.is_empty() {
            return Err(IdError::Empty);
        }
        Ok(Self(value))
    }

    /// The distinguished root id.
    pub fn root() -> Self {
        Self("0".to_owned())
    }

    pub fn is_root(&self) -> bool {
        self.0 == "0"
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }

    /// Numeric value used to reseed the id counter; `None` for foreign ids.
    pub fn as_number(&self) -> Option<u64> {
        self.0.parse().ok()
    }

    pub(crate) fn from_counter(counter: u64) -> Self {
        Self(counter.to_string())
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for NodeId {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl Borrow<str> for NodeId {
    fn borrow(&self) -> &str {
        self.as_str()
    }
}

impl FromStr for NodeId {
    type Err = IdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s.to_owned())
    }
}

impl TryFrom<String> for NodeId {
    type Error = IdError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<NodeId> for String {
    fn from(id: NodeId) -> Self {
        id.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IdError {
    Empty,
}

impl fmt::Display for IdError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => f.write_str("node id must not be empty"),
        }
    }
}

impl std::error::Error for IdError {}

#[cfg(test)]
mod tests {
    use super::{IdError, NodeId};

    #[test]
    fn rejects_empty_ids() {
        assert_eq!(NodeId::new(""), Err(IdError::Empty));
    }

    #[test]
    fn root_is_zero() {
        let root = NodeId::root();
        assert_eq!(root.as_str(), "0");
        assert!(root.is_root());
        assert!(!NodeId::new("1").expect("id").is_root());
    }

    #[test]
    fn counter_ids_are_numeric() {
        let id = NodeId::from_counter(17);
        assert_eq!(id.as_number(), Some(17));
        assert_eq!(NodeId::new("branch-a").expect("id").as_number(), None);
    }
}
