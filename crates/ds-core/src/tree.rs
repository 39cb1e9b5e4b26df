//! The rule tree.
//!
//! Rule trees are keyed on reversed domain labels: the first level holds
//! TLDs, the next holds registrable names, and so on, so deeper nodes are
//! more specific host suffixes. The wire format mixes two node shapes at
//! every level (a bare status integer or an object), and object keys carry
//! three reserved meanings besides child labels:
//!
//! - `""` — catch-all status for this exact host, any path
//! - `"*"` — status for this host and every subdomain below it
//! - keys starting with `/` — status scoped to a path prefix of this host
//!
//! The in-memory representation separates those meanings out of the key
//! space instead of re-deriving them from string shape during traversal.

use std::collections::HashMap;
use std::fmt;

use serde::de::{self, MapAccess, Visitor};
use serde::{Deserialize, Deserializer};

use crate::status::Status;

// =============================================================================
// Node Types
// =============================================================================

/// One node of the rule tree.
#[derive(Debug, Clone, PartialEq)]
pub enum TreeNode {
    /// A terminal status: nothing more specific exists below this node.
    Status(Status),
    /// Nested rules for this host suffix.
    Branch(Branch),
}

impl TreeNode {
    /// Return the status if this node is a terminal leaf.
    #[inline]
    pub fn as_status(&self) -> Option<Status> {
        match self {
            TreeNode::Status(code) => Some(*code),
            TreeNode::Branch(_) => None,
        }
    }
}

/// Rules attached to a single host suffix.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Branch {
    /// Child subtrees, keyed by the next (more specific) domain label.
    pub children: HashMap<String, TreeNode>,
    /// Path-prefix rules for this exact host (keys start with `/`).
    pub paths: HashMap<String, Status>,
    /// Catch-all status for this exact host (wire key `""`).
    pub exact: Option<Status>,
    /// Status for this host and all of its subdomains (wire key `"*"`).
    pub wildcard: Option<Status>,
}

impl Branch {
    /// Look up the child subtree for a domain label.
    #[inline]
    pub fn child(&self, label: &str) -> Option<&TreeNode> {
        self.children.get(label)
    }
}

// =============================================================================
// Wire Deserialization
// =============================================================================

impl<'de> Deserialize<'de> for TreeNode {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(NodeVisitor)
    }
}

struct NodeVisitor;

impl<'de> Visitor<'de> for NodeVisitor {
    type Value = TreeNode;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a status code or an object of nested rules")
    }

    fn visit_u64<E: de::Error>(self, value: u64) -> Result<TreeNode, E> {
        u8::try_from(value)
            .ok()
            .and_then(|v| Status::try_from(v).ok())
            .map(TreeNode::Status)
            .ok_or_else(|| E::custom(format!("unknown status code {value}")))
    }

    fn visit_i64<E: de::Error>(self, value: i64) -> Result<TreeNode, E> {
        if value < 0 {
            return Err(E::custom(format!("unknown status code {value}")));
        }
        self.visit_u64(value as u64)
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<TreeNode, A::Error> {
        let mut branch = Branch::default();

        while let Some(key) = map.next_key::<String>()? {
            if key.is_empty() {
                branch.exact = Some(map.next_value()?);
            } else if key == "*" {
                branch.wildcard = Some(map.next_value()?);
            } else if key.starts_with('/') {
                branch.paths.insert(key, map.next_value()?);
            } else {
                branch.children.insert(key, map.next_value()?);
            }
        }

        Ok(TreeNode::Branch(branch))
    }
}

impl<'de> Deserialize<'de> for Branch {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        match TreeNode::deserialize(deserializer)? {
            TreeNode::Branch(branch) => Ok(branch),
            TreeNode::Status(_) => Err(de::Error::custom("rule tree root must be an object")),
        }
    }
}
