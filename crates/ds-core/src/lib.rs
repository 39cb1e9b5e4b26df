//! Domain-Status Core Library
//!
//! This crate provides the classification core for the domain-status system:
//! given a hostname (optionally with a URL path), it resolves a monetization
//! status by walking a curated ruleset keyed on reversed domain labels.
//!
//! # Architecture
//!
//! The engine is deliberately pure: resolution depends only on a [`Ruleset`]
//! snapshot and the query, performs no I/O, and never suspends. Snapshot
//! ownership, hot reload, and the public facade live in the `ds-presets`
//! crate; this crate only defines the data model and the traversal.
//!
//! # Modules
//!
//! - `status`: the status-code enumeration
//! - `tree`: the tagged rule-tree node type and its wire deserialization
//! - `ruleset`: the replaceable (tree, author set, video set) unit
//! - `url`: hostname/pathname extraction from URL strings
//! - `resolver`: the host-label traversal and precedence rules

pub mod resolver;
pub mod ruleset;
pub mod status;
pub mod tree;
pub mod url;

// Re-export commonly used types
pub use resolver::{resolve, StatusQuery};
pub use ruleset::{Ruleset, RulesetData};
pub use status::Status;
pub use tree::{Branch, TreeNode};
pub use url::{parse_url, ParseError, UrlParts};
