//! The replaceable ruleset unit.
//!
//! A [`Ruleset`] bundles the status tree with the two flat domain sets.
//! It is immutable once constructed; updates always build a fresh ruleset
//! and swap it in whole, never patch an existing one.

use std::collections::HashSet;

use serde::Deserialize;

use crate::tree::Branch;

/// Wire shape of a ruleset, as persisted and as shipped with the build.
#[derive(Debug, Clone, Deserialize)]
pub struct RulesetData {
    /// The status tree, keyed by reversed domain labels.
    pub status: Branch,
    /// Hostnames treated as author-owned (first-party) domains.
    #[serde(default)]
    pub author: Vec<String>,
    /// Hostnames known to host video content.
    #[serde(default)]
    pub video: Vec<String>,
}

/// An immutable (tree, author set, video set) triple.
#[derive(Debug, Clone)]
pub struct Ruleset {
    /// Root of the status tree.
    pub tree: Branch,
    author_domains: HashSet<String>,
    video_domains: HashSet<String>,
}

impl Ruleset {
    /// Exact-match membership in the author-owned domain set.
    ///
    /// No hierarchy applies here: `sub.example.com` is only a member if it
    /// is listed itself, regardless of `example.com`.
    pub fn is_author_domain(&self, domain: &str) -> bool {
        self.author_domains.contains(domain)
    }

    /// Exact-match membership in the video-hosting domain set.
    pub fn has_videos(&self, domain: &str) -> bool {
        self.video_domains.contains(domain)
    }
}

impl From<RulesetData> for Ruleset {
    fn from(data: RulesetData) -> Self {
        Self {
            tree: data.status,
            author_domains: data.author.into_iter().collect(),
            video_domains: data.video.into_iter().collect(),
        }
    }
}
