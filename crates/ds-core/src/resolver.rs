//! Status resolution.
//!
//! This is the hot path: every classification query walks the rule tree
//! here. Precedence is encoded in the traversal order and must not change:
//!
//! 1. a bare status leaf at the most specific reached node wins outright,
//! 2. on an exact host match, a path-prefix rule, then the catch-all rule,
//! 3. wildcard rules, scanned from most to least specific reached node,
//! 4. otherwise `Undefined`.

use crate::ruleset::Ruleset;
use crate::status::Status;
use crate::tree::{Branch, TreeNode};
use crate::url::{parse_url, ParseError};

/// A classification query: a bare domain, a URL, or both.
///
/// When both are present the URL wins, since it also carries a path.
#[derive(Debug, Clone, Copy, Default)]
pub struct StatusQuery<'a> {
    pub domain: Option<&'a str>,
    pub url: Option<&'a str>,
}

impl<'a> StatusQuery<'a> {
    /// Query by bare hostname.
    pub fn domain(domain: &'a str) -> Self {
        Self {
            domain: Some(domain),
            url: None,
        }
    }

    /// Query by URL; the path takes part in resolution.
    pub fn url(url: &'a str) -> Self {
        Self {
            domain: None,
            url: Some(url),
        }
    }
}

// =============================================================================
// Traversal
// =============================================================================

/// Collect the tree nodes reached while consuming host labels from the TLD
/// inward. The result is ordered most-specific first and only contains
/// nodes that actually exist; descent stops at the first absent label and
/// at status leaves, which are terminal by construction.
fn reached_nodes<'t>(root: &'t Branch, labels: &[&str]) -> Vec<&'t TreeNode> {
    let mut nodes = Vec::with_capacity(labels.len());
    let mut children = &root.children;

    for label in labels.iter().rev() {
        let Some(node) = children.get(*label) else {
            break;
        };
        nodes.push(node);
        match node {
            TreeNode::Branch(branch) => children = &branch.children,
            TreeNode::Status(_) => break,
        }
    }

    nodes.reverse();
    nodes
}

/// First path segment including the leading slash: `/foo` for `/foo/bar`,
/// `/` for `/`.
#[inline]
fn first_path_segment(path: &str) -> &str {
    match path[1..].find('/') {
        Some(slash_pos) => &path[..slash_pos + 1],
        None => path,
    }
}

// =============================================================================
// Resolution
// =============================================================================

/// Resolve the monetization status for a domain or URL.
///
/// Pure: depends only on the given ruleset snapshot and the query. Runs in
/// O(number of host labels). A query with neither domain nor URL resolves
/// to [`Status::Undefined`]; a malformed URL is a [`ParseError`].
pub fn resolve(ruleset: &Ruleset, query: StatusQuery<'_>) -> Result<Status, ParseError> {
    let parts;
    let (hostname, pathname) = if let Some(url) = query.url {
        parts = parse_url(url)?;
        (parts.hostname.as_ref(), Some(parts.pathname))
    } else if let Some(domain) = query.domain {
        (domain, None)
    } else {
        return Ok(Status::Undefined);
    };

    let labels: Vec<&str> = hostname.split('.').collect();
    let reached = reached_nodes(&ruleset.tree, &labels);

    // Does the most specific reached node only define a status? Then
    // nothing more specific can exist below it.
    let Some(most_specific) = reached.first() else {
        return Ok(Status::Undefined);
    };
    let branch = match most_specific {
        TreeNode::Status(code) => return Ok(*code),
        TreeNode::Branch(branch) => branch,
    };

    // Rules scoped to the exact host only apply if every label was consumed
    if reached.len() == labels.len() {
        if let Some(path) = pathname {
            if let Some(&code) = branch.paths.get(first_path_segment(path)) {
                return Ok(code);
            }
        }
        if let Some(code) = branch.exact {
            return Ok(code);
        }
    }

    // Wildcards inherited by subdomains, most specific node first
    for node in &reached {
        if let TreeNode::Branch(branch) = node {
            if let Some(code) = branch.wildcard {
                return Ok(code);
            }
        }
    }

    Ok(Status::Undefined)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ruleset::RulesetData;

    fn ruleset(status_json: &str) -> Ruleset {
        let json = format!(r#"{{"status": {status_json}, "author": [], "video": []}}"#);
        serde_json::from_str::<RulesetData>(&json).unwrap().into()
    }

    fn status(rules: &Ruleset, query: StatusQuery<'_>) -> Status {
        resolve(rules, query).unwrap()
    }

    #[test]
    fn test_unmatched_host_is_undefined() {
        let rules = ruleset(r#"{"com": {"example": {"": 1}}}"#);
        assert_eq!(status(&rules, StatusQuery::domain("example.org")), Status::Undefined);
        assert_eq!(status(&rules, StatusQuery::domain("unrelated.com")), Status::Undefined);
    }

    #[test]
    fn test_empty_query_is_undefined() {
        let rules = ruleset(r#"{"com": {"example": 1}}"#);
        assert_eq!(status(&rules, StatusQuery::default()), Status::Undefined);
    }

    #[test]
    fn test_status_leaf_is_terminal() {
        let rules = ruleset(r#"{"com": {"example": 1}}"#);
        assert_eq!(status(&rules, StatusQuery::domain("example.com")), Status::Blocked);
        // The leaf is the most specific node reached for subdomains too;
        // nothing deeper can exist below it
        assert_eq!(status(&rules, StatusQuery::domain("sub.example.com")), Status::Blocked);
    }

    #[test]
    fn test_path_rule_beats_catch_all_on_exact_host() {
        let rules = ruleset(r#"{"com": {"example": {"": 2, "/foo": 1}}}"#);
        assert_eq!(
            status(&rules, StatusQuery::url("http://example.com/foo/bar")),
            Status::Blocked
        );
        assert_eq!(
            status(&rules, StatusQuery::url("http://example.com/other")),
            Status::Eligible
        );
    }

    #[test]
    fn test_path_rules_match_on_first_segment_only() {
        let rules = ruleset(r#"{"com": {"example": {"/foo": 1}}}"#);
        assert_eq!(
            status(&rules, StatusQuery::url("http://example.com/foobar")),
            Status::Undefined
        );
        assert_eq!(
            status(&rules, StatusQuery::url("http://example.com/foo")),
            Status::Blocked
        );
    }

    #[test]
    fn test_catch_all_ignored_without_path() {
        let rules = ruleset(r#"{"com": {"example": {"": 2, "/foo": 1}}}"#);
        // Bare domain query has no path, so only the catch-all applies
        assert_eq!(status(&rules, StatusQuery::domain("example.com")), Status::Eligible);
    }

    #[test]
    fn test_exact_rules_do_not_leak_to_subdomains() {
        let rules = ruleset(r#"{"com": {"example": {"": 2, "/foo": 1}}}"#);
        assert_eq!(
            status(&rules, StatusQuery::url("http://sub.example.com/foo")),
            Status::Undefined
        );
    }

    #[test]
    fn test_wildcard_inherited_by_subdomains() {
        let rules = ruleset(r#"{"com": {"example": {"*": 1}}}"#);
        assert_eq!(status(&rules, StatusQuery::domain("example.com")), Status::Blocked);
        assert_eq!(
            status(&rules, StatusQuery::domain("deep.sub.example.com")),
            Status::Blocked
        );
    }

    #[test]
    fn test_more_specific_wildcard_wins() {
        let rules = ruleset(r#"{"com": {"*": 1, "example": {"*": 2}}}"#);
        assert_eq!(status(&rules, StatusQuery::domain("sub.example.com")), Status::Eligible);
        assert_eq!(status(&rules, StatusQuery::domain("other.com")), Status::Blocked);
    }

    #[test]
    fn test_exact_rule_beats_wildcard() {
        let rules = ruleset(r#"{"com": {"example": {"": 2, "*": 1}}}"#);
        assert_eq!(status(&rules, StatusQuery::domain("example.com")), Status::Eligible);
        assert_eq!(status(&rules, StatusQuery::domain("sub.example.com")), Status::Blocked);
    }

    #[test]
    fn test_url_wins_over_domain() {
        let rules = ruleset(r#"{"com": {"example": {"/foo": 1}}, "org": {"example": {"": 2}}}"#);
        let query = StatusQuery {
            domain: Some("example.org"),
            url: Some("http://example.com/foo"),
        };
        assert_eq!(status(&rules, query), Status::Blocked);
    }

    #[test]
    fn test_malformed_url_is_an_error() {
        let rules = ruleset(r#"{"com": {"example": {"": 1}}}"#);
        assert!(resolve(&rules, StatusQuery::url("example.com/foo")).is_err());
    }

    #[test]
    fn test_uppercase_url_host_resolves() {
        let rules = ruleset(r#"{"com": {"example": {"": 2}}}"#);
        assert_eq!(
            status(&rules, StatusQuery::url("http://EXAMPLE.COM/")),
            Status::Eligible
        );
    }

    #[test]
    fn test_first_path_segment() {
        assert_eq!(first_path_segment("/foo/bar"), "/foo");
        assert_eq!(first_path_segment("/foo"), "/foo");
        assert_eq!(first_path_segment("/"), "/");
    }
}
