//! Path rewrite rule.
//!
//! # Responsibilities
//! - Normalize the inbound path (empty → `/`)
//! - Replace every occurrence of a literal substring in the path
//! - Report whether a rewrite happened
//!
//! # Design Decisions
//! - Literal substring match, no regex and no version-prefix heuristics:
//!   `/v1` without a trailing slash is left alone
//! - Applied to the path only; the query string never passes through here
//! - Immutable after construction (shared across requests without locks)

use std::borrow::Cow;

use crate::config::RewriteConfig;

/// Outcome of applying the rewrite rule to one path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rewrite<'a> {
    /// The pattern was found; holds the replaced path.
    Rewritten(String),
    /// The pattern was absent; holds the original path.
    Unchanged(&'a str),
}

impl Rewrite<'_> {
    /// The path to forward.
    pub fn path(&self) -> &str {
        match self {
            Rewrite::Rewritten(path) => path,
            Rewrite::Unchanged(path) => path,
        }
    }

    pub fn is_rewritten(&self) -> bool {
        matches!(self, Rewrite::Rewritten(_))
    }
}

/// A single literal substring substitution.
#[derive(Debug, Clone)]
pub struct PathRewrite {
    from: String,
    to: String,
}

impl PathRewrite {
    pub fn new(from: impl Into<String>, to: impl Into<String>) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
        }
    }

    pub fn from_config(config: &RewriteConfig) -> Self {
        Self::new(config.from.clone(), config.to.clone())
    }

    pub fn pattern(&self) -> &str {
        &self.from
    }

    pub fn replacement(&self) -> &str {
        &self.to
    }

    /// Replace every occurrence of the pattern in `path`.
    pub fn apply<'a>(&self, path: &'a str) -> Rewrite<'a> {
        if !self.from.is_empty() && path.contains(self.from.as_str()) {
            Rewrite::Rewritten(path.replace(self.from.as_str(), &self.to))
        } else {
            Rewrite::Unchanged(path)
        }
    }
}

/// Normalize an inbound path so it always starts with `/`.
///
/// The root request (empty path) becomes exactly `/`.
pub fn normalize_path(path: &str) -> Cow<'_, str> {
    if path.is_empty() {
        Cow::Borrowed("/")
    } else if path.starts_with('/') {
        Cow::Borrowed(path)
    } else {
        Cow::Owned(format!("/{}", path))
    }
}
