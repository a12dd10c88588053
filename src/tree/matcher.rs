// ABOUTME: Glob matching for copy-without-render path patterns
// ABOUTME: Decides whether a relative path is excluded from template rendering

use std::path::Path;

use globset::{Glob, GlobSet, GlobSetBuilder};

use super::error::{Result, TreeError};

/// Compiled `copyWithoutRender` pattern set, anchored at the staged tree's
/// root. A path matches when any pattern matches the path itself or any of
/// its ancestor directories, so marking a directory excludes its subtree.
#[derive(Debug, Clone)]
pub struct CopyMatcher {
    set: GlobSet,
}

impl CopyMatcher {
    /// Compile a pattern sequence. Patterns are validated eagerly, before
    /// any walk begins.
    pub fn new(patterns: &[String]) -> Result<Self> {
        let mut builder = GlobSetBuilder::new();
        for pattern in patterns {
            let glob = Glob::new(pattern).map_err(|err| TreeError::InvalidPattern {
                pattern: pattern.clone(),
                message: err.to_string(),
            })?;
            builder.add(glob);
        }
        let set = builder.build().map_err(|err| TreeError::InvalidPattern {
            pattern: patterns.join(", "),
            message: err.to_string(),
        })?;

        Ok(Self { set })
    }

    /// A matcher that matches nothing
    pub fn empty() -> Self {
        Self {
            set: GlobSet::empty(),
        }
    }

    /// Check a path (relative to the staged tree root) and its ancestors
    pub fn matches(&self, relative: &Path) -> bool {
        if self.set.is_empty() {
            return false;
        }

        relative
            .ancestors()
            .filter(|ancestor| !ancestor.as_os_str().is_empty())
            .any(|ancestor| self.set.is_match(ancestor))
    }
}
