// ABOUTME: Common utilities and helpers for integration tests
// ABOUTME: Provides shared functionality for building template source trees

#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Builder for template source trees used as test fixtures.
pub struct TestTreeBuilder {
    files: Vec<(PathBuf, String)>,
    dirs: Vec<PathBuf>,
}

impl TestTreeBuilder {
    pub fn new() -> Self {
        Self {
            files: Vec::new(),
            dirs: Vec::new(),
        }
    }

    pub fn with_file(mut self, path: &str, content: &str) -> Self {
        self.files.push((PathBuf::from(path), content.to_string()));
        self
    }

    pub fn with_dir(mut self, path: &str) -> Self {
        self.dirs.push(PathBuf::from(path));
        self
    }

    /// Materialize the tree under `root`
    pub fn build(self, root: &Path) -> std::io::Result<()> {
        for dir in &self.dirs {
            fs::create_dir_all(root.join(dir))?;
        }
        for (path, content) in &self.files {
            let full = root.join(path);
            if let Some(parent) = full.parent() {
                fs::create_dir_all(parent)?;
            }
            fs::write(full, content)?;
        }
        Ok(())
    }
}

impl Default for TestTreeBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// A fresh workspace directory containing a `source` template tree built
/// from the given builder.
pub fn workspace_with_source(builder: TestTreeBuilder) -> (TempDir, PathBuf) {
    let workspace = TempDir::new().unwrap();
    let source = workspace.path().join("source");
    fs::create_dir_all(&source).unwrap();
    builder.build(&source).unwrap();
    (workspace, source)
}

/// Count entries in a directory, failing the test if it does not exist.
pub fn entry_count(path: &Path) -> usize {
    fs::read_dir(path).unwrap().count()
}
