// ABOUTME: Recursive tree walker that renders and copies a staged template tree
// ABOUTME: Renders path segments and file contents, preserving excluded entries verbatim

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, trace};

use super::boundary;
use super::error::{Result, TreeError};
use super::matcher::CopyMatcher;
use crate::template::{RenderContext, TemplateEngine};

/// Walks a staged source tree and materializes it under a destination
/// directory. Each path segment and each non-excluded file's content is
/// rendered through the template engine; entries matched by the copy
/// matcher are transferred verbatim. Every write target is re-checked
/// against the workspace boundary, since rendered segments may carry
/// attacker-influenced template output.
pub struct TreeCopier<'a> {
    engine: &'a TemplateEngine,
    context: &'a RenderContext,
    matcher: CopyMatcher,
    workspace_root: PathBuf,
}

impl<'a> TreeCopier<'a> {
    pub fn new(
        engine: &'a TemplateEngine,
        context: &'a RenderContext,
        matcher: CopyMatcher,
        workspace_root: PathBuf,
    ) -> Self {
        Self {
            engine,
            context,
            matcher,
            workspace_root,
        }
    }

    /// Copy `source_dir` into `dest_dir`, rendering names and contents.
    /// Returns the resolved destination root.
    pub fn copy_templated_contents(&self, source_dir: &Path, dest_dir: &Path) -> Result<PathBuf> {
        let dest_root = boundary::ensure_contained(dest_dir, &self.workspace_root)?;
        fs::create_dir_all(&dest_root)?;

        debug!(
            "Copying template tree {} -> {}",
            source_dir.display(),
            dest_root.display()
        );

        self.copy_dir(source_dir, &dest_root, Path::new(""))?;
        Ok(dest_root)
    }

    fn copy_dir(&self, source_dir: &Path, dest_dir: &Path, relative: &Path) -> Result<()> {
        for entry in fs::read_dir(source_dir)? {
            let entry = entry?;
            let file_type = entry.file_type()?;
            let name = entry.file_name();
            let source_rel = relative.join(&name);

            // Exclusion is decided on the original, unrendered relative
            // path, before any segment rendering happens.
            if self.matcher.matches(&source_rel) {
                let dest = self.checked(dest_dir.join(&name))?;
                trace!("Copying verbatim: {}", source_rel.display());
                if file_type.is_dir() {
                    self.copy_verbatim(&entry.path(), &dest)?;
                } else {
                    fs::copy(entry.path(), &dest)?;
                }
                continue;
            }

            let name = name.to_str().ok_or_else(|| TreeError::NonUtf8Path {
                path: entry.path(),
            })?;
            let rendered_name = self.render_segment(name, &source_rel)?;
            let dest = self.checked(dest_dir.join(&rendered_name))?;

            if file_type.is_dir() {
                // Created even when the directory stays empty.
                fs::create_dir_all(&dest)?;
                self.copy_dir(&entry.path(), &dest, &source_rel)?;
            } else {
                let content = fs::read_to_string(entry.path())?;
                let rendered =
                    self.engine
                        .render(&content, self.context)
                        .map_err(|source| TreeError::Render {
                            path: source_rel.clone(),
                            source,
                        })?;
                fs::write(&dest, rendered)?;
                trace!("Rendered: {} -> {}", source_rel.display(), dest.display());
            }
        }

        Ok(())
    }

    /// Render a single path segment, surfacing the source-relative path on
    /// failure.
    fn render_segment(&self, segment: &str, source_rel: &Path) -> Result<String> {
        let rendered =
            self.engine
                .render(segment, self.context)
                .map_err(|source| TreeError::Render {
                    path: source_rel.to_path_buf(),
                    source,
                })?;

        if rendered.is_empty() {
            return Err(TreeError::EmptyRenderedName {
                path: source_rel.to_path_buf(),
            });
        }

        Ok(rendered)
    }

    /// Byte-for-byte copy of an excluded subtree; no rendering of names or
    /// contents.
    fn copy_verbatim(&self, source_dir: &Path, dest_dir: &Path) -> Result<()> {
        fs::create_dir_all(dest_dir)?;
        for entry in fs::read_dir(source_dir)? {
            let entry = entry?;
            let dest = self.checked(dest_dir.join(entry.file_name()))?;
            if entry.file_type()?.is_dir() {
                self.copy_verbatim(&entry.path(), &dest)?;
            } else {
                fs::copy(entry.path(), &dest)?;
            }
        }
        Ok(())
    }

    fn checked(&self, candidate: PathBuf) -> Result<PathBuf> {
        boundary::ensure_contained(&candidate, &self.workspace_root)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tempfile::TempDir;

    fn engine() -> TemplateEngine {
        TemplateEngine::new().unwrap()
    }

    fn context(value: serde_json::Value) -> RenderContext {
        RenderContext::from_value(value).unwrap()
    }

    #[test]
    fn test_renders_names_and_contents() {
        let workspace = TempDir::new().unwrap();
        let source = workspace.path().join("source");
        fs::create_dir_all(&source).unwrap();
        fs::write(source.join("${{ name }}.txt"), "count is ${{ count }}").unwrap();

        let engine = engine();
        let ctx = context(json!({"name": "test-project", "count": 1234}));
        let copier = TreeCopier::new(
            &engine,
            &ctx,
            CopyMatcher::empty(),
            workspace.path().to_path_buf(),
        );

        let dest = copier
            .copy_templated_contents(&source, &workspace.path().join("out"))
            .unwrap();

        let rendered = fs::read_to_string(dest.join("test-project.txt")).unwrap();
        assert_eq!(rendered, "count is 1234");
    }

    #[test]
    fn test_empty_directory_preserved() {
        let workspace = TempDir::new().unwrap();
        let source = workspace.path().join("source");
        fs::create_dir_all(source.join("empty-dir-${{ count }}")).unwrap();

        let engine = engine();
        let ctx = context(json!({"count": 1234}));
        let copier = TreeCopier::new(
            &engine,
            &ctx,
            CopyMatcher::empty(),
            workspace.path().to_path_buf(),
        );

        let dest = copier
            .copy_templated_contents(&source, &workspace.path().join("out"))
            .unwrap();

        let empty = dest.join("empty-dir-1234");
        assert!(empty.is_dir());
        assert_eq!(fs::read_dir(&empty).unwrap().count(), 0);
    }

    #[test]
    fn test_rendered_segment_cannot_escape() {
        let workspace = TempDir::new().unwrap();
        let source = workspace.path().join("source");
        fs::create_dir_all(&source).unwrap();
        fs::write(source.join("${{ sneaky }}"), "payload").unwrap();

        let engine = engine();
        let ctx = context(json!({"sneaky": "../../escaped.txt"}));
        let copier = TreeCopier::new(
            &engine,
            &ctx,
            CopyMatcher::empty(),
            workspace.path().join("work"),
        );

        let work = workspace.path().join("work");
        fs::create_dir_all(&work).unwrap();
        let result = copier.copy_templated_contents(&source, &work.join("out"));
        assert!(matches!(result, Err(TreeError::OutsideWorkspace { .. })));
    }

    #[test]
    fn test_render_failure_names_source_path() {
        let workspace = TempDir::new().unwrap();
        let source = workspace.path().join("source");
        fs::create_dir_all(source.join("sub")).unwrap();
        fs::write(source.join("sub/broken.txt"), "oops ${{ unclosed").unwrap();

        let engine = engine();
        let ctx = context(json!({}));
        let copier = TreeCopier::new(
            &engine,
            &ctx,
            CopyMatcher::empty(),
            workspace.path().to_path_buf(),
        );

        let err = copier
            .copy_templated_contents(&source, &workspace.path().join("out"))
            .unwrap_err();
        match err {
            TreeError::Render { path, .. } => {
                assert_eq!(path, PathBuf::from("sub/broken.txt"));
            }
            other => panic!("expected render error, got {other:?}"),
        }
    }

    #[test]
    fn test_empty_rendered_name_rejected() {
        let workspace = TempDir::new().unwrap();
        let source = workspace.path().join("source");
        fs::create_dir_all(&source).unwrap();
        fs::write(source.join("${{ missing }}"), "content").unwrap();

        let engine = engine();
        let ctx = context(json!({}));
        let copier = TreeCopier::new(
            &engine,
            &ctx,
            CopyMatcher::empty(),
            workspace.path().to_path_buf(),
        );

        let result = copier.copy_templated_contents(&source, &workspace.path().join("out"));
        assert!(matches!(result, Err(TreeError::EmptyRenderedName { .. })));
    }
}
