// ABOUTME: Local filesystem fetcher for template sources
// ABOUTME: Resolves file URLs and plain paths, mirroring the tree into staging

use std::fs;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tracing::debug;
use walkdir::WalkDir;

use super::error::{FetchError, Result};
use super::{FetchRequest, Fetcher};

/// Fetcher for template sources already present on local disk. Accepts
/// `file://` URLs and plain paths; relative paths resolve against the
/// request's base URL when one is given.
#[derive(Debug, Default)]
pub struct LocalFetcher;

impl LocalFetcher {
    pub fn new() -> Self {
        Self
    }

    fn resolve_source(request: &FetchRequest) -> Result<PathBuf> {
        let raw = request
            .fetch_url
            .strip_prefix("file://")
            .unwrap_or(&request.fetch_url);

        if raw.contains("://") {
            return Err(FetchError::UnsupportedSource {
                url: request.fetch_url.clone(),
            });
        }

        let path = Path::new(raw);
        let resolved = if path.is_absolute() {
            path.to_path_buf()
        } else {
            match &request.base_url {
                Some(base) => {
                    let base = base.strip_prefix("file://").unwrap_or(base);
                    Path::new(base).join(path)
                }
                None => path.to_path_buf(),
            }
        };

        if !resolved.is_dir() {
            return Err(FetchError::SourceNotFound { path: resolved });
        }

        Ok(resolved)
    }

    fn mirror_tree(source: &Path, output: &Path) -> Result<()> {
        for entry in WalkDir::new(source).min_depth(1) {
            let entry = entry?;
            let relative = entry
                .path()
                .strip_prefix(source)
                .expect("walked entry is under its own root");
            let target = output.join(relative);

            if entry.file_type().is_dir() {
                fs::create_dir_all(&target)?;
            } else {
                if let Some(parent) = target.parent() {
                    fs::create_dir_all(parent)?;
                }
                fs::copy(entry.path(), &target)?;
            }
        }
        Ok(())
    }
}

#[async_trait]
impl Fetcher for LocalFetcher {
    async fn fetch_contents(&self, request: FetchRequest) -> Result<()> {
        let source = Self::resolve_source(&request)?;
        debug!(
            "Staging local template source {} -> {}",
            source.display(),
            request.output_path.display()
        );

        fs::create_dir_all(&request.output_path)?;
        Self::mirror_tree(&source, &request.output_path)
    }
}
