// ABOUTME: Template source retrieval module
// ABOUTME: Defines the fetcher contract and the built-in local filesystem fetcher

pub mod error;
pub mod local;

use std::path::PathBuf;

use async_trait::async_trait;

pub use error::{FetchError, Result};
pub use local::LocalFetcher;

/// Request to materialize a template source into a staging directory.
#[derive(Debug, Clone)]
pub struct FetchRequest {
    /// Base used to resolve relative source locators
    pub base_url: Option<String>,
    /// The template source locator
    pub fetch_url: String,
    /// Staging directory to populate
    pub output_path: PathBuf,
}

/// Retrieval collaborator: after `fetch_contents` resolves, `output_path`
/// contains the fully materialized source tree, ready for walking. How the
/// tree is produced (plain copy, VCS clone, archive unpack) is the
/// implementation's concern.
#[async_trait]
pub trait Fetcher: Send + Sync {
    async fn fetch_contents(&self, request: FetchRequest) -> Result<()>;
}
