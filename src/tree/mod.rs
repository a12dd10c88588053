// ABOUTME: Tree walking module for the imprint engine
// ABOUTME: Exports the copier, copy-pattern matcher, and workspace boundary checks

pub mod boundary;
pub mod copier;
pub mod error;
pub mod matcher;

pub use boundary::ensure_contained;
pub use copier::TreeCopier;
pub use error::{Result, TreeError};
pub use matcher::CopyMatcher;
