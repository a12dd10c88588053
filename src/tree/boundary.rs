// ABOUTME: Workspace boundary enforcement for destination paths
// ABOUTME: Lexically resolves dot segments and verifies containment before any write

use std::path::{Component, Path, PathBuf};

use super::error::{Result, TreeError};

/// Lexically resolve `.` and `..` components without touching the
/// filesystem. The candidate may not exist yet, so canonicalization is not
/// an option; escapes that cannot be resolved stay visible as leading `..`
/// components and fail the containment check.
pub fn normalize(path: &Path) -> PathBuf {
    let mut resolved = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                if !resolved.pop() {
                    resolved.push(Component::ParentDir);
                }
            }
            other => resolved.push(other.as_os_str()),
        }
    }
    resolved
}

/// Verify that `candidate`, resolved against `root` when relative, stays
/// inside `root`. Returns the resolved absolute path on success. Path
/// segments may carry attacker-influenced template output, so this runs on
/// the fully rendered path of every write target, never only on raw input.
pub fn ensure_contained(candidate: &Path, root: &Path) -> Result<PathBuf> {
    let root = normalize(root);
    let resolved = if candidate.is_absolute() {
        normalize(candidate)
    } else {
        normalize(&root.join(candidate))
    };

    if !resolved.starts_with(&root) {
        return Err(TreeError::OutsideWorkspace {
            path: resolved,
            root,
        });
    }

    Ok(resolved)
}
