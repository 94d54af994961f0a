use std::path::{Path, PathBuf};

use anyhow::Context;

use crate::assets::decode::{PreparedFrame, decode_frame};
use crate::foundation::error::{ScrollframeError, ScrollframeResult};

/// Image-loading collaborator: resolves one frame path to decoded pixels.
///
/// Implementations are called from loader worker threads, once per requested index.
pub trait FrameSource: Send + Sync {
    /// Load and decode the frame stored at `rel_path`.
    fn load(&self, rel_path: &str) -> ScrollframeResult<PreparedFrame>;
}

/// Filesystem-backed [`FrameSource`] resolving paths against a root directory.
#[derive(Clone, Debug)]
pub struct DirFrameSource {
    root: PathBuf,
}

impl DirFrameSource {
    /// Source reading frames below `root`.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Root directory used when resolving frame paths.
    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl FrameSource for DirFrameSource {
    fn load(&self, rel_path: &str) -> ScrollframeResult<PreparedFrame> {
        let path = self.root.join(normalize_rel_path(rel_path)?);
        let bytes =
            std::fs::read(&path).with_context(|| format!("read frame '{}'", path.display()))?;
        decode_frame(&bytes).map_err(|e| {
            ScrollframeError::load(format!("decode frame '{}': {e}", path.display()))
        })
    }
}

/// Normalize a relative asset path: forward slashes, no `.` components, no escaping the root.
pub fn normalize_rel_path(source: &str) -> ScrollframeResult<String> {
    let s = source.replace('\\', "/");
    if s.starts_with('/') {
        return Err(ScrollframeError::validation(format!(
            "frame path must be relative: '{source}'"
        )));
    }

    let mut parts = Vec::new();
    for part in s.split('/') {
        match part {
            "" | "." => {}
            ".." => {
                return Err(ScrollframeError::validation(format!(
                    "frame path must not contain '..': '{source}'"
                )));
            }
            p => parts.push(p),
        }
    }
    if parts.is_empty() {
        return Err(ScrollframeError::validation("frame path must be non-empty"));
    }
    Ok(parts.join("/"))
}

#[cfg(test)]
#[path = "../../tests/unit/assets/source.rs"]
mod tests;
