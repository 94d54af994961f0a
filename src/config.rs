use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use std::time::Duration;

use crate::assets::loader::LoadOpts;
use crate::drive::region::RegionGeometry;
use crate::foundation::core::{FrameIndex, Viewport};
use crate::foundation::error::{ScrollframeError, ScrollframeResult};
use crate::player::sequence_player::FrameSequenceOpts;
use crate::sequence::frame_set::FrameSet;
use crate::sequence::naming::FrameNaming;

/// JSON-facing configuration of one scroll-driven sequence.
///
/// Relative frame paths resolve against the directory holding the config file.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct SequenceConfig {
    /// Frame assets.
    pub frames: FramesConfig,
    /// Initial surface size.
    #[serde(default)]
    pub viewport: Viewport,
    /// Loader behaviour.
    #[serde(default)]
    pub loading: LoadingConfig,
    /// Trigger element extent; defaults to five viewports starting at the page top.
    #[serde(default)]
    pub region: Option<RegionGeometry>,
    /// Resize debounce window in milliseconds.
    #[serde(default = "SequenceConfig::default_resize_debounce_ms")]
    pub resize_debounce_ms: u64,
}

/// Frame set description.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct FramesConfig {
    /// Number of frame files.
    #[serde(default = "FramesConfig::default_count")]
    pub count: u32,
    /// First frame shown; earlier frames are skipped.
    #[serde(default = "FramesConfig::default_start")]
    pub start: u32,
    /// Naming convention.
    #[serde(flatten)]
    pub naming: FrameNaming,
}

impl FramesConfig {
    fn default_count() -> u32 {
        68
    }

    fn default_start() -> u32 {
        5
    }
}

/// Loader configuration.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct LoadingConfig {
    /// Loader worker threads; `None` lets rayon decide.
    #[serde(default)]
    pub threads: Option<usize>,
    /// Per-sequence load timeout in milliseconds; `None` waits forever.
    #[serde(default = "LoadingConfig::default_timeout_ms")]
    pub timeout_ms: Option<u64>,
}

impl LoadingConfig {
    fn default_timeout_ms() -> Option<u64> {
        Some(10_000)
    }
}

impl Default for LoadingConfig {
    fn default() -> Self {
        Self {
            threads: None,
            timeout_ms: Self::default_timeout_ms(),
        }
    }
}

impl SequenceConfig {
    fn default_resize_debounce_ms() -> u64 {
        150
    }

    /// Parse a configuration from a JSON reader.
    pub fn from_reader<R: std::io::Read>(r: R) -> ScrollframeResult<Self> {
        let cfg: Self = serde_json::from_reader(r)
            .map_err(|e| ScrollframeError::config(format!("parse sequence config JSON: {e}")))?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Parse a configuration from a JSON file on disk.
    pub fn from_path(path: impl AsRef<Path>) -> ScrollframeResult<Self> {
        let path = path.as_ref();
        let f = File::open(path).map_err(|e| {
            ScrollframeError::config(format!("open sequence config '{}': {e}", path.display()))
        })?;
        Self::from_reader(BufReader::new(f))
    }

    /// Check frame counts, viewport bounds and region geometry.
    pub fn validate(&self) -> ScrollframeResult<()> {
        if self.frames.count == 0 || self.frames.count > FrameSet::MAX_FRAMES {
            return Err(ScrollframeError::validation(format!(
                "frames.count must be in 1..={}, got {}",
                FrameSet::MAX_FRAMES,
                self.frames.count
            )));
        }
        if self.frames.start >= self.frames.count {
            return Err(ScrollframeError::validation(format!(
                "frames.start ({}) must be < frames.count ({})",
                self.frames.start, self.frames.count
            )));
        }
        self.frames.naming.validate()?;
        self.viewport.validate()?;
        if let Some(region) = self.region {
            region.validate()?;
        }
        if self.loading.threads == Some(0) {
            return Err(ScrollframeError::validation(
                "loading.threads must be >= 1 when set",
            ));
        }
        Ok(())
    }

    /// Player construction options.
    pub fn sequence_opts(&self) -> FrameSequenceOpts {
        FrameSequenceOpts {
            frame_count: self.frames.count,
            start_frame: FrameIndex(self.frames.start),
            naming: self.frames.naming.clone(),
        }
    }

    /// Loader options.
    pub fn load_opts(&self) -> LoadOpts {
        LoadOpts {
            threads: self.loading.threads,
            timeout: self.loading.timeout_ms.map(Duration::from_millis),
        }
    }

    /// Region geometry, falling back to five viewport heights from the page top.
    pub fn region_geometry(&self) -> RegionGeometry {
        self.region.unwrap_or(RegionGeometry {
            top: 0.0,
            height: f64::from(self.viewport.height) * 5.0,
        })
    }

    /// Resize debounce window.
    pub fn resize_debounce(&self) -> Duration {
        Duration::from_millis(self.resize_debounce_ms)
    }
}

#[cfg(test)]
#[path = "../tests/unit/config.rs"]
mod tests;
