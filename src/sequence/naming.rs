use crate::foundation::core::FrameIndex;
use crate::foundation::error::{ScrollframeError, ScrollframeResult};

/// Asset naming convention: `{prefix}{index zero-padded}{extension}`.
///
/// With the default pad width of 3, index 7 under prefix `intro/foo_` and extension `.png`
/// resolves to `intro/foo_007.png`. Indices wider than the pad width are written in full.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct FrameNaming {
    /// Common path prefix, relative to the asset root.
    pub prefix: String,
    /// Common extension including the dot.
    pub extension: String,
    /// Minimum digit count of the numeric suffix.
    #[serde(default = "FrameNaming::default_pad_width")]
    pub pad_width: usize,
}

impl FrameNaming {
    /// Naming with the standard 3-digit suffix.
    pub fn new(prefix: impl Into<String>, extension: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            extension: extension.into(),
            pad_width: Self::default_pad_width(),
        }
    }

    fn default_pad_width() -> usize {
        3
    }

    /// Resolve the asset path for `index`.
    pub fn path_for(&self, index: FrameIndex) -> String {
        format!(
            "{}{:0width$}{}",
            self.prefix,
            index.0,
            self.extension,
            width = self.pad_width
        )
    }

    /// Check that the convention can produce usable relative paths.
    pub fn validate(&self) -> ScrollframeResult<()> {
        if self.pad_width == 0 {
            return Err(ScrollframeError::validation(
                "frame naming pad_width must be >= 1",
            ));
        }
        if self.prefix.starts_with('/') || self.prefix.split(['/', '\\']).any(|c| c == "..") {
            return Err(ScrollframeError::validation(format!(
                "frame naming prefix must stay relative to the asset root: '{}'",
                self.prefix
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/sequence/naming.rs"]
mod tests;
