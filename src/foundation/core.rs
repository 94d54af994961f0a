use crate::foundation::error::{ScrollframeError, ScrollframeResult};

pub use kurbo::{Affine, Rect};

/// Index of a frame inside a [`FrameSet`](crate::FrameSet), counted from the first asset file.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct FrameIndex(pub u32);

impl FrameIndex {
    /// Slot position of this frame.
    pub fn as_usize(self) -> usize {
        self.0 as usize
    }
}

impl std::fmt::Display for FrameIndex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:03}", self.0)
    }
}

/// Pixel size of the drawing surface, normally the page viewport.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Viewport {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl Viewport {
    /// Largest edge the CPU pixmap can address.
    pub const MAX_EDGE: u32 = u16::MAX as u32;

    /// Build a viewport, rejecting empty or oversized edges.
    pub fn new(width: u32, height: u32) -> ScrollframeResult<Self> {
        let vp = Self { width, height };
        vp.validate()?;
        Ok(vp)
    }

    /// Check that both edges are in `1..=MAX_EDGE`.
    pub fn validate(self) -> ScrollframeResult<()> {
        if self.width == 0 || self.height == 0 {
            return Err(ScrollframeError::validation(format!(
                "viewport must be non-empty, got {}x{}",
                self.width, self.height
            )));
        }
        if self.width > Self::MAX_EDGE || self.height > Self::MAX_EDGE {
            return Err(ScrollframeError::validation(format!(
                "viewport edge exceeds {}: {}x{}",
                Self::MAX_EDGE,
                self.width,
                self.height
            )));
        }
        Ok(())
    }

    /// Full-surface rectangle anchored at the origin.
    pub fn rect(self) -> Rect {
        Rect::new(0.0, 0.0, f64::from(self.width), f64::from(self.height))
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            width: 1920,
            height: 1080,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
