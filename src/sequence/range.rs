use crate::foundation::core::FrameIndex;
use crate::foundation::error::{ScrollframeError, ScrollframeResult};

/// Inclusive sub-range `[start, last]` of a frame set that scroll progress maps onto.
///
/// Frames before `start` are discard frames (e.g. leading black frames of the source video) and
/// are never displayed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ActiveRange {
    start: FrameIndex,
    last: FrameIndex,
}

impl ActiveRange {
    /// Build a range, enforcing `0 <= start <= last <= frame_count - 1`.
    pub fn new(start: FrameIndex, last: FrameIndex, frame_count: u32) -> ScrollframeResult<Self> {
        if frame_count == 0 {
            return Err(ScrollframeError::validation("frame_count must be >= 1"));
        }
        if start > last {
            return Err(ScrollframeError::validation(format!(
                "active range start {start} must be <= last {last}"
            )));
        }
        if last.0 >= frame_count {
            return Err(ScrollframeError::validation(format!(
                "active range last {last} must be < frame_count {frame_count}"
            )));
        }
        Ok(Self { start, last })
    }

    /// Range from `start` to the final frame of a set of `frame_count` frames.
    pub fn to_end(start: FrameIndex, frame_count: u32) -> ScrollframeResult<Self> {
        if frame_count == 0 {
            return Err(ScrollframeError::validation("frame_count must be >= 1"));
        }
        Self::new(start, FrameIndex(frame_count - 1), frame_count)
    }

    /// First displayed frame.
    pub fn start(self) -> FrameIndex {
        self.start
    }

    /// Terminal frame.
    pub fn last(self) -> FrameIndex {
        self.last
    }

    /// Number of frame steps between `start` and `last`.
    pub fn span(self) -> u32 {
        self.last.0 - self.start.0
    }

    /// Whether `f` lies inside the range.
    pub fn contains(self, f: FrameIndex) -> bool {
        self.start <= f && f <= self.last
    }

    /// Clamp `f` into the range.
    pub fn clamp(self, f: FrameIndex) -> FrameIndex {
        FrameIndex(f.0.clamp(self.start.0, self.last.0))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/sequence/range.rs"]
mod tests;
