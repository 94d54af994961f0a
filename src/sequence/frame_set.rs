use crate::assets::decode::PreparedFrame;
use crate::foundation::core::FrameIndex;
use crate::foundation::error::{FrameUnavailable, ScrollframeError, ScrollframeResult};
use crate::sequence::range::ActiveRange;

/// Fixed-length set of decoded frames plus the range scroll maps onto.
///
/// Slots start empty and are filled at most once as loads succeed; a failed load leaves its
/// slot empty for the lifetime of the set.
#[derive(Clone, Debug)]
pub struct FrameSet {
    slots: Vec<Option<PreparedFrame>>,
    range: ActiveRange,
}

impl FrameSet {
    /// Largest supported frame count.
    pub const MAX_FRAMES: u32 = 100_000;

    /// Empty set of `frame_count` slots mapping scroll onto `[start, frame_count - 1]`.
    pub fn new(frame_count: u32, start: FrameIndex) -> ScrollframeResult<Self> {
        if frame_count > Self::MAX_FRAMES {
            return Err(ScrollframeError::validation(format!(
                "frame count {frame_count} exceeds {}",
                Self::MAX_FRAMES
            )));
        }
        let range = ActiveRange::to_end(start, frame_count)?;
        Ok(Self {
            slots: vec![None; frame_count as usize],
            range,
        })
    }

    /// Total number of slots, `N`.
    pub fn frame_count(&self) -> u32 {
        self.slots.len() as u32
    }

    /// Active scroll range.
    pub fn range(&self) -> ActiveRange {
        self.range
    }

    /// Store a decoded frame. A slot that is already filled is left untouched.
    pub fn insert(&mut self, index: FrameIndex, frame: PreparedFrame) -> ScrollframeResult<()> {
        let count = self.frame_count();
        let slot = self.slots.get_mut(index.as_usize()).ok_or_else(|| {
            ScrollframeError::validation(format!("frame {index} outside set of {count}"))
        })?;
        if slot.is_none() {
            *slot = Some(frame);
        }
        Ok(())
    }

    /// Decoded frame at `index`, if it loaded.
    pub fn get(&self, index: FrameIndex) -> Result<&PreparedFrame, FrameUnavailable> {
        self.slots
            .get(index.as_usize())
            .and_then(Option::as_ref)
            .ok_or(FrameUnavailable { index })
    }

    /// Number of slots holding a decoded frame.
    pub fn available(&self) -> usize {
        self.slots.iter().filter(|s| s.is_some()).count()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/sequence/frame_set.rs"]
mod tests;
