//! Pure scroll-progress math. Nothing here touches a surface or a clock.

use crate::foundation::core::FrameIndex;
use crate::foundation::math::{clamp01, lerp};
use crate::sequence::range::ActiveRange;

/// Progress below which the title overlay is fully opaque.
pub const OVERLAY_FADE_START: f64 = 0.20;
/// Progress at and beyond which the title overlay is hidden.
pub const OVERLAY_FADE_END: f64 = 0.30;
/// Scroll hint stays visible up to and including this progress.
pub const SCROLL_HINT_MAX_PROGRESS: f64 = 0.05;

/// Map normalized scroll progress onto the active range.
///
/// `round(start + p * (last - start))`, with `p` clamped to `[0, 1]` first so that overshoot from
/// fast scrolling lands on the range ends instead of outside them.
pub fn map_progress_to_frame(range: ActiveRange, progress: f64) -> FrameIndex {
    let p = clamp01(progress);
    let idx = lerp(f64::from(range.start().0), f64::from(range.last().0), p).round();
    range.clamp(FrameIndex(idx as u32))
}

/// Title overlay presentation derived from progress.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct OverlayState {
    /// Opacity in `[0, 1]`.
    pub opacity: f64,
    /// Whether the overlay is shown at all.
    pub visible: bool,
}

/// Overlay opacity: `1` below 0.20, linear fade to `0` over `[0.20, 0.30]`, `0` from 0.30 on.
pub fn overlay_opacity(progress: f64) -> f64 {
    let p = clamp01(progress);
    if p < OVERLAY_FADE_START {
        1.0
    } else if p < OVERLAY_FADE_END {
        1.0 - (p - OVERLAY_FADE_START) / (OVERLAY_FADE_END - OVERLAY_FADE_START)
    } else {
        0.0
    }
}

/// Overlay opacity plus visibility (hidden once the fade completes).
pub fn overlay_state(progress: f64) -> OverlayState {
    OverlayState {
        opacity: overlay_opacity(progress),
        visible: clamp01(progress) < OVERLAY_FADE_END,
    }
}

/// The scroll hint is shown only before scrolling has meaningfully started and once frames are in.
pub fn scroll_hint_visible(progress: f64, loaded: bool) -> bool {
    loaded && clamp01(progress) <= SCROLL_HINT_MAX_PROGRESS
}

#[cfg(test)]
#[path = "../../tests/unit/sequence/mapping.rs"]
mod tests;
