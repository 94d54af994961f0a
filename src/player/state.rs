use crate::foundation::core::FrameIndex;
use crate::render::surface::FrameRGBA;

/// Load lifecycle. `Ready` is entered once and never left.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LoadPhase {
    /// Constructed; no loads issued.
    Uninitialized,
    /// Loads issued, not all settled.
    Loading,
    /// Every load settled (successfully or not).
    Ready,
}

/// Observable playback state.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
pub struct PlaybackState {
    /// Load lifecycle phase.
    pub phase: LoadPhase,
    /// Last frame requested for display, always inside the active range.
    pub current_frame: FrameIndex,
    /// Whether the static snapshot is shown instead of the live surface.
    pub frozen: bool,
}

impl PlaybackState {
    /// `true` once every frame load has settled.
    pub fn is_loaded(&self) -> bool {
        self.phase == LoadPhase::Ready
    }
}

/// Static capture of the surface taken when scroll leaves the region.
#[derive(Clone, Debug)]
pub struct FrozenFrame {
    /// Captured pixels.
    pub snapshot: FrameRGBA,
    /// Whether the page currently shows it.
    pub visible: bool,
}

/// Paint counters, mostly for diagnostics.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize)]
pub struct PaintStats {
    /// Frames actually drawn onto the surface.
    pub painted: u64,
    /// Paint requests skipped because the frame was unavailable.
    pub skipped: u64,
}
