use crate::sequence::mapping::OverlayState;

/// Notification from the player to the surrounding page.
///
/// The player queues these as its state changes; the page drains them with
/// [`FrameSequencePlayer::take_signals`](crate::FrameSequencePlayer::take_signals) and applies
/// them to whatever elements it owns (loader bar, title overlay, scroll hint, frozen backdrop).
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
#[serde(tag = "signal", rename_all = "snake_case")]
pub enum PageSignal {
    /// Share of frame loads settled, `0..=100`.
    LoadProgress {
        /// Rounded percentage.
        percent: u8,
    },
    /// Every load settled and the start frame is on screen; the loader can go.
    Ready,
    /// Title overlay changed.
    Overlay(OverlayState),
    /// Scroll hint visibility changed.
    ScrollHint {
        /// Whether the hint should be shown.
        visible: bool,
    },
    /// The terminal frame was captured and the static snapshot is now shown.
    Frozen,
    /// The snapshot is hidden and the live surface is back in control.
    Unfrozen,
}
