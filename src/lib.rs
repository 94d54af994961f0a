//! scrollframe is a scroll-driven image-sequence player ("scrollytelling").
//!
//! A fixed set of frame images is loaded once, a normalized scroll progress through a page region
//! is mapped onto a frame index, and that frame is painted cover-fit onto a raster surface. When
//! scroll leaves the region the terminal frame is frozen into a static snapshot; coming back
//! hands control back to the live surface.
//!
//! # Layers
//!
//! 1. **Pure math**: [`map_progress_to_frame`], [`overlay_opacity`], [`cover_rect`]
//! 2. **Player**: [`FrameSequencePlayer`], a single-threaded state machine
//!    (`Uninitialized -> Loading -> Ready`, plus frozen/live) over a [`Surface`]
//! 3. **Plumbing**: [`PendingLoads`] fans frame loads out on a rayon pool, [`PageSession`] wires
//!    a [`RegionTracker`] and a resize [`Debouncer`] to the player
//!
//! Failures are non-fatal: a frame that fails to load (or times out) is
//! [`FrameUnavailable`] and painting it leaves the previous frame on screen.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod assets;
mod config;
mod drive;
mod foundation;
mod player;
mod render;
mod sequence;

pub use assets::decode::{PreparedFrame, decode_frame};
pub use assets::loader::{LoadEvent, LoadOpts, PendingLoads};
pub use assets::source::{DirFrameSource, FrameSource, normalize_rel_path};
pub use assets::tally::{LoadTally, Settle};
pub use config::{FramesConfig, LoadingConfig, SequenceConfig};
pub use drive::debounce::Debouncer;
pub use drive::region::{RegionEvent, RegionGeometry, RegionTracker};
pub use drive::script::{ScriptAction, ScriptEvent, ScrollScript};
pub use drive::session::{PageSession, ReplayStats};
pub use foundation::core::{Affine, FrameIndex, Rect, Viewport};
pub use foundation::error::{FrameUnavailable, ScrollframeError, ScrollframeResult};
pub use player::sequence_player::{FrameSequenceOpts, FrameSequencePlayer};
pub use player::signal::PageSignal;
pub use player::state::{FrozenFrame, LoadPhase, PaintStats, PlaybackState};
pub use render::cpu::CpuSurface;
pub use render::fit::cover_rect;
pub use render::surface::{FrameRGBA, Surface};
pub use sequence::frame_set::FrameSet;
pub use sequence::mapping::{
    OVERLAY_FADE_END, OVERLAY_FADE_START, OverlayState, SCROLL_HINT_MAX_PROGRESS,
    map_progress_to_frame, overlay_opacity, overlay_state, scroll_hint_visible,
};
pub use sequence::naming::FrameNaming;
pub use sequence::range::ActiveRange;
