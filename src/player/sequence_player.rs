use std::sync::Arc;
use std::time::Instant;

use crate::assets::loader::{LoadEvent, LoadOpts, PendingLoads};
use crate::assets::source::FrameSource;
use crate::assets::tally::{LoadTally, Settle};
use crate::foundation::core::{FrameIndex, Rect, Viewport};
use crate::foundation::error::{FrameUnavailable, ScrollframeError, ScrollframeResult};
use crate::player::signal::PageSignal;
use crate::player::state::{FrozenFrame, LoadPhase, PaintStats, PlaybackState};
use crate::render::fit::cover_rect;
use crate::render::surface::{FrameRGBA, Surface};
use crate::sequence::frame_set::FrameSet;
use crate::sequence::mapping::{
    OverlayState, map_progress_to_frame, overlay_state, scroll_hint_visible,
};
use crate::sequence::naming::FrameNaming;
use crate::sequence::range::ActiveRange;

/// Construction options for a [`FrameSequencePlayer`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FrameSequenceOpts {
    /// Number of frame assets, `N >= 1`.
    pub frame_count: u32,
    /// First displayed frame; earlier frames are never shown.
    pub start_frame: FrameIndex,
    /// How frame indices map to asset paths.
    pub naming: FrameNaming,
}

/// Scroll-driven image-sequence player.
///
/// Owns the frame set and playback state, and is the only writer of its surface. It is driven
/// entirely by the caller: load completions via [`on_frame_settled`](Self::on_frame_settled),
/// scroll via [`on_scroll_update`](Self::on_scroll_update) /
/// [`on_region_leave`](Self::on_region_leave) / [`on_region_reenter`](Self::on_region_reenter),
/// and viewport changes via [`on_resize`](Self::on_resize).
///
/// Nothing in here fails at runtime: a frame that did not load is skipped and the previous
/// frame stays on screen.
pub struct FrameSequencePlayer<S: Surface> {
    naming: FrameNaming,
    frames: FrameSet,
    surface: S,
    tally: LoadTally,
    phase: LoadPhase,
    current: FrameIndex,
    frozen: Option<FrozenFrame>,
    overlay: Option<OverlayState>,
    hint_visible: bool,
    stats: PaintStats,
    signals: Vec<PageSignal>,
}

impl<S: Surface> FrameSequencePlayer<S> {
    /// Validate options and bind the surface. No loads are issued yet.
    pub fn new(opts: FrameSequenceOpts, surface: S) -> ScrollframeResult<Self> {
        opts.naming.validate()?;
        let frames = FrameSet::new(opts.frame_count, opts.start_frame)?;
        Ok(Self {
            naming: opts.naming,
            tally: LoadTally::new(opts.frame_count),
            current: frames.range().start(),
            frames,
            surface,
            phase: LoadPhase::Uninitialized,
            frozen: None,
            overlay: None,
            hint_visible: false,
            stats: PaintStats::default(),
            signals: Vec::new(),
        })
    }

    /// Enter `Loading` and return the `(index, path)` load requests the caller must issue.
    ///
    /// [`initialize`](Self::initialize) does this and fans the requests out itself; this entry
    /// point is for callers that bring their own image-loading plumbing.
    pub fn begin_loading(&mut self) -> ScrollframeResult<Vec<(FrameIndex, String)>> {
        if self.phase != LoadPhase::Uninitialized {
            return Err(ScrollframeError::validation(
                "frame sequence player is already initialized",
            ));
        }
        self.phase = LoadPhase::Loading;
        Ok((0..self.frames.frame_count())
            .map(|i| {
                let index = FrameIndex(i);
                (index, self.naming.path_for(index))
            })
            .collect())
    }

    /// Issue one load request per frame on `source` and enter `Loading`.
    ///
    /// Completions must be fed back through [`on_frame_settled`](Self::on_frame_settled), or
    /// with [`wait_until_loaded`](Self::wait_until_loaded) / [`poll_loads`](Self::poll_loads).
    #[tracing::instrument(skip_all, fields(frames = self.frames.frame_count()))]
    pub fn initialize(
        &mut self,
        source: Arc<dyn FrameSource>,
        opts: &LoadOpts,
    ) -> ScrollframeResult<PendingLoads> {
        let requests = self.begin_loading()?;
        match PendingLoads::spawn(source, requests, opts) {
            Ok(pending) => Ok(pending),
            Err(e) => {
                self.phase = LoadPhase::Uninitialized;
                Err(e)
            }
        }
    }

    /// Record one settled load. Success fills the slot; failure leaves it empty. Either way
    /// it counts toward completion, and the final settle makes the player ready.
    pub fn on_frame_settled(&mut self, event: LoadEvent) {
        if self.phase == LoadPhase::Uninitialized {
            tracing::debug!(frame = %event.index, "load settled before loading began; ignored");
            return;
        }
        let LoadEvent { index, outcome } = event;
        let ok = match outcome {
            Ok(frame) => match self.frames.insert(index, frame) {
                Ok(()) => true,
                Err(e) => {
                    tracing::warn!(frame = %index, "discarding load result: {e}");
                    return;
                }
            },
            Err(e) => {
                tracing::warn!(frame = %index, "failed to load frame: {e}");
                false
            }
        };
        self.record_settle(index, ok);
    }

    /// Settle every outstanding request as failed. Returns how many were expired.
    ///
    /// A late success for an expired index still fills its slot, but no longer counts.
    pub fn expire_pending_loads(&mut self) -> usize {
        let pending = self.tally.pending();
        if !pending.is_empty() {
            tracing::debug!(count = pending.len(), "expiring unsettled frame loads");
        }
        for &index in &pending {
            self.record_settle(index, false);
        }
        pending.len()
    }

    /// Block until every load settled or the load timeout expired.
    ///
    /// Returns whether the player is ready afterwards.
    pub fn wait_until_loaded(&mut self, pending: &PendingLoads) -> bool {
        while !self.is_loaded() {
            match pending.next_blocking() {
                Some(event) => self.on_frame_settled(event),
                None => {
                    if pending.expired(Instant::now()) {
                        self.expire_pending_loads();
                    }
                    break;
                }
            }
        }
        self.is_loaded()
    }

    /// Apply every load that has settled so far, without blocking, and expire the rest once
    /// the timeout has passed. Returns the number of events applied.
    pub fn poll_loads(&mut self, pending: &PendingLoads, now: Instant) -> usize {
        let mut applied = 0;
        while !self.is_loaded() {
            let Some(event) = pending.try_next() else {
                break;
            };
            self.on_frame_settled(event);
            applied += 1;
        }
        if !self.is_loaded() && pending.expired(now) {
            self.expire_pending_loads();
        }
        applied
    }

    fn record_settle(&mut self, index: FrameIndex, ok: bool) {
        match self.tally.settle(index, ok) {
            Settle::Ignored => {}
            Settle::Counted => self.signals.push(PageSignal::LoadProgress {
                percent: self.tally.percent(),
            }),
            Settle::Completed => {
                self.signals.push(PageSignal::LoadProgress {
                    percent: self.tally.percent(),
                });
                self.on_all_frames_settled();
            }
        }
    }

    fn on_all_frames_settled(&mut self) {
        if self.phase == LoadPhase::Ready {
            return;
        }
        self.phase = LoadPhase::Ready;
        let start = self.frames.range().start();
        tracing::debug!(
            available = self.frames.available(),
            failed = self.tally.failed(),
            "frame sequence ready"
        );
        self.current = start;
        let painted = self.paint(start);
        log_skip(painted);
        self.signals.push(PageSignal::Ready);
        self.hint_visible = true;
        self.signals.push(PageSignal::ScrollHint { visible: true });
    }

    /// Frame shown for `progress` (pure; clamps out-of-range input).
    pub fn map_progress_to_frame(&self, progress: f64) -> FrameIndex {
        map_progress_to_frame(self.frames.range(), progress)
    }

    /// Clear the surface and draw `index` cover-fit. Returns the destination rectangle.
    ///
    /// A frame that is not available leaves the surface untouched, so the previous frame
    /// stays visible. Nothing is drawn before the player is ready.
    pub fn paint(&mut self, index: FrameIndex) -> Result<Rect, FrameUnavailable> {
        if self.phase != LoadPhase::Ready {
            self.stats.skipped += 1;
            return Err(FrameUnavailable { index });
        }
        let frame = match self.frames.get(index) {
            Ok(frame) => frame,
            Err(e) => {
                self.stats.skipped += 1;
                return Err(e);
            }
        };
        let dst = cover_rect(frame.width, frame.height, self.surface.size());
        if let Err(e) = self.surface.prepare_frame(frame) {
            tracing::warn!(frame = %index, "surface cannot draw frame: {e}");
            self.stats.skipped += 1;
            return Err(FrameUnavailable { index });
        }
        self.surface.clear();
        if let Err(e) = self.surface.draw_frame(frame, dst) {
            tracing::warn!(frame = %index, "surface rejected frame: {e}");
            self.stats.skipped += 1;
            return Err(FrameUnavailable { index });
        }
        self.stats.painted += 1;
        Ok(dst)
    }

    /// React to a scroll-progress tick. Repaints only when the mapped frame changes.
    pub fn on_scroll_update(&mut self, progress: f64) {
        if self.phase != LoadPhase::Ready {
            tracing::debug!(progress, "scroll update before ready ignored");
            return;
        }
        let next = self.map_progress_to_frame(progress);
        if next != self.current {
            self.current = next;
            let painted = self.paint(next);
            log_skip(painted);
        }

        let overlay = overlay_state(progress);
        if self.overlay != Some(overlay) {
            self.overlay = Some(overlay);
            self.signals.push(PageSignal::Overlay(overlay));
        }
        let hint = scroll_hint_visible(progress, self.is_loaded());
        if hint != self.hint_visible {
            self.hint_visible = hint;
            self.signals.push(PageSignal::ScrollHint { visible: hint });
        }
    }

    /// Scroll moved past the end of the region: paint the terminal frame and freeze it.
    pub fn on_region_leave(&mut self) {
        if self.phase != LoadPhase::Ready {
            tracing::debug!("region leave before ready ignored");
            return;
        }
        let last = self.frames.range().last();
        self.current = last;
        let painted = self.paint(last);
        log_skip(painted);

        let snapshot = self.surface.snapshot();
        self.frozen = Some(FrozenFrame {
            snapshot,
            visible: true,
        });
        tracing::debug!(frame = %last, "froze terminal frame");
        self.signals.push(PageSignal::Frozen);
    }

    /// Scroll came back into the region from beyond its end: hide the snapshot.
    pub fn on_region_reenter(&mut self) {
        if let Some(frozen) = self.frozen.as_mut()
            && frozen.visible
        {
            frozen.visible = false;
            tracing::debug!("unfroze frame sequence");
            self.signals.push(PageSignal::Unfrozen);
        }
    }

    /// Resize the surface and, once ready, repaint the current frame.
    pub fn on_resize(&mut self, size: Viewport) -> ScrollframeResult<()> {
        self.surface.resize(size)?;
        if self.phase == LoadPhase::Ready {
            let painted = self.paint(self.current);
            log_skip(painted);
        }
        Ok(())
    }

    /// Drain queued page signals, oldest first.
    pub fn take_signals(&mut self) -> Vec<PageSignal> {
        std::mem::take(&mut self.signals)
    }

    /// What the page shows right now: the frozen snapshot while frozen, else the live surface.
    pub fn presented(&self) -> FrameRGBA {
        match &self.frozen {
            Some(frozen) if frozen.visible => frozen.snapshot.clone(),
            _ => self.surface.snapshot(),
        }
    }

    /// Current playback state.
    pub fn state(&self) -> PlaybackState {
        PlaybackState {
            phase: self.phase,
            current_frame: self.current,
            frozen: self.is_frozen(),
        }
    }

    /// Load lifecycle phase.
    pub fn phase(&self) -> LoadPhase {
        self.phase
    }

    /// `true` once every load has settled.
    pub fn is_loaded(&self) -> bool {
        self.phase == LoadPhase::Ready
    }

    /// `true` while the static snapshot is shown.
    pub fn is_frozen(&self) -> bool {
        self.frozen.as_ref().is_some_and(|f| f.visible)
    }

    /// Last frame requested for display.
    pub fn current_frame(&self) -> FrameIndex {
        self.current
    }

    /// Active scroll range.
    pub fn range(&self) -> ActiveRange {
        self.frames.range()
    }

    /// Share of loads settled, `0..=100`.
    pub fn load_percent(&self) -> u8 {
        self.tally.percent()
    }

    /// Last captured snapshot, shown or not.
    pub fn frozen_frame(&self) -> Option<&FrozenFrame> {
        self.frozen.as_ref()
    }

    /// Loaded frames.
    pub fn frames(&self) -> &FrameSet {
        &self.frames
    }

    /// Paint counters.
    pub fn stats(&self) -> PaintStats {
        self.stats
    }

    /// Borrow the drawing surface.
    pub fn surface(&self) -> &S {
        &self.surface
    }
}

fn log_skip(painted: Result<Rect, FrameUnavailable>) {
    if let Err(e) = painted {
        tracing::trace!("{e}; keeping previous frame");
    }
}

impl<S: Surface> std::fmt::Debug for FrameSequencePlayer<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FrameSequencePlayer")
            .field("frames", &self.frames.frame_count())
            .field("range", &self.frames.range())
            .field("state", &self.state())
            .field("stats", &self.stats)
            .finish()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/player/sequence_player.rs"]
mod tests;
