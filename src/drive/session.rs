use std::path::Path;
use std::sync::Arc;
use std::time::{Duration, Instant};

use crate::assets::loader::{LoadOpts, PendingLoads};
use crate::assets::source::{DirFrameSource, FrameSource};
use crate::config::SequenceConfig;
use crate::drive::debounce::Debouncer;
use crate::drive::region::{RegionEvent, RegionTracker};
use crate::drive::script::{ScriptAction, ScrollScript};
use crate::foundation::core::Viewport;
use crate::foundation::error::ScrollframeResult;
use crate::player::sequence_player::FrameSequencePlayer;
use crate::render::cpu::CpuSurface;
use crate::render::surface::{FrameRGBA, Surface};

/// The page around a [`FrameSequencePlayer`]: scroll trigger, debounced resize and load pumping.
///
/// The scroll trigger is armed only once the player is ready; scroll offsets seen earlier are
/// remembered and replayed at arming time.
pub struct PageSession<S: Surface> {
    player: FrameSequencePlayer<S>,
    region: RegionTracker,
    resize: Debouncer<Viewport>,
    pending: Option<PendingLoads>,
    scroll: f64,
    armed: bool,
}

/// Counters from a [`PageSession::replay`] run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize)]
pub struct ReplayStats {
    /// Scripted events applied.
    pub events: usize,
    /// Captures handed to the callback.
    pub captures: usize,
    /// Debounced resizes applied.
    pub resizes: usize,
}

impl PageSession<CpuSurface> {
    /// Build a CPU-backed session from `cfg`, loading frames from `assets_root`.
    #[tracing::instrument(skip(cfg))]
    pub fn from_config(cfg: &SequenceConfig, assets_root: &Path) -> ScrollframeResult<Self> {
        cfg.validate()?;
        let surface = CpuSurface::new(cfg.viewport)?;
        let player = FrameSequencePlayer::new(cfg.sequence_opts(), surface)?;
        let region = RegionTracker::new(cfg.region_geometry(), f64::from(cfg.viewport.height))?;
        let mut session = Self::new(player, region, cfg.resize_debounce());
        session.start_loading(Arc::new(DirFrameSource::new(assets_root)), &cfg.load_opts())?;
        Ok(session)
    }
}

impl<S: Surface> PageSession<S> {
    /// Compose a session around an uninitialized player.
    pub fn new(
        player: FrameSequencePlayer<S>,
        region: RegionTracker,
        resize_wait: Duration,
    ) -> Self {
        Self {
            player,
            region,
            resize: Debouncer::new(resize_wait),
            pending: None,
            scroll: 0.0,
            armed: false,
        }
    }

    /// Issue frame loads on `source`.
    pub fn start_loading(
        &mut self,
        source: Arc<dyn FrameSource>,
        opts: &LoadOpts,
    ) -> ScrollframeResult<()> {
        self.pending = Some(self.player.initialize(source, opts)?);
        Ok(())
    }

    /// Block until the player is ready (or loads time out), then arm the scroll trigger.
    pub fn wait_until_loaded(&mut self) -> bool {
        if let Some(pending) = &self.pending {
            self.player.wait_until_loaded(pending);
        }
        self.arm_if_ready();
        self.player.is_loaded()
    }

    /// Non-blocking housekeeping: apply settled loads and flush a due resize.
    pub fn pump(&mut self, now: Instant) -> ScrollframeResult<bool> {
        if let Some(pending) = &self.pending {
            self.player.poll_loads(pending, now);
        }
        self.arm_if_ready();
        self.flush_resize(now)
    }

    /// Scroll the page to `offset`.
    pub fn scroll_to(&mut self, offset: f64) {
        self.scroll = offset;
        if !self.armed {
            return;
        }
        let events = self.region.scroll_to(offset);
        self.dispatch(&events);
    }

    /// Record a viewport resize. It is applied once no newer resize arrived for the debounce
    /// window.
    pub fn request_resize(&mut self, size: Viewport, now: Instant) {
        self.resize.push(size, now);
    }

    /// Apply the debounced resize if its window elapsed. Returns whether one was applied.
    pub fn flush_resize(&mut self, now: Instant) -> ScrollframeResult<bool> {
        let Some(size) = self.resize.poll(now) else {
            return Ok(false);
        };
        self.player.on_resize(size)?;
        self.region.set_viewport_height(f64::from(size.height));
        if self.armed {
            // Region end moved with the viewport; re-evaluate where the page stands.
            let events = self.region.scroll_to(self.scroll);
            self.dispatch(&events);
        }
        Ok(true)
    }

    /// Run `script` with `start` as time zero, handing every capture to `on_capture`.
    #[tracing::instrument(skip_all, fields(events = script.events.len()))]
    pub fn replay(
        &mut self,
        script: &ScrollScript,
        start: Instant,
        mut on_capture: impl FnMut(&str, &FrameRGBA) -> ScrollframeResult<()>,
    ) -> ScrollframeResult<ReplayStats> {
        let mut stats = ReplayStats::default();
        let mut last = start;
        for ev in &script.events {
            let now = start + Duration::from_millis(ev.at_ms);
            last = now;
            if self.pump(now)? {
                stats.resizes += 1;
            }
            match &ev.action {
                ScriptAction::Scroll { offset } => self.scroll_to(*offset),
                ScriptAction::Resize { width, height } => {
                    self.request_resize(Viewport::new(*width, *height)?, now);
                }
                ScriptAction::Capture { name } => {
                    on_capture(name, &self.player.presented())?;
                    stats.captures += 1;
                }
            }
            stats.events += 1;
        }
        if self.flush_resize(last + self.resize.wait())? {
            stats.resizes += 1;
        }
        tracing::debug!(?stats, "replay finished");
        Ok(stats)
    }

    /// The player.
    pub fn player(&self) -> &FrameSequencePlayer<S> {
        &self.player
    }

    /// Mutable access to the player, e.g. to drain page signals.
    pub fn player_mut(&mut self) -> &mut FrameSequencePlayer<S> {
        &mut self.player
    }

    /// The scroll trigger.
    pub fn region(&self) -> &RegionTracker {
        &self.region
    }

    /// Whether the scroll trigger is armed.
    pub fn is_armed(&self) -> bool {
        self.armed
    }

    fn arm_if_ready(&mut self) {
        if self.armed || !self.player.is_loaded() {
            return;
        }
        self.armed = true;
        let events = self.region.scroll_to(self.scroll);
        self.dispatch(&events);
    }

    fn dispatch(&mut self, events: &[RegionEvent]) {
        for ev in events {
            match *ev {
                RegionEvent::Update(p) => self.player.on_scroll_update(p),
                RegionEvent::Leave => self.player.on_region_leave(),
                RegionEvent::EnterBack => self.player.on_region_reenter(),
            }
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/drive/session.rs"]
mod tests;
