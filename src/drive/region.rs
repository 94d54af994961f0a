use crate::foundation::error::{ScrollframeError, ScrollframeResult};
use crate::foundation::math::clamp01;

/// Vertical extent of the trigger element in page coordinates.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct RegionGeometry {
    /// Page offset of the element's top edge.
    pub top: f64,
    /// Element height.
    pub height: f64,
}

impl RegionGeometry {
    /// Check for a finite, non-empty extent.
    pub fn validate(self) -> ScrollframeResult<()> {
        if !self.top.is_finite() || !self.height.is_finite() || self.height <= 0.0 {
            return Err(ScrollframeError::validation(format!(
                "region must have finite top and positive height, got top={} height={}",
                self.top, self.height
            )));
        }
        Ok(())
    }
}

/// Signals the scroll-trigger side delivers to the player.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum RegionEvent {
    /// Clamped progress through the region changed.
    Update(f64),
    /// Scroll moved past the end of the region.
    Leave,
    /// Scroll came back into the region from beyond its end.
    EnterBack,
}

/// Turns raw scroll offsets into region progress and boundary events.
///
/// The region starts when the element's top reaches the viewport top and ends when its bottom
/// reaches the viewport bottom, so `progress = (scroll - top) / (height - viewport_height)`.
#[derive(Clone, Debug)]
pub struct RegionTracker {
    geometry: RegionGeometry,
    viewport_height: f64,
    progress: Option<f64>,
    beyond_end: bool,
}

impl RegionTracker {
    /// Tracker for `geometry` seen through a viewport `viewport_height` tall.
    pub fn new(geometry: RegionGeometry, viewport_height: f64) -> ScrollframeResult<Self> {
        geometry.validate()?;
        Ok(Self {
            geometry,
            viewport_height,
            progress: None,
            beyond_end: false,
        })
    }

    /// Region geometry.
    pub fn geometry(&self) -> RegionGeometry {
        self.geometry
    }

    /// Scroll offset at which progress reaches 1.
    pub fn end(&self) -> f64 {
        self.geometry.top + self.geometry.height - self.viewport_height
    }

    /// Update the viewport height (after a resize). Takes effect on the next scroll.
    pub fn set_viewport_height(&mut self, height: f64) {
        self.viewport_height = height;
    }

    /// Progress at `scroll`, clamped to `[0, 1]`.
    pub fn progress_at(&self, scroll: f64) -> f64 {
        let start = self.geometry.top;
        let span = self.end() - start;
        if span <= 0.0 {
            return if scroll >= start { 1.0 } else { 0.0 };
        }
        clamp01((scroll - start) / span)
    }

    /// Last reported progress, if any scroll was seen.
    pub fn progress(&self) -> Option<f64> {
        self.progress
    }

    /// Feed a scroll offset; returns the events it produces, in delivery order.
    pub fn scroll_to(&mut self, scroll: f64) -> Vec<RegionEvent> {
        let mut events = Vec::with_capacity(2);
        let p = self.progress_at(scroll);
        let beyond = scroll > self.end();

        if !beyond && self.beyond_end {
            events.push(RegionEvent::EnterBack);
        }
        if self.progress != Some(p) {
            self.progress = Some(p);
            events.push(RegionEvent::Update(p));
        }
        if beyond && !self.beyond_end {
            events.push(RegionEvent::Leave);
        }
        self.beyond_end = beyond;
        events
    }
}

#[cfg(test)]
#[path = "../../tests/unit/drive/region.rs"]
mod tests;
