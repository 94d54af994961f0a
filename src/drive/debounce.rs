use std::time::{Duration, Instant};

/// Trailing-edge debounce: a value fires once no newer value arrived for `wait`.
#[derive(Clone, Debug)]
pub struct Debouncer<T> {
    wait: Duration,
    pending: Option<(T, Instant)>,
}

impl<T> Debouncer<T> {
    /// Debouncer with quiet period `wait`.
    pub fn new(wait: Duration) -> Self {
        Self {
            wait,
            pending: None,
        }
    }

    /// Quiet period.
    pub fn wait(&self) -> Duration {
        self.wait
    }

    /// Replace the pending value and restart the quiet period at `now`.
    pub fn push(&mut self, value: T, now: Instant) {
        self.pending = Some((value, now));
    }

    /// Take the pending value if its quiet period has elapsed by `now`.
    pub fn poll(&mut self, now: Instant) -> Option<T> {
        match &self.pending {
            Some((_, at)) if now.saturating_duration_since(*at) >= self.wait => {
                self.pending.take().map(|(v, _)| v)
            }
            _ => None,
        }
    }

    /// Whether a value is waiting.
    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/drive/debounce.rs"]
mod tests;
