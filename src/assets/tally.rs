use crate::foundation::core::FrameIndex;

/// Outcome of recording one settled load.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Settle {
    /// Counted; more loads outstanding.
    Counted,
    /// Counted, and this was the final outstanding load.
    Completed,
    /// The index had already settled (or is out of range); nothing changed.
    Ignored,
}

/// Completion counter over `N` load requests.
///
/// Success and failure both count. Each index counts at most once, so [`Settle::Completed`] is
/// reported exactly once no matter the arrival order or how many late duplicates show up.
#[derive(Clone, Debug)]
pub struct LoadTally {
    settled: Vec<bool>,
    count: usize,
    failed: usize,
}

impl LoadTally {
    /// Tally for `total` outstanding requests.
    pub fn new(total: u32) -> Self {
        Self {
            settled: vec![false; total as usize],
            count: 0,
            failed: 0,
        }
    }

    /// Record that `index` settled.
    pub fn settle(&mut self, index: FrameIndex, ok: bool) -> Settle {
        let Some(slot) = self.settled.get_mut(index.as_usize()) else {
            return Settle::Ignored;
        };
        if *slot {
            return Settle::Ignored;
        }
        *slot = true;
        self.count += 1;
        if !ok {
            self.failed += 1;
        }
        if self.is_complete() {
            Settle::Completed
        } else {
            Settle::Counted
        }
    }

    /// Indices that have not settled yet, ascending.
    pub fn pending(&self) -> Vec<FrameIndex> {
        self.settled
            .iter()
            .enumerate()
            .filter(|(_, s)| !**s)
            .map(|(i, _)| FrameIndex(i as u32))
            .collect()
    }

    /// Number of settled requests.
    pub fn settled(&self) -> usize {
        self.count
    }

    /// Number of settled requests that failed.
    pub fn failed(&self) -> usize {
        self.failed
    }

    /// Total number of requests.
    pub fn total(&self) -> usize {
        self.settled.len()
    }

    /// Whether every request has settled.
    pub fn is_complete(&self) -> bool {
        self.count == self.settled.len()
    }

    /// `round(settled / total * 100)`.
    pub fn percent(&self) -> u8 {
        if self.settled.is_empty() {
            return 100;
        }
        ((self.count as f64 / self.settled.len() as f64) * 100.0).round() as u8
    }
}

#[cfg(test)]
#[path = "../../tests/unit/assets/tally.rs"]
mod tests;
