use std::sync::{Arc, mpsc};
use std::time::{Duration, Instant};

use crate::assets::decode::PreparedFrame;
use crate::assets::source::FrameSource;
use crate::foundation::core::FrameIndex;
use crate::foundation::error::{ScrollframeError, ScrollframeResult};

/// One settled load request.
#[derive(Debug)]
pub struct LoadEvent {
    /// Index the request was tagged with.
    pub index: FrameIndex,
    /// Decoded frame, or why it is unavailable.
    pub outcome: ScrollframeResult<PreparedFrame>,
}

impl LoadEvent {
    /// Successful load.
    pub fn loaded(index: FrameIndex, frame: PreparedFrame) -> Self {
        Self {
            index,
            outcome: Ok(frame),
        }
    }

    /// Failed load.
    pub fn failed(index: FrameIndex, err: ScrollframeError) -> Self {
        Self {
            index,
            outcome: Err(err),
        }
    }
}

/// Loader fan-out controls.
#[derive(Clone, Debug, Default)]
pub struct LoadOpts {
    /// Worker thread count; `None` lets rayon decide.
    pub threads: Option<usize>,
    /// Requests still unsettled this long after issue are treated as failed.
    pub timeout: Option<Duration>,
}

/// Handle over in-flight frame loads.
///
/// Every request runs on a dedicated rayon pool and reports back over a channel, in whatever
/// order the loads finish. Requests are never cancelled; dropping the handle only stops anyone
/// from listening.
pub struct PendingLoads {
    rx: mpsc::Receiver<LoadEvent>,
    _pool: rayon::ThreadPool,
    issued: usize,
    deadline: Option<Instant>,
}

impl PendingLoads {
    /// Issue one load per `(index, path)` request.
    pub fn spawn(
        source: Arc<dyn FrameSource>,
        requests: Vec<(FrameIndex, String)>,
        opts: &LoadOpts,
    ) -> ScrollframeResult<Self> {
        let pool = build_thread_pool(opts.threads)?;
        let (tx, rx) = mpsc::channel::<LoadEvent>();
        let issued = requests.len();
        for (index, path) in requests {
            let tx = tx.clone();
            let source = Arc::clone(&source);
            pool.spawn(move || {
                let outcome = source.load(&path);
                // The receiver may be gone if the page stopped listening; the load still ran.
                let _ = tx.send(LoadEvent { index, outcome });
            });
        }
        Ok(Self {
            rx,
            _pool: pool,
            issued,
            deadline: opts.timeout.map(|t| Instant::now() + t),
        })
    }

    /// Number of requests issued.
    pub fn issued(&self) -> usize {
        self.issued
    }

    /// Point in time after which unsettled requests count as failed.
    pub fn deadline(&self) -> Option<Instant> {
        self.deadline
    }

    /// Whether the timeout (if any) has elapsed.
    pub fn expired(&self, now: Instant) -> bool {
        self.deadline.is_some_and(|d| now >= d)
    }

    /// Next settled load, without blocking.
    pub fn try_next(&self) -> Option<LoadEvent> {
        self.rx.try_recv().ok()
    }

    /// Next settled load, blocking until one arrives, the deadline passes, or all workers are done.
    pub fn next_blocking(&self) -> Option<LoadEvent> {
        match self.deadline {
            Some(deadline) => {
                let wait = deadline.saturating_duration_since(Instant::now());
                self.rx.recv_timeout(wait).ok()
            }
            None => self.rx.recv().ok(),
        }
    }
}

impl std::fmt::Debug for PendingLoads {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PendingLoads")
            .field("issued", &self.issued)
            .field("deadline", &self.deadline)
            .finish()
    }
}

fn build_thread_pool(threads: Option<usize>) -> ScrollframeResult<rayon::ThreadPool> {
    if let Some(n) = threads
        && n == 0
    {
        return Err(ScrollframeError::validation(
            "loader 'threads' must be >= 1 when set",
        ));
    }

    let mut builder = rayon::ThreadPoolBuilder::new().thread_name(|i| format!("frame-load-{i}"));
    if let Some(n) = threads {
        builder = builder.num_threads(n);
    }
    builder
        .build()
        .map_err(|e| ScrollframeError::load(format!("failed to build loader thread pool: {e}")))
}

#[cfg(test)]
#[path = "../../tests/unit/assets/loader.rs"]
mod tests;
