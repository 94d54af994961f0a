use std::collections::BTreeSet;
use std::sync::Arc;
use std::time::Duration;

use super::*;

struct ParitySource;

impl FrameSource for ParitySource {
    fn load(&self, rel_path: &str) -> ScrollframeResult<PreparedFrame> {
        if rel_path.ends_with("odd") {
            return Err(ScrollframeError::load(format!("no such frame {rel_path}")));
        }
        Ok(PreparedFrame {
            width: 2,
            height: 1,
            rgba8_premul: Arc::new(vec![0; 8]),
        })
    }
}

struct StallingSource;

impl FrameSource for StallingSource {
    fn load(&self, _rel_path: &str) -> ScrollframeResult<PreparedFrame> {
        std::thread::sleep(Duration::from_millis(400));
        Err(ScrollframeError::load("stalled"))
    }
}

#[test]
fn every_request_settles_exactly_once() {
    let requests: Vec<_> = (0..16u32)
        .map(|i| {
            let kind = if i % 2 == 0 { "even" } else { "odd" };
            (FrameIndex(i), format!("{i}-{kind}"))
        })
        .collect();
    let opts = LoadOpts {
        threads: Some(4),
        timeout: None,
    };
    let pending = PendingLoads::spawn(Arc::new(ParitySource), requests, &opts).unwrap();
    assert_eq!(pending.issued(), 16);

    let mut seen = BTreeSet::new();
    let mut failures = 0;
    while let Some(ev) = pending.next_blocking() {
        assert!(seen.insert(ev.index), "index {} settled twice", ev.index);
        if ev.outcome.is_err() {
            failures += 1;
        }
        if seen.len() == 16 {
            break;
        }
    }
    assert_eq!(seen.len(), 16);
    assert_eq!(failures, 8);
}

#[test]
fn zero_threads_is_rejected() {
    let opts = LoadOpts {
        threads: Some(0),
        timeout: None,
    };
    assert!(PendingLoads::spawn(Arc::new(ParitySource), vec![], &opts).is_err());
}

#[test]
fn blocking_wait_returns_at_deadline() {
    let opts = LoadOpts {
        threads: Some(1),
        timeout: Some(Duration::from_millis(20)),
    };
    let pending = PendingLoads::spawn(
        Arc::new(StallingSource),
        vec![(FrameIndex(0), "x".to_string())],
        &opts,
    )
    .unwrap();
    assert!(pending.deadline().is_some());
    assert!(pending.next_blocking().is_none());
    assert!(pending.expired(std::time::Instant::now()));
}
