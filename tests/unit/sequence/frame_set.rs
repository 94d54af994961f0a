use std::sync::Arc;

use super::*;

fn solid(w: u32, h: u32) -> PreparedFrame {
    PreparedFrame {
        width: w,
        height: h,
        rgba8_premul: Arc::new(vec![255; (w * h * 4) as usize]),
    }
}

#[test]
fn new_set_is_empty_with_range_to_end() {
    let set = FrameSet::new(68, FrameIndex(5)).unwrap();
    assert_eq!(set.frame_count(), 68);
    assert_eq!(set.available(), 0);
    assert_eq!(set.range().last(), FrameIndex(67));
    assert_eq!(
        set.get(FrameIndex(5)).unwrap_err(),
        FrameUnavailable {
            index: FrameIndex(5)
        }
    );
}

#[test]
fn insert_fills_slot_once() {
    let mut set = FrameSet::new(3, FrameIndex(0)).unwrap();
    set.insert(FrameIndex(1), solid(2, 2)).unwrap();
    set.insert(FrameIndex(1), solid(4, 4)).unwrap();
    assert_eq!(set.get(FrameIndex(1)).unwrap().width, 2);
    assert_eq!(set.available(), 1);
}

#[test]
fn insert_out_of_bounds_is_rejected_and_get_is_unavailable() {
    let mut set = FrameSet::new(3, FrameIndex(0)).unwrap();
    assert!(set.insert(FrameIndex(3), solid(1, 1)).is_err());
    assert!(set.get(FrameIndex(9)).is_err());
}

#[test]
fn start_must_fall_inside_the_set() {
    assert!(FrameSet::new(3, FrameIndex(3)).is_err());
    assert!(FrameSet::new(0, FrameIndex(0)).is_err());
}

#[test]
fn frame_count_is_capped() {
    assert!(FrameSet::new(FrameSet::MAX_FRAMES, FrameIndex(0)).is_ok());
    let err = FrameSet::new(4_000_000_000, FrameIndex(0)).unwrap_err();
    assert!(err.to_string().contains("exceeds"));
}
