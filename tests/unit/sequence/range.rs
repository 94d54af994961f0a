use super::*;

#[test]
fn range_enforces_ordering_and_bounds() {
    assert!(ActiveRange::new(FrameIndex(0), FrameIndex(0), 1).is_ok());
    assert!(ActiveRange::new(FrameIndex(3), FrameIndex(2), 10).is_err());
    assert!(ActiveRange::new(FrameIndex(0), FrameIndex(10), 10).is_err());
    assert!(ActiveRange::new(FrameIndex(0), FrameIndex(0), 0).is_err());
}

#[test]
fn to_end_spans_to_final_frame() {
    let r = ActiveRange::to_end(FrameIndex(5), 68).unwrap();
    assert_eq!(r.start(), FrameIndex(5));
    assert_eq!(r.last(), FrameIndex(67));
    assert_eq!(r.span(), 62);
    assert!(ActiveRange::to_end(FrameIndex(68), 68).is_err());
    assert!(ActiveRange::to_end(FrameIndex(0), 0).is_err());
}

#[test]
fn contains_and_clamp_boundaries() {
    let r = ActiveRange::to_end(FrameIndex(5), 68).unwrap();
    assert!(!r.contains(FrameIndex(4)));
    assert!(r.contains(FrameIndex(5)));
    assert!(r.contains(FrameIndex(67)));
    assert!(!r.contains(FrameIndex(68)));
    assert_eq!(r.clamp(FrameIndex(0)), FrameIndex(5));
    assert_eq!(r.clamp(FrameIndex(90)), FrameIndex(67));
}
