use super::*;

fn intro_range() -> ActiveRange {
    ActiveRange::to_end(FrameIndex(5), 68).unwrap()
}

#[test]
fn progress_endpoints_and_midpoint() {
    let r = intro_range();
    assert_eq!(map_progress_to_frame(r, 0.0), FrameIndex(5));
    assert_eq!(map_progress_to_frame(r, 1.0), FrameIndex(67));
    assert_eq!(map_progress_to_frame(r, 0.5), FrameIndex(36));
}

#[test]
fn progress_rounds_to_nearest_frame() {
    let r = ActiveRange::to_end(FrameIndex(0), 11).unwrap();
    assert_eq!(map_progress_to_frame(r, 0.04), FrameIndex(0));
    assert_eq!(map_progress_to_frame(r, 0.06), FrameIndex(1));
    assert_eq!(map_progress_to_frame(r, 0.94), FrameIndex(9));
    assert_eq!(map_progress_to_frame(r, 0.96), FrameIndex(10));
}

#[test]
fn out_of_range_progress_clamps() {
    let r = intro_range();
    assert_eq!(map_progress_to_frame(r, -0.2), FrameIndex(5));
    assert_eq!(map_progress_to_frame(r, 1.3), FrameIndex(67));
    assert_eq!(map_progress_to_frame(r, f64::NAN), FrameIndex(5));
    assert_eq!(map_progress_to_frame(r, f64::INFINITY), FrameIndex(67));
}

#[test]
fn mapping_is_bounded_and_monotonic() {
    let r = intro_range();
    let mut prev = map_progress_to_frame(r, 0.0);
    for i in 0..=10_000 {
        let p = f64::from(i) / 10_000.0;
        let f = map_progress_to_frame(r, p);
        assert!(r.contains(f), "frame {f} outside range at p={p}");
        assert!(f >= prev, "mapping decreased at p={p}");
        prev = f;
    }
}

#[test]
fn single_frame_range_always_maps_to_it() {
    let r = ActiveRange::to_end(FrameIndex(0), 1).unwrap();
    for p in [0.0, 0.3, 1.0] {
        assert_eq!(map_progress_to_frame(r, p), FrameIndex(0));
    }
}

#[test]
fn overlay_fades_between_breakpoints() {
    assert_eq!(overlay_opacity(0.15), 1.0);
    assert!((overlay_opacity(0.25) - 0.5).abs() < 1e-9);
    assert_eq!(overlay_opacity(0.35), 0.0);
    assert_eq!(overlay_opacity(0.30), 0.0);
    assert!((overlay_opacity(0.20) - 1.0).abs() < 1e-9);
}

#[test]
fn overlay_state_hides_after_fade() {
    assert!(overlay_state(0.29).visible);
    assert!(!overlay_state(0.30).visible);
    assert!(!overlay_state(0.8).visible);
}

#[test]
fn scroll_hint_requires_loaded_and_early_progress() {
    assert!(scroll_hint_visible(0.0, true));
    assert!(scroll_hint_visible(0.05, true));
    assert!(!scroll_hint_visible(0.06, true));
    assert!(!scroll_hint_visible(0.0, false));
}
