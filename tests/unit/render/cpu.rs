use std::sync::Arc;

use super::*;
use crate::render::fit::cover_rect;

fn solid(w: u32, h: u32, rgba: [u8; 4]) -> PreparedFrame {
    let mut data = Vec::with_capacity((w * h * 4) as usize);
    for _ in 0..(w * h) {
        data.extend_from_slice(&rgba);
    }
    PreparedFrame {
        width: w,
        height: h,
        rgba8_premul: Arc::new(data),
    }
}

fn assert_px_close(actual: Option<[u8; 4]>, expected: [u8; 4]) {
    let actual = actual.expect("pixel inside surface");
    for (a, e) in actual.iter().zip(expected) {
        assert!(a.abs_diff(e) <= 2, "{actual:?} vs {expected:?}");
    }
}

#[test]
fn new_surface_is_transparent() {
    let s = CpuSurface::new(Viewport::new(8, 4).unwrap()).unwrap();
    let snap = s.snapshot();
    assert_eq!((snap.width, snap.height), (8, 4));
    assert!(snap.data.iter().all(|&b| b == 0));
}

#[test]
fn cover_draw_fills_the_surface() {
    let size = Viewport::new(32, 18).unwrap();
    let mut s = CpuSurface::new(size).unwrap();
    let frame = solid(8, 6, [200, 10, 10, 255]);
    s.draw_frame(&frame, cover_rect(8, 6, size)).unwrap();

    let snap = s.snapshot();
    assert_px_close(snap.pixel(16, 9), [200, 10, 10, 255]);
    assert_px_close(snap.pixel(1, 1), [200, 10, 10, 255]);
    assert_px_close(snap.pixel(30, 16), [200, 10, 10, 255]);
}

#[test]
fn clear_resets_to_transparent() {
    let size = Viewport::new(8, 8).unwrap();
    let mut s = CpuSurface::new(size).unwrap();
    s.draw_frame(&solid(2, 2, [0, 0, 255, 255]), size.rect()).unwrap();
    assert_px_close(s.snapshot().pixel(4, 4), [0, 0, 255, 255]);
    s.clear();
    assert!(s.snapshot().data.iter().all(|&b| b == 0));
}

#[test]
fn resize_changes_snapshot_dimensions() {
    let mut s = CpuSurface::new(Viewport::new(8, 8).unwrap()).unwrap();
    s.resize(Viewport::new(12, 5).unwrap()).unwrap();
    assert_eq!(s.size(), Viewport::new(12, 5).unwrap());
    let snap = s.snapshot();
    assert_eq!((snap.width, snap.height), (12, 5));
    assert_eq!(snap.data.len(), 12 * 5 * 4);

    let bad = Viewport {
        width: 0,
        height: 3,
    };
    assert!(s.resize(bad).is_err());
    assert_eq!(s.size(), Viewport::new(12, 5).unwrap());
}

#[test]
fn mismatched_frame_bytes_are_rejected() {
    let mut s = CpuSurface::new(Viewport::new(4, 4).unwrap()).unwrap();
    let frame = PreparedFrame {
        width: 2,
        height: 2,
        rgba8_premul: Arc::new(vec![0; 3]),
    };
    assert!(s.draw_frame(&frame, Rect::new(0.0, 0.0, 4.0, 4.0)).is_err());
}

#[test]
fn prepare_frame_rejects_oversized_frames_without_touching_pixels() {
    let mut s = CpuSurface::new(Viewport::new(4, 4).unwrap()).unwrap();
    let blue = solid(2, 2, [0, 0, 255, 255]);
    s.prepare_frame(&blue).unwrap();
    s.draw_frame(&blue, cover_rect(2, 2, s.size())).unwrap();

    let too_tall = PreparedFrame {
        width: 1,
        height: 70_000,
        rgba8_premul: Arc::new(vec![255; 70_000 * 4]),
    };
    assert!(s.prepare_frame(&too_tall).is_err());
    assert_px_close(s.snapshot().pixel(2, 2), [0, 0, 255, 255]);
}
